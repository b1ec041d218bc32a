use lib::chess::{Color, Move, Position, Role, Square, Zobrist};
use lib::search::{Bound, Continuation, Gravity, Heuristics, Stack};
use lib::util::Integer;
use proptest::{prelude::*, sample::select};
use rayon::prelude::*;
use std::sync::Once;
use test_strategy::proptest;

/// A minimal board that knows just enough to be scored.
#[derive(Debug, Clone)]
struct Board {
    turn: Color,
    roles: [Option<Role>; 64],
    threats: u64,
    keys: [Zobrist; 4],
}

impl Board {
    /// Every square holds a knight, save for a few landmarks.
    fn new(turn: Color, keys: [Zobrist; 4]) -> Self {
        let mut roles = [Some(Role::Knight); 64];
        roles[Square::E2.index()] = Some(Role::Pawn);
        roles[Square::D1.index()] = Some(Role::Queen);
        roles[Square::E1.index()] = Some(Role::King);
        roles[Square::H8.index()] = None;

        Board {
            turn,
            roles,
            threats: 0,
            keys,
        }
    }
}

impl Position for Board {
    fn turn(&self) -> Color {
        self.turn
    }

    fn role_on(&self, sq: Square) -> Option<Role> {
        self.roles[sq.index()]
    }

    fn is_threatened(&self, sq: Square, by: Color) -> bool {
        by != self.turn && self.threats & (1 << sq.index()) != 0
    }

    fn pawns(&self) -> Zobrist {
        self.keys[0]
    }

    fn non_pawns(&self, side: Color) -> Zobrist {
        self.keys[1 + side.index()]
    }

    fn majors(&self) -> Zobrist {
        self.keys[3]
    }
}

fn init() {
    static TRACING: Once = Once::new();
    TRACING.call_once(|| {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_test_writer()
            .init();
    });
}

fn color() -> impl Strategy<Value = Color> {
    select(vec![Color::White, Color::Black])
}

fn bound() -> impl Strategy<Value = Bound> {
    (Bound::MIN..=Bound::MAX).prop_map(Bound::new)
}

fn keys() -> impl Strategy<Value = [Zobrist; 4]> {
    any::<[u64; 4]>().prop_map(|ks| ks.map(Zobrist::new))
}

/// Moves between occupied squares that never land on a king.
///
/// Scorable both as quiet moves and as captures.
fn quiet() -> impl Strategy<Value = Move> {
    (Square::MIN..=Square::MAX, Square::MIN..=Square::MAX)
        .prop_filter("distinct squares", |(a, b)| a != b)
        .prop_map(|(a, b)| Move::new(Square::new(a), Square::new(b)))
        .prop_filter("origin is occupied", |m| m.whence() != Square::H8)
        .prop_filter("destination is occupied", |m| m.whither() != Square::H8)
        .prop_filter("destination is not a king", |m| m.whither() != Square::E1)
}

#[proptest]
fn generated_moves_capture_something_other_than_a_king(
    #[strategy(color())] c: Color,
    #[strategy(quiet())] m: Move,
    #[strategy(-16384i32..=16384)] b: i32,
) {
    init();

    let h = Heuristics::new();
    let pos = Board::new(c, [Zobrist::default(); 4]);
    assert!(pos.role_on(m.whence()).is_some());
    assert!(matches!(pos.role_on(m.whither()), Some(r) if r != Role::King));

    h.update_capture(&pos, m, b);
    assert_eq!(h.capture(&pos, m), b);
}

#[proptest]
fn reset_zeroes_every_query(
    #[strategy(color())] c: Color,
    #[strategy(keys())] keys: [Zobrist; 4],
    #[strategy(quiet())] m: Move,
    #[strategy(quiet())] n: Move,
    #[strategy(1usize..Stack::CAPACITY)] ply: usize,
    #[strategy(-16384i32..=16384)] b: i32,
    #[strategy(0i32..64)] depth: i32,
    #[strategy(-2000i32..2000)] diff: i32,
    #[strategy(bound())] bound: Bound,
) {
    init();

    let mut h = Heuristics::new();
    let pos = Board::new(c, keys);

    {
        let mut stack = Stack::new();
        stack.set(ply - 1, Some(h.reply(&pos, m)));
        h.update_quiet_stats(&pos, n, ply, &stack, b);
        h.update_capture(&pos, n, b);
        h.update_correction(&pos, depth, diff, bound);
    }

    h.reset();

    let mut stack = Stack::new();
    stack.set(ply - 1, Some(h.reply(&pos, m)));
    assert_eq!(h.quiet(&pos, n), 0);
    assert_eq!(h.continuation(&pos, n, ply, &stack), 0);
    assert_eq!(h.capture(&pos, n), 0);

    for bound in Bound::iter() {
        assert_eq!(h.correction(&pos, bound), 0);
    }
}

#[test]
fn quiet_update_follows_saturating_formula() {
    init();

    let h = Heuristics::new();
    let pos = Board::new(Color::White, [Zobrist::default(); 4]);
    let m = Move::new(Square::G1, Square::F3);

    h.update_quiet(&pos, m, 1000);
    assert_eq!(h.quiet(&pos, m), 1000);
    h.update_quiet(&pos, m, 1000);
    assert_eq!(h.quiet(&pos, m), 1939);
}

#[test]
fn capture_update_follows_saturating_formula() {
    init();

    let h = Heuristics::new();
    let pos = Board::new(Color::Black, [Zobrist::default(); 4]);
    let m = Move::new(Square::D1, Square::E2);

    h.update_capture(&pos, m, 1000);
    assert_eq!(h.capture(&pos, m), 1000);
    h.update_capture(&pos, m, 1000);
    assert_eq!(h.capture(&pos, m), 1939);
}

#[proptest]
fn quiet_score_depends_on_exposure(
    #[strategy(color())] c: Color,
    #[strategy(quiet())] m: Move,
    #[strategy(1i32..=16384)] b: i32,
) {
    init();

    let h = Heuristics::new();
    let safe = Board::new(c, [Zobrist::default(); 4]);
    let mut exposed = safe.clone();
    exposed.threats = 1 << m.whither().index();

    h.update_quiet(&safe, m, b);
    assert_eq!(h.quiet(&safe, m), b);
    assert_eq!(h.quiet(&exposed, m), 0);
}

#[proptest]
fn continuation_never_leaves_twice_the_limit(
    #[strategy(color())] c: Color,
    #[strategy(quiet())] m: Move,
    #[strategy(quiet())] n: Move,
    #[strategy(6usize..Stack::CAPACITY)] ply: usize,
    #[strategy(1usize..200)] times: usize,
    #[strategy(16384i32..=i32::MAX / 2)] b: i32,
) {
    init();

    let h = Heuristics::new();
    let pos = Board::new(c, [Zobrist::default(); 4]);
    let mut stack = Stack::new();
    for offset in Continuation::LOOKBACK {
        stack.set(ply - offset, Some(h.reply(&pos, m)));
    }

    for _ in 0..times {
        h.update_continuation(&pos, n, ply, &stack, b);
        assert!((-32768..=32768).contains(&h.reply(&pos, m).get(&pos, n)));
    }
}

#[test]
fn bound_classification_is_exact_at_the_edges() {
    let expected = [
        (-420, Bound::FailVeryLow),
        (-419, Bound::FailLow),
        (0, Bound::FailLow),
        (1, Bound::Exact),
        (99, Bound::Exact),
        (100, Bound::FailHigh),
        (519, Bound::FailHigh),
        (520, Bound::FailVeryHigh),
    ];

    let h = Heuristics::new();
    for (eval, bound) in expected {
        assert_eq!(Bound::classify(eval, 0, 100), bound, "eval={eval}");
        assert_eq!(h.bound(eval, 0, 100), bound, "eval={eval}");
    }
}

#[test]
fn single_correction_update_is_deterministic() {
    init();

    let h = Heuristics::new();
    let pos = Board::new(Color::White, [11, 22, 33, 44].map(Zobrist::new));

    h.update_correction(&pos, 5, 50, Bound::Exact);
    assert_eq!(h.correction(&pos, Bound::Exact), 7);
    assert_eq!(h.correction(&pos, Bound::FailLow), 4 * 300 / 256);
    assert_eq!(h.correction(&pos, Bound::FailHigh), 4 * 300 / 256);
    assert_eq!(h.correction(&pos, Bound::FailVeryLow), 0);
    assert_eq!(h.correction(&pos, Bound::FailVeryHigh), 0);
}

#[proptest]
fn colliding_keys_share_correction_buckets(
    #[strategy(color())] c: Color,
    #[strategy(keys())] keys: [Zobrist; 4],
    #[strategy(1u64..1000)] k: u64,
) {
    init();

    let h = Heuristics::new();
    let pos = Board::new(c, keys);
    let alias = Board::new(c, keys.map(|z| Zobrist::new(z.get().wrapping_add(k * 16384))));

    h.update_correction(&pos, 5, 50, Bound::Exact);
    assert_eq!(h.correction(&alias, Bound::Exact), 7);
}

#[proptest]
fn each_sub_table_aliases_independently(
    #[strategy(color())] c: Color,
    #[strategy(0usize..4)] i: usize,
) {
    init();

    let h = Heuristics::new();
    let pos = Board::new(c, [1, 2, 3, 4].map(Zobrist::new));

    let mut keys = [5, 6, 7, 8].map(Zobrist::new);
    keys[i] = pos.keys[i];
    let other = Board::new(c, keys);

    h.update_correction(&pos, 5, 50, Bound::Exact);

    // A single shared slot of 450 contributes 450 / 256.
    assert_eq!(h.correction(&other, Bound::Exact), 1);
}

#[proptest]
fn reset_is_idempotent(
    #[strategy(color())] c: Color,
    #[strategy(keys())] keys: [Zobrist; 4],
    #[strategy(quiet())] m: Move,
    #[strategy(-16384i32..=16384)] b: i32,
    #[strategy(bound())] bound: Bound,
) {
    init();

    let pos = Board::new(c, keys);

    let mut once = Heuristics::new();
    once.update_quiet(&pos, m, b);
    once.update_capture(&pos, m, b);
    once.update_correction(&pos, 3, b, bound);
    once.reset();

    let mut twice = Heuristics::new();
    twice.update_quiet(&pos, m, b);
    twice.update_capture(&pos, m, b);
    twice.update_correction(&pos, 3, b, bound);
    twice.reset();
    twice.reset();

    assert_eq!(once.quiet(&pos, m), twice.quiet(&pos, m));
    assert_eq!(once.capture(&pos, m), twice.capture(&pos, m));
    for bound in Bound::iter() {
        assert_eq!(once.correction(&pos, bound), twice.correction(&pos, bound));
    }
}

#[test]
fn replies_cached_along_a_line_feed_deeper_plies() {
    init();

    let h = Heuristics::new();
    let pos = Board::new(Color::White, [Zobrist::default(); 4]);
    let line = [
        Move::new(Square::B1, Square::C3),
        Move::new(Square::G8, Square::F6),
        Move::new(Square::G1, Square::F3),
        Move::new(Square::B8, Square::C6),
        Move::new(Square::F1, Square::C4),
        Move::new(Square::F8, Square::C5),
        Move::new(Square::E2, Square::E4),
    ];

    let mut stack = Stack::new();
    for (ply, &m) in line.iter().enumerate() {
        stack.set(ply, Some(h.reply(&pos, m)));
    }

    let ply = line.len();
    let m = Move::new(Square::A2, Square::A4);
    assert_eq!(stack.ancestors(ply).count(), 4);

    h.update_continuation(&pos, m, ply, &stack, 100);
    assert_eq!(h.continuation(&pos, m, ply, &stack), 400);

    for offset in Continuation::LOOKBACK {
        let played = line[ply - offset];
        assert_eq!(h.reply(&pos, played).get(&pos, m), 100);
    }

    for offset in [3, 5, 7] {
        let skipped = line[ply - offset];
        assert_eq!(h.reply(&pos, skipped).get(&pos, m), 0);
    }
}

#[test]
fn missing_frames_contribute_nothing() {
    init();

    let h = Heuristics::new();
    let pos = Board::new(Color::Black, [Zobrist::default(); 4]);
    let m = Move::new(Square::C7, Square::C5);

    let mut stack = Stack::new();
    stack.set(2, Some(h.reply(&pos, Move::new(Square::B1, Square::C3))));

    h.update_continuation(&pos, m, 3, &stack, 500);
    assert_eq!(h.continuation(&pos, m, 3, &stack), 500);

    // Nothing was played at ply 1, offsets 4 and 6 reach below the root.
    assert_eq!(stack.ancestors(3).count(), 1);
    assert_eq!(h.continuation(&pos, m, 0, &stack), 0);
}

#[test]
fn independent_stores_run_in_parallel() {
    init();

    let pos = Board::new(Color::White, [7, 8, 9, 10].map(Zobrist::new));
    let m = Move::new(Square::G1, Square::F3);

    let scores: Vec<_> = (1..=8)
        .into_par_iter()
        .map(|i| {
            let h = Heuristics::new();
            for _ in 0..i {
                h.update_quiet(&pos, m, 1000);
            }

            h.update_correction(&pos, 5, 50, Bound::Exact);
            (h.quiet(&pos, m), h.correction(&pos, Bound::Exact))
        })
        .collect();

    let mut expected = 0;
    for (i, (quiet, correction)) in scores.into_iter().enumerate() {
        expected += 1000 - expected * 1000 / 16384;
        assert_eq!(quiet, expected, "store {i}");
        assert_eq!(correction, 7, "store {i}");
    }
}
