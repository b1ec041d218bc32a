/// Chess domain types.
pub mod chess;
/// Heuristic statistics for adversarial search.
pub mod search;
/// Assorted utilities.
pub mod util;
