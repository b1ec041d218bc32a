mod color;
mod r#move;
mod position;
mod role;
mod square;
mod zobrist;

pub use color::*;
pub use position::*;
pub use r#move::*;
pub use role::*;
pub use square::*;
pub use zobrist::*;
