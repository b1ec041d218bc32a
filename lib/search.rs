mod bound;
mod captures;
mod continuation;
mod correction;
mod gravity;
mod heuristics;
mod history;
mod options;
mod stack;

pub use bound::*;
pub use captures::*;
pub use continuation::*;
pub use correction::*;
pub use gravity::*;
pub use heuristics::*;
pub use history::*;
pub use options::*;
pub use stack::*;
