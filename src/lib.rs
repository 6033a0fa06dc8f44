//! Value and optimal mixed strategies of two-player zero-sum matrix games,
//! computed with the tableau simplex method.
pub mod console;

mod game;
pub use game::*;
