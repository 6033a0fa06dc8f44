mod matrix_game;
pub use self::matrix_game::*;

mod tableau;
pub use self::tableau::*;

mod pivot;
pub use self::pivot::*;

mod simplex;
pub use self::simplex::*;

mod solution;
pub use self::solution::*;

mod game_error;
pub use game_error::GameError;
