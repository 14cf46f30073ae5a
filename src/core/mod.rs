mod board;
mod game;
mod generator;
mod lines;
mod piece;
mod rules;
mod scoring;
mod shapes;
mod timing;

pub use board::Cell;
pub use game::{Controls, Game, GameEvent};
pub use generator::PieceGenerator;
pub use rules::Rules;
pub use scoring::Progress;
pub use shapes::{PieceType, Rgb};
pub use timing::Shift;
