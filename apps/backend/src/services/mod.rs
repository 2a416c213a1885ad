pub mod game_factory;
pub mod games;

pub use game_factory::{CreatedGame, GameFactory};
pub use games::{GameService, GuessReport, RandomGame};
