mod board;
mod common;
mod config;
mod estimator;
mod game;
mod grid;
mod logging;
mod player;
mod player_ai;
mod ship;
mod strategy;
mod targeting;

pub use board::*;
pub use common::*;
pub use config::*;
pub use estimator::*;
pub use game::*;
pub use grid::*;
pub use logging::init_logging;
pub use player::*;
pub use player_ai::*;
pub use ship::*;
pub use strategy::*;
pub use targeting::*;
