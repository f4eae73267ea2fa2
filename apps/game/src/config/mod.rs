//! Runtime configuration read from the environment.

pub mod game;

pub use game::GameConfig;
