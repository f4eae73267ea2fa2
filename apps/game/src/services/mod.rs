//! Orchestration services built on the domain layer.

pub mod game_flow;
