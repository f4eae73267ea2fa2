//! Nomination: a 3-6 player, six-round trick-taking card game with
//! bidding, a trump suit, and a bid-accuracy scoring bonus.
//!
//! The `domain` module holds the pure rules engine; `services::game_flow`
//! drives it phase by phase through the blocking `prompt` seam.

pub mod ai;
pub mod config;
pub mod domain;
pub mod error;
pub mod errors;
pub mod prompt;
pub mod services;
pub mod telemetry;
