//! Game flow orchestration: drives the engine from player selection to
//! game over.
//!
//! One `GameFlow` instance exclusively owns all game state for the
//! lifetime of one game. Phases are dispatched with an exhaustive match
//! over the closed `Phase` enum; the loop halts by not dispatching once
//! `GameOver` is reached.

mod player_actions;
mod round_lifecycle;

use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{debug, info};

use crate::domain::players::register_players;
use crate::domain::state::{GameState, Phase};
use crate::error::AppError;
use crate::errors::domain::DomainError;
use crate::prompt::GamePrompt;

pub struct GameFlow<P> {
    state: GameState,
    prompt: P,
    /// Sole source of nondeterminism: shuffles and tie-breaks.
    rng: StdRng,
}

impl<P: GamePrompt> GameFlow<P> {
    /// A fixed seed reproduces the whole game (deals and tie-breaks).
    pub fn new(prompt: P, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self {
            state: GameState::new(),
            prompt,
            rng,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Run the game to completion.
    pub fn run(&mut self) -> Result<(), AppError> {
        loop {
            debug!(
                phase = self.state.phase.name(),
                round = self.state.round_no,
                "Dispatching phase"
            );
            match self.state.phase {
                Phase::PlayerSelection => self.player_selection()?,
                Phase::HandAssignment => self.hand_assignment()?,
                Phase::TrumpSelection => self.trump_selection()?,
                Phase::Bidding => self.bidding()?,
                Phase::Playing => self.playing()?,
                Phase::Scoring => self.scoring()?,
                Phase::TrumpRedeciding => self.trump_redeciding()?,
                Phase::GameOver => break,
            }
        }
        Ok(())
    }

    fn player_selection(&mut self) -> Result<(), AppError> {
        loop {
            let specs = self.prompt.request_players()?;
            match register_players(&mut self.state, specs) {
                Ok(()) => break,
                Err(err) => self.recover(err)?,
            }
        }
        info!(players = self.state.player_count(), "Players registered");
        Ok(())
    }

    /// Surface a recoverable validation failure to the player and carry
    /// on (the caller re-prompts); anything else aborts the game.
    fn recover(&mut self, err: DomainError) -> Result<(), AppError> {
        if err.is_recoverable() {
            debug!(error = %err, "Re-prompting after validation failure");
            self.prompt.notify(&format!("INVALID: {}", err.detail()));
            Ok(())
        } else {
            Err(err.into())
        }
    }
}
