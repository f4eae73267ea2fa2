//! Test-only game state helpers for domain unit tests.

use crate::domain::players::{register_players, PlayerSpec};
use crate::domain::state::{GameState, Phase};

/// Build a mid-game `GameState` with `player_count` local seats, the given
/// round number (which fixes the hand size), and the last seat in
/// registration order handicapped.
pub fn init_round(player_count: usize, round_no: u8, phase: Phase) -> GameState {
    let specs: Vec<PlayerSpec> = (0..player_count)
        .map(|i| PlayerSpec {
            name: format!("P{}", i + 1),
            is_remote: false,
        })
        .collect();

    let mut state = GameState::new();
    register_players(&mut state, specs).expect("valid player count");
    state.round_no = round_no;
    state.last_bidder = state.seating.last().copied();
    state.phase = phase;
    state
}
