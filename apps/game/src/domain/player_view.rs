//! Render views of game state for the I/O layer.
//!
//! Everything here is read-only and keyed by player name, ready for the
//! prompt layer to format without touching engine internals.

use serde::Serialize;

use crate::domain::state::{GameState, PlayerId};
use crate::domain::Card;

/// A player's hand as seen from the shared display: remote seats show an
/// opaque placeholder count instead of their cards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum HandView {
    Visible(Vec<Card>),
    Hidden(usize),
}

pub fn hand_view(state: &GameState, who: PlayerId) -> HandView {
    let hand = &state.hands[who as usize];
    if state.is_remote(who) {
        HandView::Hidden(hand.len())
    } else {
        HandView::Visible(hand.clone())
    }
}

/// Current bids in seating order; unresolved seats are `None`.
pub fn bids_view(state: &GameState) -> Vec<(String, Option<u8>)> {
    state
        .seating
        .iter()
        .map(|&p| (state.name(p).to_string(), state.round.bids[p as usize]))
        .collect()
}

/// The current trick's plays as an ordered card list.
pub fn stack_view(state: &GameState) -> Vec<Card> {
    state.round.trick_plays.iter().map(|&(_, c)| c).collect()
}

/// Tricks won this round, sorted descending.
pub fn round_scoreboard(state: &GameState) -> Vec<(String, u8)> {
    let mut rows: Vec<(String, u8)> = state
        .players
        .iter()
        .enumerate()
        .map(|(seat, p)| (p.name.clone(), state.round.tricks_won[seat]))
        .collect();
    rows.sort_by(|a, b| b.1.cmp(&a.1));
    rows
}

/// Cumulative totals, sorted descending.
pub fn total_scoreboard(state: &GameState) -> Vec<(String, i16)> {
    let mut rows: Vec<(String, i16)> = state
        .players
        .iter()
        .enumerate()
        .map(|(seat, p)| (p.name.clone(), state.scores_total[seat]))
        .collect();
    rows.sort_by(|a, b| b.1.cmp(&a.1));
    rows
}
