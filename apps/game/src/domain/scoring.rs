//! Round-score tallies and the end-of-round bonus formula.

use crate::domain::state::{GameState, PlayerId};
use crate::errors::domain::DomainError;

/// Credit a trick to its winner's round tally.
pub fn record_trick_win(state: &mut GameState, who: PlayerId) {
    state.round.tricks_won[who as usize] += 1;
}

/// Points a seat earns for a finished round.
///
/// An exact bid earns `(bid + 10) * multiplier`, doubled when the bid was
/// the whole hand; a missed bid credits the raw tricks won with no bonus.
pub fn round_points(bid: u8, won: u8, hand_size: u8) -> i16 {
    if bid == won {
        let multiplier: i16 = if bid == hand_size { 2 } else { 1 };
        (i16::from(bid) + 10) * multiplier
    } else {
        i16::from(won)
    }
}

/// Fold the round into the cumulative totals.
pub fn finalize_round(state: &mut GameState) -> Result<(), DomainError> {
    let hand_size = state.hand_size()?;

    for seat in 0..state.player_count() {
        let won = state.round.tricks_won[seat];
        let bid = state.round.bids[seat].ok_or_else(|| {
            DomainError::invariant(format!(
                "seat {seat} has no bid at scoring time (round {})",
                state.round_no
            ))
        })?;
        state.scores_total[seat] += round_points(bid, won, hand_size);
    }
    Ok(())
}

/// Zero every seat's round trick count at round start.
/// Cumulative totals persist for the whole game; round counts do not.
pub fn reset_round_scores(state: &mut GameState) {
    for won in &mut state.round.tricks_won {
        *won = 0;
    }
}
