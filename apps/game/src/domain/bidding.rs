//! Bid collection and the last-bidder forbidden-total rule.
//!
//! Exactly one seat per round (the last to act) is barred from making the
//! bids sum to the hand size, so the round can never be "exactly
//! satisfied" in aggregate: at least one seat must mis-bid.

use crate::domain::rules::valid_bid_range;
use crate::domain::state::{GameState, PlayerId};
use crate::errors::domain::{DomainError, ValidationKind};

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Bid(pub u8);

/// The bid value the handicapped seat may not choose.
///
/// `hand_size - sum(placed bids)` when non-negative; `None` once the
/// placed bids already exceed the hand size (every amount is then legal).
pub fn forbidden_total(bids: &[Option<u8>], hand_size: u8) -> Option<u8> {
    let placed: u32 = bids.iter().flatten().map(|&b| u32::from(b)).sum();
    let hand_size = u32::from(hand_size);
    if placed > hand_size {
        None
    } else {
        Some((hand_size - placed) as u8)
    }
}

/// Legal bids for a seat: the full `0..=hand_size` range, minus the
/// forbidden total when `who` is the handicapped seat.
pub fn legal_bids(state: &GameState, who: PlayerId) -> Vec<Bid> {
    let Ok(hand_size) = state.hand_size() else {
        return Vec::new();
    };
    let mut legal: Vec<Bid> = valid_bid_range(hand_size).map(Bid).collect();
    if state.last_bidder == Some(who) {
        if let Some(forbidden) = forbidden_total(&state.round.bids, hand_size) {
            legal.retain(|b| b.0 != forbidden);
        }
    }
    legal
}

/// Validate and record a seat's bid.
pub fn place_bid(state: &mut GameState, who: PlayerId, bid: Bid) -> Result<(), DomainError> {
    let hand_size = state.hand_size()?;

    if !valid_bid_range(hand_size).contains(&bid.0) {
        return Err(DomainError::validation(
            ValidationKind::InvalidBid,
            format!("bid {} is outside 0..={hand_size}", bid.0),
        ));
    }

    if state.round.bids[who as usize].is_some() {
        return Err(DomainError::validation(
            ValidationKind::InvalidBid,
            format!("{} has already bid this round", state.name(who)),
        ));
    }

    if state.last_bidder == Some(who) {
        if let Some(forbidden) = forbidden_total(&state.round.bids, hand_size) {
            if bid.0 == forbidden {
                return Err(DomainError::validation(
                    ValidationKind::InvalidBid,
                    format!(
                        "last bidder cannot bid {forbidden}: bids would total the hand size"
                    ),
                ));
            }
        }
    }

    state.round.bids[who as usize] = Some(bid.0);
    Ok(())
}

/// Clear every seat's bid back to the unset sentinel.
/// Called once per round before bidding starts.
pub fn reset_round_bids(state: &mut GameState) {
    for bid in &mut state.round.bids {
        *bid = None;
    }
}
