//! The locally-automatic seat: always takes the first legal option.
//!
//! Choices come from the engine's legal-move views, so an automatic seat
//! can never submit an invalid move.

use crate::domain::bidding::Bid;
use crate::domain::{Card, Suit};

/// First legal bid, lowest first.
pub fn choose_bid(legal: &[Bid]) -> Option<Bid> {
    legal.first().copied()
}

/// First legal card in hand order.
pub fn choose_play(legal: &[Card]) -> Option<Card> {
    legal.first().copied()
}

/// Automatic seats keep the standing trump when re-deciding.
pub fn choose_trump(current: Suit) -> Suit {
    current
}
