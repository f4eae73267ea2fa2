//! The I/O seam between the engine and whoever supplies moves.
//!
//! The game flow only ever consumes validated domain values through
//! [`GamePrompt`]; raw text handling lives entirely in the console
//! implementation. All calls are blocking: the engine does not advance
//! until a value comes back.

pub mod console;
pub mod format;

use crate::domain::bidding::Bid;
use crate::domain::players::PlayerSpec;
use crate::domain::{Card, Suit};
use crate::error::AppError;

/// How the round-1 trump gets fixed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InitialTrump {
    /// Peek the top card of the undealt deck; the deck is not consumed.
    Automatic,
    /// Draw this exact card from the undealt deck; the deck loses it.
    Manual(Card),
}

/// Everything a bidder may see at their decision point.
#[derive(Debug)]
pub struct BidRequest<'a> {
    pub player: &'a str,
    pub round_no: u8,
    pub hand_size: u8,
    pub hand: &'a [Card],
    pub legal: &'a [Bid],
    /// The barred amount, present only for the handicapped seat.
    pub forbidden: Option<u8>,
    /// Running bids in seating order; `None` seats have not bid yet.
    pub bids: &'a [(String, Option<u8>)],
}

/// Everything a player may see when choosing a card.
#[derive(Debug)]
pub struct PlayRequest<'a> {
    pub player: &'a str,
    pub trump: Suit,
    pub hand: &'a [Card],
    pub legal: &'a [Card],
    /// The current trick's plays in play order.
    pub stack: &'a [Card],
    pub round_scores: &'a [(String, u8)],
}

/// Context for the between-rounds trump re-decision.
#[derive(Debug)]
pub struct TrumpRequest<'a> {
    pub player: &'a str,
    pub current: Suit,
}

/// Blocking move supplier for one game.
///
/// Implementations return domain values; the engine still validates every
/// answer and asks again on recoverable failures, so a prompt does not
/// need to enforce game rules itself.
pub trait GamePrompt {
    /// Collect 3-6 seats (names and drive mode) for a new game.
    fn request_players(&mut self) -> Result<Vec<PlayerSpec>, AppError>;

    /// Decide how the round-1 trump is fixed.
    fn request_initial_trump(&mut self) -> Result<InitialTrump, AppError>;

    fn request_bid(&mut self, req: &BidRequest<'_>) -> Result<u8, AppError>;

    fn request_play(&mut self, req: &PlayRequest<'_>) -> Result<Card, AppError>;

    fn request_trump_choice(&mut self, req: &TrumpRequest<'_>) -> Result<Suit, AppError>;

    /// Fire-and-forget display.
    fn notify(&mut self, message: &str);
}
