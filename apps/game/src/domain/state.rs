use crate::domain::players::PlayerProfile;
use crate::domain::rules::hand_size_for_round;
use crate::domain::{Card, Suit};
use crate::errors::domain::DomainError;

/// Seat index into the player registry.
pub type PlayerId = u8;

/// Overall game progression phases.
///
/// A closed enumeration dispatched with an exhaustive match: adding or
/// removing a phase is a compile-time-checked change.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Phase {
    /// Register 3-6 uniquely-named players.
    PlayerSelection,
    /// Rotate the dealer order, reset round state, deal a fresh deck.
    HandAssignment,
    /// Fix the round-1 trump from the undealt remainder of the deck.
    TrumpSelection,
    /// Collect one valid bid per seat; the last seat carries the handicap.
    Bidding,
    /// Play `hand_size` tricks, rotating the order to each winner.
    Playing,
    /// Apply the bid-accuracy bonus formula to cumulative totals.
    Scoring,
    /// The round's top scorer re-fixes trump for the next round.
    TrumpRedeciding,
    /// All six rounds complete.
    GameOver,
}

impl Phase {
    pub fn name(&self) -> &'static str {
        match self {
            Phase::PlayerSelection => "player_selection",
            Phase::HandAssignment => "hand_assignment",
            Phase::TrumpSelection => "trump_selection",
            Phase::Bidding => "bidding",
            Phase::Playing => "playing",
            Phase::Scoring => "scoring",
            Phase::TrumpRedeciding => "trump_redeciding",
            Phase::GameOver => "game_over",
        }
    }
}

/// Per-round state relevant during bidding and trick play.
#[derive(Debug, Clone)]
pub struct RoundState {
    /// Ordered plays for the current trick (who, card).
    pub trick_plays: Vec<(PlayerId, Card)>,
    /// Leading suit for the current trick.
    pub trick_lead: Option<Suit>,
    /// Bids per seat; `None` until placed.
    pub bids: Vec<Option<u8>>,
    /// Tricks won per seat this round.
    pub tricks_won: Vec<u8>,
}

impl RoundState {
    pub fn empty(player_count: usize) -> Self {
        Self {
            trick_plays: Vec::with_capacity(player_count),
            trick_lead: None,
            bids: vec![None; player_count],
            tricks_won: vec![0; player_count],
        }
    }
}

/// Entire game container, passed explicitly into every phase handler.
#[derive(Debug, Clone)]
pub struct GameState {
    /// Current phase.
    pub phase: Phase,
    /// Round number (1..=6).
    pub round_no: u8,
    /// Trump suit for the current round (set from round 1 onward).
    pub trump: Option<Suit>,
    /// Player registry; seat index is the `PlayerId`.
    pub players: Vec<PlayerProfile>,
    /// Dealer order; rotated once per round.
    pub base_seating: Vec<PlayerId>,
    /// Live play order; rotated to each trick's winner, reset from
    /// `base_seating` every round.
    pub seating: Vec<PlayerId>,
    /// Players' hands, indexed by seat.
    pub hands: Vec<Vec<Card>>,
    /// Undealt remainder of this round's deck.
    pub deck: Vec<Card>,
    /// The handicapped (last-to-bid) seat; reassigned every bidding phase.
    pub last_bidder: Option<PlayerId>,
    /// Per-round container.
    pub round: RoundState,
    /// Cumulative scores across rounds, indexed by seat.
    pub scores_total: Vec<i16>,
}

impl GameState {
    pub fn new() -> Self {
        Self {
            phase: Phase::PlayerSelection,
            round_no: 1,
            trump: None,
            players: Vec::new(),
            base_seating: Vec::new(),
            seating: Vec::new(),
            hands: Vec::new(),
            deck: Vec::new(),
            last_bidder: None,
            round: RoundState::empty(0),
            scores_total: Vec::new(),
        }
    }

    pub fn player_count(&self) -> usize {
        self.players.len()
    }

    pub fn name(&self, who: PlayerId) -> &str {
        &self.players[who as usize].name
    }

    pub fn is_remote(&self, who: PlayerId) -> bool {
        self.players[who as usize].is_remote
    }

    /// Hand size for the current round.
    pub fn hand_size(&self) -> Result<u8, DomainError> {
        hand_size_for_round(self.round_no).ok_or_else(|| {
            DomainError::invariant(format!("no hand size for round {}", self.round_no))
        })
    }

    pub fn require_trump(&self, ctx: &'static str) -> Result<Suit, DomainError> {
        self.trump
            .ok_or_else(|| DomainError::invariant(format!("trump must be set ({ctx})")))
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
