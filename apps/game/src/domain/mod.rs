//! Domain layer: pure game rules, no I/O.

pub mod bidding;
pub mod cards_logic;
pub mod cards_parsing;
pub mod cards_serde;
pub mod cards_types;
pub mod dealing;
pub mod player_view;
pub mod players;
pub mod rules;
pub mod scoring;
pub mod seating;
pub mod state;
pub mod tricks;

#[cfg(test)]
mod test_state_helpers;
#[cfg(test)]
mod tests_props_bidding;
#[cfg(test)]
mod tests_props_cards;
#[cfg(test)]
mod tests_scoring;
#[cfg(test)]
mod tests_tricks;
#[cfg(test)]
mod tests_views;

// Re-exports for ergonomics
pub use cards_logic::{card_beats, hand_has_suit};
pub use cards_types::{Card, Rank, Suit};
pub use dealing::{deal_hands, full_deck};
pub use players::{PlayerProfile, PlayerSpec};
pub use rules::hand_size_for_round;
pub use state::{GameState, Phase, PlayerId};
