//! The trick play stack: suit-following legality and winner resolution.
//!
//! This engine owns only stack state and legality. It never mutates a
//! player's hand; removing an accepted card is the caller's
//! responsibility.

use crate::domain::state::{PlayerId, RoundState};
use crate::domain::{card_beats, hand_has_suit, Card, Suit};
use crate::errors::domain::{DomainError, ValidationKind};

/// Legal cards for a hand against the current stack: the lead-suit subset
/// when the hand can follow, otherwise the whole hand.
pub fn legal_plays(round: &RoundState, hand: &[Card]) -> Vec<Card> {
    if let Some(lead) = round.trick_lead {
        if hand_has_suit(hand, lead) {
            return hand.iter().copied().filter(|c| c.suit == lead).collect();
        }
    }
    hand.to_vec()
}

/// Validate a play and append it to the stack.
///
/// Illegal plays fail with `IllegalPlay` and leave the stack untouched.
/// The first accepted card of a trick fixes the leading suit.
pub fn play_card(
    round: &mut RoundState,
    who: PlayerId,
    card: Card,
    hand: &[Card],
) -> Result<(), DomainError> {
    if !hand.contains(&card) {
        return Err(DomainError::validation(
            ValidationKind::IllegalPlay,
            format!("{card} is not in hand"),
        ));
    }

    if let Some(lead) = round.trick_lead {
        if card.suit != lead && hand_has_suit(hand, lead) {
            return Err(DomainError::validation(
                ValidationKind::IllegalPlay,
                format!("must follow suit: {lead}"),
            ));
        }
    } else {
        round.trick_lead = Some(card.suit);
    }

    round.trick_plays.push((who, card));
    Ok(())
}

/// Resolve the winner of the current stack under `trump`.
///
/// Any trump present wins over the leading suit; within either, rank
/// decides (rank ties cannot occur in a 52-unique-card deck).
pub fn resolve_winner(round: &RoundState, trump: Suit) -> Result<(PlayerId, Card), DomainError> {
    let Some(&(first_player, first_card)) = round.trick_plays.first() else {
        return Err(DomainError::validation(
            ValidationKind::EmptyTrickQuery,
            "cannot resolve a winner: no cards have been played",
        ));
    };
    let lead = round.trick_lead.ok_or_else(|| {
        DomainError::invariant("trick_lead must be set while the stack is non-empty")
    })?;

    let mut best = (first_player, first_card);
    for &(player, card) in &round.trick_plays[1..] {
        if card_beats(card, best.1, lead, trump) {
            best = (player, card);
        }
    }
    Ok(best)
}

/// Clear the stack at a trick boundary.
pub fn reset_trick(round: &mut RoundState) {
    round.trick_plays.clear();
    round.trick_lead = None;
}
