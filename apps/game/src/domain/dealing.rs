//! Deck generation and card dealing.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::domain::rules::{MAX_PLAYERS, MIN_PLAYERS};
use crate::domain::{Card, Rank, Suit};
use crate::errors::domain::{DomainError, ValidationKind};

/// Generate a full 52-card deck in standard order.
pub fn full_deck() -> Vec<Card> {
    let mut deck = Vec::with_capacity(52);
    for suit in Suit::ALL {
        for rank in Rank::ALL {
            deck.push(Card { suit, rank });
        }
    }
    deck
}

/// Deal `hand_size` cards to each player from a freshly shuffled deck.
///
/// Returns the sorted hands plus the undealt remainder; remainder size +
/// dealt cards always equals 52. The shuffle permutation comes entirely
/// from the injected RNG so tests can fix a seed.
pub fn deal_hands<R: Rng + ?Sized>(
    player_count: usize,
    hand_size: u8,
    rng: &mut R,
) -> Result<(Vec<Vec<Card>>, Vec<Card>), DomainError> {
    if !(MIN_PLAYERS..=MAX_PLAYERS).contains(&player_count) {
        return Err(DomainError::validation(
            ValidationKind::InvalidPlayerCount,
            format!("player count must be {MIN_PLAYERS}..={MAX_PLAYERS}, got {player_count}"),
        ));
    }

    let total_cards = player_count * hand_size as usize;
    if hand_size == 0 || total_cards > 52 {
        return Err(DomainError::validation(
            ValidationKind::InvalidHandSize,
            format!("cannot deal {hand_size} cards to {player_count} players from 52"),
        ));
    }

    let mut deck = full_deck();
    deck.shuffle(rng);

    let rest = deck.split_off(total_cards);
    let hands = deck
        .chunks_exact(hand_size as usize)
        .map(|chunk| {
            let mut hand = chunk.to_vec();
            hand.sort();
            hand
        })
        .collect();

    Ok((hands, rest))
}
