//! Property tests for card short codes and trick comparisons.

use proptest::prelude::*;

use crate::domain::state::RoundState;
use crate::domain::test_gens::{card, suit};
use crate::domain::test_prelude;
use crate::domain::tricks::{play_card, resolve_winner};
use crate::domain::Card;

proptest! {
    #![proptest_config(test_prelude::proptest_config())]

    /// `parse(format(card)) == card` for every card.
    #[test]
    fn prop_code_roundtrips(c in card()) {
        let code = c.code();
        prop_assert_eq!(code.parse::<Card>().unwrap(), c);
    }

    /// Formatting is canonical: parsing any case variant of a valid code
    /// reproduces the uppercase original.
    #[test]
    fn prop_lowercase_codes_parse(c in card()) {
        let lower = c.code().to_lowercase();
        let parsed: Card = lower.parse().unwrap();
        prop_assert_eq!(parsed.code(), c.code());
    }

    /// Random garbage never parses into a card silently.
    #[test]
    fn prop_garbage_is_rejected(s in "[0-9a-zA-Z]{4,6}") {
        prop_assert!(s.parse::<Card>().is_err());
    }

    /// The resolved winner always played either trump or the leading suit.
    #[test]
    fn prop_winner_followed_lead_or_trumped(
        cards in proptest::collection::hash_set(card(), 3..=6),
        trump in suit(),
    ) {
        let mut round = RoundState::empty(cards.len());
        for (who, c) in cards.iter().enumerate() {
            play_card(&mut round, who as u8, *c, &[*c]).unwrap();
        }
        let lead = round.trick_lead.unwrap();

        let (_, winning_card) = resolve_winner(&round, trump).unwrap();
        let any_trump = round.trick_plays.iter().any(|&(_, c)| c.suit == trump);
        if any_trump {
            prop_assert_eq!(winning_card.suit, trump);
        } else {
            prop_assert_eq!(winning_card.suit, lead);
        }

        // And no other play of the winning suit outranks it.
        for &(_, c) in &round.trick_plays {
            if c.suit == winning_card.suit {
                prop_assert!(c.rank <= winning_card.rank);
            }
        }
    }
}
