//! Property tests for the forbidden-total rule.

use proptest::prelude::*;

use crate::domain::bidding::{forbidden_total, legal_bids, place_bid, Bid};
use crate::domain::state::Phase;
use crate::domain::test_prelude;
use crate::domain::test_state_helpers::init_round;

proptest! {
    #![proptest_config(test_prelude::proptest_config())]

    /// `forbidden_total` is `hand_size - sum` when non-negative, else None.
    #[test]
    fn prop_forbidden_total_formula(
        bids in proptest::collection::vec(0u8..=8, 0..6),
        hand_size in 6u8..=8,
    ) {
        let placed: Vec<Option<u8>> = bids.iter().copied().map(Some).collect();
        let sum: u32 = bids.iter().map(|&b| u32::from(b)).sum();

        let expected = if sum > u32::from(hand_size) {
            None
        } else {
            Some(hand_size - sum as u8)
        };
        prop_assert_eq!(forbidden_total(&placed, hand_size), expected);
    }

    /// Every bid offered by `legal_bids` is accepted by `place_bid`,
    /// including for the handicapped seat.
    #[test]
    fn prop_legal_bids_are_accepted(
        prior in proptest::collection::vec(0u8..=6, 3),
        choice_index in 0usize..16,
    ) {
        // Round 3: hand size 6, four seats, seat 3 handicapped.
        let mut state = init_round(4, 3, Phase::Bidding);
        for (who, &bid) in prior.iter().enumerate() {
            place_bid(&mut state, who as u8, Bid(bid)).unwrap();
        }

        let legal = legal_bids(&state, 3);
        prop_assert!(!legal.is_empty());
        let bid = legal[choice_index % legal.len()];
        prop_assert!(place_bid(&mut state, 3, bid).is_ok());
    }

    /// The handicapped seat can never bring the bids to exactly the hand
    /// size by choosing from its legal menu.
    #[test]
    fn prop_round_is_never_exactly_satisfied(
        prior in proptest::collection::vec(0u8..=6, 3),
        choice_index in 0usize..16,
    ) {
        let mut state = init_round(4, 3, Phase::Bidding);
        for (who, &bid) in prior.iter().enumerate() {
            place_bid(&mut state, who as u8, Bid(bid)).unwrap();
        }

        let legal = legal_bids(&state, 3);
        let bid = legal[choice_index % legal.len()];
        place_bid(&mut state, 3, bid).unwrap();

        let total: u32 = state.round.bids.iter().flatten().map(|&b| u32::from(b)).sum();
        prop_assert_ne!(total, 6u32, "bids must never sum to the hand size");
    }
}
