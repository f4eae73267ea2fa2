use crate::domain::scoring::{finalize_round, record_trick_win, reset_round_scores, round_points};
use crate::domain::state::Phase;
use crate::domain::test_state_helpers::init_round;
use crate::errors::domain::DomainError;

#[test]
fn exact_bid_earns_bid_plus_ten() {
    assert_eq!(round_points(2, 2, 5), 12);
    assert_eq!(round_points(0, 0, 8), 10);
}

#[test]
fn bidding_the_whole_hand_doubles_the_bonus() {
    assert_eq!(round_points(5, 5, 5), 30);
    assert_eq!(round_points(8, 8, 8), 36);
}

#[test]
fn missed_bid_credits_raw_tricks() {
    assert_eq!(round_points(3, 1, 8), 1);
    assert_eq!(round_points(0, 4, 8), 4);
    assert_eq!(round_points(8, 0, 8), 0);
}

#[test]
fn finalize_round_accumulates_totals() {
    // Round 3: hand size 6.
    let mut state = init_round(4, 3, Phase::Scoring);
    state.round.bids = vec![Some(2), Some(0), Some(1), Some(0)];
    state.round.tricks_won = vec![2, 1, 3, 0];
    state.scores_total = vec![5, 5, 5, 5];

    finalize_round(&mut state).unwrap();

    // Exact: 2+10=12, miss: 1, miss: 3, exact: 0+10=10 on top of 5 each.
    assert_eq!(state.scores_total, vec![17, 6, 8, 15]);
}

#[test]
fn finalize_round_requires_every_bid() {
    let mut state = init_round(4, 3, Phase::Scoring);
    state.round.bids = vec![Some(2), None, Some(1), Some(0)];

    let err = finalize_round(&mut state).unwrap_err();
    assert!(matches!(err, DomainError::Invariant(_)));
    assert!(!err.is_recoverable());
}

#[test]
fn record_trick_win_increments_round_tally_only() {
    let mut state = init_round(4, 1, Phase::Playing);
    record_trick_win(&mut state, 2);
    record_trick_win(&mut state, 2);
    record_trick_win(&mut state, 0);

    assert_eq!(state.round.tricks_won, vec![1, 0, 2, 0]);
    assert_eq!(state.scores_total, vec![0, 0, 0, 0]);
}

#[test]
fn reset_round_scores_keeps_totals() {
    let mut state = init_round(4, 1, Phase::Playing);
    state.round.tricks_won = vec![3, 2, 2, 1];
    state.scores_total = vec![12, 2, 2, 11];

    reset_round_scores(&mut state);

    assert_eq!(state.round.tricks_won, vec![0, 0, 0, 0]);
    assert_eq!(state.scores_total, vec![12, 2, 2, 11]);
}
