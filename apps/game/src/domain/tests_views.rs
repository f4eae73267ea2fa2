use crate::domain::player_view::{
    bids_view, hand_view, round_scoreboard, stack_view, total_scoreboard, HandView,
};
use crate::domain::state::Phase;
use crate::domain::test_state_helpers::init_round;
use crate::domain::tricks::play_card;
use crate::domain::{Card, Rank, Suit};

fn card(rank: Rank, suit: Suit) -> Card {
    Card { suit, rank }
}

#[test]
fn remote_hands_render_as_a_placeholder_count() {
    let mut state = init_round(3, 1, Phase::Playing);
    state.players[1].is_remote = true;
    state.hands[0] = vec![card(Rank::Two, Suit::Clubs), card(Rank::Ace, Suit::Hearts)];
    state.hands[1] = vec![card(Rank::Ten, Suit::Diamonds)];

    assert_eq!(
        hand_view(&state, 0),
        HandView::Visible(state.hands[0].clone())
    );
    assert_eq!(hand_view(&state, 1), HandView::Hidden(1));
}

#[test]
fn hand_view_serializes_without_leaking_cards() {
    let mut state = init_round(3, 1, Phase::Playing);
    state.players[0].is_remote = true;
    state.hands[0] = vec![card(Rank::Queen, Suit::Spades)];

    let json = serde_json::to_string(&hand_view(&state, 0)).unwrap();
    assert_eq!(json, r#"{"Hidden":1}"#);
    assert!(!json.contains("QS"));
}

#[test]
fn bids_view_follows_seating_order_with_unset_seats() {
    let mut state = init_round(3, 1, Phase::Bidding);
    state.round.bids[2] = Some(4);
    state.seating = vec![2, 0, 1];

    assert_eq!(
        bids_view(&state),
        vec![
            ("P3".to_string(), Some(4)),
            ("P1".to_string(), None),
            ("P2".to_string(), None),
        ]
    );
}

#[test]
fn stack_view_preserves_play_order() {
    let mut state = init_round(3, 1, Phase::Playing);
    let first = card(Rank::Seven, Suit::Hearts);
    let second = card(Rank::Two, Suit::Spades);
    play_card(&mut state.round, 0, first, &[first]).unwrap();
    play_card(&mut state.round, 1, second, &[second]).unwrap();

    assert_eq!(stack_view(&state), vec![first, second]);
}

#[test]
fn scoreboards_sort_descending() {
    let mut state = init_round(4, 1, Phase::Scoring);
    state.round.tricks_won = vec![1, 3, 0, 2];
    state.scores_total = vec![5, 30, 12, 12];

    let round_rows = round_scoreboard(&state);
    assert_eq!(round_rows[0], ("P2".to_string(), 3));
    assert_eq!(round_rows[3], ("P3".to_string(), 0));

    let total_rows = total_scoreboard(&state);
    assert_eq!(total_rows[0], ("P2".to_string(), 30));
    assert_eq!(total_rows[3], ("P1".to_string(), 5));
}
