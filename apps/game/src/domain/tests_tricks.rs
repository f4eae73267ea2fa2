use crate::domain::state::RoundState;
use crate::domain::tricks::{legal_plays, play_card, reset_trick, resolve_winner};
use crate::domain::{Card, Rank, Suit};
use crate::errors::domain::{DomainError, ValidationKind};

fn card(rank: Rank, suit: Suit) -> Card {
    Card { suit, rank }
}

fn stack_of(plays: &[(u8, Card)]) -> RoundState {
    let mut round = RoundState::empty(plays.len());
    for &(who, c) in plays {
        // Hand containing just the played card: always legal to play.
        play_card(&mut round, who, c, &[c]).unwrap();
    }
    round
}

#[test]
fn highest_of_leading_suit_wins_without_trump() {
    // Stack 10D, 3H, 10C, 10H; trump Spades; led by Diamonds -> 10D wins.
    let round = stack_of(&[
        (0, card(Rank::Ten, Suit::Diamonds)),
        (1, card(Rank::Three, Suit::Hearts)),
        (2, card(Rank::Ten, Suit::Clubs)),
        (3, card(Rank::Ten, Suit::Hearts)),
    ]);
    let (winner, winning_card) = resolve_winner(&round, Suit::Spades).unwrap();
    assert_eq!(winner, 0);
    assert_eq!(winning_card, card(Rank::Ten, Suit::Diamonds));
}

#[test]
fn highest_trump_wins_over_everything() {
    // Stack AD, 10S, 10C, 10H; trump Diamonds -> AD wins.
    let round = stack_of(&[
        (0, card(Rank::Ace, Suit::Diamonds)),
        (1, card(Rank::Ten, Suit::Spades)),
        (2, card(Rank::Ten, Suit::Clubs)),
        (3, card(Rank::Ten, Suit::Hearts)),
    ]);
    let (winner, winning_card) = resolve_winner(&round, Suit::Diamonds).unwrap();
    assert_eq!(winner, 0);
    assert_eq!(winning_card, card(Rank::Ace, Suit::Diamonds));
}

#[test]
fn low_trump_played_late_still_wins() {
    let round = stack_of(&[
        (0, card(Rank::Ace, Suit::Hearts)),
        (1, card(Rank::King, Suit::Hearts)),
        (2, card(Rank::Two, Suit::Spades)),
    ]);
    let (winner, winning_card) = resolve_winner(&round, Suit::Spades).unwrap();
    assert_eq!(winner, 2);
    assert_eq!(winning_card, card(Rank::Two, Suit::Spades));
}

#[test]
fn empty_stack_has_no_winner() {
    let round = RoundState::empty(4);
    let err = resolve_winner(&round, Suit::Spades).unwrap_err();
    match err {
        DomainError::Validation(ValidationKind::EmptyTrickQuery, _) => {}
        other => panic!("expected EmptyTrickQuery, got {other:?}"),
    }
}

#[test]
fn must_follow_suit_when_able() {
    let mut round = RoundState::empty(4);
    let lead = card(Rank::Seven, Suit::Diamonds);
    play_card(&mut round, 0, lead, &[lead]).unwrap();

    // Hand holds a diamond, so a heart is illegal.
    let hand = [
        card(Rank::Two, Suit::Diamonds),
        card(Rank::Ace, Suit::Hearts),
    ];
    let err = play_card(&mut round, 1, card(Rank::Ace, Suit::Hearts), &hand).unwrap_err();
    match &err {
        DomainError::Validation(ValidationKind::IllegalPlay, msg) => {
            assert!(msg.contains("Diamonds"), "message names the suit: {msg}");
        }
        other => panic!("expected IllegalPlay, got {other:?}"),
    }
    assert!(err.is_recoverable());
    assert_eq!(round.trick_plays.len(), 1, "illegal play must not mutate");

    // The same hand may play its diamond.
    play_card(&mut round, 1, card(Rank::Two, Suit::Diamonds), &hand).unwrap();
    assert_eq!(round.trick_plays.len(), 2);
}

#[test]
fn void_in_lead_suit_may_play_anything() {
    let mut round = RoundState::empty(4);
    let lead = card(Rank::Seven, Suit::Hearts);
    play_card(&mut round, 0, lead, &[lead]).unwrap();

    // No hearts in hand: any card is legal, including trump.
    let hand = [
        card(Rank::Two, Suit::Diamonds),
        card(Rank::Ace, Suit::Spades),
    ];
    play_card(&mut round, 1, card(Rank::Ace, Suit::Spades), &hand).unwrap();
    assert_eq!(round.trick_lead, Some(Suit::Hearts));
}

#[test]
fn any_card_is_legal_on_an_empty_stack() {
    let mut round = RoundState::empty(4);
    let hand = [
        card(Rank::Two, Suit::Diamonds),
        card(Rank::Ace, Suit::Hearts),
    ];
    assert_eq!(legal_plays(&round, &hand), hand.to_vec());

    play_card(&mut round, 0, card(Rank::Ace, Suit::Hearts), &hand).unwrap();
    assert_eq!(round.trick_lead, Some(Suit::Hearts), "first play fixes the lead");
}

#[test]
fn legal_plays_filters_to_the_lead_suit() {
    let mut round = RoundState::empty(4);
    let lead = card(Rank::Seven, Suit::Diamonds);
    play_card(&mut round, 0, lead, &[lead]).unwrap();

    let hand = [
        card(Rank::Two, Suit::Diamonds),
        card(Rank::Nine, Suit::Diamonds),
        card(Rank::Ace, Suit::Hearts),
    ];
    assert_eq!(
        legal_plays(&round, &hand),
        vec![
            card(Rank::Two, Suit::Diamonds),
            card(Rank::Nine, Suit::Diamonds),
        ]
    );
}

#[test]
fn playing_a_card_not_in_hand_is_illegal() {
    let mut round = RoundState::empty(4);
    let hand = [card(Rank::Two, Suit::Diamonds)];
    let err = play_card(&mut round, 0, card(Rank::Ace, Suit::Spades), &hand).unwrap_err();
    assert!(matches!(
        err,
        DomainError::Validation(ValidationKind::IllegalPlay, _)
    ));
    assert!(round.trick_plays.is_empty());
}

#[test]
fn reset_clears_stack_and_lead() {
    let mut round = stack_of(&[(0, card(Rank::Ten, Suit::Diamonds))]);
    reset_trick(&mut round);
    assert!(round.trick_plays.is_empty());
    assert_eq!(round.trick_lead, None);
}
