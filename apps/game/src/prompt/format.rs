//! Text formatting for hands, stacks, bids, and scoreboards.

use std::fmt::Display;

use crate::domain::player_view::HandView;
use crate::domain::Card;

/// Indexed hand rows, four cards per row:
/// `1) 2C    2) 10D    3) QS`
pub fn format_hand(hand: &[Card], cols: usize) -> String {
    if hand.is_empty() {
        return "(empty)".to_string();
    }
    hand.chunks(cols.max(1))
        .enumerate()
        .map(|(row, chunk)| {
            chunk
                .iter()
                .enumerate()
                .map(|(i, card)| format!("{}) {}", row * cols.max(1) + i + 1, card))
                .collect::<Vec<_>>()
                .join("\t")
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn format_hand_view(view: &HandView) -> String {
    match view {
        HandView::Visible(cards) => format_cards(cards),
        HandView::Hidden(count) => vec!["X"; *count].join(" "),
    }
}

/// Ordered short codes: `10D 3H 10C`.
pub fn format_cards(cards: &[Card]) -> String {
    if cards.is_empty() {
        return "(empty)".to_string();
    }
    cards
        .iter()
        .map(Card::code)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Running bids with `X` for unset seats: `Ann 2 | Bob X`.
pub fn format_bids(rows: &[(String, Option<u8>)]) -> String {
    rows.iter()
        .map(|(name, bid)| match bid {
            Some(b) => format!("{name} {b}"),
            None => format!("{name} X"),
        })
        .collect::<Vec<_>>()
        .join(" | ")
}

/// Scoreboard rows, already sorted by the view layer: `Ann 12 | Bob 2`.
pub fn format_scores<S: Display>(rows: &[(String, S)]) -> String {
    rows.iter()
        .map(|(name, score)| format!("{name} {score}"))
        .collect::<Vec<_>>()
        .join(" | ")
}
