//! Card short codes (e.g. "10D", "KS") and their bijective parse/format pair.
//!
//! The short code is the only bit-exact external representation of a card:
//! rank token ("2".."10", "J", "Q", "K", "A") followed by the suit's first
//! letter. `format(parse(code)) == code.to_uppercase()` and
//! `parse(format(card)) == card` hold for every valid code and card.

use std::fmt::{Display, Formatter, Result as FmtResult};
use std::str::FromStr;

use super::cards_types::{Card, Rank, Suit};
use crate::errors::domain::{DomainError, ValidationKind};

impl Rank {
    /// Canonical rank token; "10" for Ten, letters for courts and the ace.
    pub fn token(&self) -> &'static str {
        match self {
            Rank::Two => "2",
            Rank::Three => "3",
            Rank::Four => "4",
            Rank::Five => "5",
            Rank::Six => "6",
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine => "9",
            Rank::Ten => "10",
            Rank::Jack => "J",
            Rank::Queen => "Q",
            Rank::King => "K",
            Rank::Ace => "A",
        }
    }
}

impl Card {
    /// Canonical uppercase short code, e.g. "10D" or "KS".
    pub fn code(&self) -> String {
        format!("{}{}", self.rank.token(), self.suit.letter())
    }
}

impl Display for Card {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}{}", self.rank.token(), self.suit.letter())
    }
}

impl FromStr for Card {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let code = s.trim().to_ascii_uppercase();
        // 2 chars for single-token ranks, 3 for "10".
        if !code.is_ascii() || code.len() < 2 || code.len() > 3 {
            return Err(unknown_code(s));
        }

        let (rank_part, suit_part) = code.split_at(code.len() - 1);
        let rank = match rank_part {
            "2" => Rank::Two,
            "3" => Rank::Three,
            "4" => Rank::Four,
            "5" => Rank::Five,
            "6" => Rank::Six,
            "7" => Rank::Seven,
            "8" => Rank::Eight,
            "9" => Rank::Nine,
            "10" => Rank::Ten,
            "J" => Rank::Jack,
            "Q" => Rank::Queen,
            "K" => Rank::King,
            "A" => Rank::Ace,
            _ => return Err(unknown_code(s)),
        };

        let suit_ch = suit_part.chars().next().ok_or_else(|| unknown_code(s))?;
        let suit = Suit::from_letter(suit_ch).ok_or_else(|| unknown_code(s))?;

        Ok(Card { suit, rank })
    }
}

fn unknown_code(input: &str) -> DomainError {
    DomainError::validation(
        ValidationKind::UnknownCardCode,
        format!("not a card code: '{input}'"),
    )
}
