//! Round lifecycle: dealing, trump fixing, scoring, trump re-deciding.

use rand::seq::IndexedRandom;
use tracing::info;

use super::GameFlow;
use crate::domain::player_view;
use crate::domain::rules::MAX_ROUNDS;
use crate::domain::state::{Phase, PlayerId};
use crate::domain::{bidding, dealing, scoring, seating, tricks};
use crate::error::AppError;
use crate::errors::domain::{DomainError, ValidationKind};
use crate::prompt::{format, GamePrompt, InitialTrump, TrumpRequest};

impl<P: GamePrompt> GameFlow<P> {
    /// Rotate the dealer order, reset round bookkeeping, deal fresh hands.
    pub(super) fn hand_assignment(&mut self) -> Result<(), AppError> {
        let hand_size = self.state.hand_size()?;

        if self.state.round_no > 1 {
            seating::rotate_dealer(&mut self.state.base_seating);
        }
        self.state.seating = self.state.base_seating.clone();
        self.state.last_bidder = None;
        bidding::reset_round_bids(&mut self.state);
        scoring::reset_round_scores(&mut self.state);
        tricks::reset_trick(&mut self.state.round);

        let (hands, rest) =
            dealing::deal_hands(self.state.player_count(), hand_size, &mut self.rng)?;
        self.state.hands = hands;
        self.state.deck = rest;

        info!(round = self.state.round_no, hand_size, "Round dealt");
        self.state.phase = if self.state.round_no == 1 {
            Phase::TrumpSelection
        } else {
            Phase::Bidding
        };
        Ok(())
    }

    /// Fix the round-1 trump from the undealt remainder of the deck.
    ///
    /// Automatic selection peeks the top card without consuming it;
    /// manual selection draws the named card out of the deck.
    pub(super) fn trump_selection(&mut self) -> Result<(), AppError> {
        let suit = loop {
            match self.prompt.request_initial_trump()? {
                InitialTrump::Automatic => {
                    let top = self.state.deck.first().copied().ok_or_else(|| {
                        DomainError::invariant("deck exhausted before trump selection")
                    })?;
                    self.prompt
                        .notify(&format!("CARD RANDOMLY CHOSEN: {top}"));
                    break top.suit;
                }
                InitialTrump::Manual(card) => {
                    match self.state.deck.iter().position(|c| *c == card) {
                        Some(pos) => {
                            self.state.deck.remove(pos);
                            break card.suit;
                        }
                        None => self.recover(DomainError::validation(
                            ValidationKind::UnknownCardCode,
                            format!("{card} is not available in the undealt deck"),
                        ))?,
                    }
                }
            }
        };

        self.state.trump = Some(suit);
        info!(trump = %suit, "Initial trump fixed");
        self.prompt.notify(&format!("TRUMP SUIT: {suit}"));
        self.state.phase = Phase::Bidding;
        Ok(())
    }

    /// Fold the finished round into the totals.
    pub(super) fn scoring(&mut self) -> Result<(), AppError> {
        scoring::finalize_round(&mut self.state)?;

        let board = player_view::total_scoreboard(&self.state);
        self.prompt
            .notify(&format!("TOTAL SCOREBOARD: {}", format::format_scores(&board)));
        info!(round = self.state.round_no, "Round scored");

        if self.state.round_no == MAX_ROUNDS {
            self.prompt.notify("GAME OVER");
            info!("Game over");
            self.state.phase = Phase::GameOver;
        } else {
            self.state.phase = Phase::TrumpRedeciding;
        }
        Ok(())
    }

    /// The round's top trick-taker re-fixes trump for the next round.
    /// Equal top scorers are tie-broken through the injected RNG.
    pub(super) fn trump_redeciding(&mut self) -> Result<(), AppError> {
        let top = self
            .state
            .round
            .tricks_won
            .iter()
            .copied()
            .max()
            .ok_or_else(|| DomainError::invariant("no seats at trump re-deciding"))?;
        let candidates: Vec<PlayerId> = (0..self.state.player_count() as PlayerId)
            .filter(|&seat| self.state.round.tricks_won[seat as usize] == top)
            .collect();
        let &decider = candidates
            .choose(&mut self.rng)
            .ok_or_else(|| DomainError::invariant("no trump decider candidates"))?;

        let current = self.state.require_trump("trump_redeciding")?;
        let suit = if self.state.is_remote(decider) {
            self.prompt.request_trump_choice(&TrumpRequest {
                player: self.state.name(decider),
                current,
            })?
        } else {
            crate::ai::choose_trump(current)
        };

        self.prompt
            .notify(&format!("{} SELECTED {suit}", self.state.name(decider)));
        info!(
            round = self.state.round_no,
            decider = self.state.name(decider),
            trump = %suit,
            "Trump re-decided"
        );

        self.state.trump = Some(suit);
        self.state.round_no += 1;
        self.state.phase = Phase::HandAssignment;
        Ok(())
    }
}
