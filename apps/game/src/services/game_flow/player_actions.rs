//! Per-seat actions: collecting bids and trick plays.

use tracing::{debug, info};

use super::GameFlow;
use crate::domain::bidding::{self, Bid};
use crate::domain::player_view;
use crate::domain::state::{Phase, PlayerId};
use crate::domain::{scoring, seating, tricks, Suit};
use crate::error::AppError;
use crate::prompt::{BidRequest, GamePrompt, PlayRequest};

impl<P: GamePrompt> GameFlow<P> {
    /// Collect one valid bid per seat, in seating order.
    pub(super) fn bidding(&mut self) -> Result<(), AppError> {
        let hand_size = self.state.hand_size()?;
        self.state.last_bidder = self.state.seating.last().copied();

        self.prompt.notify(&format!(
            "\nBIDDING BEGINS - ROUND {}: {} CARDS PER HAND",
            self.state.round_no, hand_size
        ));

        let order = self.state.seating.clone();
        for who in order {
            self.take_bid(who, hand_size)?;
        }

        // Over/under commitment for the round; the handicap guarantees the
        // bids never sum to the hand size exactly.
        let total: i16 = self
            .state
            .round
            .bids
            .iter()
            .flatten()
            .map(|&b| i16::from(b))
            .sum();
        let diff = total - i16::from(hand_size);
        self.prompt.notify(&format!(
            "{}{} ROUND",
            if diff > 0 { '+' } else { '-' },
            diff.abs()
        ));

        info!(round = self.state.round_no, "Bidding complete");
        self.state.phase = Phase::Playing;
        Ok(())
    }

    fn take_bid(&mut self, who: PlayerId, hand_size: u8) -> Result<(), AppError> {
        loop {
            let legal = bidding::legal_bids(&self.state, who);
            let amount = if self.state.is_remote(who) {
                let forbidden = if self.state.last_bidder == Some(who) {
                    bidding::forbidden_total(&self.state.round.bids, hand_size)
                } else {
                    None
                };
                let bids = player_view::bids_view(&self.state);
                self.prompt.request_bid(&BidRequest {
                    player: self.state.name(who),
                    round_no: self.state.round_no,
                    hand_size,
                    hand: &self.state.hands[who as usize],
                    legal: &legal,
                    forbidden,
                    bids: &bids,
                })?
            } else {
                crate::ai::choose_bid(&legal)
                    .ok_or_else(|| {
                        AppError::internal(format!("automatic seat {who} has no legal bid"))
                    })?
                    .0
            };

            match bidding::place_bid(&mut self.state, who, Bid(amount)) {
                Ok(()) => {
                    self.prompt
                        .notify(&format!("{} bid {amount}", self.state.name(who)));
                    return Ok(());
                }
                Err(err) => self.recover(err)?,
            }
        }
    }

    /// Play `hand_size` tricks, rotating the seating to each winner.
    pub(super) fn playing(&mut self) -> Result<(), AppError> {
        let hand_size = self.state.hand_size()?;
        let trump = self.state.require_trump("playing")?;

        for trick_no in 1..=hand_size {
            tricks::reset_trick(&mut self.state.round);

            let order = self.state.seating.clone();
            for who in order {
                self.take_play(who, trump)?;
            }

            let (winner, winning_card) = tricks::resolve_winner(&self.state.round, trump)?;
            scoring::record_trick_win(&mut self.state, winner);
            seating::rotate_to_winner(&mut self.state.seating, winner)?;

            debug!(trick_no, winner = self.state.name(winner), "Trick resolved");
            self.prompt.notify(&format!(
                "{} wins the trick with {winning_card}",
                self.state.name(winner)
            ));
        }

        self.state.phase = Phase::Scoring;
        Ok(())
    }

    fn take_play(&mut self, who: PlayerId, trump: Suit) -> Result<(), AppError> {
        loop {
            let legal = tricks::legal_plays(&self.state.round, &self.state.hands[who as usize]);
            let card = if self.state.is_remote(who) {
                let stack = player_view::stack_view(&self.state);
                let round_scores = player_view::round_scoreboard(&self.state);
                self.prompt.request_play(&PlayRequest {
                    player: self.state.name(who),
                    trump,
                    hand: &self.state.hands[who as usize],
                    legal: &legal,
                    stack: &stack,
                    round_scores: &round_scores,
                })?
            } else {
                crate::ai::choose_play(&legal).ok_or_else(|| {
                    AppError::internal(format!("automatic seat {who} has no legal play"))
                })?
            };

            match tricks::play_card(
                &mut self.state.round,
                who,
                card,
                &self.state.hands[who as usize],
            ) {
                Ok(()) => {
                    // The trick engine never touches hands; removal after
                    // an accepted play happens here.
                    let hand = &mut self.state.hands[who as usize];
                    let pos = hand.iter().position(|c| *c == card).ok_or_else(|| {
                        AppError::internal("accepted card missing from the hand")
                    })?;
                    hand.remove(pos);

                    self.prompt
                        .notify(&format!("{} played {card}", self.state.name(who)));
                    return Ok(());
                }
                Err(err) => self.recover(err)?,
            }
        }
    }
}
