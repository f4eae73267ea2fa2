//! Line-based console implementation of [`GamePrompt`].
//!
//! Every recoverable input problem (bad number, unknown card code, bad
//! index) prints the error detail and asks the same question again; the
//! engine state never advances on bad input.

use std::io::{self, BufRead, Write};
use std::str::FromStr;

use super::format;
use super::{BidRequest, GamePrompt, InitialTrump, PlayRequest, TrumpRequest};
use crate::domain::players::PlayerSpec;
use crate::domain::rules::{MAX_PLAYERS, MIN_PLAYERS};
use crate::domain::{Card, Suit};
use crate::error::AppError;

pub struct ConsolePrompt;

impl ConsolePrompt {
    pub fn new() -> Self {
        Self
    }

    fn read_line(&mut self, prompt: &str) -> Result<String, AppError> {
        print!("{prompt}");
        io::stdout().flush()?;

        let mut buf = String::new();
        let read = io::stdin().lock().read_line(&mut buf)?;
        if read == 0 {
            return Err(AppError::internal("input stream closed"));
        }
        Ok(buf.trim().to_string())
    }

    fn read_number(&mut self, prompt: &str) -> Result<u8, AppError> {
        loop {
            let line = self.read_line(prompt)?;
            match line.parse::<u8>() {
                Ok(n) => return Ok(n),
                Err(_) => println!("INVALID OPTION: '{line}' is not a number"),
            }
        }
    }

    fn read_yes_no(&mut self, prompt: &str, default_yes: bool) -> Result<bool, AppError> {
        let line = self.read_line(prompt)?.to_lowercase();
        Ok(match line.as_str() {
            "" => default_yes,
            "y" | "yes" => true,
            _ => false,
        })
    }
}

impl Default for ConsolePrompt {
    fn default() -> Self {
        Self::new()
    }
}

impl GamePrompt for ConsolePrompt {
    fn request_players(&mut self) -> Result<Vec<PlayerSpec>, AppError> {
        println!("ENTER THE PLAYERS IN PLAYING ORDER");
        let count = loop {
            let n = self.read_number(&format!(
                "NUMBER OF PLAYERS ({MIN_PLAYERS}-{MAX_PLAYERS}): "
            ))?;
            if (MIN_PLAYERS..=MAX_PLAYERS).contains(&(n as usize)) {
                break n as usize;
            }
            println!("INVALID OPTION: must be {MIN_PLAYERS}-{MAX_PLAYERS}");
        };

        let mut specs = Vec::with_capacity(count);
        for i in 1..=count {
            let name = loop {
                let name = self.read_line(&format!("PLAYER {i} NAME: "))?;
                if !name.is_empty() {
                    break name;
                }
                println!("INVALID OPTION: name cannot be empty");
            };
            let is_remote = self.read_yes_no("PLAYED FROM THIS TERMINAL? [y/N]: ", false)?;
            specs.push(PlayerSpec { name, is_remote });
        }
        Ok(specs)
    }

    fn request_initial_trump(&mut self) -> Result<InitialTrump, AppError> {
        println!("DECIDING INITIAL TRUMP");
        if !self.read_yes_no("CHOOSE THE TRUMP CARD MANUALLY? [y/N]: ", false)? {
            return Ok(InitialTrump::Automatic);
        }
        loop {
            let line = self.read_line("ENTER A CARD CODE (e.g. 10D): ")?;
            match Card::from_str(&line) {
                Ok(card) => return Ok(InitialTrump::Manual(card)),
                Err(err) => println!("INVALID: {}", err.detail()),
            }
        }
    }

    fn request_bid(&mut self, req: &BidRequest<'_>) -> Result<u8, AppError> {
        println!(
            "\nROUND {}: {} CARDS PER HAND - {} IS BIDDING",
            req.round_no, req.hand_size, req.player
        );
        println!("CURRENT BIDS: {}", format::format_bids(req.bids));
        println!("HAND:\n{}", format::format_hand(req.hand, 4));
        if let Some(forbidden) = req.forbidden {
            println!("AS LAST BIDDER YOU CANNOT BID {forbidden}");
        }
        self.read_number(&format!("ENTER YOUR BID (0-{}): ", req.hand_size))
    }

    fn request_play(&mut self, req: &PlayRequest<'_>) -> Result<Card, AppError> {
        println!("\n{} PLAYS NEXT", req.player);
        println!(
            "ROUND SCOREBOARD: {}",
            format::format_scores(req.round_scores)
        );
        println!("TRUMP: {}", req.trump);
        println!("STACK: {}", format::format_cards(req.stack));
        println!("HAND:\n{}", format::format_hand(req.hand, 4));
        loop {
            let n = self.read_number(&format!(
                "ENTER THE INDEX OF THE CARD TO PLAY (1-{}): ",
                req.hand.len()
            ))?;
            match (n as usize)
                .checked_sub(1)
                .and_then(|i| req.hand.get(i))
            {
                Some(card) => return Ok(*card),
                None => println!("INVALID CARD CHOICE: index must be 1-{}", req.hand.len()),
            }
        }
    }

    fn request_trump_choice(&mut self, req: &TrumpRequest<'_>) -> Result<Suit, AppError> {
        println!(
            "\n{} DECIDES TRUMP FOR THE NEXT ROUND (currently {})",
            req.player, req.current
        );
        loop {
            let line =
                self.read_line("[C] Clubs, [D] Diamonds, [H] Hearts, [S] Spades: ")?;
            match line.chars().next().and_then(Suit::from_letter) {
                Some(suit) if line.len() == 1 => return Ok(suit),
                _ => println!("INVALID OPTION: choose C, D, H or S"),
            }
        }
    }

    fn notify(&mut self, message: &str) {
        println!("{message}");
    }
}
