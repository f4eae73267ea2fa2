//! Domain-level error type used across the engine and the game flow.
//!
//! This error type is I/O-agnostic. The binary and the prompt layer work
//! with `crate::error::AppError` and convert from `DomainError` via the
//! provided `From<DomainError> for AppError` implementation.

use std::error::Error;
use std::fmt::{Display, Formatter, Result as FmtResult};

/// What rule a validation failure violated.
///
/// Recoverable kinds are re-prompted by the caller without advancing game
/// state; the rest indicate a bookkeeping bug and abort the game.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ValidationKind {
    /// Bid out of range or equal to the forbidden total.
    InvalidBid,
    /// Suit-following violation (or card not in hand).
    IllegalPlay,
    /// Malformed or nonexistent card short code.
    UnknownCardCode,
    /// Winner queried on an empty trick.
    EmptyTrickQuery,
    /// Seated player count outside 3..=6.
    InvalidPlayerCount,
    /// Hand size outside the fixed round table.
    InvalidHandSize,
    /// Rotation target missing from the seating order.
    RotationTargetNotFound,
    Other(String),
}

impl ValidationKind {
    /// Canonical SCREAMING_SNAKE_CASE code for logs and messages.
    pub fn code(&self) -> &'static str {
        match self {
            ValidationKind::InvalidBid => "INVALID_BID",
            ValidationKind::IllegalPlay => "ILLEGAL_PLAY",
            ValidationKind::UnknownCardCode => "UNKNOWN_CARD_CODE",
            ValidationKind::EmptyTrickQuery => "EMPTY_TRICK_QUERY",
            ValidationKind::InvalidPlayerCount => "INVALID_PLAYER_COUNT",
            ValidationKind::InvalidHandSize => "INVALID_HAND_SIZE",
            ValidationKind::RotationTargetNotFound => "ROTATION_TARGET_NOT_FOUND",
            ValidationKind::Other(_) => "VALIDATION_ERROR",
        }
    }
}

/// Central domain error type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Input validation or business rule violation.
    Validation(ValidationKind, String),
    /// Internal-consistency failure; never caused by user input.
    Invariant(String),
}

impl DomainError {
    pub fn validation(kind: ValidationKind, detail: impl Into<String>) -> Self {
        Self::Validation(kind, detail.into())
    }

    pub fn invariant(detail: impl Into<String>) -> Self {
        Self::Invariant(detail.into())
    }

    /// Whether the caller may re-prompt the same player instead of aborting.
    ///
    /// `EmptyTrickQuery` and `RotationTargetNotFound` have no player to
    /// re-prompt; inside this program they can only be flow bugs.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            DomainError::Validation(
                ValidationKind::InvalidBid
                    | ValidationKind::IllegalPlay
                    | ValidationKind::UnknownCardCode
                    | ValidationKind::InvalidPlayerCount,
                _
            )
        )
    }

    pub fn detail(&self) -> &str {
        match self {
            DomainError::Validation(_, d) | DomainError::Invariant(d) => d,
        }
    }
}

impl Display for DomainError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            DomainError::Validation(kind, d) => write!(f, "{}: {d}", kind.code()),
            DomainError::Invariant(d) => write!(f, "invariant violated: {d}"),
        }
    }
}

impl Error for DomainError {}
