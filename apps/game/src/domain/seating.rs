//! Turn-order rotations over the seating sequence.
//!
//! Both operations are pure front-to-back rotations: they never reshuffle
//! the relative order of the non-rotated seats.

use crate::domain::state::PlayerId;
use crate::errors::domain::{DomainError, ValidationKind};

/// Clockwise dealer shift: the front seat moves to the back.
/// No-op on an empty order.
pub fn rotate_dealer(order: &mut [PlayerId]) {
    if !order.is_empty() {
        order.rotate_left(1);
    }
}

/// Rotate front-to-back until `winner` occupies position 0.
///
/// A missing winner is a bookkeeping bug, not a user error; the caller
/// aborts the game.
pub fn rotate_to_winner(order: &mut [PlayerId], winner: PlayerId) -> Result<(), DomainError> {
    let Some(pos) = order.iter().position(|&p| p == winner) else {
        return Err(DomainError::validation(
            ValidationKind::RotationTargetNotFound,
            format!("winner seat {winner} is not in the seating order {order:?}"),
        ));
    };
    order.rotate_left(pos);
    Ok(())
}
