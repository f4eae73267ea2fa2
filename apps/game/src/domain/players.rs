//! Player registry: seat profiles, name deduplication, registration.

use crate::domain::rules::{MAX_PLAYERS, MIN_PLAYERS};
use crate::domain::state::{GameState, Phase, PlayerId, RoundState};
use crate::errors::domain::{DomainError, ValidationKind};

/// Immutable per-seat identity, registered once at game start.
#[derive(Debug, Clone)]
pub struct PlayerProfile {
    /// Unique within a game; duplicates are auto-suffixed at registration.
    pub name: String,
    /// Remotely/manually driven (console prompt) vs locally automatic.
    /// Affects I/O routing and hand visibility only, never rules.
    pub is_remote: bool,
}

/// Raw player request from the I/O layer, before dedup/validation.
#[derive(Debug, Clone)]
pub struct PlayerSpec {
    pub name: String,
    pub is_remote: bool,
}

/// Make names unique by suffixing repeats with an increasing counter:
/// ["Ann", "Ann", "Ann"] becomes ["Ann", "Ann2", "Ann3"].
pub fn dedupe_names(names: &[String]) -> Vec<String> {
    let mut seen: Vec<(String, u32)> = Vec::new();
    let mut unique = Vec::with_capacity(names.len());

    for name in names {
        match seen.iter_mut().find(|(n, _)| n == name) {
            Some((_, count)) => {
                *count += 1;
                unique.push(format!("{}{}", name, *count + 1));
            }
            None => {
                seen.push((name.clone(), 0));
                unique.push(name.clone());
            }
        }
    }
    unique
}

/// Register the seated players and size every per-seat table accordingly.
///
/// Fails with `InvalidPlayerCount` outside 3..=6 seats; the caller
/// (prompt layer) re-collects. Seating starts in registration order.
pub fn register_players(state: &mut GameState, specs: Vec<PlayerSpec>) -> Result<(), DomainError> {
    if !(MIN_PLAYERS..=MAX_PLAYERS).contains(&specs.len()) {
        return Err(DomainError::validation(
            ValidationKind::InvalidPlayerCount,
            format!(
                "player count must be {MIN_PLAYERS}..={MAX_PLAYERS}, got {}",
                specs.len()
            ),
        ));
    }

    let names: Vec<String> = specs.iter().map(|s| s.name.trim().to_string()).collect();
    let unique = dedupe_names(&names);

    state.players = unique
        .into_iter()
        .zip(specs.iter())
        .map(|(name, spec)| PlayerProfile {
            name,
            is_remote: spec.is_remote,
        })
        .collect();

    let count = state.players.len();
    state.base_seating = (0..count as PlayerId).collect();
    state.seating = state.base_seating.clone();
    state.hands = vec![Vec::new(); count];
    state.scores_total = vec![0; count];
    state.round = RoundState::empty(count);
    state.phase = Phase::HandAssignment;
    Ok(())
}
