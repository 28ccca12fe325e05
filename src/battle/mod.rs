//! Battle resolution.
//!
//! Resolves a single positional pairing of two platoons into a ternary
//! outcome. Each side's head count doubles when its unit class holds an
//! advantage over the opposing class; effective strengths then compare
//! directly. Pure functions of the two platoons and the static table.

use serde::Serialize;

use crate::army::Platoon;

/// The outcome of one pairing, from the attacker's perspective.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum BattleOutcome {
    Win,
    Draw,
    Loss,
}

/// Returns a platoon's head count after applying the advantage doubling
/// against the given opposing platoon.
///
/// Doubling saturates at `u64::MAX`; the parser accepts any `u64` count,
/// so counts above 2^63 must not wrap.
pub fn effective_strength(platoon: Platoon, opponent: Platoon) -> u64 {
    if platoon.unit_type.has_advantage_over(opponent.unit_type) {
        platoon.count.saturating_mul(2)
    } else {
        platoon.count
    }
}

/// Resolves one positional battle between an attacker and a defender
/// platoon.
///
/// Doubling is applied independently per side; if both classes hold an
/// advantage over each other (not the case in the shipped table, but not
/// structurally prevented), both double and raw counts decide.
pub fn resolve_battle(attacker: Platoon, defender: Platoon) -> BattleOutcome {
    let attack = effective_strength(attacker, defender);
    let defense = effective_strength(defender, attacker);

    match attack.cmp(&defense) {
        std::cmp::Ordering::Greater => BattleOutcome::Win,
        std::cmp::Ordering::Equal => BattleOutcome::Draw,
        std::cmp::Ordering::Less => BattleOutcome::Loss,
    }
}
