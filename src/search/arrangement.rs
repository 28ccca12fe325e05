//! Majority-threshold arrangement search.
//!
//! Enumerates permutations of the attacker's platoons, pairing each
//! ordering positionally against the defender's fixed order, and returns
//! the first ordering that wins at least the threshold number of battles.
//!
//! This is deliberate brute force: O(N! × N) battle resolutions with no
//! pruning or memoization, acceptable only for small armies (N ≤ ~8).
//! Pruning is ruled out because it could change which valid arrangement
//! is found first.

use serde::Serialize;

use super::permutations::IndexPermutations;
use crate::army::Army;
use crate::battle::{resolve_battle, BattleOutcome};

/// Errors surfaced before the search begins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SearchError {
    #[error("army sizes differ: attacker has {attacker} platoons, defender has {defender}")]
    LengthMismatch { attacker: usize, defender: usize },
}

/// Returns the minimum number of positional wins needed for a majority
/// over `n` battles: ⌈(n+1)/2⌉.
///
/// The reference behavior hard-coded 3, assuming 5-platoon armies; this
/// derives it from the army size instead. For n = 0 the majority is 1,
/// so empty armies cannot win under the default threshold.
pub fn majority_threshold(n: usize) -> usize {
    n / 2 + 1
}

/// A qualifying arrangement together with search statistics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchResult {
    /// The attacker's platoons in winning order.
    pub arrangement: Army,
    /// Positional wins achieved by the arrangement.
    pub wins: usize,
    /// Orderings examined before (and including) the qualifying one.
    pub permutations_examined: u64,
}

/// Searches for the first attacker ordering that wins at least
/// `threshold` positional battles against the defender's fixed order.
///
/// Returns `Ok(None)` when the search space is exhausted without a
/// qualifying ordering; that is a valid outcome, not an error. The armies
/// must
/// be the same length; this is checked before any permutation is
/// generated.
pub fn find_arrangement(
    attacker: &Army,
    defender: &Army,
    threshold: usize,
) -> Result<Option<SearchResult>, SearchError> {
    if attacker.len() != defender.len() {
        return Err(SearchError::LengthMismatch {
            attacker: attacker.len(),
            defender: defender.len(),
        });
    }

    let platoons = attacker.platoons();
    let mut examined: u64 = 0;

    for ordering in IndexPermutations::new(platoons.len()) {
        examined += 1;

        let wins = ordering
            .iter()
            .zip(defender.iter())
            .filter(|&(&i, &enemy)| resolve_battle(platoons[i], enemy) == BattleOutcome::Win)
            .count();

        if wins >= threshold {
            let arrangement: Army = ordering.iter().map(|&i| platoons[i]).collect();
            return Ok(Some(SearchResult {
                arrangement,
                wins,
                permutations_examined: examined,
            }));
        }
    }

    Ok(None)
}
