//! Engagement planning.
//!
//! Ties the pipeline together: parse both rosters, derive the majority
//! threshold, run the arrangement search, and package the outcome for
//! rendering. All failures surface here or earlier; the search itself
//! never fails partway.

use serde::Serialize;

use crate::army::Army;
use crate::protocol::{encode_army, parse_army, RosterError};
use crate::search::{find_arrangement, majority_threshold, SearchError, SearchResult};

/// The user-facing line emitted when no arrangement qualifies.
pub const NO_CHANCE: &str = "There is no chance of winning";

/// Errors from planning an engagement.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error("bad attacker roster: {0}")]
    AttackerRoster(#[source] RosterError),

    #[error("bad defender roster: {0}")]
    DefenderRoster(#[source] RosterError),

    #[error(transparent)]
    Search(#[from] SearchError),
}

/// The outcome of a planned engagement.
#[derive(Debug, Clone, Serialize)]
pub struct Deployment {
    pub attacker: Army,
    pub defender: Army,
    pub threshold: usize,
    /// The first qualifying arrangement, or `None` when none exists.
    pub result: Option<SearchResult>,
}

impl Deployment {
    /// Renders the user-facing result line: the winning ordering in
    /// roster notation, or the no-chance sentinel.
    pub fn render(&self) -> String {
        match &self.result {
            Some(found) => encode_army(&found.arrangement),
            None => NO_CHANCE.to_string(),
        }
    }

    /// Serializes the full deployment report as pretty-printed JSON.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

/// Plans an engagement with the majority threshold derived from the
/// army size.
pub fn plan(attacker_line: &str, defender_line: &str) -> Result<Deployment, EngineError> {
    let attacker = parse_army(attacker_line).map_err(EngineError::AttackerRoster)?;
    let threshold = majority_threshold(attacker.len());
    plan_parsed(attacker, defender_line, threshold)
}

/// Plans an engagement with an explicit win threshold.
pub fn plan_with_threshold(
    attacker_line: &str,
    defender_line: &str,
    threshold: usize,
) -> Result<Deployment, EngineError> {
    let attacker = parse_army(attacker_line).map_err(EngineError::AttackerRoster)?;
    plan_parsed(attacker, defender_line, threshold)
}

fn plan_parsed(
    attacker: Army,
    defender_line: &str,
    threshold: usize,
) -> Result<Deployment, EngineError> {
    let defender = parse_army(defender_line).map_err(EngineError::DefenderRoster)?;
    let result = find_arrangement(&attacker, &defender, threshold)?;

    Ok(Deployment {
        attacker,
        defender,
        threshold,
        result,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const ATTACKER: &str = "Spearmen#10;Militia#30;FootArcher#20;LightCavalry#1000;HeavyCavalry#120";
    const DEFENDER: &str = "Militia#10;Spearmen#10;FootArcher#1000;LightCavalry#120;CavalryArcher#100";
    const GOLDEN: &str = "Spearmen#10;Militia#30;FootArcher#20;HeavyCavalry#120;LightCavalry#1000";

    #[test]
    fn reference_engagement_renders_golden_arrangement() {
        let deployment = plan(ATTACKER, DEFENDER).unwrap();
        assert_eq!(deployment.threshold, 3);
        assert_eq!(deployment.render(), GOLDEN);
    }

    #[test]
    fn explicit_threshold_overrides_majority() {
        // Nothing reaches 5 wins here; the sentinel is the answer.
        let deployment = plan_with_threshold(ATTACKER, DEFENDER, 5).unwrap();
        assert!(deployment.result.is_none());
        assert_eq!(deployment.render(), NO_CHANCE);
    }

    #[test]
    fn hopeless_engagement_renders_sentinel() {
        let deployment = plan("Militia#1", "HeavyCavalry#1000").unwrap();
        assert_eq!(deployment.render(), NO_CHANCE);
    }

    #[test]
    fn attacker_parse_failure_is_attributed() {
        let err = plan("Catapult#10", DEFENDER).unwrap_err();
        assert!(matches!(err, EngineError::AttackerRoster(_)));
    }

    #[test]
    fn defender_parse_failure_is_attributed() {
        let err = plan(ATTACKER, "Militia#ten").unwrap_err();
        assert!(matches!(err, EngineError::DefenderRoster(_)));
    }

    #[test]
    fn length_mismatch_surfaces_as_search_error() {
        let err = plan("Militia#10;Spearmen#10", "Militia#10").unwrap_err();
        assert!(matches!(
            err,
            EngineError::Search(SearchError::LengthMismatch {
                attacker: 2,
                defender: 1
            })
        ));
    }

    #[test]
    fn json_report_contains_arrangement() {
        let deployment = plan(ATTACKER, DEFENDER).unwrap();
        let json = deployment.to_json().unwrap();
        assert!(json.contains("\"threshold\": 3"));
        assert!(json.contains("HeavyCavalry"));
    }
}
