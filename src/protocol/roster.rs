//! Roster notation encoding and decoding.
//!
//! Roster notation is a compact string form for an ordered army:
//! `<UnitName>#<Count>[;<UnitName>#<Count>]*`. Platoons are separated by
//! `;`, unit name and head count by `#`. Whitespace around names and
//! counts is tolerated and stripped. Encoding a parsed army and
//! re-parsing it yields an identical sequence.

use crate::army::{Army, Platoon, UnitType};

/// Errors that can occur during roster parsing.
#[derive(Debug, thiserror::Error)]
pub enum RosterError {
    #[error("empty roster")]
    EmptyRoster,

    #[error("expected exactly one '#' in platoon entry: '{0}'")]
    MalformedEntry(String),

    #[error("empty unit name in platoon entry: '{0}'")]
    EmptyUnitName(String),

    #[error("unknown unit class: '{0}'")]
    UnknownUnit(String),

    #[error("invalid head count: '{0}'")]
    InvalidCount(String),
}

/// Parses a single `Unit#Count` entry into a platoon.
fn parse_platoon(entry: &str) -> Result<Platoon, RosterError> {
    let mut parts = entry.split('#');
    let (name, count) = match (parts.next(), parts.next(), parts.next()) {
        (Some(name), Some(count), None) => (name.trim(), count.trim()),
        _ => return Err(RosterError::MalformedEntry(entry.to_string())),
    };

    if name.is_empty() {
        return Err(RosterError::EmptyUnitName(entry.to_string()));
    }

    let unit_type =
        UnitType::from_name(name).ok_or_else(|| RosterError::UnknownUnit(name.to_string()))?;

    let count: u64 = count
        .parse()
        .map_err(|_| RosterError::InvalidCount(count.to_string()))?;

    Ok(Platoon::new(unit_type, count))
}

/// Parses a full roster line into an army, preserving platoon order.
pub fn parse_army(line: &str) -> Result<Army, RosterError> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return Err(RosterError::EmptyRoster);
    }

    trimmed.split(';').map(parse_platoon).collect()
}

/// Encodes an army in canonical roster notation.
pub fn encode_army(army: &Army) -> String {
    let entries: Vec<String> = army
        .iter()
        .map(|p| format!("{}#{}", p.unit_type.name(), p.count))
        .collect();
    entries.join(";")
}
