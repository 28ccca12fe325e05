//! Roster notation handling.
//!
//! Implements parsing and serialization for the text surface of the
//! engine: the `Unit#Count;...` roster notation consumed on stdin and
//! emitted for winning arrangements.

pub mod roster;

pub use roster::{encode_army, parse_army, RosterError};
