//! Army representation.
//!
//! Contains the core data structures for unit classes, the advantage
//! table, platoons, and ordered armies.

pub mod platoon;
pub mod unit;

pub use platoon::{Army, Platoon};
pub use unit::{UnitType, ALL_UNIT_TYPES, UNIT_TYPE_COUNT};
