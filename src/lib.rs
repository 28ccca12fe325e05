//! Phalanx engine library.
//!
//! Exposes the army representation, battle resolver, arrangement search,
//! and roster notation modules for use by integration tests and the
//! binary entry point.

pub mod army;
pub mod battle;
pub mod engine;
pub mod protocol;
pub mod search;
