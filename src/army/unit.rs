//! Unit classes and the type-advantage table.
//!
//! All six unit classes are enumerated with their directed advantage
//! relation compiled in. The table is fixed at definition time and never
//! mutated; it is directed and not symmetric, and absence of an
//! entry means no advantage in either direction.

use serde::Serialize;

/// The number of unit classes.
pub const UNIT_TYPE_COUNT: usize = 6;

/// A unit class.
///
/// The `#[repr(u8)]` attribute enables use as an array index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[repr(u8)]
pub enum UnitType {
    Militia = 0,
    Spearmen = 1,
    LightCavalry = 2,
    HeavyCavalry = 3,
    CavalryArcher = 4,
    FootArcher = 5,
}

/// All unit class variants in index order.
pub const ALL_UNIT_TYPES: [UnitType; UNIT_TYPE_COUNT] = [
    UnitType::Militia,
    UnitType::Spearmen,
    UnitType::LightCavalry,
    UnitType::HeavyCavalry,
    UnitType::CavalryArcher,
    UnitType::FootArcher,
];

impl UnitType {
    /// Returns the roster-notation name for this unit class.
    pub const fn name(self) -> &'static str {
        match self {
            UnitType::Militia => "Militia",
            UnitType::Spearmen => "Spearmen",
            UnitType::LightCavalry => "LightCavalry",
            UnitType::HeavyCavalry => "HeavyCavalry",
            UnitType::CavalryArcher => "CavalryArcher",
            UnitType::FootArcher => "FootArcher",
        }
    }

    /// Parses a unit class from its roster-notation name.
    pub fn from_name(s: &str) -> Option<UnitType> {
        match s {
            "Militia" => Some(UnitType::Militia),
            "Spearmen" => Some(UnitType::Spearmen),
            "LightCavalry" => Some(UnitType::LightCavalry),
            "HeavyCavalry" => Some(UnitType::HeavyCavalry),
            "CavalryArcher" => Some(UnitType::CavalryArcher),
            "FootArcher" => Some(UnitType::FootArcher),
            _ => None,
        }
    }

    /// Returns the unit classes this class holds an advantage over.
    pub const fn advantages(self) -> &'static [UnitType] {
        match self {
            UnitType::Militia => &[UnitType::Spearmen, UnitType::LightCavalry],
            UnitType::Spearmen => &[UnitType::LightCavalry, UnitType::HeavyCavalry],
            UnitType::LightCavalry => &[UnitType::FootArcher, UnitType::CavalryArcher],
            UnitType::HeavyCavalry => {
                &[UnitType::Militia, UnitType::FootArcher, UnitType::LightCavalry]
            }
            UnitType::CavalryArcher => &[UnitType::Spearmen, UnitType::HeavyCavalry],
            UnitType::FootArcher => &[UnitType::Militia, UnitType::CavalryArcher],
        }
    }

    /// Returns true if this class holds an advantage over `other`.
    pub fn has_advantage_over(self, other: UnitType) -> bool {
        self.advantages().contains(&other)
    }
}
