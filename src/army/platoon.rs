//! Platoons and armies.
//!
//! A platoon is an immutable (unit class, head count) pair. An army is an
//! ordered sequence of platoons whose length is fixed at parse time.

use serde::Serialize;

use super::unit::UnitType;

/// A single combat group: a unit class and its head count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Platoon {
    pub unit_type: UnitType,
    pub count: u64,
}

impl Platoon {
    pub const fn new(unit_type: UnitType, count: u64) -> Self {
        Platoon { unit_type, count }
    }
}

/// An ordered, fixed-length sequence of platoons.
///
/// Two armies are compared positionally; the length invariant is checked
/// at the search boundary, not here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Army {
    platoons: Vec<Platoon>,
}

impl Army {
    pub fn new(platoons: Vec<Platoon>) -> Self {
        Army { platoons }
    }

    pub fn len(&self) -> usize {
        self.platoons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.platoons.is_empty()
    }

    /// Returns the platoons in their current order.
    pub fn platoons(&self) -> &[Platoon] {
        &self.platoons
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Platoon> {
        self.platoons.iter()
    }
}

impl FromIterator<Platoon> for Army {
    fn from_iter<I: IntoIterator<Item = Platoon>>(iter: I) -> Self {
        Army::new(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn army_preserves_order() {
        let army = Army::new(vec![
            Platoon::new(UnitType::Spearmen, 10),
            Platoon::new(UnitType::Militia, 30),
        ]);
        assert_eq!(army.len(), 2);
        assert_eq!(army.platoons()[0].unit_type, UnitType::Spearmen);
        assert_eq!(army.platoons()[1].count, 30);
    }

    #[test]
    fn empty_army() {
        let army = Army::new(Vec::new());
        assert!(army.is_empty());
        assert_eq!(army.len(), 0);
    }
}
