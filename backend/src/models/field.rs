//! Shared field stock: loose cubes on the floor and the exchange stores
//!
//! Cube counts are touched only synchronously inside a tick's update
//! pass, so plain counters suffice; whichever actor's effect runs first
//! in registration order gets the cube, and a losing simultaneous
//! attempt is a benign no-op.

use crate::models::location::{Location, Side};
use crate::models::score::Alliance;
use crate::models::seesaw::SeesawKey;
use std::collections::HashMap;

/// What a placed cube lands on at a given location.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaceTarget {
    /// A seesaw plate.
    Plate(SeesawKey, Side),
    /// The alliance's exchange chute.
    Exchange(Alliance),
}

/// The scoring structure reachable from a location, if any.
pub fn place_target(location: Location) -> Option<PlaceTarget> {
    use Location::*;
    match location {
        RedFrontInnerZone => Some(PlaceTarget::Plate(SeesawKey::Switch(Alliance::Red), Side::Front)),
        RedBackInnerZone => Some(PlaceTarget::Plate(SeesawKey::Switch(Alliance::Red), Side::Back)),
        BlueFrontInnerZone => {
            Some(PlaceTarget::Plate(SeesawKey::Switch(Alliance::Blue), Side::Front))
        }
        BlueBackInnerZone => {
            Some(PlaceTarget::Plate(SeesawKey::Switch(Alliance::Blue), Side::Back))
        }
        FrontNullTerritory => Some(PlaceTarget::Plate(SeesawKey::Scale, Side::Front)),
        BackNullTerritory => Some(PlaceTarget::Plate(SeesawKey::Scale, Side::Back)),
        RedExchangeZone => Some(PlaceTarget::Exchange(Alliance::Red)),
        BlueExchangeZone => Some(PlaceTarget::Exchange(Alliance::Blue)),
        _ => None,
    }
}

/// Loose cubes on the floor plus the per-alliance exchange stores.
#[derive(Debug, Clone, Default)]
pub struct FieldStock {
    floor: HashMap<Location, u32>,
    exchange: [u32; 2],
}

impl FieldStock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the floor with cubes at a location.
    pub fn seed_floor(&mut self, location: Location, count: u32) {
        *self.floor.entry(location).or_insert(0) += count;
    }

    pub fn floor_count(&self, location: Location) -> u32 {
        self.floor.get(&location).copied().unwrap_or(0)
    }

    pub fn add_floor(&mut self, location: Location) {
        self.seed_floor(location, 1);
    }

    /// Take one cube from the floor; `false` when there is none.
    pub fn take_floor(&mut self, location: Location) -> bool {
        match self.floor.get_mut(&location) {
            Some(count) if *count > 0 => {
                *count -= 1;
                true
            }
            _ => false,
        }
    }

    pub fn exchange_count(&self, alliance: Alliance) -> u32 {
        self.exchange[alliance.index()]
    }

    /// A robot feeds a cube through the exchange chute.
    pub fn push_exchange(&mut self, alliance: Alliance) {
        self.exchange[alliance.index()] += 1;
    }

    /// The station human takes a cube out; `false` when empty.
    pub fn take_exchange(&mut self, alliance: Alliance) -> bool {
        if self.exchange[alliance.index()] > 0 {
            self.exchange[alliance.index()] -= 1;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_floor_take_and_exhaust() {
        let mut stock = FieldStock::new();
        stock.seed_floor(Location::RedPowerCubeZone, 2);
        assert!(stock.take_floor(Location::RedPowerCubeZone));
        assert!(stock.take_floor(Location::RedPowerCubeZone));
        assert!(!stock.take_floor(Location::RedPowerCubeZone));
        assert!(!stock.take_floor(Location::RedOuterZone));
    }

    #[test]
    fn test_exchange_store() {
        let mut stock = FieldStock::new();
        assert!(!stock.take_exchange(Alliance::Red));
        stock.push_exchange(Alliance::Red);
        assert_eq!(stock.exchange_count(Alliance::Red), 1);
        assert!(stock.take_exchange(Alliance::Red));
        assert_eq!(stock.exchange_count(Alliance::Blue), 0);
    }

    #[test]
    fn test_place_targets() {
        assert_eq!(
            place_target(Location::FrontNullTerritory),
            Some(PlaceTarget::Plate(SeesawKey::Scale, Side::Front))
        );
        assert_eq!(
            place_target(Location::RedExchangeZone),
            Some(PlaceTarget::Exchange(Alliance::Red))
        );
        assert_eq!(place_target(Location::RedOuterZone), None);
    }
}
