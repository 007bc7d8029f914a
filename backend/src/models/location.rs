//! Field locations and the travel-time table
//!
//! Locations are a closed enum; the string-formatted lookups of older
//! iterations are replaced by explicit constructors such as
//! [`Location::inner_zone`]. Travel times are plain immutable
//! configuration injected at match setup, not process-wide state.

use crate::models::score::Alliance;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Front/back half of the field, as seen from the scoring table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    Front,
    Back,
}

impl Side {
    pub const BOTH: [Side; 2] = [Side::Front, Side::Back];

    /// Stable index for per-side arrays (front = 0, back = 1).
    pub fn index(self) -> usize {
        match self {
            Side::Front => 0,
            Side::Back => 1,
        }
    }
}

/// A named zone on the field.
///
/// Robots occupy exactly one location at a time and move between them
/// according to the [`TravelMap`]. The null territories in the middle of
/// the field are shared; every other zone belongs to one alliance end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Location {
    RedWall,
    BlueWall,
    RedExchangeZone,
    BlueExchangeZone,
    RedFrontInnerZone,
    RedBackInnerZone,
    BlueFrontInnerZone,
    BlueBackInnerZone,
    RedOuterZone,
    BlueOuterZone,
    RedPowerCubeZone,
    BluePowerCubeZone,
    RedPlatformZone,
    BluePlatformZone,
    FrontNullTerritory,
    BackNullTerritory,
}

impl Location {
    /// Starting position against the alliance wall.
    pub fn wall(alliance: Alliance) -> Location {
        match alliance {
            Alliance::Red => Location::RedWall,
            Alliance::Blue => Location::BlueWall,
        }
    }

    pub fn exchange_zone(alliance: Alliance) -> Location {
        match alliance {
            Alliance::Red => Location::RedExchangeZone,
            Alliance::Blue => Location::BlueExchangeZone,
        }
    }

    /// Inner zone next to the alliance's switch plate on the given side.
    pub fn inner_zone(alliance: Alliance, side: Side) -> Location {
        match (alliance, side) {
            (Alliance::Red, Side::Front) => Location::RedFrontInnerZone,
            (Alliance::Red, Side::Back) => Location::RedBackInnerZone,
            (Alliance::Blue, Side::Front) => Location::BlueFrontInnerZone,
            (Alliance::Blue, Side::Back) => Location::BlueBackInnerZone,
        }
    }

    pub fn outer_zone(alliance: Alliance) -> Location {
        match alliance {
            Alliance::Red => Location::RedOuterZone,
            Alliance::Blue => Location::BlueOuterZone,
        }
    }

    pub fn power_cube_zone(alliance: Alliance) -> Location {
        match alliance {
            Alliance::Red => Location::RedPowerCubeZone,
            Alliance::Blue => Location::BluePowerCubeZone,
        }
    }

    pub fn platform_zone(alliance: Alliance) -> Location {
        match alliance {
            Alliance::Red => Location::RedPlatformZone,
            Alliance::Blue => Location::BluePlatformZone,
        }
    }

    /// Null territory beside the scale plate on the given side.
    pub fn null_territory(side: Side) -> Location {
        match side {
            Side::Front => Location::FrontNullTerritory,
            Side::Back => Location::BackNullTerritory,
        }
    }

    pub fn is_inner_zone(self) -> bool {
        matches!(
            self,
            Location::RedFrontInnerZone
                | Location::RedBackInnerZone
                | Location::BlueFrontInnerZone
                | Location::BlueBackInnerZone
        )
    }

    pub fn is_platform_zone(self) -> bool {
        matches!(self, Location::RedPlatformZone | Location::BluePlatformZone)
    }

    /// Whether the zone lies beyond the auto line. The walls, exchange
    /// zones, and power-cube zones are behind it; reaching any other
    /// zone during autonomous earns the auto-run bonus.
    pub fn past_auto_line(self) -> bool {
        !matches!(
            self,
            Location::RedWall
                | Location::BlueWall
                | Location::RedExchangeZone
                | Location::BlueExchangeZone
                | Location::RedPowerCubeZone
                | Location::BluePowerCubeZone
        )
    }

    /// The alliance end this zone belongs to, if it isn't shared.
    pub fn alliance(self) -> Option<Alliance> {
        match self {
            Location::RedWall
            | Location::RedExchangeZone
            | Location::RedFrontInnerZone
            | Location::RedBackInnerZone
            | Location::RedOuterZone
            | Location::RedPowerCubeZone
            | Location::RedPlatformZone => Some(Alliance::Red),
            Location::BlueWall
            | Location::BlueExchangeZone
            | Location::BlueFrontInnerZone
            | Location::BlueBackInnerZone
            | Location::BlueOuterZone
            | Location::BluePowerCubeZone
            | Location::BluePlatformZone => Some(Alliance::Blue),
            Location::FrontNullTerritory | Location::BackNullTerritory => None,
        }
    }
}

/// Symmetric travel times between adjacent locations, in seconds.
///
/// Pairs missing from the table are unreachable in one leg; driving
/// between them is a benign no-op and deciders are expected to route
/// through intermediate zones instead.
#[derive(Debug, Clone, Default)]
pub struct TravelMap {
    times: HashMap<(Location, Location), u32>,
}

impl TravelMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a symmetric leg between two locations.
    pub fn connect(&mut self, a: Location, b: Location, seconds: u32) {
        self.times.insert((a, b), seconds);
        self.times.insert((b, a), seconds);
    }

    /// Travel time between two locations, or `None` when no single leg
    /// connects them. Staying put takes zero nominal seconds (the
    /// scheduling layer coerces that to the one-second minimum).
    pub fn time(&self, from: Location, to: Location) -> Option<u32> {
        if from == to {
            return Some(0);
        }
        self.times.get(&(from, to)).copied()
    }

    /// The standard field layout used by the stock match configuration.
    pub fn standard() -> Self {
        use Location::*;
        let mut map = TravelMap::new();
        for alliance in Alliance::BOTH {
            let wall = Location::wall(alliance);
            let exchange = Location::exchange_zone(alliance);
            let outer = Location::outer_zone(alliance);
            let front_inner = Location::inner_zone(alliance, Side::Front);
            let back_inner = Location::inner_zone(alliance, Side::Back);
            let power_cubes = Location::power_cube_zone(alliance);
            let platform = Location::platform_zone(alliance);

            map.connect(wall, exchange, 2);
            map.connect(wall, outer, 3);
            map.connect(wall, front_inner, 4);
            map.connect(wall, back_inner, 4);
            map.connect(exchange, outer, 2);
            map.connect(exchange, power_cubes, 3);
            map.connect(outer, front_inner, 2);
            map.connect(outer, back_inner, 2);
            map.connect(outer, power_cubes, 2);
            map.connect(outer, platform, 2);
            map.connect(front_inner, back_inner, 2);
            map.connect(front_inner, FrontNullTerritory, 3);
            map.connect(back_inner, BackNullTerritory, 3);
            map.connect(outer, FrontNullTerritory, 4);
            map.connect(outer, BackNullTerritory, 4);
            map.connect(platform, FrontNullTerritory, 2);
            map.connect(platform, BackNullTerritory, 2);
        }
        map.connect(FrontNullTerritory, BackNullTerritory, 3);
        map
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constructors() {
        assert_eq!(
            Location::inner_zone(Alliance::Blue, Side::Front),
            Location::BlueFrontInnerZone
        );
        assert_eq!(
            Location::null_territory(Side::Back),
            Location::BackNullTerritory
        );
    }

    #[test]
    fn test_travel_times_symmetric() {
        let map = TravelMap::standard();
        let bfiz = Location::BlueFrontInnerZone;
        let boz = Location::BlueOuterZone;
        let t = map.time(bfiz, boz).unwrap();
        assert!(t > 0);
        assert_eq!(map.time(boz, bfiz), Some(t));
    }

    #[test]
    fn test_cross_field_pairs_unreachable() {
        let map = TravelMap::standard();
        // Inner zones of opposite alliances only connect via the null
        // territories, never in one leg.
        assert_eq!(
            map.time(Location::BlueFrontInnerZone, Location::RedFrontInnerZone),
            None
        );
    }

    #[test]
    fn test_same_location_is_free() {
        let map = TravelMap::standard();
        assert_eq!(map.time(Location::RedWall, Location::RedWall), Some(0));
    }

    #[test]
    fn test_is_inner_zone() {
        assert!(Location::BlueFrontInnerZone.is_inner_zone());
        assert!(!Location::BlueOuterZone.is_inner_zone());
    }

    #[test]
    fn test_past_auto_line() {
        assert!(Location::RedOuterZone.past_auto_line());
        assert!(Location::FrontNullTerritory.past_auto_line());
        assert!(!Location::RedWall.past_auto_line());
        assert!(!Location::RedExchangeZone.past_auto_line());
        assert!(!Location::BluePowerCubeZone.past_auto_line());
    }
}
