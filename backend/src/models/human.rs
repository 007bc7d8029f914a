//! Human players at the portals and the exchange station

use crate::models::actor::ActionSlot;
use crate::models::location::{Location, Side};
use crate::models::score::{Alliance, Score};
use std::fmt;

/// Where a human player is stationed for the whole match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HumanStation {
    /// Feeds cubes from a portal onto the field.
    Portal(Side),
    /// Works the exchange: banks cubes into the vault and plays power-ups.
    Exchange,
}

impl fmt::Display for HumanStation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HumanStation::Portal(Side::Front) => write!(f, "FRONT PORTAL"),
            HumanStation::Portal(Side::Back) => write!(f, "BACK PORTAL"),
            HumanStation::Exchange => write!(f, "STATION"),
        }
    }
}

/// Seconds a human spends handling a cube.
#[derive(Debug, Clone, Copy)]
pub struct HumanTimes {
    /// Pushing a cube through the portal.
    pub push: u32,
    /// Moving a cube from the exchange into a vault column, or playing
    /// a power-up.
    pub handle: u32,
}

impl Default for HumanTimes {
    fn default() -> Self {
        Self { push: 2, handle: 2 }
    }
}

/// One human player. Humans never move; portal humans hold a bounded
/// stock of cubes, and their pushed cubes land at a fixed outlet zone.
#[derive(Debug, Clone)]
pub struct Human {
    name: String,
    alliance: Alliance,
    station: HumanStation,
    portal_stock: u32,
    outlet: Location,
    times: HumanTimes,
    slot: ActionSlot,
    actions_done: u32,
    pending: Score,
}

impl Human {
    pub fn new(
        alliance: Alliance,
        station: HumanStation,
        portal_stock: u32,
        outlet: Location,
        times: HumanTimes,
    ) -> Self {
        Self {
            name: format!("{} {} Human", alliance, station),
            alliance,
            station,
            portal_stock,
            outlet,
            times,
            slot: ActionSlot::new(),
            actions_done: 0,
            pending: Score::ZERO,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn alliance(&self) -> Alliance {
        self.alliance
    }

    pub fn station(&self) -> HumanStation {
        self.station
    }

    pub fn portal_stock(&self) -> u32 {
        self.portal_stock
    }

    pub fn outlet(&self) -> Location {
        self.outlet
    }

    pub fn times(&self) -> &HumanTimes {
        &self.times
    }

    pub fn slot(&self) -> &ActionSlot {
        &self.slot
    }

    pub fn slot_mut(&mut self) -> &mut ActionSlot {
        &mut self.slot
    }

    pub fn note_action_done(&mut self) {
        self.actions_done += 1;
    }

    pub fn actions_done(&self) -> u32 {
        self.actions_done
    }

    /// # Panics
    ///
    /// Panics when the portal stock is empty; the driver checks first.
    pub fn take_portal_cube(&mut self) {
        assert!(self.portal_stock > 0, "{} portal stock is empty", self.name);
        self.portal_stock -= 1;
    }

    /// Points earned in the tick just completed; drains the bucket.
    pub fn score(&mut self) -> Score {
        let score = self.pending;
        self.pending = Score::ZERO;
        score
    }

    pub fn endgame_score(&self) -> Score {
        Score::ZERO
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_portal_stock() {
        let mut human = Human::new(
            Alliance::Blue,
            HumanStation::Portal(Side::Front),
            2,
            Location::FrontNullTerritory,
            HumanTimes::default(),
        );
        assert_eq!(human.name(), "BLUE FRONT PORTAL Human");
        human.take_portal_cube();
        human.take_portal_cube();
        assert_eq!(human.portal_stock(), 0);
    }

    #[test]
    #[should_panic(expected = "portal stock is empty")]
    fn test_empty_portal_panics() {
        let mut human = Human::new(
            Alliance::Red,
            HumanStation::Portal(Side::Back),
            0,
            Location::BackNullTerritory,
            HumanTimes::default(),
        );
        human.take_portal_cube();
    }
}
