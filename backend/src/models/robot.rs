//! Robots: the driving, cube-carrying actors
//!
//! A robot's behavior is chosen by its attached decider; the robot itself
//! only holds position, carried-cube state, its per-action times, and its
//! one in-flight scheduled action. Hard state transitions (`take_cube`
//! on a loaded robot, for instance) assert their preconditions; the match
//! driver checks them first and treats failures as benign no-ops.

use crate::models::actor::ActionSlot;
use crate::models::location::Location;
use crate::models::score::{Alliance, Score};

/// Seconds a robot spends on each kind of action. Tunable per robot to
/// model faster and slower machines.
#[derive(Debug, Clone, Copy)]
pub struct RobotTimes {
    /// Added to every travel leg.
    pub extra_drive: u32,
    pub pickup: u32,
    pub drop: u32,
    pub place: u32,
    pub climb: u32,
}

impl Default for RobotTimes {
    fn default() -> Self {
        Self {
            extra_drive: 0,
            pickup: 2,
            drop: 1,
            place: 2,
            climb: 5,
        }
    }
}

/// One competing robot.
#[derive(Debug, Clone)]
pub struct Robot {
    name: String,
    alliance: Alliance,
    position: u8,
    location: Location,
    has_cube: bool,
    crossed_line: bool,
    climbed: bool,
    times: RobotTimes,
    slot: ActionSlot,
    actions_done: u32,
    climb_points: i64,
    park_points: i64,
    pending: Score,
}

impl Robot {
    pub fn new(
        alliance: Alliance,
        position: u8,
        times: RobotTimes,
        preloaded_cube: bool,
        climb_points: i64,
        park_points: i64,
    ) -> Self {
        Self {
            name: format!("{} {} Robot", alliance, position),
            alliance,
            position,
            location: Location::wall(alliance),
            has_cube: preloaded_cube,
            crossed_line: false,
            climbed: false,
            times,
            slot: ActionSlot::new(),
            actions_done: 0,
            climb_points,
            park_points,
            pending: Score::ZERO,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn alliance(&self) -> Alliance {
        self.alliance
    }

    pub fn position(&self) -> u8 {
        self.position
    }

    pub fn location(&self) -> Location {
        self.location
    }

    pub fn has_cube(&self) -> bool {
        self.has_cube
    }

    pub fn crossed_line(&self) -> bool {
        self.crossed_line
    }

    pub fn climbed(&self) -> bool {
        self.climbed
    }

    pub fn times(&self) -> &RobotTimes {
        &self.times
    }

    pub fn slot(&self) -> &ActionSlot {
        &self.slot
    }

    pub fn slot_mut(&mut self) -> &mut ActionSlot {
        &mut self.slot
    }

    /// Completed-action hook: fires once after each resolved action.
    pub fn note_action_done(&mut self) {
        self.actions_done += 1;
    }

    pub fn actions_done(&self) -> u32 {
        self.actions_done
    }

    /// Arrival effect of a completed drive. The first arrival past the
    /// auto line during autonomous earns the auto-run bonus, once.
    pub fn arrive(&mut self, destination: Location, autonomous: bool, cross_line_points: i64) {
        self.location = destination;
        if autonomous && !self.crossed_line && destination.past_auto_line() {
            self.crossed_line = true;
            self.pending = self.pending + Score::pick(self.alliance, cross_line_points);
        }
    }

    /// # Panics
    ///
    /// Panics if the robot already carries a cube.
    pub fn take_cube(&mut self) {
        assert!(!self.has_cube, "{} already carries a cube", self.name);
        self.has_cube = true;
    }

    /// # Panics
    ///
    /// Panics if the robot carries no cube.
    pub fn release_cube(&mut self) {
        assert!(self.has_cube, "{} carries no cube", self.name);
        self.has_cube = false;
    }

    /// Climb effect; the driver has already checked location and phase.
    pub fn complete_climb(&mut self) {
        self.climbed = true;
    }

    /// Points earned in the tick just completed; drains the bucket.
    pub fn score(&mut self) -> Score {
        let score = self.pending;
        self.pending = Score::ZERO;
        score
    }

    /// End-of-match bonus: a climb, or a park on the platform.
    pub fn endgame_score(&self) -> Score {
        if self.climbed {
            Score::pick(self.alliance, self.climb_points)
        } else if self.location == Location::platform_zone(self.alliance) {
            Score::pick(self.alliance, self.park_points)
        } else {
            Score::ZERO
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_robot() -> Robot {
        Robot::new(Alliance::Red, 1, RobotTimes::default(), false, 30, 5)
    }

    #[test]
    fn test_auto_run_awarded_once() {
        let mut robot = test_robot();
        robot.arrive(Location::RedFrontInnerZone, true, 5);
        assert!(robot.crossed_line());
        assert_eq!(robot.score(), Score::new(5, 0));

        robot.arrive(Location::RedOuterZone, true, 5);
        assert_eq!(robot.score(), Score::ZERO);
    }

    #[test]
    fn test_no_auto_run_in_teleop() {
        let mut robot = test_robot();
        robot.arrive(Location::RedFrontInnerZone, false, 5);
        assert!(!robot.crossed_line());
        assert_eq!(robot.score(), Score::ZERO);
    }

    #[test]
    fn test_exchange_zone_is_behind_the_line() {
        let mut robot = test_robot();
        robot.arrive(Location::RedExchangeZone, true, 5);
        assert!(!robot.crossed_line());
        assert_eq!(robot.score(), Score::ZERO);

        robot.arrive(Location::RedOuterZone, true, 5);
        assert!(robot.crossed_line());
        assert_eq!(robot.score(), Score::new(5, 0));
    }

    #[test]
    fn test_endgame_climb_beats_park() {
        let mut robot = test_robot();
        robot.arrive(Location::RedPlatformZone, false, 5);
        assert_eq!(robot.endgame_score(), Score::new(5, 0));

        robot.complete_climb();
        assert_eq!(robot.endgame_score(), Score::new(30, 0));
    }

    #[test]
    #[should_panic(expected = "already carries a cube")]
    fn test_double_pickup_panics() {
        let mut robot = test_robot();
        robot.take_cube();
        robot.take_cube();
    }
}
