//! Match engine
//!
//! Main simulation loop integrating all components:
//! - Actor registration (fixed order decided at setup)
//! - The scheduled-action protocol (resolve, then idle-resumption)
//! - Decider driving (one resumption per idle actor per tick)
//! - Score aggregation (every actor polled exactly once per tick)
//! - Reporting (one record row per tick)
//!
//! # Architecture
//!
//! Each call to [`MatchSimulation::tick`] performs:
//!
//! ```text
//! 1. Advance the clock (Err(MatchOver) ends the run)
//! 2. Update every actor in registration order:
//!      robots/humans: fire a due action, then resume the decider
//!      power-up queue: expire and activate power-ups
//!      seesaws: expire windows, bank ownership points
//! 3. Poll score() of every actor once, same order; fold into totals
//! 4. Capture the auto-quest snapshot at the autonomous boundary
//! 5. Log one report row
//! ```
//!
//! Mutations are visible to whichever actor updates later in the same
//! tick; there is no two-phase commit. That is a deliberate property of
//! the single-threaded stepping model, not a race.

use crate::core::time::{MatchClock, MatchOver};
use crate::decider::{Decider, Step, StepContext};
use crate::models::actor::Action;
use crate::models::field::{place_target, PlaceTarget};
use crate::models::human::{Human, HumanStation, HumanTimes};
use crate::models::location::{Location, Side, TravelMap};
use crate::models::robot::{Robot, RobotTimes};
use crate::models::score::{Alliance, Score};
use crate::models::seesaw::Seesaw;
use crate::models::state::{ActorKey, MatchState};
use crate::models::vault::{PowerUp, PowerUpKind, PowerUpQueue, Vault};
use crate::report::{ReportLog, ReportRow};
use log::{debug, trace, warn};
use serde::Serialize;
use std::collections::{HashMap, HashSet};
use thiserror::Error;

// ============================================================================
// Configuration Types
// ============================================================================

/// Point values for every scoring rule in the game.
///
/// These are swappable domain content; the defaults follow the stock
/// rules. Ownership points are per owned second, doubled during
/// autonomous and doubled again under a boost.
#[derive(Debug, Clone)]
pub struct PointValues {
    /// Auto-run bonus for crossing the line during autonomous.
    pub cross_line_auto: i64,
    /// One-time bonus for gaining a switch during autonomous.
    pub gain_switch_auto: i64,
    /// One-time bonus for gaining the scale during autonomous.
    pub gain_scale_auto: i64,
    /// Base points per second of seesaw ownership.
    pub ownership: i64,
    /// Points for banking a cube in a vault column.
    pub vault_cube: i64,
    /// Endgame points for a completed climb (levitate pays the same).
    pub climb: i64,
    /// Endgame points for parking on the platform.
    pub park: i64,
}

impl Default for PointValues {
    fn default() -> Self {
        Self {
            cross_line_auto: 5,
            gain_switch_auto: 2,
            gain_scale_auto: 2,
            ownership: 1,
            vault_cube: 5,
            climb: 30,
            park: 5,
        }
    }
}

/// Per-robot configuration.
#[derive(Debug, Clone)]
pub struct RobotConfig {
    pub alliance: Alliance,
    /// Driver-station position, 1 through 3.
    pub position: u8,
    /// Whether the robot starts the match carrying a cube.
    pub preloaded_cube: bool,
    pub times: RobotTimes,
}

/// Per-human configuration.
#[derive(Debug, Clone)]
pub struct HumanConfig {
    pub alliance: Alliance,
    pub station: HumanStation,
    /// Cubes behind a portal; ignored for the exchange station.
    pub portal_stock: u32,
    /// Where pushed cubes land. Defaults to the null territory on the
    /// portal's side.
    pub outlet: Option<Location>,
    pub times: HumanTimes,
}

/// Complete match configuration.
///
/// Durations, FMS plate colors, point values, the travel table, and the
/// full roster are all explicit immutable inputs; nothing about a match
/// is process-wide state.
#[derive(Debug, Clone)]
pub struct MatchConfig {
    /// Length of the autonomous period in seconds.
    pub autonomous_secs: u32,
    /// Length of the teleop period in seconds.
    pub teleop_secs: u32,
    /// How long a force power-up holds its seesaws.
    pub force_secs: u32,
    /// How long a boost power-up doubles points.
    pub boost_secs: u32,
    /// FMS choice: alliance color facing the front switch plates.
    pub switch_front_color: Alliance,
    /// FMS choice: alliance color facing the front scale plate.
    pub scale_front_color: Alliance,
    pub points: PointValues,
    pub robots: Vec<RobotConfig>,
    pub humans: Vec<HumanConfig>,
    pub travel: TravelMap,
    /// Cubes seeded on the floor at match start.
    pub floor_cubes: Vec<(Location, u32)>,
}

impl MatchConfig {
    /// Total match duration in seconds.
    pub fn match_secs(&self) -> u32 {
        self.autonomous_secs + self.teleop_secs
    }

    /// The stock match: 15 s autonomous plus 135 s teleop, three
    /// preloaded robots and three humans per alliance, ten cubes in
    /// each power-cube zone, and seven behind each portal.
    pub fn standard() -> Self {
        let mut robots = Vec::new();
        let mut humans = Vec::new();
        for alliance in Alliance::BOTH {
            for position in 1..=3 {
                robots.push(RobotConfig {
                    alliance,
                    position,
                    preloaded_cube: true,
                    times: RobotTimes::default(),
                });
            }
            for side in Side::BOTH {
                humans.push(HumanConfig {
                    alliance,
                    station: HumanStation::Portal(side),
                    portal_stock: 7,
                    outlet: None,
                    times: HumanTimes::default(),
                });
            }
            humans.push(HumanConfig {
                alliance,
                station: HumanStation::Exchange,
                portal_stock: 0,
                outlet: None,
                times: HumanTimes::default(),
            });
        }
        Self {
            autonomous_secs: 15,
            teleop_secs: 135,
            force_secs: 10,
            boost_secs: 10,
            switch_front_color: Alliance::Red,
            scale_front_color: Alliance::Red,
            points: PointValues::default(),
            robots,
            humans,
            travel: TravelMap::standard(),
            floor_cubes: vec![
                (Location::RedPowerCubeZone, 10),
                (Location::BluePowerCubeZone, 10),
            ],
        }
    }
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self::standard()
    }
}

/// Setup error types.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SimulationError {
    /// Configuration validation error
    #[error("invalid config: {0}")]
    InvalidConfig(String),
}

/// Result of a single tick.
#[derive(Debug, Clone, Copy)]
pub struct TickResult {
    /// Match second this tick advanced to.
    pub tick: u32,
    /// Points earned this tick across all actors.
    pub score: Score,
    /// Running total after this tick.
    pub total: Score,
}

/// Final state of a completed match.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct MatchOutcome {
    /// Final score including endgame bonuses.
    pub score: Score,
    /// Ranking points: win/loss/tie plus bonus RPs.
    pub ranking: Score,
    /// Auto-quest bonus RP earned, indexed by [`Alliance::index`].
    pub auto_quest: [bool; 2],
    /// Face-the-boss bonus RP earned, indexed by [`Alliance::index`].
    pub face_the_boss: [bool; 2],
}

// ============================================================================
// MatchSimulation
// ============================================================================

/// Owns the clock, the actor set, and the attached deciders, and drives
/// the whole match.
///
/// # Determinism
///
/// There is no randomness anywhere: the same configuration and deciders
/// produce the identical tick-by-tick history on every run.
pub struct MatchSimulation {
    clock: MatchClock,
    state: MatchState,
    deciders: HashMap<ActorKey, Box<dyn Decider>>,
    travel: TravelMap,
    points: PointValues,
    force_secs: u32,
    boost_secs: u32,
    total: Score,
    history: Vec<Score>,
    auto_quest: [bool; 2],
    finished: bool,
    report: ReportLog,
}

impl MatchSimulation {
    /// Create a simulation from a validated configuration.
    ///
    /// All actors are created and registered here, before the first
    /// tick: robots, then humans, then the field structures.
    pub fn new(config: MatchConfig) -> Result<Self, SimulationError> {
        Self::validate_config(&config)?;

        let points = config.points.clone();
        let mut state = MatchState::new(
            Seesaw::switch(
                Alliance::Red,
                config.switch_front_color,
                points.ownership,
                points.gain_switch_auto,
            ),
            Seesaw::switch(
                Alliance::Blue,
                config.switch_front_color,
                points.ownership,
                points.gain_switch_auto,
            ),
            Seesaw::scale(config.scale_front_color, points.ownership, points.gain_scale_auto),
            Vault::new(Alliance::Red, points.vault_cube, points.climb),
            Vault::new(Alliance::Blue, points.vault_cube, points.climb),
            PowerUpQueue::new(config.force_secs, config.boost_secs),
        );

        for rc in &config.robots {
            state.add_robot(Robot::new(
                rc.alliance,
                rc.position,
                rc.times,
                rc.preloaded_cube,
                points.climb,
                points.park,
            ));
        }
        for hc in &config.humans {
            let outlet = hc.outlet.unwrap_or(match hc.station {
                HumanStation::Portal(side) => Location::null_territory(side),
                HumanStation::Exchange => Location::exchange_zone(hc.alliance),
            });
            state.add_human(Human::new(
                hc.alliance,
                hc.station,
                hc.portal_stock,
                outlet,
                hc.times,
            ));
        }
        state.register_field_actors();

        for &(location, count) in &config.floor_cubes {
            state.stock_mut().seed_floor(location, count);
        }

        Ok(Self {
            clock: MatchClock::new(config.autonomous_secs, config.match_secs()),
            state,
            deciders: HashMap::new(),
            travel: config.travel,
            points,
            force_secs: config.force_secs,
            boost_secs: config.boost_secs,
            total: Score::ZERO,
            history: Vec::new(),
            auto_quest: [false; 2],
            finished: false,
            report: ReportLog::new(),
        })
    }

    fn validate_config(config: &MatchConfig) -> Result<(), SimulationError> {
        if config.autonomous_secs == 0 {
            return Err(SimulationError::InvalidConfig(
                "autonomous_secs must be > 0".to_string(),
            ));
        }
        if config.teleop_secs == 0 {
            return Err(SimulationError::InvalidConfig(
                "teleop_secs must be > 0".to_string(),
            ));
        }

        let mut robot_slots = HashSet::new();
        for rc in &config.robots {
            if !(1..=3).contains(&rc.position) {
                return Err(SimulationError::InvalidConfig(format!(
                    "robot position must be 1..=3, got {}",
                    rc.position
                )));
            }
            if !robot_slots.insert((rc.alliance, rc.position)) {
                return Err(SimulationError::InvalidConfig(format!(
                    "duplicate robot: {} {}",
                    rc.alliance, rc.position
                )));
            }
        }

        let mut human_slots = HashSet::new();
        for hc in &config.humans {
            if !human_slots.insert((hc.alliance, hc.station)) {
                return Err(SimulationError::InvalidConfig(format!(
                    "duplicate human: {} {}",
                    hc.alliance, hc.station
                )));
            }
        }

        Ok(())
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    pub fn clock(&self) -> &MatchClock {
        &self.clock
    }

    /// Seconds elapsed since the start of the match.
    pub fn seconds(&self) -> u32 {
        self.clock.seconds()
    }

    pub fn state(&self) -> &MatchState {
        &self.state
    }

    /// Mutable state access, primarily for tests. Direct mutation
    /// bypasses engine invariants; use with caution.
    pub fn state_mut(&mut self) -> &mut MatchState {
        &mut self.state
    }

    /// Running total including any endgame bonuses scored so far.
    pub fn total_score(&self) -> Score {
        self.total
    }

    /// Per-tick scores, one entry per completed tick.
    pub fn history(&self) -> &[Score] {
        &self.history
    }

    pub fn report(&self) -> &ReportLog {
        &self.report
    }

    // ========================================================================
    // Setup Operations
    // ========================================================================

    /// Attach a decider to a robot or human.
    ///
    /// The decider is driven once immediately so the actor's first
    /// action is scheduled at attachment time rather than on the first
    /// tick.
    ///
    /// # Panics
    ///
    /// Panics when the key names a non-scheduling actor or a decider is
    /// already attached; both are setup bugs.
    pub fn set_decider(&mut self, key: ActorKey, decider: Box<dyn Decider>) {
        assert!(
            matches!(key, ActorKey::Robot(_) | ActorKey::Human(_)),
            "cannot attach a decider to {:?}",
            key
        );
        assert!(
            self.deciders.insert(key, decider).is_none(),
            "a decider is already attached to {:?}",
            key
        );
        let now = self.clock.seconds();
        self.resume_idle(key, now);
    }

    /// Schedule an action on an actor directly, replacing whatever was
    /// pending. Exposed for setup and tests; deciders normally do this.
    pub fn schedule_action(
        &mut self,
        key: ActorKey,
        delay: i64,
        action: Action,
        label: impl Into<String>,
    ) {
        let now = self.clock.seconds();
        match key {
            ActorKey::Robot(i) => self.state.robot_mut(i).slot_mut().schedule(now, delay, action, label),
            ActorKey::Human(i) => self.state.human_mut(i).slot_mut().schedule(now, delay, action, label),
            _ => panic!("actor {:?} cannot schedule actions", key),
        }
    }

    // ========================================================================
    // Tick Loop
    // ========================================================================

    /// Execute one simulation tick.
    ///
    /// Advances time, updates every actor in registration order, then
    /// polls every actor's score exactly once (also in registration
    /// order) and folds the results into the running total.
    ///
    /// Returns [`MatchOver`] when the match duration is exhausted; that
    /// is the normal end of the run, and the driving loop must stop.
    pub fn tick(&mut self) -> Result<TickResult, MatchOver> {
        let now = self.clock.advance()?;

        let keys: Vec<ActorKey> = self.state.registry().to_vec();
        for &key in &keys {
            self.update_actor(key, now);
        }

        let mut tick_score = Score::ZERO;
        for &key in &keys {
            tick_score = tick_score + self.score_actor(key);
        }
        self.total = self.total + tick_score;
        self.history.push(tick_score);

        if now == self.clock.autonomous_secs() {
            self.capture_auto_quest();
        }

        let row = self.build_report_row(now, tick_score);
        self.report.log(row);

        debug!("tick {}: {} (total {})", now, tick_score, self.total);
        Ok(TickResult {
            tick: now,
            score: tick_score,
            total: self.total,
        })
    }

    /// Run every remaining tick, then score the endgame.
    pub fn run(&mut self) -> MatchOutcome {
        while self.tick().is_ok() {}
        self.finish()
    }

    fn update_actor(&mut self, key: ActorKey, now: u32) {
        match key {
            ActorKey::Robot(i) => {
                if let Some(action) = self.state.robot_mut(i).slot_mut().take_due(now) {
                    self.apply_robot_action(i, action);
                    self.state.robot_mut(i).note_action_done();
                }
                if self.state.robot(i).slot().is_idle() {
                    self.resume_idle(key, now);
                }
            }
            ActorKey::Human(i) => {
                if let Some(action) = self.state.human_mut(i).slot_mut().take_due(now) {
                    self.apply_human_action(i, action);
                    self.state.human_mut(i).note_action_done();
                }
                if self.state.human(i).slot().is_idle() {
                    self.resume_idle(key, now);
                }
            }
            ActorKey::Vault(_) => {}
            ActorKey::PowerUps => {
                if let Some(powerup) = self.state.powerups_mut().advance(now) {
                    self.activate_powerup(powerup, now);
                }
            }
            ActorKey::Seesaw(k) => {
                let autonomous = self.clock.autonomous();
                self.state.seesaw_mut(k).update(now, autonomous);
            }
        }
    }

    /// Drive the attached decider once and schedule its step. Actors
    /// without a decider simply stay idle.
    fn resume_idle(&mut self, key: ActorKey, now: u32) {
        let Some(decider) = self.deciders.get_mut(&key) else {
            return;
        };
        let ctx = StepContext {
            clock: &self.clock,
            state: &self.state,
            actor: key,
        };
        let step = decider.next_step(&ctx);
        trace!("{} decides: {}", self.state.name_of(key), step.label);
        self.schedule_step(key, step, now);
    }

    fn schedule_step(&mut self, key: ActorKey, step: Step, now: u32) {
        let Step { mut action, label } = step;
        let delay = match key {
            ActorKey::Robot(i) => match self.robot_action_delay(i, action) {
                Some(delay) => delay,
                None => {
                    // No route: the drive degrades to a one-second no-op.
                    warn!(
                        "{} cannot reach {:?} from {:?}",
                        self.state.robot(i).name(),
                        action,
                        self.state.robot(i).location()
                    );
                    action = Action::Idle;
                    1
                }
            },
            ActorKey::Human(i) => self.human_action_delay(i, action),
            _ => panic!("actor {:?} cannot schedule actions", key),
        };
        match key {
            ActorKey::Robot(i) => self.state.robot_mut(i).slot_mut().schedule(now, delay, action, label),
            ActorKey::Human(i) => self.state.human_mut(i).slot_mut().schedule(now, delay, action, label),
            _ => unreachable!(),
        }
    }

    /// Nominal delay for a robot action; `None` when a drive has no
    /// route. The slot applies the one-second minimum.
    fn robot_action_delay(&self, index: usize, action: Action) -> Option<i64> {
        let robot = self.state.robot(index);
        let times = robot.times();
        Some(match action {
            Action::Idle => 1,
            Action::DriveTo(destination) => {
                let base = self.travel.time(robot.location(), destination)?;
                i64::from(base + times.extra_drive)
            }
            Action::Pickup => i64::from(times.pickup),
            Action::Drop => i64::from(times.drop),
            Action::Place => i64::from(times.place),
            Action::Climb => i64::from(times.climb),
            Action::WaitForTeleop => {
                i64::from(self.clock.teleop_start()) - i64::from(self.clock.seconds())
            }
            other => panic!("{} cannot perform {:?}", robot.name(), other),
        })
    }

    fn human_action_delay(&self, index: usize, action: Action) -> i64 {
        let human = self.state.human(index);
        let times = human.times();
        match action {
            Action::Idle => 1,
            Action::PushThroughPortal => i64::from(times.push),
            Action::MoveCubeToVault(_) | Action::PlayPowerUp(_) => i64::from(times.handle),
            Action::WaitForTeleop => {
                i64::from(self.clock.teleop_start()) - i64::from(self.clock.seconds())
            }
            other => panic!("{} cannot perform {:?}", human.name(), other),
        }
    }

    /// Run a robot's due effect. Unmet preconditions make the effect a
    /// silent no-op; the robot proceeds to its next instruction on
    /// schedule either way.
    fn apply_robot_action(&mut self, index: usize, action: Action) {
        let autonomous = self.clock.autonomous();
        match action {
            Action::Idle | Action::WaitForTeleop => {}
            Action::DriveTo(destination) => {
                let cross_line = self.points.cross_line_auto;
                self.state.robot_mut(index).arrive(destination, autonomous, cross_line);
            }
            Action::Pickup => {
                let location = self.state.robot(index).location();
                if !self.state.robot(index).has_cube()
                    && self.state.stock_mut().take_floor(location)
                {
                    self.state.robot_mut(index).take_cube();
                } else {
                    trace!("{}: nothing to pick up", self.state.robot(index).name());
                }
            }
            Action::Drop => {
                if self.state.robot(index).has_cube() {
                    let location = self.state.robot(index).location();
                    self.state.robot_mut(index).release_cube();
                    self.state.stock_mut().add_floor(location);
                }
            }
            Action::Place => self.place_cube(index),
            Action::Climb => {
                let robot = self.state.robot(index);
                let on_platform = robot.location() == Location::platform_zone(robot.alliance());
                if on_platform && !autonomous {
                    self.state.robot_mut(index).complete_climb();
                } else {
                    trace!("{}: cannot climb here", self.state.robot(index).name());
                }
            }
            other => panic!(
                "{} cannot perform {:?}",
                self.state.robot(index).name(),
                other
            ),
        }
    }

    /// Place a carried cube on whatever structure the robot is next to.
    fn place_cube(&mut self, index: usize) {
        let robot = self.state.robot(index);
        if !robot.has_cube() {
            trace!("{}: no cube to place", robot.name());
            return;
        }
        let alliance = robot.alliance();
        match place_target(robot.location()) {
            Some(PlaceTarget::Plate(seesaw, side)) => {
                self.state.robot_mut(index).release_cube();
                self.state.seesaw_mut(seesaw).add_cube(side);
            }
            Some(PlaceTarget::Exchange(owner)) if owner == alliance => {
                self.state.robot_mut(index).release_cube();
                self.state.stock_mut().push_exchange(alliance);
            }
            Some(PlaceTarget::Exchange(_)) | None => {
                trace!("{}: nothing to place on here", self.state.robot(index).name());
            }
        }
    }

    /// Run a human's due effect. Playing a power-up during autonomous
    /// is an alliance-restricted action in a disallowed phase and
    /// aborts the run; everything else degrades to a benign no-op.
    fn apply_human_action(&mut self, index: usize, action: Action) {
        match action {
            Action::Idle | Action::WaitForTeleop => {}
            Action::PushThroughPortal => {
                if self.state.human(index).portal_stock() > 0 {
                    let outlet = self.state.human(index).outlet();
                    self.state.human_mut(index).take_portal_cube();
                    self.state.stock_mut().add_floor(outlet);
                } else {
                    trace!("{}: portal is empty", self.state.human(index).name());
                }
            }
            Action::MoveCubeToVault(kind) => {
                let alliance = self.state.human(index).alliance();
                if self.state.vault(alliance).column(kind).can_accept()
                    && self.state.stock_mut().take_exchange(alliance)
                {
                    self.state.vault_mut(alliance).bank_cube(kind);
                } else {
                    trace!("{}: cannot bank a cube", self.state.human(index).name());
                }
            }
            Action::PlayPowerUp(kind) => {
                assert!(
                    !self.clock.autonomous(),
                    "{} played {:?} during autonomous",
                    self.state.human(index).name(),
                    kind
                );
                let alliance = self.state.human(index).alliance();
                if self.state.vault(alliance).column(kind).playable() {
                    let powerup = self.state.vault_mut(alliance).play(kind);
                    self.state.powerups_mut().enqueue(powerup);
                } else {
                    trace!("{}: {:?} is not playable", self.state.human(index).name(), kind);
                }
            }
            other => panic!(
                "{} cannot perform {:?}",
                self.state.human(index).name(),
                other
            ),
        }
    }

    /// Apply a newly activated power-up to its targets. Level 1 hits
    /// the alliance's switch, level 2 the scale, level 3 both.
    fn activate_powerup(&mut self, powerup: PowerUp, now: u32) {
        debug!(
            "{} {:?} power-up activates at level {}",
            powerup.alliance, powerup.kind, powerup.level
        );
        match powerup.kind {
            PowerUpKind::Levitate => {
                self.state.vault_mut(powerup.alliance).grant_levitate_credit();
            }
            PowerUpKind::Force => {
                let until = now + self.force_secs;
                self.for_each_target(powerup, |seesaw| seesaw.force(powerup.alliance, until));
            }
            PowerUpKind::Boost => {
                let until = now + self.boost_secs;
                self.for_each_target(powerup, |seesaw| seesaw.boost(powerup.alliance, until));
            }
        }
    }

    fn for_each_target(&mut self, powerup: PowerUp, mut apply: impl FnMut(&mut Seesaw)) {
        use crate::models::seesaw::SeesawKey;
        if powerup.level == 1 || powerup.level >= 3 {
            apply(self.state.seesaw_mut(SeesawKey::Switch(powerup.alliance)));
        }
        if powerup.level >= 2 {
            apply(self.state.seesaw_mut(SeesawKey::Scale));
        }
    }

    /// Poll one actor's per-tick score. Called exactly once per actor
    /// per tick, after all updates.
    fn score_actor(&mut self, key: ActorKey) -> Score {
        match key {
            ActorKey::Robot(i) => self.state.robot_mut(i).score(),
            ActorKey::Human(i) => self.state.human_mut(i).score(),
            ActorKey::Vault(a) => self.state.vault_mut(a).score(),
            ActorKey::PowerUps => Score::ZERO,
            ActorKey::Seesaw(k) => self.state.seesaw_mut(k).score(),
        }
    }

    /// At the last autonomous second, note which alliances completed
    /// the auto-quest: every robot crossed the line and the alliance
    /// owns its switch.
    fn capture_auto_quest(&mut self) {
        for alliance in Alliance::BOTH {
            let robots: Vec<&Robot> = self
                .state
                .robots()
                .iter()
                .filter(|r| r.alliance() == alliance)
                .collect();
            let all_crossed = !robots.is_empty() && robots.iter().all(|r| r.crossed_line());
            let owns_switch = self.state.switch(alliance).owner() == Some(alliance);
            self.auto_quest[alliance.index()] = all_crossed && owns_switch;
        }
    }

    fn build_report_row(&self, now: u32, tick_score: Score) -> ReportRow {
        let mut entries = Vec::new();
        for &key in self.state.registry() {
            let value = match key {
                ActorKey::Robot(i) => {
                    let robot = self.state.robot(i);
                    if robot.slot().label().is_empty() {
                        format!("{:?}", robot.location())
                    } else {
                        format!("{:?}: {}", robot.location(), robot.slot().label())
                    }
                }
                ActorKey::Human(i) => self.state.human(i).slot().label().to_string(),
                ActorKey::Vault(a) => {
                    let vault = self.state.vault(a);
                    if vault.total_cubes() > 0 {
                        format!("{} cubes banked", vault.total_cubes())
                    } else {
                        String::new()
                    }
                }
                ActorKey::PowerUps => match self.state.powerups().active() {
                    Some(p) => format!("{} {:?} active", p.alliance, p.kind),
                    None => String::new(),
                },
                ActorKey::Seesaw(k) => {
                    let seesaw = self.state.seesaw(k);
                    let counts = format!(
                        "{}/{}",
                        seesaw.cubes(Side::Front),
                        seesaw.cubes(Side::Back)
                    );
                    match seesaw.owner() {
                        Some(owner) => format!("{} owns ({})", owner, counts),
                        None => format!("({})", counts),
                    }
                }
            };
            entries.push((self.state.name_of(key).to_string(), value));
        }
        ReportRow {
            tick: now,
            tick_score,
            total: self.total,
            entries,
        }
    }

    // ========================================================================
    // Endgame
    // ========================================================================

    /// Score the endgame and derive ranking points. Called exactly once,
    /// after the final tick.
    ///
    /// # Panics
    ///
    /// Panics if called twice.
    pub fn finish(&mut self) -> MatchOutcome {
        assert!(!self.finished, "endgame already scored");
        self.finished = true;

        let mut endgame = Score::ZERO;
        for &key in self.state.registry() {
            endgame = endgame
                + match key {
                    ActorKey::Robot(i) => self.state.robot(i).endgame_score(),
                    ActorKey::Human(i) => self.state.human(i).endgame_score(),
                    ActorKey::Vault(a) => self.state.vault(a).endgame_score(),
                    ActorKey::PowerUps => Score::ZERO,
                    ActorKey::Seesaw(k) => self.state.seesaw(k).endgame_score(),
                };
        }
        self.total = self.total + endgame;

        let mut face_the_boss = [false; 2];
        for alliance in Alliance::BOTH {
            let climbs = self
                .state
                .robots()
                .iter()
                .filter(|r| r.alliance() == alliance && r.climbed())
                .count()
                + usize::from(self.state.vault(alliance).levitate_credit());
            face_the_boss[alliance.index()] = climbs >= 3;
        }

        let mut ranking = self.total.wlt_rp();
        for alliance in Alliance::BOTH {
            let bonus = i64::from(self.auto_quest[alliance.index()])
                + i64::from(face_the_boss[alliance.index()]);
            ranking = ranking + Score::pick(alliance, bonus);
        }

        MatchOutcome {
            score: self.total,
            ranking,
            auto_quest: self.auto_quest,
            face_the_boss,
        }
    }
}

impl std::fmt::Debug for MatchSimulation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MatchSimulation")
            .field("seconds", &self.clock.seconds())
            .field("num_actors", &self.state.registry().len())
            .field("total", &self.total)
            .finish()
    }
}

// ============================================================================
// Tests
// ============================================================================
