//! Scripted robot strategies
//!
//! Each strategy is a small step-cursor state machine: the `stage` field
//! is the resumption point, and every `next_step` call advances it by
//! one issued instruction. Preconditions the field may not satisfy
//! (an empty power-cube zone, say) are re-checked on each resumption,
//! because the decider sees the field as of the moment it is resumed.

use super::{Decider, Step, StepContext};
use crate::models::actor::Action;
use crate::models::location::Location;

/// Preload, auto-run to the friendly switch plate, place the cube, done.
#[derive(Debug, Clone, Default)]
pub struct SwitchPlacer {
    stage: SwitchStage,
}

#[derive(Debug, Clone, Copy, Default)]
enum SwitchStage {
    #[default]
    Drive,
    Place,
    Done,
}

impl SwitchPlacer {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Decider for SwitchPlacer {
    fn next_step(&mut self, ctx: &StepContext<'_>) -> Step {
        let alliance = ctx.alliance();
        match self.stage {
            SwitchStage::Drive => {
                self.stage = SwitchStage::Place;
                let side = ctx.state.switch(alliance).friendly_side(alliance);
                Step::new(
                    Action::DriveTo(Location::inner_zone(alliance, side)),
                    "auto-run to my Switch plate",
                )
            }
            SwitchStage::Place => {
                self.stage = SwitchStage::Done;
                Step::new(Action::Place, "place a Cube on the Switch")
            }
            SwitchStage::Done => Step::done(),
        }
    }
}

/// Auto-run to an inner zone, carry the preload on to the scale plate.
#[derive(Debug, Clone, Default)]
pub struct ScalePlacer {
    stage: ScaleStage,
}

#[derive(Debug, Clone, Copy, Default)]
enum ScaleStage {
    #[default]
    AutoRun,
    DriveToScale,
    Place,
    Done,
}

impl ScalePlacer {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Decider for ScalePlacer {
    fn next_step(&mut self, ctx: &StepContext<'_>) -> Step {
        let alliance = ctx.alliance();
        let side = ctx.state.scale().friendly_side(alliance);
        match self.stage {
            ScaleStage::AutoRun => {
                self.stage = ScaleStage::DriveToScale;
                Step::new(
                    Action::DriveTo(Location::inner_zone(alliance, side)),
                    "auto-run",
                )
            }
            ScaleStage::DriveToScale => {
                self.stage = ScaleStage::Place;
                Step::new(
                    Action::DriveTo(Location::null_territory(side)),
                    "go to my Scale plate",
                )
            }
            ScaleStage::Place => {
                self.stage = ScaleStage::Done;
                Step::new(Action::Place, "place a Cube on the Scale")
            }
            ScaleStage::Done => Step::done(),
        }
    }
}

/// Feed the exchange: place the preload there, earn the auto-run, then
/// ferry cubes from the power-cube zone into the exchange all teleop.
#[derive(Debug, Clone)]
pub struct ExchangeRunner {
    stage: RunnerStage,
    moved: u32,
    limit: u32,
}

#[derive(Debug, Clone, Copy)]
enum RunnerStage {
    ToExchange,
    PlacePreload,
    AutoRunOut,
    AutoRunIn,
    WaitTeleop,
    GoOut,
    GoPowerCubes,
    Pickup,
    BringOut,
    BringToExchange,
    PlaceInExchange,
    Done,
}

impl ExchangeRunner {
    /// Ferries at most 8 cubes after the preload, like the original
    /// scenario's third robot.
    pub fn new() -> Self {
        Self::with_limit(8)
    }

    pub fn with_limit(limit: u32) -> Self {
        Self {
            stage: RunnerStage::ToExchange,
            moved: 0,
            limit,
        }
    }
}

impl Default for ExchangeRunner {
    fn default() -> Self {
        Self::new()
    }
}

impl Decider for ExchangeRunner {
    fn next_step(&mut self, ctx: &StepContext<'_>) -> Step {
        let alliance = ctx.alliance();
        let exchange = Location::exchange_zone(alliance);
        let outer = Location::outer_zone(alliance);
        let power_cubes = Location::power_cube_zone(alliance);

        loop {
            match self.stage {
                RunnerStage::ToExchange => {
                    self.stage = RunnerStage::PlacePreload;
                    return Step::new(Action::DriveTo(exchange), "to Exchange");
                }
                RunnerStage::PlacePreload => {
                    self.stage = RunnerStage::AutoRunOut;
                    return Step::new(Action::Place, "place a Cube in the Exchange");
                }
                RunnerStage::AutoRunOut => {
                    self.stage = RunnerStage::AutoRunIn;
                    return Step::new(Action::DriveTo(outer), "auto-run");
                }
                RunnerStage::AutoRunIn => {
                    self.stage = RunnerStage::WaitTeleop;
                    let inner = Location::inner_zone(alliance, crate::models::location::Side::Front);
                    return Step::new(Action::DriveTo(inner), "auto-run");
                }
                RunnerStage::WaitTeleop => {
                    self.stage = RunnerStage::GoOut;
                    if ctx.clock.autonomous() {
                        return Step::new(Action::WaitForTeleop, "wait for Teleop");
                    }
                }
                RunnerStage::GoOut => {
                    // Re-checked every lap: the zone may have run dry.
                    if self.moved >= self.limit || ctx.state.stock().floor_count(power_cubes) == 0 {
                        self.stage = RunnerStage::Done;
                        continue;
                    }
                    self.stage = RunnerStage::GoPowerCubes;
                    return Step::new(Action::DriveTo(outer), "go get a Power Cube");
                }
                RunnerStage::GoPowerCubes => {
                    self.stage = RunnerStage::Pickup;
                    return Step::new(Action::DriveTo(power_cubes), "go get a Power Cube");
                }
                RunnerStage::Pickup => {
                    self.stage = RunnerStage::BringOut;
                    return Step::new(Action::Pickup, "pickup a Power Cube");
                }
                RunnerStage::BringOut => {
                    self.stage = RunnerStage::BringToExchange;
                    return Step::new(Action::DriveTo(outer), "bring it to the Exchange");
                }
                RunnerStage::BringToExchange => {
                    self.stage = RunnerStage::PlaceInExchange;
                    return Step::new(Action::DriveTo(exchange), "bring it to the Exchange");
                }
                RunnerStage::PlaceInExchange => {
                    self.moved += 1;
                    self.stage = RunnerStage::GoOut;
                    return Step::new(Action::Place, "place a Cube in the Exchange");
                }
                RunnerStage::Done => return Step::done(),
            }
        }
    }
}

/// Place the preload in the exchange, then park in an inner zone. The
/// original scenario ran this on a deliberately slower robot.
#[derive(Debug, Clone, Default)]
pub struct ExchangeThenPark {
    stage: ParkStage,
}

#[derive(Debug, Clone, Copy, Default)]
enum ParkStage {
    #[default]
    ToExchange,
    Place,
    AutoRunOut,
    AutoRunIn,
    Done,
}

impl ExchangeThenPark {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Decider for ExchangeThenPark {
    fn next_step(&mut self, ctx: &StepContext<'_>) -> Step {
        let alliance = ctx.alliance();
        match self.stage {
            ParkStage::ToExchange => {
                self.stage = ParkStage::Place;
                Step::new(
                    Action::DriveTo(Location::exchange_zone(alliance)),
                    "to Exchange",
                )
            }
            ParkStage::Place => {
                self.stage = ParkStage::AutoRunOut;
                Step::new(Action::Place, "place a Cube in the Exchange")
            }
            ParkStage::AutoRunOut => {
                self.stage = ParkStage::AutoRunIn;
                Step::new(Action::DriveTo(Location::outer_zone(alliance)), "auto-run")
            }
            ParkStage::AutoRunIn => {
                self.stage = ParkStage::Done;
                let inner = Location::inner_zone(alliance, crate::models::location::Side::Front);
                Step::new(Action::DriveTo(inner), "auto-run")
            }
            ParkStage::Done => Step::done(),
        }
    }
}

/// Wait out autonomous, drive out to the platform, idle until the climb
/// window opens, then climb.
#[derive(Debug, Clone)]
pub struct PlatformClimber {
    climb_at: u32,
    stage: ClimbStage,
}

#[derive(Debug, Clone, Copy)]
enum ClimbStage {
    WaitTeleop,
    DriveOut,
    DriveToPlatform,
    WaitForWindow,
    Climb,
    Done,
}

impl PlatformClimber {
    /// `climb_at` is the match second to start climbing at.
    pub fn new(climb_at: u32) -> Self {
        Self {
            climb_at,
            stage: ClimbStage::WaitTeleop,
        }
    }
}

impl Decider for PlatformClimber {
    fn next_step(&mut self, ctx: &StepContext<'_>) -> Step {
        let alliance = ctx.alliance();
        loop {
            match self.stage {
                ClimbStage::WaitTeleop => {
                    self.stage = ClimbStage::DriveOut;
                    if ctx.clock.autonomous() {
                        return Step::new(Action::WaitForTeleop, "wait for Teleop");
                    }
                }
                ClimbStage::DriveOut => {
                    self.stage = ClimbStage::DriveToPlatform;
                    return Step::new(
                        Action::DriveTo(Location::outer_zone(alliance)),
                        "drive toward the Platform",
                    );
                }
                ClimbStage::DriveToPlatform => {
                    self.stage = ClimbStage::WaitForWindow;
                    return Step::new(
                        Action::DriveTo(Location::platform_zone(alliance)),
                        "drive to the Platform",
                    );
                }
                ClimbStage::WaitForWindow => {
                    if ctx.clock.seconds() < self.climb_at {
                        return Step::new(Action::Idle, "wait to climb");
                    }
                    self.stage = ClimbStage::Climb;
                }
                ClimbStage::Climb => {
                    self.stage = ClimbStage::Done;
                    return Step::new(Action::Climb, "climb the Scale tower");
                }
                ClimbStage::Done => return Step::done(),
            }
        }
    }
}
