//! Decider module: pluggable "game player" strategies
//!
//! A decider chooses what its actor does next. It is a resumable
//! sequence of steps: the owning actor drives it exactly once whenever
//! it has no outstanding scheduled action (including once at attachment
//! time), and the decider answers with its next instruction plus a
//! human-readable label for the report.
//!
//! # Resumption contract
//!
//! There is no parallelism. A decider always observes the actor and the
//! field as of the moment it is resumed, and anything it decides is
//! acted on immediately. Between resumptions it is fully suspended; the
//! step cursor it keeps in its own fields is the only resumption state
//! (no coroutines). A decider that has finished its strategy returns
//! the same terminal no-op step forever; the actor then schedules the
//! canonical one-second wait, so resuming a finished decider is
//! idempotent.
//!
//! # Decider Interface
//!
//! All deciders implement the [`Decider`] trait:
//!
//! ```
//! use match_simulator_core_rs::decider::{Decider, Step, StepContext};
//!
//! struct AlwaysDone;
//!
//! impl Decider for AlwaysDone {
//!     fn next_step(&mut self, _ctx: &StepContext<'_>) -> Step {
//!         Step::done()
//!     }
//! }
//! ```
//!
//! Concrete strategies live in the [`robot`] and [`human`] submodules;
//! the match driver only requires the single `next_step` operation.

use crate::core::time::MatchClock;
use crate::models::actor::Action;
use crate::models::human::Human;
use crate::models::robot::Robot;
use crate::models::score::Alliance;
use crate::models::state::{ActorKey, MatchState};

pub mod human;
pub mod robot;

pub use human::{PortalFeeder, VaultLoader};
pub use robot::{ExchangeRunner, ExchangeThenPark, PlatformClimber, ScalePlacer, SwitchPlacer};

/// One instruction issued by a decider: the action to schedule and the
/// label describing it.
#[derive(Debug, Clone)]
pub struct Step {
    pub action: Action,
    pub label: String,
}

impl Step {
    pub fn new(action: Action, label: impl Into<String>) -> Self {
        Self {
            action,
            label: label.into(),
        }
    }

    /// The terminal no-op step: do nothing, forever.
    pub fn done() -> Self {
        Step::new(Action::Idle, "done")
    }
}

/// Read-only view a decider gets when resumed.
///
/// Deciders see the whole field (shared seesaw, vault, and stock state)
/// but only read it; their one output channel is the returned [`Step`].
pub struct StepContext<'a> {
    pub clock: &'a MatchClock,
    pub state: &'a MatchState,
    pub actor: ActorKey,
}

impl StepContext<'_> {
    /// The owning robot.
    ///
    /// # Panics
    ///
    /// Panics when the decider is attached to a non-robot actor; that is
    /// a match-setup bug.
    pub fn robot(&self) -> &Robot {
        match self.actor {
            ActorKey::Robot(i) => self.state.robot(i),
            key => panic!("decider expected a robot, is attached to {:?}", key),
        }
    }

    /// The owning human player.
    ///
    /// # Panics
    ///
    /// Panics when the decider is attached to a non-human actor.
    pub fn human(&self) -> &Human {
        match self.actor {
            ActorKey::Human(i) => self.state.human(i),
            key => panic!("decider expected a human, is attached to {:?}", key),
        }
    }

    /// Alliance of the owning robot or human.
    pub fn alliance(&self) -> Alliance {
        match self.actor {
            ActorKey::Robot(i) => self.state.robot(i).alliance(),
            ActorKey::Human(i) => self.state.human(i).alliance(),
            key => panic!("actor {:?} has no alliance", key),
        }
    }
}

/// A pluggable strategy choosing an actor's next action.
pub trait Decider {
    /// Resume the decider and get its next instruction.
    ///
    /// Called exactly once each time the owning actor becomes idle.
    /// Must always return; a finished strategy keeps returning
    /// [`Step::done`].
    fn next_step(&mut self, ctx: &StepContext<'_>) -> Step;
}

/// The permanently finished strategy: always the terminal no-op step.
#[derive(Debug, Clone, Copy, Default)]
pub struct IdleDecider;

impl Decider for IdleDecider {
    fn next_step(&mut self, _ctx: &StepContext<'_>) -> Step {
        Step::done()
    }
}
