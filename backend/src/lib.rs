//! Match Simulator Core - Rust Engine
//!
//! Discrete-event simulation of a timed robotics competition match with
//! deterministic execution.
//!
//! # Architecture
//!
//! - **core**: Time management (the match clock)
//! - **models**: Domain types (Robot, Human, Seesaw, Vault, field stock)
//! - **decider**: Pluggable "game player" strategies
//! - **orchestrator**: Main simulation loop and scoring
//! - **report**: Per-tick record rows
//!
//! # Critical Invariants
//!
//! 1. Time advances by exactly one second per tick and never decreases
//! 2. Each actor carries at most one scheduled action; scheduling a new
//!    one silently cancels the old one
//! 3. Actors update, and are scored, in registration order
//! 4. There is no randomness: identical setups replay identically

// Module declarations
pub mod core;
pub mod decider;
pub mod models;
pub mod orchestrator;
pub mod report;

// Re-exports for convenience
pub use crate::core::time::{MatchClock, MatchOver};
pub use decider::{Decider, IdleDecider, Step, StepContext};
pub use models::{
    actor::{Action, ActionSlot},
    field::{place_target, FieldStock, PlaceTarget},
    human::{Human, HumanStation, HumanTimes},
    location::{Location, Side, TravelMap},
    robot::{Robot, RobotTimes},
    score::{Alliance, Score},
    seesaw::{Seesaw, SeesawKey},
    state::{ActorKey, MatchState},
    vault::{PowerUp, PowerUpKind, PowerUpQueue, Vault, VaultColumn, VAULT_COLUMN_CAPACITY},
};
pub use orchestrator::{
    HumanConfig, MatchConfig, MatchOutcome, MatchSimulation, PointValues, RobotConfig,
    SimulationError, TickResult,
};
pub use report::{ReportLog, ReportRow};
