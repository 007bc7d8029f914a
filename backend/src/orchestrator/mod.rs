//! Match orchestration
//!
//! The engine composes the actor set from a [`MatchConfig`], drives the
//! tick loop for the match duration, aggregates per-tick scores, and
//! computes the end-of-match outcome.

pub mod engine;

pub use engine::{
    HumanConfig, MatchConfig, MatchOutcome, MatchSimulation, PointValues, RobotConfig,
    SimulationError, TickResult,
};
