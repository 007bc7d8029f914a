//! Time management for the match
//!
//! The match advances in discrete one-second ticks. The clock owns the
//! current time, knows where the autonomous period ends, and signals the
//! natural end of the match by refusing to advance past the final second.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Terminal condition: the clock is at the end of the match.
///
/// This is the *expected* way a simulation run ends, not an application
/// bug. Driving loops must stop calling [`MatchClock::advance`] once they
/// see it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("match over: the clock has reached the end of the match")]
pub struct MatchOver;

/// Manages match time in discrete one-second ticks
///
/// # Example
/// ```
/// use match_simulator_core_rs::MatchClock;
///
/// let mut clock = MatchClock::new(15, 150); // 15 s autonomous, 150 s match
/// assert_eq!(clock.seconds(), 0);
/// assert!(clock.autonomous());
///
/// clock.advance().unwrap();
/// assert_eq!(clock.seconds(), 1);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchClock {
    /// Seconds elapsed since the start of the match
    seconds: u32,
    /// Last second of the autonomous period
    autonomous_secs: u32,
    /// Total match duration in seconds
    match_secs: u32,
}

impl MatchClock {
    /// Create a new clock at time zero.
    ///
    /// # Panics
    ///
    /// Panics if `match_secs` does not leave room for a teleop period
    /// after `autonomous_secs`.
    pub fn new(autonomous_secs: u32, match_secs: u32) -> Self {
        assert!(
            match_secs > autonomous_secs,
            "match_secs must exceed autonomous_secs"
        );
        Self {
            seconds: 0,
            autonomous_secs,
            match_secs,
        }
    }

    /// Advance time by one second.
    ///
    /// Returns the new time, or [`MatchOver`] if advancing would exceed
    /// the match duration. The clock never moves backwards; after the
    /// first `MatchOver` every further call keeps returning it.
    pub fn advance(&mut self) -> Result<u32, MatchOver> {
        if self.seconds >= self.match_secs {
            return Err(MatchOver);
        }
        self.seconds += 1;
        Ok(self.seconds)
    }

    /// Seconds elapsed since the start of the match.
    pub fn seconds(&self) -> u32 {
        self.seconds
    }

    /// Whether the match is still in the autonomous period.
    ///
    /// Derived from the current time on every call; actors query this
    /// every tick so it is never cached.
    pub fn autonomous(&self) -> bool {
        self.seconds <= self.autonomous_secs
    }

    /// First second of the teleop period.
    pub fn teleop_start(&self) -> u32 {
        self.autonomous_secs + 1
    }

    /// Last second of the autonomous period.
    pub fn autonomous_secs(&self) -> u32 {
        self.autonomous_secs
    }

    /// Total match duration in seconds.
    pub fn match_secs(&self) -> u32 {
        self.match_secs
    }

    /// Seconds remaining until the end of the match.
    pub fn remaining(&self) -> u32 {
        self.match_secs - self.seconds
    }
}
