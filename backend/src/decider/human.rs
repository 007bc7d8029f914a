//! Scripted human-player strategies

use super::{Decider, Step, StepContext};
use crate::models::actor::Action;
use crate::models::vault::PowerUpKind;
use std::collections::VecDeque;

/// Push the whole portal stock onto the field once teleop starts.
#[derive(Debug, Clone, Default)]
pub struct PortalFeeder {
    started: bool,
}

impl PortalFeeder {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Decider for PortalFeeder {
    fn next_step(&mut self, ctx: &StepContext<'_>) -> Step {
        if !self.started {
            self.started = true;
            if ctx.clock.autonomous() {
                return Step::new(Action::WaitForTeleop, "wait for Teleop");
            }
        }
        if ctx.human().portal_stock() > 0 {
            Step::new(Action::PushThroughPortal, "push a Cube through the Portal")
        } else {
            Step::done()
        }
    }
}

/// Work the exchange station: bank cubes into vault columns following a
/// plan, playing each power-up once its column holds enough cubes.
///
/// The plan is a list of `(kind, cubes to bank before playing)` pairs,
/// worked in order. When the exchange is empty the loader idles and
/// re-checks on the next resumption.
#[derive(Debug, Clone)]
pub struct VaultLoader {
    plan: VecDeque<(PowerUpKind, u32)>,
    started: bool,
}

impl VaultLoader {
    pub fn new(plan: Vec<(PowerUpKind, u32)>) -> Self {
        Self {
            plan: plan.into(),
            started: false,
        }
    }

    /// The stock plan: a two-cube boost, then a one-cube force.
    pub fn standard() -> Self {
        Self::new(vec![(PowerUpKind::Boost, 2), (PowerUpKind::Force, 1)])
    }
}

impl Decider for VaultLoader {
    fn next_step(&mut self, ctx: &StepContext<'_>) -> Step {
        if !self.started {
            self.started = true;
            if ctx.clock.autonomous() {
                return Step::new(Action::WaitForTeleop, "wait for Teleop");
            }
        }

        let alliance = ctx.human().alliance();
        while let Some(&(kind, target)) = self.plan.front() {
            let column = ctx.state.vault(alliance).column(kind);
            if column.played() {
                self.plan.pop_front();
                continue;
            }
            if column.cubes() < target {
                if ctx.state.stock().exchange_count(alliance) > 0 {
                    return Step::new(
                        Action::MoveCubeToVault(kind),
                        format!("bank a Cube in the {:?} column", kind),
                    );
                }
                return Step::new(Action::Idle, "wait for a Cube in the Exchange");
            }
            return Step::new(Action::PlayPowerUp(kind), format!("play {:?}", kind));
        }
        Step::done()
    }
}
