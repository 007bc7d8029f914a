//! The scheduled-action protocol shared by every acting participant
//!
//! Each robot and human player carries exactly one [`ActionSlot`]: at most
//! one deferred [`Action`] with a firing time and a human-readable label.
//! The slot enforces the protocol invariants:
//!
//! 1. **One action in flight**: scheduling unconditionally replaces any
//!    prior entry. The superseded effect never runs; replacement is the
//!    only cancellation primitive and takes hold the instant it happens.
//! 2. **Minimum delay**: a requested delay of zero or less is coerced to
//!    one second, so an idle actor always makes forward progress and can
//!    never spin on the same tick.
//! 3. **Clear-then-run**: [`ActionSlot::take_due`] empties the slot
//!    *before* the caller interprets the effect, so an effect (or the
//!    idle-resumption that follows it) may re-arm the slot without being
//!    clobbered afterwards.
//!
//! Scheduling itself never fails. Whether an action's effect actually
//! does anything is checked when it fires; unmet preconditions make it a
//! silent no-op.

use crate::models::location::Location;
use crate::models::vault::PowerUpKind;

/// A deferred effect an actor can carry in its [`ActionSlot`].
///
/// Actions are interpreted by the match driver when they fire: the driver
/// computes each action's delay from the actor's per-action times and the
/// travel map, and applies the effect against shared field state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Do nothing for one second. The canonical terminal step.
    Idle,
    /// Drive to a destination; the effect is arriving there.
    DriveTo(Location),
    /// Pick up a cube from the floor at the current location.
    Pickup,
    /// Put a carried cube back on the floor.
    Drop,
    /// Place a carried cube on whatever plate or exchange is at the
    /// current location.
    Place,
    /// Climb the scale tower from the platform zone.
    Climb,
    /// Wait until the teleop period starts.
    WaitForTeleop,
    /// Human: push a cube from the portal stock onto the field.
    PushThroughPortal,
    /// Human: move a cube from the alliance exchange into a vault column.
    MoveCubeToVault(PowerUpKind),
    /// Human: play a banked power-up.
    PlayPowerUp(PowerUpKind),
}

/// The single outstanding scheduled action of one actor.
#[derive(Debug, Clone)]
struct ScheduledAction {
    eta: u32,
    action: Action,
    label: String,
}

/// Holder for an actor's one in-flight action.
#[derive(Debug, Clone, Default)]
pub struct ActionSlot {
    pending: Option<ScheduledAction>,
}

impl ActionSlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule `action` to fire `delay` seconds from `now`, replacing
    /// (and thereby cancelling) any previously stored action.
    ///
    /// Delays below one second are coerced to one.
    pub fn schedule(&mut self, now: u32, delay: i64, action: Action, label: impl Into<String>) {
        let delay = delay.max(1) as u32;
        self.pending = Some(ScheduledAction {
            eta: now + delay,
            action,
            label: label.into(),
        });
    }

    /// If the stored action is due exactly at `now`, clear the slot and
    /// return the action for the caller to run.
    ///
    /// The slot is emptied before the effect is interpreted; re-entrant
    /// scheduling from inside the effect lands in a clean slot.
    pub fn take_due(&mut self, now: u32) -> Option<Action> {
        if self.pending.as_ref().map(|p| p.eta) == Some(now) {
            self.pending.take().map(|p| p.action)
        } else {
            None
        }
    }

    /// Whether no action is outstanding.
    pub fn is_idle(&self) -> bool {
        self.pending.is_none()
    }

    /// Firing time of the outstanding action, if any.
    pub fn eta(&self) -> Option<u32> {
        self.pending.as_ref().map(|p| p.eta)
    }

    /// Label of the outstanding action, or the empty string when idle.
    pub fn label(&self) -> &str {
        self.pending.as_ref().map_or("", |p| p.label.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fires_exactly_on_eta() {
        let mut slot = ActionSlot::new();
        slot.schedule(0, 2, Action::Pickup, "pickup");
        assert!(!slot.is_idle());
        assert_eq!(slot.eta(), Some(2));
        assert_eq!(slot.label(), "pickup");

        assert_eq!(slot.take_due(1), None);
        assert!(!slot.is_idle());
        assert_eq!(slot.take_due(2), Some(Action::Pickup));
        assert!(slot.is_idle());
        assert_eq!(slot.label(), "");
        // Already resolved; never fires twice.
        assert_eq!(slot.take_due(2), None);
    }

    #[test]
    fn test_schedule_replaces_pending() {
        let mut slot = ActionSlot::new();
        slot.schedule(0, 5, Action::Pickup, "pickup");
        slot.schedule(0, 2, Action::Drop, "drop");

        // The superseded pickup never fires.
        assert_eq!(slot.take_due(5), None);
        let mut slot2 = ActionSlot::new();
        slot2.schedule(0, 5, Action::Pickup, "pickup");
        slot2.schedule(0, 2, Action::Drop, "drop");
        assert_eq!(slot2.take_due(2), Some(Action::Drop));
    }

    #[test]
    fn test_minimum_delay_coercion() {
        for delay in [-3_i64, 0, 1] {
            let mut slot = ActionSlot::new();
            slot.schedule(10, delay, Action::Idle, "wait");
            assert_eq!(slot.eta(), Some(11));
        }
    }
}
