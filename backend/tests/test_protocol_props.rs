//! Property tests for the scheduling protocol and the clock

use match_simulator_core_rs::{Action, ActionSlot, MatchClock};
use proptest::prelude::*;

proptest! {
    /// Any requested delay below one second is coerced to one; the
    /// effect never fires earlier than the tick after scheduling.
    #[test]
    fn prop_delay_coerced_to_minimum(now in 0u32..10_000, delay in -100i64..100) {
        let mut slot = ActionSlot::new();
        slot.schedule(now, delay, Action::Idle, "wait");
        let eta = slot.eta().unwrap();
        prop_assert_eq!(eta, now + delay.max(1) as u32);
        prop_assert!(eta > now);
    }

    /// No matter how many times an actor schedules, at most one action
    /// is pending and it is always the most recent one.
    #[test]
    fn prop_replacement_keeps_only_the_last(
        now in 0u32..1000,
        delays in proptest::collection::vec(-10i64..50, 1..10),
    ) {
        let mut slot = ActionSlot::new();
        for &delay in &delays {
            slot.schedule(now, delay, Action::Idle, "wait");
        }
        let last = *delays.last().unwrap();
        prop_assert_eq!(slot.eta(), Some(now + last.max(1) as u32));
    }

    /// A resolved slot is empty until something schedules again.
    #[test]
    fn prop_take_due_clears_the_slot(now in 0u32..1000, delay in 1i64..50) {
        let mut slot = ActionSlot::new();
        slot.schedule(now, delay, Action::Pickup, "pickup");
        let eta = slot.eta().unwrap();
        prop_assert_eq!(slot.take_due(eta), Some(Action::Pickup));
        prop_assert!(slot.is_idle());
        prop_assert_eq!(slot.take_due(eta), None);
    }

    /// The clock yields exactly match_secs successful ticks, one second
    /// each, then reports the match over.
    #[test]
    fn prop_clock_counts_every_second(auto in 1u32..50, teleop in 1u32..200) {
        let mut clock = MatchClock::new(auto, auto + teleop);
        let mut ticks = 0u32;
        let mut last = 0u32;
        while let Ok(now) = clock.advance() {
            prop_assert_eq!(now, last + 1);
            last = now;
            ticks += 1;
        }
        prop_assert_eq!(ticks, auto + teleop);
        prop_assert!(clock.advance().is_err());
    }
}
