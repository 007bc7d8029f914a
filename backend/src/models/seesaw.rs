//! Seesaw scoring structures (the switches and the scale)
//!
//! A seesaw has two plates; whichever side holds more cubes tilts the
//! structure toward the alliance whose color faces that plate. The
//! switches additionally carry an ownership restriction: only the
//! alliance at that end of the field can own them. The restriction is a
//! policy parameter on one shared type, so the scale is simply an
//! unrestricted seesaw.

use crate::models::location::Side;
use crate::models::score::{Alliance, Score};
use std::cmp::Ordering;

/// Identity of one of the three seesaws on the field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SeesawKey {
    Switch(Alliance),
    Scale,
}

/// A two-sided ownership structure scored every second it is owned.
#[derive(Debug, Clone)]
pub struct Seesaw {
    name: String,
    /// Alliance whose color faces the front plate, chosen by the FMS.
    front_color: Alliance,
    /// Owner must match this alliance or be neutral. `None` for the scale.
    restriction: Option<Alliance>,
    /// Cube counts per plate, indexed by [`Side::index`].
    cubes: [u32; 2],
    /// Forced ownership: (forcing alliance, second it expires).
    forced: Option<(Alliance, u32)>,
    /// Boosted scoring: (boosting alliance, second it expires).
    boosted: Option<(Alliance, u32)>,
    /// Owner as of the previous update, for gain detection.
    prev_owner: Option<Alliance>,
    /// Base points per owned second.
    ownership_points: i64,
    /// One-time bonus for gaining ownership during autonomous.
    auto_gain_bonus: i64,
    /// Points earned since the last `score()` call.
    pending: Score,
}

impl Seesaw {
    /// The switch at one alliance's end of the field. Only that alliance
    /// can own it.
    pub fn switch(
        alliance_end: Alliance,
        front_color: Alliance,
        ownership_points: i64,
        auto_gain_bonus: i64,
    ) -> Self {
        Self {
            name: format!("{} Switch", alliance_end),
            front_color,
            restriction: Some(alliance_end),
            cubes: [0, 0],
            forced: None,
            boosted: None,
            prev_owner: None,
            ownership_points,
            auto_gain_bonus,
            pending: Score::ZERO,
        }
    }

    /// The scale in the middle of the field; either alliance can own it.
    pub fn scale(front_color: Alliance, ownership_points: i64, auto_gain_bonus: i64) -> Self {
        Self {
            name: "Scale".to_string(),
            front_color,
            restriction: None,
            cubes: [0, 0],
            forced: None,
            boosted: None,
            prev_owner: None,
            ownership_points,
            auto_gain_bonus,
            pending: Score::ZERO,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn front_color(&self) -> Alliance {
        self.front_color
    }

    /// The plate an alliance scores on: the one showing its color.
    pub fn friendly_side(&self, alliance: Alliance) -> Side {
        if self.front_color == alliance {
            Side::Front
        } else {
            Side::Back
        }
    }

    pub fn add_cube(&mut self, side: Side) {
        self.cubes[side.index()] += 1;
    }

    pub fn cubes(&self, side: Side) -> u32 {
        self.cubes[side.index()]
    }

    /// Force ownership for the given alliance until `until`.
    ///
    /// On a restricted seesaw a force by the other alliance has no
    /// effect; the power-up targeting already points each force at the
    /// forcing alliance's own structures.
    pub fn force(&mut self, alliance: Alliance, until: u32) {
        if let Some(required) = self.restriction {
            if alliance != required {
                return;
            }
        }
        self.forced = Some((alliance, until));
    }

    /// Double the owner's points for the given alliance until `until`.
    pub fn boost(&mut self, alliance: Alliance, until: u32) {
        self.boosted = Some((alliance, until));
    }

    pub fn is_forced(&self) -> bool {
        self.forced.is_some()
    }

    pub fn is_boosted(&self) -> bool {
        self.boosted.is_some()
    }

    fn boosted_for(&self, alliance: Alliance) -> bool {
        matches!(self.boosted, Some((a, _)) if a == alliance)
    }

    /// The alliance currently controlling this seesaw.
    ///
    /// A live force overrides the tilt; otherwise the side counts are
    /// compared and the restriction filters the result.
    pub fn owner(&self) -> Option<Alliance> {
        if let Some((alliance, _)) = self.forced {
            return Some(alliance);
        }
        let tilt = match self.cubes[Side::Front.index()].cmp(&self.cubes[Side::Back.index()]) {
            Ordering::Greater => Some(self.front_color),
            Ordering::Less => Some(self.front_color.opposite()),
            Ordering::Equal => None,
        };
        match (tilt, self.restriction) {
            (Some(owner), Some(required)) if owner != required => None,
            (tilt, _) => tilt,
        }
    }

    /// Per-tick update: expire force/boost windows, detect ownership
    /// changes, and bank this second's ownership points.
    pub fn update(&mut self, now: u32, autonomous: bool) {
        if matches!(self.forced, Some((_, until)) if now >= until) {
            self.forced = None;
        }
        if matches!(self.boosted, Some((_, until)) if now >= until) {
            self.boosted = None;
        }

        let owner = self.owner();
        if owner != self.prev_owner {
            if let Some(alliance) = owner {
                if autonomous {
                    self.pending = self.pending + Score::pick(alliance, self.auto_gain_bonus);
                }
            }
            self.prev_owner = owner;
        }

        if let Some(alliance) = owner {
            let mut value = self.ownership_points * if autonomous { 2 } else { 1 };
            if self.boosted_for(alliance) {
                value *= 2;
            }
            self.pending = self.pending + Score::pick(alliance, value);
        }
    }

    /// Points earned in the tick just completed. The driver calls this
    /// exactly once per tick; the internal bucket is drained.
    pub fn score(&mut self) -> Score {
        let score = self.pending;
        self.pending = Score::ZERO;
        score
    }

    pub fn endgame_score(&self) -> Score {
        Score::ZERO
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_switch() -> Seesaw {
        // Red switch with red facing front.
        Seesaw::switch(Alliance::Red, Alliance::Red, 1, 2)
    }

    #[test]
    fn test_tilt_ownership() {
        let mut scale = Seesaw::scale(Alliance::Blue, 1, 2);
        assert_eq!(scale.owner(), None);

        scale.add_cube(Side::Front);
        assert_eq!(scale.owner(), Some(Alliance::Blue));

        scale.add_cube(Side::Back);
        assert_eq!(scale.owner(), None);

        scale.add_cube(Side::Back);
        assert_eq!(scale.owner(), Some(Alliance::Red));
    }

    #[test]
    fn test_switch_restriction() {
        let mut switch = test_switch();
        // Tilt toward blue: a restricted seesaw goes neutral instead.
        switch.add_cube(Side::Back);
        assert_eq!(switch.owner(), None);

        switch.add_cube(Side::Front);
        switch.add_cube(Side::Front);
        assert_eq!(switch.owner(), Some(Alliance::Red));
    }

    #[test]
    fn test_force_overrides_and_expires() {
        let mut switch = test_switch();
        switch.add_cube(Side::Back); // would be neutral
        switch.force(Alliance::Red, 20);
        assert_eq!(switch.owner(), Some(Alliance::Red));

        switch.update(19, false);
        assert_eq!(switch.owner(), Some(Alliance::Red));
        switch.update(20, false);
        assert_eq!(switch.owner(), None);
    }

    #[test]
    fn test_force_by_wrong_alliance_ignored() {
        let mut switch = test_switch();
        switch.force(Alliance::Blue, 20);
        assert!(!switch.is_forced());
    }

    #[test]
    fn test_ownership_scoring_and_boost() {
        let mut scale = Seesaw::scale(Alliance::Red, 1, 2);
        scale.add_cube(Side::Front);

        // Teleop second, unboosted: 1 point.
        scale.update(20, false);
        assert_eq!(scale.score(), Score::pick(Alliance::Red, 1));

        // Boosted second: doubled.
        scale.boost(Alliance::Red, 31);
        scale.update(21, false);
        assert_eq!(scale.score(), Score::pick(Alliance::Red, 2));

        // Boost for the other alliance does not help the owner.
        scale.boost(Alliance::Blue, 42);
        scale.update(22, false);
        assert_eq!(scale.score(), Score::pick(Alliance::Red, 1));
    }

    #[test]
    fn test_autonomous_gain_bonus_once() {
        let mut scale = Seesaw::scale(Alliance::Red, 1, 2);
        scale.add_cube(Side::Front);

        // Gaining during autonomous: 2 bonus + 2 doubled ownership.
        scale.update(5, true);
        assert_eq!(scale.score(), Score::pick(Alliance::Red, 4));

        // Held, not regained: just the doubled ownership points.
        scale.update(6, true);
        assert_eq!(scale.score(), Score::pick(Alliance::Red, 2));
    }
}
