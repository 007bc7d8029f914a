//! Vaults, vault columns, and the power-up queue
//!
//! Each alliance banks cubes into three vault columns, one per power-up
//! kind. Banking a cube scores immediately; playing a column converts its
//! banked cubes into a power-up whose strength is the cube count at play
//! time. Activation is serialized through the [`PowerUpQueue`]: one
//! power-up is active at a time match-wide, later plays wait their turn.

use crate::models::score::{Alliance, Score};
use std::collections::VecDeque;

/// Cubes a single vault column can hold.
pub const VAULT_COLUMN_CAPACITY: u32 = 3;

/// The three power-up kinds, one vault column each.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PowerUpKind {
    Force,
    Levitate,
    Boost,
}

impl PowerUpKind {
    pub const ALL: [PowerUpKind; 3] = [PowerUpKind::Force, PowerUpKind::Levitate, PowerUpKind::Boost];

    fn index(self) -> usize {
        match self {
            PowerUpKind::Force => 0,
            PowerUpKind::Levitate => 1,
            PowerUpKind::Boost => 2,
        }
    }
}

/// A bounded counter of banked cubes for one power-up kind.
///
/// Once played the column is terminal: it accepts no more cubes and
/// cannot be played again.
#[derive(Debug, Clone)]
pub struct VaultColumn {
    kind: PowerUpKind,
    cubes: u32,
    played: bool,
}

impl VaultColumn {
    fn new(kind: PowerUpKind) -> Self {
        Self {
            kind,
            cubes: 0,
            played: false,
        }
    }

    pub fn kind(&self) -> PowerUpKind {
        self.kind
    }

    pub fn cubes(&self) -> u32 {
        self.cubes
    }

    pub fn played(&self) -> bool {
        self.played
    }

    /// Whether another cube fits. Callers check this first; `add_cube`
    /// treats violations as hard bugs.
    pub fn can_accept(&self) -> bool {
        !self.played && self.cubes < VAULT_COLUMN_CAPACITY
    }

    /// Whether the column can be played right now. Levitate needs a full
    /// column; the others need at least one cube.
    pub fn playable(&self) -> bool {
        !self.played
            && match self.kind {
                PowerUpKind::Levitate => self.cubes == VAULT_COLUMN_CAPACITY,
                _ => self.cubes >= 1,
            }
    }

    /// # Panics
    ///
    /// Panics when the column is full or already played. Overfilling a
    /// bounded counter is a decider bug, not a runtime condition.
    fn add_cube(&mut self) {
        assert!(
            !self.played,
            "{:?} column already played, cannot bank a cube",
            self.kind
        );
        assert!(
            self.cubes < VAULT_COLUMN_CAPACITY,
            "{:?} column is full ({} cubes)",
            self.kind,
            self.cubes
        );
        self.cubes += 1;
    }

    fn play(&mut self, alliance: Alliance) -> PowerUp {
        assert!(self.playable(), "{:?} column is not playable", self.kind);
        self.played = true;
        PowerUp {
            alliance,
            kind: self.kind,
            level: self.cubes,
        }
    }
}

/// A banked power-up produced by playing a vault column.
///
/// `level` is the cube count at play time and decides the targets:
/// 1 = the alliance's switch, 2 = the scale, 3 = both.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PowerUp {
    pub alliance: Alliance,
    pub kind: PowerUpKind,
    pub level: u32,
}

/// One alliance's vault: three columns plus the cube-banking score.
#[derive(Debug, Clone)]
pub struct Vault {
    name: String,
    alliance: Alliance,
    columns: [VaultColumn; 3],
    levitate_credit: bool,
    cube_points: i64,
    levitate_climb_points: i64,
    pending: Score,
}

impl Vault {
    pub fn new(alliance: Alliance, cube_points: i64, levitate_climb_points: i64) -> Self {
        Self {
            name: format!("{} Vault", alliance),
            alliance,
            columns: [
                VaultColumn::new(PowerUpKind::Force),
                VaultColumn::new(PowerUpKind::Levitate),
                VaultColumn::new(PowerUpKind::Boost),
            ],
            levitate_credit: false,
            cube_points,
            levitate_climb_points,
            pending: Score::ZERO,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn alliance(&self) -> Alliance {
        self.alliance
    }

    pub fn column(&self, kind: PowerUpKind) -> &VaultColumn {
        &self.columns[kind.index()]
    }

    /// Total cubes banked across all columns.
    pub fn total_cubes(&self) -> u32 {
        self.columns.iter().map(|c| c.cubes()).sum()
    }

    /// Bank a cube into a column, scoring its vault points.
    ///
    /// # Panics
    ///
    /// Panics when the column cannot accept a cube; check
    /// [`VaultColumn::can_accept`] first.
    pub fn bank_cube(&mut self, kind: PowerUpKind) {
        self.columns[kind.index()].add_cube();
        self.pending = self.pending + Score::pick(self.alliance, self.cube_points);
    }

    /// Play a column, producing the power-up to enqueue.
    ///
    /// # Panics
    ///
    /// Panics when the column is not playable; check
    /// [`VaultColumn::playable`] first.
    pub fn play(&mut self, kind: PowerUpKind) -> PowerUp {
        self.columns[kind.index()].play(self.alliance)
    }

    /// Levitate grants one robot credit for climbing.
    pub fn grant_levitate_credit(&mut self) {
        self.levitate_credit = true;
    }

    pub fn levitate_credit(&self) -> bool {
        self.levitate_credit
    }

    /// Points earned in the tick just completed; drains the bucket.
    pub fn score(&mut self) -> Score {
        let score = self.pending;
        self.pending = Score::ZERO;
        score
    }

    /// Levitate's climb credit pays out with the endgame.
    pub fn endgame_score(&self) -> Score {
        if self.levitate_credit {
            Score::pick(self.alliance, self.levitate_climb_points)
        } else {
            Score::ZERO
        }
    }
}

/// Serializes power-up activation: one active at a time, FIFO otherwise.
#[derive(Debug, Clone)]
pub struct PowerUpQueue {
    active: Option<(PowerUp, u32)>,
    queued: VecDeque<PowerUp>,
    force_secs: u32,
    boost_secs: u32,
}

impl PowerUpQueue {
    pub fn new(force_secs: u32, boost_secs: u32) -> Self {
        Self {
            active: None,
            queued: VecDeque::new(),
            force_secs,
            boost_secs,
        }
    }

    pub fn name(&self) -> &str {
        "Power-Up Queue"
    }

    /// Queue a played power-up for activation.
    pub fn enqueue(&mut self, powerup: PowerUp) {
        self.queued.push_back(powerup);
    }

    /// The currently active power-up, if any.
    pub fn active(&self) -> Option<PowerUp> {
        self.active.map(|(p, _)| p)
    }

    pub fn queued_len(&self) -> usize {
        self.queued.len()
    }

    /// Per-tick update: expire the active power-up, then activate at
    /// most one queued power-up. Returns the newly activated power-up
    /// so the driver can apply its effects. Levitate is instantaneous
    /// and never occupies the active window.
    pub fn advance(&mut self, now: u32) -> Option<PowerUp> {
        if matches!(self.active, Some((_, until)) if now >= until) {
            self.active = None;
        }
        if self.active.is_some() {
            return None;
        }
        let next = self.queued.pop_front()?;
        match next.kind {
            PowerUpKind::Levitate => {}
            PowerUpKind::Force => self.active = Some((next, now + self.force_secs)),
            PowerUpKind::Boost => self.active = Some((next, now + self.boost_secs)),
        }
        Some(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bank_and_play() {
        let mut vault = Vault::new(Alliance::Red, 5, 30);
        vault.bank_cube(PowerUpKind::Boost);
        vault.bank_cube(PowerUpKind::Boost);
        assert_eq!(vault.score(), Score::new(10, 0));
        assert_eq!(vault.score(), Score::ZERO);

        let powerup = vault.play(PowerUpKind::Boost);
        assert_eq!(powerup.level, 2);
        assert!(vault.column(PowerUpKind::Boost).played());
        assert!(!vault.column(PowerUpKind::Boost).can_accept());
    }

    #[test]
    fn test_levitate_needs_full_column() {
        let mut vault = Vault::new(Alliance::Blue, 5, 30);
        vault.bank_cube(PowerUpKind::Levitate);
        vault.bank_cube(PowerUpKind::Levitate);
        assert!(!vault.column(PowerUpKind::Levitate).playable());
        vault.bank_cube(PowerUpKind::Levitate);
        assert!(vault.column(PowerUpKind::Levitate).playable());
    }

    #[test]
    #[should_panic(expected = "column is full")]
    fn test_overfill_panics() {
        let mut vault = Vault::new(Alliance::Red, 5, 30);
        for _ in 0..4 {
            vault.bank_cube(PowerUpKind::Force);
        }
    }

    #[test]
    fn test_queue_serializes_activation() {
        let mut queue = PowerUpQueue::new(10, 10);
        let boost = PowerUp {
            alliance: Alliance::Red,
            kind: PowerUpKind::Boost,
            level: 1,
        };
        let force = PowerUp {
            alliance: Alliance::Blue,
            kind: PowerUpKind::Force,
            level: 2,
        };
        queue.enqueue(boost);
        queue.enqueue(force);

        assert_eq!(queue.advance(100), Some(boost));
        assert_eq!(queue.active(), Some(boost));
        // Force waits for the boost window to expire.
        assert_eq!(queue.advance(105), None);
        assert_eq!(queue.advance(110), Some(force));
        assert_eq!(queue.active(), Some(force));
        assert_eq!(queue.advance(120), None);
        assert_eq!(queue.active(), None);
    }
}
