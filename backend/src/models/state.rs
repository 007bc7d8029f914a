//! Complete match state: every actor plus the shared field stock
//!
//! Actors are owned by exactly one `MatchState` for their whole life;
//! the registry records registration order, which is the update order
//! and the score-aggregation order for every tick.
//!
//! # Critical Invariants
//!
//! 1. **Stable ordering**: the registry preserves insertion order.
//! 2. **Unique identity**: registering a duplicate key or a duplicate
//!    name panics; it is a setup bug, not a runtime condition.
//! 3. **No destruction**: actors are never removed mid-match.

use crate::models::field::FieldStock;
use crate::models::human::Human;
use crate::models::robot::Robot;
use crate::models::score::Alliance;
use crate::models::seesaw::{Seesaw, SeesawKey};
use crate::models::vault::{PowerUpQueue, Vault};
use std::collections::HashMap;

/// Identity of a registered actor.
///
/// An explicit tagged key, not a string: deciders and drivers address
/// actors through this enum rather than by formatted-name lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActorKey {
    Robot(usize),
    Human(usize),
    Vault(Alliance),
    PowerUps,
    Seesaw(SeesawKey),
}

/// All actors and shared structures of one match.
#[derive(Debug)]
pub struct MatchState {
    robots: Vec<Robot>,
    humans: Vec<Human>,
    switch_red: Seesaw,
    switch_blue: Seesaw,
    scale: Seesaw,
    vault_red: Vault,
    vault_blue: Vault,
    powerups: PowerUpQueue,
    stock: FieldStock,
    registry: Vec<ActorKey>,
    names: HashMap<String, ActorKey>,
}

impl MatchState {
    /// Create a state holding the field structures, with an empty
    /// registry. The driver registers actors in its canonical order.
    pub fn new(
        switch_red: Seesaw,
        switch_blue: Seesaw,
        scale: Seesaw,
        vault_red: Vault,
        vault_blue: Vault,
        powerups: PowerUpQueue,
    ) -> Self {
        Self {
            robots: Vec::new(),
            humans: Vec::new(),
            switch_red,
            switch_blue,
            scale,
            vault_red,
            vault_blue,
            powerups,
            stock: FieldStock::new(),
            registry: Vec::new(),
            names: HashMap::new(),
        }
    }

    fn register(&mut self, key: ActorKey, name: String) {
        assert!(
            !self.registry.contains(&key),
            "actor {:?} is already registered",
            key
        );
        assert!(
            self.names.insert(name.clone(), key).is_none(),
            "actor name {:?} is already registered",
            name
        );
        self.registry.push(key);
    }

    /// Add and register a robot; returns its key.
    pub fn add_robot(&mut self, robot: Robot) -> ActorKey {
        let key = ActorKey::Robot(self.robots.len());
        self.register(key, robot.name().to_string());
        self.robots.push(robot);
        key
    }

    /// Add and register a human player; returns its key.
    pub fn add_human(&mut self, human: Human) -> ActorKey {
        let key = ActorKey::Human(self.humans.len());
        self.register(key, human.name().to_string());
        self.humans.push(human);
        key
    }

    /// Register the field structures (vaults, power-up queue, seesaws).
    ///
    /// The power-up queue precedes the seesaws so an activation lands on
    /// a seesaw before its ownership update runs in the same tick.
    pub fn register_field_actors(&mut self) {
        self.register(ActorKey::Vault(Alliance::Red), self.vault_red.name().to_string());
        self.register(ActorKey::Vault(Alliance::Blue), self.vault_blue.name().to_string());
        self.register(ActorKey::PowerUps, self.powerups.name().to_string());
        self.register(
            ActorKey::Seesaw(SeesawKey::Switch(Alliance::Red)),
            self.switch_red.name().to_string(),
        );
        self.register(
            ActorKey::Seesaw(SeesawKey::Switch(Alliance::Blue)),
            self.switch_blue.name().to_string(),
        );
        self.register(
            ActorKey::Seesaw(SeesawKey::Scale),
            self.scale.name().to_string(),
        );
    }

    /// Registration order; update and score passes walk this slice.
    pub fn registry(&self) -> &[ActorKey] {
        &self.registry
    }

    /// Key registered under a name, if any.
    pub fn lookup(&self, name: &str) -> Option<ActorKey> {
        self.names.get(name).copied()
    }

    /// Display name of a registered actor.
    pub fn name_of(&self, key: ActorKey) -> &str {
        match key {
            ActorKey::Robot(i) => self.robots[i].name(),
            ActorKey::Human(i) => self.humans[i].name(),
            ActorKey::Vault(a) => self.vault(a).name(),
            ActorKey::PowerUps => self.powerups.name(),
            ActorKey::Seesaw(k) => self.seesaw(k).name(),
        }
    }

    pub fn robots(&self) -> &[Robot] {
        &self.robots
    }

    pub fn robot(&self, index: usize) -> &Robot {
        &self.robots[index]
    }

    pub fn robot_mut(&mut self, index: usize) -> &mut Robot {
        &mut self.robots[index]
    }

    pub fn humans(&self) -> &[Human] {
        &self.humans
    }

    pub fn human(&self, index: usize) -> &Human {
        &self.humans[index]
    }

    pub fn human_mut(&mut self, index: usize) -> &mut Human {
        &mut self.humans[index]
    }

    pub fn seesaw(&self, key: SeesawKey) -> &Seesaw {
        match key {
            SeesawKey::Switch(Alliance::Red) => &self.switch_red,
            SeesawKey::Switch(Alliance::Blue) => &self.switch_blue,
            SeesawKey::Scale => &self.scale,
        }
    }

    pub fn seesaw_mut(&mut self, key: SeesawKey) -> &mut Seesaw {
        match key {
            SeesawKey::Switch(Alliance::Red) => &mut self.switch_red,
            SeesawKey::Switch(Alliance::Blue) => &mut self.switch_blue,
            SeesawKey::Scale => &mut self.scale,
        }
    }

    /// The switch at an alliance's end of the field.
    pub fn switch(&self, alliance: Alliance) -> &Seesaw {
        self.seesaw(SeesawKey::Switch(alliance))
    }

    /// The scale in the middle of the field.
    pub fn scale(&self) -> &Seesaw {
        &self.scale
    }

    pub fn vault(&self, alliance: Alliance) -> &Vault {
        match alliance {
            Alliance::Red => &self.vault_red,
            Alliance::Blue => &self.vault_blue,
        }
    }

    pub fn vault_mut(&mut self, alliance: Alliance) -> &mut Vault {
        match alliance {
            Alliance::Red => &mut self.vault_red,
            Alliance::Blue => &mut self.vault_blue,
        }
    }

    pub fn powerups(&self) -> &PowerUpQueue {
        &self.powerups
    }

    pub fn powerups_mut(&mut self) -> &mut PowerUpQueue {
        &mut self.powerups
    }

    pub fn stock(&self) -> &FieldStock {
        &self.stock
    }

    pub fn stock_mut(&mut self) -> &mut FieldStock {
        &mut self.stock
    }
}
