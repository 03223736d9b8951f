//! The player.

use serde::{Deserialize, Serialize};

use super::combatant::Combatant;
use super::power::PowerMap;

/// Starting and maximum health of a fresh player.
pub const STARTING_HEALTH: i32 = 72;

/// Energy available each turn.
pub const STARTING_ENERGY: u32 = 3;

/// The player's combat and resource state.
///
/// Health may drop below zero when damage overflows block; "alive" is
/// `current_health > 0` and a negative value is never surfaced as such.
/// Energy and block reset every turn.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub max_health: i32,
    pub current_health: i32,
    pub max_energy: u32,
    pub current_energy: u32,
    /// Damage buffer consumed before health.
    pub block: u32,
    pub gold: u32,
    pub powers: PowerMap,
}

impl Player {
    /// A fresh player at full health and energy.
    #[must_use]
    pub fn new() -> Self {
        Self {
            max_health: STARTING_HEALTH,
            current_health: STARTING_HEALTH,
            max_energy: STARTING_ENERGY,
            current_energy: STARTING_ENERGY,
            block: 0,
            gold: 0,
            powers: PowerMap::new(),
        }
    }
}

impl Default for Player {
    fn default() -> Self {
        Self::new()
    }
}

impl Combatant for Player {
    fn max_health(&self) -> i32 {
        self.max_health
    }

    fn current_health(&self) -> i32 {
        self.current_health
    }

    fn set_current_health(&mut self, value: i32) {
        self.current_health = value;
    }

    fn block(&self) -> u32 {
        self.block
    }

    fn set_block(&mut self, value: u32) {
        self.block = value;
    }

    fn powers(&self) -> &PowerMap {
        &self.powers
    }

    fn powers_mut(&mut self) -> &mut PowerMap {
        &mut self.powers
    }
}
