//! Monsters and their scripted intents.
//!
//! A monster plays a fixed, cyclic script: each turn it reads the intent at
//! its cursor, advances the cursor (wrapping past the end), and applies the
//! intent's effects. Dead monsters keep their cursor frozen.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::combatant::Combatant;
use super::power::PowerMap;

/// Unique identifier for a monster, stable for the life of the instance.
///
/// Assigned when a dungeon is attached to a game; content prototypes start
/// unassigned.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct MonsterId(pub u32);

impl MonsterId {
    /// Id of a monster not yet attached to a game.
    pub const UNASSIGNED: MonsterId = MonsterId(0);

    /// Create a new monster ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

/// One step of a monster's script.
///
/// Example: `[{damage: 6}, {block: 2}, {}, {weak: 2}]` deals 6 damage on turn
/// one, gains 2 block on turn two, idles on turn three and applies Weak on
/// turn four, then starts over.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Intent {
    /// Damage dealt to the player.
    pub damage: Option<u32>,
    /// Block the monster gains.
    pub block: Option<u32>,
    /// Vulnerable stacks applied to the player.
    pub vulnerable: Option<u32>,
    /// Weak stacks applied to the player.
    pub weak: Option<u32>,
}

impl Intent {
    /// An intent that only deals damage.
    #[must_use]
    pub const fn damage(amount: u32) -> Self {
        Self {
            damage: Some(amount),
            block: None,
            vulnerable: None,
            weak: None,
        }
    }

    /// An intent that only gains block.
    #[must_use]
    pub const fn block(amount: u32) -> Self {
        Self {
            damage: None,
            block: Some(amount),
            vulnerable: None,
            weak: None,
        }
    }

    /// An intent that does nothing.
    #[must_use]
    pub const fn idle() -> Self {
        Self {
            damage: None,
            block: None,
            vulnerable: None,
            weak: None,
        }
    }

    #[must_use]
    pub const fn and_block(mut self, amount: u32) -> Self {
        self.block = Some(amount);
        self
    }

    #[must_use]
    pub const fn and_vulnerable(mut self, stacks: u32) -> Self {
        self.vulnerable = Some(stacks);
        self
    }

    #[must_use]
    pub const fn and_weak(mut self, stacks: u32) -> Self {
        self.weak = Some(stacks);
        self
    }
}

/// Intent scripts are short; keep them inline.
pub type IntentList = SmallVec<[Intent; 5]>;

/// A monster in a dungeon room.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Monster {
    /// Unique instance identity.
    pub id: MonsterId,
    pub name: Option<String>,
    pub max_health: i32,
    pub current_health: i32,
    pub block: u32,
    pub powers: PowerMap,
    /// Cyclic script of planned turns.
    pub intents: IntentList,
    /// Cursor into `intents`, wraps to 0 past the last entry.
    pub next_intent: usize,
}

impl Monster {
    /// Create a monster at full health with no script.
    #[must_use]
    pub fn new(max_health: i32) -> Self {
        Self {
            id: MonsterId::UNASSIGNED,
            name: None,
            max_health,
            current_health: max_health,
            block: 0,
            powers: PowerMap::new(),
            intents: IntentList::new(),
            next_intent: 0,
        }
    }

    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn with_intents(mut self, intents: impl IntoIterator<Item = Intent>) -> Self {
        self.intents = intents.into_iter().collect();
        self
    }

    #[must_use]
    pub fn with_block(mut self, block: u32) -> Self {
        self.block = block;
        self
    }

    /// The intent this monster will execute next, if it has a script.
    #[must_use]
    pub fn current_intent(&self) -> Option<Intent> {
        self.intents.get(self.next_intent).copied()
    }

    /// Advance the intent cursor, wrapping to the start of the script.
    pub fn advance_intent(&mut self) {
        if self.intents.is_empty() {
            return;
        }
        self.next_intent = if self.next_intent + 1 >= self.intents.len() {
            0
        } else {
            self.next_intent + 1
        };
    }
}

impl Combatant for Monster {
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
