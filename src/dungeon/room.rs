//! Rooms and rewards.
//!
//! A room is a map node's occupant. Each variant has its own completion
//! predicate:
//!
//! - `Start` is always complete.
//! - `Campfire` is complete once a choice has been recorded.
//! - `Monster` is complete when every monster is dead.

use serde::{Deserialize, Serialize};

use crate::core::{Card, Combatant, Monster};

/// What the player did at a campfire.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CampfireChoice {
    /// Rest and recover health.
    Rest,
    /// Smith: upgrade a card.
    Upgrade,
    /// Meditate: remove a card.
    Remove,
}

/// What a reward grants when obtained.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RewardKind {
    /// A flat amount of gold.
    Gold { amount: u32 },
    /// One card of the player's choosing from the offered set.
    ///
    /// Choices are unregistered prototypes; the chosen one gets a real id
    /// when it joins the deck.
    Card { choices: Vec<Card> },
}

/// A single reward in a cleared monster room.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reward {
    pub kind: RewardKind,
    pub obtained: bool,
}

impl Reward {
    #[must_use]
    pub fn gold(amount: u32) -> Self {
        Self {
            kind: RewardKind::Gold { amount },
            obtained: false,
        }
    }

    #[must_use]
    pub fn card_choice(choices: Vec<Card>) -> Self {
        Self {
            kind: RewardKind::Card { choices },
            obtained: false,
        }
    }
}

/// A map node's occupant content.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Room {
    Start,
    Campfire {
        choice: Option<CampfireChoice>,
    },
    Monster {
        monsters: Vec<Monster>,
        rewards: Vec<Reward>,
    },
}

impl Room {
    /// A monster room with no rewards attached yet.
    #[must_use]
    pub fn monster(monsters: Vec<Monster>) -> Self {
        Room::Monster {
            monsters,
            rewards: Vec::new(),
        }
    }

    /// An unused campfire.
    #[must_use]
    pub fn campfire() -> Self {
        Room::Campfire { choice: None }
    }

    /// Attach rewards (monster rooms only; a no-op elsewhere).
    #[must_use]
    pub fn with_rewards(mut self, new_rewards: Vec<Reward>) -> Self {
        if let Room::Monster { rewards, .. } = &mut self {
            *rewards = new_rewards;
        }
        self
    }

    /// This room's completion predicate.
    #[must_use]
    pub fn is_completed(&self) -> bool {
        match self {
            Room::Start => true,
            Room::Campfire { choice } => choice.is_some(),
            Room::Monster { monsters, .. } => monsters.iter().all(|m| !m.is_alive()),
        }
    }

    /// The monsters in this room, if it is a monster room.
    #[must_use]
    pub fn monsters(&self) -> Option<&[Monster]> {
        match self {
            Room::Monster { monsters, .. } => Some(monsters),
            _ => None,
        }
    }

    pub fn monsters_mut(&mut self) -> Option<&mut Vec<Monster>> {
        match self {
            Room::Monster { monsters, .. } => Some(monsters),
            _ => None,
        }
    }

    /// The rewards in this room (empty outside monster rooms).
    #[must_use]
    pub fn rewards(&self) -> &[Reward] {
        match self {
            Room::Monster { rewards, .. } => rewards,
            _ => &[],
        }
    }

    pub fn rewards_mut(&mut self) -> Option<&mut Vec<Reward>> {
        match self {
            Room::Monster { rewards, .. } => Some(rewards),
            _ => None,
        }
    }
}
