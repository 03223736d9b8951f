//! Cards: identity, stats, conditions, effects, upgrades.
//!
//! A [`Card`] is a single owned instance with a stable [`CardId`]. The
//! snapshot keeps every instance in one authoritative store and the piles
//! hold ids, so a card upgraded in the deck is the upgraded card wherever its
//! id shows up next, in whichever pile that is.
//!
//! Upgrading is the one sanctioned instance-level mutation. It is data
//! driven: a card ships with an optional [`UpgradeSpec`] describing the field
//! overrides its upgraded form applies.

use serde::{Deserialize, Serialize};

use super::power::{Power, PowerMap};
use super::target::TargetKind;

/// Unique identifier for a card instance, stable for the instance's life.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CardId(pub u32);

impl CardId {
    /// Id of a card not yet registered with a game (content prototypes).
    pub const UNASSIGNED: CardId = CardId(0);

    /// Create a new card ID.
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

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}

/// Card category.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CardKind {
    Attack,
    Skill,
}

/// A predicate gating whether a card may be played.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CardCondition {
    /// Every card in the hand must be of this kind.
    OnlyCardKind(CardKind),
    /// The player's health must be below this percentage of maximum.
    HealthBelowPercent(u32),
}

/// An auxiliary effect a card runs after its stat line resolves.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CardEffect {
    /// Heal the card's target.
    AddHealth { amount: u32 },
    /// Draw cards, optionally gated by conditions evaluated at effect time.
    DrawCards {
        amount: usize,
        conditions: Vec<CardCondition>,
    },
    /// Deal damage equal to the player's current block to the card's target.
    DealDamageEqualToBlock,
}

/// Field overrides applied by [`Card::upgrade`].
///
/// `None` fields are left untouched; `Some` fields replace the card's value
/// wholesale (power grants and condition lists included).
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpgradeSpec {
    pub energy: Option<u32>,
    pub damage: Option<u32>,
    pub block: Option<u32>,
    pub powers: Option<Vec<(Power, u32)>>,
    pub conditions: Option<Vec<CardCondition>>,
    pub effects: Option<Vec<CardEffect>>,
    pub description: Option<String>,
}

/// A single card instance.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    /// Unique instance identity.
    pub id: CardId,
    pub name: String,
    pub kind: CardKind,
    /// Energy cost to play.
    pub energy: u32,
    /// What this card targets.
    pub target: TargetKind,
    /// Damage dealt to the resolved target(s), if any.
    pub damage: Option<u32>,
    /// Block granted to the player, if any.
    pub block: Option<u32>,
    /// Power stacks granted to the card's target on play.
    pub powers: PowerMap,
    /// Predicates gating playability.
    pub conditions: Vec<CardCondition>,
    /// Auxiliary effects run after the stat line.
    pub effects: Vec<CardEffect>,
    pub description: String,
    /// Pending upgrade, consumed by [`Card::upgrade`].
    pub upgrade: Option<UpgradeSpec>,
    pub upgraded: bool,
}

impl Card {
    /// Create a card with the given stat line and no extras.
    pub fn new(
        name: impl Into<String>,
        kind: CardKind,
        energy: u32,
        target: TargetKind,
    ) -> Self {
        Self {
            id: CardId::UNASSIGNED,
            name: name.into(),
            kind,
            energy,
            target,
            damage: None,
            block: None,
            powers: PowerMap::new(),
            conditions: Vec::new(),
            effects: Vec::new(),
            description: String::new(),
            upgrade: None,
            upgraded: false,
        }
    }

    #[must_use]
    pub fn with_damage(mut self, damage: u32) -> Self {
        self.damage = Some(damage);
        self
    }

    #[must_use]
    pub fn with_block(mut self, block: u32) -> Self {
        self.block = Some(block);
        self
    }

    #[must_use]
    pub fn with_power(mut self, power: Power, stacks: u32) -> Self {
        self.powers.add(power, stacks);
        self
    }

    #[must_use]
    pub fn with_condition(mut self, condition: CardCondition) -> Self {
        self.conditions.push(condition);
        self
    }

    #[must_use]
    pub fn with_effect(mut self, effect: CardEffect) -> Self {
        self.effects.push(effect);
        self
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    #[must_use]
    pub fn with_upgrade(mut self, upgrade: UpgradeSpec) -> Self {
        self.upgrade = Some(upgrade);
        self
    }

    /// Upgrade this card in place.
    ///
    /// Consumes the pending [`UpgradeSpec`]; a card without one (or already
    /// upgraded) is left unchanged, so upgrading is idempotent.
    pub fn upgrade(&mut self) {
        let Some(spec) = self.upgrade.take() else {
            return;
        };
        if let Some(energy) = spec.energy {
            self.energy = energy;
        }
        if let Some(damage) = spec.damage {
            self.damage = Some(damage);
        }
        if let Some(block) = spec.block {
            self.block = Some(block);
        }
        if let Some(powers) = spec.powers {
            self.powers = powers.into_iter().collect();
        }
        if let Some(conditions) = spec.conditions {
            self.conditions = conditions;
        }
        if let Some(effects) = spec.effects {
            self.effects = effects;
        }
        if let Some(description) = spec.description {
            self.description = description;
        }
        self.upgraded = true;
    }
}
