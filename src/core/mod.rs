//! Core value types: cards, powers, combatants, targeting, RNG, and the
//! immutable game snapshot.

mod card;
mod combatant;
mod monster;
mod player;
mod power;
mod rng;
mod state;
mod target;

pub use card::{Card, CardCondition, CardEffect, CardId, CardKind, UpgradeSpec};
pub use combatant::Combatant;
pub use monster::{Intent, IntentList, Monster, MonsterId};
pub use player::{Player, STARTING_ENERGY, STARTING_HEALTH};
pub use power::{Power, PowerMap};
pub use rng::{GameRng, GameRngState};
pub use state::{GameConfig, GameState};
pub use target::{Target, TargetKind};
