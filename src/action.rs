//! The action wire format and its dispatcher.
//!
//! An [`Action`] is a tagged, serializable description of one intended state
//! change, the only input the engine accepts from collaborators. The sum
//! type is closed and [`dispatch`] matches it exhaustively, so an
//! unhandled action kind is a compile error, not a runtime lookup miss.
//!
//! On the wire every action is a JSON object tagged by `type`:
//!
//! ```json
//! {"type": "playCard", "card": 7, "target": "enemy0"}
//! {"type": "move", "move": {"x": 0, "y": 1}}
//! {"type": "obtainReward", "reward_idx": 1, "card_idx": 0}
//! ```

use serde::{Deserialize, Serialize};

use crate::core::{CardId, GameState, Target};
use crate::dungeon::GridPos;
use crate::error::Error;
use crate::reducers;

/// A single intended state change.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Action {
    /// Move to a node on the map.
    #[serde(rename = "move")]
    Move {
        #[serde(rename = "move")]
        to: GridPos,
    },

    /// Play a card from the hand at an optional explicit target.
    #[serde(rename = "playCard")]
    PlayCard {
        card: CardId,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        target: Option<Target>,
    },

    /// End the player's turn.
    #[serde(rename = "endTurn")]
    EndTurn,

    /// Obtain one reward from the current room.
    #[serde(rename = "obtainReward")]
    ObtainReward {
        reward_idx: usize,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        card_idx: Option<usize>,
    },

    /// Mark every reward in the current room obtained.
    #[serde(rename = "skipRewards")]
    SkipRewards,

    /// Heal the target.
    #[serde(rename = "addHealth")]
    AddHealth { target: Target, amount: u32 },

    /// Upgrade a card in the deck.
    #[serde(rename = "upgradeCard")]
    UpgradeCard { card: CardId },

    /// Remove a card from the deck.
    #[serde(rename = "removeCard")]
    RemoveCard { card: CardId },
}

/// Apply the matching reducer for an action.
pub fn dispatch(state: &GameState, action: &Action) -> Result<GameState, Error> {
    match action {
        Action::Move { to } => reducers::move_to(state, *to),
        Action::PlayCard { card, target } => reducers::play_card(state, *card, *target),
        Action::EndTurn => reducers::end_turn(state),
        Action::ObtainReward {
            reward_idx,
            card_idx,
        } => reducers::obtain_reward(state, *reward_idx, *card_idx),
        Action::SkipRewards => reducers::skip_rewards(state),
        Action::AddHealth { target, amount } => reducers::add_health(state, *target, *amount),
        Action::UpgradeCard { card } => reducers::upgrade_card(state, *card),
        Action::RemoveCard { card } => Ok(reducers::remove_card(state, *card)),
    }
}

/// One entry of the applied log.
///
/// `state` is the snapshot from just before `action` was applied, which
/// makes undo a single pop. The post-state of an entry is the prior state of
/// the next entry (or the live state, for the newest).
#[derive(Clone, Debug, PartialEq)]
pub struct AppliedAction {
    pub action: Action,
    pub state: GameState,
}
