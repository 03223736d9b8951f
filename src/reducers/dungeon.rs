//! Navigation, rewards and campfires.

use crate::core::{Card, GameState};
use crate::dungeon::{CampfireChoice, GridPos, Room, RewardKind};
use crate::error::Error;

use super::deck::reshuffle_and_draw;

/// Record a move to a node on the map.
///
/// Moving resets the run's transient state: the hand is reshuffled and
/// redrawn, and the player's powers, energy and block are cleared. The
/// destination node is marked visited, appended to the path trail and made
/// current.
///
/// Edge validity is the caller's responsibility: the navigation layer only
/// proposes edges that exist, and this reducer trusts it. A position outside
/// the graph entirely is still a loud error.
pub fn move_to(state: &GameState, pos: GridPos) -> Result<GameState, Error> {
    let mut next = reshuffle_and_draw(state);

    next.player.powers.clear();
    next.player.current_energy = next.player.max_energy;
    next.player.block = 0;

    let dungeon = next.dungeon_mut()?;
    let node = dungeon.node_mut(pos).ok_or(Error::MissingNode(pos))?;
    node.did_visit = true;
    dungeon.path_taken.push_back(pos);
    dungeon.x = pos.x;
    dungeon.y = pos.y;
    Ok(next)
}

/// Obtain one reward from the current room.
///
/// Fails if the index is out of bounds or the reward was already obtained.
/// Gold credits the player; a card reward appends the chosen card to the
/// deck, not the draw pile, so it is not drawable this shuffle.
pub fn obtain_reward(
    state: &GameState,
    reward_idx: usize,
    card_idx: Option<usize>,
) -> Result<GameState, Error> {
    enum Grant {
        Gold(u32),
        Card(Card),
    }

    let mut next = state.clone();
    let grant = {
        let room = next.current_room_mut()?;
        let rewards = room.rewards_mut().ok_or(Error::RewardOutOfBounds {
            index: reward_idx,
            available: 0,
        })?;
        let available = rewards.len();
        let reward = rewards
            .get_mut(reward_idx)
            .ok_or(Error::RewardOutOfBounds {
                index: reward_idx,
                available,
            })?;
        if reward.obtained {
            return Err(Error::RewardAlreadyObtained(reward_idx));
        }

        let grant = match &reward.kind {
            RewardKind::Gold { amount } => Grant::Gold(*amount),
            RewardKind::Card { choices } => {
                let index = card_idx.ok_or(Error::MissingCardChoice)?;
                let card = choices.get(index).ok_or(Error::CardChoiceOutOfBounds {
                    index,
                    available: choices.len(),
                })?;
                Grant::Card(card.clone())
            }
        };
        reward.obtained = true;
        grant
    };

    match grant {
        Grant::Gold(amount) => next.player.gold += amount,
        Grant::Card(card) => {
            let id = next.register_card(card);
            next.deck.push_back(id);
        }
    }
    Ok(next)
}

/// Mark every reward in the current room obtained, granting nothing.
pub fn skip_rewards(state: &GameState) -> Result<GameState, Error> {
    let mut next = state.clone();
    let room = next.current_room_mut()?;
    if let Some(rewards) = room.rewards_mut() {
        for reward in rewards.iter_mut() {
            reward.obtained = true;
        }
    }
    Ok(next)
}

/// Record the player's choice at the current campfire.
///
/// The companion effect (the heal, the upgrade, the removal) flows through
/// the ordinary reducers; this only satisfies the room's completion
/// predicate.
pub fn record_campfire_choice(
    state: &GameState,
    choice: CampfireChoice,
) -> Result<GameState, Error> {
    let mut next = state.clone();
    {
        let room = next.current_room_mut()?;
        let Room::Campfire { choice: slot } = room else {
            return Err(Error::NotACampfire);
        };
        *slot = Some(choice);
    }
    Ok(next)
}
