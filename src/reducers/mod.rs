//! The reducer library.
//!
//! One pure function per operation. Every reducer maps a snapshot (plus a
//! payload) to a fresh snapshot and touches nothing else:
//!
//! - no I/O, no wall clock;
//! - all randomness comes from the snapshot's own [`GameRng`], so the same
//!   `(snapshot, payload)` always yields a value-equal result;
//! - failures are loud, typed [`Error`](crate::Error) values; a reducer
//!   never hands back a half-updated snapshot, because the clone it was
//!   working on is simply dropped.
//!
//! Fallible reducers return `Result<GameState, Error>`; the ones with no
//! failure mode (drawing, discarding) return `GameState` directly.

mod combat;
mod deck;
mod dungeon;
mod turn;

pub use combat::{
    add_health, apply_card_powers, deal_damage_equal_to_block, decrease_monster_power_stacks,
    decrease_player_power_stacks, play_card, remove_health,
};
pub use deck::{
    add_starter_deck, discard_card, discard_hand, draw_cards, remove_card, reshuffle_and_draw,
    upgrade_card, DEFAULT_DRAW_AMOUNT,
};
pub use dungeon::{move_to, obtain_reward, record_campfire_choice, skip_rewards};
pub use turn::{end_turn, take_monster_turn};

use crate::content::encounters;
use crate::core::{GameConfig, GameState, MonsterId};
use crate::dungeon::{DungeonState, Room};
use crate::error::Error;

/// The zero-state: turn 1, empty piles, fresh player, no dungeon.
#[must_use]
pub fn create_new_game(config: &GameConfig) -> GameState {
    GameState::new(config)
}

/// Set the dungeon, generating a default map when none is supplied.
///
/// Replaces whatever dungeon existed. Every monster receives its unique id
/// here. In god mode every monster is clamped to 1 health so any hit kills.
pub fn set_dungeon(state: &GameState, dungeon: Option<DungeonState>) -> Result<GameState, Error> {
    let mut next = state.clone();
    let mut dungeon = match dungeon {
        Some(dungeon) => dungeon,
        None => encounters::generate_dungeon(&mut next.rng)?,
    };
    if dungeon.graph.is_empty() {
        return Err(Error::EmptyDungeon);
    }

    let god_mode = next.god_mode();
    let mut next_monster_id = 1u32;
    for floor in dungeon.graph.iter_mut() {
        for node in floor.iter_mut() {
            let Some(monsters) = node.room.as_mut().and_then(Room::monsters_mut) else {
                continue;
            };
            for monster in monsters {
                monster.id = MonsterId(next_monster_id);
                next_monster_id += 1;
                if god_mode {
                    monster.max_health = 1;
                    monster.current_health = 1;
                    monster.block = 0;
                }
            }
        }
    }

    next.dungeon = Some(dungeon);
    Ok(next)
}
