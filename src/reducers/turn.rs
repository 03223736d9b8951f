//! Turn sequencing: end of turn and monster turns.

use crate::core::{Combatant, GameState, Power};
use crate::error::Error;

use super::combat::{decrease_monster_power_stacks, decrease_player_power_stacks};
use super::deck::{discard_hand, draw_cards, DEFAULT_DRAW_AMOUNT};

/// End the player's turn.
///
/// The fixed sequence: discard the whole hand, apply Regen (clamped so it
/// never overheals), run every living monster's turn in room order, decay
/// the player's power stacks, decay the monsters' power stacks, then start
/// the new turn: draw a fresh hand, bump the turn counter, reset energy to
/// max and block to zero.
pub fn end_turn(state: &GameState) -> Result<GameState, Error> {
    let mut next = discard_hand(state);

    let regen = next.player.powers.stacks(Power::Regen);
    if regen > 0 {
        next.player.heal(Power::Regen.apply(regen));
    }

    next = play_monster_turns(&next)?;
    next = decrease_player_power_stacks(&next);
    next = decrease_monster_power_stacks(&next)?;
    Ok(new_turn(&next))
}

/// Run every monster's intent in room order, threading the state through.
fn play_monster_turns(state: &GameState) -> Result<GameState, Error> {
    let count = state
        .current_room()?
        .monsters()
        .map_or(0, |monsters| monsters.len());

    let mut next = state.clone();
    for index in 0..count {
        next = take_monster_turn(&next, index)?;
    }
    Ok(next)
}

/// Run the scripted turn of the monster at `index` in the current room.
///
/// Block resets first, always. A dead monster does nothing further; its
/// intent cursor stays frozen. Otherwise the intent at the cursor runs and
/// the cursor advances, wrapping past the end of the script.
pub fn take_monster_turn(state: &GameState, index: usize) -> Result<GameState, Error> {
    let mut next = state.clone();

    let script = {
        let room = next.current_room_mut()?;
        let monsters = room.monsters_mut().ok_or(Error::NoSuchMonster(index))?;
        let monster = monsters
            .get_mut(index)
            .ok_or(Error::NoSuchMonster(index))?;

        monster.block = 0;
        if !monster.is_alive() {
            return Ok(next);
        }
        let Some(intent) = monster.current_intent() else {
            return Ok(next);
        };
        monster.advance_intent();

        if let Some(block) = intent.block {
            monster.block += block;
        }
        (intent, monster.powers.has(Power::Weak))
    };
    let (intent, weakened) = script;

    if let Some(damage) = intent.damage {
        let amount = if weakened {
            Power::Weak.apply(damage)
        } else {
            damage
        };
        next.player.take_damage(amount);
    }

    // Grants land one stack heavier than the scripted value.
    if let Some(vulnerable) = intent.vulnerable {
        next.player.powers.add(Power::Vulnerable, vulnerable + 1);
    }
    if let Some(weak) = intent.weak {
        next.player.powers.add(Power::Weak, weak + 1);
    }
    Ok(next)
}

/// Start a new turn: draw, bump the counter, reset energy and block.
fn new_turn(state: &GameState) -> GameState {
    let mut next = draw_cards(state, DEFAULT_DRAW_AMOUNT);
    next.turn += 1;
    next.player.current_energy = next.player.max_energy;
    next.player.block = 0;
    next
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::encounters::test_dungeon;
    use crate::core::{GameConfig, Intent, Monster};
    use crate::dungeon::{GridPos, Room};
    use crate::reducers::{add_starter_deck, move_to, set_dungeon};

    fn in_combat() -> GameState {
        let state = GameState::new(&GameConfig::with_seed(42));
        let state = set_dungeon(&state, Some(test_dungeon())).unwrap();
        let state = add_starter_deck(&state);
        move_to(&state, GridPos { x: 0, y: 1 }).unwrap()
    }

    fn monster(state: &GameState, index: usize) -> &Monster {
        &state.current_room().unwrap().monsters().unwrap()[index]
    }

    #[test]
    fn test_end_turn_sequence() {
        let state = in_combat();
        assert_eq!(state.hand.len(), 5);

        let next = end_turn(&state).unwrap();

        // Fresh hand, next turn, reset resources.
        assert_eq!(next.hand.len(), 5);
        assert_eq!(next.turn, state.turn + 1);
        assert_eq!(next.player.current_energy, next.player.max_energy);
        assert_eq!(next.player.block, 0);
        // The monster's first intent was block 7.
        assert_eq!(monster(&next, 0).block, 7);
        assert_eq!(monster(&next, 0).next_intent, 1);
    }

    #[test]
    fn test_end_turn_hand_counts() {
        // Hand is empty right after the discard step and back at five after
        // the draw; total card count is conserved throughout.
        let state = in_combat();
        let total = state.draw_pile.len() + state.hand.len() + state.discard_pile.len();

        let next = end_turn(&state).unwrap();
        assert_eq!(next.hand.len(), 5);
        assert_eq!(
            next.draw_pile.len() + next.hand.len() + next.discard_pile.len(),
            total
        );
    }

    #[test]
    fn test_regen_heals_clamped() {
        let mut state = in_combat();
        state.player.current_health = 70;
        state.player.powers.add(Power::Regen, 5);

        let next = end_turn(&state).unwrap();
        // Healed min(5, 72 - 70) = 2, then decayed to 4 stacks.
        assert_eq!(next.player.current_health, 72);
        assert_eq!(next.player.powers.stacks(Power::Regen), 4);
    }

    #[test]
    fn test_monster_intent_damage_hits_player() {
        let mut state = in_combat();
        // Advance the script to the 10-damage intent.
        state
            .current_room_mut()
            .unwrap()
            .monsters_mut()
            .unwrap()[0]
            .next_intent = 1;

        let next = end_turn(&state).unwrap();
        assert_eq!(next.player.current_health, 72 - 10);
    }

    #[test]
    fn test_player_block_absorbs_monster_damage_then_resets() {
        let mut state = in_combat();
        state
            .current_room_mut()
            .unwrap()
            .monsters_mut()
            .unwrap()[0]
            .next_intent = 1; // damage 10
        state.player.block = 6;

        let next = end_turn(&state).unwrap();
        // 6 blocked, 4 through; block then reset for the new turn.
        assert_eq!(next.player.current_health, 72 - 4);
        assert_eq!(next.player.block, 0);
    }

    #[test]
    fn test_dead_monster_turn_is_block_reset_only() {
        let mut state = in_combat();
        {
            let m = &mut state
                .current_room_mut()
                .unwrap()
                .monsters_mut()
                .unwrap()[0];
            m.current_health = 0;
            m.block = 9;
            m.next_intent = 2;
        }

        let next = take_monster_turn(&state, 0).unwrap();
        let m = monster(&next, 0);
        assert_eq!(m.block, 0, "block reset still happens");
        assert_eq!(m.next_intent, 2, "cursor frozen for the dead");
        assert_eq!(next.player, state.player);
    }

    #[test]
    fn test_monster_turn_unknown_index() {
        let state = in_combat();
        assert_eq!(
            take_monster_turn(&state, 3),
            Err(Error::NoSuchMonster(3))
        );
    }

    #[test]
    fn test_intent_cursor_wraps_over_turns() {
        let mut state = in_combat();
        for _ in 0..5 {
            state = take_monster_turn(&state, 0).unwrap();
        }
        assert_eq!(monster(&state, 0).next_intent, 0, "wrapped past the end");
    }

    #[test]
    fn test_intent_grants_carry_bias() {
        let mut state = in_combat();
        {
            let room = state.current_room_mut().unwrap();
            *room = Room::monster(vec![Monster::new(20).with_intents([
                Intent::idle().and_vulnerable(1).and_weak(2),
            ])]);
        }

        let next = take_monster_turn(&state, 0).unwrap();
        assert_eq!(next.player.powers.stacks(Power::Vulnerable), 2);
        assert_eq!(next.player.powers.stacks(Power::Weak), 3);
    }

    #[test]
    fn test_weakened_monster_deals_less() {
        let mut state = in_combat();
        {
            let m = &mut state
                .current_room_mut()
                .unwrap()
                .monsters_mut()
                .unwrap()[0];
            m.next_intent = 1; // damage 10
            m.powers.add(Power::Weak, 1);
        }

        let next = take_monster_turn(&state, 0).unwrap();
        // 10 dampened to 7.
        assert_eq!(next.player.current_health, 72 - 7);
    }

    #[test]
    fn test_monster_powers_decay_at_end_of_turn() {
        let mut state = in_combat();
        state
            .current_room_mut()
            .unwrap()
            .monsters_mut()
            .unwrap()[0]
            .powers
            .add(Power::Vulnerable, 2);

        let next = end_turn(&state).unwrap();
        assert_eq!(monster(&next, 0).powers.stacks(Power::Vulnerable), 1);
    }

    #[test]
    fn test_end_turn_without_dungeon_is_structural() {
        let state = GameState::new(&GameConfig::with_seed(1));
        assert_eq!(end_turn(&state), Err(Error::MissingDungeon));
    }
}
