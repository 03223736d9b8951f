//! Combat resolution: playing cards, damage, healing, power bookkeeping.

use crate::core::{
    Card, CardCondition, CardEffect, CardId, Combatant, GameState, Power, Target, TargetKind,
};
use crate::error::Error;

use super::deck::{discard_card, draw_cards};

/// Run a closure over every combatant a target resolves to.
///
/// `living_only` filters dead monsters out of an all-enemies resolution;
/// single-enemy and player targets are passed through untouched.
fn for_each_target(
    state: &mut GameState,
    target: Target,
    living_only: bool,
    mut f: impl FnMut(&mut dyn Combatant),
) -> Result<(), Error> {
    match target {
        Target::Player => f(&mut state.player),
        Target::Enemy(index) => {
            let room = state.current_room_mut()?;
            let monsters = room.monsters_mut().ok_or(Error::NoSuchMonster(index))?;
            let monster = monsters
                .get_mut(index)
                .ok_or(Error::NoSuchMonster(index))?;
            f(monster);
        }
        Target::AllEnemies => {
            let room = state.current_room_mut()?;
            if let Some(monsters) = room.monsters_mut() {
                for monster in monsters.iter_mut() {
                    if living_only && !monster.is_alive() {
                        continue;
                    }
                    f(monster);
                }
            }
        }
    }
    Ok(())
}

fn conditions_met(state: &GameState, conditions: &[CardCondition]) -> bool {
    conditions.iter().all(|condition| match condition {
        CardCondition::OnlyCardKind(kind) => state.hand_cards().all(|card| card.kind == *kind),
        CardCondition::HealthBelowPercent(percent) => {
            state.player.current_health * 100 < state.player.max_health * (*percent as i32)
        }
    })
}

/// Play a card from the hand.
///
/// Validates first: ambiguous target, missing card, energy, playability
/// conditions. Then it resolves in a fixed order: discard the card, pay
/// energy, gain block, deal damage (through the Weak/Vulnerable modifiers),
/// grant powers, run the card's auxiliary effects.
///
/// An attack card that targets all enemies hits every living monster in the
/// room, whichever single target the caller dropped it on.
pub fn play_card(
    state: &GameState,
    card_id: CardId,
    target: Option<Target>,
) -> Result<GameState, Error> {
    if !state.hand.contains(&card_id) {
        return Err(Error::MissingCard(card_id));
    }
    let card = state
        .card(card_id)
        .ok_or(Error::MissingCard(card_id))?
        .clone();
    let target = match target {
        Some(target) => target,
        None => card.target.default_target()?,
    };
    if state.player.current_energy < card.energy {
        return Err(Error::InsufficientEnergy {
            required: card.energy,
            available: state.player.current_energy,
        });
    }
    if !conditions_met(state, &card.conditions) {
        return Err(Error::ConditionNotMet(card_id));
    }

    let mut next = discard_card(state, card_id);
    next.player.current_energy -= card.energy;

    // Block always lands on the player.
    if let Some(block) = card.block {
        next.player.block += block;
    }

    if let Some(base) = card.damage {
        let resolved = if card.target == TargetKind::AllEnemies {
            Target::AllEnemies
        } else {
            target
        };
        let amount = if next.player.powers.has(Power::Weak) {
            Power::Weak.apply(base)
        } else {
            base
        };
        for_each_target(&mut next, resolved, true, |combatant| {
            combatant.take_damage(amount);
        })?;
    }

    if !card.powers.is_empty() {
        next = apply_card_powers(&next, card_id, target)?;
    }

    for effect in &card.effects {
        next = run_card_effect(&next, &card, effect, target)?;
    }
    Ok(next)
}

/// Increase the target's health, clamped to `[0, max_health]`.
pub fn add_health(state: &GameState, target: Target, amount: u32) -> Result<GameState, Error> {
    let mut next = state.clone();
    for_each_target(&mut next, target, false, |combatant| {
        combatant.heal(amount);
    })?;
    Ok(next)
}

/// Deal damage to the target(s).
///
/// Per target: Vulnerable amplifies the amount (x1.5 floored), block absorbs
/// first and floors at zero, the excess comes out of health. Health is not
/// clamped at zero here; negative health simply means dead.
pub fn remove_health(state: &GameState, target: Target, amount: u32) -> Result<GameState, Error> {
    let mut next = state.clone();
    for_each_target(&mut next, target, false, |combatant| {
        combatant.take_damage(amount);
    })?;
    Ok(next)
}

/// Damage equal to the player's current block, through the standard path.
pub fn deal_damage_equal_to_block(state: &GameState, target: Target) -> Result<GameState, Error> {
    remove_health(state, target, state.player.block)
}

/// Grant the card's power stacks to its target.
///
/// Player-targeted cards stack onto the player; all-enemies cards onto every
/// living monster; single-enemy cards onto the resolved monster. Stacks
/// accumulate additively and are never applied to a dead monster.
pub fn apply_card_powers(
    state: &GameState,
    card_id: CardId,
    target: Target,
) -> Result<GameState, Error> {
    let card = state
        .card(card_id)
        .ok_or(Error::MissingCard(card_id))?
        .clone();
    let mut next = state.clone();

    match card.target {
        TargetKind::Player => {
            for (power, stacks) in card.powers.iter() {
                next.player.powers.add(power, stacks);
            }
        }
        TargetKind::AllEnemies => {
            let room = next.current_room_mut()?;
            if let Some(monsters) = room.monsters_mut() {
                for monster in monsters.iter_mut().filter(|m| m.is_alive()) {
                    for (power, stacks) in card.powers.iter() {
                        monster.powers.add(power, stacks);
                    }
                }
            }
        }
        TargetKind::Enemy => {
            let Target::Enemy(index) = target else {
                return Err(Error::AmbiguousTarget);
            };
            let room = next.current_room_mut()?;
            let monsters = room.monsters_mut().ok_or(Error::NoSuchMonster(index))?;
            let monster = monsters
                .get_mut(index)
                .ok_or(Error::NoSuchMonster(index))?;
            if monster.is_alive() {
                for (power, stacks) in card.powers.iter() {
                    monster.powers.add(power, stacks);
                }
            }
        }
    }
    Ok(next)
}

/// Decay the player's power stacks by one each.
#[must_use]
pub fn decrease_player_power_stacks(state: &GameState) -> GameState {
    let mut next = state.clone();
    next.player.powers.decay();
    next
}

/// Decay every monster's power stacks in the current room by one each.
pub fn decrease_monster_power_stacks(state: &GameState) -> Result<GameState, Error> {
    let mut next = state.clone();
    let room = next.current_room_mut()?;
    if let Some(monsters) = room.monsters_mut() {
        for monster in monsters.iter_mut() {
            monster.powers.decay();
        }
    }
    Ok(next)
}

fn effect_target(card: &Card, played: Target) -> Target {
    match card.target {
        TargetKind::Player => Target::Player,
        TargetKind::AllEnemies => Target::AllEnemies,
        TargetKind::Enemy => played,
    }
}

fn run_card_effect(
    state: &GameState,
    card: &Card,
    effect: &CardEffect,
    played: Target,
) -> Result<GameState, Error> {
    match effect {
        CardEffect::AddHealth { amount } => add_health(state, effect_target(card, played), *amount),
        CardEffect::DrawCards { amount, conditions } => {
            if conditions_met(state, conditions) {
                Ok(draw_cards(state, *amount))
            } else {
                Ok(state.clone())
            }
        }
        CardEffect::DealDamageEqualToBlock => {
            deal_damage_equal_to_block(state, effect_target(card, played))
        }
    }
}
