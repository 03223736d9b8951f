//! Monster encounters and stock dungeons.
//!
//! Data for the default map: monster rooms with their intent scripts, reward
//! bundles, and the fixed test dungeon the integration tests lean on.

use crate::core::{GameRng, Intent, Monster};
use crate::dungeon::{self, DungeonState, Floor, MapConfig, Reward, Room};
use crate::error::Error;

use super::cards;

/// Roughly one node in six on a regular floor is a campfire.
const CAMPFIRE_CHANCE: usize = 6;

/// Generate the default dungeon with the stock encounter pool.
pub fn generate_dungeon(rng: &mut GameRng) -> Result<DungeonState, Error> {
    dungeon::generate(&MapConfig::default(), rng, |rng, floor| match floor {
        Floor::Final => boss_room(rng),
        Floor::Regular(_) => {
            if rng.gen_range_usize(0..CAMPFIRE_CHANCE) == 0 {
                Room::campfire()
            } else {
                monster_room(rng)
            }
        }
    })
}

/// A random monster room from the pool, rewards attached.
pub fn monster_room(rng: &mut GameRng) -> Room {
    let room = match rng.gen_range_usize(0..5) {
        0 => Room::monster(vec![Monster::new(rng.gen_range_inclusive(8..=10) as i32)
            .with_name("Goblin")
            .with_intents([
                Intent::damage(7),
                Intent::damage(11),
                Intent::damage(7),
                Intent::block(9),
            ])]),
        1 => Room::monster(vec![Monster::new(rng.gen_range_inclusive(43..=47) as i32)
            .with_name("Venomous Sleach")
            .with_intents([
                Intent::idle().and_vulnerable(1),
                Intent::damage(10),
                Intent::damage(6),
                Intent::idle(),
                Intent::idle().and_weak(1),
            ])]),
        2 => Room::monster(vec![
            Monster::new(rng.gen_range_inclusive(13..=17) as i32)
                .with_name("Ancient Warrior")
                .with_intents([
                    Intent::damage(7),
                    Intent::damage(8).and_block(4),
                    Intent::damage(6),
                    Intent::idle(),
                    Intent::block(6),
                ]),
            Monster::new(29).with_name("Shade").with_intents([
                Intent::damage(9),
                Intent::damage(8),
                Intent::idle().and_weak(1),
                Intent::damage(6),
                Intent::idle(),
            ]),
        ]),
        3 => Room::monster(vec![
            Monster::new(rng.gen_range_inclusive(12..=15) as i32)
                .with_name("Blood Urchin")
                .with_intents([Intent::damage(6)]),
            Monster::new(rng.gen_range_inclusive(12..=15) as i32)
                .with_name("Blood Urchin")
                .with_intents([Intent::damage(6)]),
            Monster::new(rng.gen_range_inclusive(10..=16) as i32)
                .with_name("Cracked Blood Urchin")
                .with_intents([Intent::damage(6)]),
        ]),
        _ => Room::monster(vec![Monster::new(46).with_name("Plated Warrior").with_intents([
            Intent::damage(12),
            Intent::damage(11).and_block(6),
            Intent::damage(16).and_block(5),
            Intent::idle(),
            Intent::block(6),
        ])]),
    };
    let rewards = standard_rewards(rng);
    room.with_rewards(rewards)
}

/// The final-floor room.
pub fn boss_room(rng: &mut GameRng) -> Room {
    Room::monster(vec![Monster::new(
        rng.gen_range_inclusive(100..=140) as i32
    )
    .with_name("Elder Grievethroghter")
    .with_intents([
        Intent::damage(16),
        Intent::block(6),
        Intent::damage(16),
        Intent::damage(7),
        Intent::idle().and_weak(2),
    ])])
    .with_rewards(standard_rewards(rng))
}

/// The stock reward bundle: some gold and a pick of three cards.
pub fn standard_rewards(rng: &mut GameRng) -> Vec<Reward> {
    let gold = rng.gen_range_inclusive(10..=25);
    let mut pool: Vec<&str> = cards::ALL_CARDS.to_vec();
    rng.shuffle(&mut pool);
    let choices = pool
        .into_iter()
        .take(3)
        .filter_map(cards::by_name)
        .collect();
    vec![Reward::gold(gold), Reward::card_choice(choices)]
}

/// The fixed dungeon used by tests: 1 node wide, start + three monster
/// floors + a final fight. The first room holds a single hp-42 monster, the
/// second two monsters.
#[must_use]
pub fn test_dungeon() -> DungeonState {
    let intents = [
        Intent::block(7),
        Intent::damage(10),
        Intent::damage(8),
        Intent::idle(),
        Intent::damage(14),
    ];
    let column = |room| im::vector![crate::dungeon::MapNode::with_room(room)];
    let graph = im::vector![
        column(Room::Start),
        column(Room::monster(vec![
            Monster::new(42).with_intents(intents)
        ])),
        column(Room::monster(vec![
            Monster::new(24).with_intents(intents),
            Monster::new(13).with_intents(intents),
        ])),
        column(Room::monster(vec![
            Monster::new(42).with_intents(intents)
        ])),
        column(Room::monster(vec![
            Monster::new(42).with_intents(intents)
        ])),
    ];
    DungeonState::new(graph)
}
