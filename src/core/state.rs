//! The immutable game snapshot.
//!
//! `GameState` is a value: reducers never mutate a live snapshot, they clone
//! it (cheap, thanks to `im` persistent structures), rework the clone and
//! return it. The facade owns the single live reference; everything else
//! reads snapshots.
//!
//! ## Card identity
//!
//! Every card instance lives in one authoritative store keyed by [`CardId`].
//! The deck and the three piles hold ids, never owned copies, so upgrading a
//! card in the deck is visible wherever that id appears next.
//!
//! ## Conservation invariant
//!
//! The draw pile, hand and discard pile are disjoint and their union equals
//! the deck's id set at all times: no card is silently lost or duplicated.
//! Only the explicit deck operations (starter deck, rewards, removal) change
//! the closed set itself.

use im::{HashMap as ImHashMap, Vector};

use super::card::{Card, CardId};
use super::monster::{Monster, MonsterId};
use super::player::Player;
use super::rng::GameRng;
use crate::dungeon::{DungeonState, Room};
use crate::error::Error;

/// Constructor-time configuration for a new game.
///
/// God mode is an explicit flag here rather than ambient process state:
/// generated monsters are clamped to 1 health so any hit kills.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GameConfig {
    pub seed: u64,
    pub god_mode: bool,
}

impl GameConfig {
    /// Configuration with the given seed and god mode off.
    #[must_use]
    pub const fn with_seed(seed: u64) -> Self {
        Self {
            seed,
            god_mode: false,
        }
    }

    /// Enable god mode.
    #[must_use]
    pub const fn god_mode(mut self) -> Self {
        self.god_mode = true;
        self
    }
}

/// The entire game world at an instant.
#[derive(Clone, Debug, PartialEq)]
pub struct GameState {
    /// Turn number, starts at 1.
    pub turn: u32,
    /// The permanent collection, in construction order.
    pub deck: Vector<CardId>,
    /// Cards yet to be drawn this shuffle.
    pub draw_pile: Vector<CardId>,
    /// Cards in hand.
    pub hand: Vector<CardId>,
    /// Cards spent this shuffle.
    pub discard_pile: Vector<CardId>,
    pub player: Player,
    /// Absent until explicitly set.
    pub dungeon: Option<DungeonState>,
    /// The explicit random source for shuffles and generation.
    pub rng: GameRng,
    /// Authoritative card store; piles reference into this by id.
    cards: ImHashMap<CardId, Card>,
    next_card_id: u32,
    god_mode: bool,
}

impl GameState {
    /// The zero-state: turn 1, empty piles, fresh player, no dungeon.
    #[must_use]
    pub fn new(config: &GameConfig) -> Self {
        Self {
            turn: 1,
            deck: Vector::new(),
            draw_pile: Vector::new(),
            hand: Vector::new(),
            discard_pile: Vector::new(),
            player: Player::new(),
            dungeon: None,
            rng: GameRng::new(config.seed),
            cards: ImHashMap::new(),
            next_card_id: 1,
            god_mode: config.god_mode,
        }
    }

    /// Whether this game runs in god mode.
    #[must_use]
    pub fn god_mode(&self) -> bool {
        self.god_mode
    }

    // === Card store ===

    /// Look up a card by id.
    #[must_use]
    pub fn card(&self, id: CardId) -> Option<&Card> {
        self.cards.get(&id)
    }

    /// Look up a card mutably (upgrades go through here).
    pub fn card_mut(&mut self, id: CardId) -> Option<&mut Card> {
        self.cards.get_mut(&id)
    }

    /// Register a card instance, assigning it a fresh id.
    ///
    /// The card joins the store only; pushing its id onto a pile is the
    /// caller's move.
    pub fn register_card(&mut self, mut card: Card) -> CardId {
        let id = CardId(self.next_card_id);
        self.next_card_id += 1;
        card.id = id;
        self.cards.insert(id, card);
        id
    }

    /// Drop a card from the store (once no pile references it).
    pub fn forget_card(&mut self, id: CardId) {
        self.cards.remove(&id);
    }

    /// Whether any pile (or the deck) still references this id.
    #[must_use]
    pub fn is_card_referenced(&self, id: CardId) -> bool {
        self.deck.contains(&id)
            || self.draw_pile.contains(&id)
            || self.hand.contains(&id)
            || self.discard_pile.contains(&id)
    }

    /// The cards currently in hand, in hand order.
    pub fn hand_cards(&self) -> impl Iterator<Item = &Card> {
        self.hand.iter().filter_map(|id| self.cards.get(id))
    }

    // === Dungeon accessors ===

    /// The dungeon, or a structural error if it was never set.
    pub fn dungeon(&self) -> Result<&DungeonState, Error> {
        self.dungeon.as_ref().ok_or(Error::MissingDungeon)
    }

    pub fn dungeon_mut(&mut self) -> Result<&mut DungeonState, Error> {
        self.dungeon.as_mut().ok_or(Error::MissingDungeon)
    }

    /// The room at the current map position.
    pub fn current_room(&self) -> Result<&Room, Error> {
        self.dungeon()?
            .current_node()
            .and_then(|node| node.room.as_ref())
            .ok_or(Error::MissingRoom)
    }

    pub fn current_room_mut(&mut self) -> Result<&mut Room, Error> {
        self.dungeon_mut()?
            .current_node_mut()
            .and_then(|node| node.room.as_mut())
            .ok_or(Error::MissingRoom)
    }

    /// Find a monster in the current room by identity.
    #[must_use]
    pub fn monster_by_id(&self, id: MonsterId) -> Option<&Monster> {
        self.current_room()
            .ok()?
            .monsters()?
            .iter()
            .find(|monster| monster.id == id)
    }

    /// Whether the room at the current position is completed.
    ///
    /// False when there is no dungeon or no room to complete.
    #[must_use]
    pub fn is_current_room_completed(&self) -> bool {
        self.current_room().map(Room::is_completed).unwrap_or(false)
    }

    /// Whether every floor of the dungeon has a completed room.
    #[must_use]
    pub fn is_dungeon_completed(&self) -> bool {
        self.dungeon
            .as_ref()
            .is_some_and(DungeonState::is_completed)
    }
}
