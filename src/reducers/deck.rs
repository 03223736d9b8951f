//! Pile logistics: the starter deck, drawing, discarding, removal, upgrades.

use crate::content::cards;
use crate::core::{CardId, GameState};
use crate::error::Error;

/// Cards drawn at the start of every turn.
pub const DEFAULT_DRAW_AMOUNT: usize = 5;

/// Populate the deck with the fixed starting collection and shuffle a copy
/// of it into the draw pile.
#[must_use]
pub fn add_starter_deck(state: &GameState) -> GameState {
    let mut next = state.clone();
    next.deck.clear();

    for card in cards::starter_deck() {
        let id = next.register_card(card);
        next.deck.push_back(id);
    }

    let mut ids: Vec<CardId> = next.deck.iter().copied().collect();
    next.rng.shuffle(&mut ids);
    next.draw_pile = ids.into_iter().collect();
    next
}

/// Move up to `amount` cards from the draw pile to the hand, preserving
/// draw order.
///
/// When the draw pile runs short, the discard pile is recycled into it
/// (concatenated, then the whole pile reshuffled) before drawing. If the
/// combined pool is still short, draws whatever is available; running out
/// of cards is an accepted edge, not an error.
#[must_use]
pub fn draw_cards(state: &GameState, amount: usize) -> GameState {
    let mut next = state.clone();

    if next.draw_pile.len() < amount {
        let mut pool: Vec<CardId> = next
            .draw_pile
            .iter()
            .chain(next.discard_pile.iter())
            .copied()
            .collect();
        next.rng.shuffle(&mut pool);
        next.draw_pile = pool.into_iter().collect();
        next.discard_pile.clear();
    }

    for _ in 0..amount {
        match next.draw_pile.pop_front() {
            Some(id) => next.hand.push_back(id),
            None => break,
        }
    }
    next
}

/// Move one card from the hand to the discard pile, by identity.
///
/// A card that is not in the hand is left alone.
#[must_use]
pub fn discard_card(state: &GameState, card: CardId) -> GameState {
    let mut next = state.clone();
    if let Some(index) = next.hand.index_of(&card) {
        next.hand.remove(index);
        next.discard_pile.push_back(card);
    }
    next
}

/// Move the entire hand to the discard pile, preserving hand order.
#[must_use]
pub fn discard_hand(state: &GameState) -> GameState {
    let mut next = state.clone();
    for id in next.hand.iter() {
        next.discard_pile.push_back(*id);
    }
    next.hand.clear();
    next
}

/// Delete a card from the deck permanently, by identity.
///
/// Removal is forward-only: a copy already sitting in the draw pile, hand or
/// discard pile stays playable for the rest of the run; it just never comes
/// back once the deck is next reshuffled into a fresh draw pile.
#[must_use]
pub fn remove_card(state: &GameState, card: CardId) -> GameState {
    let mut next = state.clone();
    if let Some(index) = next.deck.index_of(&card) {
        next.deck.remove(index);
    }
    if !next.is_card_referenced(card) {
        next.forget_card(card);
    }
    next
}

/// Upgrade the identity-matching card in the deck.
///
/// The card store is shared, so the upgraded numbers show wherever that id
/// appears next, including a copy already drawn into the hand.
pub fn upgrade_card(state: &GameState, card: CardId) -> Result<GameState, Error> {
    if !state.deck.contains(&card) {
        return Err(Error::CardNotInDeck(card));
    }
    let mut next = state.clone();
    next.card_mut(card)
        .ok_or(Error::CardNotInDeck(card))?
        .upgrade();
    Ok(next)
}

/// Reset the shuffle: empty hand and discard, draw pile rebuilt from the
/// whole deck, then a fresh hand drawn.
#[must_use]
pub fn reshuffle_and_draw(state: &GameState) -> GameState {
    let mut next = state.clone();
    next.hand.clear();
    next.discard_pile.clear();

    let mut ids: Vec<CardId> = next.deck.iter().copied().collect();
    next.rng.shuffle(&mut ids);
    next.draw_pile = ids.into_iter().collect();

    draw_cards(&next, DEFAULT_DRAW_AMOUNT)
}
