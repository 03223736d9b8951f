//! The game facade.
//!
//! [`Game`] is the one stateful object collaborators talk to. It owns the
//! single live [`GameState`] reference and one [`ActionManager`]; everything
//! else reads snapshots. Rendering layers may read `state()` freely between
//! dequeues; the snapshot is a value and never mutated under them.

use std::collections::VecDeque;
use std::sync::Arc;

use tokio::sync::Notify;
use tracing::warn;

use crate::action::{Action, AppliedAction};
use crate::core::{GameConfig, GameState};
use crate::dungeon::DungeonState;
use crate::error::Error;
use crate::queue::ActionManager;
use crate::reducers;

/// A running game session.
pub struct Game {
    state: GameState,
    manager: ActionManager,
}

impl Game {
    /// Start a new game: base state, a generated dungeon, the starter deck
    /// and an opening hand, in that order.
    ///
    /// Construction is fail-fast: any error aborts the whole game, no
    /// partial session is returned.
    pub fn new(config: GameConfig) -> Result<Self, Error> {
        Self::build(config, None)
    }

    /// Start a new game on a specific dungeon instead of a generated one.
    pub fn with_dungeon(config: GameConfig, dungeon: DungeonState) -> Result<Self, Error> {
        Self::build(config, Some(dungeon))
    }

    fn build(config: GameConfig, dungeon: Option<DungeonState>) -> Result<Self, Error> {
        let state = reducers::create_new_game(&config);
        let state = reducers::set_dungeon(&state, dungeon)?;
        let state = reducers::add_starter_deck(&state);
        let state = reducers::draw_cards(&state, reducers::DEFAULT_DRAW_AMOUNT);
        Ok(Self {
            state,
            manager: ActionManager::new(),
        })
    }

    /// The current snapshot.
    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Queue an action for later application.
    pub fn enqueue(&mut self, action: Action) {
        self.manager.enqueue(action);
    }

    /// Apply the next pending action, if any.
    ///
    /// Returns `true` when the state advanced. A failing reducer is logged
    /// and its action discarded (skip and continue), so one bad action can
    /// never wedge the session. This is the single boundary where reducer
    /// errors are caught.
    pub fn dequeue(&mut self) -> bool {
        match self.manager.dequeue(&self.state) {
            Ok(Some(next)) => {
                self.state = next;
                true
            }
            Ok(None) => false,
            Err(err) => {
                warn!(error = %err, kind = ?err.kind(), "action failed; discarding");
                false
            }
        }
    }

    /// Undo the most recent applied action, restoring its prior snapshot.
    ///
    /// Returns the undone action, or `None` when nothing has been applied.
    /// The pending queue is unaffected.
    pub fn undo(&mut self) -> Option<Action> {
        let entry = self.manager.undo()?;
        self.state = entry.state;
        Some(entry.action)
    }

    /// The applied log, oldest first, for history rendering.
    #[must_use]
    pub fn past(&self) -> &[AppliedAction] {
        self.manager.past()
    }

    /// The pending queue, oldest first.
    #[must_use]
    pub fn future(&self) -> &VecDeque<Action> {
        self.manager.future()
    }

    /// Wakeup signal handle; `enqueue` fires it once per registration.
    #[must_use]
    pub fn signal(&self) -> Arc<Notify> {
        self.manager.signal()
    }
}
