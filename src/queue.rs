//! The action manager: future and past logs with undo.
//!
//! Two ordered logs drive the whole session. The pending queue ("future")
//! holds un-applied actions in FIFO order; the applied log ("past") records
//! each dequeued action alongside the snapshot it was applied to, giving a
//! linear undo stack.
//!
//! ## Wakeup signal
//!
//! A consumer waiting for work registers once on the wakeup signal
//! ([`tokio::sync::Notify`]); the next enqueue fires it exactly once and the
//! consumer must re-register to wait again. `notify_one` stores a permit
//! when nobody is waiting, so the check-register-recheck pattern cannot miss
//! a wakeup. Dequeueing stays single-writer: only one logical thread of
//! control may apply actions.

use std::collections::VecDeque;
use std::sync::Arc;

use tokio::sync::Notify;

use crate::action::{dispatch, Action, AppliedAction};
use crate::core::GameState;
use crate::error::Error;

/// Owns the pending queue and the applied log.
#[derive(Clone, Debug, Default)]
pub struct ActionManager {
    future: VecDeque<Action>,
    past: Vec<AppliedAction>,
    signal: Arc<Notify>,
}

impl ActionManager {
    /// A manager with both logs empty.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an action to the tail of the pending queue and fire the
    /// wakeup signal.
    pub fn enqueue(&mut self, action: Action) {
        self.future.push_back(action);
        self.signal.notify_one();
    }

    /// Pop the head action and apply its reducer to `state`.
    ///
    /// Returns `Ok(None)` when the queue is empty; the caller must not
    /// advance. On success the `{action, prior snapshot}` pair is pushed
    /// onto the applied log and the new state returned. On reducer failure
    /// the error propagates, the action stays consumed (best effort, no
    /// requeue) and no log entry is written, so the state visibly does not
    /// advance.
    pub fn dequeue(&mut self, state: &GameState) -> Result<Option<GameState>, Error> {
        let Some(action) = self.future.pop_front() else {
            return Ok(None);
        };
        let next = dispatch(state, &action)?;
        self.past.push(AppliedAction {
            action,
            state: state.clone(),
        });
        Ok(Some(next))
    }

    /// Pop the most recent applied entry, yielding the snapshot recorded
    /// before its action ran. The pending queue is unaffected.
    pub fn undo(&mut self) -> Option<AppliedAction> {
        self.past.pop()
    }

    /// The pending queue, oldest first.
    #[must_use]
    pub fn future(&self) -> &VecDeque<Action> {
        &self.future
    }

    /// The applied log, oldest first.
    #[must_use]
    pub fn past(&self) -> &[AppliedAction] {
        &self.past
    }

    /// Handle to the wakeup signal for consumers awaiting new work.
    #[must_use]
    pub fn signal(&self) -> Arc<Notify> {
        Arc::clone(&self.signal)
    }
}
