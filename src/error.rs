//! The reducer error surface.
//!
//! Every fallible reducer returns `Result<_, Error>`. Errors are loud, typed,
//! and never swallowed inside the reducer library; the facade's `dequeue` is
//! the single catch point. Each variant classifies into an [`ErrorKind`] via
//! [`Error::kind`] per the spec's taxonomy (§8).

use thiserror::Error as ThisError;

use crate::core::CardId;
use crate::dungeon::GridPos;

/// Coarse classification of a reducer error.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Malformed or ambiguous action input.
    Validation,
    /// A precondition on resources or indices was not met.
    Precondition,
    /// Required state was missing or structurally invalid.
    Structural,
}

/// The closed reducer error taxonomy.
#[derive(Clone, Debug, PartialEq, Eq, ThisError)]
pub enum Error {
    // --- Validation ---
    /// A bare `"enemy"` target that does not name a concrete monster.
    #[error("ambiguous target: specify a concrete enemy")]
    AmbiguousTarget,

    /// A target string that does not match the target grammar.
    #[error("unknown target: {0}")]
    UnknownTarget(String),

    /// The referenced card is not in hand.
    #[error("card {0:?} is not in hand")]
    MissingCard(CardId),

    /// A card reward was obtained without choosing which card.
    #[error("a card choice is required for this reward")]
    MissingCardChoice,

    // --- Precondition ---
    /// Not enough energy to play the card.
    #[error("insufficient energy: need {required}, have {available}")]
    InsufficientEnergy { required: u32, available: u32 },

    /// The card's play condition was not satisfied.
    #[error("condition not met for card {0:?}")]
    ConditionNotMet(CardId),

    /// The reward index is out of bounds for the current room.
    #[error("reward index {index} out of bounds ({available} available)")]
    RewardOutOfBounds { index: usize, available: usize },

    /// The reward at the given index was already obtained.
    #[error("reward {0} already obtained")]
    RewardAlreadyObtained(usize),

    /// The card-choice index is out of bounds for the reward.
    #[error("card choice {index} out of bounds ({available} available)")]
    CardChoiceOutOfBounds { index: usize, available: usize },

    /// The card is not present in the deck.
    #[error("card {0:?} is not in the deck")]
    CardNotInDeck(CardId),

    /// No monster exists at the given index.
    #[error("no monster at index {0}")]
    NoSuchMonster(usize),

    /// The current node is not a campfire.
    #[error("current node is not a campfire")]
    NotACampfire,

    // --- Structural ---
    /// No dungeon has been set on the state.
    #[error("no dungeon set")]
    MissingDungeon,

    /// The current node has no room.
    #[error("current node has no room")]
    MissingRoom,

    /// No node exists at the given grid position.
    #[error("no node at {0:?}")]
    MissingNode(GridPos),

    /// Map generation produced an empty dungeon.
    #[error("dungeon is empty")]
    EmptyDungeon,
}

impl Error {
    /// Classify this error into its coarse [`ErrorKind`].
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::AmbiguousTarget
            | Error::UnknownTarget(_)
            | Error::MissingCard(_)
            | Error::MissingCardChoice => ErrorKind::Validation,

            Error::InsufficientEnergy { .. }
            | Error::ConditionNotMet(_)
            | Error::RewardOutOfBounds { .. }
            | Error::RewardAlreadyObtained(_)
            | Error::CardChoiceOutOfBounds { .. }
            | Error::CardNotInDeck(_)
            | Error::NoSuchMonster(_)
            | Error::NotACampfire => ErrorKind::Precondition,

            Error::MissingDungeon
            | Error::MissingRoom
            | Error::MissingNode(_)
            | Error::EmptyDungeon => ErrorKind::Structural,
        }
    }
}
