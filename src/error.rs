//! Error types for game actions.

use std::fmt;

use crate::game::ActorId;

/// Failures raised while performing a game action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionError {
    /// The action had no effect this turn.
    ///
    /// This is the designated non-fatal failure: enemy-turn processing
    /// swallows it (the actor forfeits its turn) and player input surfaces
    /// it as a message instead of consuming the turn. The payload is the
    /// player-facing reason.
    Impossible(String),
    /// An actor id referenced a slot that does not exist.
    ///
    /// Unlike [`ActionError::Impossible`], this indicates corrupted game
    /// state and always propagates.
    MissingActor(ActorId),
}

impl ActionError {
    /// Shorthand for constructing an [`ActionError::Impossible`].
    #[must_use]
    pub fn impossible(reason: impl Into<String>) -> Self {
        Self::Impossible(reason.into())
    }
}

impl fmt::Display for ActionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ActionError::Impossible(reason) => write!(f, "{reason}"),
            ActionError::MissingActor(id) => write!(f, "no actor in slot {id}"),
        }
    }
}

impl std::error::Error for ActionError {}

/// Result type for game actions.
pub type ActionResult = Result<(), ActionError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_impossible_display_is_the_reason() {
        let err = ActionError::impossible("That way is blocked.");
        assert_eq!(err.to_string(), "That way is blocked.");
    }

    #[test]
    fn test_missing_actor_display() {
        let err = ActionError::MissingActor(7);
        assert!(err.to_string().contains('7'));
    }
}
