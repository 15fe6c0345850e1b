//! First-class invariants for the engine.
//!
//! Invariants are logical properties that must hold after every accepted
//! move. The engine checks them in debug builds; tests check them directly.

use crate::rules;
use crate::{Game, Player};

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants checked together.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set, collecting every violation.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

impl<S, I1, I2> InvariantSet<S> for (I1, I2)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let violations: Vec<_> = [
            (I1::holds(state), I1::description()),
            (I2::holds(state), I2::description()),
        ]
        .into_iter()
        .filter(|(holds, _)| !holds)
        .map(|(_, description)| InvariantViolation::new(description))
        .collect();

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

/// Invariant: the move count matches the board.
///
/// The count equals the number of occupied squares, and the engine reports
/// a full board exactly when every square is occupied.
pub struct MoveCountInvariant;

impl Invariant<Game> for MoveCountInvariant {
    fn holds(game: &Game) -> bool {
        game.move_count() == game.board().occupied()
            && game.is_board_full() == rules::is_full(game.board())
    }

    fn description() -> &'static str {
        "Move count equals the number of occupied squares"
    }
}

/// Invariant: players alternate, X first, and a winner keeps the turn.
pub struct TurnInvariant;

impl Invariant<Game> for TurnInvariant {
    fn holds(game: &Game) -> bool {
        let last_mover = if game.move_count() % 2 == 1 {
            Player::X
        } else {
            Player::O
        };

        match game.winner() {
            Some(winner) => winner == last_mover && game.current_player() == winner,
            None => game.current_player() == last_mover.opponent(),
        }
    }

    fn description() -> &'static str {
        "Players alternate turns (X, O, X, ...) and the winner stays current"
    }
}
