use std::fmt::{self, Debug, Display, Formatter};

use crate::moves::Moves;
use crate::state::State;

/// Replays the moves and prints every intermediate board.
#[derive(Clone, Copy)]
pub struct SolutionFormatter<'a> {
    initial_state: &'a State,
    moves: &'a Moves,
}

impl<'a> SolutionFormatter<'a> {
    pub(crate) fn new(initial_state: &'a State, moves: &'a Moves) -> Self {
        Self { initial_state, moves }
    }
}

impl Display for SolutionFormatter<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let mut last_state = *self.initial_state;
        for (step, &dir) in self.moves.iter().enumerate() {
            writeln!(f, "Step {}: Move {}", step + 1, dir)?;
            match last_state.apply(dir) {
                Some(new_state) => {
                    writeln!(f, "{}", new_state)?;
                    last_state = new_state;
                }
                None => {
                    // moves from a different puzzle
                    writeln!(f, "Can't move {} from this state", dir)?;
                    return Ok(());
                }
            }
        }
        Ok(())
    }
}

impl Debug for SolutionFormatter<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}
