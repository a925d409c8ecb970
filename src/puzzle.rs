use std::fmt::{self, Display, Formatter};

use crate::moves::Moves;
use crate::solution_formatter::SolutionFormatter;
use crate::state::State;

/// A start state and the goal it should reach.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Puzzle {
    pub initial: State,
    pub goal: State,
}

impl Puzzle {
    pub fn new(initial: State) -> Self {
        Self::with_goal(initial, State::goal())
    }

    pub fn with_goal(initial: State, goal: State) -> Self {
        Puzzle { initial, goal }
    }

    pub fn is_goal(&self, state: &State) -> bool {
        *state == self.goal
    }

    pub fn is_solvable(&self) -> bool {
        self.initial.is_solvable_towards(&self.goal)
    }

    pub fn solution<'a>(&'a self, moves: &'a Moves) -> SolutionFormatter<'a> {
        SolutionFormatter::new(&self.initial, moves)
    }
}

impl Display for Puzzle {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.initial)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn injected_goal() {
        let start = State::new([1, 0, 2, 3, 4, 5, 6, 7, 8]).unwrap();
        let puzzle = Puzzle::new(start);
        assert!(puzzle.is_goal(&State::goal()));
        assert!(!puzzle.is_goal(&start));

        let other = Puzzle::with_goal(State::goal(), start);
        assert!(other.is_goal(&start));
        assert!(!other.is_goal(&State::goal()));
        assert!(other.is_solvable());

        assert_eq!(puzzle.to_string(), "1 0 2\n3 4 5\n6 7 8\n");
    }

    #[test]
    fn puzzles_are_copied() {
        let goal = State::new([1, 0, 2, 3, 4, 5, 6, 7, 8]).unwrap();
        let puzzle = Puzzle::with_goal(State::goal(), goal);
        let copy = puzzle;
        assert_eq!(copy, puzzle);
        assert_eq!(copy.goal, puzzle.goal);
    }
}
