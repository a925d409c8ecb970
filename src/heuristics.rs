//! Estimates of the number of moves left to reach the goal.
//!
//! Misplaced tiles and Manhattan distance ignore the blank and never overestimate.
//! The row/column mismatch also scores the blank which makes it overestimate
//! near the goal - it's kept that way to show what an inadmissible heuristic does to search.

use crate::data::{Pos, CELLS};
use crate::state::State;

pub fn misplaced_tiles(goal: &State, state: &State) -> u32 {
    let mut misplaced = 0;
    for (&v, &goal_v) in state.cells().iter().zip(goal.cells()) {
        if v != 0 && v != goal_v {
            misplaced += 1;
        }
    }
    misplaced
}

pub fn manhattan(goal: &State, state: &State) -> u32 {
    let mut dist_sum = 0;
    for (pos, v) in misplaced(goal, state) {
        if v == 0 {
            continue;
        }
        if let Some(goal_pos) = goal.locate(v) {
            dist_sum += pos.dist(goal_pos);
        }
    }
    dist_sum
}

pub fn row_col_mismatch(goal: &State, state: &State) -> u32 {
    let mut mismatches = 0;
    for (pos, v) in misplaced(goal, state) {
        if let Some(goal_pos) = goal.locate(v) {
            if pos.r != goal_pos.r {
                mismatches += 1;
            }
            if pos.c != goal_pos.c {
                mismatches += 1;
            }
        }
    }
    mismatches
}

/// Cells (blank included) whose value differs from the goal.
fn misplaced<'a>(goal: &'a State, state: &'a State) -> impl Iterator<Item = (Pos, u8)> + 'a {
    (0..CELLS)
        .filter(move |&i| state.cells()[i] != goal.cells()[i])
        .map(move |i| (Pos::from_index(i), state.cells()[i]))
}
