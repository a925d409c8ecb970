mod frontier;
mod node;
mod stats;

use std::fmt::{self, Debug, Formatter};

use fnv::FnvHashSet;
use log::{debug, info};
use typed_arena::Arena;

use crate::config::Method;
use crate::moves::Moves;
use crate::puzzle::Puzzle;
use crate::state::State;
use crate::Solve;

use self::frontier::{Fifo, Frontier, Priority, PriorityFrontier};
use self::node::SearchNode;

pub use self::stats::Stats;

/// Result of one search run.
///
/// `moves` is `None` when the frontier ran out without reaching the goal,
/// a puzzle that starts solved gets `Some` with no moves.
pub struct SolverOk {
    pub moves: Option<Moves>,
    pub path_states: Option<Vec<State>>,
    pub stats: Stats,
    pub method: Method,
}

impl SolverOk {
    fn new(moves: Option<Moves>, path_states: Option<Vec<State>>, stats: Stats, method: Method) -> Self {
        Self {
            moves,
            path_states,
            stats,
            method,
        }
    }

    pub fn is_solved(&self) -> bool {
        self.moves.is_some()
    }

    pub fn move_cnt(&self) -> Option<usize> {
        self.moves.as_ref().map(Moves::move_cnt)
    }

    pub fn steps(&self) -> u64 {
        self.stats.steps()
    }
}

impl Debug for SolverOk {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self.moves {
            None => writeln!(f, "No solution")?,
            Some(ref moves) => writeln!(f, "{}: {} moves: {}", self.method, moves.move_cnt(), moves)?,
        }
        write!(f, "{:?}", self.stats)
    }
}

impl Solve for Puzzle {
    fn solve(&self, method: Method, print_status: bool) -> SolverOk {
        solve(self, method, print_status)
    }
}

fn solve(puzzle: &Puzzle, method: Method, print_status: bool) -> SolverOk {
    debug!("Solving {:?} using {}", puzzle.initial, method);

    let arena = Arena::new();
    let solver_ok = match method {
        Method::Uninformed => search(&arena, puzzle, method, print_status, Fifo::new(), |_, _| 0),
        Method::Greedy(h) => search(
            &arena,
            puzzle,
            method,
            print_status,
            PriorityFrontier::new(Priority::Heuristic),
            |goal, state| h.estimate(goal, state),
        ),
        Method::AStar(h) => search(
            &arena,
            puzzle,
            method,
            print_status,
            PriorityFrontier::new(Priority::Cost),
            |goal, state| h.estimate(goal, state),
        ),
    };

    info!(
        "{}: {} after {} steps",
        method,
        match solver_ok.move_cnt() {
            Some(cnt) => format!("{} moves", cnt),
            None => "no solution".to_owned(),
        },
        solver_ok.steps()
    );
    solver_ok
}

fn search<'a, F, Heuristic>(
    arena: &'a Arena<SearchNode<'a>>,
    puzzle: &Puzzle,
    method: Method,
    print_status: bool,
    mut frontier: F,
    heuristic: Heuristic,
) -> SolverOk
where
    F: Frontier<'a>,
    Heuristic: Fn(&State, &State) -> u32,
{
    let mut stats = Stats::new();
    let mut explored = FnvHashSet::default();

    let start: &SearchNode<'_> = arena.alloc(SearchNode::new(
        puzzle.initial,
        None,
        None,
        0,
        heuristic(&puzzle.goal, &puzzle.initial),
    ));
    stats.add_created(start);
    frontier.push(start);

    while let Some(cur_node) = frontier.pop() {
        if puzzle.is_goal(&cur_node.state) {
            debug!("Solved, backtracking path");
            return SolverOk::new(
                Some(cur_node.backtrack_moves()),
                Some(cur_node.backtrack_states()),
                stats,
                method,
            );
        }

        // the same state can be queued through several paths, only the first one popped counts
        if explored.contains(&cur_node.state) {
            stats.add_reached_duplicate(cur_node);
            continue;
        }
        explored.insert(cur_node.state);

        if stats.add_expanded(cur_node) && print_status {
            println!("Expanded new depth: {}", cur_node.dist);
            println!("Frontier size: {}", frontier.len());
            println!("{:?}", stats);
        }

        for (neighbor_state, dir) in cur_node.state.successors() {
            if explored.contains(&neighbor_state) {
                continue;
            }
            let h = heuristic(&puzzle.goal, &neighbor_state);
            let next_node: &SearchNode<'_> = arena.alloc(SearchNode::new(
                neighbor_state,
                Some(cur_node),
                Some(dir),
                cur_node.dist + 1,
                h,
            ));
            stats.add_created(next_node);
            frontier.push(next_node);
        }
    }

    debug!("Frontier exhausted, {} states explored", explored.len());
    SolverOk::new(None, None, stats, method)
}
