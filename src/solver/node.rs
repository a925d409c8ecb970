use crate::data::Dir;
use crate::moves::Moves;
use crate::state::State;

/// Lives in the search arena, the path back to the start is followed through `prev`.
#[derive(Debug)]
pub(crate) struct SearchNode<'a> {
    pub(crate) state: State,
    pub(crate) prev: Option<&'a SearchNode<'a>>,
    pub(crate) dir: Option<Dir>,
    pub(crate) dist: u32,
    pub(crate) h: u32,
}

impl<'a> SearchNode<'a> {
    pub(crate) fn new(state: State, prev: Option<&'a SearchNode<'a>>, dir: Option<Dir>, dist: u32, h: u32) -> Self {
        Self {
            state,
            prev,
            dir,
            dist,
            h,
        }
    }

    /// g + h
    pub(crate) fn cost(&self) -> u32 {
        self.dist + self.h
    }

    pub(crate) fn backtrack_moves(&self) -> Moves {
        let mut moves = Moves::default();
        let mut node = self;
        while let (Some(prev), Some(dir)) = (node.prev, node.dir) {
            moves.add(dir);
            node = prev;
        }
        moves.reverse();
        moves
    }

    /// States from the start to this one, both included.
    pub(crate) fn backtrack_states(&self) -> Vec<State> {
        let mut states = vec![self.state];
        let mut node = self;
        while let Some(prev) = node.prev {
            states.push(prev.state);
            node = prev;
        }
        states.reverse();
        states
    }
}
