use std::error::Error;
use std::fmt::{self, Debug, Display, Formatter};

use crate::data::{Dir, Pos, CELLS, DIRECTIONS, GOAL_CELLS, SIZE};
use crate::moves::Moves;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StateErr {
    Shape { rows: usize, cols: usize },
    OutOfRange(u8),
    Duplicate(u8),
}

impl Display for StateErr {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            StateErr::Shape { rows, cols } => write!(
                f,
                "Expected {0}x{0} grid, got {1} rows with a row of {2} cells",
                SIZE, rows, cols
            ),
            StateErr::OutOfRange(v) => write!(f, "Value {} is not a tile (0 to {})", v, CELLS - 1),
            StateErr::Duplicate(v) => write!(f, "Value {} appears more than once", v),
        }
    }
}

impl Error for StateErr {}

/// One arrangement of the tiles, 0 is the blank.
///
/// The cells are stored row by row which doubles as the canonical form
/// used for hashing and equality.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct State {
    cells: [u8; CELLS],
    blank: Pos,
}

impl State {
    pub fn new(cells: [u8; CELLS]) -> Result<State, StateErr> {
        let mut seen = [false; CELLS];
        for &v in &cells {
            let i = usize::from(v);
            if i >= CELLS {
                return Err(StateErr::OutOfRange(v));
            }
            if seen[i] {
                return Err(StateErr::Duplicate(v));
            }
            seen[i] = true;
        }
        // all 9 values distinct and in range so 0 is somewhere
        let blank = cells.iter().position(|&v| v == 0).unwrap_or_default();
        Ok(State {
            cells,
            blank: Pos::from_index(blank),
        })
    }

    pub fn from_rows<R: AsRef<[u8]>>(rows: &[R]) -> Result<State, StateErr> {
        let bad_row = rows.iter().map(|row| row.as_ref().len()).find(|&len| len != SIZE);
        if rows.len() != SIZE || bad_row.is_some() {
            return Err(StateErr::Shape {
                rows: rows.len(),
                cols: bad_row.unwrap_or(SIZE),
            });
        }

        let mut cells = [0; CELLS];
        for (r, row) in rows.iter().enumerate() {
            cells[r * SIZE..(r + 1) * SIZE].copy_from_slice(row.as_ref());
        }
        State::new(cells)
    }

    pub fn goal() -> State {
        State {
            cells: GOAL_CELLS,
            blank: Pos::new(0, 0),
        }
    }

    pub fn cells(&self) -> &[u8; CELLS] {
        &self.cells
    }

    pub fn get(&self, pos: Pos) -> u8 {
        self.cells[pos.index()]
    }

    pub fn blank(&self) -> Pos {
        self.blank
    }

    pub fn locate(&self, value: u8) -> Option<Pos> {
        self.cells
            .iter()
            .position(|&v| v == value)
            .map(Pos::from_index)
    }

    /// Slides the blank one cell, `None` if it would leave the board.
    pub fn apply(&self, dir: Dir) -> Option<State> {
        let dest = self.blank.step(dir)?;
        let mut cells = self.cells;
        cells.swap(self.blank.index(), dest.index());
        Some(State { cells, blank: dest })
    }

    pub fn successors(&self) -> Vec<(State, Dir)> {
        DIRECTIONS
            .iter()
            .filter_map(|&dir| self.apply(dir).map(|state| (state, dir)))
            .collect()
    }

    pub fn replay(&self, moves: &Moves) -> Option<State> {
        let mut state = *self;
        for &dir in moves {
            state = state.apply(dir)?;
        }
        Some(state)
    }

    /// Sliding the blank never changes the parity of tile inversions
    /// so states with different parity can't reach each other.
    pub fn is_solvable_towards(&self, goal: &State) -> bool {
        self.inversions() % 2 == goal.inversions() % 2
    }

    fn inversions(&self) -> usize {
        let tiles: Vec<u8> = self.cells.iter().cloned().filter(|&v| v != 0).collect();
        let mut cnt = 0;
        for (i, a) in tiles.iter().enumerate() {
            cnt += tiles[i + 1..].iter().filter(|&b| b < a).count();
        }
        cnt
    }
}

impl Display for State {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for row in self.cells.chunks(SIZE) {
            let row: Vec<_> = row.iter().map(|v| v.to_string()).collect();
            writeln!(f, "{}", row.join(" "))?;
        }
        Ok(())
    }
}

impl Debug for State {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for (i, row) in self.cells.chunks(SIZE).enumerate() {
            if i > 0 {
                write!(f, "/")?;
            }
            for v in row {
                write!(f, "{}", v)?;
            }
        }
        Ok(())
    }
}
