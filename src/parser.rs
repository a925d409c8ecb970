use std::error::Error;
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use crate::data::{CELLS, SIZE};
use crate::puzzle::Puzzle;
use crate::state::{State, StateErr};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParserErr {
    InvalidChar(char, usize, usize),
    RowCount(usize),
    RowLength(usize, usize),
    CellCount(usize),
    State(StateErr),
}

impl Display for ParserErr {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            ParserErr::InvalidChar(c, line, col) => {
                write!(f, "Invalid character '{}' at line {}, column {}", c, line, col)
            }
            ParserErr::RowCount(n) => write!(f, "Expected {} rows, got {}", SIZE, n),
            ParserErr::RowLength(r, n) => write!(f, "Row {} has {} cells instead of {}", r, n, SIZE),
            ParserErr::CellCount(n) => write!(f, "Expected {} cells, got {}", CELLS, n),
            ParserErr::State(ref err) => write!(f, "{}", err),
        }
    }
}

impl Error for ParserErr {}

impl From<StateErr> for ParserErr {
    fn from(err: StateErr) -> Self {
        ParserErr::State(err)
    }
}

impl FromStr for State {
    type Err = ParserErr;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse(s)
    }
}

impl FromStr for Puzzle {
    type Err = ParserErr;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Puzzle::new(parse(s)?))
    }
}

fn is_separator(c: char) -> bool {
    c.is_whitespace() || ",;/|[]".contains(c)
}

/// Accepts the 9 values on one line (`724506831`, `[[7,2,4],[5,0,6],[8,3,1]]`)
/// or as 3 lines of 3.
pub(crate) fn parse(text: &str) -> Result<State, ParserErr> {
    let mut rows = Vec::new();
    for (line_num, line) in text.lines().enumerate() {
        let mut row = Vec::new();
        for (col, c) in line.chars().enumerate() {
            if is_separator(c) {
                continue;
            }
            match c.to_digit(10) {
                Some(d) => row.push(d as u8),
                None => return Err(ParserErr::InvalidChar(c, line_num + 1, col + 1)),
            }
        }
        if !row.is_empty() {
            rows.push(row);
        }
    }

    let cells: Vec<u8> = if rows.len() == 1 {
        rows.pop().unwrap_or_default()
    } else {
        if rows.len() != SIZE {
            return Err(ParserErr::RowCount(rows.len()));
        }
        for (r, row) in rows.iter().enumerate() {
            if row.len() != SIZE {
                return Err(ParserErr::RowLength(r + 1, row.len()));
            }
        }
        rows.concat()
    };

    if cells.len() != CELLS {
        return Err(ParserErr::CellCount(cells.len()));
    }
    let mut array = [0; CELLS];
    array.copy_from_slice(&cells);
    Ok(State::new(array)?)
}
