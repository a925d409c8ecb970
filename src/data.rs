use std::fmt::{self, Display, Formatter};

/// Rows and columns of the board.
pub const SIZE: usize = 3;
pub const CELLS: usize = SIZE * SIZE;

pub(crate) const GOAL_CELLS: [u8; CELLS] = [0, 1, 2, 3, 4, 5, 6, 7, 8];

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Pos {
    pub r: u8,
    pub c: u8,
}

impl Pos {
    pub fn new(r: u8, c: u8) -> Pos {
        Pos { r, c }
    }

    pub(crate) fn from_index(index: usize) -> Pos {
        Pos::new((index / SIZE) as u8, (index % SIZE) as u8)
    }

    pub(crate) fn index(self) -> usize {
        usize::from(self.r) * SIZE + usize::from(self.c)
    }

    pub fn dist(self, other: Pos) -> u32 {
        let dr = (i32::from(self.r) - i32::from(other.r)).abs();
        let dc = (i32::from(self.c) - i32::from(other.c)).abs();
        (dr + dc) as u32
    }

    /// The neighboring cell in `dir` or `None` if it's off the board.
    pub fn step(self, dir: Dir) -> Option<Pos> {
        let (dr, dc) = dir.offset();
        let r = i32::from(self.r) + dr;
        let c = i32::from(self.c) + dc;
        if r < 0 || c < 0 || r >= SIZE as i32 || c >= SIZE as i32 {
            None
        } else {
            Some(Pos::new(r as u8, c as u8))
        }
    }
}

/// Direction the blank moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dir {
    Up,
    Down,
    Left,
    Right,
}

// the order successors are generated in
pub const DIRECTIONS: [Dir; 4] = [Dir::Up, Dir::Down, Dir::Left, Dir::Right];

impl Dir {
    fn offset(self) -> (i32, i32) {
        match self {
            Dir::Up => (-1, 0),
            Dir::Down => (1, 0),
            Dir::Left => (0, -1),
            Dir::Right => (0, 1),
        }
    }

    pub fn to_char(self) -> char {
        match self {
            Dir::Up => 'u',
            Dir::Down => 'd',
            Dir::Left => 'l',
            Dir::Right => 'r',
        }
    }
}

impl Display for Dir {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            Dir::Up => write!(f, "up"),
            Dir::Down => write!(f, "down"),
            Dir::Left => write!(f, "left"),
            Dir::Right => write!(f, "right"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stepping_off_the_board() {
        let corner = Pos::new(0, 0);
        assert_eq!(corner.step(Dir::Up), None);
        assert_eq!(corner.step(Dir::Left), None);
        assert_eq!(corner.step(Dir::Down), Some(Pos::new(1, 0)));
        assert_eq!(corner.step(Dir::Right), Some(Pos::new(0, 1)));

        let corner = Pos::new(2, 2);
        assert_eq!(corner.step(Dir::Down), None);
        assert_eq!(corner.step(Dir::Right), None);
    }

    #[test]
    fn indexing() {
        for i in 0..CELLS {
            assert_eq!(Pos::from_index(i).index(), i);
        }
        assert_eq!(Pos::from_index(5), Pos::new(1, 2));
        assert_eq!(Pos::new(0, 0).dist(Pos::new(2, 1)), 3);
    }

    #[test]
    fn formatting_dirs() {
        let names: Vec<_> = DIRECTIONS.iter().map(|d| d.to_string()).collect();
        assert_eq!(names, ["up", "down", "left", "right"]);
        let chars: String = DIRECTIONS.iter().map(|d| d.to_char()).collect();
        assert_eq!(chars, "udlr");
    }
}
