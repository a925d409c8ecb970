use std::error::Error;
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use crate::heuristics;
use crate::state::State;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigErr {
    kind: &'static str,
    name: String,
}

impl Display for ConfigErr {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Unknown {}: {}", self.kind, self.name)
    }
}

impl Error for ConfigErr {}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Heuristic {
    MisplacedTiles,
    Manhattan,
    RowCol,
}

impl Heuristic {
    pub const ALL: [Heuristic; 3] = [Heuristic::MisplacedTiles, Heuristic::Manhattan, Heuristic::RowCol];
    pub const NAMES: [&'static str; 3] = ["misplaced", "manhattan", "row-col"];

    pub fn estimate(self, goal: &State, state: &State) -> u32 {
        match self {
            Heuristic::MisplacedTiles => heuristics::misplaced_tiles(goal, state),
            Heuristic::Manhattan => heuristics::manhattan(goal, state),
            Heuristic::RowCol => heuristics::row_col_mismatch(goal, state),
        }
    }

    /// Whether it never overestimates the remaining number of moves.
    pub fn is_admissible(self) -> bool {
        match self {
            Heuristic::MisplacedTiles | Heuristic::Manhattan => true,
            Heuristic::RowCol => false,
        }
    }
}

impl Display for Heuristic {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            Heuristic::MisplacedTiles => write!(f, "misplaced"),
            Heuristic::Manhattan => write!(f, "manhattan"),
            Heuristic::RowCol => write!(f, "row-col"),
        }
    }
}

impl FromStr for Heuristic {
    type Err = ConfigErr;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Heuristic::ALL
            .iter()
            .cloned()
            .find(|h| h.to_string() == s)
            .ok_or_else(|| ConfigErr {
                kind: "heuristic",
                name: s.to_owned(),
            })
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Method {
    /// FIFO frontier - breadth first which is uniform cost since every move costs 1
    Uninformed,
    /// ordered by h
    Greedy(Heuristic),
    /// ordered by g + h
    AStar(Heuristic),
}

impl Method {
    pub const NAMES: [&'static str; 3] = ["uninformed", "greedy", "a-star"];

    /// Parses the method name, the heuristic is ignored for uninformed search.
    pub fn from_names(method: &str, heuristic: Heuristic) -> Result<Method, ConfigErr> {
        match method {
            "uninformed" => Ok(Method::Uninformed),
            "greedy" => Ok(Method::Greedy(heuristic)),
            "a-star" => Ok(Method::AStar(heuristic)),
            _ => Err(ConfigErr {
                kind: "method",
                name: method.to_owned(),
            }),
        }
    }

    /// Every method with every heuristic.
    pub fn all() -> Vec<Method> {
        let mut methods = vec![Method::Uninformed];
        methods.extend(Heuristic::ALL.iter().map(|&h| Method::Greedy(h)));
        methods.extend(Heuristic::ALL.iter().map(|&h| Method::AStar(h)));
        methods
    }

    pub fn heuristic(self) -> Option<Heuristic> {
        match self {
            Method::Uninformed => None,
            Method::Greedy(h) | Method::AStar(h) => Some(h),
        }
    }

    /// Whether the found solution is guaranteed to have the fewest moves.
    pub fn is_optimal(self) -> bool {
        match self {
            Method::Uninformed => true,
            Method::Greedy(_) => false,
            Method::AStar(h) => h.is_admissible(),
        }
    }
}

impl Display for Method {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            Method::Uninformed => write!(f, "uninformed"),
            Method::Greedy(h) => write!(f, "greedy-{}", h),
            Method::AStar(h) => write!(f, "a-star-{}", h),
        }
    }
}
