use std::fmt::{self, Display, Formatter};

use prettytable::{format, Cell, Row, Table};
use separator::Separatable;

use crate::config::Method;
use crate::puzzle::Puzzle;
use crate::solver::SolverOk;
use crate::Solve;

/// Several methods run on the same puzzle.
#[derive(Debug)]
pub struct Comparison {
    pub results: Vec<SolverOk>,
}

pub fn compare(puzzle: &Puzzle, methods: &[Method]) -> Comparison {
    let results = methods.iter().map(|&method| puzzle.solve(method, false)).collect();
    Comparison { results }
}

impl Comparison {
    pub fn get(&self, method: Method) -> Option<&SolverOk> {
        self.results.iter().find(|result| result.method == method)
    }

    pub fn table(&self) -> Table {
        let mut table = Table::new();
        table.set_format(*format::consts::FORMAT_NO_BORDER_LINE_SEPARATOR);
        table.set_titles(Row::new(
            ["Method", "Optimal", "Moves", "Steps", "Created"]
                .iter()
                .map(|title| Cell::new(title))
                .collect(),
        ));
        for result in &self.results {
            let moves = match result.move_cnt() {
                Some(cnt) => cnt.to_string(),
                None => "no solution".to_owned(),
            };
            table.add_row(Row::new(vec![
                Cell::new(&result.method.to_string()),
                Cell::new(if result.method.is_optimal() { "yes" } else { "no" }),
                Cell::new(&moves),
                Cell::new(&result.steps().separated_string()),
                Cell::new(&result.stats.total_created().separated_string()),
            ]));
        }
        table
    }
}

impl Display for Comparison {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.table())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Heuristic::*;

    #[test]
    fn comparing_all() {
        let puzzle: Puzzle = "312645078".parse().unwrap();
        let comparison = compare(&puzzle, &Method::all());
        assert_eq!(comparison.results.len(), 7);

        let optimal = comparison.get(Method::Uninformed).unwrap().move_cnt().unwrap();
        for result in &comparison.results {
            assert!(result.move_cnt().unwrap() >= optimal);
        }
        assert_eq!(comparison.get(Method::AStar(Manhattan)).unwrap().move_cnt(), Some(optimal));
        assert!(comparison.get(Method::Greedy(RowCol)).is_some());

        let table = comparison.to_string();
        for method in Method::all() {
            assert!(table.contains(&method.to_string()));
        }
        assert!(table.contains("Optimal"));
        assert_eq!(table.lines().count(), 1 + 1 + 7);
    }
}
