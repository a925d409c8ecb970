use std::fmt::{self, Debug, Display, Formatter};

use separator::Separatable;

use super::node::SearchNode;

#[derive(Clone, Default, PartialEq, Eq)]
pub struct Stats {
    created_states: Vec<u64>,
    expanded_states: Vec<u64>,
    duplicate_states: Vec<u64>,
}

impl Stats {
    pub fn new() -> Self {
        Stats::default()
    }

    pub fn total_created(&self) -> u64 {
        self.created_states.iter().sum::<u64>()
    }

    /// Distinct states taken from the frontier and expanded.
    pub fn total_expanded(&self) -> u64 {
        self.expanded_states.iter().sum::<u64>()
    }

    pub fn total_reached_duplicates(&self) -> u64 {
        self.duplicate_states.iter().sum::<u64>()
    }

    /// Expansion steps - used to compare how much work the methods do.
    pub fn steps(&self) -> u64 {
        self.total_expanded()
    }

    pub(crate) fn add_created(&mut self, node: &SearchNode<'_>) -> bool {
        Self::add(&mut self.created_states, node)
    }

    pub(crate) fn add_expanded(&mut self, node: &SearchNode<'_>) -> bool {
        Self::add(&mut self.expanded_states, node)
    }

    pub(crate) fn add_reached_duplicate(&mut self, node: &SearchNode<'_>) -> bool {
        Self::add(&mut self.duplicate_states, node)
    }

    /// Returns true if this is the first node at its depth.
    fn add(counts: &mut Vec<u64>, node: &SearchNode<'_>) -> bool {
        let mut ret = false;

        // while because greedy search can jump several depths at once
        while node.dist as usize >= counts.len() {
            counts.push(0);
            ret = true;
        }
        counts[node.dist as usize] += 1;
        ret
    }
}

impl Debug for Stats {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "created by depth: {:?}", self.created_states)?;
        writeln!(f, "reached duplicates by depth: {:?}", self.duplicate_states)?;
        writeln!(f, "expanded by depth: {:?}", self.expanded_states)?;
        writeln!(f, "total created: {}", self.total_created().separated_string())?;
        writeln!(
            f,
            "total reached duplicates: {}",
            self.total_reached_duplicates().separated_string()
        )?;
        writeln!(f, "total expanded: {}", self.total_expanded().separated_string())
    }
}

impl Display for Stats {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let created = self.total_created();
        let expanded = self.total_expanded();
        let duplicates = self.total_reached_duplicates();
        let left = created - expanded - duplicates;
        writeln!(f, "States created total: {}", created.separated_string())?;
        writeln!(f, "Unique states expanded total: {}", expanded.separated_string())?;
        writeln!(f, "Reached duplicates total: {}", duplicates.separated_string())?;
        writeln!(f, "Created but not expanded total: {}", left.separated_string())?;
        writeln!(f)?;

        writeln!(
            f,
            "{:<15}{:<15}{:<15}{:<15}{}",
            "Depth", "Created", "Expanded", "Duplicates", "Not expanded"
        )?;
        // created is always the longest
        for (i, &created) in self.created_states.iter().enumerate() {
            let expanded = self.expanded_states.get(i).cloned().unwrap_or(0);
            let duplicates = self.duplicate_states.get(i).cloned().unwrap_or(0);
            let left = created - expanded - duplicates;
            writeln!(
                f,
                "{:<15}{:<15}{:<15}{:<15}{}",
                format!("{}:", i),
                created.separated_string(),
                expanded.separated_string(),
                duplicates.separated_string(),
                left.separated_string()
            )?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::State;

    #[test]
    fn counting_by_depth() {
        let state = State::goal();
        let node0 = SearchNode::new(state, None, None, 0, 0);
        let node2 = SearchNode::new(state, None, None, 2, 0);

        let mut stats = Stats::new();
        assert!(stats.add_created(&node0));
        assert!(!stats.add_created(&node0));
        assert!(stats.add_created(&node2));
        assert!(stats.add_expanded(&node0));
        assert!(stats.add_reached_duplicate(&node2));

        assert_eq!(stats.total_created(), 3);
        assert_eq!(stats.total_expanded(), 1);
        assert_eq!(stats.steps(), 1);
        assert_eq!(stats.total_reached_duplicates(), 1);

        let expected = r"States created total: 3
Unique states expanded total: 1
Reached duplicates total: 1
Created but not expanded total: 1

Depth          Created        Expanded       Duplicates     Not expanded
0:             2              1              0              1
1:             0              0              0              0
2:             1              0              1              0
";
        assert_eq!(stats.to_string(), expected);
    }

    #[test]
    fn thousands() {
        let node = SearchNode::new(State::goal(), None, None, 0, 0);
        let mut stats = Stats::new();
        for _ in 0..1234 {
            stats.add_created(&node);
        }
        assert!(stats.to_string().starts_with("States created total: 1,234\n"));
        assert!(format!("{:?}", stats).contains("total created: 1,234\n"));
    }
}
