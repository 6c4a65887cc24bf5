//! Frontier of the community currently being grown

use crate::graph::NodeIndex;
use std::collections::HashMap;

/// Unclustered nodes adjacent to the growing community, each with the summed
/// strength of its edges into that community.
///
/// Entries keep insertion order; removing an entry preserves the order of the rest.
#[derive(Debug, Clone, Default)]
pub struct Shell {
    entries: Vec<(NodeIndex, f64)>,
    slots: HashMap<NodeIndex, usize>,
}

impl Shell {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `strength` to the node's contribution, inserting it if absent
    pub fn add(&mut self, node: NodeIndex, strength: f64) {
        match self.slots.get(&node) {
            Some(&slot) => self.entries[slot].1 += strength,
            None => {
                self.slots.insert(node, self.entries.len());
                self.entries.push((node, strength));
            }
        }
    }

    /// Drop a node from the shell, returning its contribution
    pub fn remove(&mut self, node: NodeIndex) -> Option<f64> {
        let slot = self.slots.remove(&node)?;
        let (_, contribution) = self.entries.remove(slot);
        for (pos, &(moved, _)) in self.entries.iter().enumerate().skip(slot) {
            self.slots.insert(moved, pos);
        }
        Some(contribution)
    }

    pub fn contribution(&self, node: NodeIndex) -> Option<f64> {
        self.slots.get(&node).map(|&slot| self.entries[slot].1)
    }

    pub fn contains(&self, node: NodeIndex) -> bool {
        self.slots.contains_key(&node)
    }

    /// Entry with the strictly greatest contribution; the earliest inserted wins ties
    pub fn best_candidate(&self) -> Option<(NodeIndex, f64)> {
        let mut best = None;
        let mut best_contribution = f64::NEG_INFINITY;
        for &(node, contribution) in &self.entries {
            if contribution > best_contribution {
                best = Some((node, contribution));
                best_contribution = contribution;
            }
        }
        best
    }

    pub fn iter(&self) -> impl Iterator<Item = (NodeIndex, f64)> + '_ {
        self.entries.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        self.slots.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contributions_accumulate() {
        let mut shell = Shell::new();
        shell.add(4, 0.5);
        shell.add(9, -1.0);
        shell.add(4, 0.25);

        assert_eq!(shell.len(), 2);
        assert_eq!(shell.contribution(4), Some(0.75));
        assert_eq!(shell.contribution(9), Some(-1.0));
        assert_eq!(shell.contribution(1), None);
    }

    #[test]
    fn ties_go_to_first_inserted() {
        let mut shell = Shell::new();
        shell.add(5, 1.0);
        shell.add(2, 2.0);
        shell.add(8, 2.0);
        assert_eq!(shell.best_candidate(), Some((2, 2.0)));

        shell.remove(2);
        assert_eq!(shell.best_candidate(), Some((8, 2.0)));
    }

    #[test]
    fn remove_keeps_lookup_consistent() {
        let mut shell = Shell::new();
        for node in 0..5 {
            shell.add(node, node as f64);
        }
        assert_eq!(shell.remove(1), Some(1.0));
        assert_eq!(shell.remove(1), None);

        shell.add(3, 10.0);
        assert_eq!(shell.contribution(3), Some(13.0));
        assert_eq!(
            shell.iter().map(|(n, _)| n).collect::<Vec<_>>(),
            vec![0, 2, 3, 4]
        );

        shell.clear();
        assert!(shell.is_empty());
        assert_eq!(shell.best_candidate(), None);
    }
}
