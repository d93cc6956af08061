use std::fmt;
use std::hash::Hash;

use indexmap::{IndexMap, IndexSet};
use serde::Serialize;

use super::exprs::BranchId;

/// Precedence graph: name → direct successors.
///
/// Only names with at least one successor appear as keys. Equality ignores
/// insertion order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(transparent)]
#[serde(bound(serialize = "N: Serialize + Hash + Eq"))]
pub struct Dag<N: Hash + Eq = BranchId> {
    edges: IndexMap<N, IndexSet<N>>,
}

impl<N: Hash + Eq> Default for Dag<N> {
    fn default() -> Self {
        Self {
            edges: IndexMap::new(),
        }
    }
}

impl<N: Hash + Eq> Dag<N> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_edge(&mut self, from: N, to: N) {
        self.edges.entry(from).or_default().insert(to);
    }

    pub fn successors(&self, name: &N) -> Option<&IndexSet<N>> {
        self.edges.get(name)
    }

    pub fn contains_edge(&self, from: &N, to: &N) -> bool {
        self.edges.get(from).is_some_and(|succ| succ.contains(to))
    }

    /// Names with at least one successor.
    pub fn sources(&self) -> impl Iterator<Item = &N> {
        self.edges.keys()
    }

    pub fn edges(&self) -> impl Iterator<Item = (&N, &N)> {
        self.edges
            .iter()
            .flat_map(|(from, succ)| succ.iter().map(move |to| (from, to)))
    }

    pub fn edge_count(&self) -> usize {
        self.edges.values().map(IndexSet::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    pub fn as_map(&self) -> &IndexMap<N, IndexSet<N>> {
        &self.edges
    }
}

impl<N: Hash + Eq> FromIterator<(N, N)> for Dag<N> {
    fn from_iter<I: IntoIterator<Item = (N, N)>>(iter: I) -> Self {
        let mut dag = Self::new();
        for (from, to) in iter {
            dag.add_edge(from, to);
        }
        dag
    }
}

impl<N: Hash + Eq + fmt::Display> fmt::Display for Dag<N> {
    /// One line per source: `B0 -> B1, B2`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (from, succ) in &self.edges {
            write!(f, "{from} ->")?;
            for (i, to) in succ.iter().enumerate() {
                let sep = if i == 0 { " " } else { ", " };
                write!(f, "{sep}{to}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
