use sprig_core::{ElemFmt, Render};
use sprig_pattern::{BranchId, Canonical, Constraints, Dag, Normalizer, Sibling, Tree};

use crate::Result;

/// A normalized tree pattern with its constraints, one set per disjunct.
pub struct TreeQuery<T> {
    canonical: Canonical<T>,
    constraints: Vec<Constraints<T>>,
}

pub struct TreeQueryBuilder<T> {
    tree: Tree<T>,
    normalizer: Normalizer,
}

impl<T: Clone> TreeQueryBuilder<T> {
    pub fn new(tree: Tree<T>) -> Self {
        Self {
            tree,
            normalizer: Normalizer::default(),
        }
    }

    /// Refuse patterns expanding to more than `limit` disjuncts.
    pub fn max_disjuncts(mut self, limit: usize) -> Self {
        self.normalizer = self.normalizer.max_disjuncts(limit);
        self
    }

    pub fn build(self) -> Result<TreeQuery<T>> {
        let canonical = self.normalizer.normalize(self.tree)?;
        let constraints = canonical.to_exprs();
        Ok(TreeQuery {
            canonical,
            constraints,
        })
    }
}

impl<T: Clone> TreeQuery<T> {
    pub fn new(tree: Tree<T>) -> Result<Self> {
        TreeQueryBuilder::new(tree).build()
    }

    pub fn builder(tree: Tree<T>) -> TreeQueryBuilder<T> {
        TreeQueryBuilder::new(tree)
    }
}

impl<T> TreeQuery<T> {
    pub fn canonical(&self) -> &Canonical<T> {
        &self.canonical
    }

    /// Top-level alternatives of the canonical form.
    pub fn disjuncts(&self) -> &[Tree<T>] {
        self.canonical.disjuncts()
    }

    pub fn constraints(&self) -> &[Constraints<T>] {
        &self.constraints
    }

    /// Precedence DAG of each disjunct.
    pub fn dags(&self) -> Vec<Dag<BranchId>> {
        self.constraints.iter().map(Constraints::dag).collect()
    }

    /// Flattened sibling groups of each disjunct.
    pub fn sibling_groups(&self) -> Vec<Vec<Sibling<BranchId>>> {
        self.constraints
            .iter()
            .map(Constraints::sibling_groups)
            .collect()
    }

    /// All constraint sets, separated by blank lines.
    pub fn dump<F: ElemFmt<T> + ?Sized>(&self, fmt: &F) -> String {
        self.constraints
            .iter()
            .map(|c| c.display(fmt).to_string())
            .collect::<Vec<_>>()
            .join("\n\n")
    }
}
