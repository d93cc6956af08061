use std::fmt;

use indexmap::IndexMap;
use serde::{Serialize, Serializer};
use sprig_core::bridge::{ElemFmt, Render};

use super::dag::Dag;
use super::order::{OrdElem, Order};
use super::sibling::{SibElem, Sibling};
use crate::invariants::or_below_root;
use crate::normalize::Canonical;
use crate::tree::{Branch, ForkKind, Tree};

/// Name of one branch of a canonical pattern: `B0`, `B1`, …
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BranchId(u32);

impl BranchId {
    pub fn new(index: u32) -> Self {
        Self(index)
    }

    pub fn index(self) -> u32 {
        self.0
    }
}

impl fmt::Display for BranchId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "B{}", self.0)
    }
}

impl Serialize for BranchId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Constraints of one disjunct.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Constraints<T> {
    /// Each branch under its name, in depth-first order.
    pub aliases: IndexMap<BranchId, Branch<T>>,
    /// Scope grouping; a bare name for a lone branch.
    pub siblings: SibElem<BranchId>,
    /// `Total` for `Then`, `Partial` for `And`; a bare name for a lone branch.
    pub order: OrdElem<BranchId>,
}

impl<T> Constraints<T> {
    pub fn sibling_groups(&self) -> Vec<Sibling<BranchId>> {
        self.siblings.groups()
    }

    pub fn dag(&self) -> Dag<BranchId> {
        self.order.to_dag()
    }

    pub fn branch(&self, id: BranchId) -> Option<&Branch<T>> {
        self.aliases.get(&id)
    }
}

impl<T> Render<T> for Constraints<T> {
    /// ```text
    /// B0 = Branch('a', 'b')
    /// B1 = Branch('a', 'c')
    /// siblings: Sibling(1, B0, B1)
    /// order: Total(B0, B1)
    /// ```
    fn render<F: ElemFmt<T> + ?Sized>(&self, fmt: &F, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (id, branch) in &self.aliases {
            write!(f, "{id} = ")?;
            branch.render(fmt, f)?;
            writeln!(f)?;
        }
        writeln!(f, "siblings: {}", self.siblings)?;
        write!(f, "order: {}", self.order)
    }
}

impl<T: Clone> Canonical<T> {
    /// One [`Constraints`] per disjunct.
    ///
    /// Branch ids are numbered depth-first, left to right, continuing across
    /// disjuncts.
    pub fn to_exprs(&self) -> Vec<Constraints<T>> {
        let mut next_id = 0u32;
        self.disjuncts()
            .iter()
            .map(|disjunct| {
                let mut aliases = IndexMap::new();
                let (siblings, order) = alias(disjunct, &mut next_id, &mut aliases);
                Constraints {
                    aliases,
                    siblings,
                    order,
                }
            })
            .collect()
    }
}

fn alias<T: Clone>(
    tree: &Tree<T>,
    next_id: &mut u32,
    aliases: &mut IndexMap<BranchId, Branch<T>>,
) -> (SibElem<BranchId>, OrdElem<BranchId>) {
    match tree {
        Tree::Branch(branch) => {
            let id = BranchId(*next_id);
            *next_id += 1;
            aliases.insert(id, branch.clone());
            (SibElem::Name(id), OrdElem::Name(id))
        }
        Tree::Fork(fork) => {
            let mut sibs = Vec::with_capacity(fork.children().len());
            let mut ords = Vec::with_capacity(fork.children().len());
            for child in fork.children() {
                let (sib, ord) = alias(child, next_id, aliases);
                sibs.push(sib);
                ords.push(ord);
            }
            let order = match fork.kind() {
                ForkKind::And => Order::Partial(ords),
                ForkKind::Then => Order::Total(ords),
                ForkKind::Or => or_below_root(),
            };
            (
                SibElem::Group(Sibling::new(fork.loc(), sibs)),
                OrdElem::Order(order),
            )
        }
    }
}
