//! Canonical and disjunctive normal form.
//!
//! Normalization pushes ancestor chains down into branches, drops
//! single-child forks, merges nested forks of the same kind and scope, and
//! distributes `And`/`Then` over `Or`. The result has at most one `Or`, at
//! the root; every other fork's children are branches or forks of another
//! kind or scope.

use std::ops::Deref;

use crate::error::{PatternError, PatternResult};
use crate::tree::{Branch, Elem, Fork, ForkKind, Tree};

/// Default cap on the number of disjuncts a pattern may expand to.
pub const DEFAULT_MAX_DISJUNCTS: usize = 4096;

/// A tree in canonical normal form.
///
/// Only produced by normalization, so anything holding one can rely on the
/// single-root-`Or` shape.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Canonical<T>(Tree<T>);

impl<T> Canonical<T> {
    pub fn as_tree(&self) -> &Tree<T> {
        &self.0
    }

    pub fn into_tree(self) -> Tree<T> {
        self.0
    }

    /// The alternatives of the root `Or`, or the tree itself.
    pub fn disjuncts(&self) -> &[Tree<T>] {
        match &self.0 {
            Tree::Fork(fork) if fork.kind == ForkKind::Or => &fork.children,
            tree => std::slice::from_ref(tree),
        }
    }
}

impl<T> Deref for Canonical<T> {
    type Target = Tree<T>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<T> From<Canonical<T>> for Tree<T> {
    fn from(canonical: Canonical<T>) -> Self {
        canonical.0
    }
}

impl<T: Clone> Tree<T> {
    /// Rewrite into canonical normal form.
    pub fn canonical_nf(self) -> Canonical<T> {
        Canonical(self.cnf(0, &[]))
    }

    /// `loc` is the scope depth reached so far; `prefix` the ancestor chain.
    fn cnf(self, loc: usize, prefix: &[Elem<T>]) -> Tree<T> {
        match self {
            Tree::Branch(Branch { elems, tail }) => match tail {
                Some(tail) => {
                    let depth = loc + elems.len();
                    let chain = join(prefix, elems);
                    (*tail).cnf(depth, &chain)
                }
                None => Tree::Branch(Branch::flat(join(prefix, elems))),
            },
            Tree::Fork(Fork {
                kind: ForkKind::Or,
                mut children,
                ..
            }) => {
                if children.len() == 1 {
                    return children.remove(0).cnf(loc, prefix);
                }
                let arms = children.into_iter().map(|c| c.cnf(loc, prefix));
                Tree::Fork(Fork::new(ForkKind::Or, 0, flatten(ForkKind::Or, 0, arms)))
            }
            Tree::Fork(Fork {
                kind,
                loc: stored,
                mut children,
            }) => {
                let loc = loc.max(stored);
                if children.len() == 1 {
                    return children.remove(0).cnf(loc, prefix);
                }
                let normalized = children.into_iter().map(|c| c.cnf(loc, prefix));
                let children = flatten(kind, loc, normalized);
                if children.iter().any(Tree::is_or) {
                    distribute(kind, loc, children)
                } else {
                    Tree::Fork(Fork::new(kind, loc, children))
                }
            }
        }
    }
}

fn join<T: Clone>(prefix: &[Elem<T>], elems: Vec<Elem<T>>) -> Vec<Elem<T>> {
    if prefix.is_empty() {
        return elems;
    }
    let mut chain = Vec::with_capacity(prefix.len() + elems.len());
    chain.extend_from_slice(prefix);
    chain.extend(elems);
    chain
}

/// Splice children that are forks of the same kind and scope.
fn flatten<T>(kind: ForkKind, loc: usize, children: impl IntoIterator<Item = Tree<T>>) -> Vec<Tree<T>> {
    let mut out = Vec::new();
    for child in children {
        match child {
            Tree::Fork(fork) if fork.kind == kind && fork.loc == loc => out.extend(fork.children),
            other => out.push(other),
        }
    }
    out
}

/// `F(x, Or(y1, y2))` ⇒ `Or(F(x, y1), F(x, y2))`, over every `Or` child.
fn distribute<T: Clone>(kind: ForkKind, loc: usize, children: Vec<Tree<T>>) -> Tree<T> {
    let mut combos: Vec<Vec<Tree<T>>> = vec![Vec::with_capacity(children.len())];
    for child in children {
        let arms = match child {
            Tree::Fork(fork) if fork.kind == ForkKind::Or => fork.children,
            other => vec![other],
        };
        combos = combos
            .into_iter()
            .flat_map(|combo| {
                arms.iter().map(move |arm| {
                    let mut next = combo.clone();
                    next.push(arm.clone());
                    next
                })
            })
            .collect();
    }

    let disjuncts = combos
        .into_iter()
        .map(|combo| Tree::Fork(Fork::new(kind, loc, flatten(kind, loc, combo))))
        .collect();
    Tree::Fork(Fork::new(ForkKind::Or, 0, disjuncts))
}

/// Normalization with a cap on disjunctive expansion.
#[derive(Clone, Copy, Debug)]
pub struct Normalizer {
    max_disjuncts: usize,
}

impl Default for Normalizer {
    fn default() -> Self {
        Self {
            max_disjuncts: DEFAULT_MAX_DISJUNCTS,
        }
    }
}

impl Normalizer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn max_disjuncts(mut self, limit: usize) -> Self {
        self.max_disjuncts = limit;
        self
    }

    pub fn get_max_disjuncts(&self) -> usize {
        self.max_disjuncts
    }

    /// Normalize `tree`, refusing it up front if it would expand past the cap.
    pub fn normalize<T: Clone>(&self, tree: Tree<T>) -> PatternResult<Canonical<T>> {
        let count = tree.disjunct_count();
        if count > self.max_disjuncts {
            return Err(PatternError::DisjunctLimitExceeded {
                count,
                limit: self.max_disjuncts,
            });
        }
        Ok(tree.canonical_nf())
    }
}
