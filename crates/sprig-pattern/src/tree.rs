//! Tree pattern algebra.
//!
//! A pattern is either a [`Branch`], a chain of elements walked from a node
//! down through its descendants, or a [`Fork`] combining several patterns
//! that share a scope:
//! - `And`: all children match, in any order
//! - `Then`: all children match, in the given order
//! - `Or`: at least one child matches
//!
//! `And` and `Then` carry a `loc`, the depth of the scope their children
//! share. `Or` has no scope.

use std::fmt;

use sprig_compiler::Op;
use sprig_core::bridge::{ElemEq, ElemFmt, Equivalent, Native, Render, write_joined};

use crate::error::{PatternError, PatternResult};

/// A branch member that is not a nested tree.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Elem<T> {
    Leaf(T),
    Op(Op<T>),
}

/// Anything accepted where a pattern is being built.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum TreeElem<T> {
    Leaf(T),
    Op(Op<T>),
    Tree(Tree<T>),
}

impl<T> From<T> for TreeElem<T> {
    fn from(value: T) -> Self {
        Self::Leaf(value)
    }
}

impl<T> From<Op<T>> for TreeElem<T> {
    fn from(op: Op<T>) -> Self {
        Self::Op(op)
    }
}

impl<T> From<Tree<T>> for TreeElem<T> {
    fn from(tree: Tree<T>) -> Self {
        Self::Tree(tree)
    }
}

impl<T> From<Branch<T>> for TreeElem<T> {
    fn from(branch: Branch<T>) -> Self {
        Self::Tree(Tree::Branch(branch))
    }
}

impl<T> From<Fork<T>> for TreeElem<T> {
    fn from(fork: Fork<T>) -> Self {
        Self::Tree(Tree::Fork(fork))
    }
}

impl<T> From<Elem<T>> for TreeElem<T> {
    fn from(elem: Elem<T>) -> Self {
        match elem {
            Elem::Leaf(v) => Self::Leaf(v),
            Elem::Op(op) => Self::Op(op),
        }
    }
}

/// Ordered chain of elements, optionally ending in a nested tree.
///
/// Never empty: at least one element or a tail.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Branch<T> {
    pub(crate) elems: Vec<Elem<T>>,
    pub(crate) tail: Option<Box<Tree<T>>>,
}

impl<T> Branch<T> {
    pub fn new<I>(members: I) -> PatternResult<Self>
    where
        I: IntoIterator,
        I::Item: Into<TreeElem<T>>,
    {
        let members: Vec<TreeElem<T>> = members.into_iter().map(Into::into).collect();
        let len = members.len();
        if len == 0 {
            return Err(PatternError::Empty {
                combinator: "Branch",
            });
        }

        let mut elems = Vec::with_capacity(len);
        let mut tail = None;
        for (position, member) in members.into_iter().enumerate() {
            match member {
                TreeElem::Leaf(v) => elems.push(Elem::Leaf(v)),
                TreeElem::Op(op) => elems.push(Elem::Op(op)),
                TreeElem::Tree(tree) if position + 1 == len => tail = Some(Box::new(tree)),
                TreeElem::Tree(_) => return Err(PatternError::MisplacedTree { position, len }),
            }
        }
        Ok(Self { elems, tail })
    }

    /// Branch of a single leaf or operator.
    pub fn single(elem: Elem<T>) -> Self {
        Self {
            elems: vec![elem],
            tail: None,
        }
    }

    pub(crate) fn flat(elems: Vec<Elem<T>>) -> Self {
        Self { elems, tail: None }
    }

    pub fn elems(&self) -> &[Elem<T>] {
        &self.elems
    }

    pub fn tail(&self) -> Option<&Tree<T>> {
        self.tail.as_deref()
    }

    /// Number of members, counting the tail.
    pub fn len(&self) -> usize {
        self.elems.len() + usize::from(self.tail.is_some())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Leaves of the branch, skipping operators.
    pub fn leaves(&self) -> impl Iterator<Item = &T> {
        self.elems.iter().filter_map(|e| match e {
            Elem::Leaf(v) => Some(v),
            Elem::Op(_) => None,
        })
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ForkKind {
    /// Unordered conjunction.
    And,
    /// Ordered conjunction.
    Then,
    /// Alternative.
    Or,
}

impl ForkKind {
    pub fn name(self) -> &'static str {
        match self {
            Self::And => "And",
            Self::Then => "Then",
            Self::Or => "Or",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Fork<T> {
    pub(crate) kind: ForkKind,
    pub(crate) loc: usize,
    pub(crate) children: Vec<Tree<T>>,
}

impl<T> Fork<T> {
    pub(crate) fn new(kind: ForkKind, loc: usize, children: Vec<Tree<T>>) -> Self {
        let loc = if kind == ForkKind::Or { 0 } else { loc };
        Self {
            kind,
            loc,
            children,
        }
    }

    pub fn kind(&self) -> ForkKind {
        self.kind
    }

    /// Scope depth shared by the children. Always 0 for `Or`.
    pub fn loc(&self) -> usize {
        self.loc
    }

    pub fn children(&self) -> &[Tree<T>] {
        &self.children
    }

    pub fn into_children(self) -> Vec<Tree<T>> {
        self.children
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Tree<T> {
    Branch(Branch<T>),
    Fork(Fork<T>),
}

impl<T> From<Branch<T>> for Tree<T> {
    fn from(branch: Branch<T>) -> Self {
        Self::Branch(branch)
    }
}

impl<T> From<Fork<T>> for Tree<T> {
    fn from(fork: Fork<T>) -> Self {
        Self::Fork(fork)
    }
}

impl<T> Tree<T> {
    pub fn branch<I>(members: I) -> PatternResult<Self>
    where
        I: IntoIterator,
        I::Item: Into<TreeElem<T>>,
    {
        Branch::new(members).map(Self::Branch)
    }

    /// Fork of `kind` over `children`; bare leaves and operators become
    /// single-element branches.
    pub fn fork<I>(kind: ForkKind, children: I) -> PatternResult<Self>
    where
        I: IntoIterator,
        I::Item: Into<TreeElem<T>>,
    {
        let children: Vec<Tree<T>> = children
            .into_iter()
            .map(|child| match child.into() {
                TreeElem::Leaf(v) => Self::Branch(Branch::single(Elem::Leaf(v))),
                TreeElem::Op(op) => Self::Branch(Branch::single(Elem::Op(op))),
                TreeElem::Tree(tree) => tree,
            })
            .collect();
        if children.is_empty() {
            return Err(PatternError::Empty {
                combinator: kind.name(),
            });
        }
        Ok(Self::Fork(Fork::new(kind, 0, children)))
    }

    pub fn and<I>(children: I) -> PatternResult<Self>
    where
        I: IntoIterator,
        I::Item: Into<TreeElem<T>>,
    {
        Self::fork(ForkKind::And, children)
    }

    pub fn then<I>(children: I) -> PatternResult<Self>
    where
        I: IntoIterator,
        I::Item: Into<TreeElem<T>>,
    {
        Self::fork(ForkKind::Then, children)
    }

    pub fn or<I>(children: I) -> PatternResult<Self>
    where
        I: IntoIterator,
        I::Item: Into<TreeElem<T>>,
    {
        Self::fork(ForkKind::Or, children)
    }

    /// Set the scope of an `And`/`Then` fork. No effect on branches and `Or`.
    pub fn with_loc(self, loc: usize) -> Self {
        match self {
            Self::Fork(fork) => Self::Fork(Fork::new(fork.kind, loc, fork.children)),
            branch => branch,
        }
    }

    /// Scope of a fork; `None` for branches.
    pub fn loc(&self) -> Option<usize> {
        match self {
            Self::Branch(_) => None,
            Self::Fork(fork) => Some(fork.loc),
        }
    }

    pub fn as_branch(&self) -> Option<&Branch<T>> {
        match self {
            Self::Branch(branch) => Some(branch),
            Self::Fork(_) => None,
        }
    }

    pub fn as_fork(&self) -> Option<&Fork<T>> {
        match self {
            Self::Fork(fork) => Some(fork),
            Self::Branch(_) => None,
        }
    }

    pub fn is_or(&self) -> bool {
        matches!(self, Self::Fork(Fork { kind: ForkKind::Or, .. }))
    }

    /// Number of top-level alternatives normalization produces.
    ///
    /// Sums over `Or` children and multiplies over `And`/`Then` children.
    /// Saturates at `usize::MAX`.
    pub fn disjunct_count(&self) -> usize {
        match self {
            Self::Branch(branch) => branch.tail().map_or(1, Tree::disjunct_count),
            Self::Fork(fork) => match fork.kind {
                ForkKind::Or => fork
                    .children
                    .iter()
                    .fold(0usize, |acc, c| acc.saturating_add(c.disjunct_count())),
                ForkKind::And | ForkKind::Then => fork
                    .children
                    .iter()
                    .fold(1usize, |acc, c| acc.saturating_mul(c.disjunct_count())),
            },
        }
    }

    /// Structural equality that ignores fork scopes.
    ///
    /// `==` and [`Equivalent`] compare `loc` as well; this compares only
    /// fork kinds, children and branch elements.
    pub fn same_shape(&self, other: &Self) -> bool
    where
        T: PartialEq,
    {
        self.same_shape_with(other, &Native)
    }

    /// [`Tree::same_shape`] with elements compared through `eq`.
    pub fn same_shape_with<E: ElemEq<T> + ?Sized>(&self, other: &Self, eq: &E) -> bool {
        match (self, other) {
            (Self::Branch(a), Self::Branch(b)) => {
                let tails = match (&a.tail, &b.tail) {
                    (Some(x), Some(y)) => x.same_shape_with(y, eq),
                    (None, None) => true,
                    _ => false,
                };
                tails
                    && a.elems.len() == b.elems.len()
                    && a.elems.iter().zip(&b.elems).all(|(x, y)| x.equivalent(y, eq))
            }
            (Self::Fork(a), Self::Fork(b)) => {
                a.kind == b.kind
                    && a.children.len() == b.children.len()
                    && a.children
                        .iter()
                        .zip(&b.children)
                        .all(|(x, y)| x.same_shape_with(y, eq))
            }
            _ => false,
        }
    }
}

impl<T> Render<T> for Elem<T> {
    fn render<F: ElemFmt<T> + ?Sized>(&self, fmt: &F, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Leaf(v) => fmt.fmt(v, f),
            Self::Op(op) => op.render(fmt, f),
        }
    }
}

impl<T> Render<T> for Branch<T> {
    fn render<F: ElemFmt<T> + ?Sized>(&self, fmt: &F, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Branch(")?;
        write_joined(f, &self.elems, ", ", |f, e| e.render(fmt, f))?;
        if let Some(tail) = &self.tail {
            if !self.elems.is_empty() {
                f.write_str(", ")?;
            }
            tail.render(fmt, f)?;
        }
        f.write_str(")")
    }
}

impl<T> Render<T> for Fork<T> {
    fn render<F: ElemFmt<T> + ?Sized>(&self, fmt: &F, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.kind.name())?;
        if self.loc > 0 {
            write!(f, "@{}", self.loc)?;
        }
        f.write_str("(")?;
        write_joined(f, &self.children, ", ", |f, c| c.render(fmt, f))?;
        f.write_str(")")
    }
}

impl<T> Render<T> for Tree<T> {
    fn render<F: ElemFmt<T> + ?Sized>(&self, fmt: &F, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Branch(branch) => branch.render(fmt, f),
            Self::Fork(fork) => fork.render(fmt, f),
        }
    }
}

impl<T> Equivalent<T> for Elem<T> {
    fn equivalent<E: ElemEq<T> + ?Sized>(&self, other: &Self, eq: &E) -> bool {
        match (self, other) {
            (Self::Leaf(a), Self::Leaf(b)) => eq.equals(a, b),
            (Self::Op(a), Self::Op(b)) => a.equivalent(b, eq),
            _ => false,
        }
    }
}

impl<T> Equivalent<T> for Branch<T> {
    fn equivalent<E: ElemEq<T> + ?Sized>(&self, other: &Self, eq: &E) -> bool {
        let tails = match (&self.tail, &other.tail) {
            (Some(a), Some(b)) => a.equivalent(b, eq),
            (None, None) => true,
            _ => false,
        };
        tails
            && self.elems.len() == other.elems.len()
            && self
                .elems
                .iter()
                .zip(&other.elems)
                .all(|(a, b)| a.equivalent(b, eq))
    }
}

impl<T> Equivalent<T> for Fork<T> {
    fn equivalent<E: ElemEq<T> + ?Sized>(&self, other: &Self, eq: &E) -> bool {
        self.kind == other.kind
            && self.loc == other.loc
            && self.children.len() == other.children.len()
            && self
                .children
                .iter()
                .zip(&other.children)
                .all(|(a, b)| a.equivalent(b, eq))
    }
}

impl<T> Equivalent<T> for Tree<T> {
    fn equivalent<E: ElemEq<T> + ?Sized>(&self, other: &Self, eq: &E) -> bool {
        match (self, other) {
            (Self::Branch(a), Self::Branch(b)) => a.equivalent(b, eq),
            (Self::Fork(a), Self::Fork(b)) => a.equivalent(b, eq),
            _ => false,
        }
    }
}
