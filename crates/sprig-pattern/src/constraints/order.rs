use std::fmt;
use std::hash::Hash;

use serde::Serialize;

use super::dag::Dag;
use super::exprs::BranchId;

/// Ordering over names.
///
/// `Total` chains its members strictly; `Partial` says nothing about the
/// relative order of its immediate members.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum Order<N = BranchId> {
    Total(Vec<OrdElem<N>>),
    Partial(Vec<OrdElem<N>>),
}

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(untagged)]
pub enum OrdElem<N = BranchId> {
    Name(N),
    Order(Order<N>),
}

impl<N> From<N> for OrdElem<N> {
    fn from(name: N) -> Self {
        Self::Name(name)
    }
}

impl<N> From<Order<N>> for OrdElem<N> {
    fn from(order: Order<N>) -> Self {
        Self::Order(order)
    }
}

impl<N> Order<N> {
    pub fn total<I>(elems: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<OrdElem<N>>,
    {
        Self::Total(elems.into_iter().map(Into::into).collect())
    }

    pub fn partial<I>(elems: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<OrdElem<N>>,
    {
        Self::Partial(elems.into_iter().map(Into::into).collect())
    }

    pub fn elems(&self) -> &[OrdElem<N>] {
        match self {
            Self::Total(elems) | Self::Partial(elems) => elems,
        }
    }
}

impl<N: Clone + Eq + Hash> Order<N> {
    /// Precedence graph: each name maps to its direct successors.
    pub fn to_dag(&self) -> Dag<N> {
        let mut dag = Dag::new();
        self.link(&mut dag);
        dag
    }

    /// Add this order's edges to `dag`, returning its (heads, tails).
    fn link(&self, dag: &mut Dag<N>) -> (Vec<N>, Vec<N>) {
        match self {
            Self::Total(elems) => {
                let mut heads = Vec::new();
                let mut prev_tails: Option<Vec<N>> = None;
                for elem in elems {
                    let (elem_heads, elem_tails) = elem.link(dag);
                    match &prev_tails {
                        Some(tails) => {
                            for tail in tails {
                                for head in &elem_heads {
                                    dag.add_edge(tail.clone(), head.clone());
                                }
                            }
                        }
                        None => heads = elem_heads,
                    }
                    prev_tails = Some(elem_tails);
                }
                (heads, prev_tails.unwrap_or_default())
            }
            Self::Partial(elems) => {
                let mut heads = Vec::new();
                let mut tails = Vec::new();
                for elem in elems {
                    let (elem_heads, elem_tails) = elem.link(dag);
                    heads.extend(elem_heads);
                    tails.extend(elem_tails);
                }
                (heads, tails)
            }
        }
    }
}

impl<N: Clone + Eq + Hash> OrdElem<N> {
    /// A bare name has no edges.
    pub fn to_dag(&self) -> Dag<N> {
        match self {
            Self::Name(_) => Dag::new(),
            Self::Order(order) => order.to_dag(),
        }
    }

    fn link(&self, dag: &mut Dag<N>) -> (Vec<N>, Vec<N>) {
        match self {
            Self::Name(name) => (vec![name.clone()], vec![name.clone()]),
            Self::Order(order) => order.link(dag),
        }
    }
}

impl<N: fmt::Display> fmt::Display for Order<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (name, elems) = match self {
            Self::Total(elems) => ("Total", elems),
            Self::Partial(elems) => ("Partial", elems),
        };
        write!(f, "{name}(")?;
        for (i, elem) in elems.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{elem}")?;
        }
        f.write_str(")")
    }
}

impl<N: fmt::Display> fmt::Display for OrdElem<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Name(name) => name.fmt(f),
            Self::Order(order) => order.fmt(f),
        }
    }
}
