use std::fmt;

use serde::Serialize;

use super::exprs::BranchId;

/// Elements that share the parent scope `loc`.
///
/// A nested group with the same `loc` is inlined on construction; one with a
/// different `loc` stays a separate group, linked through its representative.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct Sibling<N = BranchId> {
    loc: usize,
    elems: Vec<SibElem<N>>,
}

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(untagged)]
pub enum SibElem<N = BranchId> {
    Name(N),
    Group(Sibling<N>),
}

impl<N> From<N> for SibElem<N> {
    fn from(name: N) -> Self {
        Self::Name(name)
    }
}

impl<N> From<Sibling<N>> for SibElem<N> {
    fn from(group: Sibling<N>) -> Self {
        Self::Group(group)
    }
}

impl<N> Sibling<N> {
    pub fn new<I>(loc: usize, elems: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<SibElem<N>>,
    {
        let mut flat = Vec::new();
        for elem in elems {
            match elem.into() {
                SibElem::Group(group) if group.loc == loc => flat.extend(group.elems),
                other => flat.push(other),
            }
        }
        Self { loc, elems: flat }
    }

    pub fn loc(&self) -> usize {
        self.loc
    }

    pub fn elems(&self) -> &[SibElem<N>] {
        &self.elems
    }

    /// The name standing in for this group inside its parent: the first name
    /// of its first group.
    pub fn representative(&self) -> Option<&N> {
        match self.elems.first()? {
            SibElem::Name(name) => Some(name),
            SibElem::Group(group) => group.representative(),
        }
    }
}

impl<N: Clone + PartialEq> Sibling<N> {
    /// Every distinct group, outermost first, with nested groups replaced by
    /// their representatives.
    pub fn constraint(&self) -> Vec<Sibling<N>> {
        let mut out = Vec::new();
        self.collect_groups(&mut out);
        out
    }

    /// Owned form of [`constraint`](Self::constraint).
    pub fn flatten(self) -> Vec<Sibling<N>> {
        self.constraint()
    }

    fn collect_groups(&self, out: &mut Vec<Sibling<N>>) {
        let elems = self
            .elems
            .iter()
            .filter_map(|elem| match elem {
                SibElem::Name(name) => Some(SibElem::Name(name.clone())),
                SibElem::Group(group) => group.representative().cloned().map(SibElem::Name),
            })
            .collect();
        let group = Sibling {
            loc: self.loc,
            elems,
        };
        if !out.contains(&group) {
            out.push(group);
        }
        for elem in &self.elems {
            if let SibElem::Group(nested) = elem {
                nested.collect_groups(out);
            }
        }
    }
}

impl<N> SibElem<N> {
    /// Groups of a bare name are empty.
    pub fn groups(&self) -> Vec<Sibling<N>>
    where
        N: Clone + PartialEq,
    {
        match self {
            Self::Name(_) => Vec::new(),
            Self::Group(group) => group.constraint(),
        }
    }
}

impl<N: fmt::Display> fmt::Display for Sibling<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Sibling({}", self.loc)?;
        for elem in &self.elems {
            write!(f, ", {elem}")?;
        }
        f.write_str(")")
    }
}

impl<N: fmt::Display> fmt::Display for SibElem<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Name(name) => name.fmt(f),
            Self::Group(group) => group.fmt(f),
        }
    }
}
