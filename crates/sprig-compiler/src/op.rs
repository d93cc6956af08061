//! Regex-style operators over sequences of elements.
//!
//! Operators wrap elements inside a sequence pattern: quantifiers, binary
//! alternation, element lists (`[bc]`), the wildcard and fixed repetition.
//! They are matched by the Thompson VM after [`compile`](Op::compile), never
//! rewritten by tree normalization.

use std::fmt;

use sprig_core::bridge::{ElemEq, ElemFmt, Equivalent, Render, elems_equivalent, write_joined};

use crate::error::OpError;

/// One member of an operator sequence: a bare element or a nested operator.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum OpElem<T> {
    Unit(T),
    Op(Op<T>),
}

impl<T> From<T> for OpElem<T> {
    fn from(value: T) -> Self {
        Self::Unit(value)
    }
}

impl<T> From<Op<T>> for OpElem<T> {
    fn from(op: Op<T>) -> Self {
        Self::Op(op)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum QuantifierKind {
    /// `?`
    Optional,
    /// `*`
    ZeroOrMore,
    /// `+`
    OneOrMore,
}

impl QuantifierKind {
    pub fn name(self) -> &'static str {
        match self {
            Self::Optional => "QMark",
            Self::ZeroOrMore => "Star",
            Self::OneOrMore => "Plus",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Op<T> {
    Quantifier {
        kind: QuantifierKind,
        body: Vec<OpElem<T>>,
        greedy: bool,
    },
    /// Either side; one side may be empty.
    Alt {
        left: Vec<OpElem<T>>,
        right: Vec<OpElem<T>>,
    },
    /// Any one of the listed elements.
    Lst(Vec<T>),
    /// Any one element.
    Dot,
    /// The body, `count` times in a row.
    Repeat { body: Vec<OpElem<T>>, count: usize },
}

fn collect_body<T, I>(op: &'static str, elems: I) -> Result<Vec<OpElem<T>>, OpError>
where
    I: IntoIterator,
    I::Item: Into<OpElem<T>>,
{
    let body: Vec<OpElem<T>> = elems.into_iter().map(Into::into).collect();
    if body.is_empty() {
        return Err(OpError::Empty { op });
    }
    Ok(body)
}

impl<T> Op<T> {
    fn quantifier<I>(kind: QuantifierKind, elems: I) -> Result<Self, OpError>
    where
        I: IntoIterator,
        I::Item: Into<OpElem<T>>,
    {
        Ok(Self::Quantifier {
            kind,
            body: collect_body(kind.name(), elems)?,
            greedy: true,
        })
    }

    /// One or more, greedy.
    pub fn plus<I>(elems: I) -> Result<Self, OpError>
    where
        I: IntoIterator,
        I::Item: Into<OpElem<T>>,
    {
        Self::quantifier(QuantifierKind::OneOrMore, elems)
    }

    /// Zero or more, greedy.
    pub fn star<I>(elems: I) -> Result<Self, OpError>
    where
        I: IntoIterator,
        I::Item: Into<OpElem<T>>,
    {
        Self::quantifier(QuantifierKind::ZeroOrMore, elems)
    }

    /// Zero or one, greedy.
    pub fn qmark<I>(elems: I) -> Result<Self, OpError>
    where
        I: IntoIterator,
        I::Item: Into<OpElem<T>>,
    {
        Self::quantifier(QuantifierKind::Optional, elems)
    }

    pub fn alt<L, R>(left: L, right: R) -> Result<Self, OpError>
    where
        L: IntoIterator,
        L::Item: Into<OpElem<T>>,
        R: IntoIterator,
        R::Item: Into<OpElem<T>>,
    {
        let left: Vec<OpElem<T>> = left.into_iter().map(Into::into).collect();
        let right: Vec<OpElem<T>> = right.into_iter().map(Into::into).collect();
        if left.is_empty() && right.is_empty() {
            return Err(OpError::Empty { op: "Alt" });
        }
        Ok(Self::Alt { left, right })
    }

    pub fn lst(elems: impl IntoIterator<Item = T>) -> Result<Self, OpError> {
        let elems: Vec<T> = elems.into_iter().collect();
        if elems.is_empty() {
            return Err(OpError::Empty { op: "Lst" });
        }
        Ok(Self::Lst(elems))
    }

    pub fn dot() -> Self {
        Self::Dot
    }

    pub fn repeat<I>(elems: I, count: usize) -> Result<Self, OpError>
    where
        I: IntoIterator,
        I::Item: Into<OpElem<T>>,
    {
        Ok(Self::Repeat {
            body: collect_body("Repeat", elems)?,
            count,
        })
    }

    /// Non-greedy variant of a quantifier. Other operators are unchanged.
    pub fn lazy(self) -> Self {
        match self {
            Self::Quantifier { kind, body, .. } => Self::Quantifier {
                kind,
                body,
                greedy: false,
            },
            other => other,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Quantifier { kind, .. } => kind.name(),
            Self::Alt { .. } => "Alt",
            Self::Lst(_) => "Lst",
            Self::Dot => "Dot",
            Self::Repeat { .. } => "Repeat",
        }
    }
}

fn render_seq<T, F: ElemFmt<T> + ?Sized>(
    elems: &[OpElem<T>],
    fmt: &F,
    f: &mut fmt::Formatter<'_>,
) -> fmt::Result {
    write_joined(f, elems, ", ", |f, e| e.render(fmt, f))
}

impl<T> Render<T> for OpElem<T> {
    fn render<F: ElemFmt<T> + ?Sized>(&self, fmt: &F, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unit(v) => fmt.fmt(v, f),
            Self::Op(op) => op.render(fmt, f),
        }
    }
}

impl<T> Render<T> for Op<T> {
    fn render<F: ElemFmt<T> + ?Sized>(&self, fmt: &F, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}(", self.name())?;
        match self {
            Self::Quantifier { body, greedy, .. } => {
                render_seq(body, fmt, f)?;
                if !greedy {
                    f.write_str(", lazy")?;
                }
            }
            Self::Alt { left, right } => {
                f.write_str("[")?;
                render_seq(left, fmt, f)?;
                f.write_str("], [")?;
                render_seq(right, fmt, f)?;
                f.write_str("]")?;
            }
            Self::Lst(elems) => write_joined(f, elems, ", ", |f, v| fmt.fmt(v, f))?,
            Self::Dot => {}
            Self::Repeat { body, count } => {
                render_seq(body, fmt, f)?;
                write!(f, ", count={count}")?;
            }
        }
        f.write_str(")")
    }
}

fn seq_equivalent<T, E: ElemEq<T> + ?Sized>(a: &[OpElem<T>], b: &[OpElem<T>], eq: &E) -> bool {
    a.len() == b.len() && a.iter().zip(b).all(|(x, y)| x.equivalent(y, eq))
}

impl<T> Equivalent<T> for OpElem<T> {
    fn equivalent<E: ElemEq<T> + ?Sized>(&self, other: &Self, eq: &E) -> bool {
        match (self, other) {
            (Self::Unit(a), Self::Unit(b)) => eq.equals(a, b),
            (Self::Op(a), Self::Op(b)) => a.equivalent(b, eq),
            _ => false,
        }
    }
}

impl<T> Equivalent<T> for Op<T> {
    fn equivalent<E: ElemEq<T> + ?Sized>(&self, other: &Self, eq: &E) -> bool {
        match (self, other) {
            (
                Self::Quantifier {
                    kind: k1,
                    body: b1,
                    greedy: g1,
                },
                Self::Quantifier {
                    kind: k2,
                    body: b2,
                    greedy: g2,
                },
            ) => k1 == k2 && g1 == g2 && seq_equivalent(b1, b2, eq),
            (Self::Alt { left: l1, right: r1 }, Self::Alt { left: l2, right: r2 }) => {
                seq_equivalent(l1, l2, eq) && seq_equivalent(r1, r2, eq)
            }
            (Self::Lst(a), Self::Lst(b)) => elems_equivalent(a, b, eq),
            (Self::Dot, Self::Dot) => true,
            (
                Self::Repeat {
                    body: b1,
                    count: c1,
                },
                Self::Repeat {
                    body: b2,
                    count: c2,
                },
            ) => c1 == c2 && seq_equivalent(b1, b2, eq),
            _ => false,
        }
    }
}
