//! VM instructions.
//!
//! Consuming instructions (`Unit`, `UnitList`, `AnyUnit`) test one input item
//! and advance to the next address. `Jump` and `Split` are ε-moves that
//! redirect a thread without consuming input. `Match` accepts.

use std::fmt;

use sprig_core::bridge::{ElemEq, ElemFmt, Equivalent, Render, elems_equivalent, write_joined};

/// Absolute index of an instruction within a program.
pub type StepAddr = usize;

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Instruction<T> {
    /// Consume one item equal to the value.
    Unit(T),
    /// Consume one item equal to any of the values.
    UnitList(Vec<T>),
    /// Consume any one item.
    AnyUnit,
    /// Accept.
    Match,
    /// Continue at the target.
    Jump(StepAddr),
    /// Continue at both targets.
    Split(StepAddr, StepAddr),
}

impl<T> Instruction<T> {
    pub fn mnemonic(&self) -> &'static str {
        match self {
            Self::Unit(_) => "unit",
            Self::UnitList(_) => "unit_list",
            Self::AnyUnit => "any_unit",
            Self::Match => "match",
            Self::Jump(_) => "jump",
            Self::Split(..) => "split",
        }
    }

    /// Instructions that move a thread without consuming input.
    pub fn is_epsilon(&self) -> bool {
        matches!(self, Self::Jump(_) | Self::Split(..))
    }

    /// Explicit jump targets, in preference order.
    pub fn targets(&self) -> impl Iterator<Item = StepAddr> {
        let (first, second) = match *self {
            Self::Jump(t) => (Some(t), None),
            Self::Split(t1, t2) => (Some(t1), Some(t2)),
            _ => (None, None),
        };
        first.into_iter().chain(second)
    }

    /// Whether a consuming instruction accepts `item`.
    ///
    /// The item is passed first to the bridge, the expected value second.
    /// Non-consuming instructions never accept.
    pub fn accepts<E: ElemEq<T> + ?Sized>(&self, item: &T, eq: &E) -> bool {
        match self {
            Self::Unit(v) => eq.equals(item, v),
            Self::UnitList(vs) => vs.iter().any(|v| eq.equals(item, v)),
            Self::AnyUnit => true,
            Self::Match | Self::Jump(_) | Self::Split(..) => false,
        }
    }
}

impl<T> Render<T> for Instruction<T> {
    fn render<F: ElemFmt<T> + ?Sized>(&self, fmt: &F, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.mnemonic())?;
        match self {
            Self::Unit(v) => {
                f.write_str(" ")?;
                fmt.fmt(v, f)
            }
            Self::UnitList(vs) => {
                f.write_str(" [")?;
                write_joined(f, vs, ", ", |f, v| fmt.fmt(v, f))?;
                f.write_str("]")
            }
            Self::Jump(t) => write!(f, " {t}"),
            Self::Split(t1, t2) => write!(f, " {t1}, {t2}"),
            Self::AnyUnit | Self::Match => Ok(()),
        }
    }
}

impl<T> Equivalent<T> for Instruction<T> {
    fn equivalent<E: ElemEq<T> + ?Sized>(&self, other: &Self, eq: &E) -> bool {
        match (self, other) {
            (Self::Unit(a), Self::Unit(b)) => eq.equals(a, b),
            (Self::UnitList(a), Self::UnitList(b)) => elems_equivalent(a, b, eq),
            (Self::AnyUnit, Self::AnyUnit) | (Self::Match, Self::Match) => true,
            (Self::Jump(a), Self::Jump(b)) => a == b,
            (Self::Split(a1, a2), Self::Split(b1, b2)) => a1 == b1 && a2 == b2,
            _ => false,
        }
    }
}
