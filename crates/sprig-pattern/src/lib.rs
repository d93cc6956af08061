//! Sprig tree patterns: algebra, normal forms, and constraints.
//!
//! - `tree` - `Branch`, `And`, `Then`, `Or` combinators
//! - `normalize` - canonical/disjunctive normal form and the disjunct cap
//! - `constraints` - sibling groups, orders and precedence DAGs per disjunct

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod constraints;
pub mod error;
mod invariants;
pub mod normalize;
pub mod tree;

#[cfg(test)]
pub mod test_utils;

#[cfg(test)]
mod normalize_tests;

pub use constraints::{BranchId, Constraints, Dag, OrdElem, Order, SibElem, Sibling};
pub use error::{PatternError, PatternResult};
pub use normalize::{Canonical, DEFAULT_MAX_DISJUNCTS, Normalizer};
pub use tree::{Branch, Elem, Fork, ForkKind, Tree, TreeElem};
