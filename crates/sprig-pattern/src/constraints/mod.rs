//! Sibling and ordering constraints extracted from canonical patterns.
//!
//! - `sibling`: which branches share a parent scope
//! - `order`: which branches must precede which
//! - `dag`: precedence graph built from an order
//! - `exprs`: per-disjunct extraction from a canonical tree

mod dag;
mod exprs;
mod order;
mod sibling;


pub use dag::Dag;
pub use exprs::{BranchId, Constraints};
pub use order::{OrdElem, Order};
pub use sibling::{SibElem, Sibling};
