//! Sprig: structural pattern matching over labeled trees and sequences.
//!
//! Two strategies live side by side:
//! - [`TreeQuery`]: normalize a tree pattern and extract per-disjunct
//!   sibling and ordering constraints (with precedence DAGs)
//! - [`SequenceQuery`]: compile regex-style operators to a Thompson program
//!   and run it on the Pike VM
//!
//! # Example
//!
//! ```
//! use sprig_lib::{Op, OpElem, SequenceQuery};
//!
//! let query: SequenceQuery<char> = SequenceQuery::new(vec![
//!     OpElem::Unit('a'),
//!     OpElem::Op(Op::qmark(['b']).unwrap()),
//!     OpElem::Unit('c'),
//! ])
//! .unwrap();
//!
//! assert!(query.matches(&['a', 'c']).unwrap());
//! assert!(!query.matches(&['a', 'b', 'b', 'c']).unwrap());
//! ```

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod query;

pub use query::{SequenceQuery, SequenceQueryBuilder, TreeQuery, TreeQueryBuilder};

pub use sprig_bytecode::{Instruction, Program, ProgramError, StepAddr};
pub use sprig_compiler::{Op, OpElem, OpError, QuantifierKind, compile_regex};
pub use sprig_core::{
    Bridge, Colors, Custom, ElemEq, ElemFmt, Native, Overlay, Override, Render,
};
pub use sprig_pattern::{
    Branch, BranchId, Canonical, Constraints, Dag, Elem, ForkKind, Normalizer, OrdElem, Order,
    PatternError, SibElem, Sibling, Tree, TreeElem,
};
pub use sprig_vm::{FuelLimits, PrintTracer, RuntimeError, Tracer, VM, Verbosity, thompson_vm};

/// Errors from building or running a query.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Pattern(#[from] PatternError),

    #[error(transparent)]
    Op(#[from] OpError),

    #[error(transparent)]
    Program(#[from] ProgramError),

    #[error(transparent)]
    Runtime(#[from] RuntimeError),
}

/// Result type for query operations.
pub type Result<T> = std::result::Result<T, Error>;
