//! Sprig sequence compiler: operator algebra and Thompson construction.
//!
//! - `op` - regex-style operators (`Plus`, `Star`, `QMark`, `Alt`, `Lst`, `Dot`, `Repeat`)
//! - `compile` - Thompson construction into [`sprig_bytecode::Program`]

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod compile;
pub mod error;
pub mod op;

#[cfg(test)]
pub mod test_utils;


pub use compile::{ProgramCounter, compile_elements, compile_regex};
pub use error::OpError;
pub use op::{Op, OpElem, QuantifierKind};
