//! Query pipelines.
//!
//! - `sequence`: operators → program → VM
//! - `tree`: tree pattern → canonical form → constraints

mod sequence;
mod tree;


pub use sequence::{SequenceQuery, SequenceQueryBuilder};
pub use tree::{TreeQuery, TreeQueryBuilder};
