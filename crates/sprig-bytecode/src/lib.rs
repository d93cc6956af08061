//! Instruction set and program container for the Sprig Thompson VM.
//!
//! This crate contains:
//! - Instruction definitions (`Instruction`, `StepAddr`)
//! - The immutable `Program` produced by the compiler, with verification
//! - Human-readable program dumps

pub mod dump;
pub mod error;
pub mod instructions;
pub mod program;

pub use dump::dump;
pub use error::ProgramError;
pub use instructions::{Instruction, StepAddr};
pub use program::Program;
