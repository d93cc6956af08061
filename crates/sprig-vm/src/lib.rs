#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Runtime VM for executing compiled Sprig programs.
//!
//! This crate provides the Pike-style Thompson VM that runs a
//! [`Program`](sprig_bytecode::Program) over a sequence of elements and
//! decides match or no match.

pub mod engine;

// Re-export commonly used items at crate root
pub use engine::{
    FuelLimits, NoopTracer, PrintTracer, RuntimeError, ThreadList, Tracer, VM, VMBuilder,
    Verbosity, thompson_vm, vm_step,
};
