//! Runtime engine for compiled Sprig programs.

mod error;
mod invariants;
mod threads;
mod trace;
mod vm;

#[cfg(test)]
mod vm_tests;

pub use error::RuntimeError;
pub use threads::ThreadList;
pub use trace::{NoopTracer, PrintTracer, Tracer, Verbosity};
pub use vm::{FuelLimits, VM, VMBuilder, thompson_vm, vm_step};
