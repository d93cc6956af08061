//! Invariant checks excluded from coverage reports.

#![cfg_attr(coverage_nightly, coverage(off))]

use sprig_bytecode::{Instruction, Program, StepAddr};

/// Fetch the instruction a thread points at.
pub(super) fn ensure_instruction<T>(program: &Program<T>, pc: StepAddr) -> &Instruction<T> {
    program.get(pc).unwrap_or_else(|| {
        panic!(
            "VM: thread position {pc} outside program of length {} \
             (compiler must emit in-range targets and a trailing match)",
            program.len()
        )
    })
}
