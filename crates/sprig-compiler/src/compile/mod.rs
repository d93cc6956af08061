//! Thompson construction for operator sequences.
//!
//! Compiles operator sequences into a linear instruction list with absolute
//! jump targets. A single [`ProgramCounter`] is threaded through the whole
//! pass; it advances once per emitted instruction except the trailing
//! `Match` appended by [`compile_regex`].
//!
//! # Module Organization
//!
//! - `compiler`: program counter and emission state
//! - `quantifier`: `?`, `*` and `+`
//! - `sequences`: element sequences, alternation, lists and repetition

mod compiler;
mod quantifier;
mod sequences;


pub use compiler::ProgramCounter;

use sprig_bytecode::{Instruction, Program};

use crate::op::{Op, OpElem};
use compiler::Compiler;

impl<T: Clone> Op<T> {
    /// Emit this operator starting at the counter's current address.
    pub fn compile(&self, pc: &mut ProgramCounter) -> Vec<Instruction<T>> {
        let mut compiler = Compiler::new(pc);
        compiler.compile_op(self);
        compiler.finish()
    }
}

/// Emit a sequence of elements; bare elements become `Unit`.
pub fn compile_elements<T: Clone>(elems: &[OpElem<T>], pc: &mut ProgramCounter) -> Vec<Instruction<T>> {
    let mut compiler = Compiler::new(pc);
    compiler.compile_elements(elems);
    compiler.finish()
}

/// Compile a whole pattern: the sequence followed by one `Match`.
pub fn compile_regex<T: Clone>(seq: &[OpElem<T>]) -> Program<T> {
    let mut pc = ProgramCounter::new();
    let mut instructions = compile_elements(seq, &mut pc);
    instructions.push(Instruction::Match);
    Program::new(instructions)
}
