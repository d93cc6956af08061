//! Quantifier compilation (`?`, `*`, `+`).
//!
//! Greedy quantifiers prefer the body branch of their split; lazy ones
//! prefer the exit.

use sprig_bytecode::{Instruction, StepAddr};

use crate::op::{OpElem, QuantifierKind};

use super::compiler::Compiler;

fn split<T>(prefer: StepAddr, other: StepAddr, greedy: bool) -> Instruction<T> {
    if greedy {
        Instruction::Split(prefer, other)
    } else {
        Instruction::Split(other, prefer)
    }
}

impl<T: Clone> Compiler<'_, T> {
    pub(super) fn compile_quantifier(&mut self, kind: QuantifierKind, body: &[OpElem<T>], greedy: bool) {
        match kind {
            QuantifierKind::OneOrMore => self.compile_plus(body, greedy),
            QuantifierKind::ZeroOrMore => self.compile_star(body, greedy),
            QuantifierKind::Optional => self.compile_optional(body, greedy),
        }
    }

    /// `L: body; split L, next`
    fn compile_plus(&mut self, body: &[OpElem<T>], greedy: bool) {
        let start = self.here();
        self.compile_elements(body);
        let after = self.here() + 1;
        self.emit(split(start, after, greedy));
    }

    /// `L: split L+1, next; body; jump L`
    fn compile_star(&mut self, body: &[OpElem<T>], greedy: bool) {
        let entry = self.reserve();
        self.compile_elements(body);
        self.emit(Instruction::Jump(entry));
        let after = self.here();
        self.patch(entry, split(entry + 1, after, greedy));
    }

    /// `split L+1, next; body`
    fn compile_optional(&mut self, body: &[OpElem<T>], greedy: bool) {
        let entry = self.reserve();
        self.compile_elements(body);
        let after = self.here();
        self.patch(entry, split(entry + 1, after, greedy));
    }
}
