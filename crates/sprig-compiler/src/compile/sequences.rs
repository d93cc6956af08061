//! Sequence, alternation and repetition compilation.

use sprig_bytecode::Instruction;

use crate::op::OpElem;

use super::compiler::Compiler;

impl<T: Clone> Compiler<'_, T> {
    pub(super) fn compile_elements(&mut self, elems: &[OpElem<T>]) {
        for elem in elems {
            self.compile_elem(elem);
        }
    }

    /// `split L1, L2; L1: left; jump next; L2: right`
    pub(super) fn compile_alt(&mut self, left: &[OpElem<T>], right: &[OpElem<T>]) {
        let entry = self.reserve();
        self.compile_elements(left);
        let exit = self.reserve();
        let right_start = self.here();
        self.compile_elements(right);
        let after = self.here();
        self.patch(entry, Instruction::Split(entry + 1, right_start));
        self.patch(exit, Instruction::Jump(after));
    }

    /// The body unrolled `count` times.
    pub(super) fn compile_repeat(&mut self, body: &[OpElem<T>], count: usize) {
        for _ in 0..count {
            self.compile_elements(body);
        }
    }
}
