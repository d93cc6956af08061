//! Core compiler state.

use sprig_bytecode::{Instruction, StepAddr};

use crate::op::{Op, OpElem};

/// Address of the next instruction to be emitted.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ProgramCounter {
    val: StepAddr,
}

impl ProgramCounter {
    pub fn new() -> Self {
        Self { val: 0 }
    }

    pub fn val(&self) -> StepAddr {
        self.val
    }

    /// Advance by one, returning the address just claimed.
    pub fn inc(&mut self) -> StepAddr {
        let addr = self.val;
        self.val += 1;
        addr
    }
}

/// Emission state for one compilation.
///
/// `instructions[i]` lives at address `base + i`.
pub(super) struct Compiler<'pc, T> {
    pc: &'pc mut ProgramCounter,
    base: StepAddr,
    instructions: Vec<Instruction<T>>,
}

impl<'pc, T: Clone> Compiler<'pc, T> {
    pub(super) fn new(pc: &'pc mut ProgramCounter) -> Self {
        Self {
            base: pc.val(),
            pc,
            instructions: Vec::new(),
        }
    }

    pub(super) fn finish(self) -> Vec<Instruction<T>> {
        self.instructions
    }

    /// Address the next emitted instruction will get.
    pub(super) fn here(&self) -> StepAddr {
        self.pc.val()
    }

    pub(super) fn emit(&mut self, instr: Instruction<T>) -> StepAddr {
        let addr = self.pc.inc();
        self.instructions.push(instr);
        addr
    }

    /// Claim an address for a split or jump whose targets are not known yet.
    pub(super) fn reserve(&mut self) -> StepAddr {
        let addr = self.here();
        self.emit(Instruction::Jump(addr))
    }

    pub(super) fn patch(&mut self, addr: StepAddr, instr: Instruction<T>) {
        self.instructions[addr - self.base] = instr;
    }

    pub(super) fn compile_elem(&mut self, elem: &OpElem<T>) {
        match elem {
            OpElem::Unit(value) => {
                self.emit(Instruction::Unit(value.clone()));
            }
            OpElem::Op(op) => self.compile_op(op),
        }
    }

    pub(super) fn compile_op(&mut self, op: &Op<T>) {
        match op {
            Op::Quantifier { kind, body, greedy } => self.compile_quantifier(*kind, body, *greedy),
            Op::Alt { left, right } => self.compile_alt(left, right),
            Op::Lst(values) => {
                self.emit(Instruction::UnitList(values.clone()));
            }
            Op::Dot => {
                self.emit(Instruction::AnyUnit);
            }
            Op::Repeat { body, count } => self.compile_repeat(body, *count),
        }
    }
}
