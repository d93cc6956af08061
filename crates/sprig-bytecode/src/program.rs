use std::ops::Index;

use sprig_core::Colors;
use sprig_core::bridge::{ElemEq, ElemFmt, Equivalent};

use crate::error::ProgramError;
use crate::instructions::{Instruction, StepAddr};

/// A compiled, immutable instruction list.
///
/// Targets are absolute addresses into the same list.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Program<T> {
    instructions: Vec<Instruction<T>>,
}

impl<T> Program<T> {
    /// Wrap instructions without checking them.
    pub fn new(instructions: Vec<Instruction<T>>) -> Self {
        Self { instructions }
    }

    /// Wrap instructions, rejecting malformed programs.
    pub fn from_instructions(instructions: Vec<Instruction<T>>) -> Result<Self, ProgramError> {
        let program = Self::new(instructions);
        program.verify()?;
        Ok(program)
    }

    /// Check that every target is in range and the program ends in `Match`.
    pub fn verify(&self) -> Result<(), ProgramError> {
        let len = self.instructions.len();
        for (addr, instr) in self.instructions.iter().enumerate() {
            if let Some(target) = instr.targets().find(|&t| t >= len) {
                return Err(ProgramError::TargetOutOfRange { addr, target, len });
            }
        }
        match self.instructions.last() {
            Some(Instruction::Match) => Ok(()),
            _ => Err(ProgramError::MissingMatch),
        }
    }

    pub fn instructions(&self) -> &[Instruction<T>] {
        &self.instructions
    }

    pub fn into_instructions(self) -> Vec<Instruction<T>> {
        self.instructions
    }

    pub fn get(&self, addr: StepAddr) -> Option<&Instruction<T>> {
        self.instructions.get(addr)
    }

    pub fn len(&self) -> usize {
        self.instructions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instructions.is_empty()
    }

    /// Numbered listing, one instruction per line.
    pub fn dump<F: ElemFmt<T> + ?Sized>(&self, fmt: &F, colors: Colors) -> String {
        crate::dump::dump(self, fmt, colors)
    }
}

impl<T> Equivalent<T> for Program<T> {
    fn equivalent<E: ElemEq<T> + ?Sized>(&self, other: &Self, eq: &E) -> bool {
        self.instructions.len() == other.instructions.len()
            && self
                .instructions
                .iter()
                .zip(&other.instructions)
                .all(|(a, b)| a.equivalent(b, eq))
    }
}

impl<T> Index<StepAddr> for Program<T> {
    type Output = Instruction<T>;

    fn index(&self, addr: StepAddr) -> &Self::Output {
        &self.instructions[addr]
    }
}

impl<T> From<Program<T>> for Vec<Instruction<T>> {
    fn from(program: Program<T>) -> Self {
        program.instructions
    }
}
