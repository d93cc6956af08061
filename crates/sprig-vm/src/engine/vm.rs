//! Pike-style virtual machine for executing compiled Sprig programs.
//!
//! Every live thread is a program counter. All threads advance in lockstep
//! over the input: ε-instructions (`Jump`, `Split`) extend the current list
//! while it is being iterated, consuming instructions feed the next one.
//! Positions are deduplicated per list, so one input position costs at most
//! one visit per instruction and there is no backtracking.

use sprig_bytecode::{Instruction, Program};
use sprig_core::ElemEq;

use super::error::RuntimeError;
use super::invariants::ensure_instruction;
use super::threads::ThreadList;
use super::trace::{NoopTracer, Tracer};

/// Runtime limits for program execution.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FuelLimits {
    /// Maximum total thread visits (default: 1,000,000).
    pub exec_fuel: u32,
}

impl Default for FuelLimits {
    fn default() -> Self {
        Self {
            exec_fuel: 1_000_000,
        }
    }
}

impl FuelLimits {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn exec_fuel(mut self, fuel: u32) -> Self {
        self.exec_fuel = fuel;
        self
    }
}

/// Virtual machine bound to one program and one equality bridge.
///
/// Holds no per-run state: `execute` can be called repeatedly.
pub struct VM<'p, T, E: ?Sized> {
    program: &'p Program<T>,
    equals: &'p E,
    limits: FuelLimits,
}

/// Builder for [`VM`].
pub struct VMBuilder<'p, T, E: ?Sized> {
    program: &'p Program<T>,
    equals: &'p E,
    limits: FuelLimits,
}

impl<'p, T, E: ?Sized> VMBuilder<'p, T, E> {
    pub fn limits(mut self, limits: FuelLimits) -> Self {
        self.limits = limits;
        self
    }

    pub fn exec_fuel(mut self, fuel: u32) -> Self {
        self.limits.exec_fuel = fuel;
        self
    }

    pub fn build(self) -> VM<'p, T, E> {
        VM {
            program: self.program,
            equals: self.equals,
            limits: self.limits,
        }
    }
}

impl<'p, T, E: ElemEq<T> + ?Sized> VM<'p, T, E> {
    /// Create a new VM with the given limits.
    pub fn new(program: &'p Program<T>, equals: &'p E, limits: FuelLimits) -> Self {
        Self {
            program,
            equals,
            limits,
        }
    }

    pub fn builder(program: &'p Program<T>, equals: &'p E) -> VMBuilder<'p, T, E> {
        VMBuilder {
            program,
            equals,
            limits: FuelLimits::default(),
        }
    }

    pub fn program(&self) -> &'p Program<T> {
        self.program
    }

    pub fn limits(&self) -> FuelLimits {
        self.limits
    }

    /// Run the program over `sequence`.
    ///
    /// This is a convenience method that uses `NoopTracer`, which gets
    /// completely optimized away at compile time.
    pub fn execute<'s>(&self, sequence: impl IntoIterator<Item = &'s T>) -> Result<bool, RuntimeError>
    where
        T: 's,
    {
        self.execute_with(sequence, &mut NoopTracer)
    }

    /// Run the program with a tracer for debugging.
    ///
    /// Matching is anchored at the start of `sequence` and accepts as soon as
    /// a thread reaches `Match`; items after that point are not read.
    pub fn execute_with<'s, Tr: Tracer<T>>(
        &self,
        sequence: impl IntoIterator<Item = &'s T>,
        tracer: &mut Tr,
    ) -> Result<bool, RuntimeError>
    where
        T: 's,
    {
        let mut fuel = self.limits.exec_fuel;
        let mut items = sequence.into_iter();
        let mut current = ThreadList::start(self.program.len());
        let mut position = 0;

        loop {
            let item = items.next();
            tracer.trace_step(position, item, current.as_slice());

            let (next, visits) =
                step_with(self.program, current, item, self.equals, position, tracer);

            // Fuel check
            let visits = u32::try_from(visits).unwrap_or(u32::MAX);
            if visits > fuel {
                return Err(RuntimeError::ExecFuelExhausted(self.limits.exec_fuel));
            }
            fuel -= visits;

            match next {
                None => return Ok(true),
                Some(next) if item.is_none() || next.is_empty() => {
                    tracer.trace_reject(position);
                    return Ok(false);
                }
                Some(next) => current = next,
            }
            position += 1;
        }
    }
}

/// Decide whether `program` matches a prefix of `sequence`.
///
/// Runs without a fuel limit; per-list deduplication already bounds the work
/// by program length times input length.
pub fn thompson_vm<'s, T: 's, E: ElemEq<T> + ?Sized>(
    program: &Program<T>,
    sequence: impl IntoIterator<Item = &'s T>,
    equals: &E,
) -> bool {
    let mut current = ThreadList::start(program.len());
    for item in sequence.into_iter().map(Some).chain([None]) {
        match vm_step(program, current, item, equals) {
            None => return true,
            Some(next) if next.is_empty() => return false,
            Some(next) => current = next,
        }
    }
    false
}

/// One transition of the VM.
///
/// `item` is `None` for the end-of-input sentinel. Returns `None` once a
/// thread reaches `Match`, otherwise the threads for the next position
/// (empty means every thread died).
pub fn vm_step<T, E: ElemEq<T> + ?Sized>(
    program: &Program<T>,
    current: ThreadList,
    item: Option<&T>,
    equals: &E,
) -> Option<ThreadList> {
    step_with(program, current, item, equals, 0, &mut NoopTracer).0
}

/// Shared step loop. Also returns how many threads were visited.
fn step_with<T, E: ElemEq<T> + ?Sized, Tr: Tracer<T>>(
    program: &Program<T>,
    mut current: ThreadList,
    item: Option<&T>,
    equals: &E,
    position: usize,
    tracer: &mut Tr,
) -> (Option<ThreadList>, usize) {
    let mut next = ThreadList::with_capacity(program.len());
    let mut i = 0;

    while let Some(pc) = current.get(i) {
        i += 1;
        let instr = ensure_instruction(program, pc);
        tracer.trace_instruction(pc, instr);

        match instr {
            Instruction::Match => {
                tracer.trace_accept(pc, position);
                return (None, i);
            }
            Instruction::Jump(target) => {
                current.insert(*target);
            }
            Instruction::Split(first, second) => {
                current.insert(*first);
                current.insert(*second);
            }
            Instruction::AnyUnit => {
                tracer.trace_unit_success(pc, item);
                next.insert(pc + 1);
            }
            Instruction::Unit(_) | Instruction::UnitList(_) => {
                if item.is_some_and(|item| instr.accepts(item, equals)) {
                    tracer.trace_unit_success(pc, item);
                    next.insert(pc + 1);
                } else {
                    tracer.trace_unit_failure(pc, item);
                }
            }
        }
    }

    (Some(next), i)
}
