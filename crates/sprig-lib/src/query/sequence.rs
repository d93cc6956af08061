use sprig_bytecode::Program;
use sprig_compiler::{OpElem, compile_regex};
use sprig_core::{Colors, ElemEq, ElemFmt, Native};
use sprig_vm::{FuelLimits, PrintTracer, VM, Verbosity};

use crate::Result;

/// A compiled operator sequence, ready to run many times.
pub struct SequenceQuery<T> {
    program: Program<T>,
    limits: FuelLimits,
}

pub struct SequenceQueryBuilder<T> {
    elems: Vec<OpElem<T>>,
    limits: FuelLimits,
}

impl<T: Clone> SequenceQueryBuilder<T> {
    pub fn new<I>(elems: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<OpElem<T>>,
    {
        Self {
            elems: elems.into_iter().map(Into::into).collect(),
            limits: FuelLimits::default(),
        }
    }

    pub fn limits(mut self, limits: FuelLimits) -> Self {
        self.limits = limits;
        self
    }

    pub fn exec_fuel(mut self, fuel: u32) -> Self {
        self.limits.exec_fuel = fuel;
        self
    }

    /// Compile and verify the program.
    pub fn build(self) -> Result<SequenceQuery<T>> {
        let program = compile_regex(&self.elems);
        program.verify()?;
        Ok(SequenceQuery {
            program,
            limits: self.limits,
        })
    }
}

impl<T: Clone> SequenceQuery<T> {
    pub fn new<I>(elems: I) -> Result<Self>
    where
        I: IntoIterator,
        I::Item: Into<OpElem<T>>,
    {
        SequenceQueryBuilder::new(elems).build()
    }

    pub fn builder<I>(elems: I) -> SequenceQueryBuilder<T>
    where
        I: IntoIterator,
        I::Item: Into<OpElem<T>>,
    {
        SequenceQueryBuilder::new(elems)
    }
}

impl<T> SequenceQuery<T> {
    pub fn program(&self) -> &Program<T> {
        &self.program
    }

    pub fn limits(&self) -> FuelLimits {
        self.limits
    }

    /// Run against `sequence`, comparing elements with `equals`.
    pub fn is_match<'s, E>(&self, sequence: impl IntoIterator<Item = &'s T>, equals: &E) -> Result<bool>
    where
        T: 's,
        E: ElemEq<T> + ?Sized,
    {
        let vm = VM::new(&self.program, equals, self.limits);
        Ok(vm.execute(sequence)?)
    }

    /// Run against `sequence` using the elements' own equality.
    pub fn matches<'s>(&self, sequence: impl IntoIterator<Item = &'s T>) -> Result<bool>
    where
        T: PartialEq + 's,
    {
        self.is_match(sequence, &Native)
    }

    /// Run with a [`PrintTracer`], returning the verdict and the trace lines.
    pub fn trace<'s, B>(
        &self,
        sequence: impl IntoIterator<Item = &'s T>,
        bridge: &B,
        verbosity: Verbosity,
        colors: Colors,
    ) -> Result<(bool, Vec<String>)>
    where
        T: 's,
        B: ElemEq<T> + ElemFmt<T> + ?Sized,
    {
        let vm = VM::new(&self.program, bridge, self.limits);
        let mut tracer = PrintTracer::new(bridge, &self.program, verbosity, colors);
        let matched = vm.execute_with(sequence, &mut tracer)?;
        Ok((matched, tracer.into_lines()))
    }

    pub fn dump<F: ElemFmt<T> + ?Sized>(&self, fmt: &F, colors: Colors) -> String {
        self.program.dump(fmt, colors)
    }
}
