//! Tracing infrastructure for debugging VM execution.
//!
//! # Design: Zero-Cost Abstraction
//!
//! When `NoopTracer` is used every trait method is an `#[inline(always)]`
//! empty function, so the calls and their arguments compile away and the
//! thread lists carry no tracing state.
//!
//! `PrintTracer` collects human-readable lines. Elements are rendered
//! through an [`ElemFmt`] bridge, so it works for any element type.

use sprig_bytecode::{Instruction, Program, StepAddr};
use sprig_core::bridge::write_joined;
use sprig_core::utils::width_for_count;
use sprig_core::{Colors, ElemDisplay, ElemFmt, Render};

const EPSILON: &str = "ε";
const CONSUME: &str = " ";
const UNIT_SUCCESS: &str = "●";
const UNIT_FAILURE: &str = "○";

/// Verbosity level for trace output.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Verbosity {
    /// Default: one line per input position, plus the verdict.
    #[default]
    Default,
    /// Verbose (-v): every thread visit as an instruction line.
    Verbose,
    /// Very verbose (-vv): unit test outcomes as sub-lines.
    VeryVerbose,
}

/// Tracer trait for VM execution instrumentation.
///
/// Each method is called at a specific point during execution:
/// - `trace_step` - before processing the threads for one input position
/// - `trace_instruction` - before executing the instruction a thread points at
/// - `trace_unit_success/failure` - after a consuming instruction tests the item
/// - `trace_accept` - when a thread reaches `Match`
/// - `trace_reject` - when no thread survives
pub trait Tracer<T> {
    /// Called once per input position; `item` is `None` for end of input.
    fn trace_step(&mut self, position: usize, item: Option<&T>, threads: &[StepAddr]);

    /// Called before executing an instruction.
    fn trace_instruction(&mut self, addr: StepAddr, instr: &Instruction<T>);

    /// Called when the item satisfies a consuming instruction.
    fn trace_unit_success(&mut self, addr: StepAddr, item: Option<&T>);

    /// Called when the item fails a consuming instruction.
    fn trace_unit_failure(&mut self, addr: StepAddr, item: Option<&T>);

    /// Called when a thread reaches `Match`.
    fn trace_accept(&mut self, addr: StepAddr, position: usize);

    /// Called when every thread died.
    fn trace_reject(&mut self, position: usize);
}

/// No-op tracer that gets optimized away.
pub struct NoopTracer;

impl<T> Tracer<T> for NoopTracer {
    #[inline(always)]
    fn trace_step(&mut self, _position: usize, _item: Option<&T>, _threads: &[StepAddr]) {}

    #[inline(always)]
    fn trace_instruction(&mut self, _addr: StepAddr, _instr: &Instruction<T>) {}

    #[inline(always)]
    fn trace_unit_success(&mut self, _addr: StepAddr, _item: Option<&T>) {}

    #[inline(always)]
    fn trace_unit_failure(&mut self, _addr: StepAddr, _item: Option<&T>) {}

    #[inline(always)]
    fn trace_accept(&mut self, _addr: StepAddr, _position: usize) {}

    #[inline(always)]
    fn trace_reject(&mut self, _position: usize) {}
}

/// Tracer that collects an execution trace for debugging.
pub struct PrintTracer<'f, F: ?Sized> {
    /// Element renderer.
    fmt: &'f F,
    /// Verbosity level for output filtering.
    verbosity: Verbosity,
    /// Collected trace lines.
    lines: Vec<String>,
    /// Address width for formatting.
    step_width: usize,
    /// Color palette.
    colors: Colors,
}

impl<'f, F: ?Sized> PrintTracer<'f, F> {
    pub fn new<T>(fmt: &'f F, program: &Program<T>, verbosity: Verbosity, colors: Colors) -> Self {
        Self {
            fmt,
            verbosity,
            lines: Vec::new(),
            step_width: width_for_count(program.len()),
            colors,
        }
    }

    /// Collected trace lines.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn into_lines(self) -> Vec<String> {
        self.lines
    }

    /// Print all trace lines.
    pub fn print(&self) {
        for line in &self.lines {
            println!("{}", line);
        }
    }

    /// Add an instruction line.
    fn add_instruction(&mut self, addr: StepAddr, symbol: &str, content: &str) {
        let c = self.colors;
        let line = format!(
            "  {}{:0sw$}{} {} {}",
            c.dim,
            addr,
            c.reset,
            symbol,
            content,
            sw = self.step_width
        );
        self.lines.push(line);
    }

    /// Add a sub-line (blank address area + symbol + content).
    fn add_subline(&mut self, symbol: &str, content: &str) {
        let step_area = 2 + self.step_width + 1;
        self.lines.push(format!("{:step_area$}{} {}", "", symbol, content));
    }

    fn format_item<T>(&self, item: Option<&T>) -> String
    where
        F: ElemFmt<T>,
    {
        match item {
            Some(item) => ElemDisplay::new(item, self.fmt).to_string(),
            None => "end".to_string(),
        }
    }
}

impl<T, F: ElemFmt<T> + ?Sized> Tracer<T> for PrintTracer<'_, F> {
    fn trace_step(&mut self, position: usize, item: Option<&T>, threads: &[StepAddr]) {
        let c = self.colors;
        let item = self.format_item(item);
        let threads = Threads(threads).to_string();
        self.lines
            .push(format!("{}#{position}{} {item}  {}[{threads}]{}", c.dim, c.reset, c.dim, c.reset));
    }

    fn trace_instruction(&mut self, addr: StepAddr, instr: &Instruction<T>) {
        if self.verbosity == Verbosity::Default {
            return;
        }
        let symbol = if instr.is_epsilon() { EPSILON } else { CONSUME };
        let content = instr.display(self.fmt).to_string();
        self.add_instruction(addr, symbol, &content);
    }

    fn trace_unit_success(&mut self, _addr: StepAddr, item: Option<&T>) {
        if self.verbosity != Verbosity::VeryVerbose {
            return;
        }
        let c = self.colors;
        let content = format!("{}{}{}", c.green, self.format_item(item), c.reset);
        self.add_subline(UNIT_SUCCESS, &content);
    }

    fn trace_unit_failure(&mut self, _addr: StepAddr, item: Option<&T>) {
        if self.verbosity != Verbosity::VeryVerbose {
            return;
        }
        let c = self.colors;
        let content = format!("{}{}{}", c.red, self.format_item(item), c.reset);
        self.add_subline(UNIT_FAILURE, &content);
    }

    fn trace_accept(&mut self, addr: StepAddr, position: usize) {
        let c = self.colors;
        self.lines
            .push(format!("{}accept{} at {addr} after {position} items", c.green, c.reset));
    }

    fn trace_reject(&mut self, position: usize) {
        let c = self.colors;
        self.lines
            .push(format!("{}reject{} at #{position}", c.red, c.reset));
    }
}

/// Comma-separated thread addresses.
struct Threads<'a>(&'a [StepAddr]);

impl std::fmt::Display for Threads<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write_joined(f, self.0, ", ", |f, addr| write!(f, "{addr}"))
    }
}
