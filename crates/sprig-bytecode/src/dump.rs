//! Human-readable program dump for debugging and documentation.
//!
//! ```text
//! 0  unit 'a'
//! 1  split 2, 3
//! 2  unit 'b'
//! 3  unit 'c'
//! 4  match
//! ```

use std::fmt::Write as _;

use sprig_core::Colors;
use sprig_core::bridge::{ElemFmt, ElemDisplay, Render};
use sprig_core::utils::width_for_count;

use crate::instructions::Instruction;
use crate::program::Program;

/// Generate a numbered listing of the program.
///
/// Addresses are right-aligned to the widest address. Elements are rendered
/// through `fmt`.
///
/// # Panics
///
/// If `fmt` returns an error without the underlying formatter failing.
/// Writing to a `String` never fails, so a conforming bridge cannot panic here.
pub fn dump<T, F: ElemFmt<T> + ?Sized>(program: &Program<T>, fmt: &F, colors: Colors) -> String {
    let mut out = String::new();
    let width = width_for_count(program.len());

    for (addr, instr) in program.instructions().iter().enumerate() {
        writeln!(
            out,
            "{}{addr:>width$}{}  {}",
            colors.dim,
            colors.reset,
            format_instruction(instr, fmt, colors)
        )
        .unwrap();
    }

    out
}

/// One instruction, colored: mnemonic blue, elements green, targets dim.
///
/// Panics under the same condition as [`dump`].
pub fn format_instruction<T, F: ElemFmt<T> + ?Sized>(
    instr: &Instruction<T>,
    fmt: &F,
    colors: Colors,
) -> String {
    if !colors.is_enabled() {
        return instr.display(fmt).to_string();
    }

    let c = colors;
    let mut out = format!("{}{}{}", c.blue, instr.mnemonic(), c.reset);
    match instr {
        Instruction::Unit(v) => {
            write!(out, " {}{}{}", c.green, ElemDisplay::new(v, fmt), c.reset).unwrap();
        }
        Instruction::UnitList(vs) => {
            out.push_str(" [");
            for (i, v) in vs.iter().enumerate() {
                if i > 0 {
                    out.push_str(", ");
                }
                write!(out, "{}{}{}", c.green, ElemDisplay::new(v, fmt), c.reset).unwrap();
            }
            out.push(']');
        }
        Instruction::Jump(t) => write!(out, " {}{t}{}", c.dim, c.reset).unwrap(),
        Instruction::Split(t1, t2) => {
            write!(out, " {}{t1}, {t2}{}", c.dim, c.reset).unwrap();
        }
        Instruction::AnyUnit | Instruction::Match => {}
    }
    out
}
