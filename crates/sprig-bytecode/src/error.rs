use crate::StepAddr;

/// Structural problems found by [`Program::verify`](crate::Program::verify).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ProgramError {
    #[error("instruction {addr} targets {target}, outside program of length {len}")]
    TargetOutOfRange {
        addr: StepAddr,
        target: StepAddr,
        len: usize,
    },

    #[error("program does not end in a match instruction")]
    MissingMatch,
}
