//! Errors that can occur during program execution.

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RuntimeError {
    /// Execution fuel exhausted (too many thread visits). Carries the limit.
    #[error("runtime execution limit of {0} thread visits exceeded")]
    ExecFuelExhausted(u32),
}
