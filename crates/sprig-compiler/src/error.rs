/// Errors raised while building operators.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum OpError {
    #[error("`{op}` requires at least one element")]
    Empty { op: &'static str },
}
