/// Errors raised while building or normalizing tree patterns.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PatternError {
    #[error("`{combinator}` requires at least one element")]
    Empty { combinator: &'static str },

    /// Only the last member of a branch may be a nested tree.
    #[error("nested tree at position {position} of a {len}-element branch; only the last member may be a tree")]
    MisplacedTree { position: usize, len: usize },

    #[error("pattern expands to {count} disjuncts, limit is {limit}")]
    DisjunctLimitExceeded { count: usize, limit: usize },
}

pub type PatternResult<T> = std::result::Result<T, PatternError>;
