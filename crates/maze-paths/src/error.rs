use thiserror::Error;

/// Precondition failures when building a graph from a grid.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuildError {
    #[error("grid has no start point")]
    MissingStart,

    #[error("grid has no finish point")]
    MissingFinish,
}
