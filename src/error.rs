use thiserror::Error;

/// Errors produced by the aliasing layer.
#[derive(Debug, Error)]
pub enum DiError {
    /// A caller-supplied value violated a structural requirement,
    /// e.g. a malformed deprecation template or a self-referencing alias.
    #[error("{0}")]
    InvalidArgument(String),

    /// An alias chain revisited an id it had already passed through.
    #[error("Circular reference detected for alias \"{id}\", path: \"{path}\"")]
    CircularReference { id: String, path: String },
}
