use thiserror::Error;

use crate::kind::DimensionKind;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DimensionError {
    /// Input did not resolve to a canonical value (strict parsing only).
    #[error("unrecognized {kind} value: {input:?}")]
    Unrecognized { kind: DimensionKind, input: String },
    #[error("unknown dimension kind: {0}")]
    UnknownKind(String),
}

pub type Result<T> = std::result::Result<T, DimensionError>;
