use thiserror::Error;

#[derive(Debug, Error)]
pub enum CodecError {
    #[error("codec is not sealed; register all types and seal before encoding")]
    Unsealed,

    #[error("codec is sealed; cannot register {0}")]
    Sealed(&'static str),

    #[error("concrete name {0} is already registered")]
    DuplicateName(&'static str),

    #[error("type {type_name} is already registered as {registered}")]
    DuplicateType {
        type_name: &'static str,
        registered: &'static str,
    },

    #[error("type mismatch: expected {expected}, got {actual}")]
    TypeMismatch { expected: &'static str, actual: String },

    #[error("message too large: {size} > {max}")]
    MessageTooLarge { size: usize, max: usize },

    #[error("malformed json: {0}")]
    Malformed(String),
}

impl From<serde_json::Error> for CodecError {
    fn from(e: serde_json::Error) -> Self {
        Self::Malformed(e.to_string())
    }
}
