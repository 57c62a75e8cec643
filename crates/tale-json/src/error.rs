use serde_json::Value;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum CodecError {
    /// The token matches none of the shapes allowed at its position.
    #[error("failed to convert token to runtime object ({reason}): {token}")]
    MalformedToken { token: Value, reason: String },
    /// A control command has no mnemonic; nothing can be decoded.
    #[error("control command not accounted for in serialisation: {0}")]
    IncompleteOpcodeTable(String),
    /// A float with no JSON spelling (NaN or an infinity).
    #[error("cannot encode non-finite number {0}")]
    NonFiniteNumber(f64),
}

pub type Result<T> = std::result::Result<T, CodecError>;

pub(crate) fn malformed(token: &Value, reason: impl Into<String>) -> CodecError {
    CodecError::MalformedToken {
        token: token.clone(),
        reason: reason.into(),
    }
}
