use thiserror::Error;

#[derive(Debug, Error)]
pub enum EcfpError {
    #[error("radius must be non-negative, got {0}")]
    InvalidRadius(i64),

    #[error("atom {atom} is missing required property `{property}`")]
    MissingProperty { atom: usize, property: &'static str },

    #[error("bond {bond} is malformed: {reason}")]
    MalformedGraph { bond: usize, reason: String },

    #[error("expected {expected} initial invariants, got {found}")]
    InvariantCount { expected: usize, found: usize },

    #[error("unknown element symbol `{0}`")]
    UnknownElement(String),

    #[error("atom {atom} is `{symbol}` but has atomic number {atomic_number}")]
    ElementMismatch {
        atom: usize,
        symbol: String,
        atomic_number: u32,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid molecule JSON: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, EcfpError>;
