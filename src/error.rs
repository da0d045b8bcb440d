/// Errors produced while building or encoding a TF-IDF matrix.
#[derive(thiserror::Error, Debug)]
pub enum TfIdfError {
    /// The corpus holds no documents, so IDF (`ln(N / (1 + df))`) is undefined.
    #[error("invalid input: corpus must contain at least one document")]
    EmptyCorpus,
    /// The tokenizer pattern did not compile.
    #[error("invalid token pattern: {0}")]
    Pattern(#[from] regex::Error),
    /// A decoded matrix row does not line up with the vocabulary.
    #[error("matrix row {row} has {found} columns, vocabulary has {expected}")]
    Shape {
        row: usize,
        expected: usize,
        found: usize,
    },
    /// Decoded terms are out of order, repeated, or not lower-case.
    #[error("vocabulary term {index} ({term:?}) is out of order, repeated, or not lower-case")]
    Vocabulary { index: usize, term: String },
    /// Decoded token counts disagree with each other.
    #[error("invalid document: {0}")]
    InvalidDocument(String),
    #[error("cbor encoding failed: {0}")]
    Cbor(#[from] serde_cbor::Error),
    #[error("json encoding failed: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T, E = TfIdfError> = std::result::Result<T, E>;
