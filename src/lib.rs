/// This crate computes a TF-IDF weight matrix over a small, fully in-memory corpus.
pub mod engine;
pub mod error;
pub mod vectorizer;

/// Error type
/// Every fallible operation returns `Result<T, TfIdfError>`.
/// The only failure of the computation itself is an empty corpus
/// (`TfIdfError::EmptyCorpus`); the other variants come from tokenizer
/// configuration and matrix encoding.
pub use error::{Result, TfIdfError};

/// TF-IDF Vectorizer
/// Orchestrates the calculation over a borrowed `Corpus`:
/// - builds the sorted vocabulary once
/// - computes TF per document (in parallel, corpus order preserved)
/// - computes IDF once over the corpus
/// - multiplies them into a `WeightMatrix`
///
/// `TFIDFVectorizer<N, E>` has the following generic parameters:
/// - `N`: weight type (`f32`, `f64`)
/// - `E`: TF-IDF calculation engine type (e.g., `DefaultTFIDFEngine`)
pub use vectorizer::TFIDFVectorizer;

/// One-shot operations with the default engine in `f64`
/// - `build_vocabulary`: sorted distinct tokens
/// - `compute_term_frequency`: `count / len` per vocabulary term, all zero for an empty document
/// - `compute_inverse_document_frequency`: `ln(N / (1 + df))` per vocabulary term
/// - `compute_tf_idf`: the full documents × terms matrix
pub use vectorizer::{build_vocabulary, compute_inverse_document_frequency, compute_term_frequency, compute_tf_idf};

/// Corpus
/// Ordered collection of tokenized documents. Row `i` of every matrix is document `i`.
pub use vectorizer::corpus::Corpus;

/// Token Frequency structure
/// Bag-of-tokens view of a document: occurrence count of each token and the total.
/// Also offers simple statistics (hapaxes, most frequent tokens, diversity).
pub use vectorizer::token::TokenFrequency;

/// Vocabulary
/// Distinct corpus tokens in lexicographic order; a term's position is its matrix column.
pub use vectorizer::vocabulary::Vocabulary;

/// Weight matrix (documents × vocabulary terms)
/// Supports lookup, per-document top terms, table printout via `Display`,
/// and CBOR / JSON encoding. `WeightMatrixData` is the validated decoding target.
pub use vectorizer::matrix::WeightMatrix;
pub use vectorizer::serde::WeightMatrixData;

/// TF IDF Calculation Engine Trait
/// Plug a different TF or IDF formula into `TFIDFVectorizer<N, E>`.
/// `DefaultTFIDFEngine` implements `count / len` and `ln(N / (1 + df))`.
pub use vectorizer::tfidf::{DefaultTFIDFEngine, TFIDFEngine};

/// Tokenizer
/// Regex based splitter producing lower-cased, punctuation-free tokens,
/// with optional stop-word and length filtering.
pub use engine::tokenizer::{split_documents, SplitMode, Tokenizer, TokenizerConfig};
