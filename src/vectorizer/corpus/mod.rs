use serde::{Deserialize, Serialize};

use crate::vectorizer::token::TokenFrequency;

/// Ordered collection of tokenized documents.
/// Row `i` of a weight matrix always refers to `documents()[i]`.
#[derive(Debug, Serialize, Deserialize, Default, Clone, PartialEq)]
pub struct Corpus {
    documents: Vec<TokenFrequency>,
}

impl Corpus {
    /// Create an empty corpus
    pub fn new() -> Self {
        Self {
            documents: Vec::new(),
        }
    }

    /// Build a corpus from tokenized documents, keeping their order
    pub fn from_documents<I, D, T>(documents: I) -> Self
    where
        I: IntoIterator<Item = D>,
        D: AsRef<[T]>,
        T: AsRef<str>,
    {
        let documents = documents
            .into_iter()
            .map(|doc| {
                let mut freq = TokenFrequency::new();
                freq.add_tokens(doc.as_ref());
                freq
            })
            .collect();
        Self { documents }
    }

    /// Append a document's tokens
    /// An empty token slice is a valid (empty) document.
    pub fn push_doc<T>(&mut self, tokens: &[T]) -> &mut Self
    where
        T: AsRef<str>,
    {
        let mut freq = TokenFrequency::new();
        freq.add_tokens(tokens);
        self.documents.push(freq);
        self
    }

    /// Number of documents (N)
    #[inline]
    pub fn doc_num(&self) -> usize {
        self.documents.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    #[inline]
    pub fn documents(&self) -> &[TokenFrequency] {
        &self.documents
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<&TokenFrequency> {
        self.documents.get(index)
    }

    /// Number of documents containing `term` at least once, in any casing
    pub fn document_frequency(&self, term: &str) -> u64 {
        self.documents
            .iter()
            .filter(|doc| doc.contains_token(term))
            .count() as u64
    }

    /// Total number of tokens across all documents
    pub fn token_sum(&self) -> u64 {
        self.documents.iter().map(TokenFrequency::token_sum).sum()
    }

    /// Merge all documents into one bag of tokens (the corpus-wide bag of words)
    pub fn merged_frequency(&self) -> TokenFrequency {
        let mut merged = TokenFrequency::new();
        for doc in &self.documents {
            for (token, count) in doc.iter() {
                for _ in 0..count {
                    merged.add_token(token);
                }
            }
        }
        merged
    }
}
