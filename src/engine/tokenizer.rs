use std::collections::HashSet;

use log::trace;
use regex::Regex;
use serde::{Deserialize, Serialize};
use stop_words::LANGUAGE;

use crate::{error::Result, vectorizer::corpus::Corpus};

/// Default token pattern: runs of Unicode word characters
pub const DEFAULT_TOKEN_PATTERN: &str = r"\b\w+\b";

/// How raw text is cut into documents
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SplitMode {
    /// one document per `.`-terminated sentence
    #[default]
    Sentences,
    /// one document per non-blank line
    Lines,
    /// the whole text is one document
    Whole,
}

/// Split `text` into document slices; blank pieces are dropped.
pub fn split_documents(text: &str, mode: SplitMode) -> Vec<&str> {
    let pieces: Box<dyn Iterator<Item = &str> + '_> = match mode {
        SplitMode::Sentences => Box::new(text.split('.')),
        SplitMode::Lines => Box::new(text.lines()),
        SplitMode::Whole => Box::new(std::iter::once(text)),
    };
    pieces.filter(|piece| !piece.trim().is_empty()).collect()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TokenizerConfig {
    /// regex whose matches become tokens
    pub pattern: String,
    /// tokens to drop after normalization
    pub stop_words: Vec<String>,
    /// tokens shorter than this (in chars) are dropped
    pub min_token_len: usize,
}

impl Default for TokenizerConfig {
    fn default() -> Self {
        Self {
            pattern: DEFAULT_TOKEN_PATTERN.to_string(),
            stop_words: Vec::new(),
            min_token_len: 1,
        }
    }
}

impl TokenizerConfig {
    /// Add the English stop-word list
    pub fn with_english_stop_words(mut self) -> Self {
        self.stop_words.extend(stop_words::get(LANGUAGE::English));
        self
    }
}

/// Regex based word tokenizer producing lower-cased tokens.
/// Stop words are compared after lower-casing too.
#[derive(Debug, Clone)]
pub struct Tokenizer {
    pattern: Regex,
    stop_words: HashSet<String>,
    min_token_len: usize,
}

impl Tokenizer {
    pub fn new(config: TokenizerConfig) -> Result<Self> {
        let pattern = Regex::new(&config.pattern)?;
        let stop_words = config
            .stop_words
            .into_iter()
            .map(|w| w.to_lowercase())
            .collect();
        Ok(Self {
            pattern,
            stop_words,
            min_token_len: config.min_token_len,
        })
    }

    /// Tokenizer with [`TokenizerConfig::default`]
    pub fn with_defaults() -> Result<Self> {
        Self::new(TokenizerConfig::default())
    }

    pub fn tokenize(&self, text: &str) -> Vec<String> {
        let normalized = text.to_lowercase();
        let tokens: Vec<String> = self
            .pattern
            .find_iter(&normalized)
            .map(|m| m.as_str())
            .filter(|tok| tok.chars().count() >= self.min_token_len)
            .filter(|tok| !self.stop_words.contains(*tok))
            .map(str::to_string)
            .collect();
        trace!("tokenized {} bytes into {} tokens", text.len(), tokens.len());
        tokens
    }

    /// Tokenize every document slice into a corpus, keeping order
    pub fn corpus_from<I, S>(&self, documents: I) -> Corpus
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut corpus = Corpus::new();
        for doc in documents {
            corpus.push_doc(&self.tokenize(doc.as_ref()));
        }
        corpus
    }
}
