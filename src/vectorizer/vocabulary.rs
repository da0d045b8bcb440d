use indexmap::IndexSet;
use serde::{Deserialize, Serialize};

use crate::{
    error::{Result, TfIdfError},
    vectorizer::{corpus::Corpus, token::normalize_token},
};

/// Distinct tokens of a corpus in lexicographic order.
/// The position of a term is its column in the weight matrix.
///
/// Decoding checks that the terms are lower-case, distinct and strictly increasing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "VocabularyData")]
pub struct Vocabulary {
    terms: IndexSet<Box<str>>,
}

#[derive(Deserialize)]
struct VocabularyData {
    terms: Vec<Box<str>>,
}

impl TryFrom<VocabularyData> for Vocabulary {
    type Error = TfIdfError;

    fn try_from(data: VocabularyData) -> Result<Self> {
        for (index, term) in data.terms.iter().enumerate() {
            let out_of_order = index > 0 && data.terms[index - 1] >= *term;
            if out_of_order || normalize_token(term) != **term {
                return Err(TfIdfError::Vocabulary {
                    index,
                    term: term.to_string(),
                });
            }
        }
        Ok(Self {
            terms: data.terms.into_iter().collect(),
        })
    }
}

impl Vocabulary {
    /// Collect every distinct token of `corpus`, sorted.
    ///
    /// Fails with [`TfIdfError::EmptyCorpus`] when the corpus has no documents.
    /// Empty documents are fine and simply contribute nothing.
    pub fn build(corpus: &Corpus) -> Result<Self> {
        if corpus.is_empty() {
            return Err(TfIdfError::EmptyCorpus);
        }
        let mut terms: IndexSet<Box<str>> = IndexSet::new();
        for doc in corpus.documents() {
            for token in doc.token_set_ref_str() {
                if !terms.contains(token) {
                    terms.insert(token.into());
                }
            }
        }
        terms.sort();
        Ok(Self { terms })
    }

    /// Build a vocabulary from arbitrary terms; they are lower-cased, deduplicated and sorted
    pub fn from_terms<I, T>(terms: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: AsRef<str>,
    {
        let mut terms: IndexSet<Box<str>> = terms
            .into_iter()
            .map(|t| normalize_token(t.as_ref()).into())
            .collect();
        terms.sort();
        Self { terms }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    #[inline]
    pub fn contains(&self, term: &str) -> bool {
        self.terms.contains(&*normalize_token(term))
    }

    /// Column index of `term`, in any casing
    #[inline]
    pub fn index_of(&self, term: &str) -> Option<usize> {
        self.terms.get_index_of(&*normalize_token(term))
    }

    /// Term at column `index`
    #[inline]
    pub fn get(&self, index: usize) -> Option<&str> {
        self.terms.get_index(index).map(|t| t.as_ref())
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.terms.iter().map(|t| t.as_ref())
    }
}
