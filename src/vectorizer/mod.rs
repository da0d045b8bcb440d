pub mod corpus;
pub mod matrix;
pub mod serde;
pub mod tfidf;
pub mod token;
pub mod vocabulary;

use std::marker::PhantomData;

use indexmap::IndexMap;
use log::{debug, trace};
use num::Float;
use rayon::prelude::*;

use crate::{
    error::Result,
    vectorizer::{
        corpus::Corpus,
        matrix::WeightMatrix,
        tfidf::{DefaultTFIDFEngine, TFIDFEngine},
        token::TokenFrequency,
        vocabulary::Vocabulary,
    },
};

/// TF-IDF vectorizer bound to one corpus.
///
/// The vocabulary is built once at construction; TF, IDF and the weight
/// matrix are derived from the borrowed corpus on every call, nothing is cached.
///
/// `TFIDFVectorizer<N, E>` has the following generic parameters:
/// - `N`: weight type (`f32` or `f64`)
/// - `E`: calculation engine (e.g. `DefaultTFIDFEngine`)
#[derive(Debug, Clone)]
pub struct TFIDFVectorizer<'a, N = f64, E = DefaultTFIDFEngine>
where
    N: Float,
    E: TFIDFEngine<N>,
{
    corpus_ref: &'a Corpus,
    vocabulary: Vocabulary,
    _marker: PhantomData<(N, E)>,
}

impl<'a, N, E> TFIDFVectorizer<'a, N, E>
where
    N: Float + Send + Sync,
    E: TFIDFEngine<N>,
{
    /// Create a vectorizer over `corpus_ref`
    /// Fails on an empty corpus.
    pub fn new(corpus_ref: &'a Corpus) -> Result<Self> {
        let vocabulary = Vocabulary::build(corpus_ref)?;
        debug!(
            "vocabulary built: {} terms over {} documents",
            vocabulary.len(),
            corpus_ref.doc_num()
        );
        Ok(Self {
            corpus_ref,
            vocabulary,
            _marker: PhantomData,
        })
    }

    #[inline]
    pub fn corpus(&self) -> &Corpus {
        self.corpus_ref
    }

    #[inline]
    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    /// TF of an arbitrary document against this vocabulary, term → value
    pub fn term_frequency(&self, doc: &TokenFrequency) -> IndexMap<String, N> {
        self.to_term_map(E::tf_vec(doc, &self.vocabulary))
    }

    /// IDF of every vocabulary term, term → value
    pub fn inverse_document_frequency(&self) -> Result<IndexMap<String, N>> {
        Ok(self.to_term_map(E::idf_vec(self.corpus_ref, &self.vocabulary)?))
    }

    /// TF rows of all documents, in corpus order
    /// Documents are independent, so they are computed in parallel.
    pub fn tf_rows(&self) -> Vec<Vec<N>> {
        let vocabulary = &self.vocabulary;
        self.corpus_ref
            .documents()
            .par_iter()
            .enumerate()
            .map(|(idx, doc)| {
                trace!("tf row {}: {} tokens", idx, doc.token_sum());
                E::tf_vec(doc, vocabulary)
            })
            .collect()
    }

    /// Weight matrix: `tf(doc, term) * idf(term)` for every cell
    pub fn compute(&self) -> Result<WeightMatrix<N>> {
        let idf = E::idf_vec(self.corpus_ref, &self.vocabulary)?;
        let rows: Vec<Vec<N>> = self
            .tf_rows()
            .into_iter()
            .map(|tf| tf.into_iter().zip(idf.iter()).map(|(tf, &idf)| tf * idf).collect())
            .collect();
        debug!("tf-idf matrix: {} x {}", rows.len(), self.vocabulary.len());
        WeightMatrix::new(self.vocabulary.clone(), rows)
    }

    fn to_term_map(&self, values: Vec<N>) -> IndexMap<String, N> {
        self.vocabulary
            .iter()
            .map(str::to_string)
            .zip(values)
            .collect()
    }
}

/// Sorted set of distinct tokens in `corpus`
pub fn build_vocabulary(corpus: &Corpus) -> Result<Vocabulary> {
    Vocabulary::build(corpus)
}

/// TF of `doc` for every term of `vocabulary`
/// An empty document maps every term to 0.
pub fn compute_term_frequency(doc: &TokenFrequency, vocabulary: &Vocabulary) -> IndexMap<String, f64> {
    let values: Vec<f64> = DefaultTFIDFEngine::tf_vec(doc, vocabulary);
    vocabulary.iter().map(str::to_string).zip(values).collect()
}

/// IDF `ln(N / (1 + df))` for every term of `vocabulary`
pub fn compute_inverse_document_frequency(
    corpus: &Corpus,
    vocabulary: &Vocabulary,
) -> Result<IndexMap<String, f64>> {
    let values: Vec<f64> = DefaultTFIDFEngine::idf_vec(corpus, vocabulary)?;
    Ok(vocabulary.iter().map(str::to_string).zip(values).collect())
}

/// Full TF-IDF matrix of `corpus` with the default engine in `f64`
pub fn compute_tf_idf(corpus: &Corpus) -> Result<WeightMatrix<f64>> {
    TFIDFVectorizer::<f64>::new(corpus)?.compute()
}
