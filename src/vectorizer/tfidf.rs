use num::Float;

use crate::{error::{Result, TfIdfError}, vectorizer::{corpus::Corpus, token::TokenFrequency, vocabulary::Vocabulary}};

/// TF-IDF calculation strategy.
///
/// Both vectors are dense and laid out in vocabulary order, so element `i`
/// belongs to `vocabulary.get(i)`.
pub trait TFIDFEngine<N>
where
    N: Float,
{
    /// TF vector of one document
    /// # Arguments
    /// * `freq` - token counts of the document
    /// * `vocabulary` - column layout
    fn tf_vec(freq: &TokenFrequency, vocabulary: &Vocabulary) -> Vec<N>;

    /// IDF vector of the corpus
    /// # Arguments
    /// * `corpus` - all documents
    /// * `vocabulary` - column layout
    ///
    /// Fails with [`TfIdfError::EmptyCorpus`] when `corpus` has no documents.
    fn idf_vec(corpus: &Corpus, vocabulary: &Vocabulary) -> Result<Vec<N>>;
}

/// Textbook TF-IDF engine
/// - TF: `count(term, doc) / len(doc)`, 0 for an empty document
/// - IDF: `ln(N / (1 + df(term)))`
///
/// The `+1` in the IDF denominator makes a term present in every document of a
/// multi-document corpus slightly negative (`ln(N / (N + 1))`). That is kept as is.
///
/// Works for `f32` and `f64`; the arithmetic runs in `f64` and is cast at the end.
#[derive(Debug, Default, Clone, Copy)]
pub struct DefaultTFIDFEngine;

impl DefaultTFIDFEngine {
    /// `ln(doc_num / (1 + doc_freq))`
    #[inline]
    pub fn idf_calc(doc_num: u64, doc_freq: u64) -> f64 {
        (doc_num as f64 / (1.0 + doc_freq as f64)).ln()
    }

    /// `count / total`, guarded for empty documents
    #[inline]
    pub fn tf_calc(count: u32, total: u64) -> f64 {
        if total == 0 {
            return 0.0;
        }
        count as f64 / total as f64
    }
}

#[inline]
fn cast<N: Float>(value: f64) -> N {
    <N as num::NumCast>::from(value).unwrap_or_else(N::nan)
}

impl<N> TFIDFEngine<N> for DefaultTFIDFEngine
where
    N: Float,
{
    fn tf_vec(freq: &TokenFrequency, vocabulary: &Vocabulary) -> Vec<N> {
        let total = freq.token_sum();
        if total == 0 {
            return vec![N::zero(); vocabulary.len()];
        }
        vocabulary
            .iter()
            .map(|term| cast(Self::tf_calc(freq.token_count(term), total)))
            .collect()
    }

    fn idf_vec(corpus: &Corpus, vocabulary: &Vocabulary) -> Result<Vec<N>> {
        if corpus.is_empty() {
            return Err(TfIdfError::EmptyCorpus);
        }
        let doc_num = corpus.doc_num() as u64;
        Ok(vocabulary
            .iter()
            .map(|term| cast(Self::idf_calc(doc_num, corpus.document_frequency(term))))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cat_dog() -> Corpus {
        Corpus::from_documents([vec!["the", "cat", "sat"], vec!["the", "dog", "ran"]])
    }

    #[test]
    fn idf_matches_smoothed_log_formula() {
        let corpus = cat_dog();
        let vocab = Vocabulary::build(&corpus).unwrap();
        let idf: Vec<f64> = DefaultTFIDFEngine::idf_vec(&corpus, &vocab).unwrap();

        let the = vocab.index_of("the").unwrap();
        let cat = vocab.index_of("cat").unwrap();
        assert!((idf[the] - (2.0f64 / 3.0).ln()).abs() < 1e-12);
        assert!(idf[the] < 0.0, "term in every document stays negative");
        assert_eq!(idf[cat], 0.0);
    }

    #[test]
    fn idf_is_non_increasing_in_document_frequency() {
        let corpus = Corpus::from_documents([
            vec!["common", "rare", "mid"],
            vec!["common", "mid"],
            vec!["common"],
            vec!["common", "mid", "other"],
        ]);
        let vocab = Vocabulary::build(&corpus).unwrap();
        let idf: Vec<f64> = DefaultTFIDFEngine::idf_vec(&corpus, &vocab).unwrap();

        for (i, t1) in vocab.iter().enumerate() {
            for (j, t2) in vocab.iter().enumerate() {
                if corpus.document_frequency(t1) < corpus.document_frequency(t2) {
                    assert!(idf[i] >= idf[j], "idf({t1}) < idf({t2})");
                }
            }
        }
    }

    #[test]
    fn idf_rejects_empty_corpus() {
        let vocab = Vocabulary::default();
        let res: Result<Vec<f64>> = DefaultTFIDFEngine::idf_vec(&Corpus::new(), &vocab);
        assert!(matches!(res, Err(TfIdfError::EmptyCorpus)));
    }

    #[test]
    fn tf_vec_sums_to_one_and_guards_empty_docs() {
        let corpus = cat_dog();
        let vocab = Vocabulary::build(&corpus).unwrap();

        let tf: Vec<f64> = DefaultTFIDFEngine::tf_vec(&corpus.documents()[0], &vocab);
        assert!((tf.iter().sum::<f64>() - 1.0).abs() < 1e-12);
        assert!(tf.iter().all(|v| (0.0..=1.0).contains(v)));

        let empty: Vec<f32> = DefaultTFIDFEngine::tf_vec(&TokenFrequency::new(), &vocab);
        assert_eq!(empty, vec![0.0f32; vocab.len()]);
    }
}
