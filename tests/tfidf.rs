//! End-to-end checks of the public API: raw text in, weight matrix out.

use tf_idf_matrix::{
    compute_inverse_document_frequency, compute_tf_idf, split_documents, Corpus, SplitMode, TFIDFVectorizer,
    TfIdfError, Tokenizer, WeightMatrix,
};

const TEXT: &str = "Machine learning is a fascinating field of artificial intelligence.
Artificial intelligence and machine learning are closely related.
The goal of machine learning is to develop algorithms.
Learning from data is the core principle of machine learning.";

fn corpus() -> Corpus {
    let tokenizer = Tokenizer::with_defaults().unwrap();
    tokenizer.corpus_from(split_documents(TEXT, SplitMode::Sentences))
}

#[test]
fn text_to_matrix_shape_and_order() {
    let corpus = corpus();
    let m = compute_tf_idf(&corpus).unwrap();
    let terms: Vec<&str> = m.vocabulary().iter().collect();

    assert_eq!(m.shape().0, 4);
    let mut sorted = terms.clone();
    sorted.sort();
    assert_eq!(terms, sorted);
    assert!(terms.contains(&"machine"));
    assert!(!terms.iter().any(|t| t.chars().any(|c| c.is_uppercase() || c == '.')));
}

#[test]
fn terms_in_every_sentence_are_penalized() {
    let corpus = corpus();
    let m = compute_tf_idf(&corpus).unwrap();

    // "machine" and "learning" appear in all four sentences: idf = ln(4/5) < 0
    for doc in 0..4 {
        assert!(m.get(doc, "machine").unwrap() < 0.0);
    }
    // "fascinating" appears once: idf = ln(4/2) > 0
    assert!(m.get(0, "fascinating").unwrap() > 0.0);
    assert_eq!(m.get(1, "fascinating"), Some(0.0));
}

#[test]
fn document_frequency_and_idf_are_consistent() {
    let corpus = corpus();
    let vectorizer: TFIDFVectorizer<f64> = TFIDFVectorizer::new(&corpus).unwrap();
    let idf = compute_inverse_document_frequency(&corpus, vectorizer.vocabulary()).unwrap();
    let n = corpus.doc_num() as f64;

    for (term, value) in &idf {
        let df = corpus.document_frequency(term);
        assert!(df >= 1 && df <= corpus.doc_num() as u64);
        assert!((value - (n / (1.0 + df as f64)).ln()).abs() < 1e-12);
    }
}

#[test]
fn cbor_round_trip_of_computed_matrix() {
    let m = compute_tf_idf(&corpus()).unwrap();
    let decoded = WeightMatrix::<f64>::from_cbor(&m.to_cbor().unwrap()).unwrap();
    assert_eq!(decoded, m);
}

#[test]
fn blank_text_yields_empty_corpus_error() {
    let tokenizer = Tokenizer::with_defaults().unwrap();
    let corpus = tokenizer.corpus_from(split_documents(" . \n ", SplitMode::Sentences));

    assert!(matches!(compute_tf_idf(&corpus), Err(TfIdfError::EmptyCorpus)));
}
