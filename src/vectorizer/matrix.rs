use std::{cmp::Ordering, fmt};

use indexmap::IndexMap;
use num::Float;
use serde::Serialize;

use crate::{error::{Result, TfIdfError}, vectorizer::vocabulary::Vocabulary};

/// TF-IDF weights, documents × vocabulary terms.
///
/// Rows follow corpus order and columns follow vocabulary order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeightMatrix<N = f64> {
    pub(crate) vocabulary: Vocabulary,
    pub(crate) rows: Vec<Vec<N>>,
}

impl<N> WeightMatrix<N>
where
    N: Float,
{
    /// Assemble a matrix, checking every row against the vocabulary width
    pub fn new(vocabulary: Vocabulary, rows: Vec<Vec<N>>) -> Result<Self> {
        for (row, values) in rows.iter().enumerate() {
            if values.len() != vocabulary.len() {
                return Err(TfIdfError::Shape {
                    row,
                    expected: vocabulary.len(),
                    found: values.len(),
                });
            }
        }
        Ok(Self { vocabulary, rows })
    }

    /// (documents, terms)
    #[inline]
    pub fn shape(&self) -> (usize, usize) {
        (self.rows.len(), self.vocabulary.len())
    }

    #[inline]
    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    #[inline]
    pub fn rows(&self) -> &[Vec<N>] {
        &self.rows
    }

    #[inline]
    pub fn row(&self, doc: usize) -> Option<&[N]> {
        self.rows.get(doc).map(|r| r.as_slice())
    }

    /// Weight of `term` in document `doc`
    /// `None` if the document index is out of range or the term is not in the vocabulary.
    pub fn get(&self, doc: usize, term: &str) -> Option<N> {
        let col = self.vocabulary.index_of(term)?;
        self.rows.get(doc).map(|r| r[col])
    }

    /// One document as term → weight, in vocabulary order
    pub fn row_map(&self, doc: usize) -> Option<IndexMap<String, N>> {
        let row = self.rows.get(doc)?;
        Some(
            self.vocabulary
                .iter()
                .zip(row.iter())
                .map(|(term, &w)| (term.to_string(), w))
                .collect(),
        )
    }

    /// Weights of `term` across all documents
    pub fn column(&self, term: &str) -> Option<Vec<N>> {
        let col = self.vocabulary.index_of(term)?;
        Some(self.rows.iter().map(|r| r[col]).collect())
    }

    /// The `n` highest weighted terms of document `doc`, descending.
    /// NaN weights are skipped; equal weights keep vocabulary order.
    pub fn top_terms(&self, doc: usize, n: usize) -> Vec<(&str, N)> {
        let Some(row) = self.rows.get(doc) else {
            return Vec::new();
        };
        let mut hits: Vec<(&str, N)> = self
            .vocabulary
            .iter()
            .zip(row.iter().copied())
            .filter(|(_, w)| !w.is_nan())
            .collect();
        hits.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal));
        hits.truncate(n);
        hits
    }
}

/// Table printout, one row per document:
/// ```text
///                 cat       dog ...
/// Document 1 0.000000  0.000000 ...
/// ```
impl<N> fmt::Display for WeightMatrix<N>
where
    N: Float + fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let precision = f.precision().unwrap_or(6);
        let labels: Vec<String> = (1..=self.rows.len()).map(|i| format!("Document {i}")).collect();
        let label_width = labels.iter().map(String::len).max().unwrap_or(0);

        let cells: Vec<Vec<String>> = self
            .rows
            .iter()
            .map(|row| row.iter().map(|w| format!("{w:.precision$}")).collect())
            .collect();
        let widths: Vec<usize> = self
            .vocabulary
            .iter()
            .enumerate()
            .map(|(col, term)| {
                cells
                    .iter()
                    .map(|row| row[col].len())
                    .chain(std::iter::once(term.chars().count()))
                    .max()
                    .unwrap_or(0)
            })
            .collect();

        write!(f, "{:label_width$}", "")?;
        for (term, width) in self.vocabulary.iter().zip(widths.iter().copied()) {
            write!(f, "  {term:>width$}")?;
        }
        writeln!(f)?;
        for (label, row) in labels.iter().zip(&cells) {
            write!(f, "{label:<label_width$}")?;
            for (cell, width) in row.iter().zip(widths.iter().copied()) {
                write!(f, "  {cell:>width$}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
