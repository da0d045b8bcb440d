use std::borrow::Cow;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::TfIdfError;

/// Lower-cased form of `token`, borrowed when it is already lower-case.
/// Tokens compare equal when their normalized forms are equal.
#[inline]
pub(crate) fn normalize_token(token: &str) -> Cow<'_, str> {
    if token.chars().any(|c| c.to_lowercase().ne(std::iter::once(c))) {
        Cow::Owned(token.to_lowercase())
    } else {
        Cow::Borrowed(token)
    }
}

/// TokenFrequency
/// Bag-of-tokens view of a single document.
/// Keeps the occurrence count of every token and the total token count,
/// which is all TF needs (token order inside a document is irrelevant).
///
/// # Examples
/// ```
/// use tf_idf_matrix::TokenFrequency;
/// let mut freq = TokenFrequency::new();
/// freq.add_tokens(&["The", "cat", "the"]);
///
/// assert_eq!(freq.token_count("the"), 2);
/// assert_eq!(freq.token_sum(), 3);
/// ```
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(try_from = "TokenFrequencyData")]
pub struct TokenFrequency {
    #[serde(serialize_with = "indexmap::map::serde_seq::serialize")]
    token_count: IndexMap<String, u32>,
    total_token_count: u64,
}

/// Decoding target for `TokenFrequency`, checked before use
#[derive(Deserialize)]
struct TokenFrequencyData {
    #[serde(deserialize_with = "indexmap::map::serde_seq::deserialize")]
    token_count: IndexMap<String, u32>,
    total_token_count: u64,
}

impl TryFrom<TokenFrequencyData> for TokenFrequency {
    type Error = TfIdfError;

    /// Rebuilds the counts under normalized keys.
    /// Zero counts and a total that differs from the sum of counts are rejected.
    fn try_from(data: TokenFrequencyData) -> Result<Self, Self::Error> {
        let mut freq = TokenFrequency::new();
        for (token, count) in data.token_count {
            if count == 0 {
                return Err(TfIdfError::InvalidDocument(format!("token {token:?} has a zero count")));
            }
            *freq.token_count.entry(normalize_token(&token).into_owned()).or_insert(0) += count;
            freq.total_token_count += count as u64;
        }
        if freq.total_token_count != data.total_token_count {
            return Err(TfIdfError::InvalidDocument(format!(
                "total_token_count is {} but the counts sum to {}",
                data.total_token_count, freq.total_token_count
            )));
        }
        Ok(freq)
    }
}

/// Adding tokens
impl TokenFrequency {
    /// Create an empty TokenFrequency
    pub fn new() -> Self {
        TokenFrequency {
            token_count: IndexMap::new(),
            total_token_count: 0,
        }
    }

    /// Add one token
    /// Tokens are stored lower-cased, so `"The"` and `"the"` share one count.
    ///
    /// # Arguments
    /// * `token` - token to count
    #[inline]
    pub fn add_token(&mut self, token: &str) -> &mut Self {
        let count = self.token_count.entry(normalize_token(token).into_owned()).or_insert(0);
        *count += 1;
        self.total_token_count += 1;
        self
    }

    /// Add several tokens
    ///
    /// # Arguments
    /// * `tokens` - tokens to count
    #[inline]
    pub fn add_tokens<T>(&mut self, tokens: &[T]) -> &mut Self
    where
        T: AsRef<str>,
    {
        for token in tokens {
            self.add_token(token.as_ref());
        }
        self
    }
}

/// Term frequency
impl TokenFrequency {
    /// Relative frequency of `token` in this document: `count / token_sum`.
    ///
    /// An empty document has TF 0 for every token instead of `0 / 0`.
    #[inline]
    pub fn tf_token(&self, token: &str) -> f64 {
        if self.total_token_count == 0 {
            return 0.0;
        }
        self.token_count(token) as f64 / self.total_token_count as f64
    }
}

/// Statistics
impl TokenFrequency {
    /// Occurrence count of `token` in any casing (0 when absent)
    #[inline]
    pub fn token_count(&self, token: &str) -> u32 {
        *self.token_count.get(&*normalize_token(token)).unwrap_or(&0)
    }

    /// Total number of tokens in the document, duplicates included
    #[inline]
    pub fn token_sum(&self) -> u64 {
        self.total_token_count
    }

    /// Number of distinct tokens
    #[inline]
    pub fn token_num(&self) -> usize {
        self.token_count.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.total_token_count == 0
    }

    #[inline]
    pub fn contains_token(&self, token: &str) -> bool {
        self.token_count.contains_key(&*normalize_token(token))
    }

    /// Distinct tokens in first-seen order
    #[inline]
    pub fn token_set_ref_str(&self) -> Vec<&str> {
        self.token_count.keys().map(|s| s.as_str()).collect()
    }

    /// (token, count) pairs in first-seen order
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> {
        self.token_count.iter().map(|(token, &count)| (token.as_str(), count))
    }

    /// Most frequent tokens
    /// All tokens sharing the maximum count are returned.
    ///
    /// # Returns
    /// * `Vec<(String, u32)>` - tokens and their count
    #[inline]
    pub fn most_frequent_tokens_vector(&self) -> Vec<(String, u32)> {
        let max_count = self.most_frequent_token_count();
        if max_count == 0 {
            return Vec::new();
        }
        self.token_count
            .iter()
            .filter(|&(_, &count)| count == max_count)
            .map(|(token, &count)| (token.clone(), count))
            .collect()
    }

    /// Count of the most frequent token (0 for an empty document)
    #[inline]
    pub fn most_frequent_token_count(&self) -> u32 {
        self.token_count.values().copied().max().unwrap_or(0)
    }

    /// Tokens that occur exactly once, in first-seen order
    #[inline]
    pub fn hapaxes(&self) -> Vec<&str> {
        self.token_count
            .iter()
            .filter(|&(_, &count)| count == 1)
            .map(|(token, _)| token.as_str())
            .collect()
    }

    /// Tokens sorted by descending count
    /// Ties are broken by dictionary order so the listing is deterministic.
    #[inline]
    pub fn sorted_frequency_vector(&self) -> Vec<(String, u32)> {
        let mut token_list: Vec<(String, u32)> = self
            .token_count
            .iter()
            .map(|(token, &count)| (token.clone(), count))
            .collect();

        token_list.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        token_list
    }

    /// Token diversity
    /// 1.0 means every token is distinct, values near 0.0 mean heavy repetition.
    #[inline]
    pub fn unique_token_ratio(&self) -> f64 {
        if self.total_token_count == 0 {
            return 0.0;
        }
        self.token_count.len() as f64 / self.total_token_count as f64
    }
}

impl<S> FromIterator<S> for TokenFrequency
where
    S: AsRef<str>,
{
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut freq = TokenFrequency::new();
        for token in iter {
            freq.add_token(token.as_ref());
        }
        freq
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_duplicates_and_total() {
        let mut freq = TokenFrequency::new();
        freq.add_tokens(&["a", "a", "b"]);

        assert_eq!(freq.token_count("a"), 2);
        assert_eq!(freq.token_count("b"), 1);
        assert_eq!(freq.token_count("c"), 0);
        assert_eq!(freq.token_sum(), 3);
        assert_eq!(freq.token_num(), 2);
    }

    #[test]
    fn mixed_case_tokens_share_one_count() {
        let freq: TokenFrequency = ["The", "THE", "the", "Cat"].into_iter().collect();

        assert_eq!(freq.token_num(), 2);
        assert_eq!(freq.token_count("the"), 3);
        assert_eq!(freq.token_count("ThE"), 3);
        assert!(freq.contains_token("CAT"));
        assert_eq!(freq.token_set_ref_str(), vec!["the", "cat"]);
        assert!((freq.tf_token("The") - 0.75).abs() < 1e-12);
    }

    #[test]
    fn normalize_token_borrows_lowercase_input() {
        assert!(matches!(normalize_token("київ"), Cow::Borrowed("київ")));
        assert_eq!(normalize_token("Київ"), "київ");
    }

    #[test]
    fn serializes_counts_as_pairs() {
        let freq: TokenFrequency = ["a", "b", "a"].into_iter().collect();
        let json = serde_json::to_string(&freq).unwrap();

        assert_eq!(json, r#"{"token_count":[["a",2],["b",1]],"total_token_count":3}"#);
        assert_eq!(serde_json::from_str::<TokenFrequency>(&json).unwrap(), freq);
    }

    #[test]
    fn decoding_rejects_total_that_disagrees_with_counts() {
        let err = serde_json::from_str::<TokenFrequency>(r#"{"token_count":[["a",5]],"total_token_count":1}"#)
            .unwrap_err();
        assert!(err.to_string().contains("counts sum to 5"), "{err}");

        let err = serde_json::from_str::<TokenFrequency>(r#"{"token_count":[["a",0]],"total_token_count":0}"#)
            .unwrap_err();
        assert!(err.to_string().contains("zero count"), "{err}");
    }

    #[test]
    fn decoding_merges_keys_that_differ_only_in_case() {
        let freq: TokenFrequency =
            serde_json::from_str(r#"{"token_count":[["The",1],["the",2]],"total_token_count":3}"#).unwrap();

        assert_eq!(freq.token_num(), 1);
        assert_eq!(freq.token_count("the"), 3);
        assert!((freq.tf_token("the") - 1.0).abs() < 1e-12);
    }

    #[test]
    fn tf_token_is_relative_frequency() {
        let freq: TokenFrequency = ["a", "a", "b"].into_iter().collect();

        assert!((freq.tf_token("a") - 2.0 / 3.0).abs() < 1e-12);
        assert!((freq.tf_token("b") - 1.0 / 3.0).abs() < 1e-12);
        assert_eq!(freq.tf_token("missing"), 0.0);
    }

    #[test]
    fn tf_token_on_empty_document_is_zero() {
        let freq = TokenFrequency::new();
        let tf = freq.tf_token("anything");

        assert_eq!(tf, 0.0);
        assert!(!tf.is_nan());
        assert!(freq.is_empty());
    }

    #[test]
    fn hapaxes_and_most_frequent() {
        let freq: TokenFrequency = ["to", "be", "or", "not", "to", "be"].into_iter().collect();

        assert_eq!(freq.hapaxes(), vec!["or", "not"]);
        assert_eq!(freq.most_frequent_token_count(), 2);
        assert_eq!(
            freq.most_frequent_tokens_vector(),
            vec![("to".to_string(), 2), ("be".to_string(), 2)]
        );
        assert_eq!(
            freq.sorted_frequency_vector()[0],
            ("be".to_string(), 2),
            "ties fall back to dictionary order"
        );
        assert!(TokenFrequency::new().most_frequent_tokens_vector().is_empty());
    }

    #[test]
    fn unique_token_ratio_measures_repetition() {
        let distinct: TokenFrequency = ["x", "y", "z"].into_iter().collect();
        let repeated: TokenFrequency = ["y", "y", "y", "y"].into_iter().collect();

        assert!((distinct.unique_token_ratio() - 1.0).abs() < 1e-12);
        assert!((repeated.unique_token_ratio() - 0.25).abs() < 1e-12);
        assert_eq!(TokenFrequency::new().unique_token_ratio(), 0.0);
    }
}
