use num::Float;
use serde::{de::DeserializeOwned, Deserialize, Serialize};

use crate::{error::Result, vectorizer::{matrix::WeightMatrix, vocabulary::Vocabulary}};

/// Deserialization target for [`WeightMatrix`].
/// The vocabulary is already checked for order while decoding; the rows
/// still go through `into_weight_matrix`, which checks each one against it.
#[derive(Debug, Deserialize)]
pub struct WeightMatrixData<N = f64> {
    pub vocabulary: Vocabulary,
    pub rows: Vec<Vec<N>>,
}

impl<N> WeightMatrixData<N>
where
    N: Float,
{
    pub fn into_weight_matrix(self) -> Result<WeightMatrix<N>> {
        WeightMatrix::new(self.vocabulary, self.rows)
    }
}

impl<N> WeightMatrix<N>
where
    N: Float + Serialize + DeserializeOwned,
{
    /// Encode as CBOR
    pub fn to_cbor(&self) -> Result<Vec<u8>> {
        Ok(serde_cbor::to_vec(self)?)
    }

    /// Decode from CBOR, validating the shape
    pub fn from_cbor(bytes: &[u8]) -> Result<Self> {
        let data: WeightMatrixData<N> = serde_cbor::from_slice(bytes)?;
        data.into_weight_matrix()
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json(text: &str) -> Result<Self> {
        let data: WeightMatrixData<N> = serde_json::from_str(text)?;
        data.into_weight_matrix()
    }
}
