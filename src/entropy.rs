use serde::{Serialize, Deserialize};

use crate::error::{SeederError, SeederErrorKind};
use crate::utils::SeederResult;


/// Caller-supplied randomness in one of the recognized shapes. Variants are
/// normalized to a canonical byte sequence before mixing, so the semantic
/// origin of the entropy does not matter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EntropyInput {
    /// Arbitrary text, hashed as its UTF-8 bytes.
    Text(String),

    /// Independent 32-bit entropy units, e.g. timing counters. Values may
    /// exceed the byte range, so each one keeps all 4 of its bytes.
    WordValues(Vec<u32>),

    /// Raw bytes.
    Raw(Vec<u8>),
}


impl EntropyInput {
    /// Interpret a loosely-typed JSON value as entropy: a string becomes
    /// `Text`, an array of integers becomes `WordValues`. Any other shape
    /// is rejected.
    pub fn from_json_value(value: serde_json::Value) -> SeederResult<Self> {
        serde_json::from_value(value).map_err(|_| SeederError::new(
            SeederErrorKind::EntropyTypeInvalid,
            "entropy parameter must be a string, buffer, or array".to_string(),
        ))
    }

    /// Check if the entropy holds no data at all.
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Text(text) => text.is_empty(),
            Self::WordValues(values) => values.is_empty(),
            Self::Raw(bytes) => bytes.is_empty(),
        }
    }

    /// Normalize to the canonical byte sequence used for mixing. Word
    /// values are laid out as 4 little-endian bytes each.
    pub fn to_bytes(&self) -> SeederResult<Vec<u8>> {
        if self.is_empty() {
            return Err(SeederError::new(
                SeederErrorKind::EntropyTypeInvalid,
                "entropy parameter must be a non-empty string, buffer, or array"
                    .to_string(),
            ));
        }
        let bytes = match self {
            Self::Text(text) => text.as_bytes().to_vec(),
            Self::WordValues(values) => {
                values.iter().flat_map(|value| value.to_le_bytes()).collect()
            },
            Self::Raw(bytes) => bytes.clone(),
        };
        Ok(bytes)
    }
}


impl From<&str> for EntropyInput {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}


impl From<Vec<u8>> for EntropyInput {
    fn from(bytes: Vec<u8>) -> Self {
        Self::Raw(bytes)
    }
}


impl From<Vec<u32>> for EntropyInput {
    fn from(values: Vec<u32>) -> Self {
        Self::WordValues(values)
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_word_values_little_endian() {
        let entropy = EntropyInput::WordValues(vec![1, 0x0102_0304]);
        let bytes = entropy.to_bytes().unwrap();
        assert_eq!(bytes, vec![1, 0, 0, 0, 4, 3, 2, 1]);
    }

    #[test]
    fn test_word_values_keep_high_bits() {
        // values over 255 must not collapse to a single byte
        let entropy = EntropyInput::WordValues(vec![1000, 70000]);
        assert_eq!(entropy.to_bytes().unwrap().len(), 8);
    }

    #[test]
    fn test_text_and_raw_pass_through() {
        let text = EntropyInput::from("entropy");
        assert_eq!(text.to_bytes().unwrap(), b"entropy".to_vec());

        let raw = EntropyInput::from(vec![0u8, 255]);
        assert_eq!(raw.to_bytes().unwrap(), vec![0, 255]);
    }

    #[test]
    fn test_empty_entropy_rejected() {
        for entropy in [
            EntropyInput::Text(String::new()),
            EntropyInput::WordValues(Vec::new()),
            EntropyInput::Raw(Vec::new()),
        ] {
            let err = entropy.to_bytes().unwrap_err();
            assert_eq!(err.kind(), SeederErrorKind::EntropyTypeInvalid);
            assert!(err.to_string().contains("string, buffer, or array"));
        }
    }

    #[test]
    fn test_from_json_value_shapes() {
        let text = EntropyInput::from_json_value(json!("entropy")).unwrap();
        assert_eq!(text, EntropyInput::Text("entropy".to_string()));

        let values = EntropyInput::from_json_value(json!([0, 1000, 70000]))
            .unwrap();
        assert_eq!(values, EntropyInput::WordValues(vec![0, 1000, 70000]));
    }

    #[test]
    fn test_from_json_value_rejects_other_shapes() {
        for value in [json!(2), json!(true), json!({"a": 1}), json!(null)] {
            let err = EntropyInput::from_json_value(value).unwrap_err();
            assert_eq!(err.kind(), SeederErrorKind::EntropyTypeInvalid);
            assert!(err.to_string().contains("string, buffer, or array"));
        }
    }
}
