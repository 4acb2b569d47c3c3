use bip39::{Mnemonic as Bip39Mnemonic, Language as Bip39Language};
use serde::{Serialize, Deserialize};
use unicode_normalization::UnicodeNormalization;

use crate::error::{SeederError, SeederErrorKind};
use crate::utils::SeederResult;


/// Supported wordlist languages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Language {
    ChineseSimplified,
    ChineseTraditional,
    #[default]
    English,
    French,
    Italian,
    Japanese,
    Spanish,
}


impl Language {
    /// Resolve a language from its tag, e.g. `"chinese_simplified"`.
    pub fn from_tag(tag: &str) -> SeederResult<Self> {
        match tag {
            "chinese_simplified" => Ok(Self::ChineseSimplified),
            "chinese_traditional" => Ok(Self::ChineseTraditional),
            "english" => Ok(Self::English),
            "french" => Ok(Self::French),
            "italian" => Ok(Self::Italian),
            "japanese" => Ok(Self::Japanese),
            "spanish" => Ok(Self::Spanish),
            _ => Err(SeederError::new(
                SeederErrorKind::LanguageUnsupported,
                format!("missing wordlist for language: {}", tag),
            )),
        }
    }

    /// Get the tag of the language.
    pub fn tag(&self) -> &'static str {
        match self {
            Self::ChineseSimplified => "chinese_simplified",
            Self::ChineseTraditional => "chinese_traditional",
            Self::English => "english",
            Self::French => "french",
            Self::Italian => "italian",
            Self::Japanese => "japanese",
            Self::Spanish => "spanish",
        }
    }

    pub(crate) fn bip39(&self) -> Bip39Language {
        match self {
            Self::ChineseSimplified => Bip39Language::SimplifiedChinese,
            Self::ChineseTraditional => Bip39Language::TraditionalChinese,
            Self::English => Bip39Language::English,
            Self::French => Bip39Language::French,
            Self::Italian => Bip39Language::Italian,
            Self::Japanese => Bip39Language::Japanese,
            Self::Spanish => Bip39Language::Spanish,
        }
    }
}


impl std::str::FromStr for Language {
    type Err = SeederError;

    fn from_str(tag: &str) -> SeederResult<Self> {
        Self::from_tag(tag)
    }
}


impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.tag())
    }
}


/// Normalize a seed phrase: NFKD decomposition, trimmed, words separated
/// by single spaces.
pub fn normalize(seed: &str) -> SeederResult<String> {
    let decomposed: String = seed.nfkd().collect();
    let words: Vec<&str> = decomposed.split_whitespace().collect();
    if words.is_empty() {
        return Err(SeederError::new(
            SeederErrorKind::SeedMissing,
            "seed string required".to_string(),
        ));
    }
    Ok(words.join(" "))
}


/// Check a seed phrase against the wordlist and its embedded checksum.
pub fn validate_seed(seed: &str, language: Language) -> SeederResult<()> {
    let normalized = normalize(seed)?;
    Bip39Mnemonic::parse_in_normalized(language.bip39(), &normalized)
        .map(|_| ())
        .map_err(|err| SeederError::new(
            SeederErrorKind::SeedInvalid,
            err.to_string(),
        ))
}


/// Get the ordered 2048-word list for a language.
pub fn wordlist(language: Language) -> &'static [&'static str] {
    language.bip39().words_by_prefix("")
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_tag() {
        assert_eq!(Language::from_tag("english").unwrap(), Language::English);
        assert_eq!(
            Language::from_tag("chinese_simplified").unwrap(),
            Language::ChineseSimplified
        );

        let err = Language::from_tag("klingon").unwrap_err();
        assert_eq!(err.kind(), SeederErrorKind::LanguageUnsupported);
        assert!(err.to_string().contains("klingon"));
    }

    #[test]
    fn test_normalize_collapses_whitespace() {
        let normalized = normalize("  abandon \t ability\n\nable ").unwrap();
        assert_eq!(normalized, "abandon ability able");
    }

    #[test]
    fn test_normalize_decomposes_nfkd() {
        // U+00E9 decomposes into "e" + U+0301
        assert_eq!(normalize("caf\u{e9}").unwrap(), "cafe\u{301}");
    }

    #[test]
    fn test_normalize_requires_seed() {
        for seed in ["", "   ", "\t\n"] {
            let err = normalize(seed).unwrap_err();
            assert_eq!(err.kind(), SeederErrorKind::SeedMissing);
            assert!(err.to_string().contains("seed string required"));
        }
    }

    #[test]
    fn test_validate_seed() {
        // a well-known valid vector (entropy of all zeros)
        let seed = "abandon abandon abandon abandon abandon abandon abandon \
                    abandon abandon abandon abandon about";
        assert!(validate_seed(seed, Language::English).is_ok());

        // swapping the checksum word breaks validation
        let broken = "abandon abandon abandon abandon abandon abandon abandon \
                      abandon abandon abandon abandon abandon";
        let err = validate_seed(broken, Language::English).unwrap_err();
        assert_eq!(err.kind(), SeederErrorKind::SeedInvalid);
    }

    #[test]
    fn test_wordlist() {
        let words = wordlist(Language::English);
        assert_eq!(words.len(), 2048);
        assert_eq!(words[0], "abandon");
    }
}
