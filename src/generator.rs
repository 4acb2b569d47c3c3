use rand::{Rng, CryptoRng};
use bip39::Mnemonic as Bip39Mnemonic;
use serde::{Serialize, Deserialize};

use crate::codec::Language;
use crate::entropy::EntropyInput;
use crate::error::{SeederError, SeederErrorKind};
use crate::utils::{SeederResult, hash_of_buffers};


/// Bit strength of the generated seed material. Each step of 32 bits adds
/// 3 words to the mnemonic phrase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub enum Strength {
    #[default]
    Bits128,
    Bits160,
    Bits192,
    Bits224,
    Bits256,
}


impl Strength {
    /// Strength in bits.
    pub fn bits(&self) -> u32 {
        match self {
            Self::Bits128 => 128,
            Self::Bits160 => 160,
            Self::Bits192 => 192,
            Self::Bits224 => 224,
            Self::Bits256 => 256,
        }
    }

    /// Length of the seed material in bytes.
    pub fn bytes(&self) -> usize {
        (self.bits() / 8) as usize
    }

    /// Number of words in a phrase of this strength.
    pub fn word_count(&self) -> usize {
        (self.bits() / 32 * 3) as usize
    }
}


impl TryFrom<u32> for Strength {
    type Error = SeederError;

    fn try_from(bits: u32) -> SeederResult<Self> {
        match bits {
            128 => Ok(Self::Bits128),
            160 => Ok(Self::Bits160),
            192 => Ok(Self::Bits192),
            224 => Ok(Self::Bits224),
            256 => Ok(Self::Bits256),
            _ => Err(SeederError::new(
                SeederErrorKind::ConfigurationInvalid,
                format!("bit strength must be one of 128, 160, 192, 224, \
                         256, got {}", bits),
            )),
        }
    }
}


impl From<Strength> for u32 {
    fn from(strength: Strength) -> u32 {
        strength.bits()
    }
}


/// Options for random seed generation. The value is never mutated by the
/// generator; the gathering path works on an entropy-populated copy.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerateConfig {
    /// Bit strength of the seed material.
    pub bits: Strength,

    /// Wordlist language of the phrase.
    pub language: Language,

    /// Milliseconds of CPU the collector spends per sample.
    pub work_min: u32,

    /// Caller-supplied entropy. When absent, generation has to gather
    /// entropy from a collector.
    pub entropy: Option<EntropyInput>,
}


impl GenerateConfig {
    /// Copy of the config with the entropy installed.
    pub fn with_entropy(mut self, entropy: EntropyInput) -> Self {
        self.entropy = Some(entropy);
        self
    }
}


impl Default for GenerateConfig {
    fn default() -> Self {
        Self {
            bits: Strength::default(),
            language: Language::default(),
            work_min: 5,
            entropy: None,
        }
    }
}


/// Mnemonic seed phrase carrying an embedded checksum over its seed
/// material (according to BIP39).
#[derive(Debug, Clone)]
pub struct MnemonicSeed(Bip39Mnemonic);


impl MnemonicSeed {
    /// Parse a phrase against the wordlist of `language`, checking the
    /// embedded checksum.
    pub fn from_phrase(phrase: &str, language: Language) -> SeederResult<Self> {
        let normalized = crate::codec::normalize(phrase)?;
        let mnemonic = Bip39Mnemonic
            ::parse_in_normalized(language.bip39(), &normalized)
            .map_err(|err| SeederError::new(
                SeederErrorKind::SeedInvalid,
                err.to_string(),
            ))?;
        Ok(Self(mnemonic))
    }

    /// Get the phrase as a single space-separated string.
    pub fn phrase(&self) -> String {
        self.0.to_string()
    }

    /// Get the words of the phrase.
    pub fn words(&self) -> Vec<String> {
        self.0.words().map(|word| word.to_string()).collect()
    }

    /// Number of words in the phrase.
    pub fn word_count(&self) -> usize {
        self.0.word_count()
    }

    /// Get the seed material the phrase encodes.
    pub fn to_entropy(&self) -> Vec<u8> {
        self.0.to_entropy()
    }
}


impl std::fmt::Display for MnemonicSeed {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}


impl PartialEq for MnemonicSeed {
    fn eq(&self, other: &Self) -> bool {
        self.phrase() == other.phrase()
    }
}


/// Generate a random mnemonic seed from the entropy in `config`. The seed
/// material is the SHA-256 digest over the caller entropy followed by a
/// fresh buffer from `rng`, truncated to the configured strength; neither
/// source determines the phrase on its own.
pub fn random_mnemonic_seed<R: Rng + CryptoRng>(
    config: &GenerateConfig,
    rng: &mut R,
) -> SeederResult<MnemonicSeed> {
    let entropy = config.entropy.as_ref().ok_or_else(|| SeederError::new(
        SeederErrorKind::ConfigurationInvalid,
        "seedCallback required unless config.entropy is provided".to_string(),
    ))?;

    let bytes = config.bits.bytes();
    let mut random_buf = vec![0u8; bytes];
    rng.fill_bytes(&mut random_buf);

    let entropy_bytes = entropy.to_bytes()?;
    let digest = hash_of_buffers(&[&entropy_bytes, &random_buf]);

    // Truncated digest length is valid for every strength (16..=32 bytes)
    let mnemonic = Bip39Mnemonic
        ::from_entropy_in(config.language.bip39(), &digest[..bytes])
        .unwrap();
    Ok(MnemonicSeed(mnemonic))
}


/// Generate a random mnemonic seed, gathering entropy from `collector`
/// when the config carries none. Awaiting the collector is the single
/// suspension point: the samples arrive exactly once and collection
/// cannot be cancelled once started. Generation then retries with an
/// entropy-populated copy of the config.
#[cfg(feature = "collector")]
pub async fn random_mnemonic_seed_gathered<C, R>(
    config: &GenerateConfig,
    collector: &mut C,
    rng: &mut R,
) -> SeederResult<MnemonicSeed>
where
    C: crate::collector::EntropyCollector,
    R: Rng + CryptoRng,
{
    if config.entropy.is_some() {
        return random_mnemonic_seed(config, rng);
    }

    let bits = config.bits.bits().max(128);
    let receiver = collector.gather(bits, config.work_min);
    let values = receiver.await.map_err(|_| SeederError::new(
        SeederErrorKind::Other,
        "entropy collector stopped before delivering samples".to_string(),
    ))?;

    let populated = config.clone()
        .with_entropy(EntropyInput::WordValues(values));
    random_mnemonic_seed(&populated, rng)
}




#[cfg(all(test, feature = "collector"))]
mod collector_tests {
    use super::*;
    use crate::collector::TimingCollector;

    #[tokio::test]
    async fn test_gathered_word_bounds() {
        let config = GenerateConfig { work_min: 1, ..GenerateConfig::default() };
        let mut rng = rand::rng();

        let seed = random_mnemonic_seed_gathered(
            &config, &mut TimingCollector, &mut rng,
        ).await.unwrap();

        let count = seed.word_count();
        assert!(count > 9 && count <= 12);
    }

    #[tokio::test]
    async fn test_gathered_prefers_given_entropy() {
        let config = GenerateConfig {
            work_min: 1,
            ..GenerateConfig::default()
        }.with_entropy(EntropyInput::from("entropy"));
        let mut rng = rand::rng();

        let seed = random_mnemonic_seed_gathered(
            &config, &mut TimingCollector, &mut rng,
        ).await.unwrap();
        assert_eq!(seed.word_count(), 12);
    }
}
