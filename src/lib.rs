pub mod utils;
pub mod error;
pub mod entropy;
pub mod codec;
pub mod generator;
pub mod stretch;

#[cfg(feature = "collector")]
pub mod collector;

pub use bip39;

pub use codec::Language;
pub use entropy::EntropyInput;
pub use generator::{GenerateConfig, MnemonicSeed, Strength, random_mnemonic_seed};
pub use stretch::mnemonic_to_seed;

#[cfg(feature = "collector")]
pub use generator::random_mnemonic_seed_gathered;
