use pbkdf2::pbkdf2_hmac;
use sha2::Sha512;
use unicode_normalization::UnicodeNormalization;

use crate::codec::normalize;
use crate::utils::SeederResult;


/// PBKDF2 round count fixed by the BIP39 standard.
const STRETCH_ROUNDS: u32 = 2048;

/// Salt prefix fixed by the BIP39 standard.
const SALT_PREFIX: &str = "mnemonic";


/// Stretch a mnemonic seed phrase into 64 bytes of key material with
/// PBKDF2-HMAC-SHA512. All passphrases are valid and a missing one counts
/// as the empty string, but only a consistent passphrase reproduces the
/// same bytes; lost passphrases are not recoverable. The phrase checksum
/// is not verified here, run `codec::validate_seed` first when that
/// matters.
pub fn mnemonic_to_seed(
    mnemonic_seed: &str,
    passphrase: Option<&str>,
) -> SeederResult<[u8; 64]> {
    let normalized = normalize(mnemonic_seed)?;
    let passphrase: String = passphrase.unwrap_or("").nfkd().collect();
    let salt = format!("{}{}", SALT_PREFIX, passphrase);

    let mut seed = [0u8; 64];
    pbkdf2_hmac::<Sha512>(
        normalized.as_bytes(),
        salt.as_bytes(),
        STRETCH_ROUNDS,
        &mut seed,
    );
    Ok(seed)
}
