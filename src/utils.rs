use sha2::{Sha256, Digest};

use crate::error::SeederError;


/// Result to manage seeder errors.
pub type SeederResult<T> = Result<T, SeederError>;


/// Get SHA-256 hash over a sequence of byte buffers fed in order.
pub fn hash_of_buffers(buffers: &[&[u8]]) -> [u8; 32] {
    let mut hasher = Sha256::new();
    for buffer in buffers {
        hasher.update(buffer);
    }
    hasher.finalize().into()
}
