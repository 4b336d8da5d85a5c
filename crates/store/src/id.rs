//! Identifier generation.
//!
//! Ids are 21 characters drawn uniformly from a 64-character URL-safe
//! alphabet, giving 126 bits of randomness. The space is large enough that
//! collisions are assumed not to occur and are not checked for.

use rand::Rng;

const ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789-_";
const ID_LEN: usize = 21;

/// Generate a fresh item identifier.
pub fn generate() -> String {
    let mut rng = rand::thread_rng();
    (0..ID_LEN)
        .map(|_| ALPHABET[rng.gen_range(0..ALPHABET.len())] as char)
        .collect()
}
