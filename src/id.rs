//! Short random URL-safe id generation.

use rand::Rng;

const ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789_-";
const ID_LEN: usize = 10;

/// Generate a 10-character id over `[A-Za-z0-9_-]`.
///
/// Uniqueness is probabilistic (64^10 keyspace); collisions are not
/// detected here.
pub fn generate_id() -> String {
    let mut rng = rand::thread_rng();
    (0..ID_LEN)
        .map(|_| ALPHABET[rng.gen_range(0..ALPHABET.len())] as char)
        .collect()
}
