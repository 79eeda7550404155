//! Random email addresses: a 10-character `[a-z0-9]` local part at one of a
//! handful of well-known domains.

use rand::Rng;

/// Domains the local part is paired with, picked uniformly.
pub const DOMAINS: [&str; 4] = ["gmail.com", "yahoo.com", "outlook.com", "example.com"];

/// Characters the local part is drawn from (with replacement).
pub const LOCAL_ALPHABET: &[u8; 36] = b"abcdefghijklmnopqrstuvwxyz0123456789";

pub const LOCAL_PART_LEN: usize = 10;

/// Generate one email address from the given random source.
///
/// Uniqueness is not tracked; two calls may return the same address.
pub fn generate_email<R: Rng + ?Sized>(rng: &mut R) -> String {
    let mut email = String::with_capacity(LOCAL_PART_LEN + 1 + "outlook.com".len());
    for _ in 0..LOCAL_PART_LEN {
        let idx = rng.random_range(0..LOCAL_ALPHABET.len());
        email.push(LOCAL_ALPHABET[idx] as char);
    }
    email.push('@');
    email.push_str(DOMAINS[rng.random_range(0..DOMAINS.len())]);
    email
}

/// Generate one email address from the thread-local generator.
pub fn random_email() -> String {
    generate_email(&mut rand::rng())
}
