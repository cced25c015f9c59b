//! Short code generation.
//!
//! Codes are drawn from a 64-character URL-safe alphabet using the OS random
//! number generator, so collision probability stays negligible at expected
//! volume and collisions that do occur are caught by the database unique
//! constraint.

/// Length of generated short codes.
pub const CODE_LENGTH: usize = 7;

/// URL-safe alphabet. Exactly 64 characters so a masked random byte maps
/// uniformly onto it.
const CODE_ALPHABET: &[u8; 64] =
    b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789-_";

/// Generates a cryptographically secure random short code.
///
/// Uses `getrandom` for entropy and maps each byte onto the URL-safe
/// alphabet, producing a 7-character code.
///
/// # Panics
///
/// Panics if the system random number generator fails (extremely rare).
///
/// # Examples
///
/// ```ignore
/// let code = generate_code();
/// assert_eq!(code.len(), 7);
/// assert!(code.chars().all(|c| c.is_alphanumeric() || c == '-' || c == '_'));
/// ```
pub fn generate_code() -> String {
    let mut buffer = [0u8; CODE_LENGTH];

    getrandom::fill(&mut buffer).expect("Failed to generate random bytes");

    buffer
        .iter()
        .map(|&b| CODE_ALPHABET[(b & 0x3f) as usize] as char)
        .collect()
}
