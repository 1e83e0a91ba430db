//! Password Hashing and Verification
//!
//! NIST SP 800-63B compliant password handling with:
//! - Argon2id hashing (memory-hard, recommended by OWASP)
//! - Zeroization of sensitive data
//! - Optional HIBP (Have I Been Pwned) breach checking
//!
//! Signup is the only caller today: it validates the raw password,
//! hashes it with an optional application pepper, and stores the PHC
//! string alongside the screened email.

use std::fmt;

use argon2::{Argon2, PasswordHash, PasswordHasher, PasswordVerifier, password_hash::SaltString};
use rand::rngs::OsRng;
use sha1::{Digest, Sha1};
use thiserror::Error;
use unicode_normalization::UnicodeNormalization;
use zeroize::{Zeroize, ZeroizeOnDrop};

// ============================================================================
// Constants (NIST SP 800-63B compliant)
// ============================================================================

/// Minimum password length (NIST: SHALL be at least 8)
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// Maximum password length (NIST: SHOULD permit at least 64)
pub const MAX_PASSWORD_LENGTH: usize = 128;

/// HIBP API endpoint (k-Anonymity model)
const HIBP_API_URL: &str = "https://api.pwnedpasswords.com/range/";

// ============================================================================
// Error Types
// ============================================================================

/// Password policy violation errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PasswordPolicyError {
    /// Password is too short
    #[error("Password must be at least {min} characters (got {actual})")]
    TooShort { min: usize, actual: usize },

    /// Password is too long
    #[error("Password must be at most {max} characters (got {actual})")]
    TooLong { max: usize, actual: usize },

    /// Password has been compromised in a data breach
    #[error("This password has been compromised in a data breach")]
    Compromised,

    /// Password contains only whitespace
    #[error("Password cannot be empty or contain only whitespace")]
    EmptyOrWhitespace,

    /// Password contains invalid characters (control characters)
    #[error("Password contains invalid control characters")]
    InvalidCharacter,

    /// Password matches common patterns (repeated, sequential, dictionary)
    #[error("Password is too common or follows a predictable pattern")]
    CommonPattern,
}

/// Password hashing/verification errors
#[derive(Debug, Error)]
pub enum PasswordHashError {
    /// Hashing operation failed
    #[error("Password hashing failed: {0}")]
    HashingFailed(String),

    /// Invalid hash format
    #[error("Invalid password hash format")]
    InvalidHashFormat,

    /// HIBP API check failed (non-fatal, logged)
    #[error("Breach check failed: {0}")]
    BreachCheckFailed(String),
}

// ============================================================================
// Clear Text Password (Zeroized on drop)
// ============================================================================

/// Clear text password with automatic memory zeroization
///
/// ## Security
/// - Implements `Zeroize` and `ZeroizeOnDrop`
/// - Does not implement `Clone` to prevent accidental copies
/// - Debug output is redacted
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct ClearTextPassword(String);

impl ClearTextPassword {
    /// Create a new clear text password with validation
    ///
    /// Validates against NIST SP 800-63B requirements:
    /// - Minimum 8 characters, maximum 128 (counted in code points)
    /// - No control characters
    /// - Not empty/whitespace only
    /// - Not an obviously predictable pattern
    ///
    /// Unicode is normalized using NFKC before validation.
    pub fn new(raw: String) -> Result<Self, PasswordPolicyError> {
        // NIST: Unicode NFKC normalization before processing
        let normalized: String = raw.nfkc().collect();

        let trimmed = normalized.trim();
        if trimmed.is_empty() {
            return Err(PasswordPolicyError::EmptyOrWhitespace);
        }

        // NIST: count Unicode code points, not bytes
        let char_count = normalized.chars().count();

        if char_count < MIN_PASSWORD_LENGTH {
            return Err(PasswordPolicyError::TooShort {
                min: MIN_PASSWORD_LENGTH,
                actual: char_count,
            });
        }

        if char_count > MAX_PASSWORD_LENGTH {
            return Err(PasswordPolicyError::TooLong {
                max: MAX_PASSWORD_LENGTH,
                actual: char_count,
            });
        }

        // Control characters other than space/tab/newline are rejected
        for ch in normalized.chars() {
            if ch.is_control() && ch != ' ' && ch != '\t' && ch != '\n' {
                return Err(PasswordPolicyError::InvalidCharacter);
            }
        }

        if is_common_pattern(&normalized) {
            return Err(PasswordPolicyError::CommonPattern);
        }

        Ok(Self(normalized))
    }

    /// Create without validation
    ///
    /// ## Safety
    /// Only use this for testing or when password has already been validated
    #[cfg(test)]
    pub fn new_unchecked(raw: String) -> Self {
        Self(raw)
    }

    /// Get the password as bytes for hashing
    pub(crate) fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }

    /// Hash the password using Argon2id
    ///
    /// ## Arguments
    /// * `pepper` - Optional application-wide secret for additional security
    ///
    /// ## Returns
    /// PHC-formatted hash string wrapped in `HashedPassword`
    pub fn hash(&self, pepper: Option<&[u8]>) -> Result<HashedPassword, PasswordHashError> {
        let password_bytes = match pepper {
            Some(p) => {
                let mut combined = self.as_bytes().to_vec();
                combined.extend_from_slice(p);
                combined
            }
            None => self.as_bytes().to_vec(),
        };

        // Random 128-bit salt
        let salt = SaltString::generate(OsRng);

        // OWASP recommended Argon2id defaults: m=19456 (19 MiB), t=2, p=1
        let argon2 = Argon2::default();

        let hash = argon2
            .hash_password(&password_bytes, &salt)
            .map_err(|e| PasswordHashError::HashingFailed(e.to_string()))?;

        Ok(HashedPassword {
            hash: hash.to_string(),
        })
    }

    /// Check if password has been compromised using HIBP API
    ///
    /// Uses the k-Anonymity model:
    /// 1. Hash password with SHA-1
    /// 2. Send only first 5 characters of the hex hash
    /// 3. Check if the full hash suffix appears in the response
    ///
    /// ## Returns
    /// - `Ok(true)` if the password is known-compromised
    /// - `Ok(false)` if not found in breaches
    /// - `Err(_)` if the API check failed (treat as non-blocking)
    pub async fn check_breach(&self) -> Result<bool, PasswordHashError> {
        let mut hasher = Sha1::new();
        hasher.update(self.as_bytes());
        let hash = hasher.finalize();
        let hash_hex = hex_encode_upper(&hash);

        // k-Anonymity: only the 5-char prefix leaves the process
        let prefix = &hash_hex[..5];
        let suffix = &hash_hex[5..];

        let url = format!("{}{}", HIBP_API_URL, prefix);
        let response = reqwest::get(&url)
            .await
            .map_err(|e| PasswordHashError::BreachCheckFailed(e.to_string()))?;

        if !response.status().is_success() {
            return Err(PasswordHashError::BreachCheckFailed(format!(
                "API returned status: {}",
                response.status()
            )));
        }

        let body = response
            .text()
            .await
            .map_err(|e| PasswordHashError::BreachCheckFailed(e.to_string()))?;

        // Response lines: SUFFIX:COUNT
        for line in body.lines() {
            if let Some((hash_suffix, _count)) = line.split_once(':') {
                if hash_suffix.eq_ignore_ascii_case(suffix) {
                    return Ok(true);
                }
            }
        }

        Ok(false)
    }
}

impl fmt::Debug for ClearTextPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ClearTextPassword")
            .field(&"[REDACTED]")
            .finish()
    }
}

// ============================================================================
// Hashed Password (Safe to store)
// ============================================================================

/// Hashed password in PHC string format
///
/// Stores the Argon2id hash in PHC format (algorithm identifier, version,
/// parameters, salt, hash).
#[derive(Clone, PartialEq, Eq)]
pub struct HashedPassword {
    hash: String,
}

impl HashedPassword {
    /// Create from PHC string (e.g., from database)
    pub fn from_phc_string(s: impl Into<String>) -> Result<Self, PasswordHashError> {
        let hash = s.into();

        // Validate it's a valid PHC string
        PasswordHash::new(&hash).map_err(|_| PasswordHashError::InvalidHashFormat)?;

        Ok(Self { hash })
    }

    /// Get the PHC string for storage
    pub fn as_phc_string(&self) -> &str {
        &self.hash
    }

    /// Verify a password against this hash
    ///
    /// ## Arguments
    /// * `password` - The clear text password to verify
    /// * `pepper` - Optional pepper (must match the one used during hashing)
    pub fn verify(&self, password: &ClearTextPassword, pepper: Option<&[u8]>) -> bool {
        let password_bytes = match pepper {
            Some(p) => {
                let mut combined = password.as_bytes().to_vec();
                combined.extend_from_slice(p);
                combined
            }
            None => password.as_bytes().to_vec(),
        };

        let parsed_hash = match PasswordHash::new(&self.hash) {
            Ok(h) => h,
            Err(_) => return false,
        };

        let argon2 = Argon2::default();

        // Argon2 uses constant-time comparison internally
        argon2
            .verify_password(&password_bytes, &parsed_hash)
            .is_ok()
    }
}

impl fmt::Debug for HashedPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HashedPassword")
            .field("hash", &"[HASH]")
            .finish()
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

/// Check for common weak patterns
fn is_common_pattern(password: &str) -> bool {
    let lower = password.to_lowercase();

    // All same character (e.g., "aaaaaaaa")
    let mut chars = lower.chars();
    if let Some(first) = chars.next() {
        if chars.all(|c| c == first) {
            return true;
        }
    }

    // Sequential digits (e.g., "12345678")
    if is_sequential_numbers(&lower) {
        return true;
    }

    // Extremely common passwords
    const COMMON_PASSWORDS: &[&str] = &[
        "password",
        "password1",
        "password123",
        "12345678",
        "123456789",
        "1234567890",
        "qwertyuiop",
        "letmein",
        "welcome1",
        "admin123",
        "iloveyou",
        "trustno1",
    ];

    COMMON_PASSWORDS.contains(&lower.as_str())
}

/// Check if string is entirely sequential digits (ascending or descending)
fn is_sequential_numbers(s: &str) -> bool {
    let digits: Vec<u32> = s.chars().filter_map(|c| c.to_digit(10)).collect();

    if digits.len() < 4 || digits.len() != s.chars().count() {
        return false;
    }

    let is_ascending = digits
        .windows(2)
        .all(|w| w[1] == w[0] + 1 || (w[0] == 9 && w[1] == 0));

    let is_descending = digits
        .windows(2)
        .all(|w| w[0] == w[1] + 1 || (w[0] == 0 && w[1] == 9));

    is_ascending || is_descending
}

/// Encode bytes as uppercase hex (for HIBP API)
fn hex_encode_upper(bytes: &[u8]) -> String {
    bytes.iter().map(|b| format!("{:02X}", b)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_password() {
        assert!(ClearTextPassword::new("correct horse battery staple".to_string()).is_ok());
        assert!(ClearTextPassword::new("S3cure-Passphrase!".to_string()).is_ok());
    }

    #[test]
    fn test_too_short() {
        let result = ClearTextPassword::new("short".to_string());
        assert!(matches!(
            result,
            Err(PasswordPolicyError::TooShort { min: 8, actual: 5 })
        ));
    }

    #[test]
    fn test_too_long() {
        let result = ClearTextPassword::new("a1b2c3d4".repeat(20));
        assert!(matches!(result, Err(PasswordPolicyError::TooLong { .. })));
    }

    #[test]
    fn test_empty_or_whitespace() {
        assert!(matches!(
            ClearTextPassword::new("        ".to_string()),
            Err(PasswordPolicyError::EmptyOrWhitespace)
        ));
    }

    #[test]
    fn test_control_characters_rejected() {
        let result = ClearTextPassword::new("pass\u{0007}word".to_string());
        assert!(matches!(result, Err(PasswordPolicyError::InvalidCharacter)));
    }

    #[test]
    fn test_common_patterns_rejected() {
        assert!(matches!(
            ClearTextPassword::new("aaaaaaaa".to_string()),
            Err(PasswordPolicyError::CommonPattern)
        ));
        assert!(matches!(
            ClearTextPassword::new("12345678".to_string()),
            Err(PasswordPolicyError::CommonPattern)
        ));
        assert!(matches!(
            ClearTextPassword::new("password123".to_string()),
            Err(PasswordPolicyError::CommonPattern)
        ));
    }

    #[test]
    fn test_nfkc_normalization() {
        // Full-width characters normalize to ASCII before length checks
        let password = ClearTextPassword::new("ｐａｓｓｗｏｒｄ１２３４".to_string());
        assert!(password.is_ok() || matches!(password, Err(PasswordPolicyError::CommonPattern)));
    }

    #[test]
    fn test_hash_and_verify() {
        let password = ClearTextPassword::new_unchecked("test password 42".to_string());
        let hashed = password.hash(None).unwrap();

        assert!(hashed.as_phc_string().starts_with("$argon2id$"));
        assert!(hashed.verify(&password, None));

        let wrong = ClearTextPassword::new_unchecked("wrong password".to_string());
        assert!(!hashed.verify(&wrong, None));
    }

    #[test]
    fn test_hash_with_pepper() {
        let password = ClearTextPassword::new_unchecked("test password 42".to_string());
        let pepper = b"application-pepper";
        let hashed = password.hash(Some(pepper)).unwrap();

        assert!(hashed.verify(&password, Some(pepper)));
        // Wrong or missing pepper must fail
        assert!(!hashed.verify(&password, None));
        assert!(!hashed.verify(&password, Some(b"other-pepper")));
    }

    #[test]
    fn test_from_phc_string_rejects_garbage() {
        assert!(HashedPassword::from_phc_string("not a phc string").is_err());
    }

    #[test]
    fn test_debug_redacted() {
        let password = ClearTextPassword::new_unchecked("supersecret".to_string());
        let debug = format!("{:?}", password);
        assert!(!debug.contains("supersecret"));
        assert!(debug.contains("REDACTED"));
    }

    #[test]
    fn test_sequential_numbers() {
        assert!(is_sequential_numbers("123456789"));
        assert!(is_sequential_numbers("987654321"));
        assert!(!is_sequential_numbers("13579"));
        assert!(!is_sequential_numbers("abc12345"));
    }
}
