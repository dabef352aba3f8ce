//! Password Hashing and Verification
//!
//! Argon2id password handling with:
//! - Memory-hard hashing (OWASP recommended parameters)
//! - Zeroization of sensitive data
//! - Optional application-wide pepper
//!
//! Policy is deliberately thin. Registration accepts any non-empty
//! password up to [`MAX_PASSWORD_LENGTH`] characters; the only rejected
//! inputs are empty/whitespace-only strings, oversized strings, and
//! control characters. Strength scoring belongs to clients.

use std::fmt;

use argon2::{Argon2, PasswordHash, PasswordHasher, PasswordVerifier, password_hash::SaltString};
use rand::rngs::OsRng;
use thiserror::Error;
use unicode_normalization::UnicodeNormalization;
use zeroize::{Zeroize, ZeroizeOnDrop};

// ============================================================================
// Constants
// ============================================================================

/// Maximum password length in characters
pub const MAX_PASSWORD_LENGTH: usize = 128;

// ============================================================================
// Error Types
// ============================================================================

/// Password policy violation errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PasswordPolicyError {
    /// Password is too long
    #[error("Password must be at most {max} characters (got {actual})")]
    TooLong { max: usize, actual: usize },

    /// Password is empty or whitespace only
    #[error("Password cannot be empty or contain only whitespace")]
    EmptyOrWhitespace,

    /// Password contains control characters
    #[error("Password contains invalid control characters")]
    InvalidCharacter,
}

/// Password hashing/verification errors
#[derive(Debug, Error)]
pub enum PasswordHashError {
    /// Hashing operation failed
    #[error("Password hashing failed: {0}")]
    HashingFailed(String),

    /// Stored hash is not a valid PHC string
    #[error("Invalid password hash format")]
    InvalidHashFormat,
}

// ============================================================================
// Clear Text Password (Zeroized on drop)
// ============================================================================

/// A validated clear text password
///
/// The inner string is erased from memory when the value is dropped.
/// The type is not `Clone`, so at most one copy of the secret exists,
/// and its `Debug` output is redacted.
///
/// ## Examples
/// ```rust
/// use platform::password::ClearTextPassword;
///
/// let password = ClearTextPassword::new("correct horse battery staple".to_string())?;
/// # Ok::<(), platform::password::PasswordPolicyError>(())
/// ```
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct ClearTextPassword(String);

impl ClearTextPassword {
    /// Validate and normalize a password from user input
    ///
    /// The input is NFKC-normalized first; every later step, including
    /// hashing, sees the normalized form. Accepted inputs:
    /// - Non-empty after trimming whitespace
    /// - At most [`MAX_PASSWORD_LENGTH`] characters (code points, not bytes)
    /// - No control characters; space, tab, and newline are allowed
    pub fn new(raw: String) -> Result<Self, PasswordPolicyError> {
        let normalized: String = raw.nfkc().collect();

        if normalized.trim().is_empty() {
            return Err(PasswordPolicyError::EmptyOrWhitespace);
        }

        let char_count = normalized.chars().count();
        if char_count > MAX_PASSWORD_LENGTH {
            return Err(PasswordPolicyError::TooLong {
                max: MAX_PASSWORD_LENGTH,
                actual: char_count,
            });
        }

        if normalized
            .chars()
            .any(|ch| ch.is_control() && ch != ' ' && ch != '\t' && ch != '\n')
        {
            return Err(PasswordPolicyError::InvalidCharacter);
        }

        Ok(Self(normalized))
    }

    /// Wrap a string without validation
    #[cfg(test)]
    pub fn new_unchecked(raw: String) -> Self {
        Self(raw)
    }

    pub(crate) fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }

    /// Hash the password with Argon2id
    ///
    /// The pepper, when given, must be the same one passed to
    /// [`HashedPassword::verify`] later; it is appended to the password
    /// bytes before hashing and never stored.
    pub fn hash(&self, pepper: Option<&[u8]>) -> Result<HashedPassword, PasswordHashError> {
        let material = peppered(self, pepper);

        // Random 128-bit salt per hash
        let salt = SaltString::generate(OsRng);

        // Argon2::default() is Argon2id with the OWASP parameter set
        // (m=19456 KiB, t=2, p=1)
        let hash = Argon2::default()
            .hash_password(&material, &salt)
            .map_err(|e| PasswordHashError::HashingFailed(e.to_string()))?;

        Ok(HashedPassword {
            hash: hash.to_string(),
        })
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

/// An Argon2id hash in PHC string form
///
/// The PHC string carries the algorithm, version, parameters, salt, and
/// digest, so it is self-describing and safe to store verbatim.
///
/// ## Examples
/// ```rust
/// use platform::password::ClearTextPassword;
///
/// let password = ClearTextPassword::new("correct horse battery staple".to_string())?;
/// let hashed = password.hash(None)?;
/// assert!(hashed.verify(&password, None));
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct HashedPassword {
    hash: String,
}

impl HashedPassword {
    /// Wrap a PHC string loaded from storage
    ///
    /// The string must parse as a PHC hash; anything else is rejected
    /// rather than carried along to fail at verify time.
    pub fn from_phc_string(s: impl Into<String>) -> Result<Self, PasswordHashError> {
        let hash = s.into();

        PasswordHash::new(&hash).map_err(|_| PasswordHashError::InvalidHashFormat)?;

        Ok(Self { hash })
    }

    /// Get the PHC string for storage
    pub fn as_phc_string(&self) -> &str {
        &self.hash
    }

    /// Verify a clear text password against this hash
    ///
    /// The comparison inside Argon2 is constant-time. The pepper must
    /// match the one used at hash time, or verification fails.
    pub fn verify(&self, password: &ClearTextPassword, pepper: Option<&[u8]>) -> bool {
        let material = peppered(password, pepper);

        let parsed_hash = match PasswordHash::new(&self.hash) {
            Ok(h) => h,
            Err(_) => return false,
        };

        Argon2::default()
            .verify_password(&material, &parsed_hash)
            .is_ok()
    }

    /// Whether the hash should be recomputed on next successful login
    ///
    /// True when the stored hash does not parse or is not Argon2id.
    pub fn needs_rehash(&self) -> bool {
        let parsed_hash = match PasswordHash::new(&self.hash) {
            Ok(h) => h,
            Err(_) => return true,
        };

        parsed_hash.algorithm != argon2::Algorithm::Argon2id.ident()
    }
}

impl fmt::Debug for HashedPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HashedPassword")
            .field("hash", &"[HASH]")
            .finish()
    }
}

/// Append the pepper to the password bytes
fn peppered(password: &ClearTextPassword, pepper: Option<&[u8]>) -> Vec<u8> {
    let mut material = password.as_bytes().to_vec();
    if let Some(p) = pepper {
        material.extend_from_slice(p);
    }
    material
}

// ============================================================================
// Tests
// ============================================================================
