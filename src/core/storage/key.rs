//! Storage key derivation and parsing.
//!
//! Every upload gets a key of the form `"<random>-<filename>"`, where the
//! random segment is 16 bytes of CSPRNG output hex-encoded to exactly 32
//! characters. The fixed width and alphabet of the prefix make the encoding
//! unambiguous even when the filename itself contains hyphens: parsing splits
//! on the first hyphen only and validates the prefix, so the original
//! filename always round-trips exactly.

use std::fmt;

use rand::RngCore;

/// Length of the hex-encoded random prefix (16 bytes, hex-encoded).
pub const RANDOM_ID_LEN: usize = 32;

/// A storage key as an explicit structured record.
///
/// Kept structured in code rather than as a bare string so the random
/// identifier and the original filename never get conflated; the string form
/// only exists at the storage boundary via [`StorageKey::encode`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageKey {
    random_id: String,
    original_filename: String,
}

impl StorageKey {
    /// Derive a fresh key for `filename` with a new random identifier.
    ///
    /// Collision probability is negligible by construction (128 random bits
    /// per key), which is what makes uploads of identically named files safe.
    pub fn derive(filename: &str) -> Self {
        let mut raw = [0u8; RANDOM_ID_LEN / 2];
        rand::thread_rng().fill_bytes(&mut raw);
        Self {
            random_id: hex::encode(raw),
            original_filename: filename.to_string(),
        }
    }

    /// Parse an encoded key, returning `None` when the random prefix is
    /// malformed or the filename segment is empty.
    pub fn parse(encoded: &str) -> Option<Self> {
        let (prefix, filename) = encoded.split_once('-')?;
        if prefix.len() != RANDOM_ID_LEN {
            return None;
        }
        if !prefix
            .bytes()
            .all(|b| matches!(b, b'0'..=b'9' | b'a'..=b'f'))
        {
            return None;
        }
        if filename.is_empty() {
            return None;
        }
        Some(Self {
            random_id: prefix.to_string(),
            original_filename: filename.to_string(),
        })
    }

    /// The wire encoding used as the object key in storage.
    pub fn encode(&self) -> String {
        format!("{}-{}", self.random_id, self.original_filename)
    }

    /// The 32-character hex random identifier.
    pub fn random_id(&self) -> &str {
        &self.random_id
    }

    /// The filename the client supplied at issuance time.
    pub fn original_filename(&self) -> &str {
        &self.original_filename
    }
}

impl fmt::Display for StorageKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.random_id, self.original_filename)
    }
}
