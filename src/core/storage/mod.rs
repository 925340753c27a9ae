//! Object storage integration.
//!
//! Two halves with deliberately separate stacks:
//! - issuing presigned PUT credentials for direct client uploads, via
//!   aws-sdk-s3 (the only stack that can bind a content type into the
//!   signature) — see [`s3`]
//! - fetching uploaded objects back into memory, via the `object_store`
//!   crate — see [`fetch`]
//!
//! Key derivation is owned by the issuer; no other component mints keys.

pub mod fetch;
pub mod key;
pub mod s3;

use async_trait::async_trait;
use serde::Serialize;
use thiserror::Error;

pub use fetch::ObjectFetcher;
pub use key::{RANDOM_ID_LEN, StorageKey};
pub use s3::{S3CredentialIssuer, UPLOAD_URL_EXPIRY_SECS};

/// A short-lived, method-scoped upload authorization.
///
/// The URL authorizes exactly one kind of request: a PUT of the issued
/// content type to the issued key, until the embedded expiry passes. The
/// storage backend enforces the scoping; the credential carries no secret
/// material of its own.
#[derive(Debug, Clone, Serialize)]
pub struct UploadCredential {
    /// Presigned URL the client PUTs the file body to.
    pub url: String,
    /// Storage key the object will live under, returned so the client can
    /// reference the upload in later requests.
    pub key: String,
}

/// Failure to issue an upload credential.
#[derive(Debug, Clone, Error)]
pub enum CredentialError {
    /// Caller input is missing or empty.
    #[error("{0}")]
    InvalidRequest(String),

    /// The backend signing call failed (misconfiguration, transport).
    #[error("failed to sign upload request: {0}")]
    Signing(String),
}

/// Issues presigned upload credentials.
///
/// Behind a trait so tests can substitute a counting or failing double for
/// the real S3-backed issuer.
#[async_trait]
pub trait CredentialIssuer: Send + Sync {
    /// Derive a fresh storage key for `filename` and return a credential
    /// authorizing one PUT of `content_type` to it.
    async fn issue(
        &self,
        filename: &str,
        content_type: &str,
    ) -> Result<UploadCredential, CredentialError>;
}

/// Failure to fetch an object from storage.
#[derive(Debug, Clone, Error)]
pub enum StorageError {
    #[error("object not found: {0}")]
    NotFound(String),

    /// The object exceeds the configured fetch ceiling and was rejected
    /// before any of its body was read.
    #[error("object '{key}' is {size} bytes, exceeding the {limit}-byte fetch ceiling")]
    TooLarge { key: String, size: u64, limit: u64 },

    #[error("storage backend error: {0}")]
    Backend(String),
}

impl StorageError {
    /// Whether a retry could plausibly succeed.
    ///
    /// Missing and oversized objects are stable facts; backend/transport
    /// failures may be transient.
    pub fn is_retryable(&self) -> bool {
        matches!(self, StorageError::Backend(_))
    }
}
