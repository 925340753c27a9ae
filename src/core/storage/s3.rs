//! Presigned upload credential issuance via aws-sdk-s3.
//!
//! The issuer holds the only path that mints storage keys. It never touches
//! the object itself: presigning is a local signature computation over
//! (method, bucket, key, content type, expiry), and the storage backend
//! enforces that scope when the client performs the PUT.

use std::time::Duration;

use async_trait::async_trait;
use aws_sdk_s3::Client;
use aws_sdk_s3::config::{BehaviorVersion, Credentials, Region};
use aws_sdk_s3::presigning::PresigningConfig;
use tracing::{debug, info};

use super::key::StorageKey;
use super::{CredentialError, CredentialIssuer, UploadCredential};
use crate::config::ServerConfig;

/// Upload credential lifetime in seconds. Policy value, fixed at one hour.
pub const UPLOAD_URL_EXPIRY_SECS: u64 = 3600;

/// Build an S3 client from server configuration.
///
/// With a custom endpoint (Cloudflare R2, MinIO, DigitalOcean Spaces),
/// path-style addressing is forced for compatibility; otherwise the standard
/// AWS endpoint for the configured region is used. Credentials are the
/// explicit key pair from configuration, never an ambient credential chain.
pub fn build_s3_client(config: &ServerConfig) -> Client {
    let credentials = Credentials::new(
        config.s3_access_key_id.clone(),
        config.s3_secret_access_key.clone(),
        None,
        None,
        "scribe-gateway-config",
    );

    let mut builder = aws_sdk_s3::Config::builder()
        .behavior_version(BehaviorVersion::latest())
        .region(Region::new(config.s3_region.clone()))
        .credentials_provider(credentials);

    if let Some(ref endpoint) = config.s3_endpoint {
        builder = builder.endpoint_url(endpoint).force_path_style(true);
    }

    Client::from_conf(builder.build())
}

/// Issues presigned PUT credentials against an S3-compatible bucket.
pub struct S3CredentialIssuer {
    client: Client,
    bucket: String,
}

impl S3CredentialIssuer {
    pub fn new(client: Client, bucket: impl Into<String>) -> Self {
        Self {
            client,
            bucket: bucket.into(),
        }
    }

    pub fn from_config(config: &ServerConfig) -> Self {
        Self::new(build_s3_client(config), config.s3_bucket.clone())
    }
}

#[async_trait]
impl CredentialIssuer for S3CredentialIssuer {
    async fn issue(
        &self,
        filename: &str,
        content_type: &str,
    ) -> Result<UploadCredential, CredentialError> {
        if filename.is_empty() {
            return Err(CredentialError::InvalidRequest(
                "filename must not be empty".to_string(),
            ));
        }
        if content_type.is_empty() {
            return Err(CredentialError::InvalidRequest(
                "contentType must not be empty".to_string(),
            ));
        }

        let key = StorageKey::derive(filename).encode();
        debug!(bucket = %self.bucket, key = %key, content_type, "signing upload URL");

        let presigning_config = PresigningConfig::builder()
            .expires_in(Duration::from_secs(UPLOAD_URL_EXPIRY_SECS))
            .build()
            .map_err(|e| CredentialError::Signing(e.to_string()))?;

        let presigned = self
            .client
            .put_object()
            .bucket(&self.bucket)
            .key(&key)
            .content_type(content_type)
            .presigned(presigning_config)
            .await
            .map_err(|e| CredentialError::Signing(e.to_string()))?;

        info!(key = %key, expiry_secs = UPLOAD_URL_EXPIRY_SECS, "upload URL issued");

        Ok(UploadCredential {
            url: presigned.uri().to_string(),
            key,
        })
    }
}
