//! HTTP request handlers
//!
//! This module organizes all API handlers into logical groups:
//! - `api` - Health check endpoint
//! - `upload_url` - Presigned upload URL issuance
//! - `process` - Fetch-transcribe-summarize pipeline trigger

pub mod api;
pub mod process;
pub mod upload_url;
