//! Test Fixtures Module
//!
//! Programmatically generated audio payloads for integration tests.

// Allow dead code in test fixtures - not every suite uses every generator
#![allow(dead_code)]

pub mod audio_fixtures;

pub use audio_fixtures::*;
