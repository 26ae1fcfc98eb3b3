//! Share code generation.

use rand::Rng;

/// Generates opaque, unguessable share codes.
#[derive(Debug, Clone)]
pub struct ShareCodeGenerator;

impl ShareCodeGenerator {
    /// Creates a new code generator.
    pub fn new() -> Self {
        Self
    }

    /// Generates a cryptographically secure random share code.
    ///
    /// 16 random bytes, hex-encoded: 32 characters, URL-safe.
    pub fn generate(&self) -> String {
        let mut bytes = [0u8; 16];
        rand::rng().fill(&mut bytes[..]);
        hex::encode(&bytes)
    }
}

impl Default for ShareCodeGenerator {
    fn default() -> Self {
        Self::new()
    }
}

/// Simple hex encoding without external dependency.
mod hex {
    /// Encode bytes to hex string.
    pub fn encode(bytes: &[u8]) -> String {
        bytes.iter().map(|b| format!("{:02x}", b)).collect()
    }
}
