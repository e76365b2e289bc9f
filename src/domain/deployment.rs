//! Deployment identifier domain type
//!
//! A deployment is addressed by a 32-character lowercase hexadecimal id.

use crate::error::ValidationError;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Number of characters in a deployment id
pub const DEPLOYMENT_ID_LEN: usize = 32;

/// Validated deployment identifier
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct DeploymentId(String);

impl DeploymentId {
    /// Validate and wrap a raw deployment id
    pub fn new(raw: impl Into<String>) -> Result<Self, ValidationError> {
        let raw = raw.into();
        if !is_valid_deployment_id(&raw) {
            return Err(ValidationError::InvalidDeploymentId(raw));
        }
        Ok(Self(raw))
    }

    /// Get the id as a string slice
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Six-character prefix used in generated file names
    pub fn short(&self) -> &str {
        // ASCII-only by construction
        &self.0[..6]
    }
}

/// Check whether `raw` is exactly 32 lowercase hex characters
pub fn is_valid_deployment_id(raw: &str) -> bool {
    raw.len() == DEPLOYMENT_ID_LEN && raw.bytes().all(|b| matches!(b, b'0'..=b'9' | b'a'..=b'f'))
}

impl FromStr for DeploymentId {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl AsRef<str> for DeploymentId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DeploymentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_deployment_id() {
        let id: DeploymentId = "abcdef0123456789abcdef0123456789".parse().unwrap();
        assert_eq!(id.as_str(), "abcdef0123456789abcdef0123456789");
        assert_eq!(id.short(), "abcdef");
    }

    #[test]
    fn test_uppercase_rejected() {
        let result = DeploymentId::new("ABCDEF0123456789ABCDEF0123456789");
        assert_eq!(
            result,
            Err(ValidationError::InvalidDeploymentId(
                "ABCDEF0123456789ABCDEF0123456789".to_string()
            ))
        );
    }

    #[test]
    fn test_wrong_length_rejected() {
        assert!(DeploymentId::new("").is_err());
        assert!(DeploymentId::new("abcdef0123456789abcdef012345678").is_err());
        assert!(DeploymentId::new("abcdef0123456789abcdef01234567890").is_err());
    }

    #[test]
    fn test_non_hex_rejected() {
        assert!(DeploymentId::new("ghijkl0123456789abcdef0123456789").is_err());
        assert!(DeploymentId::new("abcdef0123456789abcdef012345678 ").is_err());
        assert!(DeploymentId::new("abcdef0123456789-bcdef0123456789").is_err());
    }

    #[test]
    fn test_every_hex_digit_accepted() {
        for c in "0123456789abcdef".chars() {
            let raw: String = std::iter::repeat(c).take(DEPLOYMENT_ID_LEN).collect();
            assert!(is_valid_deployment_id(&raw), "{raw} should be valid");
        }
    }

    #[test]
    fn test_multibyte_input_rejected() {
        // 32 bytes, but not hex
        let raw = "é".repeat(16);
        assert_eq!(raw.len(), DEPLOYMENT_ID_LEN);
        assert!(DeploymentId::new(raw).is_err());
    }
}
