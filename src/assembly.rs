//! Genome assembly tokens
//!
//! VariantValidator addresses reference genomes by build name
//! (`GRCh37`, `GRCh38`). Any `GRCh<digits>` token is accepted so that new
//! builds do not require a code change.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::VvError;

/// Default genome build when neither the caller nor the input names one
pub const DEFAULT_ASSEMBLY: &str = "GRCh38";

static ASSEMBLY_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"^GRCh\d+$").unwrap());

/// A genome build name such as `GRCh38`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Assembly(String);

impl Assembly {
    /// Returns true if `token` is a well-formed assembly name
    pub fn is_valid(token: &str) -> bool {
        ASSEMBLY_PATTERN.is_match(token)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for Assembly {
    fn default() -> Self {
        Assembly(DEFAULT_ASSEMBLY.to_string())
    }
}

impl FromStr for Assembly {
    type Err = VvError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim();
        if Self::is_valid(token) {
            Ok(Assembly(token.to_string()))
        } else {
            Err(VvError::InvalidAssembly(s.to_string()))
        }
    }
}

impl TryFrom<String> for Assembly {
    type Error = VvError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Assembly> for String {
    fn from(value: Assembly) -> Self {
        value.0
    }
}

impl AsRef<str> for Assembly {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Assembly {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_grch38() {
        assert_eq!(Assembly::default().as_str(), "GRCh38");
    }

    #[test]
    fn test_parse_valid() {
        assert_eq!("GRCh37".parse::<Assembly>().unwrap().as_str(), "GRCh37");
        assert_eq!(" GRCh38 ".parse::<Assembly>().unwrap().as_str(), "GRCh38");
    }

    #[test]
    fn test_parse_invalid() {
        assert!("hg19".parse::<Assembly>().is_err());
        assert!("GRCh".parse::<Assembly>().is_err());
        assert!("grch38".parse::<Assembly>().is_err());
        assert!("GRCh38a".parse::<Assembly>().is_err());
    }

    #[test]
    fn test_serde_roundtrip_rejects_bad_token() {
        let ok: Assembly = serde_json::from_str("\"GRCh37\"").unwrap();
        assert_eq!(ok.to_string(), "GRCh37");
        assert!(serde_json::from_str::<Assembly>("\"NCBI36\"").is_err());
    }
}
