//! Variant notation normalizer
//!
//! Rewrites the many ways people write a single-nucleotide change
//! (transcript HGVS, pseudo-VCF, `chr17:50198002C>A`, ...) into the one
//! identifier the VariantValidator Ensembl endpoint expects:
//! `{assembly}-{chrom}-{pos}-{ref}-{alt}`, or the HGVS string itself when the
//! input is already HGVS.
//!
//! Normalization is a pure function of the input text and the default
//! assembly. It never fails: text that matches no rule is returned in its
//! cleaned form and the remote service reports the format error.
//!
//! # Example
//!
//! ```
//! use vvnorm::normalize::{normalize_variant_input, Normalizer, Notation};
//!
//! assert_eq!(
//!     normalize_variant_input("chr17:50198002C>A", "GRCh38"),
//!     "GRCh38-17-50198002-C-A"
//! );
//!
//! let normalized = Normalizer::default().normalize("chr17(GRCh37):50198002C>A");
//! assert_eq!(normalized.canonical, "GRCh37-17-50198002-C-A");
//! assert_eq!(normalized.assembly, "GRCh37");
//! assert_eq!(normalized.notation, Notation::FusedAlleleChange);
//! ```

pub mod notation;
pub mod rules;

use serde::{Deserialize, Serialize};

use crate::assembly::DEFAULT_ASSEMBLY;
pub use notation::Notation;
use rules::{Candidate, RULES};

/// Result of normalizing one raw variant string
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizedVariant {
    /// The input as supplied
    pub input: String,
    /// Identifier to send to the validation service
    pub canonical: String,
    /// Assembly in effect (an embedded `(GRChNN):` overrides the default)
    pub assembly: String,
    /// Which notation the input was recognized as
    pub notation: Notation,
}

/// Normalizer holding the default assembly
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Normalizer {
    default_assembly: String,
}

impl Default for Normalizer {
    fn default() -> Self {
        Self::new(DEFAULT_ASSEMBLY)
    }
}

impl Normalizer {
    /// Create a normalizer that uses `default_assembly` when the input names none
    pub fn new(default_assembly: impl Into<String>) -> Self {
        Self {
            default_assembly: default_assembly.into(),
        }
    }

    pub fn default_assembly(&self) -> &str {
        &self.default_assembly
    }

    /// Normalize a raw variant string, reporting the notation that matched
    pub fn normalize(&self, raw: &str) -> NormalizedVariant {
        let candidate = Candidate::prepare(raw.trim(), &self.default_assembly);

        let (canonical, notation) = RULES
            .iter()
            .find_map(|rule| (rule.rewrite)(&candidate).map(|key| (key, rule.notation)))
            .unwrap_or_else(|| (candidate.cleaned.clone(), Notation::Unrecognized));

        NormalizedVariant {
            input: raw.to_string(),
            canonical,
            assembly: candidate.assembly,
            notation,
        }
    }

    /// Normalize a raw variant string to its canonical key
    pub fn canonicalize(&self, raw: &str) -> String {
        self.normalize(raw).canonical
    }
}

/// Normalize `raw` into the identifier accepted by the validation service
///
/// `default_assembly` applies unless the input embeds one as `(GRChNN):`.
pub fn normalize_variant_input(raw: &str, default_assembly: &str) -> String {
    Normalizer::new(default_assembly).canonicalize(raw)
}
