//! Input notation classification

use serde::{Deserialize, Serialize};

/// The notation a raw variant string was recognized as
///
/// Variants are listed in rule precedence order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Notation {
    /// Ensembl transcript HGVS, e.g. `ENST00000225964.10:c.589G>T`
    TranscriptHgvs,
    /// RefSeq genomic HGVS, e.g. `NC_000017.10:g.48275363C>A`
    GenomicHgvs,
    /// Bare chromosome genomic HGVS, e.g. `17:g.50198002C>A`
    GenomicHgvsLite,
    /// Colon-separated VCF fields, e.g. `17:50198002:C:A`
    ColonDelimited,
    /// Chromosome plus fused substitution, e.g. `17:50198002C>A`
    FusedAlleleChange,
    /// Dash-separated pseudo-VCF without assembly, e.g. `17-50198002-C-A`
    DashDelimited,
    /// Nothing matched; passed through for the remote service to judge
    Unrecognized,
}

impl Notation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Notation::TranscriptHgvs => "transcript_hgvs",
            Notation::GenomicHgvs => "genomic_hgvs",
            Notation::GenomicHgvsLite => "genomic_hgvs_lite",
            Notation::ColonDelimited => "colon_delimited",
            Notation::FusedAlleleChange => "fused_allele_change",
            Notation::DashDelimited => "dash_delimited",
            Notation::Unrecognized => "unrecognized",
        }
    }
}

impl std::fmt::Display for Notation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serde_matches_display() {
        let json = serde_json::to_string(&Notation::FusedAlleleChange).unwrap();
        assert_eq!(json, "\"fused_allele_change\"");
        assert_eq!(Notation::FusedAlleleChange.to_string(), "fused_allele_change");
    }
}
