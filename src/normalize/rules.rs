//! Notation recognition rules
//!
//! Each rule pairs a [`Notation`] with a rewrite function that either
//! produces the canonical key or declines with `None`. Rules are evaluated in
//! the order of [`RULES`] and the first one that produces a key wins.
//! Several notations are syntactic subsets of others (every fused
//! `17:50198002C>A` string also splits into two colon fields), so the order
//! is part of the grammar.
//!
//! | # | Notation              | Example                         | Output                      |
//! |---|-----------------------|---------------------------------|-----------------------------|
//! | 1 | transcript HGVS       | `ENST00000225964.10:c.589G>T`   | verbatim                    |
//! | 2 | RefSeq genomic HGVS   | `NC_000017.10:g.48275363C>A`    | verbatim                    |
//! | 3 | genomic HGVS lite     | `17:g.50198002C>A`              | `GRCh38-17-50198002C>A`     |
//! | 4 | colon-delimited       | `17:50198002:C:A`               | `GRCh38-17-50198002-C-A`    |
//! | 5 | fused allele change   | `17:50198002C>A`                | `GRCh38-17-50198002-C-A`    |
//! | 6 | dash pseudo-VCF       | `17-50198002-C-A`               | `GRCh38-17-50198002-C-A`    |
//!
//! Rules 3-6 see the input after [`Candidate::prepare`] has pulled out an
//! embedded `(GRChNN):` assembly and stripped `chr` prefixes.

use once_cell::sync::Lazy;
use regex::Regex;

use super::notation::Notation;

static TRANSCRIPT_HGVS: Lazy<Regex> = Lazy::new(|| Regex::new(r"^ENST\d+\.\d+:").unwrap());

static GENOMIC_HGVS: Lazy<Regex> = Lazy::new(|| Regex::new(r"^NC_\d+\.\d+:g\.").unwrap());

/// `chr17(GRCh38):50198002C>A`
static EMBEDDED_ASSEMBLY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(.+?)\((GRCh\d+)\):(.+)$").unwrap());

static ASSEMBLY_ANNOTATION: Lazy<Regex> = Lazy::new(|| Regex::new(r"\(GRCh\d+\)").unwrap());

static GENOMIC_HGVS_LITE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\d+|X|Y|MT|M):g\.(.+)$").unwrap());

/// Substitutions only; IUPAC codes and indels are left to the remote service
static FUSED_CHANGE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\d+)([ACGT]+)>([ACGT]+)$").unwrap());

/// Variant text as seen by the recognition rules
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate<'a> {
    /// Input with surrounding whitespace removed
    pub trimmed: &'a str,
    /// Input after assembly extraction and cleanup
    pub cleaned: String,
    /// Assembly in effect: the embedded one if present, otherwise the default
    pub assembly: String,
}

impl<'a> Candidate<'a> {
    /// Extract an embedded `(GRChNN):` assembly, then strip remaining
    /// annotations and a leading lowercase `chr`.
    pub fn prepare(trimmed: &'a str, default_assembly: &str) -> Self {
        let mut text = trimmed.to_string();
        let mut assembly = default_assembly.to_string();

        if text.contains('(') {
            if let Some(caps) = EMBEDDED_ASSEMBLY.captures(trimmed) {
                assembly = caps[2].to_string();
                text = format!("{}:{}", &caps[1], &caps[3]);
            }
        }

        // A trailing annotation such as `50198002C>A(GRCh38)` is removed but
        // does not override the assembly.
        let text = ASSEMBLY_ANNOTATION.replace_all(&text, "");
        let cleaned = text.strip_prefix("chr").unwrap_or(&text[..]).to_string();

        Self {
            trimmed,
            cleaned,
            assembly,
        }
    }
}

/// A recognition rule: notation plus rewrite
#[derive(Clone, Copy)]
pub struct NotationRule {
    pub notation: Notation,
    pub rewrite: fn(&Candidate<'_>) -> Option<String>,
}

impl std::fmt::Debug for NotationRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NotationRule")
            .field("notation", &self.notation)
            .finish()
    }
}

/// Recognition rules in precedence order
pub const RULES: &[NotationRule] = &[
    NotationRule {
        notation: Notation::TranscriptHgvs,
        rewrite: transcript_hgvs,
    },
    NotationRule {
        notation: Notation::GenomicHgvs,
        rewrite: genomic_hgvs,
    },
    NotationRule {
        notation: Notation::GenomicHgvsLite,
        rewrite: genomic_hgvs_lite,
    },
    NotationRule {
        notation: Notation::ColonDelimited,
        rewrite: colon_delimited,
    },
    NotationRule {
        notation: Notation::FusedAlleleChange,
        rewrite: fused_allele_change,
    },
    NotationRule {
        notation: Notation::DashDelimited,
        rewrite: dash_delimited,
    },
];

fn transcript_hgvs(candidate: &Candidate<'_>) -> Option<String> {
    TRANSCRIPT_HGVS
        .is_match(candidate.trimmed)
        .then(|| candidate.trimmed.to_string())
}

fn genomic_hgvs(candidate: &Candidate<'_>) -> Option<String> {
    GENOMIC_HGVS
        .is_match(candidate.trimmed)
        .then(|| candidate.trimmed.to_string())
}

/// `17:g.50198002C>A` -> `GRCh38-17-50198002C>A`
///
/// Reference and alternate alleles stay fused to the position, giving the
/// 4-part key shape.
fn genomic_hgvs_lite(candidate: &Candidate<'_>) -> Option<String> {
    let caps = GENOMIC_HGVS_LITE.captures(&candidate.cleaned)?;
    Some(format!("{}-{}-{}", candidate.assembly, &caps[1], &caps[2]))
}

/// `17:50198002:C:A`, `GRCh38:17:50198002:C:A`
fn colon_delimited(candidate: &Candidate<'_>) -> Option<String> {
    if !candidate.cleaned.contains(':') {
        return None;
    }

    let fields: Vec<&str> = candidate.cleaned.split(':').collect();
    match fields.as_slice() {
        [assembly, chrom, pos, reference, alternate] if assembly.starts_with("GRCh") => Some(
            format!("{assembly}-{chrom}-{pos}-{reference}-{alternate}"),
        ),
        [assembly, chrom, pos, change] if assembly.starts_with("GRCh") => {
            Some(format!("{assembly}-{chrom}-{pos}-{change}"))
        }
        [chrom, pos, reference, alternate] => Some(format!(
            "{}-{chrom}-{pos}-{reference}-{alternate}",
            candidate.assembly
        )),
        _ => None,
    }
}

/// `17:50198002C>A` -> `GRCh38-17-50198002-C-A`
fn fused_allele_change(candidate: &Candidate<'_>) -> Option<String> {
    let (chrom, change) = candidate.cleaned.split_once(':')?;
    if change.contains(':') {
        return None;
    }

    let caps = FUSED_CHANGE.captures(change)?;
    Some(format!(
        "{}-{}-{}-{}-{}",
        candidate.assembly, chrom, &caps[1], &caps[2], &caps[3]
    ))
}

/// `17-50198002-C-A` -> `GRCh38-17-50198002-C-A`
fn dash_delimited(candidate: &Candidate<'_>) -> Option<String> {
    let text = &candidate.cleaned;
    if !text.contains('-') || text.starts_with("GRCh") {
        return None;
    }

    (text.split('-').count() == 4).then(|| format!("{}-{}", candidate.assembly, text))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candidate(input: &str) -> Candidate<'_> {
        Candidate::prepare(input, "GRCh38")
    }

    #[test]
    fn test_prepare_extracts_embedded_assembly() {
        let c = candidate("chr17(GRCh37):50198002C>A");
        assert_eq!(c.cleaned, "17:50198002C>A");
        assert_eq!(c.assembly, "GRCh37");
        assert_eq!(c.trimmed, "chr17(GRCh37):50198002C>A");
    }

    #[test]
    fn test_prepare_strips_trailing_annotation_without_override() {
        let c = candidate("chr17:50198002C>A(GRCh37)");
        assert_eq!(c.cleaned, "17:50198002C>A");
        assert_eq!(c.assembly, "GRCh38");
    }

    #[test]
    fn test_prepare_chr_prefix_is_case_sensitive() {
        assert_eq!(candidate("chr17:50198002C>A").cleaned, "17:50198002C>A");
        assert_eq!(candidate("CHR17:50198002C>A").cleaned, "CHR17:50198002C>A");
        assert_eq!(candidate("Chr17:50198002C>A").cleaned, "Chr17:50198002C>A");
    }

    #[test]
    fn test_prepare_only_strips_leading_chr() {
        assert_eq!(candidate("17:chr5").cleaned, "17:chr5");
    }

    #[test]
    fn test_prepare_annotation_without_colon_is_only_stripped() {
        let c = candidate("17(GRCh38)50198002C>A");
        assert_eq!(c.assembly, "GRCh38");
        assert_eq!(c.cleaned, "1750198002C>A");
    }

    #[test]
    fn test_transcript_hgvs_requires_version() {
        assert!(transcript_hgvs(&candidate("ENST00000225964.10:c.589G>T")).is_some());
        assert!(transcript_hgvs(&candidate("ENST00000225964:c.589G>T")).is_none());
    }

    #[test]
    fn test_genomic_hgvs_requires_g_prefix() {
        assert!(genomic_hgvs(&candidate("NC_000017.10:g.48275363C>A")).is_some());
        assert!(genomic_hgvs(&candidate("NC_000017.10:c.48275363C>A")).is_none());
        assert!(genomic_hgvs(&candidate("NM_000088.3:c.589G>T")).is_none());
    }

    #[test]
    fn test_genomic_hgvs_lite_keeps_alleles_fused() {
        assert_eq!(
            genomic_hgvs_lite(&candidate("17:g.50198002C>A")).as_deref(),
            Some("GRCh38-17-50198002C>A")
        );
        assert_eq!(
            genomic_hgvs_lite(&candidate("chrX:g.100A>G")).as_deref(),
            Some("GRCh38-X-100A>G")
        );
        assert!(genomic_hgvs_lite(&candidate("17:50198002C>A")).is_none());
    }

    #[test]
    fn test_colon_delimited_shapes() {
        assert_eq!(
            colon_delimited(&candidate("17:50198002:C:A")).as_deref(),
            Some("GRCh38-17-50198002-C-A")
        );
        assert_eq!(
            colon_delimited(&candidate("GRCh37:17:50198002:C:A")).as_deref(),
            Some("GRCh37-17-50198002-C-A")
        );
        assert_eq!(
            colon_delimited(&candidate("GRCh37:17:50198002:CA")).as_deref(),
            Some("GRCh37-17-50198002-CA")
        );
        assert!(colon_delimited(&candidate("1:2:3:4:5")).is_none());
        assert!(colon_delimited(&candidate("17:50198002C>A")).is_none());
        assert!(colon_delimited(&candidate("17-50198002-C-A")).is_none());
    }

    #[test]
    fn test_fused_allele_change() {
        assert_eq!(
            fused_allele_change(&candidate("17:50198002C>A")).as_deref(),
            Some("GRCh38-17-50198002-C-A")
        );
        assert_eq!(
            fused_allele_change(&candidate("X:100AC>GT")).as_deref(),
            Some("GRCh38-X-100-AC-GT")
        );
        assert!(fused_allele_change(&candidate("17:50198002C>R")).is_none());
        assert!(fused_allele_change(&candidate("17:50198002del")).is_none());
        assert!(fused_allele_change(&candidate("17:50198002c>a")).is_none());
    }

    #[test]
    fn test_dash_delimited() {
        assert_eq!(
            dash_delimited(&candidate("17-50198002-C-A")).as_deref(),
            Some("GRCh38-17-50198002-C-A")
        );
        assert!(dash_delimited(&candidate("GRCh38-17-50198002-C-A")).is_none());
        assert!(dash_delimited(&candidate("17-50198002-C")).is_none());
        assert!(dash_delimited(&candidate("1750198002")).is_none());
    }

    #[test]
    fn test_rules_are_in_precedence_order() {
        let order: Vec<Notation> = RULES.iter().map(|r| r.notation).collect();
        assert_eq!(
            order,
            vec![
                Notation::TranscriptHgvs,
                Notation::GenomicHgvs,
                Notation::GenomicHgvsLite,
                Notation::ColonDelimited,
                Notation::FusedAlleleChange,
                Notation::DashDelimited,
            ]
        );
    }
}
