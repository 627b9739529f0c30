//! VariantValidator response schema
//!
//! The schema belongs to the remote service, so a successful record keeps
//! every top-level key exactly as it was received and the accessors decode
//! fields one at a time. A field that is missing, null or of an unexpected
//! type reads as absent and renders as [`NOT_AVAILABLE`]; it never rejects
//! the rest of the record.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;

/// Placeholder rendered for any field the service did not return
pub const NOT_AVAILABLE: &str = "N/A";

/// Outcome of one lookup against the validation service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ValidationResult {
    /// The lookup failed (transport error, non-2xx status, unreadable body)
    Failure(LookupFailure),
    /// The service answered with a validation record
    Success(ValidationRecord),
}

impl ValidationResult {
    pub fn failure(error: impl Into<String>, status_code: Option<u16>) -> Self {
        ValidationResult::Failure(LookupFailure {
            error: error.into(),
            status_code,
        })
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, ValidationResult::Failure(_))
    }
}

/// Error record: message plus the HTTP status when one was received
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LookupFailure {
    pub error: String,
    #[serde(default)]
    pub status_code: Option<u16>,
}

/// Successful validation record
///
/// Any JSON object is accepted. Known keys are `input`, `flag`,
/// `primary_assembly_loci`, `gene_ids`, `gene_symbol` and
/// `validation_warnings`; transcript entries are keyed by their coding
/// description (`ENST...:c....`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ValidationRecord {
    pub entries: BTreeMap<String, Value>,
}

/// Genomic description of the variant on one assembly
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AssemblyLocus {
    pub hgvs_genomic_description: Option<String>,
    pub chr: Option<String>,
    pub pos: Option<String>,
    pub reference: Option<String>,
    pub alternate: Option<String>,
}

impl AssemblyLocus {
    /// Decode a locus, reading each field independently
    pub fn from_value(value: &Value) -> Self {
        let vcf = value.get("vcf");
        let vcf_field = |key: &str| vcf.and_then(|vcf| scalar_text(vcf.get(key)));
        Self {
            hgvs_genomic_description: scalar_text(value.get("hgvs_genomic_description")),
            chr: vcf_field("chr"),
            pos: vcf_field("pos"),
            reference: vcf_field("ref"),
            alternate: vcf_field("alt"),
        }
    }

    pub fn genomic_description(&self) -> &str {
        self.hgvs_genomic_description
            .as_deref()
            .unwrap_or(NOT_AVAILABLE)
    }

    /// `chrom:pos ref>alt`, with `N/A` for missing parts
    pub fn vcf_token(&self) -> String {
        let part = |field: &Option<String>| field.as_deref().unwrap_or(NOT_AVAILABLE).to_string();
        format!(
            "{}:{} {}>{}",
            part(&self.chr),
            part(&self.pos),
            part(&self.reference),
            part(&self.alternate)
        )
    }
}

/// Gene identifiers
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GeneIds {
    pub hgnc_id: Option<String>,
    pub ensembl_gene_id: Option<String>,
}

impl GeneIds {
    fn from_map(map: &Map<String, Value>) -> Self {
        Self {
            hgnc_id: scalar_text(map.get("hgnc_id")),
            ensembl_gene_id: scalar_text(map.get("ensembl_gene_id")),
        }
    }

    pub fn hgnc_id(&self) -> &str {
        self.hgnc_id.as_deref().unwrap_or(NOT_AVAILABLE)
    }

    pub fn ensembl_gene_id(&self) -> &str {
        self.ensembl_gene_id.as_deref().unwrap_or(NOT_AVAILABLE)
    }
}

/// A transcript-level description with its annotation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranscriptDescription {
    /// Transcript accession, e.g. `ENST00000225964.10`
    pub transcript_id: String,
    /// Full coding-level description, e.g. `ENST00000225964.10:c.589G>T`
    pub hgvs_coding: String,
    pub hgvs_protein: Option<String>,
    pub canonical: bool,
    pub mane_select: bool,
}

impl TranscriptDescription {
    /// Transcript type label: `MANE Select`, `Canonical`, both, or `Other`
    pub fn type_label(&self) -> String {
        let mut labels = Vec::new();
        if self.mane_select {
            labels.push("MANE Select");
        }
        if self.canonical {
            labels.push("Canonical");
        }
        if labels.is_empty() {
            "Other".to_string()
        } else {
            labels.join(", ")
        }
    }

    /// Short protein form: `ENSP..:p.(Gly197Cys)` -> `ENSP..:p.Gly197Cys`
    pub fn abbreviated_protein(&self) -> Option<String> {
        let protein = self.hgvs_protein.as_deref()?;
        let open = protein.find('(')?;
        protein.find(')')?;

        let inner = &protein[open + 1..];
        let inner = inner.split(')').next().unwrap_or(inner);
        let accession = protein.split(':').next().unwrap_or(protein);
        Some(format!("{}:p.{}", accession, inner))
    }
}

impl ValidationRecord {
    /// A record with no fields at all
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn text(&self, key: &str) -> Option<&str> {
        self.entries.get(key).and_then(Value::as_str)
    }

    pub fn submitted_variant(&self) -> &str {
        self.entries
            .get("input")
            .and_then(|input| input.get("variant"))
            .and_then(Value::as_str)
            .unwrap_or(NOT_AVAILABLE)
    }

    pub fn flag(&self) -> &str {
        self.text("flag").unwrap_or(NOT_AVAILABLE)
    }

    pub fn gene_symbol(&self) -> &str {
        self.text("gene_symbol").unwrap_or(NOT_AVAILABLE)
    }

    /// Warning lines; scalars other than strings are rendered as JSON
    pub fn warnings(&self) -> Vec<String> {
        self.entries
            .get("validation_warnings")
            .and_then(Value::as_array)
            .map(|warnings| {
                warnings
                    .iter()
                    .filter_map(|warning| scalar_text(Some(warning)))
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Gene identifiers, when present as a non-empty object
    pub fn gene_ids(&self) -> Option<GeneIds> {
        self.entries
            .get("gene_ids")
            .and_then(Value::as_object)
            .filter(|ids| !ids.is_empty())
            .map(GeneIds::from_map)
    }

    /// Loci keyed by an assembly name (`grch37`, `grch38`, ...)
    ///
    /// Other keys are skipped before their values are looked at.
    pub fn assembly_loci(&self) -> Vec<(&str, AssemblyLocus)> {
        self.entries
            .get("primary_assembly_loci")
            .and_then(Value::as_object)
            .map(|loci| {
                loci.iter()
                    .filter(|(key, _)| key.to_ascii_lowercase().starts_with("grch"))
                    .map(|(key, locus)| (key.as_str(), AssemblyLocus::from_value(locus)))
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Transcript entries (keys starting with `ENST` whose value is an object),
    /// unsorted
    pub fn transcripts(&self) -> Vec<TranscriptDescription> {
        self.entries
            .iter()
            .filter_map(|(key, value)| {
                let entry = value.as_object().filter(|_| key.starts_with("ENST"))?;
                Some(TranscriptDescription {
                    transcript_id: key.split(':').next().unwrap_or(key).to_string(),
                    hgvs_coding: key.clone(),
                    hgvs_protein: entry
                        .get("hgvs_protein")
                        .and_then(Value::as_str)
                        .map(str::to_string),
                    canonical: is_set(entry.get("canonical")),
                    mane_select: is_set(entry.get("mane_select")),
                })
            })
            .collect()
    }
}

/// Render a JSON scalar without quotes; null and missing read as absent
fn scalar_text(value: Option<&Value>) -> Option<String> {
    match value? {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

/// Boolean flags arrive as `true`/`false` or as `1`/`0`
fn is_set(value: Option<&Value>) -> bool {
    match value {
        Some(Value::Bool(b)) => *b,
        Some(Value::Number(n)) => n.as_f64().is_some_and(|n| n != 0.0),
        _ => false,
    }
}
