//! Plain-text rendering of validation results

use chrono::{Local, NaiveDateTime};

use super::types::{LookupFailure, TranscriptDescription, ValidationRecord, ValidationResult};

/// Width of the `=` and `-` rules under headings
const RULE_WIDTH: usize = 80;

const REPORT_TITLE: &str = "Ensembl Variant Validation Report";

/// Message used when the service answered with an empty record
pub const NO_RESULTS_MESSAGE: &str = "No results returned from API";

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

type Section = Vec<String>;

/// Render a validation result, stamping the report with the local time
pub fn format_report(result: &ValidationResult) -> String {
    format_report_at(result, Local::now().naive_local())
}

/// Render a validation result with an explicit generation time
///
/// Failures render as a single `Error: ...` line. Successful records render
/// as a header followed by the transcript, genomic, gene and warning
/// sections; a section with nothing to show is left out.
pub fn format_report_at(result: &ValidationResult, generated_at: NaiveDateTime) -> String {
    let record = match result {
        ValidationResult::Failure(failure) => return format_failure(failure),
        ValidationResult::Success(record) if record.is_empty() => {
            return format!("Error: {}", NO_RESULTS_MESSAGE)
        }
        ValidationResult::Success(record) => record,
    };

    let mut sections = vec![header_section(record, generated_at)];
    sections.extend(transcript_section(record));
    sections.extend(genomic_section(record));
    sections.extend(gene_section(record));
    sections.extend(warnings_section(record));

    sections
        .iter()
        .map(|section| section.join("\n"))
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// `Error: {message}` with ` (Status: {code})` when a status is known
pub fn format_failure(failure: &LookupFailure) -> String {
    match failure.status_code {
        Some(code) => format!("Error: {} (Status: {})", failure.error, code),
        None => format!("Error: {}", failure.error),
    }
}

/// Order transcripts MANE Select first, then canonical, then by accession
pub fn sort_transcripts(transcripts: &mut [TranscriptDescription]) {
    transcripts.sort_by(|a, b| {
        b.mane_select
            .cmp(&a.mane_select)
            .then(b.canonical.cmp(&a.canonical))
            .then_with(|| a.transcript_id.cmp(&b.transcript_id))
    });
}

fn heading(title: &str, underline: char) -> Section {
    vec![title.to_string(), underline.to_string().repeat(RULE_WIDTH)]
}

fn header_section(record: &ValidationRecord, generated_at: NaiveDateTime) -> Section {
    let mut lines = heading(REPORT_TITLE, '=');
    lines.push(format!("Submitted Variant: {}", record.submitted_variant()));
    lines.push(format!(
        "Validation Status: {}",
        record.flag().to_uppercase()
    ));
    lines.push(format!(
        "Validation Date: {}",
        generated_at.format(TIMESTAMP_FORMAT)
    ));
    lines
}

fn transcript_section(record: &ValidationRecord) -> Option<Section> {
    let mut transcripts = record.transcripts();
    if transcripts.is_empty() {
        return None;
    }
    sort_transcripts(&mut transcripts);

    let mut lines = heading("Ensembl Variant Descriptions", '-');
    lines.push(format!(
        "{:<20}{:<40}{}",
        "Type", "Variant Description", "Transcript Type"
    ));

    for transcript in &transcripts {
        let label = transcript.type_label();
        lines.push(format!(
            "{:<20}{:<40}{}",
            "Transcript (:c.)", transcript.hgvs_coding, label
        ));

        if let Some(protein) = &transcript.hgvs_protein {
            lines.push(format!("{:<20}{:<40}{}", "Protein (:p.)", protein, label));
            if let Some(short) = transcript.abbreviated_protein() {
                lines.push(format!("{:<20}{:<40}{}", "Protein (:p.)", short, label));
            }
        }
    }

    Some(lines)
}

fn genomic_section(record: &ValidationRecord) -> Option<Section> {
    let rows: Vec<String> = record
        .assembly_loci()
        .into_iter()
        .map(|(assembly, locus)| {
            format!(
                "{:<10}{:<40}{}",
                assembly.to_uppercase(),
                locus.genomic_description(),
                locus.vcf_token()
            )
        })
        .collect();
    if rows.is_empty() {
        return None;
    }

    let mut lines = heading("Genomic Variants", '-');
    lines.push(format!(
        "{:<10}{:<40}{}",
        "Assembly", "Variant Description", "VCF Format"
    ));
    lines.extend(rows);
    Some(lines)
}

fn gene_section(record: &ValidationRecord) -> Option<Section> {
    let ids = record.gene_ids()?;

    let mut lines = heading("Gene Information:", '-');
    lines.push(format!("Symbol: {}", record.gene_symbol()));
    lines.push(format!("HGNC ID: {}", ids.hgnc_id()));
    lines.push(format!("Ensembl Gene: {}", ids.ensembl_gene_id()));
    Some(lines)
}

fn warnings_section(record: &ValidationRecord) -> Option<Section> {
    let warnings = record.warnings();
    if warnings.is_empty() {
        return None;
    }

    let mut lines = heading("Validation Warnings:", '-');
    lines.extend(warnings.iter().map(|warning| format!("- {}", warning)));
    Some(lines)
}
