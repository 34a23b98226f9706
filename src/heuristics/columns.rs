use super::{ExemptionRecord, ForfeitureRecord, ObjectionRecord, Record, RecordBase, Section};
use regex::Regex;
use std::sync::LazyLock;

/// Some extractors keep the table's column gaps as tabs or runs of spaces.
static COLUMN_GAP_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s{2,}|\t").unwrap());
static COLUMN_ROW_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\d+(?:\t|\s{2,})").unwrap());

/// A line that starts with a matter number followed by a column gap.
pub fn is_column_row(line: &str) -> bool {
    COLUMN_ROW_RE.is_match(line)
}

/// Parse a row whose columns survived extraction.
pub fn parse_column_row(line: &str, section: Section) -> Option<Record> {
    let fields: Vec<&str> = COLUMN_GAP_RE.split(line).map(str::trim).collect();
    if fields.len() < 3 {
        return None;
    }
    let matter_number = fields[0].parse::<u64>().ok()?;

    match section {
        Section::Forfeiture => forfeiture_row(&fields, matter_number),
        Section::Exemption => exemption_row(&fields, matter_number),
        Section::Objection | Section::Unknown => objection_row(&fields, matter_number),
    }
}

fn field(fields: &[&str], index: usize) -> String {
    fields.get(index).map(|f| f.to_string()).unwrap_or_default()
}

// matter, objection number, objector, tenement affected, applicant, comments
fn objection_row(fields: &[&str], matter_number: u64) -> Option<Record> {
    if fields.len() < 6 {
        return None;
    }
    let objection_number = fields[1].parse::<u64>().ok()?;

    Some(Record::Objection(ObjectionRecord {
        base: RecordBase {
            matter_number,
            tenement_number: field(fields, 3),
            comments: field(fields, 5),
        },
        objection_number,
        objector_name: field(fields, 2),
        applicant_name: field(fields, 4),
    }))
}

// matter, tenement affected, applicant, respondent, comments
fn forfeiture_row(fields: &[&str], matter_number: u64) -> Option<Record> {
    if fields.len() < 5 {
        return None;
    }

    Some(Record::Forfeiture(ForfeitureRecord {
        base: RecordBase {
            matter_number,
            tenement_number: field(fields, 1),
            comments: field(fields, 4),
        },
        applicant_name: field(fields, 2),
        respondent_name: field(fields, 3),
    }))
}

// matter, tenement affected, applicant, respondent, comments
fn exemption_row(fields: &[&str], matter_number: u64) -> Option<Record> {
    if fields.len() < 4 {
        return None;
    }

    Some(Record::Exemption(ExemptionRecord {
        base: RecordBase {
            matter_number,
            tenement_number: field(fields, 1),
            comments: field(fields, 4),
        },
        applicant_name: field(fields, 2),
        respondent_name: field(fields, 3),
    }))
}
