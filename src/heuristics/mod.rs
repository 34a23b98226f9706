// src/heuristics/mod.rs

mod columns;
mod normalize;
mod objection;
mod rows;
mod section;

use serde::Serialize;

use normalize::normalize_page;
use rows::reconstruct_rows;

pub use rows::{PageRows, SkipReason};
pub use section::Section;

/// Fields every cause list record carries regardless of its category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecordBase {
    pub matter_number: u64,
    pub tenement_number: String,
    /// Empty string when the row had no comments column.
    pub comments: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ObjectionRecord {
    #[serde(flatten)]
    pub base: RecordBase,
    pub objection_number: u64,
    /// The responding party.
    pub objector_name: String,
    /// The applying party.
    pub applicant_name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ForfeitureRecord {
    #[serde(flatten)]
    pub base: RecordBase,
    pub applicant_name: String,
    pub respondent_name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExemptionRecord {
    #[serde(flatten)]
    pub base: RecordBase,
    pub applicant_name: String,
    pub respondent_name: String,
}

/// One scheduled matter recovered from a cause list page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Record {
    Objection(ObjectionRecord),
    Forfeiture(ForfeitureRecord),
    Exemption(ExemptionRecord),
}

impl Record {
    fn base(&self) -> &RecordBase {
        match self {
            Record::Objection(r) => &r.base,
            Record::Forfeiture(r) => &r.base,
            Record::Exemption(r) => &r.base,
        }
    }

    pub fn section(&self) -> Section {
        match self {
            Record::Objection(_) => Section::Objection,
            Record::Forfeiture(_) => Section::Forfeiture,
            Record::Exemption(_) => Section::Exemption,
        }
    }

    pub fn matter_number(&self) -> u64 {
        self.base().matter_number
    }

    pub fn tenement_number(&self) -> &str {
        &self.base().tenement_number
    }

    pub fn comments(&self) -> &str {
        &self.base().comments
    }

    pub fn applying_party(&self) -> &str {
        match self {
            Record::Objection(r) => &r.applicant_name,
            Record::Forfeiture(r) => &r.applicant_name,
            Record::Exemption(r) => &r.applicant_name,
        }
    }

    pub fn responding_party(&self) -> &str {
        match self {
            Record::Objection(r) => &r.objector_name,
            Record::Forfeiture(r) => &r.respondent_name,
            Record::Exemption(r) => &r.respondent_name,
        }
    }

    /// Only objections carry an objection number.
    pub fn objection_number(&self) -> Option<u64> {
        match self {
            Record::Objection(r) => Some(r.objection_number),
            _ => None,
        }
    }
}

/// Classify one raw page and recover its records.
pub fn extract_page_records(text: &str) -> (Section, PageRows) {
    let section = Section::classify(text);
    let lines = normalize_page(text);
    (section, reconstruct_rows(&lines, section))
}
