// src/matcher.rs

use crate::heuristics::Record;
use crate::lawyer::AssignedMatter;
use regex::Regex;
use serde::Serialize;
use std::fmt;
use std::sync::LazyLock;

static NON_WORD_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\W+").unwrap());

/// Why an assigned matter was linked to a cause list record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchReason {
    TenementNumber,
    ClientIsApplyingParty,
    ClientIsRespondingParty,
    OtherPartyIsApplyingParty,
    OtherPartyIsRespondingParty,
}

impl fmt::Display for MatchReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            MatchReason::TenementNumber => "Tenement number match",
            MatchReason::ClientIsApplyingParty => "Client name matches applying party",
            MatchReason::ClientIsRespondingParty => "Client name matches responding party",
            MatchReason::OtherPartyIsApplyingParty => "Other party matches applying party",
            MatchReason::OtherPartyIsRespondingParty => "Other party matches responding party",
        })
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct MatchResult<'a> {
    pub assigned_matter: &'a AssignedMatter,
    pub record: &'a Record,
    pub reason: MatchReason,
}

/// Lowercase, collapse every run of punctuation or whitespace to one space, trim.
pub fn normalize_name(name: &str) -> String {
    NON_WORD_RE
        .replace_all(&name.to_lowercase(), " ")
        .trim()
        .to_string()
}

/// Equal after normalization, or one contains the other.
///
/// Containment is literal: "J Smith" matches "Smith" but not "John Smith".
pub fn names_match(a: &str, b: &str) -> bool {
    let a = normalize_name(a);
    let b = normalize_name(b);
    if a.is_empty() || b.is_empty() {
        return false;
    }
    a == b || a.contains(&b) || b.contains(&a)
}

/// Every rule the pair satisfies, in rule order, each reason at most once.
pub fn match_reasons(matter: &AssignedMatter, record: &Record) -> Vec<MatchReason> {
    let mut reasons = Vec::new();

    if !matter.tenement_number.is_empty()
        && matter
            .tenement_number
            .eq_ignore_ascii_case(record.tenement_number())
    {
        reasons.push(MatchReason::TenementNumber);
    }

    if names_match(&matter.client_name, record.applying_party()) {
        reasons.push(MatchReason::ClientIsApplyingParty);
    }
    if names_match(&matter.client_name, record.responding_party()) {
        reasons.push(MatchReason::ClientIsRespondingParty);
    }

    let others = &matter.other_party_names;
    if others.iter().any(|o| names_match(o, record.applying_party())) {
        reasons.push(MatchReason::OtherPartyIsApplyingParty);
    }
    if others.iter().any(|o| names_match(o, record.responding_party())) {
        reasons.push(MatchReason::OtherPartyIsRespondingParty);
    }

    reasons
}

/// Pair every assigned matter with every record it matches, once per reason.
pub fn search<'a>(matters: &'a [AssignedMatter], records: &'a [Record]) -> Vec<MatchResult<'a>> {
    matters
        .iter()
        .flat_map(move |matter| {
            records.iter().flat_map(move |record| {
                match_reasons(matter, record)
                    .into_iter()
                    .map(move |reason| MatchResult {
                        assigned_matter: matter,
                        record,
                        reason,
                    })
            })
        })
        .collect()
}
