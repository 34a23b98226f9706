use serde::Serialize;
use std::fmt;

/// Which kind of matters a cause list page schedules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    Objection,
    Forfeiture,
    Exemption,
    Unknown,
}

/// Checked in order; the first group with a hit wins.
const KEYWORD_GROUPS: [(Section, &[&str]); 3] = [
    (Section::Objection, &["objection", "objector"]),
    (Section::Forfeiture, &["forfeiture", "forfeit"]),
    (Section::Exemption, &["exemption", "exempt"]),
];

impl Section {
    pub fn classify(text: &str) -> Section {
        let text = text.to_lowercase();
        KEYWORD_GROUPS
            .iter()
            .find(|(_, keywords)| keywords.iter().any(|k| text.contains(k)))
            .map(|(section, _)| *section)
            .unwrap_or(Section::Unknown)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Section::Objection => "objection",
            Section::Forfeiture => "forfeiture",
            Section::Exemption => "exemption",
            Section::Unknown => "unknown",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_objector_any_case() {
        assert_eq!(Section::classify("NAME OF OBJECTOR"), Section::Objection);
        assert_eq!(Section::classify("the Objector appears"), Section::Objection);
    }

    #[test]
    fn test_objection_wins_over_later_groups() {
        let text = "Objection to application for exemption; forfeiture pending";
        assert_eq!(Section::classify(text), Section::Objection);
    }

    #[test]
    fn test_forfeiture_before_exemption() {
        assert_eq!(
            Section::classify("Applications for Forfeiture and exemption"),
            Section::Forfeiture
        );
        assert_eq!(Section::classify("plaint to forfeit"), Section::Forfeiture);
    }

    #[test]
    fn test_exemption() {
        assert_eq!(
            Section::classify("APPLICATIONS FOR EXEMPTION FROM EXPENDITURE"),
            Section::Exemption
        );
    }

    #[test]
    fn test_unknown() {
        assert_eq!(Section::classify("Mining Registrar\nList of matters"), Section::Unknown);
        assert_eq!(Section::classify(""), Section::Unknown);
    }
}
