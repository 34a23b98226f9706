/// Footer stamp the court's document tracking system prints on every page.
const FOOTER_PREFIX: &str = "TNT-";

/// Phrases that only appear in column headings and section titles.
const HEADER_PHRASES: [&str; 8] = [
    "matter number",
    "objection number",
    "objector",
    "tenement affected",
    "applicant",
    "comments",
    "respondent",
    "exemption",
];

/// Split a raw page into trimmed, non-empty lines with footer stamps removed.
pub fn normalize_page(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with(FOOTER_PREFIX))
        .map(str::to_string)
        .collect()
}

pub fn is_header_line(line: &str) -> bool {
    let line = line.to_lowercase();
    HEADER_PHRASES.iter().any(|phrase| line.contains(phrase))
}
