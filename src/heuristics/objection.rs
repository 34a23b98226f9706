use super::{ObjectionRecord, Record, RecordBase};
use regex::Regex;
use std::sync::LazyLock;

static OBJECTION_NO_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^(\d{6,})\s+").unwrap());

/// Tenement codes look like "E 15/2082" or "L 28/100".
static TENEMENT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b([A-Z]+\s+\d+/\d+)\b").unwrap());

/// Parse the joined content window of an objection row.
///
/// The window reads `MATTER OBJECTION_NO OBJECTOR TENEMENT APPLICANT` once the
/// fragments are joined. The tenement code is the only token distinctive
/// enough to split the two party names, so everything before it is the
/// objector and everything after it is the applicant.
pub fn parse_objection(content: &str, matter_number: u64) -> Option<Record> {
    let content = strip_matter_number(content, matter_number);

    let caps = OBJECTION_NO_RE.captures(content)?;
    let objection_number = caps[1].parse::<u64>().ok()?;
    let content = &content[caps.get(0)?.end()..];

    let tenement = TENEMENT_RE.find(content)?;
    let objector = content[..tenement.start()].trim();
    let applicant = content[tenement.end()..].trim();

    Some(Record::Objection(ObjectionRecord {
        base: RecordBase {
            matter_number,
            tenement_number: tenement.as_str().to_string(),
            comments: String::new(),
        },
        objection_number,
        objector_name: objector.to_string(),
        applicant_name: applicant.to_string(),
    }))
}

/// Drop the leading token when it is the matter number, however it was
/// zero-padded on the page.
fn strip_matter_number(content: &str, matter_number: u64) -> &str {
    match content.split_once(char::is_whitespace) {
        Some((token, rest))
            if token.bytes().all(|b| b.is_ascii_digit())
                && token.parse::<u64>().ok() == Some(matter_number) =>
        {
            rest.trim_start()
        }
        _ => content,
    }
}
