use super::normalize::is_header_line;
use super::{Record, Section, columns, objection};
use std::ops::Range;
use tracing::debug;

/// How many lines after the matter number a single row may absorb. Without a
/// bound, a row near the end of a page swallows whatever text trails it.
pub const LOOKAHEAD_LINES: usize = 15;

/// A bare number this short that differs from the current matter number is
/// taken to be the next row's matter number.
const NEXT_MARKER_MAX_DIGITS: usize = 3;

/// Records recovered from one page, plus the candidate rows that yielded none.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct PageRows {
    pub records: Vec<Record>,
    pub skipped: Vec<SkippedRow>,
    /// Line ranges consumed by each candidate row, in scan order.
    pub windows: Vec<Range<usize>>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SkippedRow {
    pub matter_number: u64,
    /// Index of the row's first line within the normalized page.
    pub line: usize,
    pub content: String,
    pub reason: SkipReason,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// A required anchor (objection number, tenement code, column count) was missing.
    Unparsed,
    /// The section has no extractor for flattened rows.
    Unsupported(Section),
}

fn is_bare_number(line: &str) -> bool {
    !line.is_empty() && line.bytes().all(|b| b.is_ascii_digit())
}

fn is_next_marker(line: &str, matter_number: u64) -> bool {
    is_bare_number(line)
        && line.len() <= NEXT_MARKER_MAX_DIGITS
        && line.parse::<u64>().is_ok_and(|n| n != matter_number)
}

/// Collect the content window of the row whose matter number sits at `start`.
///
/// Returns the index of the first line not consumed, and the window itself
/// (starting with the matter number line). Stops before a header line, before
/// the next row's matter number or column row, or once `LOOKAHEAD_LINES` lines have been
/// taken after the matter number.
pub fn collect_window(lines: &[String], start: usize, matter_number: u64) -> (usize, Vec<&str>) {
    let Some(first) = lines.get(start) else {
        return (start, Vec::new());
    };

    let mut window = vec![first.as_str()];
    let mut index = start + 1;

    while index < lines.len() && window.len() <= LOOKAHEAD_LINES {
        let line = lines[index].trim();
        if line.is_empty() {
            index += 1;
            continue;
        }
        if is_header_line(line)
            || is_next_marker(line, matter_number)
            || columns::is_column_row(line)
        {
            break;
        }
        window.push(line);
        index += 1;
    }

    (index, window)
}

/// Rebuild the rows of one normalized page.
pub fn reconstruct_rows(lines: &[String], section: Section) -> PageRows {
    let mut rows = PageRows::default();
    let mut index = 0;

    while index < lines.len() {
        let line = lines[index].as_str();

        if is_header_line(line) {
            index += 1;
            continue;
        }

        if columns::is_column_row(line) {
            if let Some(matter_number) = leading_number(line) {
                let record = columns::parse_column_row(line, section);
                rows.accept(record, matter_number, index..index + 1, line, SkipReason::Unparsed);
                index += 1;
                continue;
            }
        }

        if !is_bare_number(line) {
            index += 1;
            continue;
        }

        let Ok(matter_number) = line.parse::<u64>() else {
            debug!(line = %line, "Matter number out of range, skipping line");
            index += 1;
            continue;
        };

        let (next, window) = collect_window(lines, index, matter_number);
        let content = window.join(" ");
        debug!(matter = matter_number, content = %content, "Collected row window");

        let (record, reason) = match section {
            Section::Objection | Section::Unknown => (
                objection::parse_objection(&content, matter_number),
                SkipReason::Unparsed,
            ),
            Section::Forfeiture | Section::Exemption => (None, SkipReason::Unsupported(section)),
        };
        rows.accept(record, matter_number, index..next, &content, reason);

        index = next;
    }

    rows
}

fn leading_number(line: &str) -> Option<u64> {
    line.split_whitespace().next()?.parse().ok()
}

impl PageRows {
    fn accept(
        &mut self,
        record: Option<Record>,
        matter_number: u64,
        window: Range<usize>,
        content: &str,
        reason: SkipReason,
    ) {
        match record {
            Some(record) => {
                debug!(
                    matter = matter_number,
                    tenement = %record.tenement_number(),
                    "Extracted record"
                );
                self.records.push(record);
            }
            None => {
                debug!(matter = matter_number, ?reason, "Row yielded no record");
                self.skipped.push(SkippedRow {
                    matter_number,
                    line: window.start,
                    content: content.to_string(),
                    reason,
                });
            }
        }
        self.windows.push(window);
    }
}
