// src/cause_list.rs

use crate::error::CauseListError;
use crate::heuristics::{self, Record, SkipReason};
use crate::lawyer::AssignedMatter;
use crate::matcher::{self, MatchResult};
use crate::pdf_extract::{PageSource, PdfDocument};
use time::OffsetDateTime;
use tracing::{debug, info, info_span, warn};

/// The first page is a cover sheet and never lists matters.
const FIRST_LISTING_PAGE: u32 = 2;

/// A published schedule of matters before a warden's court.
#[derive(Debug, Clone)]
pub struct CauseList {
    pub jurisdiction: String,
    pub warden: String,
    pub release_date: OffsetDateTime,
    /// In page-then-position order of discovery.
    pub items: Vec<Record>,
}

/// What one read pass did, including everything it had to skip.
#[derive(Debug, Default, Clone)]
pub struct ReadSummary {
    pub pages_total: u32,
    pub pages_read: u32,
    pub records_added: usize,
    pub diagnostics: Vec<String>,
}

impl CauseList {
    pub fn new(jurisdiction: &str, warden: &str, release_date: OffsetDateTime) -> Self {
        Self {
            jurisdiction: jurisdiction.to_string(),
            warden: warden.to_string(),
            release_date,
            items: Vec::new(),
        }
    }

    /// Open a PDF held in memory and append every record it lists.
    ///
    /// Fails only when the document itself cannot be opened; pages and rows
    /// that cannot be read are reported in the returned summary instead.
    pub fn read_cause_list(&mut self, pdf_bytes: &[u8]) -> Result<ReadSummary, CauseListError> {
        let pdf = PdfDocument::load(pdf_bytes)?;
        Ok(self.read_pages(&pdf))
    }

    pub fn read_pages(&mut self, source: &impl PageSource) -> ReadSummary {
        let mut summary = ReadSummary {
            pages_total: source.page_count(),
            ..ReadSummary::default()
        };
        info!(pages = summary.pages_total, "Reading cause list");

        if source.looks_scanned() {
            let message = "Document appears to be scanned; no text layer to read".to_string();
            warn!("{message}");
            summary.diagnostics.push(message);
        }

        for page in FIRST_LISTING_PAGE..=summary.pages_total {
            let span = info_span!("page", page);
            let _guard = span.enter();

            let text = match source.page_text(page) {
                Ok(text) => text,
                Err(e) => {
                    warn!(error = %e, "Skipping page");
                    summary.diagnostics.push(e.to_string());
                    continue;
                }
            };
            summary.pages_read += 1;

            let (section, rows) = heuristics::extract_page_records(&text);
            debug!(%section, "Detected section");

            for skipped in &rows.skipped {
                let message = match skipped.reason {
                    SkipReason::Unparsed => format!(
                        "Page {page}: could not parse row for matter {} (line {}): {}",
                        skipped.matter_number, skipped.line, skipped.content
                    ),
                    SkipReason::Unsupported(section) => format!(
                        "Page {page}: {section} rows without column gaps are not supported (matter {})",
                        skipped.matter_number
                    ),
                };
                summary.diagnostics.push(message);
            }

            info!(
                %section,
                records = rows.records.len(),
                skipped = rows.skipped.len(),
                "Extracted page"
            );
            summary.records_added += rows.records.len();
            self.items.extend(rows.records);
        }

        info!(
            total = self.items.len(),
            added = summary.records_added,
            diagnostics = summary.diagnostics.len(),
            "Cause list read"
        );
        summary
    }

    /// Every (matter, record, reason) match across the whole list.
    pub fn search_assigned_matters<'a>(
        &'a self,
        assigned_matters: &'a [AssignedMatter],
    ) -> Vec<MatchResult<'a>> {
        matcher::search(assigned_matters, &self.items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matcher::MatchReason;
    use crate::pdf_extract::tests::{build_pdf, build_scanned_pdf};

    /// Pages keyed 1..=N; `None` marks a page whose extraction fails.
    struct FakePages(Vec<Option<String>>);

    impl PageSource for FakePages {
        fn page_count(&self) -> u32 {
            self.0.len() as u32
        }

        fn page_text(&self, page: u32) -> Result<String, CauseListError> {
            match self.0.get(page as usize - 1).cloned().flatten() {
                Some(text) => Ok(text),
                None => Err(CauseListError::PageText {
                    page,
                    source: lopdf_error(),
                }),
            }
        }
    }

    /// Pages that read fine but claim to have no text layer.
    struct ScannedPages(FakePages);

    impl PageSource for ScannedPages {
        fn page_count(&self) -> u32 {
            self.0.page_count()
        }

        fn page_text(&self, page: u32) -> Result<String, CauseListError> {
            self.0.page_text(page)
        }

        fn looks_scanned(&self) -> bool {
            true
        }
    }

    fn lopdf_error() -> lopdf::Error {
        match lopdf::Document::load_mem(b"corrupt content") {
            Err(e) => e,
            Ok(_) => panic!("garbage bytes loaded as a PDF"),
        }
    }

    fn objection_page(matter: u64, tenement: &str) -> Option<String> {
        Some(format!(
            "OBJECTIONS\nMatter Number\nObjector\n{matter}\n{}\nSMITH JOHN\n{tenement}\nDOE JANE\nTNT-1\n",
            610000 + matter
        ))
    }

    fn empty_list() -> CauseList {
        CauseList::new("Kalgoorlie", "John Doe", OffsetDateTime::UNIX_EPOCH)
    }

    #[test]
    fn test_failed_page_is_skipped() {
        let source = FakePages(vec![
            objection_page(1, "E 15/1"),
            objection_page(2, "E 15/2"),
            None,
            objection_page(4, "E 15/4"),
            objection_page(5, "E 15/5"),
        ]);
        let mut list = empty_list();
        let summary = list.read_pages(&source);

        let matters: Vec<u64> = list.items.iter().map(Record::matter_number).collect();
        assert_eq!(matters, vec![2, 4, 5]);
        assert_eq!(summary.pages_total, 5);
        assert_eq!(summary.pages_read, 3);
        assert_eq!(summary.records_added, 3);
        assert_eq!(summary.diagnostics.len(), 1);
        assert!(summary.diagnostics[0].contains("page 3"));
    }

    #[test]
    fn test_scanned_source_is_reported() {
        let source = ScannedPages(FakePages(vec![None, objection_page(1, "E 15/1")]));
        let mut list = empty_list();
        let summary = list.read_pages(&source);
        assert_eq!(list.items.len(), 1);
        assert_eq!(summary.diagnostics.len(), 1);
        assert!(summary.diagnostics[0].contains("scanned"));
    }

    #[test]
    fn test_text_source_is_not_reported_as_scanned() {
        let source = FakePages(vec![None, objection_page(1, "E 15/1")]);
        let summary = empty_list().read_pages(&source);
        assert!(summary.diagnostics.is_empty());
    }

    #[test]
    fn test_scanned_pdf_is_reported() {
        let mut list = empty_list();
        let summary = list.read_cause_list(&build_scanned_pdf(3)).unwrap();
        assert_eq!(summary.pages_total, 3);
        assert!(list.items.is_empty());
        assert!(summary.diagnostics[0].contains("scanned"));
    }

    #[test]
    fn test_cover_page_is_never_read() {
        let source = FakePages(vec![objection_page(1, "E 15/1")]);
        let mut list = empty_list();
        let summary = list.read_pages(&source);
        assert!(list.items.is_empty());
        assert_eq!(summary.pages_read, 0);
    }

    #[test]
    fn test_items_accumulate_across_reads() {
        let mut list = empty_list();
        list.read_pages(&FakePages(vec![None, objection_page(1, "E 15/1")]));
        list.read_pages(&FakePages(vec![None, objection_page(2, "E 15/2")]));
        let matters: Vec<u64> = list.items.iter().map(Record::matter_number).collect();
        assert_eq!(matters, vec![1, 2]);
    }

    #[test]
    fn test_unsupported_rows_are_reported() {
        let page = "FORFEITURES\n1\nM 26/411\nACME\nBLOGGS\n".to_string();
        let mut list = empty_list();
        let summary = list.read_pages(&FakePages(vec![None, Some(page)]));
        assert!(list.items.is_empty());
        assert_eq!(summary.diagnostics.len(), 1);
        assert!(summary.diagnostics[0].contains("forfeiture"));
    }

    #[test]
    fn test_search_assigned_matters() {
        let source = FakePages(vec![
            None,
            objection_page(1, "E 15/2082"),
            objection_page(2, "L 15/474"),
        ]);
        let mut list = empty_list();
        list.read_pages(&source);

        let matters = vec![AssignedMatter {
            client_name: "Unrelated Pty Ltd".to_string(),
            tenement_number: "e 15/2082".to_string(),
            other_party_names: vec![],
        }];
        let results = list.search_assigned_matters(&matters);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].record.matter_number(), 1);
        assert_eq!(results[0].reason, MatchReason::TenementNumber);
    }

    #[test]
    fn test_malformed_document_is_fatal() {
        let mut list = empty_list();
        let result = list.read_cause_list(b"not a pdf at all");
        assert!(matches!(result, Err(CauseListError::Open(_))));
        assert!(list.items.is_empty());
    }

    #[test]
    fn test_read_cause_list_from_pdf() {
        let bytes = build_pdf(&[
            &["WARDENS COURT", "CAUSE LIST"],
            &[
                "OBJECTIONS",
                "Matter Number",
                "Objection Number",
                "1",
                "610234",
                "KARORRA HIGGINSVILLE PTY LTD",
                "E 15/2082",
                "FOCUS MINERALS LTD",
                "TNT-2025-0001",
            ],
        ]);
        let mut list = empty_list();
        let summary = list.read_cause_list(&bytes).unwrap();

        assert_eq!(summary.pages_total, 2);
        assert_eq!(list.items.len(), 1);
        let record = &list.items[0];
        assert_eq!(record.objection_number(), Some(610234));
        assert_eq!(record.tenement_number(), "E 15/2082");
        assert_eq!(record.responding_party(), "KARORRA HIGGINSVILLE PTY LTD");
        assert_eq!(record.applying_party(), "FOCUS MINERALS LTD");
    }
}
