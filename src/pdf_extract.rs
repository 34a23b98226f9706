// src/pdf_extract.rs

use crate::error::CauseListError;
use lopdf::{Document, ObjectId};
use tracing::debug;

/// Anything that can hand out the plain text of a document one page at a time.
pub trait PageSource {
    fn page_count(&self) -> u32;

    /// Text of the 1-based `page`.
    fn page_text(&self, page: u32) -> Result<String, CauseListError>;

    /// True when the document has no text layer to read.
    fn looks_scanned(&self) -> bool {
        false
    }
}

/// A PDF held in memory and decoded with lopdf.
pub struct PdfDocument {
    doc: Document,
}

impl PdfDocument {
    pub fn load(pdf_bytes: &[u8]) -> Result<Self, CauseListError> {
        let doc = Document::load_mem(pdf_bytes).map_err(CauseListError::Open)?;
        Ok(Self { doc })
    }
}

impl PageSource for PdfDocument {
    fn page_count(&self) -> u32 {
        self.doc.get_pages().len() as u32
    }

    fn page_text(&self, page: u32) -> Result<String, CauseListError> {
        self.doc
            .extract_text(&[page])
            .map_err(|source| CauseListError::PageText { page, source })
    }

    fn looks_scanned(&self) -> bool {
        looks_like_scanned(&self.doc)
    }
}

/// Share of pages that must be image-only before the document counts as scanned.
const SCANNED_PAGE_RATIO: f64 = 0.8;

/// A cause list that went through a scanner has pages holding images and no
/// fonts, so lopdf finds nothing to extract.
fn looks_like_scanned(doc: &Document) -> bool {
    let pages = doc.get_pages();
    if pages.is_empty() {
        return false;
    }

    let image_only = pages
        .values()
        .filter(|&&page_id| page_is_image_only(doc, page_id))
        .count();

    let ratio = image_only as f64 / pages.len() as f64;
    debug!(pages = pages.len(), image_only, ratio, "Checked text layer");
    ratio >= SCANNED_PAGE_RATIO
}

fn page_is_image_only(doc: &Document, page_id: ObjectId) -> bool {
    let resources = doc
        .get_dictionary(page_id)
        .and_then(|page| page.get(b"Resources"))
        .and_then(|r| doc.dereference(r))
        .and_then(|(_, resolved)| resolved.as_dict());
    let Ok(resources) = resources else {
        return false;
    };

    let has_entries = |key: &[u8]| {
        resources
            .get(key)
            .and_then(|entry| doc.dereference(entry))
            .and_then(|(_, resolved)| resolved.as_dict())
            .is_ok_and(|dict| !dict.is_empty())
    };
    has_entries(b"XObject") && !has_entries(b"Font")
}
