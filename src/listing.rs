//! Listing table scraping
//!
//! The mirror's response is a plain HTML page; the file list lives in a
//! `table.tftable` whose first row is the header. Scraping remote markup
//! is inherently fragile, so the parser sits behind a trait and is
//! best-effort: missing cells or attributes become empty strings and a
//! malformed row never fails the run.

use crate::domain::PackageEntry;
use scraper::{ElementRef, Html, Selector};

/// Trait for turning the mirror's HTML response into listing entries
pub trait ListingParser: Send + Sync {
    /// Extract listing entries in document order
    fn parse_listing(&self, html: &str) -> Vec<PackageEntry>;
}

/// Parser for the mirror's `table.tftable` markup
#[derive(Debug, Default)]
pub struct TableListingParser;

impl TableListingParser {
    /// Create a new table parser
    pub fn new() -> Self {
        Self
    }

    /// Concatenated, trimmed text of an element
    fn cell_text(cell: &ElementRef) -> String {
        cell.text().collect::<String>().trim().to_string()
    }
}

impl ListingParser for TableListingParser {
    fn parse_listing(&self, html: &str) -> Vec<PackageEntry> {
        let row_selector =
            Selector::parse("table.tftable tr").expect("Invalid row selector");
        let cell_selector = Selector::parse("td").expect("Invalid cell selector");
        let anchor_selector = Selector::parse("a").expect("Invalid anchor selector");

        let document = Html::parse_document(html);
        let mut entries = Vec::new();

        // First row is the header
        for row in document.select(&row_selector).skip(1) {
            let cells: Vec<ElementRef> = row.select(&cell_selector).collect();

            let name = cells
                .first()
                .map(Self::cell_text)
                .unwrap_or_default();
            let url = cells
                .first()
                .and_then(|cell| cell.select(&anchor_selector).next())
                .and_then(|anchor| anchor.value().attr("href"))
                .unwrap_or_default()
                .to_string();
            let expire = cells.get(1).map(Self::cell_text).unwrap_or_default();
            let sha1 = cells.get(2).map(Self::cell_text).unwrap_or_default();

            entries.push(PackageEntry::new(name, url, expire, sha1));
        }

        entries
    }
}
