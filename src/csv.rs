// src/csv.rs
//
// Tabular source: the published sheet as header-keyed rows.

use tracing::{debug, warn};

use crate::core::net;
use crate::error::FetchError;
use crate::record::{RawRow, COLUMNS};

/* ---------------- Parsing ---------------- */

/// Parse comma-separated text whose first line is the header.
///
/// Ragged rows are tolerated: a short row simply lacks the trailing columns,
/// which read back as empty. Blank lines are skipped.
pub fn parse_rows(text: &str) -> Vec<RawRow> {
    let mut reader = ::csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(text.as_bytes());

    let headers = match reader.headers() {
        Ok(h) => h.clone(),
        Err(e) => {
            warn!("Unreadable sheet header: {e}");
            return Vec::new();
        }
    };

    for col in COLUMNS {
        if !headers.iter().any(|h| h == col) {
            warn!("Sheet has no `{col}` column");
        }
    }

    let mut rows = Vec::new();
    for (i, record) in reader.records().enumerate() {
        match record {
            Ok(record) => {
                rows.push(headers.iter().zip(record.iter()).collect::<RawRow>());
            }
            Err(e) => {
                // Still counts toward row numbering so later ordinals line up.
                warn!("Skipping unreadable sheet record #{}: {e}", i + 1);
                rows.push(RawRow::new());
            }
        }
    }
    rows
}

/* ---------------- Fetching ---------------- */

/// Download the sheet at `url` and parse it.
pub fn fetch(url: &str) -> Result<Vec<RawRow>, FetchError> {
    let text = net::http_get_text(url)?;
    debug!("Sheet body: {} bytes", text.len());
    Ok(parse_rows(&text))
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str = "name,bio,link,github,linkedin,twitter,instagram,image";

    #[test]
    fn rows_are_keyed_by_header() {
        let text = format!("{HEADER}\nAda, Math ,https://ada.dev,,,,,\n");
        let rows = parse_rows(&text);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].get("name"), "Ada");
        assert_eq!(rows[0].get("bio"), " Math ");
        assert_eq!(rows[0].get("link"), "https://ada.dev");
    }

    #[test]
    fn quoted_fields_keep_commas_and_newlines() {
        let text = format!("{HEADER}\r\n\"Lovelace, Ada\",\"line one\nline two\",,,,,,\r\n");
        let rows = parse_rows(&text);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].get("name"), "Lovelace, Ada");
        assert_eq!(rows[0].get("bio"), "line one\nline two");
    }

    #[test]
    fn short_rows_surface_as_empty_fields() {
        let text = format!("{HEADER}\nAda,bio only\n\nGrace\n");
        let rows = parse_rows(&text);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].get("image"), "");
        assert_eq!(rows[1].get("name"), "Grace");
        assert_eq!(rows[1].get("bio"), "");
    }

    #[test]
    fn header_only_sheet_has_no_rows() {
        assert!(parse_rows(HEADER).is_empty());
        assert!(parse_rows("").is_empty());
    }
}
