//! Spreadsheet loader.
//!
//! The sheet is published as CSV. The first row is a header and only the first
//! column matters; its name is irrelevant.

use crate::{Error, Result};
use std::io::Read;

/// Download the sheet and return the first-column cell of every data row.
///
/// Cells are trimmed; blank cells are kept as empty strings so row numbers
/// stay aligned with the sheet.
pub async fn fetch_identifiers(url: &str) -> Result<Vec<String>> {
    tracing::info!("Downloading spreadsheet");

    let resp = reqwest::get(url)
        .await
        .map_err(|e| Error::SpreadsheetLoad(e.to_string()))?;

    let status = resp.status();
    if !status.is_success() {
        return Err(Error::SpreadsheetLoad(format!("HTTP {}", status.as_u16())));
    }

    let body = resp
        .bytes()
        .await
        .map_err(|e| Error::SpreadsheetLoad(e.to_string()))?;

    read_identifiers(body.as_ref())
}

/// Read first-column cells from CSV data.
pub fn read_identifiers<R: Read>(data: R) -> Result<Vec<String>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(data);

    let header = reader.headers()?.get(0).unwrap_or_default().to_string();
    tracing::debug!("Using column {:?}", header);

    let mut cells = Vec::new();
    for record in reader.records() {
        let record = record?;
        cells.push(record.get(0).unwrap_or_default().trim().to_string());
    }

    Ok(cells)
}
