//! Sheet document model shared by the export builders.

use serde::Serialize;

/// Which evidence bundle a column holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EvidenceKind {
    /// Photos of the item itself (warranty / return).
    ProductPhotos,
    /// Delivery proof photos.
    DeliveryProof,
}

/// Evidence images anchored to one cell (0-based row and column in
/// [`Sheet::rows`]). The renderer embeds the paths, already capped to the
/// configured maximum.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EvidenceAnchor {
    pub row: usize,
    pub column: usize,
    pub kind: EvidenceKind,
    pub paths: Vec<String>,
}

/// A fully computed export sheet: every cell as its display string.
///
/// Row 0 is a blank row carrying the centered title, row 1 the headers,
/// then the data rows and (for orders) a separated summary block.
#[derive(Debug, Clone, Serialize)]
pub struct Sheet {
    pub title: String,
    pub rows: Vec<Vec<String>>,
    /// Index of the last data row; summary rows, if any, come after it.
    pub data_end_row: usize,
    pub evidence: Vec<EvidenceAnchor>,
}

impl Sheet {
    /// Start a sheet with the title placed at the middle column of an
    /// otherwise blank first row, headers on the second.
    pub(crate) fn with_title(title: &str, headers: Vec<String>) -> Self {
        let width = headers.len();
        let mut title_row = vec![String::new(); width];
        title_row[width / 2] = title.to_string();
        Sheet {
            title: title.to_string(),
            rows: vec![title_row, headers],
            data_end_row: 1,
            evidence: Vec::new(),
        }
    }

    pub fn column_count(&self) -> usize {
        self.rows.get(1).map(Vec::len).unwrap_or(0)
    }

    pub fn header_row(&self) -> &[String] {
        self.rows.get(1).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Data rows only (between the header and any summary block).
    pub fn data_rows(&self) -> &[Vec<String>] {
        &self.rows[2..=self.data_end_row]
    }
}
