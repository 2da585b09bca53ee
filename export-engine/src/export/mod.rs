//! Export Sheet Builders
//!
//! Computes the full cell grid of each document export — title row,
//! header row, grouped data rows and summary block — plus the evidence
//! anchors a renderer embeds images at. Styling and the actual
//! spreadsheet writing belong to the renderer.

pub mod format;
pub mod order;
pub mod order_batch;
pub mod product_return;
mod sheet;
pub mod warranty;

pub use order::build_order_sheet;
pub use order_batch::{OrderExportFilter, build_filtered_orders_sheet, filter_orders};
pub use product_return::build_return_sheet;
pub use sheet::{EvidenceAnchor, EvidenceKind, Sheet};
pub use warranty::build_warranty_sheet;
