//! Shared status-code display labels.
//!
//! Every export in the old back office carried its own copy of these
//! match tables; they live here once, keyed by status kind.

use serde::{Deserialize, Serialize};

/// Which status column a code belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StatusKind {
    /// Payment progress (`status_pembayaran`).
    Payment,
    /// Approval of the submission itself (`status_pengajuan`).
    Submission,
    /// Stock availability (`status_product`).
    Product,
    /// Document workflow (`status_order`, `status_return`).
    Order,
}

/// Map a raw status code to its display label.
///
/// Blank or missing codes render as `-`; unknown codes fall back to the
/// code with its first letter uppercased.
pub fn status_label(kind: StatusKind, code: Option<&str>) -> String {
    let code = code.unwrap_or("");
    if code.is_empty() {
        return "-".to_string();
    }
    let label = match (kind, code) {
        (StatusKind::Payment, "belum bayar") => "Belum Bayar",
        (StatusKind::Payment, "sudah bayar") => "Sudah Bayar",
        (StatusKind::Payment, "belum lunas") => "Belum Lunas",
        (StatusKind::Payment, "sudah lunas") => "Sudah Lunas",

        (StatusKind::Submission, "pending") => "Pending",
        (StatusKind::Submission, "approved") => "Disetujui",
        (StatusKind::Submission, "rejected") => "Ditolak",

        (StatusKind::Product, "pending") => "Pending",
        (StatusKind::Product, "ready_stock") => "Ready Stock",
        (StatusKind::Product, "sold_out") => "Sold Out",
        (StatusKind::Product, "rejected") => "Ditolak",

        (StatusKind::Order, "pending") => "Pending",
        (StatusKind::Order, "confirmed") => "Confirmed",
        (StatusKind::Order, "processing") => "Processing",
        (StatusKind::Order, "on_hold") => "On Hold",
        (StatusKind::Order, "delivered") => "Delivered",
        (StatusKind::Order, "completed") => "Completed",
        (StatusKind::Order, "cancelled") => "Cancelled",
        (StatusKind::Order, "rejected") => "Ditolak",

        _ => return ucfirst(code),
    };
    label.to_string()
}

fn ucfirst(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_codes_map_to_labels() {
        assert_eq!(status_label(StatusKind::Payment, Some("belum bayar")), "Belum Bayar");
        assert_eq!(status_label(StatusKind::Submission, Some("approved")), "Disetujui");
        assert_eq!(status_label(StatusKind::Product, Some("ready_stock")), "Ready Stock");
        assert_eq!(status_label(StatusKind::Order, Some("on_hold")), "On Hold");
        assert_eq!(status_label(StatusKind::Order, Some("rejected")), "Ditolak");
    }

    #[test]
    fn blank_codes_render_as_dash() {
        assert_eq!(status_label(StatusKind::Payment, None), "-");
        assert_eq!(status_label(StatusKind::Order, Some("")), "-");
    }

    #[test]
    fn unknown_codes_fall_back_to_ucfirst() {
        assert_eq!(status_label(StatusKind::Order, Some("archived")), "Archived");
        assert_eq!(status_label(StatusKind::Payment, Some("dicicil")), "Dicicil");
    }

    #[test]
    fn same_code_labels_differ_by_kind() {
        // "rejected" is localized for every kind, but e.g. "confirmed"
        // only belongs to the order workflow.
        assert_eq!(status_label(StatusKind::Submission, Some("confirmed")), "Confirmed");
        assert_eq!(status_label(StatusKind::Order, Some("confirmed")), "Confirmed");
    }
}
