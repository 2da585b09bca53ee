//! Product-return sheet.
//!
//! Returns carry one refund nominal for the whole document rather than
//! per-item prices; items are grouped and quantities summed.

use std::collections::HashMap;

use shared::models::{ProductDetails, ProductReturn, StatusKind, status_label};

use crate::core::ExportConfig;
use crate::export::format::{dash_if_empty, format_currency, format_date, format_datetime};
use crate::export::sheet::{EvidenceAnchor, EvidenceKind, Sheet};
use crate::grouping::group_line_items;

pub const RETURN_SHEET_TITLE: &str = "PRODUCT RETURN";

fn headers() -> Vec<String> {
    [
        "No.",
        "No Return",
        "Tanggal Dibuat",
        "Customer",
        "Barcode",
        "Brand",
        "Category",
        "Product",
        "Warna",
        "Pcs/item",
        "Alasan Return",
        "Nominal",
        "Karyawan",
        "Department",
        "Status Pengajuan",
        "Status Produk",
        "Status Return",
        "Batas Hold",
        "Alasan Hold",
        "Foto Barang",
        "Bukti Pengiriman",
    ]
    .iter()
    .map(|h| h.to_string())
    .collect()
}

/// Build the sheet for one product return.
pub fn build_return_sheet(
    ret: &ProductReturn,
    catalog: &HashMap<i64, ProductDetails>,
    cfg: &ExportConfig,
) -> Sheet {
    let items = ret.line_items(catalog);
    let groups = group_line_items(&items);

    let mut sheet = Sheet::with_title(RETURN_SHEET_TITLE, headers());
    let width = sheet.column_count();

    let product_photos: Vec<String> =
        ret.image.paths().into_iter().take(cfg.max_evidence_images).collect();
    let delivery_proof: Vec<String> = ret
        .delivery_images
        .paths()
        .into_iter()
        .take(cfg.max_evidence_images)
        .collect();

    for (no, group) in groups.iter().enumerate() {
        sheet.rows.push(vec![
            (no + 1).to_string(),
            dash_if_empty(ret.no_return.as_deref()),
            format_datetime(ret.created_at, cfg),
            dash_if_empty(ret.customer_name.as_deref()),
            dash_if_empty(Some(&group.barcode)),
            dash_if_empty(Some(&group.brand_name)),
            dash_if_empty(Some(&group.category_name)),
            dash_if_empty(Some(&group.product_name)),
            dash_if_empty(Some(&group.color)),
            group.quantity.to_string(),
            dash_if_empty(ret.reason.as_deref()),
            format_currency(ret.amount, cfg),
            dash_if_empty(ret.employee_name.as_deref()),
            dash_if_empty(ret.department_name.as_deref()),
            status_label(StatusKind::Submission, ret.status_pengajuan.as_deref()),
            status_label(StatusKind::Product, ret.status_product.as_deref()),
            status_label(StatusKind::Order, ret.status_return.as_deref()),
            format_date(ret.on_hold_until.map(|dt| dt.date()), cfg),
            dash_if_empty(ret.on_hold_comment.as_deref()),
            if product_photos.is_empty() { "-".to_string() } else { String::new() },
            if delivery_proof.is_empty() { "-".to_string() } else { String::new() },
        ]);
    }

    sheet.data_end_row = sheet.rows.len() - 1;

    if !groups.is_empty() {
        if !product_photos.is_empty() {
            sheet.evidence.push(EvidenceAnchor {
                row: 2,
                column: width - 2,
                kind: EvidenceKind::ProductPhotos,
                paths: product_photos,
            });
        }
        if !delivery_proof.is_empty() {
            sheet.evidence.push(EvidenceAnchor {
                row: 2,
                column: width - 1,
                kind: EvidenceKind::DeliveryProof,
                paths: delivery_proof,
            });
        }
    }

    sheet
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::models::{ColorRef, ProductsField, RawLineItem};

    fn catalog() -> HashMap<i64, ProductDetails> {
        let mut map = HashMap::new();
        map.insert(
            7,
            ProductDetails {
                brand_name: Some("Nanostrip".to_string()),
                category_name: Some("LED Strip".to_string()),
                product_name: Some("LS-5M".to_string()),
                barcode: Some("899007".to_string()),
                colors: vec!["RGB".to_string()],
                ..Default::default()
            },
        );
        map
    }

    fn ret() -> ProductReturn {
        ProductReturn {
            no_return: Some("RET-20250807ZZ19".to_string()),
            customer_name: Some("CV Cahaya".to_string()),
            reason: Some("Barang rusak saat diterima".to_string()),
            amount: 125_000,
            status_pengajuan: Some("approved".to_string()),
            status_return: Some("on_hold".to_string()),
            products: ProductsField::Items(vec![RawLineItem {
                produk_id: Some(7),
                warna_id: Some(ColorRef::Index(0)),
                quantity: Some(2.0),
                price: None,
            }]),
            ..Default::default()
        }
    }

    #[test]
    fn return_rows_show_the_document_nominal_and_mapped_statuses() {
        let cfg = ExportConfig::default();
        let sheet = build_return_sheet(&ret(), &catalog(), &cfg);

        assert_eq!(sheet.column_count(), 21);
        let row = &sheet.data_rows()[0];
        assert_eq!(row[1], "RET-20250807ZZ19");
        assert_eq!(row[8], "RGB");
        assert_eq!(row[9], "2");
        assert_eq!(row[11], "Rp 125.000");
        assert_eq!(row[14], "Disetujui");
        assert_eq!(row[16], "On Hold");
    }

    #[test]
    fn no_items_means_no_rows_or_anchors() {
        let cfg = ExportConfig::default();
        let mut ret = ret();
        ret.products = ProductsField::Items(vec![]);
        let sheet = build_return_sheet(&ret, &catalog(), &cfg);

        assert!(sheet.data_rows().is_empty());
        assert!(sheet.evidence.is_empty());
    }
}
