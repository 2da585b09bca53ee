//! Warranty-claim sheet.
//!
//! No prices on warranty claims: items are grouped by identity and only
//! quantities are summed. Two evidence columns — the claimed item's
//! photos and the delivery proof.

use std::collections::HashMap;

use shared::models::{ProductDetails, WarrantyClaim};

use crate::core::ExportConfig;
use crate::export::format::{dash_if_empty, format_date, format_datetime};
use crate::export::sheet::{EvidenceAnchor, EvidenceKind, Sheet};
use crate::grouping::group_line_items;

pub const WARRANTY_SHEET_TITLE: &str = "GARANSI";

fn headers() -> Vec<String> {
    [
        "No.",
        "No Garansi",
        "Tanggal Dibuat",
        "Tanggal Pembelian",
        "Tanggal Klaim",
        "Customer",
        "Barcode",
        "Brand",
        "Category",
        "Product",
        "Warna",
        "Pcs/item",
        "Alasan Klaim",
        "Karyawan",
        "Department",
        "Kategori Customer",
        "Status Pengajuan",
        "Status Produk",
        "Status Garansi",
        "Batas Hold",
        "Alasan Hold",
        "Foto Barang",
        "Bukti Pengiriman",
    ]
    .iter()
    .map(|h| h.to_string())
    .collect()
}

/// Build the sheet for one warranty claim.
pub fn build_warranty_sheet(
    claim: &WarrantyClaim,
    catalog: &HashMap<i64, ProductDetails>,
    cfg: &ExportConfig,
) -> Sheet {
    let items = claim.line_items(catalog);
    let groups = group_line_items(&items);

    let mut sheet = Sheet::with_title(WARRANTY_SHEET_TITLE, headers());
    let width = sheet.column_count();

    let product_photos: Vec<String> =
        claim.image.paths().into_iter().take(cfg.max_evidence_images).collect();
    let delivery_proof: Vec<String> = claim
        .delivery_images
        .paths()
        .into_iter()
        .take(cfg.max_evidence_images)
        .collect();

    for (no, group) in groups.iter().enumerate() {
        sheet.rows.push(vec![
            (no + 1).to_string(),
            dash_if_empty(claim.no_garansi.as_deref()),
            format_datetime(claim.created_at, cfg),
            format_date(claim.purchase_date, cfg),
            format_date(claim.claim_date, cfg),
            dash_if_empty(claim.customer_name.as_deref()),
            dash_if_empty(Some(&group.barcode)),
            dash_if_empty(Some(&group.brand_name)),
            dash_if_empty(Some(&group.category_name)),
            dash_if_empty(Some(&group.product_name)),
            dash_if_empty(Some(&group.color)),
            group.quantity.to_string(),
            dash_if_empty(claim.reason.as_deref()),
            dash_if_empty(claim.employee_name.as_deref()),
            dash_if_empty(claim.department_name.as_deref()),
            dash_if_empty(claim.customer_category_name.as_deref()),
            // warranty sheets print the raw status codes
            dash_if_empty(claim.status_pengajuan.as_deref()),
            dash_if_empty(claim.status_product.as_deref()),
            dash_if_empty(claim.status_garansi.as_deref()),
            format_date(claim.on_hold_until.map(|dt| dt.date()), cfg),
            dash_if_empty(claim.on_hold_comment.as_deref()),
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
    use shared::models::{ColorRef, EvidenceImages, ProductsField, RawLineItem};

    fn catalog() -> HashMap<i64, ProductDetails> {
        let mut map = HashMap::new();
        map.insert(
            5,
            ProductDetails {
                brand_name: Some("Nanolite".to_string()),
                category_name: Some("Bulb".to_string()),
                product_name: Some("A60-12W".to_string()),
                barcode: Some("899005".to_string()),
                colors: vec!["3000K".to_string(), "6500K".to_string()],
                ..Default::default()
            },
        );
        map
    }

    fn claim() -> WarrantyClaim {
        WarrantyClaim {
            no_garansi: Some("GAR-20250807AB12".to_string()),
            customer_name: Some("Toko Terang".to_string()),
            reason: Some("Mati total setelah 2 minggu".to_string()),
            status_pengajuan: Some("pending".to_string()),
            products: ProductsField::Items(vec![
                RawLineItem {
                    produk_id: Some(5),
                    warna_id: Some(ColorRef::Index(1)),
                    quantity: Some(1.0),
                    price: None,
                },
                RawLineItem {
                    produk_id: Some(5),
                    warna_id: Some(ColorRef::Index(1)),
                    quantity: Some(2.0),
                    price: None,
                },
            ]),
            image: EvidenceImages::Many(vec!["garansi-photos/x.jpg".to_string()]),
            delivery_images: EvidenceImages::Many(vec![
                "a.jpg".to_string(),
                "b.jpg".to_string(),
                "c.jpg".to_string(),
                "d.jpg".to_string(),
            ]),
            ..Default::default()
        }
    }

    #[test]
    fn claims_group_without_prices() {
        let cfg = ExportConfig::default();
        let sheet = build_warranty_sheet(&claim(), &catalog(), &cfg);

        assert_eq!(sheet.column_count(), 23);
        assert_eq!(sheet.data_rows().len(), 1);
        let row = &sheet.data_rows()[0];
        assert_eq!(row[1], "GAR-20250807AB12");
        assert_eq!(row[10], "6500K");
        assert_eq!(row[11], "3");
        // raw status codes, not labels
        assert_eq!(row[16], "pending");
        assert_eq!(row[17], "-");
    }

    #[test]
    fn two_evidence_columns_and_the_image_cap() {
        let cfg = ExportConfig::default();
        let sheet = build_warranty_sheet(&claim(), &catalog(), &cfg);

        assert_eq!(sheet.evidence.len(), 2);
        assert_eq!(sheet.evidence[0].kind, EvidenceKind::ProductPhotos);
        assert_eq!(sheet.evidence[0].column, 21);
        assert_eq!(sheet.evidence[1].kind, EvidenceKind::DeliveryProof);
        assert_eq!(sheet.evidence[1].column, 22);
        // four delivery photos, capped at three
        assert_eq!(sheet.evidence[1].paths.len(), 3);
    }

    #[test]
    fn missing_photos_dash_their_cells() {
        let cfg = ExportConfig::default();
        let mut claim = claim();
        claim.image = EvidenceImages::Many(vec![]);
        let sheet = build_warranty_sheet(&claim, &catalog(), &cfg);

        assert_eq!(sheet.evidence.len(), 1);
        assert_eq!(sheet.data_rows()[0][21], "-");
        assert_eq!(sheet.data_rows()[0][22], "");
    }
}
