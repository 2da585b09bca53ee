//! Single sales-order sheet (the per-document attachment).

use std::collections::HashMap;

use shared::models::{Order, ProductDetails, StatusKind, status_label};

use crate::core::ExportConfig;
use crate::export::format::{dash_if_empty, format_currency, format_date, format_datetime};
use crate::export::sheet::{EvidenceAnchor, EvidenceKind, Sheet};
use crate::grouping::group_line_items;
use crate::pricing::{cascade_totals, discount_label};

pub const ORDER_SHEET_TITLE: &str = "SALES ORDER";

fn headers() -> Vec<String> {
    [
        "No.",
        "No Order",
        "Tanggal Dibuat",
        "Tanggal Diupdate",
        "Customer",
        "Barcode",
        "Brand",
        "Category",
        "Product",
        "Warna",
        "Pcs/item",
        "Unit Price",
        "Disc%",
        "Total Akhir",
        "Metode Pembayaran",
        "Batas Tempo",
        "Karyawan",
        "Department",
        "Customer Program",
        "Kategori Customer",
        "Status Pembayaran",
        "Status Pengajuan",
        "Status Produk",
        "Status Order",
        "Batas Hold",
        "Alasan Hold",
        "Bukti Pengiriman",
    ]
    .iter()
    .map(|h| h.to_string())
    .collect()
}

/// Build the sheet for one order.
///
/// Items are grouped, the discount chain cascades per group, and the
/// summed totals feed both the data rows and the trailing summary table.
pub fn build_order_sheet(
    order: &Order,
    catalog: &HashMap<i64, ProductDetails>,
    cfg: &ExportConfig,
) -> Sheet {
    let items = order.line_items(catalog);
    let groups = group_line_items(&items);
    let rates = order.discounts.rates();
    let totals = cascade_totals(&groups, &rates);
    let label = discount_label(&rates);

    let mut sheet = Sheet::with_title(ORDER_SHEET_TITLE, headers());
    let width = sheet.column_count();

    let evidence_paths: Vec<String> = order
        .delivery_images
        .paths()
        .into_iter()
        .take(cfg.max_evidence_images)
        .collect();

    for (no, group) in groups.iter().enumerate() {
        sheet.rows.push(vec![
            (no + 1).to_string(),
            dash_if_empty(order.no_order.as_deref()),
            format_datetime(order.created_at, cfg),
            format_datetime(order.updated_at, cfg),
            dash_if_empty(order.customer_name.as_deref()),
            dash_if_empty(Some(&group.barcode)),
            dash_if_empty(Some(&group.brand_name)),
            dash_if_empty(Some(&group.category_name)),
            dash_if_empty(Some(&group.product_name)),
            dash_if_empty(Some(&group.color)),
            group.quantity.to_string(),
            format_currency(group.unit_price, cfg),
            dash_if_empty(Some(&label)),
            format_currency(totals.total_after_discount, cfg),
            dash_if_empty(order.payment_method.map(|m| m.as_str())),
            format_date(order.payment_due_until, cfg),
            dash_if_empty(order.employee_name.as_deref()),
            dash_if_empty(order.department_name.as_deref()),
            dash_if_empty(Some(
                order.customer_program_name.as_deref().unwrap_or("Tidak Ikut Program"),
            )),
            dash_if_empty(order.customer_category_name.as_deref()),
            status_label(StatusKind::Payment, order.status_pembayaran.as_deref()),
            status_label(StatusKind::Submission, order.status_pengajuan.as_deref()),
            status_label(StatusKind::Product, order.status_product.as_deref()),
            status_label(StatusKind::Order, order.status_order.as_deref()),
            format_date(order.on_hold_until.map(|dt| dt.date()), cfg),
            dash_if_empty(order.on_hold_comment.as_deref()),
            if evidence_paths.is_empty() { "-".to_string() } else { String::new() },
        ]);
    }

    sheet.data_end_row = sheet.rows.len() - 1;

    if !groups.is_empty() && !evidence_paths.is_empty() {
        sheet.evidence.push(EvidenceAnchor {
            row: 2,
            column: width - 1,
            kind: EvidenceKind::DeliveryProof,
            paths: evidence_paths,
        });
    }

    // summary block: two blank rows, then label/value pairs in the last
    // two columns
    let pad = width.saturating_sub(2);
    let blank = vec![String::new(); width];
    sheet.rows.push(blank.clone());
    sheet.rows.push(blank);
    sheet.rows.push(summary_row(pad, "Sub Total:", format_currency(totals.subtotal, cfg)));
    sheet.rows.push(summary_row(
        pad,
        "Discount:",
        if totals.discount_amount > 0 {
            format_currency(totals.discount_amount, cfg)
        } else {
            "-".to_string()
        },
    ));
    sheet.rows.push(summary_row(
        pad,
        "Total Akhir:",
        format_currency(totals.total_after_discount, cfg),
    ));

    sheet
}

fn summary_row(pad: usize, label: &str, value: String) -> Vec<String> {
    let mut row = vec![String::new(); pad];
    row.push(label.to_string());
    row.push(value);
    row
}
