//! Filtered multi-order sheet.
//!
//! One row per order: item columns are newline-joined inside the cell,
//! the discount chain cascades per order, and every row gets its own
//! evidence anchor.

use std::collections::HashMap;

use chrono::NaiveDate;
use shared::models::{Order, ProductDetails, StatusKind, status_label};

use crate::core::ExportConfig;
use crate::export::format::{dash_if_empty, format_currency, format_date, format_datetime};
use crate::export::sheet::{EvidenceAnchor, EvidenceKind, Sheet};
use crate::grouping::group_line_items;
use crate::pricing::{cascade_totals, discount_label};

pub const FILTERED_ORDERS_SHEET_TITLE: &str = "SALES ORDER";

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
        "Total Discount",
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

/// In-memory filter over an order collection — the pure counterpart of
/// the export form's query. Absent fields don't constrain.
#[derive(Debug, Clone, Default)]
pub struct OrderExportFilter {
    pub customer_id: Option<i64>,
    pub department_id: Option<i64>,
    pub employee_id: Option<i64>,
    pub customer_categories_id: Option<i64>,
    pub customer_program_id: Option<i64>,
    pub payment_method: Option<String>,
    pub status_pembayaran: Option<String>,
    pub status_pengajuan: Option<String>,
    pub status_order: Option<String>,
    pub status_product: Option<String>,
    pub has_diskon: Option<bool>,
    pub has_program_point: Option<bool>,
    pub has_reward_point: Option<bool>,
    pub created_from: Option<NaiveDate>,
    pub created_until: Option<NaiveDate>,
    /// Keep orders containing at least one item of this brand.
    pub brand_id: Option<i64>,
    /// Keep orders containing at least one item of this category.
    pub category_id: Option<i64>,
    /// Keep orders containing at least one item of this product.
    pub product_id: Option<i64>,
}

impl OrderExportFilter {
    pub fn matches(&self, order: &Order, catalog: &HashMap<i64, ProductDetails>) -> bool {
        if let Some(id) = self.customer_id {
            if order.customer_id != Some(id) {
                return false;
            }
        }
        if let Some(id) = self.department_id {
            if order.department_id != Some(id) {
                return false;
            }
        }
        if let Some(id) = self.employee_id {
            if order.employee_id != Some(id) {
                return false;
            }
        }
        if let Some(id) = self.customer_categories_id {
            if order.customer_categories_id != Some(id) {
                return false;
            }
        }
        if let Some(id) = self.customer_program_id {
            if order.customer_program_id != Some(id) {
                return false;
            }
        }
        if let Some(method) = self.payment_method.as_deref() {
            if order.payment_method.map(|m| m.as_str()) != Some(method) {
                return false;
            }
        }
        if let Some(want) = self.status_pembayaran.as_deref() {
            if order.status_pembayaran.as_deref() != Some(want) {
                return false;
            }
        }
        if let Some(want) = self.status_pengajuan.as_deref() {
            if order.status_pengajuan.as_deref() != Some(want) {
                return false;
            }
        }
        if let Some(want) = self.status_order.as_deref() {
            if order.status_order.as_deref() != Some(want) {
                return false;
            }
        }
        if let Some(want) = self.status_product.as_deref() {
            if order.status_product.as_deref() != Some(want) {
                return false;
            }
        }
        if let Some(want) = self.has_diskon {
            if order.discounts.enabled != want {
                return false;
            }
        }
        if let Some(want) = self.has_program_point {
            if order.program_enabled != want {
                return false;
            }
        }
        if let Some(want) = self.has_reward_point {
            if order.reward_enabled != want {
                return false;
            }
        }
        if let Some(from) = self.created_from {
            match order.created_at {
                Some(created) if created.date() >= from => {}
                _ => return false,
            }
        }
        if let Some(until) = self.created_until {
            match order.created_at {
                Some(created) if created.date() <= until => {}
                _ => return false,
            }
        }
        if self.brand_id.is_some() || self.category_id.is_some() || self.product_id.is_some() {
            let raw = order.products.normalize();
            let mut brand_hit = self.brand_id.is_none();
            let mut category_hit = self.category_id.is_none();
            let mut product_hit = self.product_id.is_none();
            for entry in &raw {
                if let Some(pid) = entry.produk_id {
                    if self.product_id == Some(pid) {
                        product_hit = true;
                    }
                    if let Some(details) = catalog.get(&pid) {
                        if self.brand_id.is_some() && details.brand_id == self.brand_id {
                            brand_hit = true;
                        }
                        if self.category_id.is_some() && details.category_id == self.category_id {
                            category_hit = true;
                        }
                    }
                }
            }
            if !(brand_hit && category_hit && product_hit) {
                return false;
            }
        }
        true
    }
}

/// Apply the filter, keeping input order.
pub fn filter_orders<'a>(
    orders: &'a [Order],
    filter: &OrderExportFilter,
    catalog: &HashMap<i64, ProductDetails>,
) -> Vec<&'a Order> {
    orders.iter().filter(|o| filter.matches(o, catalog)).collect()
}

/// Build the multi-order sheet for an already-filtered collection.
pub fn build_filtered_orders_sheet(
    orders: &[&Order],
    catalog: &HashMap<i64, ProductDetails>,
    cfg: &ExportConfig,
) -> Sheet {
    let mut sheet = Sheet::with_title(FILTERED_ORDERS_SHEET_TITLE, headers());
    let width = sheet.column_count();

    for (no, order) in orders.iter().enumerate() {
        let items = order.line_items(catalog);
        let groups = group_line_items(&items);
        let rates = order.discounts.rates();
        let totals = cascade_totals(&groups, &rates);
        let label = discount_label(&rates);

        let barcodes = join_column(&groups, |g| dash_if_empty(Some(&g.barcode)));
        let brands = join_column(&groups, |g| g.brand_name.clone());
        let categories = join_column(&groups, |g| g.category_name.clone());
        let products = join_column(&groups, |g| g.product_name.clone());
        let colors = join_column(&groups, |g| g.color.clone());
        let quantities = join_column(&groups, |g| g.quantity.to_string());
        let prices = join_column(&groups, |g| format_currency(g.unit_price, cfg));

        let evidence_paths: Vec<String> = order
            .delivery_images
            .paths()
            .into_iter()
            .take(cfg.max_evidence_images)
            .collect();
        let row_index = sheet.rows.len();

        sheet.rows.push(vec![
            (no + 1).to_string(),
            dash_if_empty(order.no_order.as_deref()),
            format_datetime(order.created_at, cfg),
            format_datetime(order.updated_at, cfg),
            dash_if_empty(order.customer_name.as_deref()),
            barcodes,
            brands,
            categories,
            products,
            colors,
            quantities,
            prices,
            dash_if_empty(Some(&label)),
            format_currency(totals.discount_amount, cfg),
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

        if !evidence_paths.is_empty() {
            sheet.evidence.push(EvidenceAnchor {
                row: row_index,
                column: width - 1,
                kind: EvidenceKind::DeliveryProof,
                paths: evidence_paths,
            });
        }
    }

    sheet.data_end_row = sheet.rows.len() - 1;
    sheet
}

fn join_column<F>(groups: &[crate::grouping::LineItemGroup], f: F) -> String
where
    F: Fn(&crate::grouping::LineItemGroup) -> String,
{
    groups.iter().map(f).collect::<Vec<_>>().join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDateTime;
    use shared::models::{ColorRef, DiscountChain, ProductsField, RawLineItem};

    fn catalog() -> HashMap<i64, ProductDetails> {
        let mut map = HashMap::new();
        map.insert(
            1,
            ProductDetails {
                brand_id: Some(10),
                category_id: Some(20),
                brand_name: Some("Nanolite".to_string()),
                category_name: Some("Downlight".to_string()),
                product_name: Some("DL-9W".to_string()),
                barcode: Some("899001".to_string()),
                colors: vec!["3000K".to_string()],
                ..Default::default()
            },
        );
        map.insert(
            2,
            ProductDetails {
                brand_id: Some(11),
                category_id: Some(21),
                brand_name: Some("Nanopanel".to_string()),
                category_name: Some("Panel".to_string()),
                product_name: Some("PNL-18W".to_string()),
                barcode: Some("899002".to_string()),
                colors: vec!["6500K".to_string()],
                ..Default::default()
            },
        );
        map
    }

    fn at(date: &str) -> Option<NaiveDateTime> {
        Some(format!("{date}T10:00:00").parse().unwrap())
    }

    fn order(no: &str, product: i64, qty: f64) -> Order {
        Order {
            no_order: Some(no.to_string()),
            customer_id: Some(7),
            created_at: at("2025-08-01"),
            products: ProductsField::Items(vec![RawLineItem {
                produk_id: Some(product),
                warna_id: Some(ColorRef::Index(0)),
                quantity: Some(qty),
                price: Some(10_000.0),
            }]),
            discounts: DiscountChain::from_rates(&[10.0]),
            ..Default::default()
        }
    }

    #[test]
    fn one_row_per_order_with_joined_item_cells() {
        let cfg = ExportConfig::default();
        let catalog = catalog();
        let mut multi = order("ORD-1", 1, 2.0);
        multi.products = ProductsField::Items(vec![
            RawLineItem {
                produk_id: Some(1),
                warna_id: Some(ColorRef::Index(0)),
                quantity: Some(2.0),
                price: Some(10_000.0),
            },
            RawLineItem {
                produk_id: Some(2),
                warna_id: Some(ColorRef::Index(0)),
                quantity: Some(1.0),
                price: Some(30_000.0),
            },
        ]);
        let single = order("ORD-2", 2, 1.0);

        let orders = [&multi, &single];
        let sheet = build_filtered_orders_sheet(&orders, &catalog, &cfg);

        assert_eq!(sheet.column_count(), 28);
        assert_eq!(sheet.data_rows().len(), 2);

        let row = &sheet.data_rows()[0];
        assert_eq!(row[6], "Nanolite\nNanopanel");
        assert_eq!(row[10], "2\n1");
        assert_eq!(row[11], "Rp 10.000\nRp 30.000");
        // subtotal 50000 at 10% → 45000, discount 5000
        assert_eq!(row[13], "Rp 5.000");
        assert_eq!(row[14], "Rp 45.000");
    }

    #[test]
    fn per_order_evidence_anchors_use_the_row_index() {
        let cfg = ExportConfig::default();
        let catalog = catalog();
        let mut first = order("ORD-1", 1, 1.0);
        first.delivery_images =
            shared::models::EvidenceImages::Many(vec!["proof/a.jpg".to_string()]);
        let second = order("ORD-2", 2, 1.0);
        let mut third = order("ORD-3", 1, 1.0);
        third.delivery_images =
            shared::models::EvidenceImages::Many(vec!["proof/c.jpg".to_string()]);

        let orders = [&first, &second, &third];
        let sheet = build_filtered_orders_sheet(&orders, &catalog, &cfg);

        assert_eq!(sheet.evidence.len(), 2);
        assert_eq!(sheet.evidence[0].row, 2);
        assert_eq!(sheet.evidence[1].row, 4);
        assert_eq!(sheet.data_rows()[1][27], "-");
    }

    #[test]
    fn filter_on_scalar_fields() {
        let catalog = catalog();
        let a = order("ORD-1", 1, 1.0);
        let mut b = order("ORD-2", 1, 1.0);
        b.customer_id = Some(8);

        let orders = vec![a, b];
        let filter = OrderExportFilter { customer_id: Some(7), ..Default::default() };
        let kept = filter_orders(&orders, &filter, &catalog);
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].no_order.as_deref(), Some("ORD-1"));
    }

    #[test]
    fn filter_on_discount_flag_and_date_range() {
        let catalog = catalog();
        let mut a = order("ORD-1", 1, 1.0);
        a.created_at = at("2025-07-15");
        let b = order("ORD-2", 1, 1.0); // created 2025-08-01, chain enabled

        let orders = vec![a, b];
        let filter = OrderExportFilter {
            has_diskon: Some(true),
            created_from: Some("2025-08-01".parse().unwrap()),
            created_until: Some("2025-08-31".parse().unwrap()),
            ..Default::default()
        };
        let kept = filter_orders(&orders, &filter, &catalog);
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].no_order.as_deref(), Some("ORD-2"));
    }

    #[test]
    fn filter_on_item_brand_and_product() {
        let catalog = catalog();
        let a = order("ORD-1", 1, 1.0);
        let b = order("ORD-2", 2, 1.0);
        let orders = vec![a, b];

        let by_brand = OrderExportFilter { brand_id: Some(11), ..Default::default() };
        let kept = filter_orders(&orders, &by_brand, &catalog);
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].no_order.as_deref(), Some("ORD-2"));

        let by_product = OrderExportFilter { product_id: Some(1), ..Default::default() };
        let kept = filter_orders(&orders, &by_product, &catalog);
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].no_order.as_deref(), Some("ORD-1"));
    }

    #[test]
    fn empty_filter_keeps_everything() {
        let catalog = catalog();
        let orders = vec![order("ORD-1", 1, 1.0), order("ORD-2", 2, 1.0)];
        let kept = filter_orders(&orders, &OrderExportFilter::default(), &catalog);
        assert_eq!(kept.len(), 2);
    }
}
