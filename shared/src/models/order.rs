//! Sales order document.
//!
//! A transient snapshot of one persisted order row: related display names
//! are carried denormalized on the record (the storage layer resolves
//! them before the snapshot is built), and the noisy legacy columns keep
//! their tolerant wrapper types.

use std::collections::HashMap;

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use super::address::AddressField;
use super::discount::DiscountChain;
use super::image_ref::EvidenceImages;
use super::line_item::{LineItem, ProductDetails, ProductsField};
use crate::util::document_no;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentMethod {
    Cash,
    Tempo,
}

impl PaymentMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentMethod::Cash => "cash",
            PaymentMethod::Tempo => "tempo",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PaymentMethod::Cash => "Cash",
            PaymentMethod::Tempo => "Tempo",
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Order {
    pub no_order: Option<String>,

    pub customer_id: Option<i64>,
    pub customer_name: Option<String>,
    pub customer_categories_id: Option<i64>,
    pub customer_category_name: Option<String>,
    pub customer_program_id: Option<i64>,
    pub customer_program_name: Option<String>,
    pub employee_id: Option<i64>,
    pub employee_name: Option<String>,
    pub department_id: Option<i64>,
    pub department_name: Option<String>,

    pub phone: Option<String>,
    pub address: AddressField,

    pub products: ProductsField,
    #[serde(flatten)]
    pub discounts: DiscountChain,

    pub reward_enabled: bool,
    pub reward_point: i64,
    pub program_enabled: bool,
    pub jumlah_program: i64,

    pub payment_method: Option<PaymentMethod>,
    pub payment_due_until: Option<NaiveDate>,

    pub status_pembayaran: Option<String>,
    pub status_pengajuan: Option<String>,
    pub status_product: Option<String>,
    pub status_order: Option<String>,

    pub rejection_comment: Option<String>,
    pub on_hold_comment: Option<String>,
    pub on_hold_until: Option<NaiveDateTime>,
    pub cancelled_comment: Option<String>,

    pub delivery_images: EvidenceImages,

    pub created_at: Option<NaiveDateTime>,
    pub updated_at: Option<NaiveDateTime>,
}

impl Order {
    /// Fill the fields a freshly created order is expected to carry:
    /// a document number and pending statuses.
    pub fn ensure_defaults(&mut self) {
        if self.no_order.as_deref().map(str::trim).unwrap_or("").is_empty() {
            self.no_order = Some(document_no("ORD"));
        }
        self.status_pembayaran.get_or_insert_with(|| "belum bayar".to_string());
        self.status_pengajuan.get_or_insert_with(|| "pending".to_string());
        self.status_product.get_or_insert_with(|| "pending".to_string());
        self.status_order.get_or_insert_with(|| "pending".to_string());
    }

    /// Canonical line items, colors and display names resolved against
    /// the supplied catalog snapshot.
    pub fn line_items(&self, catalog: &HashMap<i64, ProductDetails>) -> Vec<LineItem> {
        self.products
            .normalize()
            .iter()
            .map(|raw| {
                let details = raw.produk_id.and_then(|id| catalog.get(&id));
                raw.into_line_item(details)
            })
            .collect()
    }
}
