//! Product return document.

use std::collections::HashMap;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::address::AddressField;
use super::image_ref::EvidenceImages;
use super::line_item::{LineItem, ProductDetails, ProductsField};
use super::serde_helpers::stringy_i64;
use crate::util::document_no;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ProductReturn {
    pub no_return: Option<String>,

    pub company_id: Option<i64>,
    pub customer_id: Option<i64>,
    pub customer_name: Option<String>,
    pub customer_categories_id: Option<i64>,
    pub customer_category_name: Option<String>,
    pub employee_id: Option<i64>,
    pub employee_name: Option<String>,
    pub department_id: Option<i64>,
    pub department_name: Option<String>,

    pub phone: Option<String>,
    pub address: AddressField,

    pub products: ProductsField,

    pub reason: Option<String>,
    pub note: Option<String>,
    /// Refund nominal in smallest currency units. Legacy rows persist it
    /// as a 2-decimal string; fractions truncate.
    #[serde(deserialize_with = "stringy_i64")]
    pub amount: i64,

    /// Photos of the returned item.
    pub image: EvidenceImages,
    /// Delivery proof photos.
    pub delivery_images: EvidenceImages,
    pub delivered_at: Option<NaiveDateTime>,

    pub status_pengajuan: Option<String>,
    pub status_product: Option<String>,
    pub status_return: Option<String>,

    pub rejection_comment: Option<String>,
    pub sold_out_comment: Option<String>,
    pub on_hold_comment: Option<String>,
    pub on_hold_until: Option<NaiveDateTime>,
    pub cancelled_comment: Option<String>,

    pub created_at: Option<NaiveDateTime>,
    pub updated_at: Option<NaiveDateTime>,
}

impl ProductReturn {
    /// Fill the fields a freshly created return is expected to carry.
    pub fn ensure_defaults(&mut self) {
        if self.no_return.as_deref().map(str::trim).unwrap_or("").is_empty() {
            self.no_return = Some(document_no("RET"));
        }
        self.status_pengajuan.get_or_insert_with(|| "pending".to_string());
        self.status_product.get_or_insert_with(|| "pending".to_string());
        self.status_return.get_or_insert_with(|| "pending".to_string());
    }

    /// A rejected submission drags the other statuses with it.
    pub fn apply_status_policy(&mut self) {
        if self.status_pengajuan.as_deref() == Some("rejected") {
            self.status_product = Some("rejected".to_string());
            self.status_return = Some("rejected".to_string());
        }
    }

    /// Canonical line items, resolved against the supplied catalog snapshot.
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
