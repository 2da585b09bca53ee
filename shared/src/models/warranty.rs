//! Warranty claim (garansi) document.

use std::collections::HashMap;

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use super::address::AddressField;
use super::image_ref::EvidenceImages;
use super::line_item::{LineItem, ProductDetails, ProductsField};
use crate::util::document_no;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct WarrantyClaim {
    pub no_garansi: Option<String>,

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

    pub purchase_date: Option<NaiveDate>,
    pub claim_date: Option<NaiveDate>,
    pub reason: Option<String>,
    pub note: Option<String>,

    /// Photos of the claimed item.
    pub image: EvidenceImages,
    /// Delivery proof photos.
    pub delivery_images: EvidenceImages,
    pub delivered_at: Option<NaiveDateTime>,

    pub status_pengajuan: Option<String>,
    pub status_product: Option<String>,
    pub status_garansi: Option<String>,

    pub rejection_comment: Option<String>,
    pub sold_out_comment: Option<String>,
    pub on_hold_comment: Option<String>,
    pub on_hold_until: Option<NaiveDateTime>,
    pub cancelled_comment: Option<String>,

    pub created_at: Option<NaiveDateTime>,
    pub updated_at: Option<NaiveDateTime>,
}

impl WarrantyClaim {
    /// Fill the fields a freshly created claim is expected to carry.
    pub fn ensure_defaults(&mut self) {
        if self.no_garansi.as_deref().map(str::trim).unwrap_or("").is_empty() {
            self.no_garansi = Some(document_no("GAR"));
        }
        self.status_pengajuan.get_or_insert_with(|| "pending".to_string());
        self.status_product.get_or_insert_with(|| "pending".to_string());
        self.status_garansi.get_or_insert_with(|| "pending".to_string());
    }

    /// A rejected submission drags the other statuses with it.
    pub fn apply_status_policy(&mut self) {
        if self.status_pengajuan.as_deref() == Some("rejected") {
            self.status_product = Some("rejected".to_string());
            self.status_garansi = Some("rejected".to_string());
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
