//! Line items and their persistence-boundary normalization.
//!
//! The persisted `products` column is historically messy: it may hold an
//! already-decoded JSON array or a legacy JSON-encoded string of one, and
//! each entry's color may be a numeric index into the product's color list
//! or the label itself. All of that ambiguity is resolved here, once, into
//! canonical [`LineItem`] values before grouping or pricing ever runs.

use serde::{Deserialize, Serialize};

use crate::error::{DomainError, require_finite};

/// Placeholder display names when the catalog no longer knows a product.
pub const MISSING_BRAND: &str = "(Brand hilang)";
pub const MISSING_CATEGORY: &str = "(Kategori hilang)";
pub const MISSING_PRODUCT: &str = "(Produk hilang)";

/// Hard caps guarding aggregate arithmetic against insane magnitudes.
pub const MAX_QUANTITY: i64 = 999_999;
pub const MAX_UNIT_PRICE: i64 = 1_000_000_000;

/// Color reference as persisted: legacy rows store an index into the
/// product's color list, newer rows store the label text directly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ColorRef {
    Index(i64),
    Number(f64),
    Label(String),
}

impl ColorRef {
    /// Resolve against a product's color list.
    ///
    /// An in-range index (numeric, or a numeric string) maps to its label;
    /// everything else passes through as text.
    pub fn resolve(&self, colors: &[String]) -> String {
        match self {
            ColorRef::Index(idx) => resolve_index(*idx, colors),
            ColorRef::Number(n) => resolve_index(n.trunc() as i64, colors),
            ColorRef::Label(label) => {
                let trimmed = label.trim();
                if let Ok(idx) = trimmed.parse::<i64>() {
                    return resolve_index(idx, colors);
                }
                trimmed.to_string()
            }
        }
    }
}

fn resolve_index(idx: i64, colors: &[String]) -> String {
    if idx >= 0 {
        if let Some(label) = colors.get(idx as usize) {
            return label.clone();
        }
    }
    idx.to_string()
}

/// One persisted line-item entry, exactly as stored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawLineItem {
    #[serde(default)]
    pub produk_id: Option<i64>,
    #[serde(default)]
    pub warna_id: Option<ColorRef>,
    #[serde(default)]
    pub quantity: Option<f64>,
    #[serde(default)]
    pub price: Option<f64>,
}

/// The raw `products` column: an already-decoded JSON array, a legacy
/// JSON-encoded string of one, or junk (which degrades to empty).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ProductsField {
    Items(Vec<RawLineItem>),
    Json(String),
    Other(serde_json::Value),
}

impl Default for ProductsField {
    fn default() -> Self {
        ProductsField::Items(Vec::new())
    }
}

impl ProductsField {
    /// Decode into raw entries. String payloads are parsed as JSON;
    /// payloads that fail to parse degrade to an empty list.
    pub fn normalize(&self) -> Vec<RawLineItem> {
        match self {
            ProductsField::Items(items) => items.clone(),
            ProductsField::Json(raw) => match serde_json::from_str(raw) {
                Ok(items) => items,
                Err(err) => {
                    tracing::warn!(%err, "products column holds unparseable JSON, treating as empty");
                    Vec::new()
                }
            },
            ProductsField::Other(value) => {
                if !value.is_null() {
                    tracing::warn!(
                        "products column holds an unexpected shape, treating as empty"
                    );
                }
                Vec::new()
            }
        }
    }
}

/// Catalog snapshot for one product id, supplied by the caller.
///
/// The catalog lookup itself happens upstream; this is its result.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProductDetails {
    #[serde(default)]
    pub brand_id: Option<i64>,
    #[serde(default)]
    pub category_id: Option<i64>,
    #[serde(default)]
    pub brand_name: Option<String>,
    #[serde(default)]
    pub category_name: Option<String>,
    #[serde(default)]
    pub product_name: Option<String>,
    #[serde(default)]
    pub barcode: Option<String>,
    #[serde(default)]
    pub colors: Vec<String>,
}

/// Canonical line item: what the grouper and the cascade consume.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    pub product_id: Option<i64>,
    pub brand_name: String,
    pub category_name: String,
    pub product_name: String,
    pub color: String,
    pub barcode: String,
    /// Units; fractional persisted values are truncated, negatives clamp to zero.
    pub quantity: i64,
    /// Smallest currency unit; absent values become zero.
    pub unit_price: i64,
}

impl LineItem {
    /// Line value before any discount.
    pub fn extended_total(&self) -> i64 {
        self.quantity * self.unit_price
    }

    /// Reject magnitudes past the hard caps. Missing and degraded values
    /// are fine; only values no real document could carry are errors.
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.quantity > MAX_QUANTITY {
            return Err(DomainError::ExceedsMaximum {
                field: "quantity",
                max: MAX_QUANTITY,
                value: self.quantity,
            });
        }
        if self.unit_price > MAX_UNIT_PRICE {
            return Err(DomainError::ExceedsMaximum {
                field: "unit_price",
                max: MAX_UNIT_PRICE,
                value: self.unit_price,
            });
        }
        Ok(())
    }
}

impl RawLineItem {
    /// The single normalization point from persisted entry to canonical
    /// line item.
    ///
    /// Missing catalog entries keep the placeholder display names the
    /// back office has always shown; a missing color renders as `-`.
    pub fn into_line_item(&self, details: Option<&ProductDetails>) -> LineItem {
        let color = match &self.warna_id {
            Some(c) => c.resolve(details.map(|d| d.colors.as_slice()).unwrap_or(&[])),
            None => "-".to_string(),
        };

        let (brand_name, category_name, product_name, barcode) = match details {
            Some(d) => (
                d.brand_name.clone().unwrap_or_else(|| MISSING_BRAND.to_string()),
                d.category_name.clone().unwrap_or_else(|| MISSING_CATEGORY.to_string()),
                d.product_name.clone().unwrap_or_else(|| MISSING_PRODUCT.to_string()),
                d.barcode.clone().unwrap_or_default(),
            ),
            None => (
                MISSING_BRAND.to_string(),
                MISSING_CATEGORY.to_string(),
                MISSING_PRODUCT.to_string(),
                String::new(),
            ),
        };

        LineItem {
            product_id: self.produk_id,
            brand_name,
            category_name,
            product_name,
            color,
            barcode,
            quantity: clamp_to_units(self.quantity),
            unit_price: clamp_to_units(self.price),
        }
    }

    /// Reject non-finite persisted numbers before normalization clamps
    /// them away silently.
    pub fn validate(&self) -> Result<(), DomainError> {
        if let Some(q) = self.quantity {
            require_finite(q, "quantity")?;
        }
        if let Some(p) = self.price {
            require_finite(p, "price")?;
        }
        Ok(())
    }
}

/// Integer cast policy of the source data: truncate fractions, clamp
/// negatives and non-finite values to zero.
fn clamp_to_units(value: Option<f64>) -> i64 {
    match value {
        Some(v) if v.is_finite() && v > 0.0 => v.trunc() as i64,
        _ => 0,
    }
}
