//! Line-item grouping.
//!
//! Identity is the exact (brand, category, product, color, barcode)
//! tuple; quantities and extended totals are summed per group. Display
//! fields come from the first item seen for a key, even when later
//! duplicates disagree — duplicate rows in old documents are noisy and
//! are collapsed without reconciliation.

use std::collections::HashMap;

use serde::Serialize;
use shared::models::LineItem;

const KEY_SEPARATOR: &str = "|";

/// One display row: identical items collapsed.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LineItemGroup {
    pub brand_name: String,
    pub category_name: String,
    pub product_name: String,
    pub color: String,
    pub barcode: String,
    /// Representative unit price (first member's).
    pub unit_price: i64,
    /// Sum of member quantities.
    pub quantity: i64,
    /// Sum of member quantity × unit price.
    pub extended_total: i64,
}

impl LineItemGroup {
    /// Grouping key over the five identity fields.
    pub fn key_of(item: &LineItem) -> String {
        [
            item.brand_name.as_str(),
            item.category_name.as_str(),
            item.product_name.as_str(),
            item.color.as_str(),
            item.barcode.as_str(),
        ]
        .join(KEY_SEPARATOR)
    }

    /// Re-expand into a single line item carrying the group totals.
    pub fn as_line_item(&self) -> LineItem {
        LineItem {
            product_id: None,
            brand_name: self.brand_name.clone(),
            category_name: self.category_name.clone(),
            product_name: self.product_name.clone(),
            color: self.color.clone(),
            barcode: self.barcode.clone(),
            quantity: self.quantity,
            unit_price: self.unit_price,
        }
    }
}

/// Collapse items into unique (brand, category, product, color, barcode)
/// groups, preserving first-occurrence order.
///
/// Pure: no input mutation, no side effects. Negative quantities and
/// prices clamp to zero per member.
pub fn group_line_items(items: &[LineItem]) -> Vec<LineItemGroup> {
    let mut index: HashMap<String, usize> = HashMap::new();
    let mut groups: Vec<LineItemGroup> = Vec::new();

    for item in items {
        let key = LineItemGroup::key_of(item);
        let quantity = item.quantity.max(0);
        let line_total = quantity * item.unit_price.max(0);

        match index.get(&key) {
            Some(&slot) => {
                let group = &mut groups[slot];
                group.quantity += quantity;
                group.extended_total += line_total;
            }
            None => {
                index.insert(key, groups.len());
                groups.push(LineItemGroup {
                    brand_name: item.brand_name.clone(),
                    category_name: item.category_name.clone(),
                    product_name: item.product_name.clone(),
                    color: item.color.clone(),
                    barcode: item.barcode.clone(),
                    unit_price: item.unit_price.max(0),
                    quantity,
                    extended_total: line_total,
                });
            }
        }
    }

    groups
}
