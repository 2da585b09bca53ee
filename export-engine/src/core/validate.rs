//! Pre-export boundary validation.
//!
//! Degraded-but-usable data always passes — blank names, missing prices
//! and junk columns are display problems, not errors. What gets rejected
//! is data no real document could carry: non-finite discount rates and
//! magnitudes past the hard caps.

use shared::models::{Order, ProductReturn, ProductsField, WarrantyClaim};

use crate::core::error::EngineResult;

/// Check an order before it is priced and exported.
pub fn validate_order(order: &Order) -> EngineResult<()> {
    order.discounts.validate()?;
    validate_products(&order.products)
}

/// Check a warranty claim before it is exported.
pub fn validate_warranty(claim: &WarrantyClaim) -> EngineResult<()> {
    validate_products(&claim.products)
}

/// Check a product return before it is exported.
pub fn validate_return(ret: &ProductReturn) -> EngineResult<()> {
    validate_products(&ret.products)
}

fn validate_products(products: &ProductsField) -> EngineResult<()> {
    for raw in products.normalize() {
        raw.validate()?;
        raw.into_line_item(None).validate()?;
    }
    Ok(())
}
