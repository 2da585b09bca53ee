//! Discount Cascade Module
//!
//! Cascading percentage discounts and the aggregate totals derived from
//! grouped line items. Uses rust_decimal internally; amounts are whole
//! currency units (i64).

mod cascade;

pub use cascade::*;
