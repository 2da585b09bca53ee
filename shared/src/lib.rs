//! Shared types for the back-office document engine
//!
//! Common models used across crates: sales orders, warranty claims and
//! product returns, their line items and persistence-boundary
//! normalization, discount chains, status labels, addresses and evidence
//! image references.

pub mod error;
pub mod models;
pub mod util;

// Re-exports
pub use serde::{Deserialize, Serialize};

// Model re-exports (for convenient access)
pub use models::{
    DiscountChain, DiscountTier, LineItem, Order, ProductDetails, ProductReturn, WarrantyClaim,
};
