//! Document models and their building blocks.

pub mod address;
pub mod discount;
pub mod image_ref;
pub mod line_item;
pub mod order;
pub mod product_return;
mod serde_helpers;
pub mod status;
pub mod warranty;

pub use address::{AddressEntry, AddressField, CodeName, Region};
pub use discount::{DiscountChain, DiscountTier, MAX_TIERS};
pub use image_ref::EvidenceImages;
pub use line_item::{ColorRef, LineItem, ProductDetails, ProductsField, RawLineItem};
pub use order::{Order, PaymentMethod};
pub use product_return::ProductReturn;
pub use status::{StatusKind, status_label};
pub use warranty::WarrantyClaim;
