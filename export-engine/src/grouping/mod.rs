//! Line-Item Grouping Module
//!
//! Collapses duplicate line items into display rows before pricing and
//! export. Grouping happens on the backend so every renderer sees the
//! same rows.

mod grouper;

pub use grouper::*;
