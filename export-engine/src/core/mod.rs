//! Engine configuration and error types.

pub mod config;
pub mod error;
pub mod validate;

pub use config::ExportConfig;
pub use error::{EngineError, EngineResult};
pub use validate::{validate_order, validate_return, validate_warranty};
