//! Export configuration.
//!
//! # 环境变量
//!
//! 所有配置项都可以通过环境变量覆盖：
//!
//! | 环境变量 | 默认值 | 说明 |
//! |----------|--------|------|
//! | EXPORT_CURRENCY_PREFIX | Rp | 金额前缀 |
//! | EXPORT_THOUSANDS_SEPARATOR | . | 千位分隔符 |
//! | EXPORT_MAX_EVIDENCE_IMAGES | 3 | 每个锚点最多嵌入图片数 |
//! | EXPORT_DATETIME_FORMAT | %Y-%m-%d %H:%M | 日期时间格式 |
//! | EXPORT_DATE_FORMAT | %Y-%m-%d | 日期格式 |

/// Display conventions shared by all sheet builders.
#[derive(Debug, Clone)]
pub struct ExportConfig {
    /// Currency prefix on formatted amounts.
    pub currency_prefix: String,
    /// Thousands separator for amounts.
    pub thousands_separator: char,
    /// Max evidence images a renderer should embed per anchor.
    pub max_evidence_images: usize,
    /// Format for created/updated timestamp columns.
    pub datetime_format: String,
    /// Format for date-only columns.
    pub date_format: String,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            currency_prefix: "Rp".to_string(),
            thousands_separator: '.',
            max_evidence_images: 3,
            datetime_format: "%Y-%m-%d %H:%M".to_string(),
            date_format: "%Y-%m-%d".to_string(),
        }
    }
}

impl ExportConfig {
    /// Load from environment variables, falling back to defaults.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            currency_prefix: std::env::var("EXPORT_CURRENCY_PREFIX")
                .unwrap_or(defaults.currency_prefix),
            thousands_separator: std::env::var("EXPORT_THOUSANDS_SEPARATOR")
                .ok()
                .and_then(|s| s.chars().next())
                .unwrap_or(defaults.thousands_separator),
            max_evidence_images: std::env::var("EXPORT_MAX_EVIDENCE_IMAGES")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.max_evidence_images),
            datetime_format: std::env::var("EXPORT_DATETIME_FORMAT")
                .unwrap_or(defaults.datetime_format),
            date_format: std::env::var("EXPORT_DATE_FORMAT").unwrap_or(defaults.date_format),
        }
    }
}
