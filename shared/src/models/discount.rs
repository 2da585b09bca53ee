//! Discount chains: up to four tiered percentages with optional notes.
//!
//! Tier position is the cascade order; a zero tier is a recorded no-op,
//! not a gap, so positions are preserved end to end.

use serde::{Deserialize, Serialize};

use crate::error::{DomainError, require_finite};

/// Documents carry at most four discount tiers.
pub const MAX_TIERS: usize = 4;

/// One discount tier: a percentage and its free-text justification.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DiscountTier {
    pub percent: f64,
    pub note: Option<String>,
}

/// Ordered discount chain as persisted on a document
/// (`diskon_1`..`diskon_4` plus `penjelasan_diskon_N`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "FlatChain", into = "FlatChain")]
pub struct DiscountChain {
    pub enabled: bool,
    tiers: Vec<DiscountTier>,
}

impl DiscountChain {
    /// Build a chain from explicit tiers; anything past the fourth tier
    /// is dropped.
    pub fn new(enabled: bool, mut tiers: Vec<DiscountTier>) -> Self {
        if tiers.len() > MAX_TIERS {
            tracing::warn!(extra = tiers.len() - MAX_TIERS, "discount chain truncated to {MAX_TIERS} tiers");
            tiers.truncate(MAX_TIERS);
        }
        Self { enabled, tiers }
    }

    /// Convenience constructor from bare rates.
    pub fn from_rates(rates: &[f64]) -> Self {
        Self::new(
            true,
            rates
                .iter()
                .map(|&percent| DiscountTier { percent, note: None })
                .collect(),
        )
    }

    pub fn tiers(&self) -> &[DiscountTier] {
        &self.tiers
    }

    /// Positional rates, zeros included. The cascade consumes these in
    /// order; skipping zero tiers is the calculator's job.
    pub fn rates(&self) -> Vec<f64> {
        self.tiers.iter().map(|t| t.percent).collect()
    }

    /// Non-blank tier notes joined with `" + "`.
    pub fn notes_label(&self) -> Option<String> {
        let parts: Vec<&str> = self
            .tiers
            .iter()
            .filter_map(|t| t.note.as_deref())
            .map(str::trim)
            .filter(|n| !n.is_empty())
            .collect();
        if parts.is_empty() {
            None
        } else {
            Some(parts.join(" + "))
        }
    }

    /// Reject non-finite rates before they reach the cascade. Out-of-range
    /// rates are accepted here; the calculator clamps them.
    pub fn validate(&self) -> Result<(), DomainError> {
        for tier in &self.tiers {
            require_finite(tier.percent, "discount percent")?;
        }
        Ok(())
    }
}

/// The flat column shape discount chains are persisted in.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct FlatChain {
    #[serde(default)]
    diskons_enabled: bool,
    #[serde(default)]
    diskon_1: Option<f64>,
    #[serde(default)]
    diskon_2: Option<f64>,
    #[serde(default)]
    diskon_3: Option<f64>,
    #[serde(default)]
    diskon_4: Option<f64>,
    #[serde(default)]
    penjelasan_diskon_1: Option<String>,
    #[serde(default)]
    penjelasan_diskon_2: Option<String>,
    #[serde(default)]
    penjelasan_diskon_3: Option<String>,
    #[serde(default)]
    penjelasan_diskon_4: Option<String>,
}

impl From<FlatChain> for DiscountChain {
    fn from(flat: FlatChain) -> Self {
        let tiers = [
            (flat.diskon_1, flat.penjelasan_diskon_1),
            (flat.diskon_2, flat.penjelasan_diskon_2),
            (flat.diskon_3, flat.penjelasan_diskon_3),
            (flat.diskon_4, flat.penjelasan_diskon_4),
        ]
        .into_iter()
        .map(|(percent, note)| DiscountTier {
            percent: percent.unwrap_or(0.0),
            note,
        })
        .collect();
        DiscountChain {
            enabled: flat.diskons_enabled,
            tiers,
        }
    }
}

impl From<DiscountChain> for FlatChain {
    fn from(chain: DiscountChain) -> Self {
        let rate = |i: usize| chain.tiers.get(i).map(|t| t.percent);
        let note = |i: usize| chain.tiers.get(i).and_then(|t| t.note.clone());
        FlatChain {
            diskons_enabled: chain.enabled,
            diskon_1: rate(0),
            diskon_2: rate(1),
            diskon_3: rate(2),
            diskon_4: rate(3),
            penjelasan_diskon_1: note(0),
            penjelasan_diskon_2: note(1),
            penjelasan_diskon_3: note(2),
            penjelasan_diskon_4: note(3),
        }
    }
}
