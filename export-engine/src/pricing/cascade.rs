//! Cascading discount arithmetic.
//!
//! Tiers compound sequentially: each percentage applies to the running
//! total left by the previous tier, never to the original base, so tier
//! order matters. Intermediate math stays in `Decimal`; the result is
//! rounded to whole currency units once, half-up, at the end.

use rust_decimal::prelude::*;
use serde::Serialize;

use crate::grouping::LineItemGroup;

/// Convert f64 to Decimal for calculation
#[inline]
fn to_decimal(value: f64) -> Decimal {
    Decimal::from_f64(value).unwrap_or_default()
}

/// Apply an ordered discount chain to a base amount (whole currency units).
///
/// Each rate is clamped to [0, 100] before use — out-of-range values are
/// never an error for the caller. Rates that clamp to zero leave the
/// running total untouched. A negative base clamps to zero.
pub fn apply_cascade(base: i64, rates: &[f64]) -> i64 {
    let mut running = Decimal::from(base.max(0));

    for &raw in rates {
        let rate = to_decimal(raw).max(Decimal::ZERO).min(Decimal::ONE_HUNDRED);
        if rate != to_decimal(raw) {
            tracing::debug!(raw, "discount rate clamped to [0, 100]");
        }
        if rate > Decimal::ZERO {
            running -= running * rate / Decimal::ONE_HUNDRED;
        }
    }

    running
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .to_i64()
        .unwrap_or_default()
}

/// Aggregate totals over grouped line items sharing one discount chain.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DiscountResult {
    /// Sum of group extended totals before any discount.
    pub subtotal: i64,
    /// Sum of per-group cascade results.
    pub total_after_discount: i64,
    /// `subtotal - total_after_discount`.
    pub discount_amount: i64,
}

/// Cascade each group independently, then sum.
///
/// Not equivalent to cascading the grand subtotal once: per-group rounding
/// makes the two diverge on multi-group documents, and the per-group sum
/// is the figure printed on existing documents.
pub fn cascade_totals(groups: &[LineItemGroup], rates: &[f64]) -> DiscountResult {
    let mut subtotal = 0_i64;
    let mut total_after_discount = 0_i64;

    for group in groups {
        subtotal += group.extended_total;
        total_after_discount += apply_cascade(group.extended_total, rates);
    }

    DiscountResult {
        subtotal,
        total_after_discount,
        discount_amount: subtotal - total_after_discount,
    }
}

/// Human-readable chain label: strictly positive rates, trailing zeros
/// trimmed (`12.50` → `12.5`), joined with `" + "`; `"0%"` when no tier
/// is active.
///
/// Display only — the cascade always consumes the raw numeric rates.
pub fn discount_label(rates: &[f64]) -> String {
    let parts: Vec<String> = rates
        .iter()
        .filter(|&&rate| rate > 0.0)
        .map(|&rate| format!("{}%", format_rate(rate)))
        .collect();

    if parts.is_empty() {
        "0%".to_string()
    } else {
        parts.join(" + ")
    }
}

fn format_rate(rate: f64) -> String {
    to_decimal(rate)
        .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
        .normalize()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn group(extended_total: i64) -> LineItemGroup {
        LineItemGroup {
            brand_name: "Brand".to_string(),
            category_name: "Cat".to_string(),
            product_name: "Prod".to_string(),
            color: "3000K".to_string(),
            barcode: "BC".to_string(),
            unit_price: extended_total,
            quantity: 1,
            extended_total,
        }
    }

    // ==================== apply_cascade ====================

    #[test]
    fn empty_chain_is_identity() {
        assert_eq!(apply_cascade(1000, &[]), 1000);
        assert_eq!(apply_cascade(0, &[50.0]), 0);
    }

    #[test]
    fn zero_tiers_are_no_ops() {
        assert_eq!(apply_cascade(1000, &[50.0, 0.0]), 500);
        assert_eq!(apply_cascade(1000, &[0.0, 50.0]), 500);
    }

    #[test]
    fn tiers_compound_sequentially() {
        // two halvings, not one 100% discount
        assert_eq!(apply_cascade(1000, &[50.0, 50.0]), 250);
        // 10% then 20% on the remainder
        assert_eq!(apply_cascade(1000, &[10.0, 20.0]), 720);
    }

    #[test]
    fn rates_clamp_to_the_percent_range() {
        assert_eq!(apply_cascade(100, &[150.0]), 0);
        assert_eq!(apply_cascade(100, &[100.0]), 0);
        assert_eq!(apply_cascade(100, &[-10.0]), 100);
    }

    #[test]
    fn negative_base_clamps_to_zero() {
        assert_eq!(apply_cascade(-500, &[10.0]), 0);
    }

    #[test]
    fn non_finite_rates_are_no_ops() {
        assert_eq!(apply_cascade(1000, &[f64::NAN]), 1000);
        assert_eq!(apply_cascade(1000, &[f64::INFINITY]), 1000);
    }

    #[test]
    fn rounds_half_up_once_at_the_end() {
        // 99 at 33%: 66.33 rounds to 66
        assert_eq!(apply_cascade(99, &[33.0]), 66);
        // 10 at 5%: 9.5 rounds up to 10
        assert_eq!(apply_cascade(10, &[5.0]), 10);
        // intermediate precision is kept: 1000 * 0.875 * 0.92 = 805.0 exactly
        assert_eq!(apply_cascade(1000, &[12.5, 8.0]), 805);
    }

    #[test]
    fn four_tier_chain() {
        // 100000 → 90000 → 85500 → 83790 → 83790 (last tier zero)
        assert_eq!(apply_cascade(100_000, &[10.0, 5.0, 2.0, 0.0]), 83_790);
    }

    // ==================== cascade_totals ====================

    #[test]
    fn per_group_rounding_diverges_from_single_pass() {
        let groups = vec![group(99), group(99)];
        let result = cascade_totals(&groups, &[33.0]);

        // per group: round(66.33) = 66 each
        assert_eq!(result.total_after_discount, 132);
        assert_eq!(result.subtotal, 198);
        assert_eq!(result.discount_amount, 66);

        // a single pass over the combined subtotal would round differently
        assert_eq!(apply_cascade(198, &[33.0]), 133);
        assert_ne!(result.total_after_discount, apply_cascade(198, &[33.0]));
    }

    #[test]
    fn totals_over_empty_groups_are_zero() {
        let result = cascade_totals(&[], &[10.0]);
        assert_eq!(result, DiscountResult::default());
    }

    #[test]
    fn scenario_two_groups_ten_percent() {
        let groups = vec![group(5000), group(500)];
        let result = cascade_totals(&groups, &[10.0, 0.0]);
        assert_eq!(result.subtotal, 5500);
        assert_eq!(result.total_after_discount, 4950);
        assert_eq!(result.discount_amount, 550);
    }

    // ==================== discount_label ====================

    #[test]
    fn label_joins_active_rates() {
        assert_eq!(discount_label(&[10.0, 0.0, 5.5, 0.0]), "10% + 5.5%");
    }

    #[test]
    fn label_trims_trailing_zeros() {
        assert_eq!(discount_label(&[12.50]), "12.5%");
        assert_eq!(discount_label(&[10.0]), "10%");
        assert_eq!(discount_label(&[0.25]), "0.25%");
    }

    #[test]
    fn inactive_chain_labels_as_zero_percent() {
        assert_eq!(discount_label(&[]), "0%");
        assert_eq!(discount_label(&[0.0, 0.0]), "0%");
        assert_eq!(discount_label(&[-5.0]), "0%");
    }

    #[test]
    fn label_shows_raw_rates_even_when_the_math_clamps() {
        // the cascade clamps 150 to 100, the label shows what was entered
        assert_eq!(discount_label(&[150.0]), "150%");
    }
}
