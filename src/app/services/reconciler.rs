//! Totals reconciliation between calculated and reported figures
//!
//! Reports often carry an explicit totals line alongside per-fuel figures,
//! and the two disagree whenever the template drifted or a category went
//! unrecognized. A three-band tolerance policy arbitrates: tight agreement
//! keeps the reported total (it may include categories the parser missed),
//! wide disagreement overrides with the calculated total, and the band in
//! between keeps the reported total under a warning.

use tracing::debug;

use crate::app::models::FuelEntry;
use crate::config::ParserConfig;

/// Outcome of totals reconciliation
#[derive(Debug, Clone, PartialEq)]
pub struct ReconciledTotals {
    pub total_volume: f64,
    pub total_amount: f64,

    /// Discrepancy warnings produced during reconciliation
    pub warnings: Vec<String>,

    /// Whether reported and calculated totals agreed within the wide band
    /// (vacuously true when no explicit total existed)
    pub within_wide_tolerance: bool,
}

/// Reconcile the calculated totals against an explicitly reported pair
pub fn reconcile(
    fuel_data: &[FuelEntry],
    explicit: Option<(f64, f64)>,
    config: &ParserConfig,
) -> ReconciledTotals {
    let calculated_volume: f64 = fuel_data.iter().map(|e| e.volume).sum();
    let calculated_amount: f64 = fuel_data.iter().map(|e| e.amount).sum();

    let Some((reported_volume, reported_amount)) = explicit else {
        return ReconciledTotals {
            total_volume: calculated_volume,
            total_amount: calculated_amount,
            warnings: Vec::new(),
            within_wide_tolerance: true,
        };
    };

    let mut warnings = Vec::new();
    let mut within_wide = true;

    let (total_volume, volume_ok) = reconcile_axis(
        "volume",
        reported_volume,
        calculated_volume,
        config,
        &mut warnings,
    );
    let (total_amount, amount_ok) = reconcile_axis(
        "amount",
        reported_amount,
        calculated_amount,
        config,
        &mut warnings,
    );
    within_wide &= volume_ok && amount_ok;

    ReconciledTotals {
        total_volume,
        total_amount,
        warnings,
        within_wide_tolerance: within_wide,
    }
}

/// Three-band reconciliation for one axis; returns the chosen total and
/// whether the axis stayed within the wide tolerance
fn reconcile_axis(
    axis: &str,
    reported: f64,
    calculated: f64,
    config: &ParserConfig,
    warnings: &mut Vec<String>,
) -> (f64, bool) {
    let difference_pct = percentage_difference(reported, calculated);
    debug!(
        "totals {}: reported {:.2}, calculated {:.2}, diff {:.2}%",
        axis, reported, calculated, difference_pct
    );

    if difference_pct < config.totals_tight_tolerance_pct {
        // Reported total is authoritative; it may cover categories the
        // parser did not recognize
        (reported, true)
    } else if difference_pct > config.totals_wide_tolerance_pct {
        warnings.push(format!(
            "Totals mismatch: reported {} {:.2} differs from calculated {:.2} by {:.1}%; using calculated value",
            axis, reported, calculated, difference_pct
        ));
        (calculated, false)
    } else {
        warnings.push(format!(
            "Totals discrepancy: reported {} {:.2} differs from calculated {:.2} by {:.1}%",
            axis, reported, calculated, difference_pct
        ));
        (reported, true)
    }
}

/// Symmetric percentage difference relative to the larger magnitude
fn percentage_difference(a: f64, b: f64) -> f64 {
    let reference = a.abs().max(b.abs());
    if reference == 0.0 {
        return 0.0;
    }
    ((a - b).abs() / reference) * 100.0
}
