//! Business-logic warnings over a computed simulation.

use rust_decimal::Decimal;
use serde::Serialize;
use std::fmt;

use crate::unit_economics::BreakEven;

/// ROAS below this is reported as an inefficient ad spend.
pub const LOW_ROAS_THRESHOLD: Decimal = Decimal::from_parts(15, 0, 0, false, 1);

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum Warning {
    /// Target sales do not reach break-even. `bep_units` is the whole-unit
    /// break-even volume, `None` only when break-even is unreachable.
    BreakEvenAboveTarget {
        bep_units: Option<Decimal>,
        target_units: u64,
    },
    /// Channels are switched on without any marketing spend.
    MarketingWithoutBudget,
    /// Return on ad spend below [`LOW_ROAS_THRESHOLD`].
    LowRoas { roas: Decimal },
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Warning::BreakEvenAboveTarget {
                bep_units: Some(bep),
                target_units,
            } => write!(
                f,
                "BEP ({} unit) lebih tinggi dari target penjualan ({} unit/bulan). Biaya bulanan belum tertutup.",
                sim_core::format_whole_units(*bep),
                sim_core::format_units(*target_units)
            ),
            Warning::BreakEvenAboveTarget { bep_units: None, .. } => f.write_str(
                "BEP tidak akan tercapai: untung per unit nol atau minus, jadi berapa pun penjualannya biaya tidak tertutup.",
            ),
            Warning::MarketingWithoutBudget => {
                f.write_str("Strategi pemasaran aktif tapi budget pemasaran nol.")
            }
            Warning::LowRoas { roas } if roas.is_zero() => write!(
                f,
                "ROAS 0x di bawah {}x. Tanpa belanja iklan, belum ada omzet yang bisa diatribusikan ke pemasaran.",
                LOW_ROAS_THRESHOLD
            ),
            Warning::LowRoas { roas } => write!(
                f,
                "ROAS {}x di bawah {}x. Iklan belum efisien menghasilkan omzet.",
                roas.round_dp(2),
                LOW_ROAS_THRESHOLD
            ),
        }
    }
}

/// Evaluate every warning rule, in priority order. All applicable rules
/// fire; an empty list means every check passed.
///
/// ROAS is zero without marketing spend, so an organic-only run always
/// carries the low-ROAS warning.
pub fn evaluate_warnings(
    bep: &BreakEven,
    target_units: u64,
    has_marketing: bool,
    resolved_budget: Decimal,
    roas: Decimal,
) -> Vec<Warning> {
    let mut warnings = Vec::new();
    if bep.exceeds(target_units) {
        warnings.push(Warning::BreakEvenAboveTarget {
            bep_units: bep.units_ceil(),
            target_units,
        });
    }
    if has_marketing && resolved_budget <= Decimal::ZERO {
        warnings.push(Warning::MarketingWithoutBudget);
    }
    if roas < LOW_ROAS_THRESHOLD {
        warnings.push(Warning::LowRoas { roas });
    }
    warnings
}
