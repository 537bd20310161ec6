//! Per-unit margin and break-even point.

use rust_decimal::Decimal;
use serde::Serialize;
use std::fmt;

use crate::EconError;

/// Break-even volume per month.
///
/// `Unreachable` is a signal, not an error: when a sale earns nothing
/// before fixed costs, no volume ever covers them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "units", rename_all = "camelCase")]
pub enum BreakEven {
    /// Fractional units per month needed to cover fixed costs and marketing.
    Units(Decimal),
    /// Profit per unit is zero or negative.
    Unreachable,
}

impl BreakEven {
    pub fn units(&self) -> Option<Decimal> {
        match self {
            BreakEven::Units(u) => Some(*u),
            BreakEven::Unreachable => None,
        }
    }

    /// Whole units to sell, rounded up. `None` only when unreachable.
    pub fn units_ceil(&self) -> Option<Decimal> {
        self.units().map(|u| u.ceil())
    }

    pub fn is_reachable(&self) -> bool {
        matches!(self, BreakEven::Units(_))
    }

    /// True when the target volume does not reach break-even.
    pub fn exceeds(&self, target_units: u64) -> bool {
        match self {
            BreakEven::Units(u) => *u > Decimal::from(target_units),
            BreakEven::Unreachable => true,
        }
    }
}

impl fmt::Display for BreakEven {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.units_ceil() {
            Some(units) => write!(f, "{} unit", sim_core::format_whole_units(units)),
            None => f.write_str("N/A"),
        }
    }
}

/// Unit economics before any volume is applied.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct UnitEconomics {
    /// Price minus cost of goods minus ancillary costs; marketing excluded.
    pub profit_per_unit: Decimal,
    /// Fixed monthly costs plus the resolved marketing budget.
    pub total_fixed_costs: Decimal,
    pub bep: BreakEven,
}

/// Compute profit per unit and the monthly break-even volume.
///
/// `profit_per_unit = price - cogs - price * pct / 100` and
/// `bep = (fixed + marketing) / profit_per_unit` when the margin is positive.
pub fn unit_economics(
    sell_price: Decimal,
    cost_of_goods: Decimal,
    other_costs_percentage: Decimal,
    fixed_costs_per_month: Decimal,
    resolved_budget: Decimal,
) -> Result<UnitEconomics, EconError> {
    let other_costs = sell_price * other_costs_percentage / Decimal::ONE_HUNDRED;
    let profit_per_unit = sell_price - cost_of_goods - other_costs;
    let total_fixed_costs = fixed_costs_per_month + resolved_budget;
    let bep = if profit_per_unit > Decimal::ZERO {
        let units = total_fixed_costs
            .checked_div(profit_per_unit)
            .ok_or(EconError::Overflow("break-even units"))?;
        BreakEven::Units(units)
    } else {
        BreakEven::Unreachable
    };
    Ok(UnitEconomics {
        profit_per_unit,
        total_fixed_costs,
        bep,
    })
}
