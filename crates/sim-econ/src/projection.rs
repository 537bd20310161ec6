//! Revenue, profit and ROAS projection.

use rust_decimal::Decimal;

use crate::unit_economics::UnitEconomics;
use crate::EconError;

pub const MONTHS_PER_YEAR: u32 = 12;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Projection {
    pub monthly_revenue: Decimal,
    pub annual_revenue: Decimal,
    pub monthly_profit: Decimal,
    pub annual_profit: Decimal,
    /// Monthly revenue per unit of marketing spend; zero without spend.
    pub roas: Decimal,
}

/// Project revenue and profit at the target volume.
///
/// Marketing is subtracted once, through `total_fixed_costs`, so profit is
/// exactly zero at the break-even volume. ROAS attributes all revenue to
/// marketing spend.
pub fn project(
    sell_price: Decimal,
    avg_sales_per_month: u64,
    unit: &UnitEconomics,
    resolved_budget: Decimal,
) -> Result<Projection, EconError> {
    let units = Decimal::from(avg_sales_per_month);
    let months = Decimal::from(MONTHS_PER_YEAR);

    let monthly_revenue = sell_price * units;
    let monthly_profit = unit.profit_per_unit * units - unit.total_fixed_costs;
    let roas = if resolved_budget > Decimal::ZERO {
        monthly_revenue
            .checked_div(resolved_budget)
            .ok_or(EconError::Overflow("roas"))?
    } else {
        Decimal::ZERO
    };

    Ok(Projection {
        monthly_revenue,
        annual_revenue: monthly_revenue * months,
        monthly_profit,
        annual_profit: monthly_profit * months,
        roas,
    })
}
