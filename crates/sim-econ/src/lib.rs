#![deny(warnings)]

//! Financial projection engine for the seller business simulator.
//!
//! A simulation is a pure function of one [`SimulationInput`]:
//! - unit economics and break-even volume
//! - proportional marketing budget allocation across active channels
//! - revenue, profit and ROAS projection
//! - monthly and weekly profit-and-loss and cash-flow tables
//! - business-logic warnings

pub mod allocation;
pub mod projection;
pub mod statements;
pub mod unit_economics;
pub mod warnings;

pub use allocation::{allocate_budget, Allocation};
pub use projection::{project, Projection, MONTHS_PER_YEAR};
pub use statements::{LineItem, LineKind, MonthlyFigures, WEEKS_PER_MONTH};
pub use unit_economics::{unit_economics, BreakEven, UnitEconomics};
pub use warnings::{evaluate_warnings, Warning, LOW_ROAS_THRESHOLD};

use rust_decimal::Decimal;
use serde::Serialize;
use sim_core::{validate_input, SimulationInput, ValidationError};
use thiserror::Error;
use tracing::debug;

/// Errors produced by the projection arithmetic.
#[derive(Debug, Error, PartialEq)]
pub enum EconError {
    /// A division result does not fit in a `Decimal`.
    #[error("numeric overflow computing {0}")]
    Overflow(&'static str),
}

/// Why a simulation could not be computed.
#[derive(Debug, Error, PartialEq)]
pub enum SimulationError {
    #[error("invalid input: {0}")]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Econ(#[from] EconError),
}

/// Everything computed for one simulation request.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulationResult {
    pub resolved_budget: Decimal,
    pub profit_per_unit_excluding_marketing: Decimal,
    pub total_fixed_costs: Decimal,
    pub bep: BreakEven,
    pub monthly_revenue: Decimal,
    pub annual_revenue: Decimal,
    pub monthly_profit: Decimal,
    pub annual_profit: Decimal,
    pub roas: Decimal,
    pub pnl_monthly: Vec<LineItem>,
    pub pnl_weekly: Vec<LineItem>,
    pub cashflow_monthly: Vec<LineItem>,
    pub cashflow_weekly: Vec<LineItem>,
    pub allocations: Allocation,
    pub warnings: Vec<Warning>,
}

impl SimulationResult {
    pub fn is_profitable(&self) -> bool {
        self.annual_profit > Decimal::ZERO
    }
}

/// Validate `input` and compute the full projection.
///
/// Validation runs first and nothing is corrected; any broken invariant is
/// returned as [`SimulationError::Validation`].
pub fn compute_simulation(input: &SimulationInput) -> Result<SimulationResult, SimulationError> {
    validate_input(input)?;

    let budget = input.resolved_budget();
    let unit = unit_economics(
        input.sell_price,
        input.cost_of_goods,
        input.other_costs_percentage,
        input.fixed_costs_per_month,
        budget,
    )?;
    let projection = project(input.sell_price, input.avg_sales_per_month, &unit, budget)?;
    let allocations = allocate_budget(budget, &input.active_channels);

    let figures = MonthlyFigures::new(
        input.sell_price,
        input.cost_of_goods,
        input.other_costs_percentage,
        input.fixed_costs_per_month,
        input.avg_sales_per_month,
        budget,
    );
    let pnl_monthly = statements::profit_and_loss(&figures);
    let cashflow_monthly = statements::cash_flow(&figures);

    let warnings = evaluate_warnings(
        &unit.bep,
        input.avg_sales_per_month,
        input.has_marketing(),
        budget,
        projection.roas,
    );
    debug!(
        product = %input.product_name,
        %budget,
        bep = %unit.bep,
        annual_profit = %projection.annual_profit,
        roas = %projection.roas.round_dp(2),
        warnings = warnings.len(),
        "simulation computed"
    );

    Ok(SimulationResult {
        resolved_budget: budget,
        profit_per_unit_excluding_marketing: unit.profit_per_unit,
        total_fixed_costs: unit.total_fixed_costs,
        bep: unit.bep,
        monthly_revenue: projection.monthly_revenue,
        annual_revenue: projection.annual_revenue,
        monthly_profit: projection.monthly_profit,
        annual_profit: projection.annual_profit,
        roas: projection.roas,
        pnl_weekly: statements::weekly(&pnl_monthly),
        cashflow_weekly: statements::weekly(&cashflow_monthly),
        pnl_monthly,
        cashflow_monthly,
        allocations,
        warnings,
    })
}
