//! Flattened view of a simulation handed to the narrative step.

use rust_decimal::Decimal;
use serde::Serialize;
use sim_core::{format_rupiah, BusinessProfile, ChannelId, SimulationInput};
use sim_econ::{statements, BreakEven, SimulationResult, LOW_ROAS_THRESHOLD};

/// General Indonesian e-commerce backdrop used when the caller has none.
pub const DEFAULT_MARKET_CONDITION: &str = "Pasar e-commerce Indonesia sangat kompetitif dan \
didominasi Shopee, Tokopedia/TikTok Shop, dan Lazada. Konsumen sensitif harga, \
promo dan gratis ongkir jadi pemicu utama, dan konten video pendek serta live \
shopping makin menentukan penjualan.";

/// ROAS above this reads as an efficient ad spend.
pub const STRONG_ROAS: Decimal = Decimal::from_parts(25, 0, 0, false, 1);

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulationSummary {
    pub product_name: String,
    pub target_segment: String,
    pub profile: &'static BusinessProfile,
    pub channels: Vec<ChannelId>,
    pub marketing_budget: Decimal,
    pub annual_revenue: Decimal,
    pub annual_profit: Decimal,
    pub roas: Decimal,
    pub bep: BreakEven,
    pub target_units: u64,
    pub warnings: Vec<String>,
    pub monthly_pnl: String,
    pub monthly_cash_flow: String,
    pub market_condition: String,
}

impl SimulationSummary {
    pub fn new(input: &SimulationInput, result: &SimulationResult) -> Self {
        SimulationSummary {
            product_name: input.product_name.trim().to_string(),
            target_segment: input.target_segment.trim().to_string(),
            profile: input.business_model.profile(),
            channels: input.active_channels.iter().copied().collect(),
            marketing_budget: result.resolved_budget,
            annual_revenue: result.annual_revenue,
            annual_profit: result.annual_profit,
            roas: result.roas,
            bep: result.bep,
            target_units: input.avg_sales_per_month,
            warnings: result.warnings.iter().map(ToString::to_string).collect(),
            monthly_pnl: statements::render_text(&result.pnl_monthly),
            monthly_cash_flow: statements::render_text(&result.cashflow_monthly),
            market_condition: DEFAULT_MARKET_CONDITION.to_string(),
        }
    }

    pub fn with_market_condition(mut self, text: impl Into<String>) -> Self {
        self.market_condition = text.into();
        self
    }

    pub fn has_budget(&self) -> bool {
        self.marketing_budget > Decimal::ZERO
    }

    pub fn is_loss(&self) -> bool {
        self.annual_profit < Decimal::ZERO
    }

    pub fn misses_break_even(&self) -> bool {
        self.bep.exceeds(self.target_units)
    }

    /// ROAS under the warning threshold; always true without a budget.
    pub fn has_low_roas(&self) -> bool {
        self.roas < LOW_ROAS_THRESHOLD
    }

    pub fn has_strong_roas(&self) -> bool {
        self.has_budget() && self.roas > STRONG_ROAS
    }

    pub fn roas_text(&self) -> String {
        format!("{}x", self.roas.round_dp(2))
    }

    /// Titles of the selected marketing strategies, or "Tidak ada".
    pub fn strategies_text(&self) -> String {
        if self.channels.is_empty() {
            return "Tidak ada".to_string();
        }
        self.channels
            .iter()
            .map(|c| c.info().title)
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Catalog channels that are not switched on.
    pub fn inactive_channels(&self) -> Vec<ChannelId> {
        ChannelId::ALL
            .iter()
            .copied()
            .filter(|c| !self.channels.contains(c))
            .collect()
    }

    pub fn warnings_text(&self) -> String {
        if self.warnings.is_empty() {
            "Tidak ada.".to_string()
        } else {
            self.warnings.join(" ")
        }
    }

    /// One-paragraph forecast used by the market-entry evaluation.
    pub fn financial_forecast(&self) -> String {
        format!(
            "Proyeksi omzet tahunan {}. Proyeksi untung tahunan {} ({}). ROAS {}. BEP {} per bulan dengan target penjualan {} unit per bulan. Peringatan: {}",
            format_rupiah(self.annual_revenue),
            format_rupiah(self.annual_profit),
            if self.is_loss() { "RUGI" } else { "UNTUNG" },
            self.roas_text(),
            self.bep,
            sim_core::format_units(self.target_units),
            self.warnings_text(),
        )
    }
}
