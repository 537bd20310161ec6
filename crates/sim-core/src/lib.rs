#![deny(warnings)]

//! Core domain models and invariants for the seller business simulator.
//!
//! This crate defines the serializable simulation input, the static
//! marketing-channel and business-persona catalogs, and the validation
//! that must pass before any projection is computed.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeSet;
use thiserror::Error;

/// Identifier of a marketing channel the seller can switch on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ChannelId {
    /// Short-form video content and paid social ads.
    VideoAds,
    /// Influencers (KOL) and affiliate programs.
    Kol,
    /// Discounts, vouchers and bundling.
    Promo,
    /// SEO, events, marketplace ads and the rest.
    Other,
}

impl ChannelId {
    /// Every channel, in catalog order.
    pub const ALL: [ChannelId; 4] = [
        ChannelId::VideoAds,
        ChannelId::Kol,
        ChannelId::Promo,
        ChannelId::Other,
    ];

    /// Catalog entry for this channel.
    pub fn info(self) -> &'static MarketingChannel {
        match self {
            ChannelId::VideoAds => &CHANNELS[0],
            ChannelId::Kol => &CHANNELS[1],
            ChannelId::Promo => &CHANNELS[2],
            ChannelId::Other => &CHANNELS[3],
        }
    }

    /// Fixed allocation weight in [0, 1].
    pub fn weight(self) -> Decimal {
        self.info().weight()
    }

    /// Display label used in tables and summaries.
    pub fn label(self) -> &'static str {
        self.info().label
    }
}

/// Static catalog entry for a marketing channel.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MarketingChannel {
    /// Channel identifier.
    pub id: ChannelId,
    /// Short label, e.g. "Video & Ads".
    pub label: &'static str,
    /// Strategy title shown next to the switch.
    pub title: &'static str,
    /// One-line description in Bahasa Indonesia.
    pub description: &'static str,
    /// Relative marketing-impact share in basis points (sums to 10000).
    pub weight_bps: u32,
}

impl MarketingChannel {
    /// Weight as a fraction of one.
    pub fn weight(&self) -> Decimal {
        Decimal::new(i64::from(self.weight_bps), 4)
    }
}

/// The fixed marketing-channel catalog. Weights are not user-editable.
pub static CHANNELS: [MarketingChannel; 4] = [
    MarketingChannel {
        id: ChannelId::VideoAds,
        label: "Video & Ads",
        title: "Video Content & Ads",
        description: "Buat konten video pendek & pasang iklan di platform sosial.",
        weight_bps: 4890,
    },
    MarketingChannel {
        id: ChannelId::Kol,
        label: "KOL",
        title: "KOL & Afiliasi",
        description: "Gunakan influencer atau program afiliasi untuk promosi.",
        weight_bps: 4140,
    },
    MarketingChannel {
        id: ChannelId::Promo,
        label: "Promo",
        title: "Promosi & Diskon",
        description: "Tawarkan diskon, voucher, atau promo bundling ke pelanggan.",
        weight_bps: 835,
    },
    MarketingChannel {
        id: ChannelId::Other,
        label: "Lainnya",
        title: "Kanal Lainnya",
        description: "Manfaatkan kanal lain seperti SEO, event, atau marketplace ads.",
        weight_bps: 135,
    },
];

/// How the monthly marketing budget is specified.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CostMode {
    /// A total monthly budget is given directly.
    #[default]
    Budget,
    /// A target cost per acquisition; budget = CAC x monthly sales.
    Cac,
}

/// Margin profile of the business.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MarginModel {
    /// Thin margin, volume driven.
    #[default]
    #[serde(rename = "tipis")]
    Thin,
    /// Thick margin, value driven.
    #[serde(rename = "tebal")]
    Thick,
}

/// How established the brand is.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BrandStrength {
    /// New, unknown brand.
    #[default]
    #[serde(rename = "baru")]
    New,
    /// Strong, recognised brand.
    #[serde(rename = "kuat")]
    Strong,
}

/// Margin and brand combination selecting a seller persona.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BusinessModel {
    #[serde(default)]
    pub margin: MarginModel,
    #[serde(default)]
    pub brand: BrandStrength,
}

/// Persona text for a business model.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct BusinessProfile {
    pub persona: &'static str,
    pub analysis: &'static str,
    pub platforms: &'static str,
}

static PROFILES: [BusinessProfile; 4] = [
    BusinessProfile {
        persona: "Pejuang Volume",
        analysis: "Fokus kejar volume penjualan dan perputaran cepat. Harga kompetitif jadi senjata utama.",
        platforms: "Rekomendasi: TikTok Shop, Shopee.",
    },
    BusinessProfile {
        persona: "Pemain Skala Besar",
        analysis: "Manfaatkan brand yang dikenal untuk jaga volume. Kunci di efisiensi operasional.",
        platforms: "Rekomendasi: Shopee Mall, Tokopedia.",
    },
    BusinessProfile {
        persona: "Spesialis Niche",
        analysis: "Targetkan segmen spesifik dengan produk unik. Branding dan cerita produk jadi ujung tombak.",
        platforms: "Rekomendasi: Instagram, Website (Shopify).",
    },
    BusinessProfile {
        persona: "Merek Premium",
        analysis: "Jual nilai dan status, bukan cuma produk. Pengalaman pelanggan harus premium.",
        platforms: "Rekomendasi: Website, Lazada LazMall.",
    },
];

impl BusinessModel {
    /// Persona, positioning and platform hint for this model.
    pub fn profile(&self) -> &'static BusinessProfile {
        match (self.margin, self.brand) {
            (MarginModel::Thin, BrandStrength::New) => &PROFILES[0],
            (MarginModel::Thin, BrandStrength::Strong) => &PROFILES[1],
            (MarginModel::Thick, BrandStrength::New) => &PROFILES[2],
            (MarginModel::Thick, BrandStrength::Strong) => &PROFILES[3],
        }
    }
}

/// One simulation request, as submitted by the seller.
///
/// Money fields accept numbers, numeric strings, or id-ID formatted text
/// prefixed with `Rp` such as `"Rp 1.500.000"` (read as whole Rupiah).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulationInput {
    /// Product or business name.
    pub product_name: String,
    /// Main target segment.
    pub target_segment: String,
    /// Margin and brand profile.
    #[serde(default)]
    pub business_model: BusinessModel,
    /// Selling price per unit (> 0).
    #[serde(deserialize_with = "de_money")]
    pub sell_price: Decimal,
    /// Cost of goods per unit (HPP), strictly below the selling price.
    #[serde(deserialize_with = "de_money")]
    pub cost_of_goods: Decimal,
    /// Ancillary costs as a percentage of the selling price, in [0, 100].
    #[serde(default)]
    pub other_costs_percentage: Decimal,
    /// Fixed monthly costs (>= 0).
    #[serde(default, deserialize_with = "de_money")]
    pub fixed_costs_per_month: Decimal,
    /// Target unit sales per month (>= 1).
    pub avg_sales_per_month: u64,
    /// Budget or CAC driven marketing spend.
    #[serde(default)]
    pub cost_mode: CostMode,
    /// Monthly marketing budget, used in [`CostMode::Budget`].
    #[serde(default, deserialize_with = "de_money")]
    pub total_marketing_budget: Decimal,
    /// Target cost per acquisition, used in [`CostMode::Cac`].
    #[serde(default, deserialize_with = "de_money")]
    pub target_cac: Decimal,
    /// Switched-on marketing channels.
    #[serde(default)]
    pub active_channels: BTreeSet<ChannelId>,
}

impl SimulationInput {
    /// Monthly marketing spend implied by the cost mode.
    pub fn resolved_budget(&self) -> Decimal {
        match self.cost_mode {
            CostMode::Budget => self.total_marketing_budget,
            CostMode::Cac => self.target_cac * Decimal::from(self.avg_sales_per_month),
        }
    }

    /// Whether any marketing channel is switched on.
    pub fn has_marketing(&self) -> bool {
        !self.active_channels.is_empty()
    }
}

fn de_money<'de, D>(deserializer: D) -> Result<Decimal, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Text(String),
        Number(Decimal),
    }
    match Raw::deserialize(deserializer)? {
        Raw::Number(d) => Ok(d),
        Raw::Text(s) => {
            let trimmed = s.trim();
            let parsed = if trimmed.starts_with("Rp") {
                parse_rupiah_input(trimmed).map(Decimal::from)
            } else {
                trimmed.parse::<Decimal>().ok()
            };
            parsed.ok_or_else(|| serde::de::Error::custom(format!("invalid amount: {s:?}")))
        }
    }
}

/// Validation errors for simulation input invariants.
#[derive(Debug, Error, PartialEq)]
pub enum ValidationError {
    /// A required text field is blank.
    #[error("{0} must not be empty")]
    EmptyField(&'static str),
    /// Selling price must be strictly positive.
    #[error("sell price must be > 0")]
    NonPositivePrice,
    /// Money values must be non-negative.
    #[error("{0} must not be negative")]
    NegativeMoney(&'static str),
    /// Percentage outside [0, 100].
    #[error("other costs percentage must be within [0, 100]")]
    PercentageOutOfRange,
    /// Value above the supported range.
    #[error("{0} is too large")]
    ValueTooLarge(&'static str),
    /// More fraction digits than the field carries.
    #[error("{0} has too many decimal places")]
    TooPrecise(&'static str),
    /// A sale could never cover its own cost of goods.
    #[error("cost of goods must be lower than the sell price")]
    CostNotBelowPrice,
    /// At least one unit per month must be targeted.
    #[error("average sales per month must be at least 1")]
    SalesTargetTooLow,
    /// Channels switched on without any spend behind them.
    #[error("marketing channels are active but the marketing budget is zero")]
    MarketingWithoutBudget,
}

/// Upper bound for any money field, in Rupiah.
pub const MAX_MONEY: u64 = 1_000_000_000_000_000;
/// Upper bound for the monthly unit target.
pub const MAX_UNITS_PER_MONTH: u64 = 1_000_000_000;
/// Fraction digits allowed on money fields (sen).
pub const MONEY_SCALE: u32 = 2;
/// Fraction digits allowed on the other-costs percentage.
pub const PERCENT_SCALE: u32 = 4;

fn fraction_digits(value: Decimal) -> u32 {
    value.normalize().scale()
}

/// Validate a simulation request. Nothing is corrected; the first broken
/// invariant is reported.
pub fn validate_input(input: &SimulationInput) -> Result<(), ValidationError> {
    if input.product_name.trim().is_empty() {
        return Err(ValidationError::EmptyField("product name"));
    }
    if input.target_segment.trim().is_empty() {
        return Err(ValidationError::EmptyField("target segment"));
    }
    if input.sell_price <= Decimal::ZERO {
        return Err(ValidationError::NonPositivePrice);
    }

    let max_money = Decimal::from(MAX_MONEY);
    let money = [
        ("sell price", input.sell_price),
        ("cost of goods", input.cost_of_goods),
        ("fixed costs", input.fixed_costs_per_month),
        ("marketing budget", input.total_marketing_budget),
        ("target CAC", input.target_cac),
    ];
    for (field, value) in money {
        if value < Decimal::ZERO {
            return Err(ValidationError::NegativeMoney(field));
        }
    }
    if input.other_costs_percentage < Decimal::ZERO
        || input.other_costs_percentage > Decimal::ONE_HUNDRED
    {
        return Err(ValidationError::PercentageOutOfRange);
    }
    for (field, value) in money {
        if value > max_money {
            return Err(ValidationError::ValueTooLarge(field));
        }
    }
    if input.avg_sales_per_month > MAX_UNITS_PER_MONTH {
        return Err(ValidationError::ValueTooLarge("average sales per month"));
    }
    if input.resolved_budget() > max_money {
        return Err(ValidationError::ValueTooLarge("marketing budget"));
    }
    for (field, value) in money {
        if fraction_digits(value) > MONEY_SCALE {
            return Err(ValidationError::TooPrecise(field));
        }
    }
    if fraction_digits(input.other_costs_percentage) > PERCENT_SCALE {
        return Err(ValidationError::TooPrecise("other costs percentage"));
    }

    if input.cost_of_goods >= input.sell_price {
        return Err(ValidationError::CostNotBelowPrice);
    }
    if input.avg_sales_per_month < 1 {
        return Err(ValidationError::SalesTargetTooLow);
    }
    if input.has_marketing() && input.resolved_budget() <= Decimal::ZERO {
        return Err(ValidationError::MarketingWithoutBudget);
    }
    Ok(())
}

/// Format an amount the way id-ID currency is shown: `Rp 1.234.567`,
/// no fraction digits, half away from zero.
pub fn format_rupiah(value: Decimal) -> String {
    let rounded = value.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
    let digits = group_thousands(&rounded.abs().trunc().to_string());
    if rounded.is_sign_negative() && !rounded.is_zero() {
        format!("-Rp {digits}")
    } else {
        format!("Rp {digits}")
    }
}

/// Format a unit count with id-ID grouping: `12.500`.
pub fn format_units(units: u64) -> String {
    group_thousands(&units.to_string())
}

/// Like [`format_units`] for a whole-unit `Decimal`, which may exceed
/// `u64`. Any fraction is dropped.
pub fn format_whole_units(units: Decimal) -> String {
    group_thousands(&units.trunc().abs().to_string())
}

/// Parse whole-Rupiah input such as "Rp 1.500.000" or "1500000".
///
/// An optional `Rp` prefix, spaces and `.` group separators are skipped.
/// Any other character, a sign included, rejects the input, as do digits
/// that do not fit in a `u64`. Blank input reads as 0.
pub fn parse_rupiah_input(raw: &str) -> Option<u64> {
    let body = raw.trim();
    let body = body.strip_prefix("Rp").unwrap_or(body);
    let mut digits = String::with_capacity(body.len());
    for ch in body.chars() {
        match ch {
            '0'..='9' => digits.push(ch),
            '.' | ' ' => {}
            _ => return None,
        }
    }
    if digits.is_empty() {
        return Some(0);
    }
    digits.parse().ok()
}

fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push('.');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn sample_input() -> SimulationInput {
        SimulationInput {
            product_name: "Keripik Pedas".to_string(),
            target_segment: "Karyawan kantoran".to_string(),
            business_model: BusinessModel::default(),
            sell_price: Decimal::new(100_000, 0),
            cost_of_goods: Decimal::new(50_000, 0),
            other_costs_percentage: Decimal::new(10, 0),
            fixed_costs_per_month: Decimal::new(500_000, 0),
            avg_sales_per_month: 100,
            cost_mode: CostMode::Budget,
            total_marketing_budget: Decimal::new(3_000_000, 0),
            target_cac: Decimal::ZERO,
            active_channels: BTreeSet::from([ChannelId::VideoAds]),
        }
    }

    #[test]
    fn catalog_weights_sum_to_one() {
        let total: Decimal = CHANNELS.iter().map(MarketingChannel::weight).sum();
        assert_eq!(total, Decimal::ONE);
        for id in ChannelId::ALL {
            assert_eq!(id.info().id, id);
        }
        assert_eq!(ChannelId::VideoAds.weight(), Decimal::new(489, 3));
        assert_eq!(ChannelId::Other.label(), "Lainnya");
    }

    #[test]
    fn resolved_budget_follows_cost_mode() {
        let mut input = sample_input();
        assert_eq!(input.resolved_budget(), Decimal::new(3_000_000, 0));
        input.cost_mode = CostMode::Cac;
        input.target_cac = Decimal::new(25_000, 0);
        assert_eq!(input.resolved_budget(), Decimal::new(2_500_000, 0));
    }

    #[test]
    fn valid_sample_passes() {
        assert_eq!(validate_input(&sample_input()), Ok(()));
    }

    #[test]
    fn zero_budget_with_active_channel_is_rejected() {
        let mut input = sample_input();
        input.total_marketing_budget = Decimal::ZERO;
        assert_eq!(
            validate_input(&input),
            Err(ValidationError::MarketingWithoutBudget)
        );
        input.active_channels.clear();
        assert_eq!(validate_input(&input), Ok(()));
    }

    #[test]
    fn zero_cac_with_active_channel_is_rejected() {
        let mut input = sample_input();
        input.cost_mode = CostMode::Cac;
        input.target_cac = Decimal::ZERO;
        assert_eq!(
            validate_input(&input),
            Err(ValidationError::MarketingWithoutBudget)
        );
    }

    #[test]
    fn cost_equal_to_price_is_rejected() {
        let mut input = sample_input();
        input.cost_of_goods = Decimal::new(100_000, 0);
        assert_eq!(
            validate_input(&input),
            Err(ValidationError::CostNotBelowPrice)
        );
    }

    #[test]
    fn field_checks() {
        let mut input = sample_input();
        input.avg_sales_per_month = 0;
        assert_eq!(
            validate_input(&input),
            Err(ValidationError::SalesTargetTooLow)
        );

        let mut input = sample_input();
        input.product_name = "   ".to_string();
        assert_eq!(
            validate_input(&input),
            Err(ValidationError::EmptyField("product name"))
        );

        let mut input = sample_input();
        input.sell_price = Decimal::ZERO;
        assert_eq!(validate_input(&input), Err(ValidationError::NonPositivePrice));

        let mut input = sample_input();
        input.fixed_costs_per_month = Decimal::new(-1, 0);
        assert_eq!(
            validate_input(&input),
            Err(ValidationError::NegativeMoney("fixed costs"))
        );

        let mut input = sample_input();
        input.other_costs_percentage = Decimal::new(101, 0);
        assert_eq!(
            validate_input(&input),
            Err(ValidationError::PercentageOutOfRange)
        );

        let mut input = sample_input();
        input.total_marketing_budget = Decimal::from(MAX_MONEY) + Decimal::ONE;
        assert_eq!(
            validate_input(&input),
            Err(ValidationError::ValueTooLarge("marketing budget"))
        );
    }

    #[test]
    fn personas_cover_all_models() {
        let m = BusinessModel {
            margin: MarginModel::Thick,
            brand: BrandStrength::Strong,
        };
        assert_eq!(m.profile().persona, "Merek Premium");
        assert_eq!(BusinessModel::default().profile().persona, "Pejuang Volume");
    }

    #[test]
    fn rupiah_formatting() {
        assert_eq!(format_rupiah(Decimal::new(1_234_567, 0)), "Rp 1.234.567");
        assert_eq!(format_rupiah(Decimal::new(-40_000, 0)), "-Rp 40.000");
        assert_eq!(format_rupiah(Decimal::new(9995, 1)), "Rp 1.000");
        assert_eq!(format_rupiah(Decimal::new(-4, 1)), "Rp 0");
        assert_eq!(format_rupiah(Decimal::ZERO), "Rp 0");
        assert_eq!(format_units(12_500), "12.500");
        assert_eq!(format_units(88), "88");
        assert_eq!(
            format_whole_units(Decimal::from_i128_with_scale(25_000_000_000_000_000_000, 0)),
            "25.000.000.000.000.000.000"
        );
    }

    #[test]
    fn rupiah_input_parsing() {
        assert_eq!(parse_rupiah_input("Rp 1.500.000"), Some(1_500_000));
        assert_eq!(parse_rupiah_input(""), Some(0));
        assert_eq!(parse_rupiah_input("99999999999999999999999"), None);
        assert_eq!(parse_rupiah_input("Rp -500.000"), None);
        assert_eq!(parse_rupiah_input("1,500,000"), None);
        assert_eq!(parse_rupiah_input("Rp 1.500.000,50"), None);
    }

    #[test]
    fn signed_rupiah_text_fails_to_deserialize() {
        let yaml = r#"
productName: Keripik Pedas
targetSegment: Karyawan kantoran
sellPrice: "Rp 100.000"
costOfGoods: 50000
fixedCostsPerMonth: "Rp -500.000"
avgSalesPerMonth: 100
"#;
        let err = serde_yaml::from_str::<SimulationInput>(yaml).unwrap_err();
        assert!(err.to_string().contains("invalid amount"));

        let json = r#"{"productName":"a","targetSegment":"b","sellPrice":"100000","costOfGoods":"0","fixedCostsPerMonth":"-500000","avgSalesPerMonth":1}"#;
        let input: SimulationInput = serde_json::from_str(json).unwrap();
        assert_eq!(
            validate_input(&input),
            Err(ValidationError::NegativeMoney("fixed costs"))
        );
    }

    #[test]
    fn precision_and_resolved_budget_limits() {
        let mut input = sample_input();
        input.total_marketing_budget = Decimal::new(1, 28);
        assert_eq!(
            validate_input(&input),
            Err(ValidationError::TooPrecise("marketing budget"))
        );

        let mut input = sample_input();
        input.sell_price = Decimal::new(100_000_000, 3);
        assert_eq!(validate_input(&input), Ok(()));
        input.sell_price = Decimal::new(100_000_001, 3);
        assert_eq!(
            validate_input(&input),
            Err(ValidationError::TooPrecise("sell price"))
        );

        let mut input = sample_input();
        input.other_costs_percentage = Decimal::new(125_005, 5);
        assert_eq!(
            validate_input(&input),
            Err(ValidationError::TooPrecise("other costs percentage"))
        );

        let mut input = sample_input();
        input.cost_mode = CostMode::Cac;
        input.target_cac = Decimal::from(MAX_MONEY);
        assert_eq!(
            validate_input(&input),
            Err(ValidationError::ValueTooLarge("marketing budget"))
        );
    }

    #[test]
    fn scenario_yaml_uses_form_names() {
        let yaml = r#"
productName: Keripik Pedas
targetSegment: Karyawan kantoran
businessModel: { margin: tebal, brand: baru }
sellPrice: "Rp 100.000"
costOfGoods: 50000
otherCostsPercentage: 10
fixedCostsPerMonth: 500000
avgSalesPerMonth: 100
costMode: cac
targetCac: 30000
activeChannels: [videoAds, kol]
"#;
        let input: SimulationInput = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(input.sell_price, Decimal::new(100_000, 0));
        assert_eq!(input.cost_mode, CostMode::Cac);
        assert_eq!(input.total_marketing_budget, Decimal::ZERO);
        assert_eq!(input.business_model.margin, MarginModel::Thick);
        assert_eq!(input.active_channels.len(), 2);
        assert_eq!(input.resolved_budget(), Decimal::new(3_000_000, 0));
        validate_input(&input).unwrap();
    }

    #[test]
    fn serde_roundtrip_input() {
        let input = sample_input();
        let s = serde_json::to_string(&input).unwrap();
        let back: SimulationInput = serde_json::from_str(&s).unwrap();
        assert_eq!(back, input);
    }

    proptest! {
        #[test]
        fn cost_below_price_validates(price in 1u64..1_000_000_000, cost_frac in 0u64..100, sales in 1u64..100_000) {
            let mut input = sample_input();
            input.sell_price = Decimal::from(price);
            input.cost_of_goods = Decimal::from(price * cost_frac / 100);
            input.avg_sales_per_month = sales;
            prop_assert!(validate_input(&input).is_ok());
        }

        #[test]
        fn cost_at_or_above_price_fails(price in 1u64..1_000_000_000, extra in 0u64..1_000) {
            let mut input = sample_input();
            input.sell_price = Decimal::from(price);
            input.cost_of_goods = Decimal::from(price + extra);
            prop_assert_eq!(validate_input(&input), Err(ValidationError::CostNotBelowPrice));
        }
    }
}
