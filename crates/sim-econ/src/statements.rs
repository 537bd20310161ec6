//! Profit-and-loss and cash-flow tables, monthly and weekly.

use rust_decimal::Decimal;
use serde::Serialize;

/// Weeks in a month used to scale the weekly view. Weekly figures are a
/// linear scaling of the monthly ones.
pub const WEEKS_PER_MONTH: Decimal = Decimal::from_parts(433, 0, 0, false, 2);

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum LineKind {
    Component,
    /// Bottom line of the table (net profit, net cash flow).
    Total,
}

/// One row of a statement. `amount` is a magnitude; the direction lives in
/// `is_negative`.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LineItem {
    pub label: &'static str,
    pub amount: Decimal,
    pub is_negative: bool,
    pub kind: LineKind,
}

impl LineItem {
    fn inflow(label: &'static str, amount: Decimal) -> Self {
        Self::signed(label, amount, LineKind::Component)
    }

    fn outflow(label: &'static str, amount: Decimal) -> Self {
        LineItem {
            label,
            amount: amount.abs(),
            is_negative: true,
            kind: LineKind::Component,
        }
    }

    fn signed(label: &'static str, value: Decimal, kind: LineKind) -> Self {
        LineItem {
            label,
            amount: value.abs(),
            is_negative: value < Decimal::ZERO,
            kind,
        }
    }

    /// Amount with its direction applied.
    pub fn signed_amount(&self) -> Decimal {
        if self.is_negative {
            -self.amount
        } else {
            self.amount
        }
    }

    pub fn is_total(&self) -> bool {
        self.kind == LineKind::Total
    }
}

/// Monthly money movements the tables are built from.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MonthlyFigures {
    pub revenue: Decimal,
    pub cost_of_goods: Decimal,
    pub other_costs: Decimal,
    pub fixed_costs: Decimal,
    pub marketing: Decimal,
}

impl MonthlyFigures {
    pub fn new(
        sell_price: Decimal,
        cost_of_goods: Decimal,
        other_costs_percentage: Decimal,
        fixed_costs_per_month: Decimal,
        avg_sales_per_month: u64,
        resolved_budget: Decimal,
    ) -> Self {
        let units = Decimal::from(avg_sales_per_month);
        let revenue = sell_price * units;
        MonthlyFigures {
            revenue,
            cost_of_goods: cost_of_goods * units,
            other_costs: revenue * other_costs_percentage / Decimal::ONE_HUNDRED,
            fixed_costs: fixed_costs_per_month,
            marketing: resolved_budget,
        }
    }

    pub fn gross_margin(&self) -> Decimal {
        self.revenue - self.cost_of_goods - self.other_costs
    }

    pub fn operating_cash(&self) -> Decimal {
        self.revenue - self.cost_of_goods - self.other_costs - self.fixed_costs
    }

    pub fn net(&self) -> Decimal {
        self.operating_cash() - self.marketing
    }
}

pub const NET_PROFIT_LABEL: &str = "Untung Bersih";
pub const NET_CASH_FLOW_LABEL: &str = "Arus Kas Bersih";

/// Monthly profit-and-loss statement.
pub fn profit_and_loss(f: &MonthlyFigures) -> Vec<LineItem> {
    vec![
        LineItem::inflow("Omzet", f.revenue),
        LineItem::outflow("HPP (Modal Produk)", f.cost_of_goods),
        LineItem::outflow("Biaya Lain-lain", f.other_costs),
        LineItem::signed("Laba Kotor", f.gross_margin(), LineKind::Component),
        LineItem::outflow("Biaya Tetap", f.fixed_costs),
        LineItem::outflow("Biaya Pemasaran", f.marketing),
        LineItem::signed(NET_PROFIT_LABEL, f.net(), LineKind::Total),
    ]
}

/// Monthly cash-flow simulation, independent of any opening balance.
pub fn cash_flow(f: &MonthlyFigures) -> Vec<LineItem> {
    vec![
        LineItem::inflow("Kas Masuk Penjualan", f.revenue),
        LineItem::outflow(
            "Kas Keluar Operasional",
            f.cost_of_goods + f.other_costs + f.fixed_costs,
        ),
        LineItem::signed("Arus Kas Operasional", f.operating_cash(), LineKind::Component),
        LineItem::outflow("Kas Keluar Pemasaran", f.marketing),
        LineItem::signed(NET_CASH_FLOW_LABEL, f.net(), LineKind::Total),
    ]
}

/// Scale a monthly table down to one week.
pub fn weekly(monthly: &[LineItem]) -> Vec<LineItem> {
    monthly
        .iter()
        .map(|item| LineItem {
            amount: item.amount / WEEKS_PER_MONTH,
            ..item.clone()
        })
        .collect()
}

/// Render a table as `label: Rp x` pairs joined by `"; "`.
pub fn render_text(items: &[LineItem]) -> String {
    items
        .iter()
        .map(|item| format!("{}: {}", item.label, sim_core::format_rupiah(item.signed_amount())))
        .collect::<Vec<_>>()
        .join("; ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn d(v: i64) -> Decimal {
        Decimal::new(v, 0)
    }

    fn reference() -> MonthlyFigures {
        MonthlyFigures::new(d(100_000), d(50_000), d(10), d(500_000), 100, d(3_000_000))
    }

    #[test]
    fn pnl_lines() {
        let pnl = profit_and_loss(&reference());
        let amounts: Vec<Decimal> = pnl.iter().map(LineItem::signed_amount).collect();
        assert_eq!(
            amounts,
            vec![
                d(10_000_000),
                d(-5_000_000),
                d(-1_000_000),
                d(4_000_000),
                d(-500_000),
                d(-3_000_000),
                d(500_000),
            ]
        );
        let totals: Vec<&str> = pnl.iter().filter(|i| i.is_total()).map(|i| i.label).collect();
        assert_eq!(totals, vec![NET_PROFIT_LABEL]);
    }

    #[test]
    fn cash_flow_matches_net_profit() {
        let f = reference();
        let cf = cash_flow(&f);
        let last = cf.last().unwrap();
        assert_eq!(last.label, NET_CASH_FLOW_LABEL);
        assert!(last.is_total());
        assert_eq!(last.signed_amount(), d(500_000));
        assert_eq!(cf[1].signed_amount(), d(-6_500_000));
        assert_eq!(cf[2].signed_amount(), d(3_500_000));
    }

    #[test]
    fn loss_is_flagged_negative() {
        let f = MonthlyFigures::new(d(10_000), d(8_000), d(0), d(1_000_000), 10, d(0));
        let pnl = profit_and_loss(&f);
        let net = pnl.last().unwrap();
        assert!(net.is_negative);
        assert_eq!(net.amount, d(980_000));
    }

    #[test]
    fn renders_rupiah_text() {
        let text = render_text(&profit_and_loss(&reference()));
        assert!(text.starts_with("Omzet: Rp 10.000.000; HPP (Modal Produk): -Rp 5.000.000"));
        assert!(text.ends_with("Untung Bersih: Rp 500.000"));
    }

    proptest! {
        #[test]
        fn weekly_is_monthly_over_constant(price in 2i64..10_000_000, sales in 1u64..100_000, fixed in 0i64..100_000_000, budget in 0i64..100_000_000, pct in 0i64..=100) {
            let f = MonthlyFigures::new(d(price), d(price / 2), d(pct), d(fixed), sales, d(budget));
            for monthly in [profit_and_loss(&f), cash_flow(&f)] {
                let week = weekly(&monthly);
                prop_assert_eq!(week.len(), monthly.len());
                for (m, w) in monthly.iter().zip(&week) {
                    prop_assert_eq!(w.label, m.label);
                    prop_assert_eq!(w.is_negative, m.is_negative);
                    prop_assert_eq!(w.kind, m.kind);
                    prop_assert_eq!(w.amount, m.amount / WEEKS_PER_MONTH);
                }
            }
        }
    }
}
