//! Deterministic narrator that applies the evaluation rules locally.
//!
//! Used when the model is unavailable or replies with something unusable,
//! and on its own for offline runs.

use rust_decimal::Decimal;
use sim_core::format_rupiah;

use crate::parse::MAX_RECOMMENDATIONS;
use crate::{Narrative, NarrativeError, Narrator, SimulationSummary};

#[derive(Clone, Copy, Debug, Default)]
pub struct RuleBasedNarrator;

impl RuleBasedNarrator {
    pub fn narrate(&self, s: &SimulationSummary) -> Narrative {
        Narrative {
            evaluation: evaluation(s).to_string(),
            key_considerations: key_consideration(s),
            recommendations: recommendations(s),
        }
    }
}

impl Narrator for RuleBasedNarrator {
    fn summarize(&self, summary: &SimulationSummary) -> Result<Narrative, NarrativeError> {
        Ok(self.narrate(summary))
    }
}

fn evaluation(s: &SimulationSummary) -> &'static str {
    if s.is_loss() || s.misses_break_even() || s.has_low_roas() {
        "Wah, strategi kamu masih berisiko."
    } else if s.annual_profit > Decimal::ZERO && s.has_strong_roas() {
        "Strategi kamu terlihat sehat!"
    } else {
        "Lumayan, tapi masih bisa dioptimalkan."
    }
}

fn key_consideration(s: &SimulationSummary) -> String {
    if !s.bep.is_reachable() {
        return "Untung per unit nol atau minus, jadi BEP tidak akan pernah tercapai. Harga jual atau modal produk perlu ditinjau ulang.".to_string();
    }
    if s.misses_break_even() {
        return format!(
            "Penyebab utamanya adalah BEP ({}) yang lebih tinggi dari target penjualan ({} unit), artinya biaya belum tertutup.",
            s.bep,
            sim_core::format_units(s.target_units)
        );
    }
    if !s.has_budget() {
        return "Belum ada budget pemasaran, jadi ROAS 0x dan proyeksi ini hanya mengandalkan penjualan organik.".to_string();
    }
    if s.has_low_roas() {
        return format!(
            "ROAS {} jadi sinyal strategi pemasaran belum efektif menghasilkan omzet.",
            s.roas_text()
        );
    }
    if s.has_strong_roas() {
        let per_million = s.roas * Decimal::from(1_000_000u32);
        return format!(
            "ROAS {} berarti setiap Rp1 juta iklan menghasilkan omzet {}. Ini efisiensi yang bagus.",
            s.roas_text(),
            format_rupiah(per_million)
        );
    }
    format!(
        "Untung masih tipis dengan ROAS {}. Efisiensi iklan jadi kunci untuk menaikkan margin.",
        s.roas_text()
    )
}

fn recommendations(s: &SimulationSummary) -> Vec<String> {
    let product = &s.product_name;
    let mut recs = Vec::new();

    if !s.bep.is_reachable() {
        recs.push(format!(
            "Naikkan harga jual '{product}' atau tekan HPP dan biaya lain-lain supaya untung per unit kembali positif."
        ));
    } else if s.misses_break_even() {
        recs.push(format!(
            "Turunkan BEP '{product}' dengan memangkas biaya tetap, atau kejar penjualan minimal {} per bulan.",
            s.bep
        ));
    }
    if s.has_budget() && s.has_low_roas() {
        recs.push(format!(
            "Evaluasi ulang materi iklan: hentikan yang konversinya rendah dan alihkan budget ke kanal yang paling efektif untuk '{}'.",
            s.target_segment
        ));
    }
    if !s.has_budget() {
        recs.push(
            "Alokasikan budget pemasaran walau kecil, karena tanpa iklan angka penjualan di simulasi ini cenderung terlalu optimis."
                .to_string(),
        );
    }

    if s.is_loss() {
        recs.push(
            "Cek ulang struktur biaya: negosiasikan harga bahan baku dan pangkas biaya tetap yang tidak menghasilkan penjualan."
                .to_string(),
        );
        recs.push(format!(
            "Uji kenaikan harga '{product}' bertahap 5-10% sambil perkuat nilai produk lewat kemasan dan bundling."
        ));
    } else {
        if s.has_budget() {
            recs.push(
                "Naikkan budget iklan bertahap 10-20% per bulan sambil memantau ROAS tetap di atas 2.5x."
                    .to_string(),
            );
        }
        if let Some(next) = s.inactive_channels().first() {
            recs.push(format!(
                "Coba kanal {} dengan porsi budget kecil untuk memperluas jangkauan.",
                next.info().title
            ));
        }
        recs.push(format!(
            "Optimalkan konversi toko '{product}': foto produk, ulasan pembeli, dan promo bundling."
        ));
    }

    recs.push(format!(
        "Karena target kamu '{}', fokuskan konten di platform yang paling sering mereka pakai. {}",
        s.target_segment, s.profile.platforms
    ));

    recs.truncate(MAX_RECOMMENDATIONS);
    recs
}
