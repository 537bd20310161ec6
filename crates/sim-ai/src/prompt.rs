//! Prompt text for the two narrative requests, in Bahasa Indonesia.

use sim_core::format_rupiah;

use crate::SimulationSummary;

/// Quick market-entry verdict: `{"evaluation", "keyConsiderations"}`.
pub fn market_entry_prompt(s: &SimulationSummary) -> String {
    format!(
        r#"Kamu adalah Business Analyst AI yang paham pasar e-commerce Indonesia. Gaya bicaramu santai, langsung ke inti, dan mudah dipahami pelaku UMKM.

Berikan evaluasi singkat untuk ide bisnis berikut:

Nama Produk: {product}
Target Pasar: {segment}
Persona Bisnis: {persona}. {positioning}
Ringkasan Finansial: {forecast}
Kondisi Pasar Umum: {market}

Aturan:
1. Untung dan ROAS di atas 2.5x: buka `evaluation` dengan kalimat positif yang tegas.
2. Rugi, ROAS di bawah 1.5x, atau BEP tidak tercapai: buka `evaluation` dengan kalimat yang menunjukkan risiko.
3. `keyConsiderations`: 1-2 kalimat tentang SATU poin paling penting (alasan untung, atau penyebab utama rugi).
4. Pakai HANYA data di atas, jangan berasumsi.

Jawab hanya dengan objek JSON valid:
{{"evaluation": "...", "keyConsiderations": "..."}}"#,
        product = s.product_name,
        segment = s.target_segment,
        persona = s.profile.persona,
        positioning = s.profile.analysis,
        forecast = s.financial_forecast(),
        market = s.market_condition,
    )
}

/// Prioritised action plan: `{"recommendations": [..]}` with 3 to 5 items.
pub fn recommendations_prompt(s: &SimulationSummary) -> String {
    format!(
        r#"Kamu adalah Business Strategist AI yang jago memberi saran praktis untuk UMKM Indonesia. Gaya bicaramu santai, memotivasi, dan solutif.

Susun 3-5 Rencana Aksi Prioritas dari data simulasi ini.

Data Bisnis:
- Nama Produk: {product}
- Target Pasar: {segment}
- Strategi Pemasaran Pilihan: {strategies}
- Budget Pemasaran: {budget}

Hasil Simulasi & Peringatan:
- Proyeksi Untung Tahunan: {profit}
- ROAS: {roas}
- Peringatan Logika: {warnings}
- Laporan Untung Rugi Bulanan: {pnl}
- Arus Kas Bulanan: {cash}

Instruksi:
- Jika ada Peringatan Logika (selain "Tidak ada."), rekomendasi PERTAMA harus menjawab peringatan itu.
- Jika Budget Pemasaran nol, jelaskan kenapa hasil bisa kurang akurat dan sarankan alokasi budget.
- Jika untung tahunan negatif, fokus membalikkan keadaan (efisiensi biaya, harga, strategi).
- Jika untung tahunan positif, fokus scale-up (naikkan budget bertahap, tambah kanal, optimasi konversi).
- Sebut nama produk dan kaitkan dengan target pasar bila relevan. Awali setiap poin dengan kata kerja.

Jawab hanya dengan objek JSON valid:
{{"recommendations": ["...", "..."]}}"#,
        product = s.product_name,
        segment = s.target_segment,
        strategies = s.strategies_text(),
        budget = format_rupiah(s.marketing_budget),
        profit = format_rupiah(s.annual_profit),
        roas = s.roas_text(),
        warnings = s.warnings_text(),
        pnl = s.monthly_pnl,
        cash = s.monthly_cash_flow,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::reference_pair;

    #[test]
    fn prompts_carry_the_numbers() {
        let (input, result) = reference_pair();
        let s = SimulationSummary::new(&input, &result);

        let entry = market_entry_prompt(&s);
        assert!(entry.contains("Nama Produk: Keripik Pedas"));
        assert!(entry.contains("Persona Bisnis: Pejuang Volume. Fokus kejar volume penjualan"));
        assert!(entry.contains("ROAS 3.33x"));
        assert!(entry.contains(r#"{"evaluation": "...", "keyConsiderations": "..."}"#));

        let recs = recommendations_prompt(&s);
        assert!(recs.contains("Budget Pemasaran: Rp 3.000.000"));
        assert!(recs.contains("Peringatan Logika: Tidak ada."));
        assert!(recs.contains("Strategi Pemasaran Pilihan: Video Content & Ads"));
    }
}
