#![deny(warnings)]

//! Headless CLI: run a seller business simulation from a YAML scenario and
//! print the projection, tables, warnings and narrative.

use anyhow::{Context, Result};
use sim_ai::{
    narrate_with_fallback, prompt, NarrativeError, NarrativeOutcome, NarrativeSource,
    PromptNarrator, RuleBasedNarrator, SimulationSummary,
};
use sim_core::{format_rupiah, SimulationInput};
use sim_econ::{compute_simulation, LineItem, SimulationResult};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::EnvFilter;

const DEMO_SCENARIO: &str = include_str!("../../../assets/scenarios/keripik-pedas.yaml");

#[derive(Debug, Default)]
struct Args {
    scenario: Option<PathBuf>,
    model_reply: Option<PathBuf>,
    json: bool,
    prompt: bool,
    version: bool,
}

fn parse_args() -> Args {
    let mut args = Args::default();
    let mut it = std::env::args().skip(1);
    while let Some(arg) = it.next() {
        match arg.as_str() {
            "--scenario" => args.scenario = it.next().map(PathBuf::from),
            "--model-reply" => args.model_reply = it.next().map(PathBuf::from),
            "--json" => args.json = true,
            "--prompt" => args.prompt = true,
            "--version" => args.version = true,
            _ => {}
        }
    }
    args
}

fn load_input(path: Option<&Path>) -> Result<SimulationInput> {
    let text = match path {
        Some(p) => fs::read_to_string(p)
            .with_context(|| format!("reading scenario {}", p.display()))?,
        None => DEMO_SCENARIO.to_string(),
    };
    serde_yaml::from_str(&text).context("parsing scenario YAML")
}

/// Narrate with a recorded model reply when one is given, otherwise locally.
fn narrate(summary: &SimulationSummary, model_reply: Option<&Path>) -> Result<NarrativeOutcome> {
    let Some(path) = model_reply else {
        return Ok(narrate_with_fallback(&RuleBasedNarrator, summary));
    };
    let reply = fs::read_to_string(path)
        .with_context(|| format!("reading model reply {}", path.display()))?;
    let narrator =
        PromptNarrator::new(move |_: &str| -> Result<String, NarrativeError> { Ok(reply.clone()) });
    Ok(narrate_with_fallback(&narrator, summary))
}

fn print_table(title: &str, items: &[LineItem]) {
    println!("{title}");
    for item in items {
        let marker = if item.is_total() { "=" } else { " " };
        println!(
            "  {marker} {:<26} {:>20}",
            item.label,
            format_rupiah(item.signed_amount())
        );
    }
}

fn print_report(input: &SimulationInput, result: &SimulationResult, outcome: &NarrativeOutcome) {
    let profile = input.business_model.profile();
    println!("== {} | {}", input.product_name, input.target_segment);
    println!("Persona: {} | {}", profile.persona, profile.platforms);
    println!("  {}", profile.analysis);
    println!();
    println!(
        "Untung/unit (tanpa pemasaran): {} | BEP: {} | Budget pemasaran: {}",
        format_rupiah(result.profit_per_unit_excluding_marketing),
        result.bep,
        format_rupiah(result.resolved_budget)
    );
    println!(
        "Omzet tahunan: {} | Profit tahunan: {} | ROAS: {}x",
        format_rupiah(result.annual_revenue),
        format_rupiah(result.annual_profit),
        result.roas.round_dp(2)
    );

    if input.has_marketing() {
        println!();
        println!("Alokasi budget");
        for (channel, amount) in &result.allocations {
            if input.active_channels.contains(channel) {
                let info = channel.info();
                println!("  {:<26} {:>20}", info.title, format_rupiah(*amount));
                println!("    {}", info.description);
            }
        }
    }

    println!();
    print_table("Laporan Untung Rugi (bulanan)", &result.pnl_monthly);
    print_table("Laporan Untung Rugi (mingguan)", &result.pnl_weekly);
    println!();
    print_table("Simulasi Arus Kas (bulanan)", &result.cashflow_monthly);
    print_table("Simulasi Arus Kas (mingguan)", &result.cashflow_weekly);

    if !result.warnings.is_empty() {
        println!();
        println!("Peringatan");
        for w in &result.warnings {
            println!("  ! {w}");
        }
    }

    println!();
    if let NarrativeSource::Fallback { reason } = &outcome.source {
        println!("(analisis AI tidak tersedia: {reason}; memakai analisis bawaan)");
    }
    println!("{}", outcome.narrative.evaluation);
    println!("{}", outcome.narrative.key_considerations);
    for (i, rec) in outcome.narrative.recommendations.iter().enumerate() {
        println!("  {}. {rec}", i + 1);
    }
}

fn main() -> Result<()> {
    // Logs go to stderr so --json output stays clean.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let args = parse_args();
    if args.version {
        println!(
            "{} {} ({}, {})",
            env!("CARGO_PKG_NAME"),
            env!("CARGO_PKG_VERSION"),
            env!("GIT_SHA"),
            env!("BUILD_DATE")
        );
        return Ok(());
    }
    info!(scenario = ?args.scenario, model_reply = ?args.model_reply, "starting simulation");

    let input = load_input(args.scenario.as_deref())?;
    let result = compute_simulation(&input).context("simulation rejected")?;
    let summary = SimulationSummary::new(&input, &result);
    info!(
        warnings = result.warnings.len(),
        profitable = result.is_profitable(),
        "simulation complete"
    );

    if args.prompt {
        println!("{}", prompt::market_entry_prompt(&summary));
        println!();
        println!("{}", prompt::recommendations_prompt(&summary));
        return Ok(());
    }

    let outcome = narrate(&summary, args.model_reply.as_deref())?;
    if args.json {
        let doc = serde_json::json!({
            "input": input,
            "result": result,
            "narrative": outcome,
        });
        println!("{}", serde_json::to_string_pretty(&doc)?);
    } else {
        print_report(&input, &result, &outcome);
    }
    Ok(())
}
