//! pity-runner: headless front end for the pity probability engine.
//!
//! Usage:
//!   pity-runner --mode analyze  --banner character --rarity 5
//!   pity-runner --mode simulate --banner weapon --rarity 4 --pulls 100 --pity 1 --iter 10000
//!   pity-runner --mode combined --banner character --pulls 100 --pity-mid 1 --pity-rare 1 --seed 42
//!   pity-runner --ipc-mode [--config data/banners.json]

use anyhow::Result;
use pity_core::{
    config::BannerConfig,
    engine::{
        AnalyticReport, AnalyzeRequest, CombinedRequest, JointReport, PityEngine, SimulateRequest,
        SingleReport,
    },
    stats::SummaryStatistics,
};
use std::env;
use std::io::{self, BufRead, Write};

#[derive(serde::Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum IpcCommand {
    Analyze(AnalyzeRequest),
    Simulate(SimulateRequest),
    Combined(CombinedRequest),
    Quit,
}

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let ipc_mode = args.iter().any(|a| a == "--ipc-mode");

    let config = match optional_arg::<String>(&args, "--config")? {
        Some(path) => BannerConfig::load(&path)?,
        None => BannerConfig::standard(),
    };
    let engine = PityEngine::new(config);

    if ipc_mode {
        return run_ipc_loop(&engine);
    }

    let banner = str_arg(&args, "--banner").unwrap_or("character").to_string();
    let rarity = str_arg(&args, "--rarity").unwrap_or("5").to_string();
    let pulls = parse_arg(&args, "--pulls", 100i64)?;
    let iterations = parse_arg(&args, "--iter", 10_000i64)?;
    let seed = optional_arg::<u64>(&args, "--seed")?;

    match str_arg(&args, "--mode").unwrap_or("analyze") {
        "analyze" => {
            let report = engine.analyze(&AnalyzeRequest { banner, rarity })?;
            print_analysis(&report);
        }
        "simulate" => {
            let req = SimulateRequest {
                banner,
                rarity,
                pulls,
                pity: parse_arg(&args, "--pity", 1i64)?,
                iterations,
                seed,
            };
            print_single(&engine.simulate(&req)?);
        }
        "combined" => {
            let req = CombinedRequest {
                banner,
                pulls,
                pity_mid: parse_arg(&args, "--pity-mid", 1i64)?,
                pity_rare: parse_arg(&args, "--pity-rare", 1i64)?,
                iterations,
                seed,
            };
            print_combined(&engine.simulate_combined(&req)?);
        }
        other => anyhow::bail!("unknown mode '{other}' (expected analyze, simulate or combined)"),
    }

    Ok(())
}

fn run_ipc_loop(engine: &PityEngine) -> Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut handle = stdin.lock();
    let mut buffer = String::new();

    loop {
        buffer.clear();
        let bytes_read = handle.read_line(&mut buffer)?;
        if bytes_read == 0 {
            break; // EOF
        }
        if buffer.trim().is_empty() {
            continue;
        }

        let cmd: IpcCommand = match serde_json::from_str(&buffer) {
            Ok(c) => c,
            Err(e) => {
                log::warn!("Unparseable command: {}", buffer.trim());
                writeln!(stdout, "{}", serde_json::json!({ "error": e.to_string() }))?;
                stdout.flush()?;
                continue;
            }
        };

        let response = match cmd {
            IpcCommand::Quit => break,
            IpcCommand::Analyze(req) => engine.analyze(&req).map(|r| serde_json::to_value(r)),
            IpcCommand::Simulate(req) => engine.simulate(&req).map(|r| serde_json::to_value(r)),
            IpcCommand::Combined(req) => {
                engine.simulate_combined(&req).map(|r| serde_json::to_value(r))
            }
        };

        let line = match response {
            Ok(value) => value?,
            Err(e) => serde_json::json!({ "error": e.to_string() }),
        };
        writeln!(stdout, "{line}")?;
        stdout.flush()?;
    }
    Ok(())
}

fn print_analysis(report: &AnalyticReport) {
    println!("=== {} {} PITY DISTRIBUTION ===", report.banner, report.rarity);
    println!("  hard pity:      {}", report.hard_pity);
    println!("  expected pulls: {:.2}", report.expected_pulls);
    println!("  median pull:    {}", report.median_pull);
    println!();
    println!("  {:>4}  {:>8}  {:>10}  {:>10}", "pull", "rate", "cdf", "exact");
    for (pull, rate) in &report.pmf {
        println!(
            "  {:>4}  {:>8.3}  {:>10.6}  {:>10.6}",
            pull,
            rate,
            report.cdf.get(pull).copied().unwrap_or(1.0),
            report.success_pmf.get(pull).copied().unwrap_or(0.0)
        );
    }
}

fn print_single(single: &SingleReport) {
    let r = &single.report;
    println!("=== {} {} SIMULATION ===", single.banner, single.rarity);
    println!("  pulls:       {}", r.num_pulls);
    println!("  start pity:  {}", r.starting_pity);
    println!("  iterations:  {}", r.iterations);
    println!("  seed:        {}", r.master_seed);
    println!();
    print_summary_header();
    print_summary_row(single.rarity.label(), &r.summary);
    println!();
    println!("  {:>6}  {:>8}  {:>10}", "drops", "count", "share");
    for row in r.table.rows() {
        println!("  {:>6}  {:>8}  {:>9.2}%", row.outcome, row.count, row.proportion * 100.0);
    }
}

fn print_combined(joint: &JointReport) {
    let r = &joint.report;
    println!("=== {} COMBINED SIMULATION ===", joint.banner);
    println!("  pulls:       {}", r.num_pulls);
    println!("  iterations:  {}", r.iterations);
    println!("  seed:        {}", r.master_seed);
    println!();
    print_summary_header();
    print_summary_row("3★", &r.marginals.low);
    print_summary_row("4★", &r.marginals.mid);
    print_summary_row("5★", &r.marginals.rare);
    println!();
    println!("  {:>12}  {:>8}  {:>10}", "3★/4★/5★", "count", "share");
    for row in r.ranked() {
        println!(
            "  {:>12}  {:>8}  {:>9.2}%",
            row.outcome.label(),
            row.count,
            row.proportion * 100.0
        );
    }
}

fn print_summary_header() {
    println!(
        "  {:<6} {:>8} {:>9} {:>9} {:>6} {:>7} {:>7} {:>7} {:>6} {:>6}",
        "tier", "count", "mean", "std", "min", "25%", "50%", "75%", "max", "mode"
    );
}

fn print_summary_row(tier: &str, s: &SummaryStatistics) {
    let std = s.std.map_or_else(|| "-".to_string(), |v| format!("{v:.4}"));
    println!(
        "  {:<6} {:>8} {:>9.4} {:>9} {:>6} {:>7.2} {:>7.2} {:>7.2} {:>6} {:>6}",
        tier, s.count, s.mean, std, s.min, s.p25, s.p50, s.p75, s.max, s.mode
    );
}

fn str_arg<'a>(args: &'a [String], flag: &str) -> Option<&'a str> {
    args.windows(2)
        .find(|w| w[0] == flag)
        .map(|w| w[1].as_str())
}

/// Parse `flag`'s value. A flag given without a usable value is an error,
/// never a silent fallback to the default.
fn optional_arg<T>(args: &[String], flag: &str) -> Result<Option<T>>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    if !args.iter().any(|a| a == flag) {
        return Ok(None);
    }
    let Some(raw) = str_arg(args, flag) else {
        anyhow::bail!("{flag} requires a value");
    };
    raw.parse()
        .map(Some)
        .map_err(|e| anyhow::anyhow!("invalid value '{raw}' for {flag}: {e}"))
}

fn parse_arg<T>(args: &[String], flag: &str, default: T) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    Ok(optional_arg(args, flag)?.unwrap_or(default))
}
