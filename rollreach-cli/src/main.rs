mod chart;
mod report;
mod session;
mod simulation;
mod util;

use std::fs::File;
use std::io::{BufWriter, Write, stdout};
use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::Parser;

use rollreach_engine::{CalculatorConfig, RollParams, TailCache, compute_tail};

use report::EvaluationReport;
use session::{ProbabilitySnapshot, SessionTracker};
use simulation::run_verification;
use util::parse_targets;

#[derive(Debug, Parser)]
#[command(name = "rollreach", version = "0.1.0")]
#[command(about = "Dice-sum target probability calculator - exact DP results with optional Monte Carlo verification")]
struct Args {
    /// Number of sides on the die (supported: 4, 6, 8, 10, 12, 20)
    #[arg(long)]
    sides: Option<u32>,

    /// Target sums to evaluate in sequence (comma-separated)
    #[arg(long, default_value = "")]
    targets: String,

    /// Maximum number of rolls
    #[arg(long)]
    rolls: Option<u32>,

    /// Output report format
    #[arg(long, default_value = "console")]
    #[arg(value_parser = ["json", "markdown", "console"])]
    report: String,

    /// Chart the reach probability for every target up to the requested one
    #[arg(long)]
    sweep: bool,

    /// Cross-check each DP result against seeded Monte Carlo simulation
    #[arg(long)]
    verify: bool,

    /// Monte Carlo iterations (verify mode)
    #[arg(long, default_value_t = simulation::DEFAULT_ITERATIONS)]
    iterations: u32,

    /// Monte Carlo seed (verify mode)
    #[arg(long, default_value_t = 1337)]
    seed: u64,

    /// Optional path to write the report output instead of stdout
    #[arg(long)]
    output: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let config = CalculatorConfig::load_from_static();
    let defaults = config.default_params();
    let dice_sides = args.sides.unwrap_or(defaults.dice_sides);
    let max_rolls = args.rolls.unwrap_or(defaults.max_rolls);
    let targets = parse_targets(&args.targets, defaults.target_number)?;

    // One die configuration per invocation, so the unkeyed cache dimension
    // (the tail cache ignores dice_sides) cannot bite here.
    let mut cache = TailCache::new();
    let mut tracker = SessionTracker::new();
    let mut reports = Vec::with_capacity(targets.len());
    for target in targets {
        let params = RollParams::new(dice_sides, target, max_rolls);
        params
            .validate_against(&config)
            .with_context(|| format!("invalid parameters {params:?}"))?;
        if args.verbose {
            log::info!("evaluating d{dice_sides} target {target} over {max_rolls} rolls");
        }
        reports.push(evaluate(&args, params, &mut cache, &mut tracker));
    }

    let rendered = render(&args, &reports)?;
    write_output(args.output.as_deref(), &rendered)?;

    let failed: Vec<_> = reports
        .iter()
        .filter_map(|r| r.verification.as_ref())
        .filter(|v| !v.passed)
        .collect();
    if let Some(worst) = failed.first() {
        bail!(
            "Monte Carlo verification failed: max deviation {:.4} exceeds tolerance {:.4}",
            worst.max_deviation,
            worst.tolerance
        );
    }
    Ok(())
}

fn evaluate(
    args: &Args,
    params: RollParams,
    cache: &mut TailCache,
    tracker: &mut SessionTracker,
) -> EvaluationReport {
    let outcome = compute_tail(
        cache,
        params.dice_sides,
        params.target_number,
        params.max_rolls,
    );
    let probabilities = ProbabilitySnapshot::from_outcome(outcome);
    let deltas = tracker.observe(probabilities);

    let sweep = args
        .sweep
        .then(|| chart::sweep_curve(params.dice_sides, params.target_number, params.max_rolls));

    let verification = args
        .verify
        .then(|| run_verification(params, probabilities, args.iterations, args.seed));

    EvaluationReport {
        params,
        probabilities,
        deltas,
        verification,
        sweep,
    }
}

fn render(args: &Args, reports: &[EvaluationReport]) -> Result<String> {
    match args.report.as_str() {
        "json" => report::generate_json_report(reports),
        "markdown" => Ok(report::generate_markdown_report(reports)),
        _ => Ok(report::generate_console_report(reports)),
    }
}

fn write_output(path: Option<&std::path::Path>, rendered: &str) -> Result<()> {
    match path {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("creating report file {}", path.display()))?;
            let mut writer = BufWriter::new(file);
            writer.write_all(rendered.as_bytes())?;
            writer.flush()?;
        }
        None => {
            stdout().write_all(rendered.as_bytes())?;
        }
    }
    Ok(())
}
