//! Report rendering in console, JSON, and markdown formats.

use std::fmt::Write as _;

use anyhow::Result;
use colored::Colorize;
use serde::Serialize;

use rollreach_engine::RollParams;

use crate::chart;
use crate::session::{ProbabilitySnapshot, SnapshotDeltas};
use crate::simulation::VerificationReport;

/// Everything one evaluation produced, ready for serialization.
#[derive(Debug, Clone, Serialize)]
pub struct EvaluationReport {
    pub params: RollParams,
    pub probabilities: ProbabilitySnapshot,
    pub deltas: SnapshotDeltas,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub verification: Option<VerificationReport>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sweep: Option<Vec<(u32, f64)>>,
}

pub fn generate_console_report(reports: &[EvaluationReport]) -> String {
    let mut out = String::new();
    let _ = writeln!(out);
    let _ = writeln!(
        out,
        "{}",
        "🎲 Rollreach Probability Report".bright_cyan().bold()
    );
    let _ = writeln!(out, "{}", "===============================".cyan());

    for report in reports {
        let _ = writeln!(out);
        let _ = writeln!(
            out,
            "{}",
            format!(
                "Die: d{}   Target: {}   Max rolls: {}",
                report.params.dice_sides, report.params.target_number, report.params.max_rolls
            )
            .bold()
        );
        let _ = writeln!(
            out,
            "Win:         {} ({})",
            format!("{:.6}", report.probabilities.win).green().bold(),
            format_delta(report.deltas.win)
        );
        let _ = writeln!(
            out,
            "Partial win: {} ({})",
            format!("{:.6}", report.probabilities.partial_win)
                .yellow()
                .bold(),
            format_delta(report.deltas.partial_win)
        );
        let _ = writeln!(
            out,
            "Loss:        {} ({})",
            format!("{:.6}", report.probabilities.loss).red().bold(),
            format_delta(report.deltas.loss)
        );

        if let Some(sweep) = &report.sweep {
            let _ = writeln!(out);
            let _ = writeln!(
                out,
                "{}",
                "📈 Reach probability by target".bright_yellow().bold()
            );
            out.push_str(&chart::render_bars(sweep, Some(report.params.target_number)));
        }

        if let Some(verification) = &report.verification {
            let status = if verification.passed {
                "✅ PASS".green()
            } else {
                "❌ FAIL".red()
            };
            let _ = writeln!(
                out,
                "{} Monte Carlo verification ({} iterations, seed {})",
                status, verification.iterations, verification.seed
            );
            let _ = writeln!(
                out,
                "   observed win {:.4} / partial {:.4} / loss {:.4}",
                verification.observed.win,
                verification.observed.partial_win,
                verification.observed.loss
            );
            let _ = writeln!(
                out,
                "   max deviation {:.4} (tolerance {:.4})",
                verification.max_deviation, verification.tolerance
            );
        }
    }
    out
}

/// # Errors
///
/// Returns an error if the reports cannot be serialized.
pub fn generate_json_report(reports: &[EvaluationReport]) -> Result<String> {
    Ok(serde_json::to_string_pretty(reports)?)
}

pub fn generate_markdown_report(reports: &[EvaluationReport]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "# Rollreach Probability Report");

    for report in reports {
        let _ = writeln!(
            out,
            "\n## d{} die, target {}, up to {} rolls\n",
            report.params.dice_sides, report.params.target_number, report.params.max_rolls
        );
        let _ = writeln!(out, "| Outcome | Probability | Delta |");
        let _ = writeln!(out, "|---------|-------------|-------|");
        let _ = writeln!(
            out,
            "| Win | {:.6} | {} |",
            report.probabilities.win,
            format_delta(report.deltas.win)
        );
        let _ = writeln!(
            out,
            "| Partial win | {:.6} | {} |",
            report.probabilities.partial_win,
            format_delta(report.deltas.partial_win)
        );
        let _ = writeln!(
            out,
            "| Loss | {:.6} | {} |",
            report.probabilities.loss,
            format_delta(report.deltas.loss)
        );

        if let Some(sweep) = &report.sweep {
            let _ = writeln!(out, "\n### Reach probability by target\n");
            let _ = writeln!(out, "| Target | Probability |");
            let _ = writeln!(out, "|--------|-------------|");
            for (target, probability) in sweep {
                let _ = writeln!(out, "| {target} | {probability:.6} |");
            }
        }

        if let Some(verification) = &report.verification {
            let _ = writeln!(out, "\n### Monte Carlo verification\n");
            let _ = writeln!(
                out,
                "- Result: {}",
                if verification.passed { "pass" } else { "fail" }
            );
            let _ = writeln!(
                out,
                "- Iterations: {} (seed {})",
                verification.iterations, verification.seed
            );
            let _ = writeln!(
                out,
                "- Max deviation: {:.4} (tolerance {:.4})",
                verification.max_deviation, verification.tolerance
            );
        }
    }
    out
}

fn format_delta(delta: f64) -> String {
    format!("{delta:+.6}")
}
