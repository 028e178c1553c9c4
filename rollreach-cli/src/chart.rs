//! Console rendering of probability curves.

use std::fmt::Write as _;

use colored::Colorize;

use rollreach_engine::compute_cdf;

const BAR_WIDTH: usize = 40;

/// Aggregate probability of exactly reaching each target `1..=max_target`
/// within the roll budget: the last element of the per-target reach sequence,
/// one point per candidate target. This is the curve the interactive plot
/// draws.
#[must_use]
pub fn sweep_curve(dice_sides: u32, max_target: u32, max_rolls: u32) -> Vec<(u32, f64)> {
    (1..=max_target)
        .map(|target| {
            let cdf = compute_cdf(dice_sides, target, max_rolls);
            let reach = cdf.last().copied().unwrap_or(0.0);
            (target, reach)
        })
        .collect()
}

/// Horizontal bar chart of `(label, probability)` points, scaled to the
/// largest value in the series.
#[must_use]
pub fn render_bars(points: &[(u32, f64)], highlight: Option<u32>) -> String {
    let peak = points
        .iter()
        .map(|(_, p)| *p)
        .fold(0.0_f64, f64::max)
        .max(f64::MIN_POSITIVE);

    let mut out = String::new();
    for (label, probability) in points {
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let filled = ((probability / peak) * BAR_WIDTH as f64).round() as usize;
        let width = BAR_WIDTH;
        let bar = "█".repeat(filled.min(width));
        let line = format!("{label:>4} │{bar:<width$}│ {probability:.6}");
        if highlight == Some(*label) {
            let _ = writeln!(out, "{}", line.bright_cyan().bold());
        } else {
            let _ = writeln!(out, "{line}");
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sweep_has_one_point_per_target() {
        let curve = sweep_curve(6, 12, 4);
        assert_eq!(curve.len(), 12);
        assert_eq!(curve[0].0, 1);
        assert_eq!(curve[11].0, 12);
    }

    #[test]
    fn sweep_points_match_direct_cdf_tail() {
        let curve = sweep_curve(6, 8, 3);
        let direct = compute_cdf(6, 8, 3);
        assert!((curve[7].1 - direct[8]).abs() < 1e-12);
    }

    #[test]
    fn bars_render_one_line_per_point() {
        colored::control::set_override(false);
        let rendered = render_bars(&[(1, 0.1), (2, 0.4)], Some(2));
        assert_eq!(rendered.lines().count(), 2);
        assert!(rendered.contains("0.400000"));
    }

    #[test]
    fn empty_series_renders_nothing() {
        assert!(render_bars(&[], None).is_empty());
    }
}
