//! Small parsing helpers shared by the CLI surface.

use anyhow::{Context, Result};

pub fn split_csv(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(ToOwned::to_owned)
        .collect()
}

/// Parse a comma-separated target list, falling back to `default_target`
/// when the list is empty.
///
/// # Errors
///
/// Returns an error for tokens that are not non-negative integers.
pub fn parse_targets(input: &str, default_target: u32) -> Result<Vec<u32>> {
    let tokens = split_csv(input);
    if tokens.is_empty() {
        return Ok(vec![default_target]);
    }
    tokens
        .iter()
        .map(|token| {
            token
                .parse::<u32>()
                .with_context(|| format!("invalid target '{token}'"))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_csv_trims_and_drops_empties() {
        assert_eq!(split_csv(" 20, 25 ,,30 "), vec!["20", "25", "30"]);
        assert!(split_csv("").is_empty());
    }

    #[test]
    fn empty_target_list_falls_back_to_default() {
        assert_eq!(parse_targets("", 25).expect("parse"), vec![25]);
    }

    #[test]
    fn bad_tokens_are_rejected() {
        assert!(parse_targets("20,abc", 25).is_err());
        assert!(parse_targets("-3", 25).is_err());
    }
}
