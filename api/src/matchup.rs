//! Home/away inference from the provider's matchup label.
//!
//! Labels read `"<home> @ <away>"`. The contract is strict: exactly one `@`,
//! nothing else is accepted. A `"BOS vs. GSW"` label is an error, not a
//! guessed side.

use crate::{Side, StatsError, StatsResult};

/// Split a label into its trimmed home and away tokens.
pub fn split_matchup(matchup: &str) -> StatsResult<(&str, &str)> {
    let mut parts = matchup.split('@');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(home), Some(away), None) => Ok((home.trim(), away.trim())),
        _ => Err(StatsError::MalformedMatchup {
            matchup: matchup.to_owned(),
        }),
    }
}

/// Which side `team_name` plays on in `matchup`.
///
/// `Ok(None)` when the label is well formed but names neither token, or the
/// row carries no team name. Home wins if both tokens are the same.
pub fn resolve_side(team_name: Option<&str>, matchup: &str) -> StatsResult<Option<Side>> {
    let (home, away) = split_matchup(matchup)?;
    let Some(name) = team_name else {
        return Ok(None);
    };

    let side = if name == home {
        Some(Side::Home)
    } else if name == away {
        Some(Side::Away)
    } else {
        None
    };
    Ok(side)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn left_token_is_home() {
        assert_eq!(resolve_side(Some("LAL"), "LAL @ BOS").unwrap(), Some(Side::Home));
    }

    #[test]
    fn right_token_is_away() {
        assert_eq!(resolve_side(Some("BOS"), "LAL @ BOS").unwrap(), Some(Side::Away));
    }

    #[test]
    fn tokens_are_trimmed_before_comparison() {
        assert_eq!(split_matchup("  LAL   @BOS  ").unwrap(), ("LAL", "BOS"));
        assert_eq!(resolve_side(Some("BOS"), "LAL@   BOS ").unwrap(), Some(Side::Away));
    }

    #[test]
    fn unknown_team_resolves_to_no_side() {
        assert_eq!(resolve_side(Some("MIA"), "LAL @ BOS").unwrap(), None);
        assert_eq!(resolve_side(None, "LAL @ BOS").unwrap(), None);
    }

    #[test]
    fn versus_label_is_malformed() {
        let err = resolve_side(Some("BOS"), "BOS vs. GSW").unwrap_err();
        assert!(matches!(err, StatsError::MalformedMatchup { ref matchup } if matchup == "BOS vs. GSW"));
    }

    #[test]
    fn more_than_one_separator_is_malformed() {
        assert!(split_matchup("LAL @ BOS @ MIA").is_err());
        assert!(split_matchup("").is_err());
    }

    #[test]
    fn malformed_label_fails_even_without_team_name() {
        assert!(resolve_side(None, "BOS vs. GSW").is_err());
    }
}
