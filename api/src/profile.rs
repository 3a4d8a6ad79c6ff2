use crate::client::ApiError;
use crate::stats::ResultSet;
use crate::{DraftInfo, PlayerSummary, StatsError, StatsResult};
use log::debug;

/// Map a common player info result set onto the stable player summary.
///
/// The lookup is by id, so at most one row is expected. An empty set means
/// the provider does not know the player.
pub fn normalize_profile(player_id: &str, set: &ResultSet) -> StatsResult<PlayerSummary> {
    let Some(row) = set.first_row() else {
        return Err(StatsError::PlayerNotFound {
            player_id: player_id.to_owned(),
        });
    };
    if set.len() > 1 {
        debug!("player {player_id}: {} profile rows, using the first", set.len());
    }

    let id = row
        .unsigned("PERSON_ID")
        .ok_or_else(|| ApiError::Other(format!("profile for {player_id} has no PERSON_ID")))?;

    Ok(PlayerSummary {
        id,
        first_name: row.text("FIRST_NAME"),
        last_name: row.text("LAST_NAME"),
        team_id: row.unsigned("TEAM_ID"),
        team_name: row.text("TEAM_NAME"),
        jersey: row.text("JERSEY"),
        position: row.text("POSITION"),
        height: row.text("HEIGHT"),
        weight: row.text("WEIGHT"),
        birthdate: row.text("BIRTHDATE"),
        experience: row.unsigned("SEASON_EXP").and_then(|n| u32::try_from(n).ok()),
        country: row.text("COUNTRY"),
        last_affiliation: row.text("LAST_AFFILIATION"),
        draft: DraftInfo {
            year: row.text("DRAFT_YEAR"),
            round: row.text("DRAFT_ROUND"),
            number: row.text("DRAFT_NUMBER"),
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{Value, json};

    const HEADERS: [&str; 16] = [
        "PERSON_ID",
        "FIRST_NAME",
        "LAST_NAME",
        "BIRTHDATE",
        "COUNTRY",
        "LAST_AFFILIATION",
        "HEIGHT",
        "WEIGHT",
        "SEASON_EXP",
        "JERSEY",
        "POSITION",
        "TEAM_ID",
        "TEAM_NAME",
        "DRAFT_YEAR",
        "DRAFT_ROUND",
        "DRAFT_NUMBER",
    ];

    fn lebron() -> Vec<Value> {
        vec![
            json!(2544),
            json!("LeBron"),
            json!("James"),
            json!("1984-12-30T00:00:00"),
            json!("USA"),
            json!("St. Vincent-St. Mary HS (OH)/USA"),
            json!("6-9"),
            json!("250"),
            json!(21),
            json!("23"),
            json!("Forward"),
            json!(1610612747),
            json!("Lakers"),
            json!("2003"),
            json!("1"),
            json!("1"),
        ]
    }

    #[test]
    fn empty_result_is_player_not_found() {
        let set = ResultSet::new(&HEADERS, vec![]);
        let err = normalize_profile("999", &set).unwrap_err();
        assert!(matches!(err, StatsError::PlayerNotFound { ref player_id } if player_id == "999"));
    }

    #[test]
    fn single_row_populates_every_field() {
        let set = ResultSet::new(&HEADERS, vec![lebron()]);
        let p = normalize_profile("2544", &set).unwrap();

        assert_eq!(p.id, 2544);
        assert_eq!(p.first_name.as_deref(), Some("LeBron"));
        assert_eq!(p.last_name.as_deref(), Some("James"));
        assert_eq!(p.team_id, Some(1610612747));
        assert_eq!(p.team_name.as_deref(), Some("Lakers"));
        assert_eq!(p.jersey.as_deref(), Some("23"));
        assert_eq!(p.position.as_deref(), Some("Forward"));
        assert_eq!(p.height.as_deref(), Some("6-9"));
        assert_eq!(p.weight.as_deref(), Some("250"));
        assert_eq!(p.birthdate.as_deref(), Some("1984-12-30T00:00:00"));
        assert_eq!(p.experience, Some(21));
        assert_eq!(p.country.as_deref(), Some("USA"));
        assert_eq!(p.last_affiliation.as_deref(), Some("St. Vincent-St. Mary HS (OH)/USA"));
        assert_eq!(
            p.draft,
            DraftInfo {
                year: Some("2003".into()),
                round: Some("1".into()),
                number: Some("1".into()),
            }
        );
    }

    #[test]
    fn summary_serializes_nested_draft() {
        let set = ResultSet::new(&HEADERS, vec![lebron()]);
        let json = serde_json::to_value(normalize_profile("2544", &set).unwrap()).unwrap();
        assert_eq!(json["firstName"], "LeBron");
        assert_eq!(json["lastAffiliation"], "St. Vincent-St. Mary HS (OH)/USA");
        assert_eq!(json["draft"], json!({ "year": "2003", "round": "1", "number": "1" }));
    }

    #[test]
    fn undrafted_and_null_columns_survive() {
        let mut row = lebron();
        row[13] = json!("Undrafted");
        row[14] = Value::Null;
        row[15] = Value::Null;
        row[9] = Value::Null;
        let set = ResultSet::new(&HEADERS, vec![row]);
        let p = normalize_profile("2544", &set).unwrap();
        assert_eq!(p.draft.year.as_deref(), Some("Undrafted"));
        assert_eq!(p.draft.round, None);
        assert_eq!(p.jersey, None);
    }

    #[test]
    fn extra_rows_fall_back_to_the_first() {
        let mut second = lebron();
        second[0] = json!(1);
        let set = ResultSet::new(&HEADERS, vec![lebron(), second]);
        assert_eq!(normalize_profile("2544", &set).unwrap().id, 2544);
    }

    #[test]
    fn row_without_person_id_is_upstream_error() {
        let set = ResultSet::new(&["FIRST_NAME"], vec![vec![json!("LeBron")]]);
        assert!(matches!(normalize_profile("2544", &set), Err(StatsError::Upstream(_))));
    }
}
