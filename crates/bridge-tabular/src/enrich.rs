use crate::error::{EnrichError, SchemaError, UnsupportedMovement};
use crate::record_set::RecordSet;
use serde_json::{Map, Value};

/// Column that must be present for a scores payload to be usable at all.
pub const BOARD_COLUMN: &str = "board_id";
/// Flattened lineup columns carrying each partnership's seating.
pub const HOME_ORIENTATION_COLUMN: &str = "lineup_segment_game_homeTeam_orientation";
pub const AWAY_ORIENTATION_COLUMN: &str = "lineup_segment_game_awayTeam_orientation";

/// Caller-supplied identifiers broadcast onto every score row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionKeys {
    pub group_id: u32,
    pub session_id: u32,
    pub team_id: u32,
}

/// Rejects score sets that do not describe a Mitchell movement: one
/// partnership fixed NS and the other fixed EW on every row.
pub fn validate_movement(scores: &RecordSet) -> Result<(), EnrichError> {
    if !scores.has_column(BOARD_COLUMN) {
        return Err(SchemaError::MissingColumn(BOARD_COLUMN.to_string()).into());
    }
    expect_orientation(scores, HOME_ORIENTATION_COLUMN, "NS")?;
    expect_orientation(scores, AWAY_ORIENTATION_COLUMN, "EW")?;
    Ok(())
}

fn expect_orientation(
    scores: &RecordSet,
    column: &'static str,
    expected: &'static str,
) -> Result<(), EnrichError> {
    let values = scores
        .column(column)
        .ok_or_else(|| SchemaError::MissingColumn(column.to_string()))?;
    for value in values {
        if value.as_str() != Some(expected) {
            return Err(UnsupportedMovement {
                column,
                found: value.to_string(),
                expected,
            }
            .into());
        }
    }
    Ok(())
}

/// Joins a validated scores set with its team record: broadcasts the session
/// identifiers and the roster fields read from the team record's first row
/// onto every score row, then moves the identifier columns to the front.
pub fn enrich_scores(
    mut scores: RecordSet,
    team: &RecordSet,
    keys: &SessionKeys,
) -> Result<RecordSet, EnrichError> {
    validate_movement(&scores)?;

    scores.push_broadcast("group_id", Value::from(keys.group_id));
    scores.push_broadcast("session_id", Value::from(keys.session_id));
    scores.push_broadcast("team_id", Value::from(keys.team_id));

    let mut pair = Map::new();
    pair.insert("team_id".to_string(), Value::from(keys.team_id));
    pair.insert("session_id".to_string(), Value::from(keys.session_id));
    scores.push_broadcast("team_session_id", Value::Object(pair));

    scores.push_broadcast("orientation", team_text(team, "orientation")?);
    scores.push_broadcast("player1_id", team_u32(team, "player1_id")?);
    scores.push_broadcast("player1_firstName", team_text(team, "player1_firstName")?);
    scores.push_broadcast("player1_lastName", team_text(team, "player1_lastName")?);
    scores.push_broadcast("player2_id", team_u32(team, "player2_id")?);
    scores.push_broadcast("player2_firstName", team_text(team, "player2_firstName")?);
    scores.push_broadcast("player2_lastName", team_text(team, "player2_lastName")?);
    // awayGames, homeGames, player3..player8 and rankings are not carried
    // over until a downstream query needs them.
    scores.push_broadcast("section", team_text(team, "section")?);
    scores.push_broadcast("startTableNumber", team_u16(team, "startTableNumber")?);

    scores.lead_with(&["group_id", "team_session_id", "session_id", "team_id"]);
    Ok(scores)
}

fn team_value<'a>(team: &'a RecordSet, column: &str) -> Result<&'a Value, SchemaError> {
    if !team.has_column(column) {
        return Err(SchemaError::MissingColumn(column.to_string()));
    }
    team.first(column)
        .ok_or_else(|| SchemaError::NoRows(column.to_string()))
}

fn team_text(team: &RecordSet, column: &str) -> Result<Value, EnrichError> {
    let value = team_value(team, column)?;
    Ok(match value {
        Value::Null => Value::Null,
        Value::String(_) => value.clone(),
        other => Value::String(other.to_string()),
    })
}

fn team_u32(team: &RecordSet, column: &str) -> Result<Value, EnrichError> {
    cast_unsigned(team_value(team, column)?, column, u64::from(u32::MAX), "u32")
}

fn team_u16(team: &RecordSet, column: &str) -> Result<Value, EnrichError> {
    cast_unsigned(team_value(team, column)?, column, u64::from(u16::MAX), "u16")
}

fn cast_unsigned(
    value: &Value,
    column: &str,
    max: u64,
    target: &'static str,
) -> Result<Value, EnrichError> {
    // Nulls pass through untouched, like every other cast here.
    if value.is_null() {
        return Ok(Value::Null);
    }
    match value.as_u64() {
        Some(n) if n <= max => Ok(Value::from(n)),
        _ => Err(SchemaError::InvalidValue {
            column: column.to_string(),
            value: value.to_string(),
            target,
        }
        .into()),
    }
}
