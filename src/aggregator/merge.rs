use crate::model::MergedRecord;
use serde::Serialize;
use serde_json::Value;

pub const TEAM_FIELD: &str = "team";

/// Serializes a source record into a flat JSON object. Non-finite floats become `null`.
pub fn to_record<T: Serialize>(record: &T) -> Result<MergedRecord, serde_json::Error> {
    Ok(match serde_json::to_value(record)? {
        Value::Object(map) => map,
        _ => MergedRecord::new(),
    })
}

/// Folds every record belonging to each team into one object, in `teams` order.
///
/// Later records overwrite same-named fields. A team with no records still gets an
/// entry holding only its `team` field.
pub fn merge_records(teams: &[String], records: &[MergedRecord]) -> Vec<MergedRecord> {
    teams
        .iter()
        .map(|team| {
            let mut merged = MergedRecord::new();
            merged.insert(TEAM_FIELD.to_string(), Value::String(team.clone()));

            records
                .iter()
                .filter(|record| record.get(TEAM_FIELD).and_then(Value::as_str) == Some(team))
                .fold(merged, |mut acc, record| {
                    acc.extend(record.iter().map(|(k, v)| (k.clone(), v.clone())));
                    acc
                })
        })
        .collect()
}
