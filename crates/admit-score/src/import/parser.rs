use serde::{Deserialize, Deserializer};
use std::io::Read;

use super::ProfileImportError;
use crate::scoring::ProfileDraft;

pub(crate) fn parse_drafts<R: Read>(reader: R) -> Result<Vec<ProfileDraft>, ProfileImportError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let mut drafts = Vec::new();

    for (index, record) in csv_reader.deserialize::<ProfileRow>().enumerate() {
        let row = record?;
        // header is line 1
        drafts.push(row.into_draft(index + 2)?);
    }

    Ok(drafts)
}

#[derive(Debug, Deserialize)]
struct ProfileRow {
    gpa: Option<f64>,
    sat: Option<u32>,
    act: Option<u32>,
    ap_offered: Option<u32>,
    ap_taken: Option<u32>,
    ec_tier: Option<u32>,
    roles: Option<u32>,
    major_multiplier: Option<f64>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    is_ed: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    is_athlete: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    is_legacy: Option<String>,
}

impl ProfileRow {
    fn into_draft(self, line: usize) -> Result<ProfileDraft, ProfileImportError> {
        Ok(ProfileDraft {
            gpa: self.gpa,
            sat: self.sat,
            act: self.act,
            ap_offered: self.ap_offered,
            ap_taken: self.ap_taken,
            ec_tier: self.ec_tier,
            roles: self.roles,
            major_multiplier: self.major_multiplier,
            is_ed: parse_flag(self.is_ed, line, "is_ed")?,
            is_athlete: parse_flag(self.is_athlete, line, "is_athlete")?,
            is_legacy: parse_flag(self.is_legacy, line, "is_legacy")?,
        })
    }
}

fn parse_flag(
    value: Option<String>,
    line: usize,
    column: &'static str,
) -> Result<Option<bool>, ProfileImportError> {
    let Some(value) = value else {
        return Ok(None);
    };

    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "yes" | "y" | "1" => Ok(Some(true)),
        "false" | "no" | "n" | "0" => Ok(Some(false)),
        _ => Err(ProfileImportError::InvalidBoolean {
            line,
            column,
            value,
        }),
    }
}

fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt.filter(|value| !value.trim().is_empty()))
}
