use serde::{Deserialize, Deserializer};
use std::io::Read;

#[derive(Debug)]
pub(crate) struct LawyerRow {
    pub(crate) line: u64,
    pub(crate) fields: RawLawyer,
}

pub(crate) fn parse_rows<R: Read>(reader: R) -> Result<Vec<LawyerRow>, csv::Error> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let headers = csv_reader.headers()?.clone();
    let mut rows = Vec::new();

    for record in csv_reader.records() {
        let record = record?;
        let line = record.position().map_or(0, |position| position.line());
        let fields: RawLawyer = record.deserialize(Some(&headers))?;
        rows.push(LawyerRow { line, fields });
    }

    Ok(rows)
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawLawyer {
    #[serde(rename = "Name")]
    pub(crate) name: String,
    #[serde(rename = "Firm", default, deserialize_with = "empty_string_as_none")]
    pub(crate) firm: Option<String>,
    #[serde(rename = "Specialties", default)]
    pub(crate) specialties: String,
    #[serde(rename = "Phone")]
    pub(crate) phone: String,
    #[serde(rename = "Email", default, deserialize_with = "empty_string_as_none")]
    pub(crate) email: Option<String>,
    #[serde(rename = "Address", default, deserialize_with = "empty_string_as_none")]
    pub(crate) address: Option<String>,
    #[serde(rename = "Website", default, deserialize_with = "empty_string_as_none")]
    pub(crate) website: Option<String>,
    #[serde(rename = "Rating", default, deserialize_with = "empty_string_as_none")]
    pub(crate) rating: Option<String>,
    #[serde(
        rename = "Review Count",
        default,
        deserialize_with = "empty_string_as_none"
    )]
    pub(crate) review_count: Option<String>,
    #[serde(
        rename = "Accepts Legal Aid",
        default,
        deserialize_with = "empty_string_as_none"
    )]
    pub(crate) accepts_legal_aid: Option<String>,
    #[serde(rename = "Languages", default)]
    pub(crate) languages: String,
    #[serde(
        rename = "Years of Experience",
        default,
        deserialize_with = "empty_string_as_none"
    )]
    pub(crate) years_of_experience: Option<String>,
}

fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt.filter(|value| !value.trim().is_empty()))
}

/// Split a `;`-separated cell into trimmed, non-empty entries.
pub(crate) fn split_list(value: &str) -> Vec<String> {
    value
        .split(';')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(str::to_string)
        .collect()
}

pub(crate) fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "yes" | "y" | "1" => Some(true),
        "false" | "no" | "n" | "0" => Some(false),
        _ => None,
    }
}
