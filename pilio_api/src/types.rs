//! Response types for the pilio JSON history endpoint.

use serde::{Deserialize, Deserializer, Serialize};

/// Envelope returned by `Json_ltonew.asp`: `{"lotto": [...]}`.
///
/// A missing or empty `lotto` array means there is no more history to page
/// through.
#[derive(Serialize, Deserialize)]
pub struct HistoryResponse {
    #[serde(default)]
    pub lotto: Vec<HistoryItem>,
}

/// One raw history entry as served by the endpoint.
///
/// The endpoint is loosely typed: `dex` usually arrives as a JSON number but
/// sometimes as a numeric string, and `sp` is a string that may not be
/// numeric at all. Both are normalized here so callers see one shape.
#[derive(Serialize, Deserialize)]
pub struct HistoryItem {
    /// Draw date, `"MM/DD<br>YY(weekday)"`.
    #[serde(default)]
    pub date: String,
    /// Comma-separated draw numbers.
    #[serde(default)]
    pub num: String,
    /// Special/bonus number as printed, possibly empty or non-numeric.
    #[serde(default, deserialize_with = "loose_string")]
    pub sp: String,
    /// Pagination cursor for the request that would follow this entry.
    #[serde(default, deserialize_with = "loose_index")]
    pub dex: Option<i64>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum NumberOrString {
    Number(i64),
    Text(String),
}

fn loose_index<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<NumberOrString>::deserialize(deserializer)?;
    Ok(match value {
        Some(NumberOrString::Number(n)) => Some(n),
        Some(NumberOrString::Text(s)) => s.trim().parse().ok(),
        None => None,
    })
}

fn loose_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<NumberOrString>::deserialize(deserializer)?;
    Ok(match value {
        Some(NumberOrString::Number(n)) => n.to_string(),
        Some(NumberOrString::Text(s)) => s,
        None => String::new(),
    })
}
