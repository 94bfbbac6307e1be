use serde::{Deserialize, Deserializer};

use crate::{QuestionItem, SearchPage};

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum DecodeError {
    #[error("payload is not a search result: {0}")]
    Json(String),
}

#[derive(Debug, Deserialize)]
struct WirePage {
    items: Vec<WireQuestion>,
    quota_max: u32,
}

#[derive(Debug, Deserialize)]
struct WireQuestion {
    #[serde(default)]
    title: String,
    #[serde(default, deserialize_with = "count_as_string")]
    view_count: String,
    #[serde(default, deserialize_with = "count_as_string")]
    score: String,
    #[serde(default)]
    link: String,
}

/// Decode a search payload. A body that is not JSON, or that lacks `items`
/// or `quota_max`, is malformed; unknown fields are ignored.
pub fn decode_search_page(bytes: &[u8]) -> Result<SearchPage, DecodeError> {
    let wire: WirePage =
        serde_json::from_slice(bytes).map_err(|err| DecodeError::Json(err.to_string()))?;
    Ok(SearchPage {
        items: wire
            .items
            .into_iter()
            .map(|question| QuestionItem {
                title: question.title,
                view_count: question.view_count,
                score: question.score,
                link: question.link,
            })
            .collect(),
        quota_max: wire.quota_max,
    })
}

// The live endpoint serves counts as JSON numbers; rows display strings.
fn count_as_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::Error;

    match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::String(text) => Ok(text),
        serde_json::Value::Number(number) => Ok(number.to_string()),
        other => Err(D::Error::custom(format!(
            "expected number or string, got {other}"
        ))),
    }
}
