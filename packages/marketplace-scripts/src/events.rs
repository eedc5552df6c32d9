//! NEP-297 event extraction from transaction logs.

use serde::Deserialize;
use serde_json::Value;

pub const EVENT_JSON_PREFIX: &str = "EVENT_JSON:";

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct EventLog {
    pub standard: String,
    pub version: String,
    pub event: String,
    #[serde(default)]
    pub data: Vec<Value>,
}

/// Parses every `EVENT_JSON:` line; other logs and malformed payloads are skipped.
pub fn parse_events<I, S>(logs: I) -> Vec<EventLog>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    logs.into_iter()
        .filter_map(|log| {
            let payload = log.as_ref().strip_prefix(EVENT_JSON_PREFIX)?;
            serde_json::from_str(payload).ok()
        })
        .collect()
}

/// First token id of the first `nft_mint` event.
pub fn minted_token_id<I, S>(logs: I) -> Option<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    parse_events(logs)
        .into_iter()
        .filter(|e| e.standard == "nep171" && e.event == "nft_mint")
        .find_map(|e| {
            e.data
                .first()?
                .get("token_ids")?
                .get(0)?
                .as_str()
                .map(str::to_string)
        })
}
