use near_sdk::serde::{Deserialize, Serialize};
use near_sdk::serde_json::{Map, Value};

#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(crate = "near_sdk::serde")]
pub(crate) struct Event {
    pub(crate) standard: String,
    pub(crate) version: String,
    pub(crate) event: String,
    pub(crate) data: Vec<Map<String, Value>>,
}
