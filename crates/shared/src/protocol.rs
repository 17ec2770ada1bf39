use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::Character;

/// Everything a character fetch resolves to: status, headers and the decoded body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResponseEnvelope {
    pub status: u16,
    #[serde(default)]
    pub headers: BTreeMap<String, String>,
    pub data: Value,
}

impl ResponseEnvelope {
    pub fn new(status: u16, data: Value) -> Self {
        Self {
            status,
            headers: BTreeMap::new(),
            data,
        }
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(&name.to_ascii_lowercase())
            .map(String::as_str)
    }

    /// The `data.results` list, if the body carries one.
    pub fn results(&self) -> Option<&[Character]> {
        self.data
            .get("results")
            .and_then(Value::as_array)
            .map(Vec::as_slice)
    }
}
