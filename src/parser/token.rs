//! Leaf values shared by the design-token JSON formats.

use serde::Deserialize;

/// `{ "value": ..., "type": ..., "description": ... }`
#[derive(Debug, Clone, Deserialize)]
pub struct TokenData {
    pub value: TokenValue,
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum TokenValue {
    Number(f64),
    Text(String),
}

impl TokenValue {
    pub fn as_number(&self) -> Option<f64> {
        match self {
            TokenValue::Number(n) => Some(*n),
            TokenValue::Text(_) => None,
        }
    }
}

impl TokenData {
    pub fn number(&self) -> Option<f64> {
        self.value.as_number()
    }
}
