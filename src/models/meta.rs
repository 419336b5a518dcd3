use serde::{Deserialize, Serialize};

/// Pagination metadata returned alongside list responses.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(default)]
pub struct Meta {
    pub total: i64,
    pub links: Links,
}

/// Cursors for the neighbouring pages. An empty string means there is none.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(default)]
pub struct Links {
    pub next: String,
    pub prev: String,
}
