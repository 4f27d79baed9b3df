//! Generated content records returned to callers.

use serde::{Deserialize, Serialize};

use crate::request::Language;

/// One draft short-form video package for a single topic.
///
/// Built once per request and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentItem {
    /// Short random token, 6 lowercase alphanumeric characters.
    pub id: String,
    pub title: String,
    pub language: Language,
    pub duration_sec: u32,
    pub platforms: Vec<String>,
    /// Four or five opening lines.
    pub hooks: Vec<String>,
    /// Newline-separated script lines.
    pub script: String,
    /// Newline-separated caption lines.
    pub caption: String,
    /// 8 to 12 lowercase keywords.
    pub keywords: Vec<String>,
    /// At most 15 tags, each starting with `#`.
    pub hashtags: Vec<String>,
    pub thumbnail_text: String,
    pub cta: String,
}

/// Response body of the generate endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateResponse {
    pub items: Vec<ContentItem>,
}
