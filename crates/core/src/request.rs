//! Generation request payload: preference enums, defaults, and boundary
//! validation.
//!
//! The request is validated once at the HTTP boundary (see
//! [`validator::Validate`]) and treated as immutable afterwards.

use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};
use validator::Validate;

// ---------------------------------------------------------------------------
// Defaults
// ---------------------------------------------------------------------------

/// Default video length in seconds.
pub const DEFAULT_DURATION_SEC: u32 = 30;
/// Default number of content items per request.
pub const DEFAULT_COUNT: u32 = 3;

pub const MIN_DURATION_SEC: u32 = 10;
pub const MAX_DURATION_SEC: u32 = 120;
pub const MIN_COUNT: u32 = 1;
pub const MAX_COUNT: u32 = 5;

fn default_duration_sec() -> u32 {
    DEFAULT_DURATION_SEC
}

fn default_count() -> u32 {
    DEFAULT_COUNT
}

// ---------------------------------------------------------------------------
// Preference enums
// ---------------------------------------------------------------------------

/// Output language register.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    En,
    Hi,
    /// Hinglish: mixed Hindi/English informal register.
    #[default]
    Hing,
}

/// Three-step intensity scale shared by `emotion` and `controversy`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    Low,
    Medium,
    High,
}

fn default_emotion() -> Level {
    Level::High
}

fn default_controversy() -> Level {
    Level::Medium
}

/// Delivery style of the generated script.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Tone {
    #[default]
    HighEnergy,
    Educational,
    Story,
    Motivational,
}

impl Tone {
    /// Wire name, e.g. `"high-energy"`.
    pub fn as_str(self) -> &'static str {
        match self {
            Tone::HighEnergy => "high-energy",
            Tone::Educational => "educational",
            Tone::Story => "story",
            Tone::Motivational => "motivational",
        }
    }
}

impl std::fmt::Display for Tone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// GenerationRequest
// ---------------------------------------------------------------------------

/// Inputs for one generation run.
///
/// Every field except `niche` and `platforms` has a default. Numeric fields
/// accept either a JSON integer or a string holding one, since form inputs
/// usually submit text.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct GenerationRequest {
    #[validate(length(min = 2, max = 60, message = "must be between 2 and 60 characters"))]
    pub niche: String,

    #[serde(default)]
    pub language: Language,

    #[serde(default = "default_duration_sec", deserialize_with = "lenient_u32")]
    #[validate(range(min = 10, max = 120, message = "must be between 10 and 120 seconds"))]
    pub duration_sec: u32,

    #[serde(default = "default_emotion")]
    pub emotion: Level,

    #[serde(default = "default_controversy")]
    pub controversy: Level,

    #[serde(default = "default_count", deserialize_with = "lenient_u32")]
    #[validate(range(min = 1, max = 5, message = "must be between 1 and 5"))]
    pub count: u32,

    #[validate(length(min = 1, message = "at least one platform is required"))]
    pub platforms: Vec<String>,

    #[serde(default)]
    pub tone: Tone,
}

impl GenerationRequest {
    /// Build a request with every optional field at its default.
    pub fn new(niche: impl Into<String>, platforms: Vec<String>) -> Self {
        Self {
            niche: niche.into(),
            language: Language::default(),
            duration_sec: DEFAULT_DURATION_SEC,
            emotion: default_emotion(),
            controversy: default_controversy(),
            count: DEFAULT_COUNT,
            platforms,
            tone: Tone::default(),
        }
    }
}

/// Accept `30`, `30.0` or `"30"`; reject fractions, negatives, and
/// non-numeric text.
fn lenient_u32<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum NumberOrText {
        Number(f64),
        Text(String),
    }

    let value = match NumberOrText::deserialize(deserializer)? {
        NumberOrText::Number(n) => n,
        NumberOrText::Text(text) => text
            .trim()
            .parse::<f64>()
            .map_err(|_| de::Error::custom(format!("expected a number, got \"{text}\"")))?,
    };

    if value.fract() != 0.0 || value < 0.0 || value > f64::from(u32::MAX) {
        return Err(de::Error::custom(format!(
            "expected a non-negative integer, got {value}"
        )));
    }
    Ok(value as u32)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
