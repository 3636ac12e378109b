//! # Persistence Codec
//!
//! Encode/decode boundary between the in-memory collections and the JSON
//! documents kept under the three storage keys. Sets travel as sorted arrays
//! and timestamps as RFC 3339 strings with millisecond precision.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::Result;
use crate::models::{Category, Comment, Recommendation, UserInteractions};

pub const RECOMMENDATIONS_KEY: &str = "recommendations";
pub const INTERACTIONS_KEY: &str = "interactions";
pub const COMMENTS_KEY: &str = "comments";

/// Fully qualified storage keys, one per persisted collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageKeys {
    pub recommendations: String,
    pub interactions: String,
    pub comments: String,
}

impl StorageKeys {
    pub fn with_prefix(prefix: &str) -> Self {
        Self {
            recommendations: format!("{prefix}{RECOMMENDATIONS_KEY}"),
            interactions: format!("{prefix}{INTERACTIONS_KEY}"),
            comments: format!("{prefix}{COMMENTS_KEY}"),
        }
    }
}

impl Default for StorageKeys {
    fn default() -> Self {
        Self::with_prefix("")
    }
}

/// Wire form of [`UserInteractions`].
#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct InteractionsDocument {
    liked_posts: Vec<String>,
    viewed_posts: Vec<String>,
    category_preferences: BTreeMap<String, u32>,
}

impl From<&UserInteractions> for InteractionsDocument {
    fn from(state: &UserInteractions) -> Self {
        Self {
            liked_posts: state.liked_posts.iter().cloned().collect(),
            viewed_posts: state.viewed_posts.iter().cloned().collect(),
            category_preferences: state
                .category_preferences
                .iter()
                .map(|(category, score)| (category.key().to_string(), *score))
                .collect(),
        }
    }
}

impl From<InteractionsDocument> for UserInteractions {
    fn from(doc: InteractionsDocument) -> Self {
        let category_preferences = doc
            .category_preferences
            .into_iter()
            .filter_map(|(key, score)| match key.parse::<Category>() {
                Ok(category) => Some((category, score)),
                Err(_) => {
                    warn!(category = %key, "dropping preference for unknown category");
                    None
                }
            })
            .collect();
        Self {
            liked_posts: doc.liked_posts.into_iter().collect(),
            viewed_posts: doc.viewed_posts.into_iter().collect(),
            category_preferences,
        }
    }
}

pub fn encode_recommendations(recs: &[Recommendation]) -> Result<String> {
    Ok(serde_json::to_string(recs)?)
}

pub fn decode_recommendations(raw: &str) -> serde_json::Result<Vec<Recommendation>> {
    serde_json::from_str(raw)
}

pub fn encode_interactions(state: &UserInteractions) -> Result<String> {
    Ok(serde_json::to_string(&InteractionsDocument::from(state))?)
}

pub fn decode_interactions(raw: &str) -> serde_json::Result<UserInteractions> {
    serde_json::from_str::<InteractionsDocument>(raw).map(UserInteractions::from)
}

pub fn encode_comments(comments: &[Comment]) -> Result<String> {
    Ok(serde_json::to_string(comments)?)
}

pub fn decode_comments(raw: &str) -> serde_json::Result<Vec<Comment>> {
    serde_json::from_str(raw)
}

/// Serde helpers for `createdAt`.
///
/// Accepts RFC 3339 strings, bare `YYYY-MM-DD` dates (midnight UTC) and
/// epoch milliseconds; always writes RFC 3339 with milliseconds.
pub mod timestamp {
    use chrono::{DateTime, NaiveDate, SecondsFormat, SubsecRound, TimeZone, Utc};
    use serde::de::Error as _;
    use serde::{Deserialize, Deserializer, Serializer};

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Text(String),
        Millis(i64),
        Fractional(f64),
    }

    /// Current time truncated to the precision the wire format keeps.
    pub fn now() -> DateTime<Utc> {
        Utc::now().trunc_subsecs(3)
    }

    pub fn format(dt: &DateTime<Utc>) -> String {
        dt.to_rfc3339_opts(SecondsFormat::Millis, true)
    }

    pub fn parse(text: &str) -> Result<DateTime<Utc>, String> {
        if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
            return Ok(dt.with_timezone(&Utc));
        }
        NaiveDate::parse_from_str(text, "%Y-%m-%d")
            .ok()
            .and_then(|date| date.and_hms_opt(0, 0, 0))
            .map(|naive| naive.and_utc())
            .ok_or_else(|| format!("invalid timestamp '{text}'"))
    }

    fn from_millis(ms: i64) -> Result<DateTime<Utc>, String> {
        Utc.timestamp_millis_opt(ms)
            .single()
            .ok_or_else(|| format!("timestamp {ms} out of range"))
    }

    fn from_raw(raw: Raw) -> Result<DateTime<Utc>, String> {
        match raw {
            Raw::Text(text) => parse(&text),
            Raw::Millis(ms) => from_millis(ms),
            Raw::Fractional(ms) => from_millis(ms.round() as i64),
        }
    }

    pub fn serialize<S>(dt: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&format(dt))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
    where
        D: Deserializer<'de>,
    {
        from_raw(Raw::deserialize(deserializer)?).map_err(D::Error::custom)
    }

    pub mod option {
        use super::*;

        pub fn serialize<S: Serializer>(
            dt: &Option<DateTime<Utc>>,
            serializer: S,
        ) -> Result<S::Ok, S::Error> {
            match dt {
                Some(dt) => serializer.serialize_some(&format(dt)),
                None => serializer.serialize_none(),
            }
        }

        pub fn deserialize<'de, D: Deserializer<'de>>(
            deserializer: D,
        ) -> Result<Option<DateTime<Utc>>, D::Error> {
            Option::<Raw>::deserialize(deserializer)?
                .map(from_raw)
                .transpose()
                .map_err(D::Error::custom)
        }
    }
}
