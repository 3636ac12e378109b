//! Text and category filters used by the community and discover views.

use serde::{Deserialize, Deserializer};

use crate::models::{Category, Recommendation, Service};

fn contains_folded(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(needle)
}

/// Query matches title, description or location, case-insensitively.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct RecommendationFilter {
    #[serde(default)]
    pub q: Option<String>,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub category: Option<Category>,
}

/// `?category=` means "all categories", as it does for services.
fn blank_as_none<'de, D>(deserializer: D) -> Result<Option<Category>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<String>::deserialize(deserializer)?.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(key) => key.parse::<Category>().map(Some).map_err(serde::de::Error::custom),
    }
}

impl RecommendationFilter {
    pub fn matches(&self, rec: &Recommendation) -> bool {
        if self.category.is_some_and(|c| c != rec.category) {
            return false;
        }
        let Some(query) = self.q.as_deref().map(str::to_lowercase) else {
            return true;
        };
        contains_folded(&rec.title, &query)
            || contains_folded(&rec.description, &query)
            || contains_folded(&rec.location, &query)
    }
}

/// Query matches name or description; category is a free-form listing key.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ServiceFilter {
    #[serde(default)]
    pub q: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
}

impl ServiceFilter {
    pub fn matches(&self, service: &Service) -> bool {
        if self
            .category
            .as_deref()
            .is_some_and(|c| !c.is_empty() && c != service.category)
        {
            return false;
        }
        let Some(query) = self.q.as_deref().map(str::to_lowercase) else {
            return true;
        };
        contains_folded(&service.name, &query) || contains_folded(&service.description, &query)
    }
}
