//! # Domain Models
//!
//! These structs represent the core entities of Urban Living.
//! Field names follow the camelCase layout of the persisted JSON documents.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::codec::timestamp;
use crate::error::{AppError, Result};

/// Avatar shown when the identity provider supplies none.
pub const PLACEHOLDER_AVATAR: &str = "/placeholder.svg?height=40&width=40";

/// Display name used when the identity provider supplies none.
pub const ANONYMOUS: &str = "Anonymous";

/// Image attached to posts created without one.
pub const DEFAULT_IMAGE: &str = "/urban-location.jpg";

/// The fixed set of recommendation categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Food,
    Health,
    Entertainment,
    Shopping,
    Services,
    Parks,
    Misc,
}

impl Category {
    pub const ALL: [Category; 7] = [
        Category::Food,
        Category::Health,
        Category::Entertainment,
        Category::Shopping,
        Category::Services,
        Category::Parks,
        Category::Misc,
    ];

    /// The lowercase key used on the wire and in preference maps.
    pub fn key(self) -> &'static str {
        match self {
            Category::Food => "food",
            Category::Health => "health",
            Category::Entertainment => "entertainment",
            Category::Shopping => "shopping",
            Category::Services => "services",
            Category::Parks => "parks",
            Category::Misc => "misc",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            Category::Food => "Food & Dining",
            Category::Health => "Health & Wellness",
            Category::Entertainment => "Entertainment",
            Category::Shopping => "Shopping",
            Category::Services => "Services",
            Category::Parks => "Parks & Recreation",
            Category::Misc => "Miscellaneous",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Category {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self> {
        Category::ALL
            .into_iter()
            .find(|c| c.key() == s)
            .ok_or_else(|| AppError::ValidationError(format!("unknown category '{s}'")))
    }
}

/// A display name plus avatar, as handed over by the identity provider.
///
/// Also used as the signed-in viewer in the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    #[serde(default)]
    pub avatar: String,
}

impl Profile {
    pub fn new(name: impl Into<String>, avatar: impl Into<String>) -> Self {
        Self { name: name.into(), avatar: avatar.into() }
    }

    /// Builds a profile from optional session fields, falling back to
    /// `Anonymous` and the placeholder avatar.
    pub fn from_session(name: Option<&str>, avatar: Option<&str>) -> Self {
        let pick = |v: Option<&str>, fallback: &str| {
            v.map(str::trim)
                .filter(|s| !s.is_empty())
                .unwrap_or(fallback)
                .to_string()
        };
        Self {
            name: pick(name, ANONYMOUS),
            avatar: pick(avatar, PLACEHOLDER_AVATAR),
        }
    }
}

/// Who wrote a recommendation.
///
/// Older records carry a bare display name; newer ones a full profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Author {
    Named(String),
    Profile(Profile),
}

impl Author {
    pub fn name(&self) -> &str {
        match self {
            Author::Named(name) => name,
            Author::Profile(profile) => &profile.name,
        }
    }

    pub fn avatar(&self) -> Option<&str> {
        match self {
            Author::Named(_) => None,
            Author::Profile(profile) if !profile.avatar.is_empty() => Some(&profile.avatar),
            Author::Profile(_) => None,
        }
    }
}

impl From<Profile> for Author {
    fn from(profile: Profile) -> Self {
        Author::Profile(profile)
    }
}

/// A user-authored post about a local place or service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    pub id: String,
    pub title: String,
    pub category: Category,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub location: String,
    pub author: Author,
    /// Sibling avatar written next to a bare-name author by older clients
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author_avatar: Option<String>,
    pub rating: f64,
    /// URI or data blob
    #[serde(default)]
    pub image: String,
    #[serde(with = "timestamp")]
    pub created_at: DateTime<Utc>,
}

impl Recommendation {
    pub fn author_name(&self) -> &str {
        self.author.name()
    }

    /// Structured avatar first, then the legacy sibling field, then the placeholder.
    pub fn author_avatar(&self) -> &str {
        self.author
            .avatar()
            .or(self.author_avatar.as_deref().filter(|a| !a.is_empty()))
            .unwrap_or(PLACEHOLDER_AVATAR)
    }
}

/// Everything needed to create a recommendation; id and timestamp are assigned by the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewRecommendation {
    pub title: String,
    pub category: Category,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub location: String,
    pub author: Author,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author_avatar: Option<String>,
    pub rating: f64,
    #[serde(default)]
    pub image: String,
}

impl NewRecommendation {
    pub fn validate(&self) -> Result<()> {
        validate_title(&self.title)?;
        validate_rating(self.rating)
    }
}

/// Partial update merged into an existing recommendation. Absent fields are left alone.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RecommendationPatch {
    pub id: Option<String>,
    pub title: Option<String>,
    pub category: Option<Category>,
    pub description: Option<String>,
    pub location: Option<String>,
    pub author: Option<Author>,
    pub author_avatar: Option<String>,
    pub rating: Option<f64>,
    pub image: Option<String>,
    #[serde(with = "timestamp::option")]
    pub created_at: Option<DateTime<Utc>>,
}

impl RecommendationPatch {
    pub fn validate(&self) -> Result<()> {
        if let Some(title) = &self.title {
            validate_title(title)?;
        }
        if let Some(rating) = self.rating {
            validate_rating(rating)?;
        }
        Ok(())
    }

    /// Like [`validate`](Self::validate), but a rating equal to the current
    /// one is let through. Seed posts carry ratings such as 4.8 that an edit
    /// form sends back untouched.
    pub fn validate_against(&self, current: &Recommendation) -> Result<()> {
        if let Some(title) = &self.title {
            validate_title(title)?;
        }
        match self.rating {
            Some(rating) if rating != current.rating => validate_rating(rating),
            _ => Ok(()),
        }
    }

    /// Overwrites every field present in the patch, `id` and `createdAt` included.
    /// Comments and likes stay keyed to the old id when `id` changes.
    pub fn apply_to(self, rec: &mut Recommendation) {
        if let Some(id) = self.id {
            rec.id = id;
        }
        if let Some(title) = self.title {
            rec.title = title;
        }
        if let Some(category) = self.category {
            rec.category = category;
        }
        if let Some(description) = self.description {
            rec.description = description;
        }
        if let Some(location) = self.location {
            rec.location = location;
        }
        if let Some(author) = self.author {
            rec.author = author;
        }
        if let Some(avatar) = self.author_avatar {
            rec.author_avatar = Some(avatar);
        }
        if let Some(rating) = self.rating {
            rec.rating = rating;
        }
        if let Some(image) = self.image {
            rec.image = image;
        }
        if let Some(created_at) = self.created_at {
            rec.created_at = created_at;
        }
    }
}

fn validate_title(title: &str) -> Result<()> {
    if title.trim().is_empty() {
        return Err(AppError::ValidationError("title must not be empty".into()));
    }
    Ok(())
}

/// Ratings run from 1 to 5 stars in half-star steps.
pub fn validate_rating(rating: f64) -> Result<()> {
    if !(1.0..=5.0).contains(&rating) || (rating * 2.0).fract() != 0.0 {
        return Err(AppError::ValidationError(format!(
            "rating {rating} must be between 1 and 5 in steps of 0.5"
        )));
    }
    Ok(())
}

/// A reply attached to a recommendation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: String,
    pub post_id: String,
    pub author: Profile,
    pub content: String,
    #[serde(with = "timestamp")]
    pub created_at: DateTime<Utc>,
}

/// Per-profile interaction state driving personalization.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserInteractions {
    pub liked_posts: BTreeSet<String>,
    pub viewed_posts: BTreeSet<String>,
    pub category_preferences: BTreeMap<Category, u32>,
}

impl UserInteractions {
    pub fn preference(&self, category: Category) -> u32 {
        self.category_preferences.get(&category).copied().unwrap_or(0)
    }

    pub fn is_cold(&self) -> bool {
        self.category_preferences.is_empty()
    }
}

/// A local business listing. Read-only reference data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Service {
    pub id: String,
    pub name: String,
    /// Free-form key; listings use categories outside the recommendation set
    pub category: String,
    pub description: String,
    pub address: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hours: Option<String>,
    pub rating: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

/// Aggregates shown on a user's profile.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileSummary {
    pub post_count: usize,
    pub liked_count: usize,
    pub comments_received: usize,
}
