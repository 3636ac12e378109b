//! # Feed Ranking
//!
//! Personalization score per recommendation:
//!
//! ```text
//! score = preference(category) × 10
//!       + rating × 5
//!       + 50 if liked
//!       − 5 if viewed
//!       + max(0, 10 − days since posted)
//! ```
//!
//! With no category preferences at all the feed falls back to plain recency.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::models::{Recommendation, UserInteractions};

/// Preference gained by liking a post in a category.
pub const LIKE_WEIGHT: u32 = 2;
/// Preference gained by the first view of a post in a category.
pub const VIEW_WEIGHT: u32 = 1;

const PREFERENCE_FACTOR: f64 = 10.0;
const RATING_FACTOR: f64 = 5.0;
const LIKED_BONUS: f64 = 50.0;
const VIEWED_PENALTY: f64 = 5.0;
const FRESHNESS_DAYS: f64 = 10.0;
const MILLIS_PER_DAY: f64 = 24.0 * 60.0 * 60.0 * 1000.0;

/// A feed entry. `score` is `None` on the cold-start (recency) path.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoredRecommendation {
    #[serde(flatten)]
    pub recommendation: Recommendation,
    pub score: Option<f64>,
}

/// Fractional days between `created_at` and `now`.
pub fn days_since(created_at: DateTime<Utc>, now: DateTime<Utc>) -> f64 {
    (now - created_at).num_milliseconds() as f64 / MILLIS_PER_DAY
}

pub fn score(rec: &Recommendation, interactions: &UserInteractions, now: DateTime<Utc>) -> f64 {
    let mut score = f64::from(interactions.preference(rec.category)) * PREFERENCE_FACTOR;
    score += rec.rating * RATING_FACTOR;
    if interactions.liked_posts.contains(&rec.id) {
        score += LIKED_BONUS;
    }
    if interactions.viewed_posts.contains(&rec.id) {
        score -= VIEWED_PENALTY;
    }
    score + (FRESHNESS_DAYS - days_since(rec.created_at, now)).max(0.0)
}

/// Orders `recs` for the personalized feed. Ties fall back to ascending id.
pub fn rank(
    recs: &[Recommendation],
    interactions: &UserInteractions,
    now: DateTime<Utc>,
) -> Vec<ScoredRecommendation> {
    if interactions.is_cold() {
        let mut feed: Vec<_> = recs
            .iter()
            .map(|rec| ScoredRecommendation { recommendation: rec.clone(), score: None })
            .collect();
        feed.sort_by(|a, b| {
            b.recommendation
                .created_at
                .cmp(&a.recommendation.created_at)
                .then_with(|| a.recommendation.id.cmp(&b.recommendation.id))
        });
        return feed;
    }

    let mut feed: Vec<_> = recs
        .iter()
        .map(|rec| ScoredRecommendation {
            score: Some(score(rec, interactions, now)),
            recommendation: rec.clone(),
        })
        .collect();
    feed.sort_by(|a, b| {
        let (sa, sb) = (a.score.unwrap_or_default(), b.score.unwrap_or_default());
        sb.total_cmp(&sa)
            .then_with(|| a.recommendation.id.cmp(&b.recommendation.id))
    });
    feed
}
