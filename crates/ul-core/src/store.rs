//! # Recommendation Store
//!
//! Owns the posts, comments and interaction state for one session and mirrors
//! every change into a [`KvStore`] backend.
//!
//! The store walks through `Uninitialized → Loaded → Ready`. Storage writes are
//! only issued in `Ready`, and every public operation refuses to run before it.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use tokio::sync::watch;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::codec::{self, timestamp, StorageKeys};
use crate::error::{AppError, Result};
use crate::models::{
    Category, Comment, NewRecommendation, Profile, ProfileSummary, Recommendation,
    RecommendationPatch, Service, UserInteractions, DEFAULT_IMAGE,
};
use crate::ranking::{self, ScoredRecommendation, LIKE_WEIGHT, VIEW_WEIGHT};
use crate::search::{RecommendationFilter, ServiceFilter};
use crate::seed;
use crate::traits::KvStore;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorePhase {
    Uninitialized,
    Loaded,
    Ready,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StoreOptions {
    /// Prepended to every storage key (e.g. `urban_living_`)
    pub key_prefix: String,
    /// Take the like weight back off the category when a post is unliked.
    /// Off by default: a like keeps influencing the feed after it is undone.
    pub decrement_on_unlike: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Collection {
    Recommendations,
    Interactions,
    Comments,
}

pub struct RecommendationStore {
    backend: Arc<dyn KvStore>,
    options: StoreOptions,
    keys: StorageKeys,
    phase: StorePhase,
    recommendations: Vec<Recommendation>,
    services: Vec<Service>,
    comments: Vec<Comment>,
    interactions: UserInteractions,
    revision: watch::Sender<u64>,
}

impl RecommendationStore {
    /// Builds an empty, uninitialized store. Call [`load`](Self::load) and
    /// [`mark_ready`](Self::mark_ready), or use [`open`](Self::open).
    pub fn new(backend: Arc<dyn KvStore>, options: StoreOptions) -> Self {
        let (revision, _) = watch::channel(0);
        Self {
            keys: StorageKeys::with_prefix(&options.key_prefix),
            backend,
            options,
            phase: StorePhase::Uninitialized,
            recommendations: Vec::new(),
            services: seed::services(),
            comments: Vec::new(),
            interactions: UserInteractions::default(),
            revision,
        }
    }

    /// Loads persisted state and makes the store ready for use.
    pub async fn open(backend: Arc<dyn KvStore>, options: StoreOptions) -> Result<Self> {
        let mut store = Self::new(backend, options);
        store.load().await?;
        store.mark_ready().await?;
        Ok(store)
    }

    pub fn phase(&self) -> StorePhase {
        self.phase
    }

    pub fn options(&self) -> &StoreOptions {
        &self.options
    }

    /// Replaces in-memory state with whatever the backend holds.
    ///
    /// Absent or unreadable entries fall back to the seed posts and empty
    /// interactions/comments. Backend read failures are returned.
    pub async fn load(&mut self) -> Result<()> {
        if self.phase != StorePhase::Uninitialized {
            return Err(AppError::Internal("store is already loaded".into()));
        }

        let raw = self.backend.get(&self.keys.recommendations).await?;
        self.recommendations = decode_or(
            raw,
            &self.keys.recommendations,
            codec::decode_recommendations,
            seed::recommendations,
        );

        let raw = self.backend.get(&self.keys.interactions).await?;
        self.interactions = decode_or(
            raw,
            &self.keys.interactions,
            codec::decode_interactions,
            UserInteractions::default,
        );

        let raw = self.backend.get(&self.keys.comments).await?;
        self.comments = decode_or(raw, &self.keys.comments, codec::decode_comments, Vec::new);

        self.phase = StorePhase::Loaded;
        info!(
            recommendations = self.recommendations.len(),
            comments = self.comments.len(),
            liked = self.interactions.liked_posts.len(),
            "store loaded"
        );
        Ok(())
    }

    /// Opens the store for writes and flushes every collection once.
    pub async fn mark_ready(&mut self) -> Result<()> {
        if self.phase != StorePhase::Loaded {
            return Err(AppError::NotInitialized);
        }
        self.phase = StorePhase::Ready;
        self.sync(Collection::Recommendations).await;
        self.sync(Collection::Interactions).await;
        self.sync(Collection::Comments).await;
        self.bump();
        info!("store ready");
        Ok(())
    }

    /// Receiver of the store revision; bumped after every state change.
    pub fn subscribe(&self) -> watch::Receiver<u64> {
        self.revision.subscribe()
    }

    pub fn revision(&self) -> u64 {
        *self.revision.borrow()
    }

    // ── Recommendations ─────────────────────────────────────────────────────

    pub async fn add_recommendation(&mut self, draft: NewRecommendation) -> Result<Recommendation> {
        self.ensure_ready()?;
        draft.validate()?;

        let rec = Recommendation {
            id: Uuid::now_v7().to_string(),
            title: draft.title,
            category: draft.category,
            description: draft.description,
            location: draft.location,
            author: draft.author,
            author_avatar: draft.author_avatar,
            rating: draft.rating,
            image: if draft.image.trim().is_empty() {
                DEFAULT_IMAGE.to_string()
            } else {
                draft.image
            },
            created_at: timestamp::now(),
        };
        self.recommendations.insert(0, rec.clone());
        info!(
            id = %rec.id,
            category = %rec.category,
            author = rec.author_name(),
            "recommendation added"
        );

        self.sync(Collection::Recommendations).await;
        self.bump();
        Ok(rec)
    }

    /// Merges `patch` into the post with `id`. Returns `false` if no post matched.
    ///
    /// A rating sent back unchanged is accepted as is. Renaming a post onto
    /// another post's id is rejected.
    pub async fn update_recommendation(
        &mut self,
        id: &str,
        patch: RecommendationPatch,
    ) -> Result<bool> {
        self.ensure_ready()?;

        let Some(index) = self.recommendations.iter().position(|r| r.id == id) else {
            debug!(id, "update skipped, no such recommendation");
            return Ok(false);
        };
        patch.validate_against(&self.recommendations[index])?;
        if let Some(new_id) = patch.id.as_deref() {
            if new_id != id && self.recommendations.iter().any(|r| r.id == new_id) {
                return Err(AppError::ValidationError(format!(
                    "recommendation id {new_id} is already taken"
                )));
            }
        }
        patch.apply_to(&mut self.recommendations[index]);
        info!(id, "recommendation updated");

        self.sync(Collection::Recommendations).await;
        self.bump();
        Ok(true)
    }

    /// Removes the post and every comment attached to it. Missing ids are a no-op.
    pub async fn delete_recommendation(&mut self, id: &str) -> Result<bool> {
        self.ensure_ready()?;

        let before = self.recommendations.len();
        self.recommendations.retain(|r| r.id != id);
        let removed = self.recommendations.len() != before;

        let comments_before = self.comments.len();
        self.comments.retain(|c| c.post_id != id);
        let orphaned = comments_before - self.comments.len();

        if removed {
            self.sync(Collection::Recommendations).await;
        }
        if orphaned > 0 {
            self.sync(Collection::Comments).await;
        }
        if removed || orphaned > 0 {
            info!(id, comments = orphaned, "recommendation deleted");
            self.bump();
        }
        Ok(removed)
    }

    pub fn recommendations(&self) -> Result<&[Recommendation]> {
        self.ensure_ready()?;
        Ok(&self.recommendations)
    }

    pub fn recommendation(&self, id: &str) -> Result<Option<&Recommendation>> {
        self.ensure_ready()?;
        Ok(self.recommendations.iter().find(|r| r.id == id))
    }

    pub fn search_recommendations(
        &self,
        filter: &RecommendationFilter,
    ) -> Result<Vec<Recommendation>> {
        self.ensure_ready()?;
        Ok(self.recommendations.iter().filter(|r| filter.matches(r)).cloned().collect())
    }

    pub fn liked_recommendations(&self) -> Result<Vec<Recommendation>> {
        self.ensure_ready()?;
        Ok(self
            .recommendations
            .iter()
            .filter(|r| self.interactions.liked_posts.contains(&r.id))
            .cloned()
            .collect())
    }

    pub fn user_recommendations(&self, author_name: &str) -> Result<Vec<Recommendation>> {
        self.ensure_ready()?;
        Ok(self
            .recommendations
            .iter()
            .filter(|r| r.author_name() == author_name)
            .cloned()
            .collect())
    }

    // ── Personalization ─────────────────────────────────────────────────────

    /// Flips the like on `id`. Returns the new liked state.
    pub async fn toggle_like(&mut self, id: &str, category: Category) -> Result<bool> {
        self.ensure_ready()?;

        let liked = if self.interactions.liked_posts.remove(id) {
            if self.options.decrement_on_unlike {
                let prefs = &mut self.interactions.category_preferences;
                if let Some(score) = prefs.get_mut(&category) {
                    *score = score.saturating_sub(LIKE_WEIGHT);
                    // a spent category must not keep the feed out of cold start
                    if *score == 0 {
                        prefs.remove(&category);
                    }
                }
            }
            false
        } else {
            self.interactions.liked_posts.insert(id.to_string());
            *self.interactions.category_preferences.entry(category).or_insert(0) += LIKE_WEIGHT;
            true
        };
        debug!(id, %category, liked, "like toggled");

        self.sync(Collection::Interactions).await;
        self.bump();
        Ok(liked)
    }

    /// Records the first view of `id`. Returns `false` for repeat views.
    pub async fn mark_as_viewed(&mut self, id: &str, category: Category) -> Result<bool> {
        self.ensure_ready()?;

        if !self.interactions.viewed_posts.insert(id.to_string()) {
            return Ok(false);
        }
        *self.interactions.category_preferences.entry(category).or_insert(0) += VIEW_WEIGHT;
        debug!(id, %category, "first view recorded");

        self.sync(Collection::Interactions).await;
        self.bump();
        Ok(true)
    }

    pub fn is_liked(&self, id: &str) -> Result<bool> {
        self.ensure_ready()?;
        Ok(self.interactions.liked_posts.contains(id))
    }

    pub fn interactions(&self) -> Result<&UserInteractions> {
        self.ensure_ready()?;
        Ok(&self.interactions)
    }

    pub fn personalized_recommendations(&self) -> Result<Vec<Recommendation>> {
        self.personalized_recommendations_at(Utc::now())
    }

    pub fn personalized_recommendations_at(
        &self,
        now: DateTime<Utc>,
    ) -> Result<Vec<Recommendation>> {
        Ok(self
            .personalized_scored_at(now)?
            .into_iter()
            .map(|entry| entry.recommendation)
            .collect())
    }

    pub fn personalized_scored_at(&self, now: DateTime<Utc>) -> Result<Vec<ScoredRecommendation>> {
        self.ensure_ready()?;
        Ok(ranking::rank(&self.recommendations, &self.interactions, now))
    }

    // ── Comments ────────────────────────────────────────────────────────────

    pub async fn add_comment(
        &mut self,
        post_id: &str,
        content: &str,
        author: Profile,
    ) -> Result<Comment> {
        self.ensure_ready()?;

        let content = content.trim();
        if content.is_empty() {
            return Err(AppError::ValidationError("comment must not be empty".into()));
        }
        let comment = Comment {
            id: Uuid::now_v7().to_string(),
            post_id: post_id.to_string(),
            author,
            content: content.to_string(),
            created_at: timestamp::now(),
        };
        self.comments.push(comment.clone());
        info!(id = %comment.id, post_id, "comment added");

        self.sync(Collection::Comments).await;
        self.bump();
        Ok(comment)
    }

    /// Comments on `post_id`, oldest first.
    pub fn comments(&self, post_id: &str) -> Result<Vec<Comment>> {
        self.ensure_ready()?;
        let mut thread: Vec<_> = self
            .comments
            .iter()
            .filter(|c| c.post_id == post_id)
            .cloned()
            .collect();
        thread.sort_by_key(|c| c.created_at);
        Ok(thread)
    }

    pub fn comment_count(&self, post_id: &str) -> Result<usize> {
        self.ensure_ready()?;
        Ok(self.comments.iter().filter(|c| c.post_id == post_id).count())
    }

    // ── Services & profiles ─────────────────────────────────────────────────

    pub fn services(&self) -> Result<&[Service]> {
        self.ensure_ready()?;
        Ok(&self.services)
    }

    pub fn search_services(&self, filter: &ServiceFilter) -> Result<Vec<Service>> {
        self.ensure_ready()?;
        Ok(self.services.iter().filter(|s| filter.matches(s)).cloned().collect())
    }

    pub fn profile_summary(&self, author_name: &str) -> Result<ProfileSummary> {
        let posts = self.user_recommendations(author_name)?;
        let comments_received = posts
            .iter()
            .map(|p| self.comment_count(&p.id))
            .sum::<Result<usize>>()?;
        Ok(ProfileSummary {
            post_count: posts.len(),
            liked_count: self.liked_recommendations()?.len(),
            comments_received,
        })
    }

    // ── Internals ───────────────────────────────────────────────────────────

    fn ensure_ready(&self) -> Result<()> {
        match self.phase {
            StorePhase::Ready => Ok(()),
            _ => Err(AppError::NotInitialized),
        }
    }

    fn bump(&self) {
        self.revision.send_modify(|rev| *rev += 1);
    }

    /// Writes one whole collection. Failures are logged; in-memory state stands.
    async fn sync(&self, collection: Collection) {
        if self.phase != StorePhase::Ready {
            return;
        }
        let (key, encoded) = match collection {
            Collection::Recommendations => (
                &self.keys.recommendations,
                codec::encode_recommendations(&self.recommendations),
            ),
            Collection::Interactions => (
                &self.keys.interactions,
                codec::encode_interactions(&self.interactions),
            ),
            Collection::Comments => (&self.keys.comments, codec::encode_comments(&self.comments)),
        };
        let payload = match encoded {
            Ok(payload) => payload,
            Err(err) => {
                warn!(key = %key, error = %err, "could not encode collection");
                return;
            }
        };
        match self.backend.set(key, &payload).await {
            Ok(()) => debug!(key = %key, bytes = payload.len(), "collection persisted"),
            Err(err) => warn!(
                key = %key,
                error = %err,
                "failed to persist collection, keeping in-memory state"
            ),
        }
    }
}

fn decode_or<T>(
    raw: Option<String>,
    key: &str,
    decode: impl FnOnce(&str) -> serde_json::Result<T>,
    fallback: impl FnOnce() -> T,
) -> T {
    let Some(raw) = raw else {
        debug!(key, "nothing stored, using defaults");
        return fallback();
    };
    decode(&raw).unwrap_or_else(|err| {
        warn!(key, error = %err, "stored collection is malformed, using defaults");
        fallback()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::MemoryKvStore;
    use crate::models::Author;
    use crate::traits::MockKvStore;

    async fn open_memory() -> RecommendationStore {
        RecommendationStore::open(Arc::new(MemoryKvStore::new()), StoreOptions::default())
            .await
            .unwrap()
    }

    fn draft(title: &str, author: &str) -> NewRecommendation {
        NewRecommendation {
            title: title.into(),
            category: Category::Misc,
            description: "desc".into(),
            location: "somewhere".into(),
            author: Author::Profile(Profile::new(author, "/a.png")),
            author_avatar: None,
            rating: 4.5,
            image: String::new(),
        }
    }

    #[tokio::test]
    async fn operations_before_ready_fail_loudly() {
        let kv = MemoryKvStore::new();
        let mut store = RecommendationStore::new(Arc::new(kv.clone()), StoreOptions::default());

        assert!(matches!(store.recommendations(), Err(AppError::NotInitialized)));
        assert!(matches!(
            store.toggle_like("1", Category::Food).await,
            Err(AppError::NotInitialized)
        ));

        store.load().await.unwrap();
        assert_eq!(store.phase(), StorePhase::Loaded);
        assert!(matches!(store.is_liked("1"), Err(AppError::NotInitialized)));
        assert!(kv.is_empty(), "nothing is written before ready");

        store.mark_ready().await.unwrap();
        assert_eq!(store.phase(), StorePhase::Ready);
        assert_eq!(kv.len(), 3, "ready flushes every collection");
    }

    #[tokio::test]
    async fn mark_ready_requires_load() {
        let backend = Arc::new(MemoryKvStore::new());
        let mut store = RecommendationStore::new(backend, StoreOptions::default());
        assert!(matches!(store.mark_ready().await, Err(AppError::NotInitialized)));
    }

    #[tokio::test]
    async fn add_prepends_and_fills_defaults() {
        let mut store = open_memory().await;
        let rec = store.add_recommendation(draft("Night market", "Ana")).await.unwrap();

        let all = store.recommendations().unwrap();
        assert_eq!(all[0].id, rec.id);
        assert_eq!(all.len(), 4);
        assert_eq!(rec.image, DEFAULT_IMAGE);
    }

    #[tokio::test]
    async fn invalid_drafts_are_rejected() {
        let mut store = open_memory().await;
        let mut bad = draft("Night market", "Ana");
        bad.rating = 4.2;
        assert!(matches!(
            store.add_recommendation(bad).await,
            Err(AppError::ValidationError(_))
        ));
        assert!(matches!(
            store.add_recommendation(draft("   ", "Ana")).await,
            Err(AppError::ValidationError(_))
        ));
        assert_eq!(store.recommendations().unwrap().len(), 3);
    }

    #[tokio::test]
    async fn update_merges_only_given_fields() {
        let mut store = open_memory().await;
        let before = store.recommendation("1").unwrap().cloned().unwrap();

        let patch =
            RecommendationPatch { title: Some("Better Coffee".into()), ..Default::default() };
        assert!(store.update_recommendation("1", patch).await.unwrap());

        let after = store.recommendation("1").unwrap().unwrap();
        assert_eq!(after.title, "Better Coffee");
        assert_eq!(after.created_at, before.created_at);
        assert_eq!(after.rating, before.rating);

        let missing = RecommendationPatch { title: Some("x".into()), ..Default::default() };
        assert!(!store.update_recommendation("nope", missing).await.unwrap());
    }

    #[tokio::test]
    async fn decrement_on_unlike_is_opt_in() {
        let options = StoreOptions { decrement_on_unlike: true, ..Default::default() };
        let mut store = RecommendationStore::open(Arc::new(MemoryKvStore::new()), options)
            .await
            .unwrap();

        assert!(store.toggle_like("3", Category::Health).await.unwrap());
        assert!(!store.interactions().unwrap().is_cold());
        assert!(!store.toggle_like("3", Category::Health).await.unwrap());

        let interactions = store.interactions().unwrap();
        assert_eq!(interactions.preference(Category::Health), 0);
        assert!(interactions.is_cold(), "an undone like leaves no preference behind");

        let feed = store.personalized_scored_at(Utc::now()).unwrap();
        let ids: Vec<_> = feed.iter().map(|e| e.recommendation.id.as_str()).collect();
        assert_eq!(ids, ["1", "2", "3"]);
        assert!(feed.iter().all(|e| e.score.is_none()));
    }

    #[tokio::test]
    async fn decrement_keeps_categories_with_views() {
        let options = StoreOptions { decrement_on_unlike: true, ..Default::default() };
        let mut store = RecommendationStore::open(Arc::new(MemoryKvStore::new()), options)
            .await
            .unwrap();

        store.mark_as_viewed("1", Category::Food).await.unwrap();
        store.toggle_like("1", Category::Food).await.unwrap();
        store.toggle_like("1", Category::Food).await.unwrap();
        assert_eq!(store.interactions().unwrap().preference(Category::Food), 1);
    }

    #[tokio::test]
    async fn unchanged_seed_rating_survives_an_edit() {
        let mut store = open_memory().await;
        let patch = RecommendationPatch {
            title: Some("Best Coffee Uptown".into()),
            rating: Some(4.8),
            ..Default::default()
        };
        assert!(store.update_recommendation("1", patch).await.unwrap());
        assert_eq!(store.recommendation("1").unwrap().unwrap().title, "Best Coffee Uptown");

        let off_step = RecommendationPatch { rating: Some(4.3), ..Default::default() };
        assert!(matches!(
            store.update_recommendation("1", off_step).await,
            Err(AppError::ValidationError(_))
        ));
    }

    #[tokio::test]
    async fn renaming_onto_a_taken_id_is_rejected() {
        let mut store = open_memory().await;
        let clash = RecommendationPatch { id: Some("2".into()), ..Default::default() };
        assert!(matches!(
            store.update_recommendation("1", clash).await,
            Err(AppError::ValidationError(_))
        ));
        assert!(store.recommendation("1").unwrap().is_some());

        let fresh = RecommendationPatch { id: Some("coffee".into()), ..Default::default() };
        assert!(store.update_recommendation("1", fresh).await.unwrap());
        assert!(store.recommendation("1").unwrap().is_none());
        assert!(store.recommendation("coffee").unwrap().is_some());
        assert_eq!(store.recommendations().unwrap().len(), 3);
    }

    #[tokio::test]
    async fn liked_count_ignores_deleted_posts() {
        let mut store = open_memory().await;
        store.toggle_like("1", Category::Food).await.unwrap();
        store.toggle_like("2", Category::Parks).await.unwrap();
        assert_eq!(store.profile_summary("Sarah Chen").unwrap().liked_count, 2);

        store.delete_recommendation("1").await.unwrap();
        assert!(store.liked_recommendations().unwrap().iter().all(|r| r.id != "1"));
        assert_eq!(store.profile_summary("Sarah Chen").unwrap().liked_count, 1);

        store.delete_recommendation("2").await.unwrap();
        assert_eq!(store.profile_summary("Sarah Chen").unwrap().liked_count, 0);
    }

    #[tokio::test]
    async fn repeat_views_skip_storage() {
        let mut kv = MockKvStore::new();
        kv.expect_get().returning(|_| Ok(None));
        // three flushes on ready + one for the first view
        kv.expect_set().times(4).returning(|_, _| Ok(()));

        let mut store = RecommendationStore::open(Arc::new(kv), StoreOptions::default())
            .await
            .unwrap();
        assert!(store.mark_as_viewed("2", Category::Parks).await.unwrap());
        assert!(!store.mark_as_viewed("2", Category::Parks).await.unwrap());
    }

    #[tokio::test]
    async fn write_failures_keep_memory_state() {
        let mut kv = MockKvStore::new();
        kv.expect_get().returning(|_| Ok(None));
        kv.expect_set()
            .returning(|_, _| Err(anyhow::anyhow!("disk full")));

        let mut store = RecommendationStore::open(Arc::new(kv), StoreOptions::default())
            .await
            .unwrap();
        assert!(store.toggle_like("3", Category::Health).await.unwrap());
        assert!(store.is_liked("3").unwrap());
    }

    #[tokio::test]
    async fn read_failures_abort_load() {
        let mut kv = MockKvStore::new();
        kv.expect_get()
            .returning(|_| Err(anyhow::anyhow!("database is locked")));

        let result = RecommendationStore::open(Arc::new(kv), StoreOptions::default()).await;
        assert!(matches!(result, Err(AppError::Storage(_))));
    }

    #[tokio::test]
    async fn every_change_bumps_the_revision() {
        let mut store = open_memory().await;
        let mut rx = store.subscribe();
        let start = *rx.borrow_and_update();

        store.add_comment("1", "Love it", Profile::new("Ana", "")).await.unwrap();
        assert!(rx.has_changed().unwrap());
        assert_eq!(*rx.borrow_and_update(), start + 1);

        // a repeat view changes nothing
        store.mark_as_viewed("1", Category::Food).await.unwrap();
        store.mark_as_viewed("1", Category::Food).await.unwrap();
        assert_eq!(store.revision(), start + 2);
    }

    #[tokio::test]
    async fn profile_summary_counts_received_comments() {
        let mut store = open_memory().await;
        let rec = store.add_recommendation(draft("Bakery", "Ana")).await.unwrap();
        store.add_comment(&rec.id, "yum", Profile::new("Bo", "")).await.unwrap();
        store.add_comment(&rec.id, "agreed", Profile::new("Cy", "")).await.unwrap();
        store.add_comment("1", "other post", Profile::new("Bo", "")).await.unwrap();
        store.toggle_like("2", Category::Parks).await.unwrap();

        let summary = store.profile_summary("Ana").unwrap();
        assert_eq!(summary.post_count, 1);
        assert_eq!(summary.comments_received, 2);
        assert_eq!(summary.liked_count, 1);
    }

    #[tokio::test]
    async fn blank_comments_are_rejected() {
        let mut store = open_memory().await;
        assert!(matches!(
            store.add_comment("1", "  \n", Profile::new("Bo", "")).await,
            Err(AppError::ValidationError(_))
        ));
    }
}
