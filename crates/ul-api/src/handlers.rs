//! # ul-api Handlers
//!
//! This module coordinates the flow between HTTP requests and the store.

use actix_web::{web, HttpResponse};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;
use ul_core::{
    AppError, Author, Category, NewRecommendation, ProfileSummary, Recommendation,
    RecommendationFilter, RecommendationPatch, RecommendationStore, ServiceFilter,
};

use crate::error::ApiResult;
use crate::middleware::Viewer;

/// State shared across all Actix-web workers.
///
/// Reads share the lock; every mutation takes it exclusively.
pub struct AppState {
    pub store: RwLock<RecommendationStore>,
}

impl AppState {
    pub fn new(store: RecommendationStore) -> Self {
        Self { store: RwLock::new(store) }
    }
}

/// A post as shown on a card: the record plus per-viewer decorations.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationView {
    #[serde(flatten)]
    pub recommendation: Recommendation,
    pub avatar: String,
    pub liked: bool,
    pub comment_count: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score: Option<f64>,
}

fn card(
    store: &RecommendationStore,
    rec: Recommendation,
    score: Option<f64>,
) -> ApiResult<RecommendationView> {
    Ok(RecommendationView {
        avatar: rec.author_avatar().to_string(),
        liked: store.is_liked(&rec.id)?,
        comment_count: store.comment_count(&rec.id)?,
        recommendation: rec,
        score,
    })
}

fn cards(
    store: &RecommendationStore,
    recs: Vec<Recommendation>,
) -> ApiResult<Vec<RecommendationView>> {
    recs.into_iter().map(|rec| card(store, rec, None)).collect()
}

fn not_found(id: &str) -> AppError {
    AppError::NotFound("Recommendation".into(), id.to_string())
}

/// Looks up a post and checks the viewer wrote it.
fn owned_by<'a>(
    store: &'a RecommendationStore,
    id: &str,
    viewer: &Viewer,
) -> ApiResult<&'a Recommendation> {
    let rec = store.recommendation(id)?.ok_or_else(|| not_found(id))?;
    if rec.author_name() != viewer.name() {
        let reason = "only the author can change this recommendation";
        return Err(AppError::Unauthorized(reason.into()).into());
    }
    Ok(rec)
}

pub async fn health(data: web::Data<AppState>) -> HttpResponse {
    let store = data.store.read().await;
    HttpResponse::Ok().json(serde_json::json!({
        "status": "ok",
        "revision": store.revision(),
    }))
}

#[derive(Serialize)]
struct CategoryView {
    id: &'static str,
    name: &'static str,
}

pub async fn list_categories() -> HttpResponse {
    let categories: Vec<_> = Category::ALL
        .into_iter()
        .map(|c| CategoryView { id: c.key(), name: c.display_name() })
        .collect();
    HttpResponse::Ok().json(categories)
}

pub async fn list_services(
    data: web::Data<AppState>,
    query: web::Query<ServiceFilter>,
) -> ApiResult<HttpResponse> {
    let store = data.store.read().await;
    Ok(HttpResponse::Ok().json(store.search_services(&query)?))
}

/// Community listing with optional `q` and `category` filters.
pub async fn list_recommendations(
    data: web::Data<AppState>,
    query: web::Query<RecommendationFilter>,
) -> ApiResult<HttpResponse> {
    let store = data.store.read().await;
    let recs = store.search_recommendations(&query)?;
    Ok(HttpResponse::Ok().json(cards(&store, recs)?))
}

/// The personalized feed, scores included.
pub async fn feed(data: web::Data<AppState>) -> ApiResult<HttpResponse> {
    let store = data.store.read().await;
    let feed = store
        .personalized_scored_at(Utc::now())?
        .into_iter()
        .map(|entry| card(&store, entry.recommendation, entry.score))
        .collect::<ApiResult<Vec<_>>>()?;
    Ok(HttpResponse::Ok().json(feed))
}

pub async fn liked(data: web::Data<AppState>) -> ApiResult<HttpResponse> {
    let store = data.store.read().await;
    let recs = store.liked_recommendations()?;
    Ok(HttpResponse::Ok().json(cards(&store, recs)?))
}

pub async fn user_recommendations(
    data: web::Data<AppState>,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    let store = data.store.read().await;
    let recs = store.user_recommendations(&path)?;
    Ok(HttpResponse::Ok().json(cards(&store, recs)?))
}

pub async fn get_recommendation(
    data: web::Data<AppState>,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    let id = path.into_inner();
    let store = data.store.read().await;
    let rec = store.recommendation(&id)?.cloned().ok_or_else(|| not_found(&id))?;
    Ok(HttpResponse::Ok().json(card(&store, rec, None)?))
}

/// Body for creating a post; the author comes from the viewer.
#[derive(Debug, Deserialize)]
pub struct CreateRecommendation {
    pub title: String,
    pub category: Category,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub location: String,
    pub rating: f64,
    #[serde(default)]
    pub image: String,
}

pub async fn create_recommendation(
    data: web::Data<AppState>,
    viewer: Viewer,
    body: web::Json<CreateRecommendation>,
) -> ApiResult<HttpResponse> {
    let body = body.into_inner();
    if body.image.trim().is_empty() {
        let reason = "an image is required for a new recommendation";
        return Err(AppError::ValidationError(reason.into()).into());
    }
    let draft = NewRecommendation {
        title: body.title,
        category: body.category,
        description: body.description,
        location: body.location,
        author: Author::Profile(viewer.0),
        author_avatar: None,
        rating: body.rating,
        image: body.image,
    };

    let mut store = data.store.write().await;
    let rec = store.add_recommendation(draft).await?;
    Ok(HttpResponse::Created().json(card(&store, rec, None)?))
}

/// Editable fields of an existing post.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct EditRecommendation {
    pub title: Option<String>,
    pub category: Option<Category>,
    pub description: Option<String>,
    pub location: Option<String>,
    pub rating: Option<f64>,
    pub image: Option<String>,
}

impl From<EditRecommendation> for RecommendationPatch {
    fn from(edit: EditRecommendation) -> Self {
        RecommendationPatch {
            title: edit.title,
            category: edit.category,
            description: edit.description,
            location: edit.location,
            rating: edit.rating,
            image: edit.image,
            ..Default::default()
        }
    }
}

pub async fn update_recommendation(
    data: web::Data<AppState>,
    viewer: Viewer,
    path: web::Path<String>,
    body: web::Json<EditRecommendation>,
) -> ApiResult<HttpResponse> {
    let id = path.into_inner();
    let mut store = data.store.write().await;
    owned_by(&store, &id, &viewer)?;

    store.update_recommendation(&id, body.into_inner().into()).await?;
    let rec = store.recommendation(&id)?.cloned().ok_or_else(|| not_found(&id))?;
    Ok(HttpResponse::Ok().json(card(&store, rec, None)?))
}

pub async fn delete_recommendation(
    data: web::Data<AppState>,
    viewer: Viewer,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    let id = path.into_inner();
    let mut store = data.store.write().await;
    owned_by(&store, &id, &viewer)?;

    store.delete_recommendation(&id).await?;
    Ok(HttpResponse::NoContent().finish())
}

pub async fn toggle_like(
    data: web::Data<AppState>,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    let id = path.into_inner();
    let mut store = data.store.write().await;
    let category = store.recommendation(&id)?.map(|r| r.category).ok_or_else(|| not_found(&id))?;

    let liked = store.toggle_like(&id, category).await?;
    Ok(HttpResponse::Ok().json(serde_json::json!({ "id": id, "liked": liked })))
}

pub async fn mark_viewed(
    data: web::Data<AppState>,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    let id = path.into_inner();
    let mut store = data.store.write().await;
    let category = store.recommendation(&id)?.map(|r| r.category).ok_or_else(|| not_found(&id))?;

    let first_view = store.mark_as_viewed(&id, category).await?;
    Ok(HttpResponse::Ok().json(serde_json::json!({ "id": id, "firstView": first_view })))
}

pub async fn list_comments(
    data: web::Data<AppState>,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    let store = data.store.read().await;
    Ok(HttpResponse::Ok().json(store.comments(&path)?))
}

#[derive(Debug, Deserialize)]
pub struct CreateComment {
    pub content: String,
}

pub async fn add_comment(
    data: web::Data<AppState>,
    viewer: Viewer,
    path: web::Path<String>,
    body: web::Json<CreateComment>,
) -> ApiResult<HttpResponse> {
    let id = path.into_inner();
    let mut store = data.store.write().await;
    if store.recommendation(&id)?.is_none() {
        return Err(not_found(&id).into());
    }

    let comment = store.add_comment(&id, &body.content, viewer.0).await?;
    Ok(HttpResponse::Created().json(comment))
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ProfileView {
    name: String,
    avatar: String,
    #[serde(flatten)]
    summary: ProfileSummary,
    posts: Vec<RecommendationView>,
}

/// The viewer's own posts and activity totals.
pub async fn profile(data: web::Data<AppState>, viewer: Viewer) -> ApiResult<HttpResponse> {
    let store = data.store.read().await;
    let summary = store.profile_summary(viewer.name())?;
    let posts = cards(&store, store.user_recommendations(viewer.name())?)?;
    Ok(HttpResponse::Ok().json(ProfileView {
        name: viewer.0.name,
        avatar: viewer.0.avatar,
        summary,
        posts,
    }))
}
