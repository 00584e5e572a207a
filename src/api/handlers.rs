//! API Handlers
//!
//! HTTP request handlers for the notes endpoints. Reads go through the TTL
//! cache; every successful mutation invalidates the keys it could have made
//! stale, after the store write is confirmed.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use tokio::sync::RwLock;
use tracing::debug;
use uuid::Uuid;

use crate::cache::TtlCache;
use crate::clock::SystemClock;
use crate::config::Config;
use crate::db::NotesRepository;
use crate::error::{ApiError, Result};
use crate::models::{
    CachedNotes, HealthResponse, NoteDetailResponse, NoteListResponse, NoteMutationResponse,
    NotePayload,
};
use crate::ratelimit::SlidingWindowLimiter;

// == Cache Keys ==
/// Key holding the full, newest-first collection.
const NOTES_LIST_KEY: &str = "notes:all";

/// Key holding a single note. Per-id keys keep invalidation O(1): a mutation
/// deletes the aggregate key and its own id key, never scanning the keyspace.
fn note_cache_key(id: &Uuid) -> String {
    format!("notes:{id}")
}

// == App State ==
/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Authoritative store
    pub repo: NotesRepository,
    /// Read-through cache; the write lock spans each whole cache operation
    pub cache: Arc<RwLock<TtlCache<CachedNotes>>>,
    /// Request rate limiter
    pub limiter: Arc<SlidingWindowLimiter>,
    /// TTL applied to cached reads
    pub cache_ttl_secs: u64,
}

impl AppState {
    /// Creates a new AppState from already-built components.
    pub fn new(
        repo: NotesRepository,
        cache: TtlCache<CachedNotes>,
        limiter: SlidingWindowLimiter,
        cache_ttl_secs: u64,
    ) -> Self {
        Self {
            repo,
            cache: Arc::new(RwLock::new(cache)),
            limiter: Arc::new(limiter),
            cache_ttl_secs,
        }
    }

    /// Creates a new AppState from configuration and a connected pool,
    /// wiring every component to the system clock.
    pub fn from_config(config: &Config, pool: sqlx::SqlitePool) -> Self {
        let clock = Arc::new(SystemClock);
        Self::new(
            NotesRepository::new(pool),
            TtlCache::new(clock.clone()),
            SlidingWindowLimiter::new(
                config.rate_limit_max_requests,
                config.rate_limit_window_secs,
                clock,
            ),
            config.cache_ttl,
        )
    }
}

// == List Notes ==
/// Handler for GET /v1/api/notes
///
/// Cache hit serves the stored list; on a miss the store is read and the
/// result cached under `notes:all`.
pub async fn list_notes(State(state): State<AppState>) -> Result<Json<NoteListResponse>> {
    {
        let mut cache = state.cache.write().await;
        if let Some(CachedNotes::List(notes)) = cache.get(NOTES_LIST_KEY) {
            debug!("serving note list from cache");
            return Ok(Json(NoteListResponse::cached(notes)));
        }
    }

    let notes = state.repo.list_all().await?;

    let mut cache = state.cache.write().await;
    cache.set(
        NOTES_LIST_KEY,
        CachedNotes::List(notes.clone()),
        Some(state.cache_ttl_secs),
    );

    Ok(Json(NoteListResponse::fresh(notes)))
}

// == Get Note ==
/// Handler for GET /v1/api/notes/:id
pub async fn get_note(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<NoteDetailResponse>> {
    let id = parse_note_id(&id)?;
    let key = note_cache_key(&id);

    {
        let mut cache = state.cache.write().await;
        if let Some(CachedNotes::Single(note)) = cache.get(&key) {
            debug!(%id, "serving note from cache");
            return Ok(Json(NoteDetailResponse::cached(note)));
        }
    }

    let note = state.repo.find_by_id(id).await?.ok_or(ApiError::NotFound)?;

    let mut cache = state.cache.write().await;
    cache.set(
        key,
        CachedNotes::Single(note.clone()),
        Some(state.cache_ttl_secs),
    );

    Ok(Json(NoteDetailResponse::fresh(note)))
}

// == Create Note ==
/// Handler for POST /v1/api/notes
///
/// Rejects duplicates (identical title and content) with 409. The list key is
/// invalidated once the insert has succeeded.
pub async fn create_note(
    State(state): State<AppState>,
    Json(payload): Json<NotePayload>,
) -> Result<(StatusCode, Json<NoteMutationResponse>)> {
    let input = payload.validate().map_err(ApiError::Validation)?;

    if state
        .repo
        .find_duplicate(&input.title, &input.content)
        .await?
    {
        return Err(ApiError::DuplicateNote);
    }

    let note = state.repo.insert(&input.title, &input.content).await?;

    state.cache.write().await.del(NOTES_LIST_KEY);

    Ok((StatusCode::CREATED, Json(NoteMutationResponse::created(note))))
}

// == Update Note ==
/// Handler for PUT /v1/api/notes/:id
///
/// Invalidates both the list key and the note's own key after the update.
pub async fn update_note(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<NotePayload>,
) -> Result<Json<NoteMutationResponse>> {
    let id = parse_note_id(&id)?;
    let input = payload.validate().map_err(ApiError::Validation)?;

    let note = state
        .repo
        .update(id, &input.title, &input.content)
        .await?
        .ok_or(ApiError::NotFound)?;

    invalidate_note(&state, &id).await;

    Ok(Json(NoteMutationResponse::updated(note)))
}

// == Delete Note ==
/// Handler for DELETE /v1/api/notes/:id
pub async fn delete_note(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<NoteMutationResponse>> {
    let id = parse_note_id(&id)?;

    let note = state.repo.delete(id).await?.ok_or(ApiError::NotFound)?;

    invalidate_note(&state, &id).await;

    Ok(Json(NoteMutationResponse::deleted(note)))
}

// == Health ==
/// Handler for GET /health
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}

// == Helpers ==
fn parse_note_id(raw: &str) -> Result<Uuid> {
    Uuid::parse_str(raw).map_err(|_| ApiError::InvalidId)
}

/// Drops the aggregate key and the per-id key. Called only after the store
/// write has returned, so a stale value cannot be re-cached from a pre-write
/// read of this request.
async fn invalidate_note(state: &AppState, id: &Uuid) {
    let mut cache = state.cache.write().await;
    cache.del(NOTES_LIST_KEY);
    cache.del(&note_cache_key(id));
}
