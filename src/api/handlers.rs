use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{AppError, AppResult};
use crate::models::{
    Category, ChatMessage, ContentItem, Language, PreferenceUpdate, Section, UserPreferences,
    CATALOG, LANGUAGES, RECENT_UPDATES, SELECTABLE_INTERESTS, SELECTABLE_SPORTS,
};
use crate::services::{ChatLog, PreferenceStore, Session};

use super::AppState;

// Request/Response types

#[derive(Debug, Serialize)]
pub struct ChatResponse {
    pub open: bool,
    pub typing: bool,
    pub messages: Vec<ChatMessage>,
}

impl From<&ChatLog> for ChatResponse {
    fn from(chat: &ChatLog) -> Self {
        Self {
            open: chat.is_open(),
            typing: chat.is_typing(),
            messages: chat.messages().to_vec(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct PreferencesResponse {
    pub preferences: UserPreferences,
    pub recommendations: Vec<ContentItem>,
}

impl From<&PreferenceStore> for PreferencesResponse {
    fn from(store: &PreferenceStore) -> Self {
        Self {
            preferences: store.preferences().clone(),
            recommendations: store.recommendations().to_vec(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct SessionResponse {
    pub id: Uuid,
    pub section: Section,
    pub progress: u8,
    #[serde(flatten)]
    pub preferences: PreferencesResponse,
    pub chat: ChatResponse,
}

impl From<&Session> for SessionResponse {
    fn from(session: &Session) -> Self {
        Self {
            id: session.id,
            section: session.section,
            progress: session.progress.value(),
            preferences: PreferencesResponse::from(&session.store),
            chat: ChatResponse::from(&session.chat),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct SelectSectionRequest {
    pub section: Section,
}

#[derive(Debug, Deserialize)]
#[serde(tag = "activity", rename_all = "snake_case")]
pub enum RecordProgressRequest {
    AccessContent { content_id: u32 },
    StartQuiz,
}

#[derive(Debug, Serialize)]
pub struct ProgressResponse {
    pub progress: u8,
}

#[derive(Debug, Deserialize)]
pub struct SetChatOpenRequest {
    pub open: bool,
}

#[derive(Debug, Deserialize)]
pub struct SendMessageRequest {
    pub message: String,
}

// Handlers

/// Health check endpoint
pub async fn health_check() -> StatusCode {
    StatusCode::OK
}

/// Get the full content catalog
pub async fn get_catalog() -> Json<&'static [ContentItem]> {
    Json(CATALOG)
}

/// Get the categories offered as interests
pub async fn get_interests() -> Json<&'static [Category]> {
    Json(SELECTABLE_INTERESTS)
}

/// Get the sports offered in the preference picker
pub async fn get_sports() -> Json<&'static [&'static str]> {
    Json(SELECTABLE_SPORTS)
}

/// Get the selectable languages
pub async fn get_languages() -> Json<&'static [Language]> {
    Json(LANGUAGES)
}

/// Get recent anti-doping news
pub async fn get_updates() -> Json<&'static [&'static str]> {
    Json(RECENT_UPDATES)
}

/// Start a new session
pub async fn create_session(State(state): State<AppState>) -> (StatusCode, Json<SessionResponse>) {
    let session = Session::new();
    let response = SessionResponse::from(&session);

    let mut inner = state.inner.write().await;
    inner.sessions.insert(session.id, session);
    tracing::info!(
        session_id = %response.id,
        sessions = inner.sessions.len(),
        "Session created"
    );

    (StatusCode::CREATED, Json(response))
}

/// Get a snapshot of a session
pub async fn get_session(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<SessionResponse>> {
    let inner = state.inner.read().await;
    Ok(Json(SessionResponse::from(inner.session(id)?)))
}

/// End a session and drop its state
pub async fn delete_session(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<StatusCode> {
    let mut inner = state.inner.write().await;
    inner
        .sessions
        .remove(&id)
        .ok_or_else(|| AppError::NotFound(format!("session {}", id)))?;
    tracing::info!(session_id = %id, "Session ended");
    Ok(StatusCode::NO_CONTENT)
}

/// Replace one preference field
pub async fn update_preferences(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(update): Json<PreferenceUpdate>,
) -> AppResult<Json<PreferencesResponse>> {
    let mut inner = state.inner.write().await;
    let session = inner.session_mut(id)?;

    let key = update.key();
    let recommended = session.store.update(update).len();
    tracing::info!(session_id = %id, key, recommended, "Preferences updated");

    Ok(Json(PreferencesResponse::from(&session.store)))
}

/// Get the current recommendations
pub async fn get_recommendations(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<Vec<ContentItem>>> {
    let inner = state.inner.read().await;
    Ok(Json(inner.session(id)?.store.recommendations().to_vec()))
}

/// Switch the active page section
pub async fn select_section(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<SelectSectionRequest>,
) -> AppResult<Json<SessionResponse>> {
    let mut inner = state.inner.write().await;
    let session = inner.session_mut(id)?;
    session.select_section(request.section);
    tracing::debug!(
        session_id = %id,
        section = ?request.section,
        "Section selected"
    );
    Ok(Json(SessionResponse::from(&*session)))
}

/// Record a learning activity
pub async fn record_progress(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<RecordProgressRequest>,
) -> AppResult<Json<ProgressResponse>> {
    let mut inner = state.inner.write().await;
    let session = inner.session_mut(id)?;

    match request {
        RecordProgressRequest::AccessContent { content_id } => {
            let item = session.access_content(content_id)?;
            tracing::info!(
                session_id = %id,
                content_id,
                title = item.title,
                "Content accessed"
            );
        }
        RecordProgressRequest::StartQuiz => {
            session.start_quiz();
            tracing::info!(session_id = %id, "Quiz started");
        }
    }

    Ok(Json(ProgressResponse {
        progress: session.progress.value(),
    }))
}

/// Open or close the chat widget
pub async fn set_chat_open(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<SetChatOpenRequest>,
) -> AppResult<Json<ChatResponse>> {
    let mut inner = state.inner.write().await;
    let session = inner.session_mut(id)?;
    session.chat.set_open(request.open);
    tracing::debug!(
        session_id = %id,
        open = request.open,
        "Chat visibility changed"
    );
    Ok(Json(ChatResponse::from(&session.chat)))
}

/// Send a chat message and wait for the reply
///
/// The state lock is released while the collaborator is working, so other
/// events for the same session are handled in the meantime.
pub async fn send_message(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<SendMessageRequest>,
) -> AppResult<Json<ChatResponse>> {
    let prompt = {
        let mut inner = state.inner.write().await;
        inner.session_mut(id)?.chat.begin(&request.message)
    };

    let Some(prompt) = prompt else {
        tracing::debug!(session_id = %id, "Ignoring blank chat message");
        let inner = state.inner.read().await;
        return Ok(Json(ChatResponse::from(&inner.session(id)?.chat)));
    };

    tracing::info!(
        session_id = %id,
        collaborator = state.collaborator.name(),
        "Forwarding chat message"
    );

    let outcome = state.collaborator.ask(&prompt).await;

    let mut inner = state.inner.write().await;
    match inner.sessions.get_mut(&id) {
        Some(session) => {
            session.chat.complete(outcome);
            Ok(Json(ChatResponse::from(&session.chat)))
        }
        None => {
            if let Err(e) = outcome {
                tracing::error!(
                    session_id = %id,
                    error = %e,
                    "Error generating chat response"
                );
            }
            tracing::warn!(session_id = %id, "Session ended before chat reply arrived");
            Err(AppError::NotFound(format!("session {}", id)))
        }
    }
}
