use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::RwLock;
use uuid::Uuid;

use crate::error::{AppError, AppResult};
use crate::services::{ChatCollaborator, Session};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub inner: Arc<RwLock<AppStateInner>>,
    /// Backend that answers chat messages
    pub collaborator: Arc<dyn ChatCollaborator>,
}

/// Inner state that can be modified
#[derive(Default)]
pub struct AppStateInner {
    pub sessions: HashMap<Uuid, Session>,
}

impl AppStateInner {
    pub fn session(&self, id: Uuid) -> AppResult<&Session> {
        self.sessions
            .get(&id)
            .ok_or_else(|| AppError::NotFound(format!("session {}", id)))
    }

    pub fn session_mut(&mut self, id: Uuid) -> AppResult<&mut Session> {
        self.sessions
            .get_mut(&id)
            .ok_or_else(|| AppError::NotFound(format!("session {}", id)))
    }
}

impl AppState {
    /// Creates application state with no sessions
    pub fn new(collaborator: Arc<dyn ChatCollaborator>) -> Self {
        Self {
            inner: Arc::new(RwLock::new(AppStateInner::default())),
            collaborator,
        }
    }
}
