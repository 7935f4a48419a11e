use uuid::Uuid;

use crate::{
    error::{AppError, AppResult},
    models::{find_content, Activity, ContentItem, Progress, Section},
};

use super::{chat::ChatLog, preference_store::PreferenceStore};

/// Everything one visitor's page keeps between events
#[derive(Debug, Clone)]
pub struct Session {
    pub id: Uuid,
    pub section: Section,
    pub store: PreferenceStore,
    pub progress: Progress,
    pub chat: ChatLog,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    /// Creates a fresh session on the home section
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            section: Section::default(),
            store: PreferenceStore::new(),
            progress: Progress::default(),
            chat: ChatLog::new(),
        }
    }

    pub fn select_section(&mut self, section: Section) {
        self.section = section;
    }

    /// Records that the user opened a catalog item
    pub fn access_content(&mut self, content_id: u32) -> AppResult<&'static ContentItem> {
        let item = find_content(content_id)
            .ok_or_else(|| AppError::NotFound(format!("content item {}", content_id)))?;
        self.progress.record(Activity::AccessContent);
        Ok(item)
    }

    pub fn start_quiz(&mut self) {
        self.progress.record(Activity::StartQuiz);
    }
}
