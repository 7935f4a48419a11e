pub mod chat;
pub mod content;
pub mod language;
pub mod section;
pub mod user_preferences;

pub use chat::{ChatMessage, FALLBACK_REPLY, GREETING};
pub use content::{
    find_content, Category, ContentItem, ContentType, CATALOG, RECENT_UPDATES,
    SELECTABLE_INTERESTS, SELECTABLE_SPORTS,
};
pub use language::{Language, BASELINE_LANGUAGE, LANGUAGES};
pub use section::{Activity, Progress, Section};
pub use user_preferences::{Level, PreferenceUpdate, UserPreferences};
