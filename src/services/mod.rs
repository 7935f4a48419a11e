pub mod chat;
pub mod preference_store;
pub mod recommendations;
pub mod session;

pub use chat::{ChatCollaborator, ChatLog, GeminiClient};
pub use preference_store::PreferenceStore;
pub use session::Session;
