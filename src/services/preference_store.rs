use crate::models::{ContentItem, PreferenceUpdate, UserPreferences, CATALOG};

use super::recommendations;

/// Holds a session's preferences together with the recommendations derived
/// from them. Every update recomputes the recommendations from scratch.
#[derive(Debug, Clone)]
pub struct PreferenceStore {
    catalog: &'static [ContentItem],
    preferences: UserPreferences,
    recommendations: Vec<ContentItem>,
}

impl Default for PreferenceStore {
    fn default() -> Self {
        Self::new()
    }
}

impl PreferenceStore {
    /// Creates a store over the built-in catalog
    pub fn new() -> Self {
        Self::with_catalog(CATALOG)
    }

    pub fn with_catalog(catalog: &'static [ContentItem]) -> Self {
        let preferences = UserPreferences::new();
        let recommendations = recommendations::recommend(catalog, &preferences);
        Self {
            catalog,
            preferences,
            recommendations,
        }
    }

    pub fn preferences(&self) -> &UserPreferences {
        &self.preferences
    }

    pub fn recommendations(&self) -> &[ContentItem] {
        &self.recommendations
    }

    /// Replaces one preference field and refreshes the recommendations
    pub fn update(&mut self, update: PreferenceUpdate) -> &[ContentItem] {
        let key = update.key();
        self.preferences.update(update);
        self.recommendations = recommendations::recommend(self.catalog, &self.preferences);

        tracing::debug!(
            key,
            recommended = self.recommendations.len(),
            "Preferences updated"
        );

        &self.recommendations
    }
}
