use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt::Display;

use super::BASELINE_LANGUAGE;

/// Self-reported experience level
///
/// Values outside the three known levels are kept verbatim in `Other` rather
/// than rejected, so whatever the client sent round-trips unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Level {
    #[default]
    Unset,
    Beginner,
    Intermediate,
    Advanced,
    Other(String),
}

impl From<String> for Level {
    fn from(value: String) -> Self {
        match value.as_str() {
            "" => Level::Unset,
            "Beginner" => Level::Beginner,
            "Intermediate" => Level::Intermediate,
            "Advanced" => Level::Advanced,
            _ => Level::Other(value),
        }
    }
}

impl From<&str> for Level {
    fn from(value: &str) -> Self {
        Level::from(value.to_string())
    }
}

impl From<Level> for String {
    fn from(level: Level) -> Self {
        match level {
            Level::Other(value) => value,
            known => known.to_string(),
        }
    }
}

impl Display for Level {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Level::Unset => Ok(()),
            Level::Beginner => write!(f, "Beginner"),
            Level::Intermediate => write!(f, "Intermediate"),
            Level::Advanced => write!(f, "Advanced"),
            Level::Other(value) => write!(f, "{}", value),
        }
    }
}

/// Replacement of a single preference field
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "key", content = "value", rename_all = "snake_case")]
pub enum PreferenceUpdate {
    Sport(String),
    Level(Level),
    Interests(BTreeSet<String>),
    Languages(BTreeSet<String>),
}

impl PreferenceUpdate {
    /// Name of the field this update replaces
    pub fn key(&self) -> &'static str {
        match self {
            PreferenceUpdate::Sport(_) => "sport",
            PreferenceUpdate::Level(_) => "level",
            PreferenceUpdate::Interests(_) => "interests",
            PreferenceUpdate::Languages(_) => "languages",
        }
    }
}

/// Preferences that drive content recommendations
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserPreferences {
    /// Selected sport, empty when none
    pub sport: String,
    pub level: Level,
    /// Category names the user is interested in
    pub interests: BTreeSet<String>,
    /// Preferred language codes
    pub languages: BTreeSet<String>,
}

impl Default for UserPreferences {
    fn default() -> Self {
        Self::new()
    }
}

impl UserPreferences {
    /// Creates preferences with nothing selected and the baseline language
    pub fn new() -> Self {
        Self {
            sport: String::new(),
            level: Level::Unset,
            interests: BTreeSet::new(),
            languages: BTreeSet::from([BASELINE_LANGUAGE.to_string()]),
        }
    }

    /// Replaces the named field, leaving the others untouched. Never fails.
    pub fn update(&mut self, update: PreferenceUpdate) {
        match update {
            PreferenceUpdate::Sport(sport) => self.sport = sport,
            PreferenceUpdate::Level(level) => self.level = level,
            PreferenceUpdate::Interests(interests) => self.interests = interests,
            PreferenceUpdate::Languages(languages) => self.languages = languages,
        }
    }

    pub fn has_interest(&self, category: &str) -> bool {
        self.interests.contains(category)
    }
}
