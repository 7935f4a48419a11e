use serde::{Deserialize, Serialize};

/// Top-level page section
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    #[default]
    Home,
    Content,
    Interactive,
    Updates,
}

/// Learning activity that advances progress
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Activity {
    AccessContent,
    StartQuiz,
}

impl Activity {
    /// Percentage points earned by completing the activity
    pub fn points(&self) -> u8 {
        match self {
            Activity::AccessContent => 10,
            Activity::StartQuiz => 15,
        }
    }
}

/// Completion percentage of the user's learning goals, capped at 100
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(transparent)]
pub struct Progress(u8);

impl Progress {
    pub const MAX: u8 = 100;

    pub fn value(&self) -> u8 {
        self.0
    }

    pub fn record(&mut self, activity: Activity) {
        self.0 = self.0.saturating_add(activity.points()).min(Self::MAX);
    }
}
