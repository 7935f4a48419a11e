use serde::Serialize;
use std::fmt::Display;

/// Topic a piece of educational content belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Category {
    Basics,
    Substances,
    Rules,
    #[serde(rename = "Case Studies")]
    CaseStudies,
    Updates,
    Nutrition,
    Testing,
    Wellness,
}

impl Category {
    /// Display name, which is also the name users select as an interest
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Basics => "Basics",
            Category::Substances => "Substances",
            Category::Rules => "Rules",
            Category::CaseStudies => "Case Studies",
            Category::Updates => "Updates",
            Category::Nutrition => "Nutrition",
            Category::Testing => "Testing",
            Category::Wellness => "Wellness",
        }
    }
}

impl Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Media format of a content item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ContentType {
    Video,
    Article,
    #[serde(rename = "Interactive Guide")]
    InteractiveGuide,
    Podcast,
    #[serde(rename = "PDF")]
    Pdf,
}

/// A single entry of the educational catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContentItem {
    pub id: u32,
    pub title: &'static str,
    #[serde(rename = "type")]
    pub content_type: ContentType,
    /// Human-readable length, e.g. "15 min read"
    pub duration: &'static str,
    pub category: Category,
}

/// The fixed, ordered content catalog
pub static CATALOG: &[ContentItem] = &[
    ContentItem {
        id: 1,
        title: "Introduction to Anti-Doping",
        content_type: ContentType::Video,
        duration: "10 min",
        category: Category::Basics,
    },
    ContentItem {
        id: 2,
        title: "Common Prohibited Substances",
        content_type: ContentType::Article,
        duration: "15 min read",
        category: Category::Substances,
    },
    ContentItem {
        id: 3,
        title: "Athlete Rights and Responsibilities",
        content_type: ContentType::InteractiveGuide,
        duration: "20 min",
        category: Category::Rules,
    },
    ContentItem {
        id: 4,
        title: "Case Study: Accidental Doping",
        content_type: ContentType::Podcast,
        duration: "25 min",
        category: Category::CaseStudies,
    },
    ContentItem {
        id: 5,
        title: "Latest WADA Guidelines",
        content_type: ContentType::Pdf,
        duration: "30 min read",
        category: Category::Updates,
    },
    ContentItem {
        id: 6,
        title: "Nutritional Supplements and Risks",
        content_type: ContentType::Video,
        duration: "12 min",
        category: Category::Nutrition,
    },
    ContentItem {
        id: 7,
        title: "Out-of-Competition Testing Procedures",
        content_type: ContentType::Article,
        duration: "18 min read",
        category: Category::Testing,
    },
    ContentItem {
        id: 8,
        title: "Mental Health and Doping Prevention",
        content_type: ContentType::Podcast,
        duration: "22 min",
        category: Category::Wellness,
    },
];

/// Categories offered as interest checkboxes
pub const SELECTABLE_INTERESTS: &[Category] = &[
    Category::Basics,
    Category::Substances,
    Category::Rules,
    Category::Nutrition,
    Category::Testing,
    Category::Wellness,
];

/// Sports offered in the preference picker. Not enforced on update.
pub const SELECTABLE_SPORTS: &[&str] = &["athletics", "swimming", "cycling"];

/// Headlines shown in the updates section
pub const RECENT_UPDATES: &[&str] = &[
    "New WADA prohibited list published",
    "Upcoming webinar on nutritional supplements",
    "Changes to out-of-competition testing procedures",
];

/// Looks up a catalog entry by id
pub fn find_content(id: u32) -> Option<&'static ContentItem> {
    CATALOG.iter().find(|item| item.id == id)
}
