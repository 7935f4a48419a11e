use crate::models::{Category, ContentItem, Level, UserPreferences};

/// Upper bound on the number of recommended items
pub const MAX_RECOMMENDATIONS: usize = 3;

/// Whether a catalog item should be recommended for the given preferences
///
/// An item matches when its category is one of the user's interests, when the
/// user is a beginner and the item covers the basics, or when the user is
/// advanced and the item is a case study or a regulatory update.
pub fn matches(item: &ContentItem, preferences: &UserPreferences) -> bool {
    preferences.has_interest(item.category.as_str())
        || (preferences.level == Level::Beginner && item.category == Category::Basics)
        || (preferences.level == Level::Advanced
            && matches!(item.category, Category::CaseStudies | Category::Updates))
}

/// Generates personalized content recommendations
///
/// Walks the catalog in order and keeps the first [`MAX_RECOMMENDATIONS`]
/// matching items. Pure: the same inputs always produce the same output.
pub fn recommend(catalog: &[ContentItem], preferences: &UserPreferences) -> Vec<ContentItem> {
    catalog
        .iter()
        .filter(|item| matches(item, preferences))
        .take(MAX_RECOMMENDATIONS)
        .cloned()
        .collect()
}
