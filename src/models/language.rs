use serde::Serialize;

/// Language code every new session starts with
pub const BASELINE_LANGUAGE: &str = "en";

/// A language a user can mark as preferred
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Language {
    pub code: &'static str,
    /// Name in the language's own script
    pub name: &'static str,
}

pub static LANGUAGES: &[Language] = &[
    Language { code: "hi", name: "हिन्दी" },
    Language { code: "bn", name: "বাংলা" },
    Language { code: "te", name: "తెలుగు" },
    Language { code: "ta", name: "தமிழ்" },
    Language { code: "mr", name: "मराठी" },
    Language { code: "gu", name: "ગુજરાતી" },
    Language { code: "kn", name: "ಕನ್ನಡ" },
    Language { code: "ml", name: "മലയാളം" },
    Language { code: "or", name: "ଓଡ଼ିଆ" },
    Language { code: "pa", name: "ਪੰਜਾਬੀ" },
    Language { code: "as", name: "অসমীয়া" },
    Language { code: "sd", name: "سنڌي" },
    Language { code: "bh", name: "भोजपुरी" },
    Language { code: "san", name: "संस्कृत" },
    Language { code: "ur", name: "اردو" },
];
