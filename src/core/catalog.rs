//! Allow-lists accepted by the gateway. Built on first use and only read afterwards.

use std::collections::HashMap;
use std::sync::OnceLock;

pub const DEFAULT_CATEGORY: &str = "general";

static LANGUAGES: OnceLock<HashMap<&'static str, &'static str>> = OnceLock::new();
static COUNTRIES: OnceLock<HashMap<&'static str, &'static str>> = OnceLock::new();
static CATEGORIES: OnceLock<HashMap<&'static str, &'static str>> = OnceLock::new();

/// Language code -> display name.
pub fn languages() -> &'static HashMap<&'static str, &'static str> {
    LANGUAGES.get_or_init(|| {
        HashMap::from([
            ("ar", "Arabic"),
            ("zh", "Chinese"),
            ("nl", "Dutch"),
            ("en", "English"),
            ("fr", "French"),
            ("de", "German"),
            ("el", "Greek"),
            ("he", "Hebrew"),
            ("hi", "Hindi"),
            ("it", "Italian"),
            ("ja", "Japanese"),
            ("ml", "Malayalam"),
            ("mr", "Marathi"),
            ("no", "Norwegian"),
            ("pt", "Portuguese"),
            ("ro", "Romanian"),
            ("ru", "Russian"),
            ("es", "Spanish"),
            ("sv", "Swedish"),
            ("ta", "Tamil"),
            ("te", "Telugu"),
            ("uk", "Ukrainian"),
        ])
    })
}

/// Country code -> display name.
pub fn countries() -> &'static HashMap<&'static str, &'static str> {
    COUNTRIES.get_or_init(|| {
        HashMap::from([
            ("au", "Australia"),
            ("br", "Brazil"),
            ("ca", "Canada"),
            ("cn", "China"),
            ("eg", "Egypt"),
            ("fr", "France"),
            ("de", "Germany"),
            ("gr", "Greece"),
            ("hk", "Hong Kong"),
            ("in", "India"),
            ("ie", "Ireland"),
            ("il", "Israel"),
            ("it", "Italy"),
            ("jp", "Japan"),
            ("nl", "Netherlands"),
            ("no", "Norway"),
            ("pk", "Pakistan"),
            ("pe", "Peru"),
            ("ph", "Philippines"),
            ("pt", "Portugal"),
            ("ro", "Romania"),
            ("ru", "Russian Federation"),
            ("sg", "Singapore"),
            ("es", "Spain"),
            ("se", "Sweden"),
            ("ch", "Switzerland"),
            ("tw", "Taiwan"),
            ("ua", "Ukraine"),
            ("gb", "United Kingdom"),
            ("us", "United States"),
        ])
    })
}

/// Identity map of the upstream headline categories.
pub fn categories() -> &'static HashMap<&'static str, &'static str> {
    CATEGORIES.get_or_init(|| {
        [
            "general",
            "world",
            "nation",
            "business",
            "technology",
            "entertainment",
            "sports",
            "science",
            "health",
        ]
        .into_iter()
        .map(|c| (c, c))
        .collect()
    })
}

/// Exact-match lookup, no case folding or trimming.
pub fn is_supported_language(code: &str) -> bool {
    languages().contains_key(code)
}

pub fn is_supported_country(code: &str) -> bool {
    countries().contains_key(code)
}

/// Unknown categories fall back to [`DEFAULT_CATEGORY`] instead of being rejected.
pub fn resolve_category(category: &str) -> &'static str {
    categories().get(category).copied().unwrap_or(DEFAULT_CATEGORY)
}
