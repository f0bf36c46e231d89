use salvo::oapi::ToParameters;
use serde::Deserialize;

use crate::core::services::news_service::DEFAULT_PAGE;
use crate::core::services::{HeadlinesParams, SearchParams};

#[derive(Deserialize, ToParameters, Default, Debug)]
#[salvo(parameters(default_parameter_in = Query))]
pub struct SearchQuery {
    /// Free-text query. Defaults to "world".
    pub q: Option<String>,
    /// Two-letter language code, e.g. "en".
    pub language: Option<String>,
    /// Two-letter country code, e.g. "us".
    pub country: Option<String>,
    /// Page number. Non-numeric values are treated as 1.
    pub page: Option<String>,
}

impl From<SearchQuery> for SearchParams {
    fn from(query: SearchQuery) -> Self {
        Self {
            query: query.q,
            language: query.language,
            country: query.country,
            page: parse_page(query.page.as_deref()),
        }
    }
}

#[derive(Deserialize, ToParameters, Default, Debug)]
#[salvo(parameters(default_parameter_in = Query))]
pub struct HeadlinesQuery {
    /// general, world, nation, business, technology, entertainment, sports, science or health.
    /// Anything else is sent as "general".
    pub category: Option<String>,
    pub country: Option<String>,
    pub language: Option<String>,
    pub page: Option<String>,
}

impl From<HeadlinesQuery> for HeadlinesParams {
    fn from(query: HeadlinesQuery) -> Self {
        Self {
            category: query.category,
            country: query.country,
            language: query.language,
            page: parse_page(query.page.as_deref()),
        }
    }
}

/// Leading-integer parse: "2abc" is 2, "3.7" is 3, "-1" is -1.
/// No digits, or a value that does not fit in an i64, gives the default page.
pub fn parse_page(raw: Option<&str>) -> i64 {
    let Some(raw) = raw else {
        return DEFAULT_PAGE;
    };
    let trimmed = raw.trim_start();
    let (sign, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => ("-", &trimmed[1..]),
        Some(b'+') => ("", &trimmed[1..]),
        _ => ("", trimmed),
    };
    let digits_len = rest.bytes().take_while(u8::is_ascii_digit).count();
    if digits_len == 0 {
        return DEFAULT_PAGE;
    }
    format!("{sign}{}", &rest[..digits_len])
        .parse()
        .unwrap_or(DEFAULT_PAGE)
}
