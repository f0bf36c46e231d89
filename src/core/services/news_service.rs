use std::sync::Arc;

use salvo::async_trait;
use serde_json::Value;

use crate::core::catalog;
use crate::core::errors::{AppError, UpstreamError};
use crate::interface::http::{AppResult, Envelope};

pub const DEFAULT_QUERY: &str = "world";
pub const DEFAULT_PAGE: i64 = 1;

/// A validated call to the upstream news API. Carries no credentials.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpstreamRequest {
    Search {
        query: String,
        page: i64,
        language: Option<String>,
        country: Option<String>,
    },
    Headlines {
        category: Option<&'static str>,
        page: i64,
        country: Option<String>,
        language: Option<String>,
    },
}

impl UpstreamRequest {
    /// Path segment under the upstream base URL.
    pub fn endpoint(&self) -> &'static str {
        match self {
            Self::Search { .. } => "search",
            Self::Headlines { .. } => "top-headlines",
        }
    }
}

/// Port for the third-party news API.
#[async_trait]
pub trait NewsProvider: Send + Sync {
    /// One attempt, no retry. Non-2xx answers are errors.
    async fn fetch(&self, request: &UpstreamRequest) -> Result<Value, UpstreamError>;
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchParams {
    pub query: Option<String>,
    pub language: Option<String>,
    pub country: Option<String>,
    pub page: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeadlinesParams {
    pub category: Option<String>,
    pub country: Option<String>,
    pub language: Option<String>,
    pub page: i64,
}

#[derive(Clone)]
pub struct NewsGateway {
    provider: Arc<dyn NewsProvider>,
}

impl NewsGateway {
    pub fn new(provider: Arc<dyn NewsProvider>) -> Self {
        Self { provider }
    }

    pub async fn search(&self, params: SearchParams) -> AppResult<Envelope> {
        let language = non_empty(params.language);
        let country = non_empty(params.country);
        check_codes(language.as_deref(), country.as_deref())?;

        let request = UpstreamRequest::Search {
            query: non_empty(params.query).unwrap_or_else(|| DEFAULT_QUERY.to_string()),
            page: params.page,
            language,
            country,
        };
        Ok(self.forward(request).await)
    }

    pub async fn headlines(&self, params: HeadlinesParams) -> AppResult<Envelope> {
        let language = non_empty(params.language);
        let country = non_empty(params.country);
        check_codes(language.as_deref(), country.as_deref())?;

        let request = UpstreamRequest::Headlines {
            category: non_empty(params.category).map(|c| catalog::resolve_category(&c)),
            page: params.page,
            country,
            language,
        };
        Ok(self.forward(request).await)
    }

    async fn forward(&self, request: UpstreamRequest) -> Envelope {
        let result = self.provider.fetch(&request).await;
        if let Err(e) = &result {
            tracing::error!(
                endpoint = request.endpoint(),
                error = %e,
                detail = %e.log_detail(),
                "upstream request failed"
            );
        }
        Envelope::from(result)
    }
}

/// Language first, then country. Absent codes are not checked.
fn check_codes(language: Option<&str>, country: Option<&str>) -> AppResult<()> {
    if let Some(language) = language {
        if !catalog::is_supported_language(language) {
            return Err(AppError::UnsupportedLanguage(language.to_string()));
        }
    }
    if let Some(country) = country {
        if !catalog::is_supported_country(country) {
            return Err(AppError::UnsupportedCountry(country.to_string()));
        }
    }
    Ok(())
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}
