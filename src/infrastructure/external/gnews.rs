use salvo::async_trait;
use serde_json::Value;
use url::Url;

use crate::core::errors::UpstreamError;
use crate::core::services::{NewsProvider, UpstreamRequest};
use crate::infrastructure::config::GNewsConfig;


/// GNews v4 client. One pooled connection set shared by every request.
pub struct GNewsAdapter {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl GNewsAdapter {
    pub fn new(config: &GNewsConfig) -> anyhow::Result<Self> {
        let http = reqwest::Client::builder()
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()?;
        // Validate once here so a bad base_url fails at startup, not per request.
        Url::parse(&config.base_url)?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
        })
    }

    /// Full upstream URL including the key. Never log the result.
    pub fn build_url(&self, request: &UpstreamRequest) -> Result<Url, UpstreamError> {
        let mut url = Url::parse(&format!("{}/{}", self.base_url, request.endpoint()))
            .map_err(|e| UpstreamError::Transport(e.to_string()))?;
        {
            let mut pairs = url.query_pairs_mut();
            match request {
                UpstreamRequest::Search { query, page, language, country } => {
                    pairs.append_pair("q", query);
                    pairs.append_pair("page", &page.to_string());
                    pairs.append_pair("apikey", &self.api_key);
                    if let Some(language) = language {
                        pairs.append_pair("lang", language);
                    }
                    if let Some(country) = country {
                        pairs.append_pair("country", country);
                    }
                }
                UpstreamRequest::Headlines { category, page, country, language } => {
                    pairs.append_pair("page", &page.to_string());
                    pairs.append_pair("apikey", &self.api_key);
                    if let Some(category) = category {
                        pairs.append_pair("category", category);
                    }
                    if let Some(country) = country {
                        pairs.append_pair("country", country);
                    }
                    if let Some(language) = language {
                        pairs.append_pair("lang", language);
                    }
                }
            }
        }
        Ok(url)
    }
}

#[async_trait]
impl NewsProvider for GNewsAdapter {
    async fn fetch(&self, request: &UpstreamRequest) -> Result<Value, UpstreamError> {
        let url = self.build_url(request)?;
        tracing::debug!(endpoint = request.endpoint(), "calling upstream");

        // reqwest errors embed the URL, and with it the key.
        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| UpstreamError::Transport(e.without_url().to_string()))?;
        let status = response.status();
        let bytes = response
            .bytes()
            .await
            .map_err(|e| UpstreamError::Transport(e.without_url().to_string()))?;
        let body = decode_body(&bytes);

        if status.is_success() {
            Ok(body)
        } else {
            Err(UpstreamError::Status { status: status.as_u16(), body })
        }
    }
}

/// JSON when it parses, otherwise the raw text as a JSON string.
fn decode_body(bytes: &[u8]) -> Value {
    serde_json::from_slice(bytes)
        .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(bytes).into_owned()))
}

#[cfg(test)]
mod tests {
    use httpmock::prelude::*;
    use serde_json::json;

    use super::*;

    fn adapter(base_url: &str) -> GNewsAdapter {
        GNewsAdapter::new(&GNewsConfig {
            api_key: "test-key".into(),
            base_url: base_url.into(),
        })
        .unwrap()
    }

    fn elections() -> UpstreamRequest {
        UpstreamRequest::Search {
            query: "elections".into(),
            page: 2,
            language: Some("fr".into()),
            country: Some("fr".into()),
        }
    }

    #[test]
    fn search_url_carries_every_parameter() {
        let url = adapter("https://gnews.io/api/v4/").build_url(&elections()).unwrap();
        assert_eq!(
            url.as_str(),
            "https://gnews.io/api/v4/search?q=elections&page=2&apikey=test-key&lang=fr&country=fr"
        );
    }

    #[test]
    fn headlines_url_omits_absent_parameters() {
        let request = UpstreamRequest::Headlines {
            category: Some("general"),
            page: -1,
            country: None,
            language: Some("en".into()),
        };
        let url = adapter("https://gnews.io/api/v4").build_url(&request).unwrap();
        assert_eq!(
            url.as_str(),
            "https://gnews.io/api/v4/top-headlines?page=-1&apikey=test-key&category=general&lang=en"
        );
    }

    #[test]
    fn free_text_query_is_encoded() {
        let request = UpstreamRequest::Search {
            query: "climate & energy".into(),
            page: 1,
            language: None,
            country: None,
        };
        let url = adapter("https://gnews.io/api/v4").build_url(&request).unwrap();
        let q: Vec<_> = url.query_pairs().filter(|(k, _)| k == "q").map(|(_, v)| v.into_owned()).collect();
        assert_eq!(q, vec!["climate & energy".to_string()]);
    }

    #[test]
    fn invalid_base_url_is_rejected_at_construction() {
        let result = GNewsAdapter::new(&GNewsConfig {
            api_key: "k".into(),
            base_url: "not a url".into(),
        });
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn success_body_is_returned_untouched() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(GET)
                    .path("/search")
                    .query_param("q", "elections")
                    .query_param("page", "2")
                    .query_param("apikey", "test-key")
                    .query_param("lang", "fr")
                    .query_param("country", "fr");
                then.status(200)
                    .header("content-type", "application/json")
                    .json_body(json!({"totalArticles": 1, "articles": [{"title": "Vote"}]}));
            })
            .await;

        let body = adapter(&server.base_url()).fetch(&elections()).await.unwrap();

        mock.assert_async().await;
        assert_eq!(body, json!({"totalArticles": 1, "articles": [{"title": "Vote"}]}));
    }

    #[tokio::test]
    async fn non_2xx_carries_upstream_body() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/top-headlines");
                then.status(403)
                    .header("content-type", "application/json")
                    .json_body(json!({"errors": ["You have reached your request limit for today."]}));
            })
            .await;

        let request = UpstreamRequest::Headlines {
            category: None,
            page: 1,
            country: None,
            language: None,
        };
        let err = adapter(&server.base_url()).fetch(&request).await.unwrap_err();

        match err {
            UpstreamError::Status { status, body } => {
                assert_eq!(status, 403);
                assert_eq!(body, json!({"errors": ["You have reached your request limit for today."]}));
            }
            other => panic!("expected status error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn plain_text_error_body_becomes_json_string() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/search");
                then.status(502).body("Bad Gateway");
            })
            .await;

        let err = adapter(&server.base_url()).fetch(&elections()).await.unwrap_err();
        assert_eq!(err.into_detail(), json!("Bad Gateway"));
    }

    #[tokio::test]
    async fn unreachable_upstream_is_a_transport_error_without_key() {
        // Port 1 is reserved and nothing listens on it.
        let err = adapter("http://127.0.0.1:1").fetch(&elections()).await.unwrap_err();

        match err {
            UpstreamError::Transport(message) => {
                assert!(!message.is_empty());
                assert!(!message.contains("test-key"));
            }
            other => panic!("expected transport error, got {other:?}"),
        }
    }
}
