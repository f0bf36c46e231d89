use salvo::http::StatusCode;
use salvo::oapi::{self, EndpointOutRegister, ToSchema};
use salvo::prelude::*;
use serde_json::Value;
use thiserror::Error;

use crate::interface::http::Rejection;

/// Reasons a request is answered without a usable upstream result.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Unsupported language")]
    UnsupportedLanguage(String),
    #[error("Unsupported country")]
    UnsupportedCountry(String),
    #[error("internal: `{0}`")]
    Internal(String),
}

impl AppError {
    pub fn internal<S: Into<String>>(msg: S) -> Self {
        Self::Internal(msg.into())
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::UnsupportedLanguage(_) | Self::UnsupportedCountry(_) => StatusCode::BAD_REQUEST,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

#[async_trait]
impl Writer for AppError {
    async fn write(self, _req: &mut Request, _depot: &mut Depot, res: &mut Response) {
        let code = self.status_code();
        res.status_code(code);

        let message = match &self {
            Self::UnsupportedLanguage(lang) => {
                tracing::warn!(language = %lang, "rejected unsupported language");
                self.to_string()
            }
            Self::UnsupportedCountry(country) => {
                tracing::warn!(country = %country, "rejected unsupported country");
                self.to_string()
            }
            Self::Internal(msg) => {
                tracing::error!("internal error: {}", msg);
                "Internal server error".to_string()
            }
        };

        res.render(Json(Rejection::new(message)));
    }
}

impl EndpointOutRegister for AppError {
    fn register(components: &mut oapi::Components, operation: &mut oapi::Operation) {
        let schema = Rejection::to_schema(components);

        operation.responses.insert(
            StatusCode::BAD_REQUEST.as_str(),
            oapi::Response::new("Unsupported language or country")
                .add_content("application/json", schema),
        );
    }
}

/// Why the upstream call produced no data.
#[derive(Error, Debug)]
pub enum UpstreamError {
    /// Connect, timeout or read failure. No response to relay.
    #[error("upstream transport error: {0}")]
    Transport(String),
    /// Upstream answered outside 2xx.
    #[error("upstream responded with status {status}")]
    Status { status: u16, body: Value },
}

impl UpstreamError {
    /// Text for the operational log: the upstream body for status errors.
    pub fn log_detail(&self) -> String {
        match self {
            Self::Transport(message) => message.clone(),
            Self::Status { body, .. } => body.to_string(),
        }
    }

    /// What goes into the envelope's `error` field.
    pub fn into_detail(self) -> Value {
        match self {
            Self::Transport(message) => Value::String(message),
            Self::Status { body, .. } => body,
        }
    }
}
