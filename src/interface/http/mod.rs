// src/interface/http/mod.rs


use salvo::oapi::{self, EndpointOutRegister, ToSchema};
use salvo::prelude::*;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use crate::core::errors::{AppError, UpstreamError};


pub type AppResult<T> = Result<T, AppError>;

pub const FETCHED_MESSAGE: &str = "Successfully fetched the data";
pub const FAILED_MESSAGE: &str = "Failed to fetch data from the API";

/// Uniform body of every proxied call. The HTTP status always equals `status`.
#[derive(Serialize, Deserialize, ToSchema, Clone, Debug, PartialEq)]
pub struct Envelope {
    pub status: u16,
    pub success: bool,
    pub message: String,
    /// Upstream body, untouched.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
    /// Upstream error body, or the transport error message.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<Value>,
}

impl Envelope {
    pub fn fetched(data: Value) -> Self {
        Self {
            status: StatusCode::OK.as_u16(),
            success: true,
            message: FETCHED_MESSAGE.into(),
            data: Some(data),
            error: None,
        }
    }

    pub fn failed(error: Value) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR.as_u16(),
            success: false,
            message: FAILED_MESSAGE.into(),
            data: None,
            error: Some(error),
        }
    }
}

impl From<Result<Value, UpstreamError>> for Envelope {
    fn from(result: Result<Value, UpstreamError>) -> Self {
        match result {
            Ok(data) => Self::fetched(data),
            Err(e) => Self::failed(e.into_detail()),
        }
    }
}

#[async_trait]
impl Writer for Envelope {
    async fn write(self, _req: &mut Request, _depot: &mut Depot, res: &mut Response) {
        let code = StatusCode::from_u16(self.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        res.status_code(code);
        res.render(Json(self));
    }
}

impl EndpointOutRegister for Envelope {
    fn register(components: &mut oapi::Components, operation: &mut oapi::Operation) {
        let schema = Self::to_schema(components);

        operation.responses.insert(
            StatusCode::OK.as_str(),
            oapi::Response::new("Upstream data wrapped in the envelope")
                .add_content("application/json", schema.clone()),
        );
        operation.responses.insert(
            StatusCode::INTERNAL_SERVER_ERROR.as_str(),
            oapi::Response::new("Upstream unreachable or answered with an error")
                .add_content("application/json", schema),
        );
    }
}

/// Body of requests refused before reaching upstream.
#[derive(Serialize, ToSchema, Clone, Debug, PartialEq)]
pub struct Rejection {
    pub success: bool,
    pub message: String,
}

impl Rejection {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
        }
    }
}
