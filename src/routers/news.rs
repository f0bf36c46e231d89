use salvo::prelude::*;

use crate::core::errors::AppError;
use crate::core::services::NewsGateway;
use crate::interface::http::{AppResult, Envelope};
use crate::models::{HeadlinesQuery, SearchQuery};

/// Search articles by free-text query.
#[endpoint(tags("news"))]
pub async fn search(query: SearchQuery, depot: &mut Depot) -> AppResult<Envelope> {
    gateway(depot)?.search(query.into()).await
}

/// Top headlines, optionally narrowed by category, country and language.
#[endpoint(tags("news"))]
pub async fn headlines(query: HeadlinesQuery, depot: &mut Depot) -> AppResult<Envelope> {
    gateway(depot)?.headlines(query.into()).await
}

fn gateway(depot: &Depot) -> AppResult<&NewsGateway> {
    depot
        .obtain::<NewsGateway>()
        .map_err(|_| AppError::internal("news gateway is not injected"))
}
