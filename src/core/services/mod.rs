pub mod news_service;

pub use news_service::{HeadlinesParams, NewsGateway, NewsProvider, SearchParams, UpstreamRequest};
