use crate::core::error::ScoutError;
use async_trait::async_trait;

pub mod http;
mod types;

pub use http::HttpBackend;
pub use types::{ChatRequest, ChatResponse, Product, SearchRequest, SearchResponse};

/// The remote search + advisor service.
///
/// Both calls are plain request/response; the advisor keeps no state
/// between calls, so every chat request carries the whole catalog.
#[async_trait]
pub trait ShopBackend: Send + Sync {
    async fn search(&self, query: &str) -> Result<SearchResponse, ScoutError>;

    async fn chat(&self, message: &str, products: &[Product])
    -> Result<ChatResponse, ScoutError>;
}
