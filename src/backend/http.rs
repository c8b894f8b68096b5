use super::types::{ChatRequest, ChatResponse, Product, SearchRequest, SearchResponse};
use super::ShopBackend;
use crate::core::error::ScoutError;
use async_trait::async_trait;
use reqwest::{Client, Response};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::debug;

#[derive(Clone)]
pub struct HttpClient {
    base_url: String,
    client: Client,
}

impl HttpClient {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, ScoutError> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    pub async fn post<T: Serialize + ?Sized>(
        &self,
        path: &str,
        payload: &T,
    ) -> Result<Response, ScoutError> {
        let url = self.url(path);
        debug!(%url, "POST");

        let response = self
            .client
            .post(&url)
            .header("Content-Type", "application/json")
            .json(payload)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ScoutError::Api(format!("{} returned {}: {}", url, status, body)));
        }

        Ok(response)
    }

    /// Posts `payload` and decodes the JSON body of a successful response.
    pub async fn post_json<T: Serialize + ?Sized, R: DeserializeOwned>(
        &self,
        path: &str,
        payload: &T,
    ) -> Result<R, ScoutError> {
        let response = self.post(path, payload).await?;
        let body = response.text().await?;
        let parsed = serde_json::from_str(&body)?;
        Ok(parsed)
    }
}

/// Backend reached over HTTP at `{base_url}/api/search` and `{base_url}/api/chat`.
#[derive(Clone)]
pub struct HttpBackend {
    client: HttpClient,
}

impl HttpBackend {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, ScoutError> {
        Ok(Self {
            client: HttpClient::new(base_url, timeout)?,
        })
    }
}

#[async_trait]
impl ShopBackend for HttpBackend {
    async fn search(&self, query: &str) -> Result<SearchResponse, ScoutError> {
        self.client
            .post_json("api/search", &SearchRequest { query })
            .await
    }

    async fn chat(
        &self,
        message: &str,
        products: &[Product],
    ) -> Result<ChatResponse, ScoutError> {
        let payload = ChatRequest {
            message,
            products_context: products,
        };
        self.client.post_json("api/chat", &payload).await
    }
}
