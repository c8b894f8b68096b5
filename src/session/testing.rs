use crate::backend::{ChatResponse, Product, SearchResponse, ShopBackend};
use crate::core::error::ScoutError;
use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::Mutex;

pub fn product(title: &str, price: &str) -> Product {
    Product {
        title: title.to_string(),
        price: price.to_string(),
        source: "Shop".to_string(),
        link: format!("https://shop.example/{}", title),
        thumbnail: format!("https://img.example/{}.png", title),
        rating: 4.0,
    }
}

pub fn products(titles: &[&str]) -> Vec<Product> {
    titles
        .iter()
        .enumerate()
        .map(|(i, title)| product(title, &format!("${}", 10 * (i + 1))))
        .collect()
}

/// Backend that replays scripted responses and records every request.
#[derive(Default)]
pub struct FakeBackend {
    search_responses: Mutex<VecDeque<Result<SearchResponse, ScoutError>>>,
    chat_responses: Mutex<VecDeque<Result<ChatResponse, ScoutError>>>,
    searches: Mutex<Vec<String>>,
    chats: Mutex<Vec<(String, Vec<Product>)>>,
}

impl FakeBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_search(self, result: Result<Vec<Product>, ScoutError>) -> Self {
        self.with_search_response(result.map(|products| SearchResponse {
            products: Some(products),
        }))
    }

    pub fn with_search_response(self, result: Result<SearchResponse, ScoutError>) -> Self {
        self.search_responses.lock().unwrap().push_back(result);
        self
    }

    pub fn with_chat(self, result: Result<(&str, Option<i64>), ScoutError>) -> Self {
        let result = result.map(|(reply, recommended_index)| ChatResponse {
            reply: reply.to_string(),
            recommended_index,
        });
        self.chat_responses.lock().unwrap().push_back(result);
        self
    }

    pub fn searches(&self) -> Vec<String> {
        self.searches.lock().unwrap().clone()
    }

    pub fn chats(&self) -> Vec<(String, Vec<Product>)> {
        self.chats.lock().unwrap().clone()
    }
}

#[async_trait]
impl ShopBackend for FakeBackend {
    async fn search(&self, query: &str) -> Result<SearchResponse, ScoutError> {
        self.searches.lock().unwrap().push(query.to_string());
        self.search_responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(ScoutError::Api("no scripted search response".into())))
    }

    async fn chat(
        &self,
        message: &str,
        products: &[Product],
    ) -> Result<ChatResponse, ScoutError> {
        self.chats
            .lock()
            .unwrap()
            .push((message.to_string(), products.to_vec()));
        self.chat_responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(ScoutError::Api("no scripted chat response".into())))
    }
}
