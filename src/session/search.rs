use super::Session;
use super::catalog::Catalog;
use super::chat::{Message, Role};
use crate::backend::{SearchResponse, ShopBackend};
use crate::core::error::{ScoutError, SearchError};
use tracing::{debug, info, warn};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SearchPhase {
    #[default]
    Idle,
    Pending,
    Failed(SearchError),
}

/// Proof that a search was started; handed back to [`Session::finish_search`].
#[derive(Debug)]
pub struct SearchTicket {
    query: String,
}

impl SearchTicket {
    pub fn query(&self) -> &str {
        &self.query
    }
}

pub fn found_offers_message(count: usize) -> String {
    format!("Found {} offers! Ask me which one is best.", count)
}

impl Session {
    pub fn search_phase(&self) -> &SearchPhase {
        &self.search
    }

    pub fn is_searching(&self) -> bool {
        self.search == SearchPhase::Pending
    }

    /// Error of the last completed search, if it failed.
    pub fn search_error(&self) -> Option<&SearchError> {
        match &self.search {
            SearchPhase::Failed(err) => Some(err),
            _ => None,
        }
    }

    /// Starts a search and wipes everything derived from the previous one.
    ///
    /// Nothing changes when the query is blank or another search is still
    /// outstanding.
    pub fn begin_search(&mut self, query: &str) -> Result<SearchTicket, SearchError> {
        let query = query.trim();
        if query.is_empty() {
            return Err(SearchError::EmptyQuery);
        }
        if self.is_searching() {
            debug!(query, "search rejected: another search is in flight");
            return Err(SearchError::InFlight);
        }

        info!(query, "searching");
        self.search = SearchPhase::Pending;
        self.generation += 1;
        self.catalog = Catalog::default();
        self.transcript.clear();
        self.view.reset();

        Ok(SearchTicket {
            query: query.to_string(),
        })
    }

    pub fn finish_search(
        &mut self,
        ticket: SearchTicket,
        result: Result<SearchResponse, ScoutError>,
    ) -> Result<&Catalog, SearchError> {
        let products = match result {
            Ok(response) => response.into_products(),
            Err(err) => {
                warn!(query = ticket.query(), error = %err, "search request failed");
                let err = SearchError::Transport(err.to_string());
                self.search = SearchPhase::Failed(err.clone());
                return Err(err);
            }
        };

        if products.is_empty() {
            info!(query = ticket.query(), "search returned no products");
            self.search = SearchPhase::Failed(SearchError::NoResults);
            return Err(SearchError::NoResults);
        }

        info!(query = ticket.query(), count = products.len(), "search complete");
        self.transcript.push(Message {
            role: Role::Assistant,
            content: found_offers_message(products.len()),
        });
        self.catalog = Catalog::new(products);
        self.search = SearchPhase::Idle;
        Ok(&self.catalog)
    }

    /// Runs a full search against `backend`.
    pub async fn submit(
        &mut self,
        backend: &dyn ShopBackend,
        query: &str,
    ) -> Result<&Catalog, SearchError> {
        let ticket = self.begin_search(query)?;
        let result = backend.search(ticket.query()).await;
        self.finish_search(ticket, result)
    }
}
