//! Search/advisor session state.
//!
//! A [`Session`] owns the current catalog, the chat transcript and the
//! active tab. All changes go through its transition methods:
//! [`Session::submit`] for searches, [`Session::send`] for advisor
//! messages and [`Session::set_mode`] for tab switches. Searches and chat
//! messages are each single-flight; the `begin_*`/`finish_*` pairs expose
//! the two halves for callers that drive the request themselves.

pub mod catalog;
pub mod chat;
pub mod search;
pub mod view;

#[cfg(test)]
pub(crate) mod testing;

pub use catalog::Catalog;
pub use chat::{ChatOutcome, Message, Role};
pub use view::Mode;

use chat::ChatPhase;
use search::SearchPhase;
use view::ViewState;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Session {
    catalog: Catalog,
    transcript: Vec<Message>,
    search: SearchPhase,
    chat: ChatPhase,
    view: ViewState,
    /// Bumped by every search so late chat replies can tell their catalog
    /// is gone.
    generation: u64,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }
}
