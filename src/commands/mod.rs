pub mod dispatcher;
pub mod handler;
pub mod registry;

use crate::backend::ShopBackend;
use crate::display;
use crate::session::{ChatOutcome, Mode, Session};
use console::Term;
use std::sync::Arc;

pub use dispatcher::create_command_registry;

/// Everything an interactive command can act on.
pub struct ShellState {
    pub session: Session,
    pub backend: Arc<dyn ShopBackend>,
    pub should_continue: bool,
}

impl ShellState {
    pub fn new(backend: Arc<dyn ShopBackend>) -> Self {
        Self {
            session: Session::new(),
            backend,
            should_continue: true,
        }
    }

    /// Runs a search and returns what should be printed.
    pub async fn search(&mut self, query: &str) -> Option<String> {
        let ticket = match self.session.begin_search(query) {
            Ok(ticket) => ticket,
            Err(err) => return display::render_search_error(&err),
        };
        self.show_pending();

        let result = self.backend.search(ticket.query()).await;
        match self.session.finish_search(ticket, result).map(|_| ()) {
            Ok(()) => Some(display::render_view(&self.session)),
            Err(err) => display::render_search_error(&err),
        }
    }

    /// Sends a message to the advisor and returns what should be printed.
    pub async fn ask(&mut self, message: &str) -> Option<String> {
        let Some(ticket) = self.session.begin_send(message) else {
            return display::render_chat_outcome(&self.session, ChatOutcome::Rejected);
        };
        self.show_pending();

        let result = self.backend.chat(ticket.message(), ticket.products()).await;
        let outcome = self.session.finish_send(ticket, result);
        display::render_chat_outcome(&self.session, outcome)
    }

    fn show_pending(&self) {
        if let Some(line) = display::render_pending(&self.session) {
            let _ = Term::stderr().write_line(&line);
        }
    }

    /// Plain input goes to the advisor while its tab is open and is
    /// searched for otherwise.
    pub async fn handle_text(&mut self, input: &str) -> Option<String> {
        if self.session.mode() == Mode::Advisor && !self.session.catalog().is_empty() {
            self.ask(input).await
        } else {
            self.search(input).await
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::testing::{FakeBackend, products};

    #[tokio::test]
    async fn plain_text_follows_the_active_tab() {
        let backend = Arc::new(
            FakeBackend::new()
                .with_search(Ok(products(&["a", "b"])))
                .with_chat(Ok(("b is better", Some(1)))),
        );
        let mut state = ShellState::new(backend.clone());

        state.handle_text("keyboards").await;
        assert_eq!(backend.searches(), vec!["keyboards".to_string()]);

        state.session.set_mode(Mode::Advisor);
        let out = state.handle_text("which one?").await.unwrap();
        assert!(out.contains("b is better"));
        assert_eq!(backend.chats().len(), 1);
        assert_eq!(state.session.catalog().recommended_index(), Some(1));
    }

    #[tokio::test]
    async fn failed_search_prints_error() {
        let backend = Arc::new(FakeBackend::new().with_search(Ok(vec![])));
        let mut state = ShellState::new(backend);

        let out = state.search("nothing").await.unwrap();
        assert!(out.contains("No products found"));
    }

    #[tokio::test]
    async fn rejected_input_sends_nothing() {
        let backend = Arc::new(FakeBackend::new());
        let mut state = ShellState::new(backend.clone());

        assert_eq!(state.search("   ").await, None);
        assert_eq!(state.ask("hello").await, None);
        assert!(backend.searches().is_empty());
        assert!(backend.chats().is_empty());
        assert!(!state.session.is_searching());
        assert!(!state.session.is_chat_busy());
    }
}
