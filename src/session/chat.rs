use super::Session;
use crate::backend::{ChatResponse, Product, ShopBackend};
use crate::core::error::ScoutError;
use tracing::{debug, info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    User,
    Assistant,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub role: Role,
    pub content: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ChatPhase {
    #[default]
    Idle,
    Busy,
}

/// What happened to a chat message. The transcript and the catalog already
/// reflect it; callers use this only to decide what to print.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChatOutcome {
    /// Not sent: blank message, no catalog, or a reply is still pending.
    Rejected,
    /// The advisor answered. `recommended` is the index it picked, if it
    /// picked a valid one.
    Replied { recommended: Option<usize> },
    /// The request never produced a reply.
    Failed,
    /// The reply arrived after a new search replaced the catalog.
    Stale,
}

/// A chat exchange in flight, carrying the catalog it was asked about.
#[derive(Debug)]
pub struct ChatTicket {
    message: String,
    products: Vec<Product>,
    generation: u64,
}

impl ChatTicket {
    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }
}

impl Session {
    pub fn transcript(&self) -> &[Message] {
        &self.transcript
    }

    pub fn is_chat_busy(&self) -> bool {
        self.chat == ChatPhase::Busy
    }

    /// Records the user's message and marks the chat busy.
    ///
    /// Returns `None`, touching nothing, when the message is blank, there
    /// is no catalog to talk about, or the previous message has no reply yet.
    pub fn begin_send(&mut self, message: &str) -> Option<ChatTicket> {
        if message.trim().is_empty() {
            return None;
        }
        if self.catalog.is_empty() {
            debug!("chat rejected: catalog is empty");
            return None;
        }
        if self.is_chat_busy() {
            debug!("chat rejected: waiting for previous reply");
            return None;
        }

        self.transcript.push(Message {
            role: Role::User,
            content: message.to_string(),
        });
        self.chat = ChatPhase::Busy;

        Some(ChatTicket {
            message: message.to_string(),
            products: self.catalog.items().to_vec(),
            generation: self.generation,
        })
    }

    pub fn finish_send(
        &mut self,
        ticket: ChatTicket,
        result: Result<ChatResponse, ScoutError>,
    ) -> ChatOutcome {
        self.chat = ChatPhase::Idle;

        if ticket.generation != self.generation {
            info!("dropping advisor reply for a catalog that was replaced");
            return ChatOutcome::Stale;
        }

        let response = match result {
            Ok(response) => response,
            Err(err) => {
                warn!(error = %err, "advisor request failed");
                return ChatOutcome::Failed;
            }
        };

        self.transcript.push(Message {
            role: Role::Assistant,
            content: response.reply,
        });

        let recommended = match response.recommended_index {
            Some(index) => match self.catalog.recommend(index) {
                Ok(index) => {
                    info!(index, "advisor recommended a product");
                    Some(index)
                }
                Err(err) => {
                    warn!(error = %err, "ignoring advisor recommendation");
                    None
                }
            },
            None => None,
        };

        ChatOutcome::Replied { recommended }
    }

    /// Asks the advisor about the current catalog.
    pub async fn send(&mut self, backend: &dyn ShopBackend, message: &str) -> ChatOutcome {
        let Some(ticket) = self.begin_send(message) else {
            return ChatOutcome::Rejected;
        };
        let result = backend.chat(ticket.message(), ticket.products()).await;
        self.finish_send(ticket, result)
    }
}
