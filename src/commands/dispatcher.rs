use super::{
    ShellState,
    handler::{
        AdvisorCommand, BestCommand, HelpCommand, OpenCommand, QuitCommand, SearchCommand,
        ShowCommand, StoreCommand,
    },
    registry::CommandRegistry,
};
use crate::core::error::ScoutError;
use std::sync::Arc;

#[derive(Clone)]
pub struct CommandDispatcher {
    registry: Arc<CommandRegistry>,
}

impl CommandDispatcher {
    pub fn new(registry: Arc<CommandRegistry>) -> Self {
        Self { registry }
    }

    pub async fn execute(
        &self,
        command: &str,
        args: &[&str],
        state: &mut ShellState,
    ) -> Result<Option<String>, ScoutError> {
        self.registry.execute(command, args, state).await
    }

    /// Runs a `/command arg...` line.
    pub async fn execute_line(
        &self,
        line: &str,
        state: &mut ShellState,
    ) -> Result<Option<String>, ScoutError> {
        let parts: Vec<&str> = line.trim_start_matches('/').split_whitespace().collect();
        match parts.split_first() {
            Some((command, args)) => self.execute(command, args, state).await,
            None => Ok(None),
        }
    }

    pub fn get_command_names(&self) -> Vec<String> {
        self.registry.get_command_names()
    }
}

pub fn create_command_registry() -> CommandDispatcher {
    let mut registry = CommandRegistry::new();

    registry.register("quit", QuitCommand);
    registry.register("help", HelpCommand);
    registry.register("search", SearchCommand);
    registry.register("store", StoreCommand);
    registry.register("advisor", AdvisorCommand);
    registry.register("best", BestCommand);
    registry.register("show", ShowCommand);
    registry.register("open", OpenCommand);

    CommandDispatcher::new(Arc::new(registry))
}
