use super::ShellState;
use crate::core::error::ScoutError;
use crate::display;
use crate::session::Mode;
use async_trait::async_trait;
use console::style;

#[async_trait]
pub trait CommandHandler: Send + Sync {
    async fn execute(
        &self,
        state: &mut ShellState,
        args: &[&str],
    ) -> Result<Option<String>, ScoutError>;
    fn help(&self) -> &'static str;
}

pub struct QuitCommand;
pub struct HelpCommand;
pub struct SearchCommand;
pub struct StoreCommand;
pub struct AdvisorCommand;
pub struct BestCommand;
pub struct ShowCommand;
pub struct OpenCommand;

const NO_CATALOG: &str = "Search for a product first.";

#[async_trait]
impl CommandHandler for QuitCommand {
    async fn execute(
        &self,
        state: &mut ShellState,
        _args: &[&str],
    ) -> Result<Option<String>, ScoutError> {
        state.should_continue = false;
        Ok(None)
    }

    fn help(&self) -> &'static str {
        "/quit - Exit shopscout"
    }
}

#[async_trait]
impl CommandHandler for HelpCommand {
    async fn execute(
        &self,
        _state: &mut ShellState,
        _args: &[&str],
    ) -> Result<Option<String>, ScoutError> {
        let title = style("Available Commands").bold().underlined();
        let help_text = vec![
            title.to_string(),
            style(SearchCommand.help()).to_string(),
            style(StoreCommand.help()).to_string(),
            style(AdvisorCommand.help()).to_string(),
            style(BestCommand.help()).to_string(),
            style(ShowCommand.help()).to_string(),
            style(OpenCommand.help()).to_string(),
            style(HelpCommand.help()).to_string(),
            style(QuitCommand.help()).to_string(),
            String::new(),
            style("Plain text is searched for on the Store tab and sent to the advisor on the Advisor tab.")
                .dim()
                .to_string(),
        ]
        .join("\n");

        Ok(Some(help_text))
    }

    fn help(&self) -> &'static str {
        "/help - Show available commands"
    }
}

#[async_trait]
impl CommandHandler for SearchCommand {
    async fn execute(
        &self,
        state: &mut ShellState,
        args: &[&str],
    ) -> Result<Option<String>, ScoutError> {
        if args.is_empty() {
            return Err(ScoutError::Input("Usage: /search <query>".to_string()));
        }
        Ok(state.search(&args.join(" ")).await)
    }

    fn help(&self) -> &'static str {
        "/search <query> - Start a new search"
    }
}

#[async_trait]
impl CommandHandler for StoreCommand {
    async fn execute(
        &self,
        state: &mut ShellState,
        _args: &[&str],
    ) -> Result<Option<String>, ScoutError> {
        if !state.session.set_mode(Mode::Store) {
            return Ok(Some(NO_CATALOG.to_string()));
        }
        Ok(Some(display::render_view(&state.session)))
    }

    fn help(&self) -> &'static str {
        "/store - Show the products found"
    }
}

#[async_trait]
impl CommandHandler for AdvisorCommand {
    async fn execute(
        &self,
        state: &mut ShellState,
        _args: &[&str],
    ) -> Result<Option<String>, ScoutError> {
        if !state.session.set_mode(Mode::Advisor) {
            return Ok(Some(NO_CATALOG.to_string()));
        }
        Ok(Some(display::render_view(&state.session)))
    }

    fn help(&self) -> &'static str {
        "/advisor - Talk to the shopping advisor"
    }
}

#[async_trait]
impl CommandHandler for BestCommand {
    async fn execute(
        &self,
        state: &mut ShellState,
        _args: &[&str],
    ) -> Result<Option<String>, ScoutError> {
        if !state.session.jump_to_recommendation() {
            return Ok(Some(
                "The advisor has not recommended anything yet.".to_string(),
            ));
        }
        Ok(Some(display::render_view(&state.session)))
    }

    fn help(&self) -> &'static str {
        "/best - Jump to the recommended product"
    }
}

#[async_trait]
impl CommandHandler for ShowCommand {
    async fn execute(
        &self,
        state: &mut ShellState,
        _args: &[&str],
    ) -> Result<Option<String>, ScoutError> {
        if state.session.catalog().is_empty() {
            return Ok(Some(NO_CATALOG.to_string()));
        }
        Ok(Some(display::render_view(&state.session)))
    }

    fn help(&self) -> &'static str {
        "/show - Redraw the current tab"
    }
}

#[async_trait]
impl CommandHandler for OpenCommand {
    async fn execute(
        &self,
        state: &mut ShellState,
        args: &[&str],
    ) -> Result<Option<String>, ScoutError> {
        let number: usize = args
            .first()
            .and_then(|a| a.parse().ok())
            .ok_or_else(|| ScoutError::Input("Usage: /open <number>".to_string()))?;

        number
            .checked_sub(1)
            .and_then(|index| display::render_product(state.session.catalog(), index))
            .map(Some)
            .ok_or_else(|| ScoutError::Input(format!("No product #{}", number)))
    }

    fn help(&self) -> &'static str {
        "/open <number> - Show details and link of a product"
    }
}
