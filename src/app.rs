use crate::cli::Args;
use crate::commands::{ShellState, dispatcher::CommandDispatcher};
use crate::core::error::ScoutError;
use crate::input;
use console::style;
use is_terminal::IsTerminal;
use std::io::{self, BufRead};
use tracing::debug;

pub struct Application {
    pub args: Args,
    pub state: ShellState,
    pub command_dispatcher: CommandDispatcher,
}

impl Application {
    pub fn new(args: Args, state: ShellState, command_dispatcher: CommandDispatcher) -> Self {
        Self {
            args,
            state,
            command_dispatcher,
        }
    }

    pub async fn run(&mut self) -> Result<(), ScoutError> {
        if let Some(query) = self.args.query.clone() {
            print_output(self.state.search(&query).await);
        }

        if let Some(question) = self.args.ask.clone() {
            return self.handle_one_shot(&question).await;
        }

        if !io::stdin().is_terminal() {
            return self.handle_piped_input().await;
        }

        self.handle_interactive().await
    }

    async fn handle_one_shot(&mut self, question: &str) -> Result<(), ScoutError> {
        if self.state.session.catalog().is_empty() {
            let reason = match self.state.session.search_error() {
                Some(err) => err.to_string(),
                None => "run a search first".to_string(),
            };
            return Err(ScoutError::Input(format!("Nothing to ask about: {}", reason)));
        }
        print_output(self.state.ask(question).await);
        Ok(())
    }

    /// Treats every line of a piped stdin as if it had been typed.
    async fn handle_piped_input(&mut self) -> Result<(), ScoutError> {
        let lines: Vec<String> = io::stdin().lock().lines().collect::<Result<_, _>>()?;
        for line in lines {
            self.handle_line(&line).await;
            if !self.state.should_continue {
                break;
            }
        }
        Ok(())
    }

    async fn handle_interactive(&mut self) -> Result<(), ScoutError> {
        println!(
            "{} Type what you are looking for. '/help' lists commands, Ctrl+D or /quit exits.",
            style("shopscout").bold().green()
        );

        let mut editor = input::create_editor(self.command_dispatcher.clone())?;

        while self.state.should_continue {
            let line = match input::read_input(&mut editor, self.state.session.mode())? {
                Some(line) => line,
                None => break,
            };
            self.handle_line(&line).await;
        }

        input::save_history(&mut editor)?;

        Ok(())
    }

    async fn handle_line(&mut self, line: &str) {
        let input = line.trim();
        if input.is_empty() {
            return;
        }

        if input.starts_with('/') {
            debug!(command = input, "running command");
            match self
                .command_dispatcher
                .execute_line(input, &mut self.state)
                .await
            {
                Ok(output) => print_output(output),
                Err(e) => eprintln!("Error executing command: {}", e),
            }
            return;
        }

        print_output(self.state.handle_text(input).await);
    }
}

fn print_output(output: Option<String>) {
    if let Some(output) = output.filter(|o| !o.is_empty()) {
        println!("{}", output);
    }
}
