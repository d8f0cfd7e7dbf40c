//! REPL (Read-Eval-Print Loop) for interactive questions

use colored::Colorize;
use podlens_application::DispatchCommand;
use rustyline::error::ReadlineError;
use rustyline::{DefaultEditor, Result as RlResult};
use std::path::PathBuf;
use tokio::sync::mpsc;

/// Interactive question prompt
///
/// The prompt only reads input. Every line becomes a [`DispatchCommand`]
/// for the control task, so typing continues while a query is running.
pub struct ChatRepl {
    commands: mpsc::UnboundedSender<DispatchCommand>,
    history_path: Option<PathBuf>,
}

impl ChatRepl {
    /// Create a prompt feeding the given control task inbox
    pub fn new(commands: mpsc::UnboundedSender<DispatchCommand>) -> Self {
        Self {
            commands,
            history_path: None,
        }
    }

    /// Set where line history is loaded from and saved to
    pub fn with_history_path(mut self, path: Option<PathBuf>) -> Self {
        self.history_path = path;
        self
    }

    /// Run the interactive REPL until `/quit`, EOF or a closed inbox.
    ///
    /// Line editing blocks, so it runs on the blocking pool.
    pub async fn run(self) -> RlResult<()> {
        tokio::task::spawn_blocking(move || self.run_blocking())
            .await
            .map_err(|e| ReadlineError::Io(std::io::Error::other(e)))?
    }

    fn run_blocking(self) -> RlResult<()> {
        let mut rl = DefaultEditor::new()?;

        if let Some(ref path) = self.history_path {
            if let Some(parent) = path.parent() {
                let _ = std::fs::create_dir_all(parent);
            }
            let _ = rl.load_history(path);
        }

        Self::print_welcome();

        loop {
            match rl.readline("? ") {
                Ok(line) => {
                    let trimmed = line.trim();
                    if !trimmed.is_empty() && !trimmed.starts_with('/') {
                        let _ = rl.add_history_entry(trimmed);
                    }
                    if self.handle_line(line) {
                        break;
                    }
                }
                Err(ReadlineError::Interrupted) => {
                    println!("^C");
                    continue;
                }
                Err(ReadlineError::Eof) => {
                    println!("Bye!");
                    break;
                }
                Err(err) => {
                    eprintln!("Error: {:?}", err);
                    break;
                }
            }
        }

        let _ = self.commands.send(DispatchCommand::Shutdown);

        if let Some(ref path) = self.history_path {
            let _ = rl.save_history(path);
        }

        Ok(())
    }

    fn print_welcome() {
        println!();
        println!("╭─────────────────────────────────────────────╮");
        println!("│            podlens - Chat Mode              │");
        println!("╰─────────────────────────────────────────────╯");
        println!();
        println!("Type a question and press Enter.");
        Self::print_help();
    }

    fn print_help() {
        println!();
        println!("Commands:");
        println!("  /help, /h, /?   - Show this help");
        println!("  /clear          - Clear the answer list");
        println!("  /quit, /exit    - Exit chat");
        println!();
    }

    /// Handle one input line. Returns true if should exit.
    fn handle_line(&self, line: String) -> bool {
        let trimmed = line.trim();
        if trimmed.starts_with('/') {
            return self.handle_command(trimmed);
        }
        // Sent exactly as typed, blank lines included
        !self.send(DispatchCommand::Submit(line))
    }

    /// Handle slash commands. Returns true if should exit.
    fn handle_command(&self, cmd: &str) -> bool {
        match cmd {
            "/quit" | "/exit" | "/q" => {
                println!("Bye!");
                true
            }
            "/help" | "/h" | "/?" => {
                Self::print_help();
                false
            }
            "/clear" => {
                if !self.send(DispatchCommand::Clear) {
                    return true;
                }
                println!("{}", "Cleared.".dimmed());
                false
            }
            _ => {
                println!("Unknown command: {}", cmd);
                println!("Type /help for available commands");
                false
            }
        }
    }

    /// False once the control task has stopped listening
    fn send(&self, command: DispatchCommand) -> bool {
        self.commands.send(command).is_ok()
    }
}
