//! REPL (Read-Eval-Print Loop) for interactive guide generation

use crate::output::console::ConsoleFormatter;
use crate::progress::reporter::{ConsoleSink, GenerationProgress};
use rustyline::error::ReadlineError;
use rustyline::{DefaultEditor, Result as RlResult};
use std::path::PathBuf;
use studyhall_application::{GenerateGuideError, GenerateGuideUseCase};
use tracing::error;

/// The literal token that ends the loop, matched case-insensitively.
const QUIT_TOKEN: &str = "quit";

/// True if the (already trimmed) line asks to leave the loop.
fn is_quit(line: &str) -> bool {
    line.eq_ignore_ascii_case(QUIT_TOKEN)
}

/// Interactive study-guide REPL
///
/// Reads one topic per line and generates a guide for each. Nothing that
/// happens during generation ends the loop; only `quit` (or EOF) does.
pub struct StudyRepl {
    use_case: GenerateGuideUseCase,
    show_progress: bool,
    quiet: bool,
    history_file: Option<PathBuf>,
}

impl StudyRepl {
    /// Create a new StudyRepl
    pub fn new(use_case: GenerateGuideUseCase) -> Self {
        Self {
            use_case,
            show_progress: true,
            quiet: false,
            history_file: None,
        }
    }

    /// Set whether to show a spinner on the non-streaming path
    pub fn with_progress(mut self, show: bool) -> Self {
        self.show_progress = show;
        self
    }

    /// Suppress the welcome banner
    pub fn with_quiet(mut self, quiet: bool) -> Self {
        self.quiet = quiet;
        self
    }

    /// Override the history file location
    pub fn with_history_file(mut self, path: Option<PathBuf>) -> Self {
        self.history_file = path;
        self
    }

    /// Run the interactive REPL
    pub async fn run(&self) -> RlResult<()> {
        let mut rl = DefaultEditor::new()?;

        let history_path = self.history_path();
        if let Some(ref path) = history_path {
            if let Some(parent) = path.parent() {
                let _ = std::fs::create_dir_all(parent);
            }
            let _ = rl.load_history(path);
        }

        if !self.quiet {
            self.print_welcome();
        }

        loop {
            let readline = rl.readline("topic> ");

            match readline {
                Ok(line) => {
                    let line = line.trim();

                    // Skip empty lines
                    if line.is_empty() {
                        continue;
                    }

                    if is_quit(line) {
                        println!("Bye! Happy studying.");
                        break;
                    }

                    let _ = rl.add_history_entry(line);

                    self.process_topic(line).await;
                }
                Err(ReadlineError::Interrupted) => {
                    println!("^C");
                    continue;
                }
                Err(ReadlineError::Eof) => {
                    println!("Bye! Happy studying.");
                    break;
                }
                Err(err) => {
                    eprintln!("Error: {:?}", err);
                    break;
                }
            }
        }

        if let Some(ref path) = history_path {
            let _ = rl.save_history(path);
        }

        Ok(())
    }

    fn history_path(&self) -> Option<PathBuf> {
        self.history_file.clone().or_else(|| {
            dirs::data_dir().map(|p| p.join("studyhall").join("history.txt"))
        })
    }

    fn print_welcome(&self) {
        println!();
        println!("╭─────────────────────────────────────────────╮");
        println!("│          Studyhall - Interactive Mode       │");
        println!("╰─────────────────────────────────────────────╯");
        println!();
        println!("Model:    {}", self.use_case.model());
        println!("Template: {}", self.use_case.params().template.name());
        println!();
        println!("Enter a topic to generate a study guide.");
        println!("Type 'quit' to exit.");
        println!();
    }

    async fn process_topic(&self, topic: &str) {
        println!();

        let result = if self.use_case.params().streaming {
            let sink = ConsoleSink::new();
            let result = self.use_case.execute_streaming(topic, &sink).await;
            // Chunks end without a trailing newline
            if result.is_ok() {
                println!();
                println!();
            }
            result
        } else {
            let progress = self.show_progress.then(GenerationProgress::start);
            let result = self.use_case.execute(topic).await;
            if let Some(progress) = progress {
                progress.finish();
            }
            result
        };

        match result {
            Ok(guide) => {
                if self.use_case.params().streaming {
                    println!("{}", ConsoleFormatter::format_footer(&guide));
                } else {
                    println!("{}", ConsoleFormatter::format(&guide));
                }
            }
            Err(GenerateGuideError::InvalidTopic(e)) => {
                println!("{}", e);
            }
            Err(e) => {
                // The cause goes to the log; the user gets a retry hint
                error!("Generation failed: {}", e);
                println!("Something went wrong while generating the guide.");
                println!("Check that the model is responding and try again.");
            }
        }
        println!();
    }
}
