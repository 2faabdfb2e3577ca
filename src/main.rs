use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;

use gpt_shell::{run_task, Config, Console, GeminiClient, ShellRunner};

/// Runs every command the model returns with your privileges. Read the task
/// carefully; there is no confirmation step.
#[derive(Parser)]
#[command(author, version = env!("CARGO_PKG_VERSION"), about = "Turn a task into shell commands with Gemini and run them", long_about = None)]
struct Cli {
    /// What to do, in plain language (e.g. 'make a tarball of ./src')
    task: String,

    /// Print diagnostic log lines to stderr
    #[arg(long)]
    logging: bool,

    /// Gemini model to use (overrides GEMINI_MODEL)
    #[arg(long)]
    model: Option<String>,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let mut console = Console::stdio(cli.logging, !cli.no_color);

    match run(cli, &mut console) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            console.error(&format!("{:#}", e));
            ExitCode::FAILURE
        }
    }
}

/// Returns whether the task completed
fn run(cli: Cli, console: &mut Console) -> Result<bool> {
    console.log("Loading", "Gemini API key...");
    let config = Config::from_env()?.with_model(cli.model);

    console.log("Creating", &format!("Gemini model {}...", config.model));
    let client = GeminiClient::new(&config)?;
    let runner = ShellRunner::new(config.shell.clone());

    let outcome = run_task(&client, &runner, console, &cli.task);
    Ok(outcome.is_completed())
}
