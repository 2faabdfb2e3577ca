//! Task pipeline: prompt, model call, command extraction, execution.

use std::io::Write;

use crate::console::Console;
use crate::extract::extract_commands;
use crate::model::{Model, ModelError};
use crate::prompt;
use crate::shell::CommandRunner;

/// How one task ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskOutcome {
    /// Every extracted command was run (failures included)
    Completed { executed: usize },
    /// Empty task or safety refusal; nothing was run
    Rejected(ModelError),
    /// Any other model failure; nothing was run
    Failed(ModelError),
}

impl TaskOutcome {
    pub fn is_completed(&self) -> bool {
        matches!(self, TaskOutcome::Completed { .. })
    }
}

/// Run one task end to end.
///
/// A failing command never stops the sequence. Model errors are reported
/// on the console as exactly one error line and returned as the outcome.
pub fn run_task<M, R, O, E>(
    model: &M,
    runner: &R,
    console: &mut Console<O, E>,
    task: &str,
) -> TaskOutcome
where
    M: Model + ?Sized,
    R: CommandRunner + ?Sized,
    O: Write,
    E: Write,
{
    console.log("Sending", "task to Gemini...");

    let completion = match model.generate(prompt::system_instruction(), task) {
        Ok(text) => text,
        Err(err) => {
            console.error(&user_message(&err));
            return if err.is_rejection() {
                TaskOutcome::Rejected(err)
            } else {
                TaskOutcome::Failed(err)
            };
        }
    };

    let commands = extract_commands(&completion);
    console.log("Extracted", &format!("{} command(s)", commands.len()));

    for command in &commands {
        console.command(command);
        let output = runner.run(command);
        console.output(&output.stdout);

        if console.logging() {
            let status = output
                .status
                .map(|code| code.to_string())
                .unwrap_or_else(|| "none".to_string());
            console.log("Finished", &format!("with exit status {}", status));
            if !output.stderr.trim().is_empty() {
                console.log("Stderr", output.stderr.trim_end());
            }
        }
    }

    TaskOutcome::Completed {
        executed: commands.len(),
    }
}

/// User-facing wording for a model failure
pub fn user_message(err: &ModelError) -> String {
    match err {
        ModelError::EmptyTask => "No task specified.".to_string(),
        ModelError::UnsafeContent { .. } => "Specified task deemed dangerous.".to_string(),
        ModelError::Transport(_) | ModelError::Api { .. } | ModelError::EmptyCompletion => {
            let text = capitalize(&err.to_string());
            if text.ends_with('.') {
                text
            } else {
                format!("{}.", text)
            }
        }
    }
}

fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
