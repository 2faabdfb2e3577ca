pub mod config;
pub mod console;
pub mod extract;
pub mod model;
pub mod orchestrator;
pub mod prompt;
pub mod shell;

// Re-export commonly used types
pub use config::Config;
pub use console::Console;
pub use model::{GeminiClient, Model, ModelError};
pub use orchestrator::{run_task, TaskOutcome};
pub use shell::{CommandRunner, ExecutionOutput, ShellRunner};
