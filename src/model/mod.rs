//! Model - the hosted language model that turns a task into commands
//!
//! - **Model**: the seam the orchestrator talks to (stubbed in tests)
//! - **GeminiClient**: blocking HTTP client for Gemini `generateContent`
//!
//! # Usage
//!
//! ```ignore
//! use gpt_shell::model::{GeminiClient, Model};
//!
//! let client = GeminiClient::new(&config)?;
//! let text = client.generate(prompt::system_instruction(), "list rust files")?;
//! ```

mod internal;

use thiserror::Error;

pub use internal::GeminiClient;

/// One request, one completion. No history is kept between calls.
pub trait Model {
    /// Ask the model to complete `task` under `system_instruction`.
    ///
    /// Blocks until the service answers.
    fn generate(&self, system_instruction: &str, task: &str) -> Result<String, ModelError>;
}

/// Failure of a model call
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ModelError {
    /// Task was empty or whitespace-only; nothing was sent
    #[error("no task specified")]
    EmptyTask,

    /// Service refused to answer on policy grounds
    #[error("task rejected by the model ({reason})")]
    UnsafeContent { reason: String },

    /// Network failure or unreadable response body
    #[error("request to model failed: {0}")]
    Transport(String),

    /// Non-success HTTP status (bad credential, quota, unknown model, ...)
    #[error("model API returned {status}: {message}")]
    Api { status: u16, message: String },

    /// Successful response with no text in it
    #[error("model returned an empty completion")]
    EmptyCompletion,
}

impl ModelError {
    /// Rejections are expected outcomes of a task, not faults of the tool
    pub fn is_rejection(&self) -> bool {
        matches!(self, ModelError::EmptyTask | ModelError::UnsafeContent { .. })
    }
}
