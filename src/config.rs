use anyhow::{bail, Result};

/// Environment variable holding the Gemini API credential
pub const ENV_API_KEY: &str = "GEMINI_API_KEY";

/// Environment variable overriding the model name
pub const ENV_MODEL: &str = "GEMINI_MODEL";

/// Environment variable overriding the API base URL
pub const ENV_API_BASE: &str = "GEMINI_API_BASE";

/// Environment variable overriding the shell used to run commands
pub const ENV_SHELL: &str = "GPT_SHELL";

pub const DEFAULT_MODEL: &str = "gemini-1.5-flash";
pub const DEFAULT_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_SHELL: &str = "sh";

/// Runtime configuration, built once at startup and passed down
#[derive(Debug, Clone)]
pub struct Config {
    /// Gemini API credential
    pub api_key: String,
    /// Model name, e.g. `gemini-1.5-flash`
    pub model: String,
    /// Base URL of the generative language API (no trailing slash)
    pub api_base: String,
    /// Shell interpreter handed each command via `-c`
    pub shell: String,
}

impl Config {
    /// Load configuration from `.env` (if present) and the process environment.
    ///
    /// Variables already set in the environment take precedence over `.env`.
    pub fn from_env() -> Result<Self> {
        // Missing .env is the common case, not an error
        let _ = dotenv::dotenv();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = match lookup(ENV_API_KEY) {
            Some(key) if !key.trim().is_empty() => key.trim().to_string(),
            _ => bail!(
                "{} is not set. Export it or add it to a .env file in the current directory.",
                ENV_API_KEY
            ),
        };

        let model = non_empty(lookup(ENV_MODEL)).unwrap_or_else(|| DEFAULT_MODEL.to_string());
        let api_base = non_empty(lookup(ENV_API_BASE))
            .unwrap_or_else(|| DEFAULT_API_BASE.to_string())
            .trim_end_matches('/')
            .to_string();
        let shell = non_empty(lookup(ENV_SHELL)).unwrap_or_else(|| DEFAULT_SHELL.to_string());

        Ok(Self {
            api_key,
            model,
            api_base,
            shell,
        })
    }

    /// Replace the model name (CLI override)
    pub fn with_model(mut self, model: Option<String>) -> Self {
        if let Some(model) = non_empty(model) {
            self.model = model;
        }
        self
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
