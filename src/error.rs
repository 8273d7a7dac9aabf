use thiserror::Error;

use crate::state::{Category, Language};

// ─── Top-level error hierarchy ───────────────────────────────────────────────

/// Structured error hierarchy for `Jokebot`.
///
/// Each subsystem defines its own error variant. The workflow engine matches
/// on these to decide whether a failure ends the current cycle or the whole
/// session; collaborator code continues to use `anyhow::Result` for ad-hoc
/// context chains.
#[derive(Debug, Error)]
pub enum JokeBotError {
    // ── Config ───────────────────────────────────────────────────────────
    #[error("config: {0}")]
    Config(#[from] ConfigError),

    // ── Console input ───────────────────────────────────────────────────
    #[error("input: {0}")]
    Input(#[from] InputError),

    // ── Static phrase library ───────────────────────────────────────────
    #[error("phrases: {0}")]
    Phrase(#[from] PhraseError),

    // ── Prompt / Template ───────────────────────────────────────────────
    #[error("prompt: {0}")]
    Prompt(#[from] PromptError),

    // ── LLM / Provider ──────────────────────────────────────────────────
    #[error("llm: {0}")]
    Llm(#[from] LlmError),

    // ── Similarity scoring ──────────────────────────────────────────────
    #[error("similarity: {0}")]
    Similarity(String),

    // ── Console I/O ─────────────────────────────────────────────────────
    #[error("console io: {0}")]
    Io(#[from] std::io::Error),

    // ── Generic fallthrough (wraps anyhow for interop) ──────────────────
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl JokeBotError {
    /// Whether the session can carry on after this error.
    ///
    /// Only bad user input and a missing phrase table are recoverable; every
    /// other failure ends the session.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Self::Input(_) | Self::Phrase(_))
    }
}

// ─── Config errors ───────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("validation failed: {0}")]
    Validation(String),
}

// ─── Input errors ────────────────────────────────────────────────────────────

#[derive(Debug, Error, PartialEq, Eq)]
pub enum InputError {
    #[error("'{0}' is not a menu option")]
    UnknownToken(String),

    #[error("'{0}' is not a number")]
    NotANumber(String),

    #[error("index {index} is out of range (0..{len})")]
    OutOfRange { index: i64, len: usize },
}

// ─── Phrase library errors ───────────────────────────────────────────────────

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PhraseError {
    #[error("no jokes available for language {language} and category {category}")]
    UnsupportedCombination {
        language: Language,
        category: Category,
    },
}

// ─── Prompt / Template errors ───────────────────────────────────────────────

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PromptError {
    #[error("unknown task: {0}. Check the prompt configuration.")]
    UnknownTask(String),

    #[error("template render failed: {0}")]
    Render(String),

    #[error("invalid prompt file: {0}")]
    Load(String),
}

// ─── LLM / Provider errors ──────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("provider {provider} request failed: {message}")]
    Request { provider: String, message: String },

    #[error("unknown provider: {0}")]
    UnknownProvider(String),

    #[error("all providers failed: {0}")]
    Exhausted(String),
}

// ─── Convenience re-exports ─────────────────────────────────────────────────

/// Shorthand result type for the crate.
pub type Result<T> = std::result::Result<T, JokeBotError>;
