use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::state::{Category, DEFAULT_MAX_RETRIES, Language};

// ── Top-level config ──────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Path to config.toml - computed at load time, not serialized
    #[serde(skip)]
    pub config_path: PathBuf,
    /// Where jokes come from: the built-in phrase tables or an LLM
    #[serde(default)]
    pub source: SourceKind,
    pub api_key: Option<String>,
    #[serde(default = "default_provider")]
    pub default_provider: String,
    #[serde(default)]
    pub default_category: Category,
    #[serde(default)]
    pub default_language: Language,

    #[serde(default = "WriterConfig::writer")]
    pub writer: WriterConfig,

    #[serde(default = "WriterConfig::critic")]
    pub critic: WriterConfig,

    #[serde(default)]
    pub generation: GenerationConfig,

    #[serde(default)]
    pub similarity: SimilarityConfig,

    #[serde(default)]
    pub reliability: ReliabilityConfig,

    #[serde(default)]
    pub prompts: PromptsConfig,

    #[serde(default)]
    pub observability: ObservabilityConfig,
}

fn default_provider() -> String {
    "groq".into()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            config_path: PathBuf::new(),
            source: SourceKind::default(),
            api_key: None,
            default_provider: default_provider(),
            default_category: Category::default(),
            default_language: Language::default(),
            writer: WriterConfig::writer(),
            critic: WriterConfig::critic(),
            generation: GenerationConfig::default(),
            similarity: SimilarityConfig::default(),
            reliability: ReliabilityConfig::default(),
            prompts: PromptsConfig::default(),
            observability: ObservabilityConfig::default(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, strum::Display, strum::EnumString)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum SourceKind {
    /// Built-in phrase tables, no network
    #[default]
    Static,
    /// LLM writer gated by an LLM critic
    Generative,
}

// ── Writer / critic ──────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WriterConfig {
    /// Overrides `default_provider` for this role
    #[serde(default)]
    pub provider: Option<String>,
    pub model: String,
    pub temperature: f64,
}

impl WriterConfig {
    /// High temperature: the writer should be inventive.
    pub fn writer() -> Self {
        Self {
            provider: None,
            model: "llama-3.1-8b-instant".into(),
            temperature: 0.8,
        }
    }

    /// Low temperature: the critic should be consistent.
    pub fn critic() -> Self {
        Self {
            provider: None,
            model: "llama-3.1-8b-instant".into(),
            temperature: 0.1,
        }
    }
}

// ── Generation loop ──────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationConfig {
    /// Write attempts per joke before the last draft is accepted as is
    #[serde(default = "default_max_retries")]
    pub max_retries: u32,
    /// Drafts scoring above this against any earlier joke are rejected
    #[serde(default = "default_similarity_threshold")]
    pub similarity_threshold: f64,
}

fn default_max_retries() -> u32 {
    DEFAULT_MAX_RETRIES
}

fn default_similarity_threshold() -> f64 {
    0.8
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            max_retries: default_max_retries(),
            similarity_threshold: default_similarity_threshold(),
        }
    }
}

// ── Similarity ──────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, strum::Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum SimilarityBackend {
    #[default]
    Lexical,
    Embedding,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimilarityConfig {
    #[serde(default)]
    pub backend: SimilarityBackend,
    #[serde(default = "default_embedding_model")]
    pub model: String,
    #[serde(default = "default_embedding_base_url")]
    pub base_url: String,
}

fn default_embedding_model() -> String {
    "text-embedding-3-small".into()
}

fn default_embedding_base_url() -> String {
    "https://api.openai.com/v1".into()
}

impl Default for SimilarityConfig {
    fn default() -> Self {
        Self {
            backend: SimilarityBackend::default(),
            model: default_embedding_model(),
            base_url: default_embedding_base_url(),
        }
    }
}

// ── Reliability ──────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReliabilityConfig {
    #[serde(default = "default_provider_retries")]
    pub provider_retries: u32,
    #[serde(default = "default_provider_backoff_ms")]
    pub provider_backoff_ms: u64,
    #[serde(default = "default_fallback_providers")]
    pub fallback_providers: Vec<FallbackProvider>,
}

/// One `[[reliability.fallback_providers]]` entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FallbackProvider {
    pub provider: String,
    /// Sent instead of the role's model; another vendor rarely serves the same one
    #[serde(default)]
    pub model: Option<String>,
    /// Falls back to the provider's env var when absent
    #[serde(default)]
    pub api_key: Option<String>,
}

impl FallbackProvider {
    pub fn new(provider: impl Into<String>, model: Option<&str>) -> Self {
        Self {
            provider: provider.into(),
            model: model.map(str::to_string),
            api_key: None,
        }
    }
}

fn default_provider_retries() -> u32 {
    2
}

fn default_provider_backoff_ms() -> u64 {
    500
}

fn default_fallback_providers() -> Vec<FallbackProvider> {
    vec![FallbackProvider::new("groq", Some("llama-3.1-8b-instant"))]
}

impl Default for ReliabilityConfig {
    fn default() -> Self {
        Self {
            provider_retries: default_provider_retries(),
            provider_backoff_ms: default_provider_backoff_ms(),
            fallback_providers: default_fallback_providers(),
        }
    }
}

// ── Prompts / observability ──────────────────────────────────────

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PromptsConfig {
    /// TOML file with task specs that override or extend the built-ins
    #[serde(default)]
    pub path: Option<PathBuf>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ObservabilityConfig {
    /// "error" | "warn" | "info" | "debug" | "trace"
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_log_level() -> String {
    "warn".into()
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}
