mod env_overrides;
mod loader;
mod types;

pub use loader::default_config_path;
pub use types::{
    Config, FallbackProvider, GenerationConfig, ObservabilityConfig, PromptsConfig,
    ReliabilityConfig, SimilarityBackend, SimilarityConfig, SourceKind, WriterConfig,
};
