pub mod compatible;
pub mod completion;
pub mod factory;
pub mod http_client;
pub mod ollama;
pub mod reliable;
pub mod scrub;
pub mod traits;

pub use completion::TextCompletion;
pub use factory::{create_provider, create_resilient_provider};
pub use reliable::ReliableProvider;
pub use scrub::{api_error, sanitize_api_error, scrub_secret_patterns};
pub use traits::{Provider, ProviderFuture};
