use std::future::Future;
use std::pin::Pin;

/// Boxed future returned by provider calls.
pub type ProviderFuture<'a, T> = Pin<Box<dyn Future<Output = anyhow::Result<T>> + Send + 'a>>;

/// A text-completion backend: one instruction in, one text out.
pub trait Provider: Send + Sync {
    /// Provider identifier (e.g. "openai", "groq").
    fn name(&self) -> &str;

    /// Send `prompt` as the system instruction and return the model's reply.
    fn complete<'a>(
        &'a self,
        prompt: &'a str,
        model: &'a str,
        temperature: f64,
    ) -> ProviderFuture<'a, String>;
}
