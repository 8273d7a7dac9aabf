#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::missing_errors_doc, clippy::missing_panics_doc)]

use anyhow::{Context, Result};
use clap::Parser;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use jokebot::cli::Cli;
use jokebot::config::SourceKind;
use jokebot::ui::{TermConsole, render};
use jokebot::{Config, JokeSource, JokeState, WorkflowEngine};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let mut config = Config::load_or_init(cli.config.as_deref())?;
    cli.apply(&mut config);
    config.validate()?;

    // Logs go to stderr so they never interleave with the menu.
    let level: Level = config.observability.log_level.parse().unwrap_or(Level::WARN);
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .context("setting default subscriber failed")?;

    let source = JokeSource::from_config(&config)?;
    let mode_line = match &source {
        JokeSource::Static(_) => "Jokes from the built-in collection.".to_string(),
        JokeSource::Generative { writer, critic } => format!(
            "Fresh jokes from {} ({}), reviewed by a critic ({} similarity).",
            writer.completion().provider_name(),
            writer.completion().model(),
            critic.scorer_name(),
        ),
    };
    if source.kind() == SourceKind::Generative {
        tracing::info!(max_retries = config.generation.max_retries, "Generation enabled");
    }

    let mut engine = WorkflowEngine::new(TermConsole::stdout(), source);
    render::welcome(engine.console_mut(), &mode_line);

    let initial = JokeState::new(
        config.default_category,
        config.default_language,
        config.generation.max_retries,
    );
    let state = engine.run(initial).await?;

    render::summary(engine.console_mut(), state.category, state.jokes.len());
    Ok(())
}
