use super::node::{Node, next_node};
use crate::error::JokeBotError;
use crate::source::JokeSource;
use crate::state::{JokeState, JokeUpdate};
use crate::ui::{Console, render};

/// Drives one session: run a node, merge its update, follow the edge.
pub struct WorkflowEngine<C: Console> {
    pub(super) console: C,
    pub(super) source: JokeSource,
}

impl<C: Console> WorkflowEngine<C> {
    pub fn new(console: C, source: JokeSource) -> Self {
        Self { console, source }
    }

    pub fn console(&self) -> &C {
        &self.console
    }

    pub fn console_mut(&mut self) -> &mut C {
        &mut self.console
    }

    pub fn source(&self) -> &JokeSource {
        &self.source
    }

    /// Run from the menu until the session terminates.
    ///
    /// Recoverable failures are shown to the user and the step is treated as
    /// a no-op. Anything else aborts the run.
    pub async fn run(&mut self, mut state: JokeState) -> Result<JokeState, JokeBotError> {
        let kind = self.source.kind();
        let mut node = Node::START;
        tracing::info!(source = %kind, "Session started");

        loop {
            tracing::debug!(node = %node, retry = state.retry_count, "Entering node");
            let update = match self.step(node, &state).await {
                Ok(update) => update,
                Err(e) if e.is_recoverable() => {
                    tracing::warn!(node = %node, error = %e, "Step failed, state unchanged");
                    render::failure(&mut self.console, &e.to_string());
                    JokeUpdate::none()
                }
                Err(e) => {
                    tracing::error!(node = %node, error = %e, "Session aborted");
                    return Err(e);
                }
            };
            state.merge(update);

            match next_node(node, &state, kind) {
                Some(next) => node = next,
                None => {
                    tracing::info!(jokes = state.jokes.len(), "Session finished");
                    return Ok(state);
                }
            }
        }
    }

    async fn step(&mut self, node: Node, state: &JokeState) -> Result<JokeUpdate, JokeBotError> {
        match node {
            Node::ShowMenu => self.show_menu(state),
            Node::FetchJoke => self.fetch_joke(state),
            Node::UpdateCategory => self.update_category(),
            Node::UpdateLanguage => self.update_language(),
            Node::ResetHistory => self.reset_history(),
            Node::Terminate => Ok(self.terminate()),
            Node::Write => self.write(state).await,
            Node::Critique => self.critique(state).await,
            Node::Finalize => Ok(self.finalize(state)),
        }
    }
}
