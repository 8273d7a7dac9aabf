//! Per-node handlers. Each reads the state and returns a partial update;
//! only `WorkflowEngine::run` mutates the state.

use super::engine::WorkflowEngine;
use crate::error::{InputError, JokeBotError};
use crate::source::{JokeSource, Verdict};
use crate::state::{
    Category, Joke, JokeState, JokeUpdate, JokesUpdate, Language, MenuChoice, select_index,
};
use crate::ui::{Console, render};

const INVALID_INPUT: &str = "Invalid input. Please try again.";
const CATEGORY_PROMPT: &str = "     Enter category number: ";
const LANGUAGE_PROMPT: &str = "      Enter Language Number: ";
const RESET_PROMPT: &str = "Are you sure you want to clear your joke history? (y/n): ";

impl<C: Console> WorkflowEngine<C> {
    /// Prompt until a valid token arrives. Closed input counts as quit.
    pub(super) fn show_menu(&mut self, state: &JokeState) -> Result<JokeUpdate, JokeBotError> {
        render::menu_header(&mut self.console, state.category, state.language, state.jokes.len());
        loop {
            let Some(line) = self.console.read_line(render::MENU_PROMPT)? else {
                tracing::debug!("Input closed, quitting");
                return Ok(JokeUpdate::choice(MenuChoice::Quit));
            };
            match MenuChoice::parse_token(&line) {
                Ok(choice) => return Ok(JokeUpdate::choice(choice)),
                Err(e) => {
                    tracing::debug!(error = %e, "Rejected menu input");
                    render::failure(&mut self.console, INVALID_INPUT);
                }
            }
        }
    }

    pub(super) fn fetch_joke(&mut self, state: &JokeState) -> Result<JokeUpdate, JokeBotError> {
        let JokeSource::Static(library) = &self.source else {
            return Err(anyhow::anyhow!("fetch_joke needs the static joke source").into());
        };
        let text = library.pick(state.category, state.language)?;
        let joke = Joke::new(text, state.category);
        render::joke(&mut self.console, &joke);
        Ok(JokeUpdate::append_joke(joke))
    }

    pub(super) fn update_category(&mut self) -> Result<JokeUpdate, JokeBotError> {
        render::category_menu(&mut self.console);
        let selected = self.select(CATEGORY_PROMPT, &Category::ALL, "category")?;
        Ok(selected.map_or_else(JokeUpdate::none, |category| {
            render::confirmation(
                &mut self.console,
                &format!("      Category changed to: {}", category.to_string().to_uppercase()),
            );
            JokeUpdate::category(category)
        }))
    }

    pub(super) fn update_language(&mut self) -> Result<JokeUpdate, JokeBotError> {
        render::language_menu(&mut self.console);
        let selected = self.select(LANGUAGE_PROMPT, &Language::ALL, "language")?;
        Ok(selected.map_or_else(JokeUpdate::none, |language| {
            render::confirmation(
                &mut self.console,
                &format!("    Language changed to: {}", language.to_string().to_uppercase()),
            );
            JokeUpdate::language(language)
        }))
    }

    /// One numbered selection. Bad input is reported and yields `None`.
    fn select<T: Copy>(
        &mut self,
        prompt: &str,
        options: &[T],
        what: &str,
    ) -> Result<Option<T>, JokeBotError> {
        let line = self.console.read_line(prompt)?.unwrap_or_default();
        match select_index(&line, options) {
            Ok(value) => Ok(Some(value)),
            Err(e @ InputError::OutOfRange { .. }) => {
                tracing::debug!(error = %e, "Selection out of range");
                render::notice(
                    &mut self.console,
                    &format!("     Invalid choice. Keeping current {what}."),
                );
                Ok(None)
            }
            Err(e) => {
                tracing::debug!(error = %e, "Selection not a number");
                render::notice(
                    &mut self.console,
                    &format!("     Please enter a valid number. Keeping current {what}."),
                );
                Ok(None)
            }
        }
    }

    pub(super) fn reset_history(&mut self) -> Result<JokeUpdate, JokeBotError> {
        let answer = self.console.read_line(RESET_PROMPT)?.unwrap_or_default();
        if answer.trim().eq_ignore_ascii_case("y") {
            render::reset_done(&mut self.console);
            Ok(JokeUpdate::clear_jokes())
        } else {
            render::notice(&mut self.console, "Reset Cancelled");
            Ok(JokeUpdate::none())
        }
    }

    pub(super) fn terminate(&mut self) -> JokeUpdate {
        render::goodbye(&mut self.console);
        JokeUpdate::quit()
    }

    pub(super) async fn write(&mut self, state: &JokeState) -> Result<JokeUpdate, JokeBotError> {
        let JokeSource::Generative { writer, .. } = &self.source else {
            return Err(anyhow::anyhow!("write needs the generative joke source").into());
        };
        let attempt = state.retry_count + 1;
        tracing::info!(
            attempt,
            max = state.max_retries,
            provider = writer.completion().provider_name(),
            "Writing draft"
        );
        let draft = writer.draft(state.category, state.language).await?;
        Ok(JokeUpdate {
            latest_draft: Some(draft),
            approved: Some(false),
            retry_count: Some(attempt),
            ..JokeUpdate::none()
        })
    }

    pub(super) async fn critique(&mut self, state: &JokeState) -> Result<JokeUpdate, JokeBotError> {
        let JokeSource::Generative { critic, .. } = &self.source else {
            return Err(anyhow::anyhow!("critique needs the generative joke source").into());
        };
        let history: Vec<&str> = state.jokes.iter().map(|j| j.text.as_str()).collect();
        let verdict = critic
            .review(&state.latest_draft, &history, state.category, state.language)
            .await?;

        match verdict {
            Verdict::Approved => {
                tracing::info!(attempt = state.retry_count, "Draft approved");
                Ok(JokeUpdate {
                    approved: Some(true),
                    retry_count: Some(0),
                    ..JokeUpdate::none()
                })
            }
            Verdict::TooSimilar(similarity) => {
                tracing::info!(
                    similarity,
                    attempt = state.retry_count,
                    "Draft too similar to an earlier joke"
                );
                Ok(JokeUpdate {
                    approved: Some(false),
                    ..JokeUpdate::none()
                })
            }
            Verdict::Rejected => {
                tracing::info!(attempt = state.retry_count, "Draft rejected");
                Ok(JokeUpdate {
                    approved: Some(false),
                    ..JokeUpdate::none()
                })
            }
        }
    }

    /// Publish the draft, approved or not, and reset the cycle.
    pub(super) fn finalize(&mut self, state: &JokeState) -> JokeUpdate {
        if !state.approved {
            tracing::warn!(
                attempts = state.retry_count,
                "No draft approved, showing the last one"
            );
        }
        let joke = Joke::new(state.latest_draft.clone(), state.category);
        render::joke(&mut self.console, &joke);
        JokeUpdate {
            jokes: Some(JokesUpdate::Append(vec![joke])),
            latest_draft: Some(String::new()),
            approved: Some(false),
            retry_count: Some(0),
            ..JokeUpdate::none()
        }
    }
}
