#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, PoisonError};

use jokebot::prompt::PromptTemplates;
use jokebot::providers::{Provider, ProviderFuture, TextCompletion};
use jokebot::similarity::SimilarityScorer;
use jokebot::source::{CriticReviewer, GenerativeWriter, JokeSource};
use jokebot::ui::ScriptedConsole;
use jokebot::{JokeState, WorkflowEngine};

pub const THRESHOLD: f64 = 0.8;

/// Replays canned replies; the last one repeats once the queue runs dry.
pub struct ScriptedProvider {
    replies: Mutex<VecDeque<String>>,
    fail_with: Option<String>,
    calls: AtomicUsize,
    prompts: Mutex<Vec<String>>,
    models: Mutex<Vec<String>>,
}

impl ScriptedProvider {
    pub fn replies<I, S>(replies: I) -> Arc<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Arc::new(Self {
            replies: Mutex::new(replies.into_iter().map(Into::into).collect()),
            fail_with: None,
            calls: AtomicUsize::new(0),
            prompts: Mutex::new(Vec::new()),
            models: Mutex::new(Vec::new()),
        })
    }

    pub fn failing(message: &str) -> Arc<Self> {
        Arc::new(Self {
            replies: Mutex::new(VecDeque::new()),
            fail_with: Some(message.to_string()),
            calls: AtomicUsize::new(0),
            prompts: Mutex::new(Vec::new()),
            models: Mutex::new(Vec::new()),
        })
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn models(&self) -> Vec<String> {
        self.models
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn next_reply(&self) -> String {
        let mut replies = self.replies.lock().unwrap_or_else(PoisonError::into_inner);
        if replies.len() > 1 {
            replies.pop_front().unwrap_or_default()
        } else {
            replies.front().cloned().unwrap_or_default()
        }
    }
}

impl Provider for ScriptedProvider {
    fn name(&self) -> &str {
        "scripted"
    }

    fn complete<'a>(
        &'a self,
        prompt: &'a str,
        model: &'a str,
        _temperature: f64,
    ) -> ProviderFuture<'a, String> {
        Box::pin(async move {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.prompts
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .push(prompt.to_string());
            self.models
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .push(model.to_string());
            match &self.fail_with {
                Some(message) => Err(anyhow::anyhow!("{message}")),
                None => Ok(self.next_reply()),
            }
        })
    }
}

/// Owned handle onto a shared `ScriptedProvider`, for chains that take
/// `Box<dyn Provider>`.
pub struct SharedProvider(pub Arc<ScriptedProvider>);

impl Provider for SharedProvider {
    fn name(&self) -> &str {
        self.0.name()
    }

    fn complete<'a>(
        &'a self,
        prompt: &'a str,
        model: &'a str,
        temperature: f64,
    ) -> ProviderFuture<'a, String> {
        self.0.complete(prompt, model, temperature)
    }
}

/// Scores every comparison with the same value.
pub struct FixedScorer {
    score: Option<f64>,
    calls: Arc<AtomicUsize>,
}

impl FixedScorer {
    pub fn new(score: f64) -> Self {
        Self {
            score: Some(score),
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Always errors, like an embedding service that is down.
    pub fn broken() -> Self {
        Self {
            score: None,
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn call_counter(&self) -> Arc<AtomicUsize> {
        Arc::clone(&self.calls)
    }
}

impl SimilarityScorer for FixedScorer {
    fn name(&self) -> &str {
        "fixed"
    }

    fn similarity<'a>(
        &'a self,
        _text: &'a str,
        others: &'a [&'a str],
    ) -> ProviderFuture<'a, Vec<f64>> {
        Box::pin(async move {
            self.calls.fetch_add(1, Ordering::SeqCst);
            match self.score {
                Some(score) => Ok(vec![score; others.len()]),
                None => Err(anyhow::anyhow!("embedding service unreachable")),
            }
        })
    }
}

pub fn static_engine(inputs: &[&str]) -> WorkflowEngine<ScriptedConsole> {
    WorkflowEngine::new(
        ScriptedConsole::new(inputs.iter().copied()),
        JokeSource::builtin(),
    )
}

pub fn generative_engine(
    inputs: &[&str],
    writer: &Arc<ScriptedProvider>,
    critic: &Arc<ScriptedProvider>,
    scorer: FixedScorer,
) -> WorkflowEngine<ScriptedConsole> {
    let writer_provider: Arc<dyn Provider> = Arc::clone(writer) as Arc<dyn Provider>;
    let critic_provider: Arc<dyn Provider> = Arc::clone(critic) as Arc<dyn Provider>;
    generative_engine_with(
        inputs,
        TextCompletion::new(writer_provider, "test-writer", 0.8),
        TextCompletion::new(critic_provider, "test-critic", 0.1),
        scorer,
    )
}

pub fn generative_engine_with(
    inputs: &[&str],
    writer: TextCompletion,
    critic: TextCompletion,
    scorer: FixedScorer,
) -> WorkflowEngine<ScriptedConsole> {
    let templates = Arc::new(PromptTemplates::builtin().unwrap());
    let source = JokeSource::Generative {
        writer: GenerativeWriter::new(writer, Arc::clone(&templates)),
        critic: CriticReviewer::new(Box::new(scorer), critic, templates, THRESHOLD),
    };
    WorkflowEngine::new(ScriptedConsole::new(inputs.iter().copied()), source)
}

pub fn fresh_state(max_retries: u32) -> JokeState {
    JokeState::new(Default::default(), Default::default(), max_retries)
}
