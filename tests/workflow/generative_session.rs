use std::sync::Arc;
use std::sync::atomic::Ordering;

use jokebot::JokeBotError;
use jokebot::error::LlmError;
use jokebot::providers::{Provider, ReliableProvider, TextCompletion};

use crate::session_harness::{
    FixedScorer, ScriptedProvider, SharedProvider, fresh_state, generative_engine,
    generative_engine_with,
};

#[tokio::test]
async fn approved_draft_is_published_once() {
    let writer = ScriptedProvider::replies(["  Why do Java developers wear glasses? They can't C#.  "]);
    let critic = ScriptedProvider::replies(["approve"]);
    let mut engine = generative_engine(&["n", "q"], &writer, &critic, FixedScorer::new(0.0));

    let state = engine.run(fresh_state(5)).await.unwrap();

    assert_eq!(state.jokes.len(), 1);
    assert_eq!(
        state.jokes[0].text,
        "Why do Java developers wear glasses? They can't C#."
    );
    assert!(state.latest_draft.is_empty());
    assert!(!state.approved);
    assert_eq!(state.retry_count, 0);
    assert_eq!(writer.calls(), 1);
    assert_eq!(critic.calls(), 1);
    assert!(engine.console().printed("They can't C#."));
}

#[tokio::test]
async fn prompts_carry_category_language_and_draft() {
    let writer = ScriptedProvider::replies(["A draft joke"]);
    let critic = ScriptedProvider::replies(["Yes"]);
    let mut engine = generative_engine(
        &["l", "1", "n", "q"],
        &writer,
        &critic,
        FixedScorer::new(0.0),
    );

    engine.run(fresh_state(5)).await.unwrap();

    let writer_prompt = &writer.prompts()[0];
    assert!(writer_prompt.starts_with("Role: "));
    assert!(writer_prompt.contains("Write a joke in German about"));
    let critic_prompt = &critic.prompts()[0];
    assert!(critic_prompt.contains("Joke to evaluate: A draft joke\n"));
    assert!(critic_prompt.contains("Category: neutral, Language: de\n"));
}

#[tokio::test]
async fn always_rejecting_critic_exhausts_retries_then_publishes_last_draft() {
    let writer = ScriptedProvider::replies(["first", "second", "third"]);
    let critic = ScriptedProvider::replies(["reject"]);
    let mut engine = generative_engine(&["n", "q"], &writer, &critic, FixedScorer::new(0.0));

    let state = engine.run(fresh_state(3)).await.unwrap();

    assert_eq!(writer.calls(), 3);
    assert_eq!(critic.calls(), 3);
    assert_eq!(state.jokes.len(), 1);
    assert_eq!(state.jokes[0].text, "third");
    assert_eq!(state.retry_count, 0);
}

#[tokio::test]
async fn rejection_then_approval_publishes_the_approved_draft() {
    let writer = ScriptedProvider::replies(["weak", "strong"]);
    let critic = ScriptedProvider::replies(["reject", "I approve this one"]);
    let mut engine = generative_engine(&["n", "q"], &writer, &critic, FixedScorer::new(0.0));

    let state = engine.run(fresh_state(5)).await.unwrap();

    assert_eq!(writer.calls(), 2);
    assert_eq!(critic.calls(), 2);
    assert_eq!(state.jokes.len(), 1);
    assert_eq!(state.jokes[0].text, "strong");
}

#[tokio::test]
async fn near_duplicate_is_rejected_without_asking_the_critic() {
    let writer = ScriptedProvider::replies(["same joke"]);
    let critic = ScriptedProvider::replies(["approve"]);
    let scorer = FixedScorer::new(0.95);
    let scorer_calls = scorer.call_counter();
    let mut engine = generative_engine(&["n", "n", "q"], &writer, &critic, scorer);

    let state = engine.run(fresh_state(2)).await.unwrap();

    // First joke: empty history, so no scoring and one critic call.
    // Second joke: both drafts fail the novelty gate and the last is shown anyway.
    assert_eq!(critic.calls(), 1);
    assert_eq!(writer.calls(), 3);
    assert_eq!(scorer_calls.load(Ordering::SeqCst), 2);
    assert_eq!(state.jokes.len(), 2);
}

#[tokio::test]
async fn similarity_at_threshold_still_reaches_the_critic() {
    let writer = ScriptedProvider::replies(["one", "two"]);
    let critic = ScriptedProvider::replies(["approve"]);
    let mut engine = generative_engine(&["n", "n", "q"], &writer, &critic, FixedScorer::new(0.8));

    let state = engine.run(fresh_state(5)).await.unwrap();

    assert_eq!(critic.calls(), 2);
    assert_eq!(state.jokes.len(), 2);
}

#[tokio::test]
async fn provider_failure_ends_the_session() {
    let writer = ScriptedProvider::failing("503 Service Unavailable");
    let critic = ScriptedProvider::replies(["approve"]);
    let mut engine = generative_engine(&["n", "q"], &writer, &critic, FixedScorer::new(0.0));

    let err = engine.run(fresh_state(5)).await.unwrap_err();

    assert!(!err.is_recoverable());
    assert!(matches!(
        &err,
        JokeBotError::Llm(LlmError::Request { provider, message })
            if provider == "scripted" && message.contains("503")
    ));
    assert_eq!(critic.calls(), 0);
}

#[tokio::test]
async fn similarity_failure_ends_the_session() {
    let writer = ScriptedProvider::replies(["one", "two"]);
    let critic = ScriptedProvider::replies(["approve"]);
    let mut engine = generative_engine(&["n", "n", "q"], &writer, &critic, FixedScorer::broken());

    let err = engine.run(fresh_state(5)).await.unwrap_err();

    assert!(matches!(err, JokeBotError::Similarity(_)));
    assert_eq!(critic.calls(), 1);
}

#[tokio::test]
async fn blank_drafts_use_up_the_attempts_instead_of_looping() {
    let writer = ScriptedProvider::replies(["   "]);
    let critic = ScriptedProvider::replies(["approve"]);
    let scorer = FixedScorer::new(0.0);
    let scorer_calls = scorer.call_counter();
    let mut engine = generative_engine(&["n", "q"], &writer, &critic, scorer);

    let state = engine.run(fresh_state(3)).await.unwrap();

    assert_eq!(writer.calls(), 3);
    assert_eq!(critic.calls(), 0);
    assert_eq!(scorer_calls.load(Ordering::SeqCst), 0);
    assert_eq!(state.jokes.len(), 1);
    assert_eq!(state.retry_count, 0);
}

#[tokio::test]
async fn exhausted_writer_chain_ends_the_session_with_every_attempt() {
    let primary = ScriptedProvider::failing("503 Service Unavailable");
    let fallback = ScriptedProvider::failing("502 Bad Gateway");
    let first: Box<dyn Provider> = Box::new(SharedProvider(Arc::clone(&primary)));
    let chain = ReliableProvider::new(vec![first], 1, 1)
        .with_fallback(Box::new(SharedProvider(Arc::clone(&fallback))), None);
    let critic = ScriptedProvider::replies(["approve"]);
    let critic_provider: Arc<dyn Provider> = Arc::clone(&critic) as Arc<dyn Provider>;
    let mut engine = generative_engine_with(
        &["n", "q"],
        TextCompletion::new(Arc::new(chain), "primary-model", 0.8),
        TextCompletion::new(critic_provider, "test-critic", 0.1),
        FixedScorer::new(0.0),
    );

    let err = engine.run(fresh_state(5)).await.unwrap_err();

    assert!(!err.is_recoverable());
    let JokeBotError::Llm(LlmError::Exhausted(attempts)) = &err else {
        panic!("expected an exhausted provider chain, got {err}");
    };
    assert!(attempts.contains("503"));
    assert!(attempts.contains("502"));
    assert_eq!(primary.calls(), 2);
    assert_eq!(fallback.calls(), 2);
}

#[tokio::test]
async fn writer_falls_back_to_its_own_model_when_the_primary_fails() {
    let primary = ScriptedProvider::failing("404 model not found");
    let fallback = ScriptedProvider::replies(["Fallback joke"]);
    let first: Box<dyn Provider> = Box::new(SharedProvider(Arc::clone(&primary)));
    let chain = ReliableProvider::new(vec![first], 2, 1)
        .with_fallback(
            Box::new(SharedProvider(Arc::clone(&fallback))),
            Some("llama-3.1-8b-instant".into()),
        );
    let critic = ScriptedProvider::replies(["approve"]);
    let critic_provider: Arc<dyn Provider> = Arc::clone(&critic) as Arc<dyn Provider>;
    let mut engine = generative_engine_with(
        &["n", "q"],
        TextCompletion::new(Arc::new(chain), "gpt-4o-mini", 0.8),
        TextCompletion::new(critic_provider, "test-critic", 0.1),
        FixedScorer::new(0.0),
    );

    let state = engine.run(fresh_state(5)).await.unwrap();

    assert_eq!(state.jokes.len(), 1);
    assert_eq!(state.jokes[0].text, "Fallback joke");
    assert_eq!(primary.models(), ["gpt-4o-mini"]);
    assert_eq!(fallback.models(), ["llama-3.1-8b-instant"]);
}
