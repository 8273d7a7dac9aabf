#![warn(clippy::all, clippy::pedantic)]
#![allow(
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::unnecessary_literal_bound,
    clippy::module_name_repetitions,
    clippy::struct_field_names,
    clippy::must_use_candidate,
    clippy::new_without_default,
    clippy::return_self_not_must_use
)]

pub mod cli;
pub mod config;
pub mod error;
pub mod prompt;
pub mod providers;
pub mod similarity;
pub mod source;
pub mod state;
pub mod ui;
pub mod workflow;

pub use config::Config;
pub use error::{JokeBotError, Result};
pub use source::JokeSource;
pub use state::JokeState;
pub use workflow::WorkflowEngine;
