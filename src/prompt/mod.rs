mod engine;
mod templates;

pub use engine::TeraEngine;
pub use templates::{EVALUATE_JOKE, PromptTemplates, TaskSpec, WRITE_JOKE};
