//! The session state machine.

mod engine;
mod node;
mod nodes;

pub use engine::WorkflowEngine;
pub use node::{Node, after_critique, next_node, route_choice};
