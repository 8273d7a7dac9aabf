pub mod console;
pub mod render;
pub mod style;

pub use console::{Console, ScriptedConsole, TermConsole};
