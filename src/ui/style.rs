use console::style;
use std::fmt::Display;

/// Green bold - success confirmations
pub fn success<D: Display>(text: D) -> String {
    style(text).green().bold().to_string()
}

/// White bold - section headers, titles
pub fn header<D: Display>(text: D) -> String {
    style(text).white().bold().to_string()
}

/// Dim - decorative rules, secondary text
pub fn dim<D: Display>(text: D) -> String {
    style(text).dim().to_string()
}

/// Yellow - warnings, cancelled actions
pub fn yellow<D: Display>(text: D) -> String {
    style(text).yellow().to_string()
}

/// Red bold - visible failures
pub fn error<D: Display>(text: D) -> String {
    style(text).red().bold().to_string()
}

/// Green - current values in the menu header
pub fn value<D: Display>(text: D) -> String {
    style(text).green().to_string()
}

/// Cyan bold - option keys and list indices
pub fn accent<D: Display>(text: D) -> String {
    style(text).cyan().bold().to_string()
}

/// Horizontal rule of `width` characters.
pub fn rule(ch: char, width: usize) -> String {
    dim(ch.to_string().repeat(width))
}
