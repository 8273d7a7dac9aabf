//! Fixed-layout screens printed by the workflow nodes.

use super::console::Console;
use super::style as ui;
use crate::state::{Category, Joke, Language};

const WIDTH: usize = 50;

pub const MENU_PROMPT: &str = "[n] Next Joke  [c] Change Category  [l] Change Language  [r] Reset Joke History  [q] Quit\nUser Input: ";

pub fn welcome(console: &mut dyn Console, mode_line: &str) {
    console.print(&ui::header("Welcome to the Joke Bot!"));
    console.print(&ui::dim(mode_line));
    console.print(&ui::rule('=', 70));
    console.print("");
}

pub fn menu_header(console: &mut dyn Console, category: Category, language: Language, total: usize) {
    console.print("");
    console.print(&format!(
        " Menu | Category: {} | Language: {} | Jokes: {}",
        ui::value(category.to_string().to_uppercase()),
        ui::value(language.to_string().to_uppercase()),
        ui::value(total),
    ));
    console.print(&ui::rule('-', 40));
    console.print("Pick an option:");
}

fn selection_banner(console: &mut dyn Console, title: &str) {
    console.print(&format!("📂{}📂", ui::rule('=', WIDTH - 2)));
    console.print(&ui::header(format!("       {title}")));
    console.print(&ui::rule('-', WIDTH));
}

pub fn category_menu(console: &mut dyn Console) {
    selection_banner(console, "CATEGORY SELECTION");
    for (i, category) in Category::ALL.iter().enumerate() {
        console.print(&format!(
            "    {}. {} {}",
            ui::accent(i),
            category.icon(),
            category.to_string().to_uppercase()
        ));
    }
    console.print(&ui::rule('=', WIDTH));
}

pub fn language_menu(console: &mut dyn Console) {
    selection_banner(console, "LANGUAGE SELECTION");
    for (i, language) in Language::ALL.iter().enumerate() {
        console.print(&format!(
            "    {}. 🎯 {} ({})",
            ui::accent(i),
            language.to_string().to_uppercase(),
            language.display_name()
        ));
    }
    console.print(&ui::rule('=', WIDTH));
}

pub fn joke(console: &mut dyn Console, joke: &Joke) {
    console.print("");
    console.print(&joke.text);
    console.print("");
    console.print(&ui::rule('=', WIDTH));
}

pub fn reset_done(console: &mut dyn Console) {
    console.print("");
    console.print(&format!("❌{}❌", ui::rule('=', WIDTH - 2)));
    console.print(&ui::success("       RESET COMPLETED - Joke history cleared!"));
    console.print(&ui::rule('-', WIDTH));
}

pub fn goodbye(console: &mut dyn Console) {
    console.print("");
    console.print(&format!("🚪{}🚪", ui::rule('=', WIDTH)));
    console.print(&ui::header("     GOODBYE!"));
    console.print(&format!("🚪{}🚪", ui::rule('=', WIDTH)));
}

pub fn summary(console: &mut dyn Console, category: Category, total: usize) {
    console.print("");
    console.print(&format!(
        "Final category: {}",
        ui::value(category.to_string().to_uppercase())
    ));
    console.print(&format!("Jokes told: {}", ui::value(total)));
    console.print(&ui::dim("Thanks for using the Joke Bot!"));
}

pub fn failure(console: &mut dyn Console, message: &str) {
    console.print(&ui::error(message));
}

pub fn notice(console: &mut dyn Console, message: &str) {
    console.print(&ui::yellow(message));
}

pub fn confirmation(console: &mut dyn Console, message: &str) {
    console.print(&ui::success(message));
}
