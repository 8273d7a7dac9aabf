use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

use crate::error::InputError;

/// A joke accepted into the session history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Joke {
    pub text: String,
    pub category: Category,
}

impl Joke {
    pub fn new(text: impl Into<String>, category: Category) -> Self {
        Self {
            text: text.into(),
            category,
        }
    }
}

#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Category {
    #[default]
    Neutral,
    Specific,
    All,
}

impl Category {
    /// Menu order; the index shown to the user is the position in this array.
    pub const ALL: [Self; 3] = [Self::Neutral, Self::Specific, Self::All];

    /// Subject line handed to the writer prompt.
    pub fn topic(self) -> &'static str {
        match self {
            Self::Neutral => "neutral, everyday programming humour",
            Self::Specific => "Chuck Norris style facts about programming",
            Self::All => "any programming topic",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Self::Neutral => "🎯",
            Self::Specific => "🥋",
            Self::All => "🌟",
        }
    }
}

#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Language {
    #[default]
    En,
    De,
    Es,
}

impl Language {
    pub const ALL: [Self; 3] = [Self::En, Self::De, Self::Es];

    pub fn display_name(self) -> &'static str {
        match self {
            Self::En => "English",
            Self::De => "German",
            Self::Es => "Spanish",
        }
    }
}

/// Validated menu selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum MenuChoice {
    Next,
    ChangeCategory,
    ChangeLanguage,
    ResetHistory,
    Quit,
}

impl MenuChoice {
    /// Parse a raw menu token. Accepts `n`, `c`, `l`, `r`, `q` in any case,
    /// surrounded by any whitespace.
    pub fn parse_token(raw: &str) -> Result<Self, InputError> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "n" => Ok(Self::Next),
            "c" => Ok(Self::ChangeCategory),
            "l" => Ok(Self::ChangeLanguage),
            "r" => Ok(Self::ResetHistory),
            "q" => Ok(Self::Quit),
            other => Err(InputError::UnknownToken(other.to_string())),
        }
    }

    pub fn token(self) -> char {
        match self {
            Self::Next => 'n',
            Self::ChangeCategory => 'c',
            Self::ChangeLanguage => 'l',
            Self::ResetHistory => 'r',
            Self::Quit => 'q',
        }
    }
}

/// Parse a numbered-list selection into an element of `options`.
///
/// Non-numeric input and out-of-range indices are distinct errors so the
/// caller can report which one happened.
pub fn select_index<T: Copy>(raw: &str, options: &[T]) -> Result<T, InputError> {
    let trimmed = raw.trim();
    let digits = trimmed.strip_prefix(['-', '+']).unwrap_or(trimmed);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(InputError::NotANumber(trimmed.to_string()));
    }

    // Well-formed but wider than i64 saturates, so it still reads as out of range.
    let index = trimmed.parse::<i64>().unwrap_or(if trimmed.starts_with('-') {
        i64::MIN
    } else {
        i64::MAX
    });

    usize::try_from(index)
        .ok()
        .and_then(|i| options.get(i).copied())
        .ok_or(InputError::OutOfRange {
            index,
            len: options.len(),
        })
}
