use super::model::{Category, Joke, Language, MenuChoice};

pub const DEFAULT_MAX_RETRIES: u32 = 5;

/// The single mutable record threaded through every workflow step.
#[derive(Debug, Clone, PartialEq)]
pub struct JokeState {
    pub jokes: Vec<Joke>,
    pub choice: Option<MenuChoice>,
    pub category: Category,
    pub language: Language,
    pub latest_draft: String,
    pub approved: bool,
    pub retry_count: u32,
    pub max_retries: u32,
    pub quit: bool,
}

impl Default for JokeState {
    fn default() -> Self {
        Self {
            jokes: Vec::new(),
            choice: None,
            category: Category::default(),
            language: Language::default(),
            latest_draft: String::new(),
            approved: false,
            retry_count: 0,
            max_retries: DEFAULT_MAX_RETRIES,
            quit: false,
        }
    }
}

impl JokeState {
    pub fn new(category: Category, language: Language, max_retries: u32) -> Self {
        Self {
            category,
            language,
            max_retries: max_retries.max(1),
            ..Self::default()
        }
    }

    /// Fold a node's partial update into the state.
    ///
    /// `jokes` appends unless the update asks for a wholesale replacement;
    /// every other field is last-write-wins.
    pub fn merge(&mut self, update: JokeUpdate) {
        match update.jokes {
            Some(JokesUpdate::Append(mut new)) => self.jokes.append(&mut new),
            Some(JokesUpdate::Replace(all)) => self.jokes = all,
            None => {}
        }
        if let Some(choice) = update.choice {
            self.choice = Some(choice);
        }
        if let Some(category) = update.category {
            self.category = category;
        }
        if let Some(language) = update.language {
            self.language = language;
        }
        if let Some(draft) = update.latest_draft {
            self.latest_draft = draft;
        }
        if let Some(approved) = update.approved {
            self.approved = approved;
        }
        if let Some(retry_count) = update.retry_count {
            self.retry_count = retry_count.min(self.max_retries);
        }
        if let Some(quit) = update.quit {
            self.quit = quit;
        }

        // An empty draft can never be the approved one.
        if self.latest_draft.is_empty() {
            self.approved = false;
        }
    }

    pub fn retries_exhausted(&self) -> bool {
        self.retry_count >= self.max_retries
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum JokesUpdate {
    Append(Vec<Joke>),
    Replace(Vec<Joke>),
}

/// Partial update returned by a workflow node. `None` leaves a field untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct JokeUpdate {
    pub jokes: Option<JokesUpdate>,
    pub choice: Option<MenuChoice>,
    pub category: Option<Category>,
    pub language: Option<Language>,
    pub latest_draft: Option<String>,
    pub approved: Option<bool>,
    pub retry_count: Option<u32>,
    pub quit: Option<bool>,
}

impl JokeUpdate {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn append_joke(joke: Joke) -> Self {
        Self {
            jokes: Some(JokesUpdate::Append(vec![joke])),
            ..Self::default()
        }
    }

    pub fn clear_jokes() -> Self {
        Self {
            jokes: Some(JokesUpdate::Replace(Vec::new())),
            ..Self::default()
        }
    }

    pub fn choice(choice: MenuChoice) -> Self {
        Self {
            choice: Some(choice),
            ..Self::default()
        }
    }

    pub fn category(category: Category) -> Self {
        Self {
            category: Some(category),
            ..Self::default()
        }
    }

    pub fn language(language: Language) -> Self {
        Self {
            language: Some(language),
            ..Self::default()
        }
    }

    pub fn quit() -> Self {
        Self {
            quit: Some(true),
            ..Self::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}
