mod model;
mod session;

pub use model::{Category, Joke, Language, MenuChoice, select_index};
pub use session::{DEFAULT_MAX_RETRIES, JokeState, JokeUpdate, JokesUpdate};
