use crate::config::SourceKind;
use crate::state::{JokeState, MenuChoice};

/// Every step the session can be in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display)]
#[strum(serialize_all = "snake_case")]
pub enum Node {
    ShowMenu,
    FetchJoke,
    UpdateCategory,
    UpdateLanguage,
    ResetHistory,
    Terminate,
    Write,
    Critique,
    Finalize,
}

impl Node {
    pub const START: Self = Self::ShowMenu;
}

/// Map the menu selection to the node that handles it.
///
/// No recorded choice routes to `Terminate`.
pub fn route_choice(choice: Option<MenuChoice>, source: SourceKind) -> Node {
    match choice {
        Some(MenuChoice::Next) => match source {
            SourceKind::Static => Node::FetchJoke,
            SourceKind::Generative => Node::Write,
        },
        Some(MenuChoice::ChangeCategory) => Node::UpdateCategory,
        Some(MenuChoice::ChangeLanguage) => Node::UpdateLanguage,
        Some(MenuChoice::ResetHistory) => Node::ResetHistory,
        Some(MenuChoice::Quit) | None => Node::Terminate,
    }
}

/// Finalize once the draft is approved or the attempts are used up.
pub fn after_critique(state: &JokeState) -> Node {
    if state.approved || state.retries_exhausted() {
        Node::Finalize
    } else {
        Node::Write
    }
}

/// Successor of `node` given the state after its update was merged.
/// `None` ends the run.
pub fn next_node(node: Node, state: &JokeState, source: SourceKind) -> Option<Node> {
    match node {
        Node::ShowMenu => Some(route_choice(state.choice, source)),
        Node::FetchJoke
        | Node::UpdateCategory
        | Node::UpdateLanguage
        | Node::ResetHistory
        | Node::Finalize => Some(Node::ShowMenu),
        Node::Write => Some(Node::Critique),
        Node::Critique => Some(after_critique(state)),
        Node::Terminate => None,
    }
}
