// Quiz state: the per-player session and the state machine around it

mod controller;
mod session;
mod store;

pub use controller::{Action, Controller, Outcome, Phase};
pub use session::{shuffled_options, AnswerRecord, QuizSession};
pub use store::SessionStore;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum QuizError {
    #[error("questions are already loading")]
    Busy,
    #[error("action not available in the current phase")]
    InvalidAction,
    #[error("no option selected")]
    NoSelection,
    #[error("option {0} does not exist")]
    OptionOutOfRange(usize),
}

