use rand::{rngs::StdRng, SeedableRng};

use super::{QuizError, QuizSession};
use crate::api::{ApiError, Filters, Question};

/// Where a player's quiz currently stands.
#[derive(Debug)]
pub enum Phase {
    Idle,
    Loading(Filters),
    InProgress(QuizSession),
    Finished(QuizSession),
}

impl Phase {
    pub fn name(&self) -> &'static str {
        match self {
            Phase::Idle => "idle",
            Phase::Loading(_) => "loading",
            Phase::InProgress(_) => "in_progress",
            Phase::Finished(_) => "finished",
        }
    }
}

/// Everything a player can do, plus the completion of the question fetch.
#[derive(Debug)]
pub enum Action {
    Start(Filters),
    Loaded(Result<Vec<Question>, ApiError>),
    Select(usize),
    Next,
    Quit,
    ConfirmQuit,
    CancelQuit,
    Restart,
}

impl Action {
    pub fn name(&self) -> &'static str {
        match self {
            Action::Start(_) => "start",
            Action::Loaded(_) => "loaded",
            Action::Select(_) => "select",
            Action::Next => "next",
            Action::Quit => "quit",
            Action::ConfirmQuit => "confirm_quit",
            Action::CancelQuit => "cancel_quit",
            Action::Restart => "restart",
        }
    }
}

#[derive(Debug, PartialEq, Eq)]
pub enum Outcome {
    /// The question fetch may begin.
    Loading,
    /// A session has started on its first question.
    Started,
    /// The question fetch failed; back to idle.
    Failed(ApiError),
    Selected,
    /// An option was already chosen for this question.
    Ignored,
    Advanced,
    Finished,
    ConfirmingQuit,
    Resumed,
    Reset,
}

/// Owns one player's quiz and applies actions to it.
pub struct Controller {
    phase: Phase,
    rng: StdRng,
}

impl Default for Controller {
    fn default() -> Self {
        Self::new()
    }
}

impl Controller {
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    /// Reproducible option order, for tests.
    pub fn with_seed(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    fn with_rng(rng: StdRng) -> Self {
        Self {
            phase: Phase::Idle,
            rng,
        }
    }

    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    pub fn dispatch(&mut self, action: Action) -> Result<Outcome, QuizError> {
        let action_name = action.name();
        let result = match action {
            Action::Start(filters) => self.start(filters),
            Action::Loaded(result) => self.loaded(result),
            Action::Select(option_idx) => self.select(option_idx),
            Action::Next => self.next(),
            Action::Quit => self.quit(),
            Action::ConfirmQuit => self.confirm_quit(),
            Action::CancelQuit => self.cancel_quit(),
            Action::Restart => self.restart(),
        };

        match &result {
            Ok(outcome) => {
                tracing::debug!(action = action_name, phase = self.phase.name(), ?outcome, "dispatched")
            }
            Err(e) => tracing::warn!(action = action_name, phase = self.phase.name(), "rejected: {e}"),
        }
        result
    }

    fn start(&mut self, filters: Filters) -> Result<Outcome, QuizError> {
        match self.phase {
            Phase::Idle => {
                self.phase = Phase::Loading(filters);
                Ok(Outcome::Loading)
            }
            Phase::Loading(_) => Err(QuizError::Busy),
            _ => Err(QuizError::InvalidAction),
        }
    }

    fn loaded(&mut self, result: Result<Vec<Question>, ApiError>) -> Result<Outcome, QuizError> {
        let Phase::Loading(filters) = &self.phase else {
            return Err(QuizError::InvalidAction);
        };

        let session = result.and_then(|questions| {
            QuizSession::new(questions, &mut self.rng).ok_or(ApiError::NoContent)
        });

        match session {
            Ok(session) => {
                tracing::info!(?filters, total = session.total(), "quiz loaded");
                self.phase = Phase::InProgress(session);
                Ok(Outcome::Started)
            }
            Err(e) => {
                tracing::info!(?filters, "no quiz for these filters: {e}");
                self.phase = Phase::Idle;
                Ok(Outcome::Failed(e))
            }
        }
    }

    fn select(&mut self, option_idx: usize) -> Result<Outcome, QuizError> {
        let session = self.in_progress()?;
        if session.confirming_quit() {
            return Err(QuizError::InvalidAction);
        }
        match session.select(option_idx)? {
            true => Ok(Outcome::Selected),
            false => Ok(Outcome::Ignored),
        }
    }

    fn next(&mut self) -> Result<Outcome, QuizError> {
        let Phase::InProgress(session) = &mut self.phase else {
            return Err(QuizError::InvalidAction);
        };
        if session.confirming_quit() {
            return Err(QuizError::InvalidAction);
        }
        session.submit(&mut self.rng)?;

        if session.is_complete() {
            self.finish();
            Ok(Outcome::Finished)
        } else {
            Ok(Outcome::Advanced)
        }
    }

    fn quit(&mut self) -> Result<Outcome, QuizError> {
        self.in_progress()?.set_confirming_quit(true);
        Ok(Outcome::ConfirmingQuit)
    }

    fn confirm_quit(&mut self) -> Result<Outcome, QuizError> {
        let session = self.in_progress()?;
        if !session.confirming_quit() {
            return Err(QuizError::InvalidAction);
        }
        session.abandon();
        self.finish();
        Ok(Outcome::Finished)
    }

    fn cancel_quit(&mut self) -> Result<Outcome, QuizError> {
        self.in_progress()?.set_confirming_quit(false);
        Ok(Outcome::Resumed)
    }

    fn restart(&mut self) -> Result<Outcome, QuizError> {
        match self.phase {
            Phase::Finished(_) => {
                self.phase = Phase::Idle;
                Ok(Outcome::Reset)
            }
            _ => Err(QuizError::InvalidAction),
        }
    }

    fn in_progress(&mut self) -> Result<&mut QuizSession, QuizError> {
        match &mut self.phase {
            Phase::InProgress(session) => Ok(session),
            _ => Err(QuizError::InvalidAction),
        }
    }

    fn finish(&mut self) {
        if let Phase::InProgress(session) = std::mem::replace(&mut self.phase, Phase::Idle) {
            self.phase = Phase::Finished(session);
        }
    }
}
