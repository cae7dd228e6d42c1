use std::{collections::HashMap, sync::Arc};

use tokio::sync::Mutex;

use super::{Action, Controller, Outcome, Phase, QuizError};

/// In-memory controllers keyed by player token. Nothing outlives the process.
///
/// Only `Start` creates a controller. A player whose controller drops back to
/// `Idle` (failed fetch, restart) is evicted, so idle players cost nothing.
#[derive(Clone, Default)]
pub struct SessionStore {
    controllers: Arc<Mutex<HashMap<String, Controller>>>,
    seed: Option<u64>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every controller created by this store shuffles from the same seed.
    pub fn seeded(seed: u64) -> Self {
        Self {
            seed: Some(seed),
            ..Self::default()
        }
    }

    pub fn new_token() -> String {
        ulid::Ulid::new().to_string()
    }

    fn controller(&self) -> Controller {
        match self.seed {
            Some(seed) => Controller::with_seed(seed),
            None => Controller::new(),
        }
    }

    /// Dispatch `action` to the player's controller. Unknown players only
    /// get a controller for `Start`; anything else is an invalid action.
    pub async fn dispatch(&self, token: &str, action: Action) -> Result<Outcome, QuizError> {
        let mut controllers = self.controllers.lock().await;

        let Some(controller) = controllers.get_mut(token) else {
            if !matches!(action, Action::Start(_)) {
                tracing::debug!(action = action.name(), "no controller for player {token}");
                return Err(QuizError::InvalidAction);
            }
            let mut controller = self.controller();
            let result = controller.dispatch(action);
            if result.is_ok() {
                tracing::debug!("new controller for player {token}");
                controllers.insert(token.to_owned(), controller);
            }
            return result;
        };

        let result = controller.dispatch(action);
        if matches!(controller.phase(), Phase::Idle) {
            controllers.remove(token);
            tracing::debug!("evicted idle player {token}");
        }
        result
    }

    /// Read the player's controller without creating one. `None` means the
    /// player is idle.
    pub async fn peek<R>(&self, token: &str, f: impl FnOnce(&Controller) -> R) -> Option<R> {
        self.controllers.lock().await.get(token).map(f)
    }

    pub async fn len(&self) -> usize {
        self.controllers.lock().await.len()
    }
}
