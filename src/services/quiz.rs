use crate::api::{self, ApiError, Category, Filters, Question};
use crate::quiz::{Action, Outcome, QuizError, SessionStore};

// ---------------------------------------------------------------------------
// TriviaSource trait (the service defines the abstraction it needs)
// ---------------------------------------------------------------------------

#[cfg_attr(test, mockall::automock)]
pub trait TriviaSource: Send + Sync {
    fn fetch_categories(
        &self,
    ) -> impl std::future::Future<Output = Result<Vec<Category>, ApiError>> + Send;

    fn fetch_questions(
        &self,
        filters: &Filters,
    ) -> impl std::future::Future<Output = Result<Vec<Question>, ApiError>> + Send;
}

impl TriviaSource for api::Client {
    async fn fetch_categories(&self) -> Result<Vec<Category>, ApiError> {
        api::Client::fetch_categories(self).await
    }

    async fn fetch_questions(&self, filters: &Filters) -> Result<Vec<Question>, ApiError> {
        api::Client::fetch_questions(self, filters).await
    }
}

// ---------------------------------------------------------------------------
// QuizService
// ---------------------------------------------------------------------------

/// Couples the player controllers with the trivia source: the only place that
/// waits on the network while a quiz is being set up.
pub struct QuizService<S: TriviaSource = api::Client> {
    source: S,
    sessions: SessionStore,
}

impl<S: TriviaSource + Clone> Clone for QuizService<S> {
    fn clone(&self) -> Self {
        Self {
            source: self.source.clone(),
            sessions: self.sessions.clone(),
        }
    }
}

impl<S: TriviaSource> QuizService<S> {
    pub fn new(source: S, sessions: SessionStore) -> Self {
        Self { source, sessions }
    }

    pub fn sessions(&self) -> &SessionStore {
        &self.sessions
    }

    pub async fn categories(&self) -> Result<Vec<Category>, ApiError> {
        self.source.fetch_categories().await
    }

    /// Move the player into `Loading`, fetch the batch, and hand the result to
    /// the controller. The store is not locked while the request is out; a
    /// second start in the meantime is turned away as [`QuizError::Busy`].
    pub async fn start(&self, token: &str, filters: Filters) -> Result<Outcome, QuizError> {
        self.sessions
            .dispatch(token, Action::Start(filters.clone()))
            .await?;

        let result = self.source.fetch_questions(&filters).await;
        if let Err(e) = &result {
            tracing::warn!("could not load questions for {token}: {e}");
        }

        self.sessions.dispatch(token, Action::Loaded(result)).await
    }

    /// Apply an action that needs no network.
    pub async fn act(&self, token: &str, action: Action) -> Result<Outcome, QuizError> {
        self.sessions.dispatch(token, action).await
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::sync::Arc;

    use tokio::sync::Notify;

    use super::*;
    use crate::{
        api::{Difficulty, QuestionType},
        quiz::Phase,
    };

    fn questions(n: usize) -> Vec<Question> {
        (0..n)
            .map(|i| Question {
                category: "Science: Nature".to_string(),
                kind: QuestionType::Boolean,
                difficulty: Difficulty::Hard,
                question: format!("Statement {i}"),
                correct_answer: "True".to_string(),
                incorrect_answers: vec!["False".to_string()],
            })
            .collect()
    }

    fn service(mock: MockTriviaSource) -> QuizService<MockTriviaSource> {
        QuizService::new(mock, SessionStore::seeded(5))
    }

    async fn phase_name<S: TriviaSource>(svc: &QuizService<S>, token: &str) -> Option<&'static str> {
        svc.sessions().peek(token, |c| c.phase().name()).await
    }

    #[tokio::test]
    async fn start_enters_first_question() {
        let mut mock = MockTriviaSource::new();
        mock.expect_fetch_questions()
            .times(1)
            .returning(|_| Box::pin(async { Ok(questions(5)) }));

        let svc = service(mock);
        let outcome = svc.start("p1", Filters::default()).await.unwrap();

        assert_eq!(outcome, Outcome::Started);
        assert_eq!(phase_name(&svc, "p1").await, Some("in_progress"));
    }

    #[tokio::test]
    async fn start_passes_filters_through() {
        let mut mock = MockTriviaSource::new();
        mock.expect_fetch_questions()
            .withf(|f| {
                f.category == Some(18)
                    && f.difficulty == Some(Difficulty::Easy)
                    && f.kind == Some(QuestionType::Multiple)
                    && f.amount == 7
            })
            .returning(|_| Box::pin(async { Ok(questions(7)) }));

        let svc = service(mock);
        let filters = Filters {
            category: Some(18),
            difficulty: Some(Difficulty::Easy),
            kind: Some(QuestionType::Multiple),
            amount: 7,
        };
        assert_eq!(svc.start("p1", filters).await, Ok(Outcome::Started));
    }

    #[tokio::test]
    async fn failed_fetch_leaves_player_idle() {
        let mut mock = MockTriviaSource::new();
        mock.expect_fetch_questions()
            .returning(|_| Box::pin(async { Err(ApiError::NoResults) }));

        let svc = service(mock);
        let outcome = svc.start("p1", Filters::default()).await.unwrap();

        assert_eq!(outcome, Outcome::Failed(ApiError::NoResults));
        assert_eq!(phase_name(&svc, "p1").await, None);
        assert_eq!(svc.sessions().len().await, 0);
    }

    #[tokio::test]
    async fn second_start_while_loading_is_busy() {
        let release = Arc::new(Notify::new());
        let gate = release.clone();

        let mut mock = MockTriviaSource::new();
        mock.expect_fetch_questions().times(1).returning(move |_| {
            let gate = gate.clone();
            Box::pin(async move {
                gate.notified().await;
                Ok(questions(2))
            })
        });

        let svc = Arc::new(service(mock));
        let first = {
            let svc = svc.clone();
            tokio::spawn(async move { svc.start("p1", Filters::default()).await })
        };

        while phase_name(&svc, "p1").await != Some("loading") {
            tokio::task::yield_now().await;
        }
        assert_eq!(
            svc.start("p1", Filters::default()).await,
            Err(QuizError::Busy)
        );

        release.notify_one();
        assert_eq!(first.await.unwrap(), Ok(Outcome::Started));
    }

    #[tokio::test]
    async fn act_applies_actions_to_the_right_player() {
        let mut mock = MockTriviaSource::new();
        mock.expect_fetch_questions()
            .returning(|_| Box::pin(async { Ok(questions(1)) }));

        let svc = service(mock);
        svc.start("p1", Filters::default()).await.unwrap();

        assert_eq!(svc.act("p1", Action::Select(0)).await, Ok(Outcome::Selected));
        assert_eq!(svc.act("p1", Action::Next).await, Ok(Outcome::Finished));
        assert_eq!(svc.act("p2", Action::Next).await, Err(QuizError::InvalidAction));

        let finished = svc
            .sessions()
            .peek("p1", |c| matches!(c.phase(), Phase::Finished(s) if s.answers().len() == 1))
            .await;
        assert_eq!(finished, Some(true));
        assert_eq!(svc.sessions().len().await, 1);
    }

    #[tokio::test]
    async fn categories_come_from_the_source() {
        let mut mock = MockTriviaSource::new();
        mock.expect_fetch_categories().returning(|| {
            Box::pin(async {
                Ok(vec![Category {
                    id: 9,
                    name: "General Knowledge".to_string(),
                }])
            })
        });

        let svc = service(mock);
        let categories = svc.categories().await.unwrap();
        assert_eq!(categories[0].name, "General Knowledge");
    }
}
