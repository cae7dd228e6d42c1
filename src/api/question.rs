use super::{ApiError, Client, Filters, Question, QuestionsResponse};
use crate::names;

impl Client {
    pub async fn fetch_questions(&self, filters: &Filters) -> Result<Vec<Question>, ApiError> {
        let url = self.url(names::QUESTIONS_PATH);
        let query = filters.query();
        tracing::debug!(?query, "fetching questions from {url}");

        let body = self
            .http
            .get(&url)
            .query(&query)
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;

        let questions = parse_questions(&body)?;
        tracing::info!("loaded {} questions", questions.len());
        Ok(questions)
    }
}

pub(crate) fn parse_questions(body: &str) -> Result<Vec<Question>, ApiError> {
    let resp = serde_json::from_str::<QuestionsResponse>(body)
        .map_err(|e| ApiError::Format(e.to_string()))?;

    match resp.response_code {
        0 if !resp.results.is_empty() => resp.results.into_iter().map(Question::try_from).collect(),
        code => {
            tracing::warn!(
                "trivia api answered code {code} with {} results",
                resp.results.len()
            );
            Err(ApiError::from_response_code(code))
        }
    }
}
