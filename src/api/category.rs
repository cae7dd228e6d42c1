use super::{ApiError, CategoriesResponse, Category, Client};
use crate::names;

impl Client {
    pub async fn fetch_categories(&self) -> Result<Vec<Category>, ApiError> {
        let url = self.url(names::CATEGORY_PATH);
        tracing::debug!("fetching categories from {url}");

        let body = self
            .http
            .get(&url)
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;

        let categories = parse_categories(&body)?;
        tracing::debug!("loaded {} categories", categories.len());
        Ok(categories)
    }
}

pub(crate) fn parse_categories(body: &str) -> Result<Vec<Category>, ApiError> {
    serde_json::from_str::<CategoriesResponse>(body)
        .map(|resp| resp.trivia_categories)
        .map_err(|e| ApiError::Format(e.to_string()))
}
