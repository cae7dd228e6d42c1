// Open Trivia Database client

use std::{sync::Arc, time::Duration};

pub mod decode;
pub mod models;
pub use models::*;

mod category;
mod error;
mod question;

pub use error::ApiError;

#[derive(Clone)]
pub struct Client {
    http: reqwest::Client,
    base_url: Arc<str>,
}

impl Client {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, ApiError> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(concat!("trivia-quiz/", env!("CARGO_PKG_VERSION")))
            .build()?;

        tracing::info!("trivia api client targets {base_url}");

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').into(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{path}", self.base_url)
    }
}
