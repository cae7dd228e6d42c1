use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use maud::html;

use crate::views;

/// Errors that end a request with an error page instead of a screen.
#[derive(Debug)]
pub enum AppError {
    Internal(&'static str),
    Input(&'static str),
    Unauthorized,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (code, message, detail) = match self {
            AppError::Internal(detail) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "INTERNAL_SERVER_ERROR",
                Some(detail),
            ),
            AppError::Input(detail) => (StatusCode::BAD_REQUEST, "INPUT_ERROR", Some(detail)),
            AppError::Unauthorized => (StatusCode::UNAUTHORIZED, "UNAUTHORIZED", None),
        };

        let page = views::page(
            "Error",
            html! {
                h1 { (message) }
                @if let Some(detail) = detail {
                    p { (detail) }
                }
                a href="/" { "Back to the quiz" }
            },
            crate::names::DEFAULT_LOCALE,
        );
        (code, page).into_response()
    }
}

pub trait ResultExt<T> {
    fn reject(self, message: &'static str) -> Result<T, AppError>;
    fn reject_input(self, message: &'static str) -> Result<T, AppError>;
}

impl<T, E: std::fmt::Display> ResultExt<T> for Result<T, E> {
    fn reject(self, message: &'static str) -> Result<T, AppError> {
        self.map_err(|e| {
            tracing::error!("{message}: {e}");
            AppError::Internal(message)
        })
    }

    fn reject_input(self, message: &'static str) -> Result<T, AppError> {
        self.map_err(|e| {
            tracing::warn!("{message}: {e}");
            AppError::Input(message)
        })
    }
}
