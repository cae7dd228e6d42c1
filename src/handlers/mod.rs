pub mod homepage;
pub mod quiz;

use axum::response::{IntoResponse, Response};
use maud::Markup;
use rust_i18n::t;

use crate::{
    views::{
        self,
        components::{self, NoticeKind},
        settings::SettingsData,
    },
    AppState,
};

/// Banner-only answer to an htmx request: lands in `#notice` and leaves the
/// screen the player was looking at alone.
pub(crate) fn notice_response(kind: NoticeKind, message: &str) -> Response {
    (
        [("HX-Retarget", "#notice"), ("HX-Reswap", "innerHTML")],
        components::notice(kind, message),
    )
        .into_response()
}

pub(crate) async fn settings_screen(state: &AppState, locale: &str) -> Markup {
    let categories = match state.quiz.categories().await {
        Ok(categories) => Some(categories),
        Err(e) => {
            tracing::error!("could not load categories: {e}");
            None
        }
    };
    views::settings::settings(&SettingsData { categories }, locale)
}

/// Whatever the player's controller says should be on screen. Players
/// without one see the settings screen.
pub(crate) async fn current_screen(
    state: &AppState,
    token: &str,
    is_htmx: bool,
    locale: &str,
) -> Markup {
    let screen = state
        .quiz
        .sessions()
        .peek(token, |c| views::screen(c.phase(), locale))
        .await
        .flatten();

    let (title, body) = match screen {
        Some(screen) => screen,
        None => (
            t!("settings.title", locale = locale).to_string(),
            settings_screen(state, locale).await,
        ),
    };
    views::render(is_htmx, &title, body, locale)
}
