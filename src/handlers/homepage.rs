use axum::{
    extract::{Form, State},
    http::{header::SET_COOKIE, HeaderMap},
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use axum_extra::extract::CookieJar;
use serde::Deserialize;

use crate::{
    extractors::{match_supported_locale, IsHtmx, Locale},
    names,
    quiz::SessionStore,
    rejections::{AppError, ResultExt},
    utils, AppState,
};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route(names::INDEX_URL, get(index))
        .route(names::SET_LOCALE_URL, post(set_locale))
}

/// The player's current screen. First visits get a player token cookie.
async fn index(
    State(state): State<AppState>,
    jar: CookieJar,
    IsHtmx(is_htmx): IsHtmx,
    Locale(locale): Locale,
) -> Result<Response, AppError> {
    let existing = jar
        .get(names::QUIZ_SESSION_COOKIE_NAME)
        .map(|c| c.value().to_string())
        .filter(|token| !token.is_empty());

    match existing {
        Some(token) => Ok(super::current_screen(&state, &token, is_htmx, &locale)
            .await
            .into_response()),
        None => {
            let token = SessionStore::new_token();
            tracing::info!("new player {token}");

            let page = super::current_screen(&state, &token, is_htmx, &locale).await;
            let cookie = utils::cookie(
                names::QUIZ_SESSION_COOKIE_NAME,
                &token,
                state.secure_cookies,
            );
            let mut headers = HeaderMap::new();
            headers.insert(SET_COOKIE, cookie.parse().reject("could not build session cookie")?);

            Ok((headers, page).into_response())
        }
    }
}

#[derive(Deserialize)]
struct SetLocaleBody {
    lang: String,
}

async fn set_locale(Form(body): Form<SetLocaleBody>) -> Result<impl IntoResponse, AppError> {
    let lang = match_supported_locale(&body.lang).unwrap_or(names::DEFAULT_LOCALE);
    let cookie = format!(
        "{}={lang}; Max-Age=31536000; Path=/; SameSite=Lax",
        names::LOCALE_COOKIE_NAME
    );

    let mut headers = HeaderMap::new();
    headers.insert(SET_COOKIE, cookie.parse().reject("could not build locale cookie")?);
    headers.insert("HX-Refresh", "true".parse().reject("could not build refresh header")?);

    Ok(headers)
}
