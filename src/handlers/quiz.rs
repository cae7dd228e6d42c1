use axum::{
    extract::{Form, Path, State},
    response::{IntoResponse, Response},
    routing::post,
    Router,
};
use serde::Deserialize;

use super::{current_screen, notice_response};
use crate::{
    api::{Difficulty, Filters, QuestionType},
    extractors::{IsHtmx, Locale, Player},
    names,
    quiz::{Action, Outcome, QuizError},
    rejections::{AppError, ResultExt},
    views::components::{api_error_message, quiz_error_message, NoticeKind},
    AppState,
};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route(names::START_QUIZ_URL, post(start_quiz))
        .route("/select/{option_idx}", post(select_option))
        .route(names::NEXT_QUESTION_URL, post(next_question))
        .route(names::QUIT_URL, post(quit))
        .route(names::CONFIRM_QUIT_URL, post(confirm_quit))
        .route(names::CANCEL_QUIT_URL, post(cancel_quit))
        .route(names::RESTART_URL, post(restart))
}

/// The settings form. Every field is a string; an empty one means "any".
#[derive(Deserialize)]
struct StartQuizBody {
    #[serde(default)]
    category: String,
    #[serde(default)]
    difficulty: String,
    #[serde(default, rename = "type")]
    kind: String,
    #[serde(default)]
    amount: String,
}

impl StartQuizBody {
    fn filters(&self) -> Result<Filters, String> {
        let category = match self.category.trim() {
            "" => None,
            id => Some(id.parse::<u32>().map_err(|e| format!("category '{id}': {e}"))?),
        };
        let difficulty = match self.difficulty.trim() {
            "" => None,
            value => Some(
                Difficulty::parse(value).ok_or_else(|| format!("unknown difficulty '{value}'"))?,
            ),
        };
        let kind = match self.kind.trim() {
            "" => None,
            value => Some(
                QuestionType::parse(value).ok_or_else(|| format!("unknown question type '{value}'"))?,
            ),
        };
        let amount = match self.amount.trim() {
            "" => names::DEFAULT_QUESTION_AMOUNT,
            value => value
                .parse::<u32>()
                .map_err(|e| format!("amount '{value}': {e}"))?
                .clamp(names::MIN_QUESTION_AMOUNT, names::MAX_QUESTION_AMOUNT),
        };

        Ok(Filters {
            category,
            difficulty,
            kind,
            amount,
        })
    }
}

/// Turn a dispatch result into a response: a fresh screen on success, a
/// banner over the untouched screen otherwise.
async fn respond(
    state: &AppState,
    token: &str,
    outcome: Result<Outcome, QuizError>,
    is_htmx: bool,
    locale: &str,
) -> Response {
    match outcome {
        Ok(Outcome::Failed(e)) => notice_response(NoticeKind::Error, &api_error_message(&e, locale)),
        Ok(_) => current_screen(state, token, is_htmx, locale)
            .await
            .into_response(),
        Err(e) => notice_response(NoticeKind::Warning, &quiz_error_message(&e, locale)),
    }
}

async fn apply(
    state: AppState,
    Player(token): Player,
    IsHtmx(is_htmx): IsHtmx,
    Locale(locale): Locale,
    action: Action,
) -> Response {
    let outcome = state.quiz.act(&token, action).await;
    respond(&state, &token, outcome, is_htmx, &locale).await
}

async fn start_quiz(
    State(state): State<AppState>,
    Player(token): Player,
    IsHtmx(is_htmx): IsHtmx,
    Locale(locale): Locale,
    Form(body): Form<StartQuizBody>,
) -> Result<Response, AppError> {
    let filters = body.filters().reject_input("invalid quiz settings")?;
    tracing::info!(?filters, "starting quiz for {token}");

    // Detached so the controller always leaves Loading, even if the browser
    // drops the request while the question batch is on its way.
    let quiz = state.quiz.clone();
    let player = token.clone();
    let outcome = tokio::spawn(async move { quiz.start(&player, filters).await })
        .await
        .reject("question loading task failed")?;

    Ok(respond(&state, &token, outcome, is_htmx, &locale).await)
}

async fn select_option(
    State(state): State<AppState>,
    player: Player,
    is_htmx: IsHtmx,
    locale: Locale,
    Path(option_idx): Path<usize>,
) -> Response {
    apply(state, player, is_htmx, locale, Action::Select(option_idx)).await
}

async fn next_question(
    State(state): State<AppState>,
    player: Player,
    is_htmx: IsHtmx,
    locale: Locale,
) -> Response {
    apply(state, player, is_htmx, locale, Action::Next).await
}

async fn quit(
    State(state): State<AppState>,
    player: Player,
    is_htmx: IsHtmx,
    locale: Locale,
) -> Response {
    apply(state, player, is_htmx, locale, Action::Quit).await
}

async fn confirm_quit(
    State(state): State<AppState>,
    player: Player,
    is_htmx: IsHtmx,
    locale: Locale,
) -> Response {
    apply(state, player, is_htmx, locale, Action::ConfirmQuit).await
}

async fn cancel_quit(
    State(state): State<AppState>,
    player: Player,
    is_htmx: IsHtmx,
    locale: Locale,
) -> Response {
    apply(state, player, is_htmx, locale, Action::CancelQuit).await
}

async fn restart(
    State(state): State<AppState>,
    player: Player,
    is_htmx: IsHtmx,
    locale: Locale,
) -> Response {
    apply(state, player, is_htmx, locale, Action::Restart).await
}
