#![allow(dead_code)]

use std::{
    collections::HashMap,
    sync::{Arc, Mutex},
    time::Duration,
};

use axum::{
    body::Body,
    extract::Query,
    http::{header, HeaderMap, Method, Request, StatusCode},
    routing::get,
    Json, Router,
};
use serde_json::{json, Value};
use tower::ServiceExt;
use trivia_quiz::{api, names, quiz::SessionStore, router, services::QuizService, AppState};

pub const CATEGORIES: &str = r#"{"trivia_categories":[{"id":9,"name":"General Knowledge"},{"id":18,"name":"Science: Computers"}]}"#;

pub type SeenQueries = Arc<Mutex<Vec<HashMap<String, String>>>>;

/// A batch the way the trivia API sends it with `encode=url3986`.
pub fn encoded_questions(n: usize) -> Value {
    let results: Vec<Value> = (1..=n)
        .map(|i| {
            json!({
                "type": "multiple",
                "difficulty": "easy",
                "category": "General%20Knowledge",
                "question": format!("Question%20number%20{i}%3F"),
                "correct_answer": format!("Right%20{i}"),
                "incorrect_answers": [
                    format!("Wrong%20{i}a"),
                    format!("Wrong%20{i}b"),
                    format!("Wrong%20{i}c"),
                ],
            })
        })
        .collect();
    json!({ "response_code": 0, "results": results })
}

/// Stand-in for the trivia API. Records the query of every `api.php` call.
pub fn stub_api(categories: (StatusCode, &'static str), questions: Value) -> (Router, SeenQueries) {
    let seen = SeenQueries::default();
    let recorded = seen.clone();

    let router = Router::new()
        .route(
            "/api_category.php",
            get(move || async move { categories }),
        )
        .route(
            "/api.php",
            get(move |Query(query): Query<HashMap<String, String>>| {
                let questions = questions.clone();
                let recorded = recorded.clone();
                async move {
                    recorded.lock().expect("query log poisoned").push(query);
                    Json(questions)
                }
            }),
        );
    (router, seen)
}

pub async fn serve(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("failed to bind stub api");
    let addr = listener.local_addr().expect("stub api has no address");
    tokio::spawn(async move {
        axum::serve(listener, router).await.expect("stub api stopped");
    });
    format!("http://{addr}")
}

pub fn client(base_url: &str) -> api::Client {
    api::Client::new(base_url, Duration::from_secs(5)).expect("failed to build api client")
}

pub fn app(base_url: &str) -> Router {
    app_with_sessions(base_url).0
}

/// The router plus a handle on its player store.
pub fn app_with_sessions(base_url: &str) -> (Router, SessionStore) {
    let sessions = SessionStore::seeded(7);
    let quiz = QuizService::new(client(base_url), sessions.clone());
    (router(AppState::new(quiz, false)), sessions)
}

pub struct Reply {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: String,
}

pub async fn send(app: &Router, method: Method, uri: &str, cookie: Option<&str>, form: &str) -> Reply {
    let mut req = Request::builder().method(method.clone()).uri(uri);
    if method == Method::POST {
        req = req
            .header("HX-Request", "true")
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded");
    }
    if let Some(cookie) = cookie {
        req = req.header(header::COOKIE, cookie);
    }

    let resp = app
        .clone()
        .oneshot(req.body(Body::from(form.to_string())).expect("request build should succeed"))
        .await
        .expect("router should respond");

    let status = resp.status();
    let headers = resp.headers().clone();
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
        .await
        .expect("body should be readable");
    Reply {
        status,
        headers,
        body: String::from_utf8_lossy(&bytes).into_owned(),
    }
}

pub async fn get_page(app: &Router, uri: &str, cookie: Option<&str>) -> Reply {
    send(app, Method::GET, uri, cookie, "").await
}

pub async fn post(app: &Router, uri: &str, cookie: &str, form: &str) -> Reply {
    send(app, Method::POST, uri, Some(cookie), form).await
}

/// Visit the index and return the `name=value` pair of the player cookie.
pub async fn new_player(app: &Router) -> String {
    let reply = get_page(app, "/", None).await;
    reply
        .headers
        .get_all(header::SET_COOKIE)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .find(|v| v.starts_with(names::QUIZ_SESSION_COOKIE_NAME))
        .and_then(|v| v.split(';').next())
        .expect("index should hand out a player cookie")
        .to_string()
}

/// Index of the option button whose text is the right answer.
pub fn correct_option(body: &str) -> usize {
    body.split("hx-post=\"/select/")
        .skip(1)
        .find_map(|segment| {
            let idx = segment[..segment.find('"')?].parse::<usize>().ok()?;
            let text_start = segment.find('>')? + 1;
            let text_end = segment.find("</button>")?;
            segment[text_start..text_end].trim().starts_with("Right").then_some(idx)
        })
        .expect("question should offer the right answer")
}
