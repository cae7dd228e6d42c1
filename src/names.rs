pub const INDEX_URL: &str = "/";
pub const START_QUIZ_URL: &str = "/start";
pub const NEXT_QUESTION_URL: &str = "/next";
pub const QUIT_URL: &str = "/quit";
pub const CONFIRM_QUIT_URL: &str = "/quit/confirm";
pub const CANCEL_QUIT_URL: &str = "/quit/cancel";
pub const RESTART_URL: &str = "/restart";
pub const SET_LOCALE_URL: &str = "/set-locale";

pub fn select_option_url(option_idx: usize) -> String {
    format!("/select/{option_idx}")
}

pub const QUIZ_SESSION_COOKIE_NAME: &str = "quiz_session";

// Trivia API
pub const DEFAULT_API_BASE_URL: &str = "https://opentdb.com";
pub const CATEGORY_PATH: &str = "api_category.php";
pub const QUESTIONS_PATH: &str = "api.php";
pub const API_ENCODING: &str = "url3986";

// Quiz defaults
pub const MIN_QUESTION_AMOUNT: u32 = 1;
pub const MAX_QUESTION_AMOUNT: u32 = 50;
pub const DEFAULT_QUESTION_AMOUNT: u32 = 10;

// Error banners disappear after this many milliseconds.
pub const NOTICE_DISMISS_MS: u32 = 5000;

// i18n
pub const LOCALE_COOKIE_NAME: &str = "lang";
pub const DEFAULT_LOCALE: &str = "en";
pub const SUPPORTED_LOCALES: &[&str] = &["en", "ja"];
