use maud::{html, Markup, PreEscaped};
use rust_i18n::t;

use crate::{
    api::{ApiError, Difficulty, QuestionType},
    names,
    quiz::QuizError,
};

/// Badge colours; a category always lands on the same one.
pub const BADGE_PALETTE: [&str; 8] = [
    "#e74c3c", "#3498db", "#2ecc71", "#9b59b6", "#f39c12", "#1abc9c", "#e67e22", "#34495e",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Error,
    Warning,
}

fn name_hash(name: &str) -> u32 {
    name.chars()
        .fold(0u32, |hash, ch| (ch as u32).wrapping_add(hash.wrapping_shl(5).wrapping_sub(hash)))
}

pub fn badge_color(category: &str) -> &'static str {
    BADGE_PALETTE[name_hash(category) as usize % BADGE_PALETTE.len()]
}

pub fn category_badge(category: &str) -> Markup {
    html! {
        span class="category-badge" style=(format!("background-color: {};", badge_color(category))) {
            (category)
        }
    }
}

/// Capitalized, localized difficulty.
pub fn difficulty_label(difficulty: Difficulty, locale: &str) -> String {
    match difficulty {
        Difficulty::Easy => t!("difficulty.easy", locale = locale).to_string(),
        Difficulty::Medium => t!("difficulty.medium", locale = locale).to_string(),
        Difficulty::Hard => t!("difficulty.hard", locale = locale).to_string(),
    }
}

pub fn question_type_label(kind: QuestionType, locale: &str) -> String {
    match kind {
        QuestionType::Multiple => t!("question_type.multiple", locale = locale).to_string(),
        QuestionType::Boolean => t!("question_type.boolean", locale = locale).to_string(),
    }
}

pub fn api_error_message(err: &ApiError, locale: &str) -> String {
    match err {
        ApiError::Network(_) => t!("error.network", locale = locale).to_string(),
        ApiError::Format(_) => t!("error.format", locale = locale).to_string(),
        ApiError::NoContent => t!("error.no_content", locale = locale).to_string(),
        ApiError::NoResults => t!("error.no_results", locale = locale).to_string(),
        ApiError::InvalidParameter => t!("error.invalid_parameter", locale = locale).to_string(),
        ApiError::Session => t!("error.session", locale = locale).to_string(),
        ApiError::RateLimited => t!("error.rate_limited", locale = locale).to_string(),
    }
}

pub fn quiz_error_message(err: &QuizError, locale: &str) -> String {
    match err {
        QuizError::Busy => t!("error.busy", locale = locale).to_string(),
        QuizError::NoSelection => t!("error.no_selection", locale = locale).to_string(),
        QuizError::InvalidAction | QuizError::OptionOutOfRange(_) => {
            t!("error.invalid_action", locale = locale).to_string()
        }
    }
}

/// Transient banner. Removes itself after [`names::NOTICE_DISMISS_MS`],
/// wherever it was swapped in.
pub fn notice(kind: NoticeKind, message: &str) -> Markup {
    let class = match kind {
        NoticeKind::Error => "notice notice-error",
        NoticeKind::Warning => "notice notice-warning",
    };
    html! {
        div class=(class) role="alert" {
            (message)
        }
        script {
            (PreEscaped(format!(
                "(function(s){{setTimeout(function(){{var n=s.previousElementSibling;if(n){{n.remove();}}s.remove();}},{});}})(document.currentScript);",
                names::NOTICE_DISMISS_MS
            )))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn badge_color_is_stable_per_category() {
        let a = badge_color("Science: Computers");
        assert_eq!(a, badge_color("Science: Computers"));
        assert!(BADGE_PALETTE.contains(&a));
    }

    #[test]
    fn badge_colors_spread_over_the_palette() {
        let names = [
            "General Knowledge",
            "Entertainment: Books",
            "Entertainment: Film",
            "Science & Nature",
            "Sports",
            "Geography",
            "History",
            "Politics",
            "Art",
            "Animals",
        ];
        let distinct: std::collections::HashSet<_> = names.iter().map(|n| badge_color(n)).collect();
        assert!(distinct.len() > 1);
    }

    #[test]
    fn api_errors_have_distinct_messages() {
        assert!(api_error_message(&ApiError::NoResults, "en").starts_with("No questions found"));
        assert!(api_error_message(&ApiError::InvalidParameter, "en").starts_with("Invalid parameters"));
        assert!(api_error_message(&ApiError::RateLimited, "en").starts_with("Too many requests"));
        assert!(api_error_message(&ApiError::NoContent, "en").starts_with("No questions available"));
        assert!(api_error_message(&ApiError::Session, "en").starts_with("Session error"));
    }

    #[test]
    fn difficulty_is_capitalized() {
        assert_eq!(difficulty_label(Difficulty::Easy, "en"), "Easy");
        assert_eq!(difficulty_label(Difficulty::Hard, "en"), "Hard");
    }

    #[test]
    fn notice_carries_message_and_dismiss_timer() {
        let html = notice(NoticeKind::Error, "Something <broke>").into_string();
        assert!(html.contains("Something &lt;broke&gt;"));
        assert!(html.contains("notice-error"));
        assert!(html.contains(&names::NOTICE_DISMISS_MS.to_string()));
    }
}
