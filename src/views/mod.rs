pub mod components;
pub mod layout;
pub mod quiz;
pub mod results;
pub mod settings;

// Re-export commonly used functions from layout
pub use layout::{page, render, titled};

use maud::Markup;
use rust_i18n::t;

use crate::quiz::Phase;

/// Title and body for every phase that renders straight from state.
/// `Idle` needs the category list, so it is left to the caller.
pub fn screen(phase: &Phase, locale: &str) -> Option<(String, Markup)> {
    match phase {
        Phase::Idle => None,
        Phase::Loading(_) => Some((
            t!("quiz.title", locale = locale).to_string(),
            quiz::loading(locale),
        )),
        Phase::InProgress(session) => Some((
            t!("quiz.title", locale = locale).to_string(),
            quiz::question(session, locale),
        )),
        Phase::Finished(session) => Some((
            t!("result.title", locale = locale).to_string(),
            results::results(session, locale),
        )),
    }
}
