use maud::{html, Markup};
use rust_i18n::t;

use super::components::{self, NoticeKind};
use crate::{
    api::{Category, Difficulty, QuestionType},
    names,
};

pub struct SettingsData {
    /// `None` when the category list could not be fetched.
    pub categories: Option<Vec<Category>>,
}

pub fn settings(data: &SettingsData, locale: &str) -> Markup {
    html! {
        @if data.categories.is_none() {
            (components::notice(NoticeKind::Error, &t!("error.categories", locale = locale)))
        }
        h1 { (t!("settings.heading", locale = locale)) }
        article style="width: fit-content;" {
            form hx-post=(names::START_QUIZ_URL)
                 hx-target="main"
                 hx-swap="innerHTML"
                 hx-disabled-elt="#start-btn"
                 hx-indicator="#loading-indicator"
                 id="settings-form" {
                label {
                    (t!("settings.category", locale = locale))
                    select name="category" {
                        @match &data.categories {
                            Some(categories) => {
                                option value="" { (t!("settings.any_category", locale = locale)) }
                                @for category in categories {
                                    option value=(category.id) { (category.name) }
                                }
                            }
                            None => {
                                option value="" { (t!("settings.categories_error", locale = locale)) }
                            }
                        }
                    }
                }
                label {
                    (t!("settings.difficulty", locale = locale))
                    select name="difficulty" {
                        option value="" { (t!("settings.any_difficulty", locale = locale)) }
                        @for difficulty in Difficulty::ALL {
                            option value=(difficulty.as_str()) {
                                (components::difficulty_label(difficulty, locale))
                            }
                        }
                    }
                }
                label {
                    (t!("settings.type", locale = locale))
                    select name="type" {
                        option value="" { (t!("settings.any_type", locale = locale)) }
                        @for kind in QuestionType::ALL {
                            option value=(kind.as_str()) {
                                (components::question_type_label(kind, locale))
                            }
                        }
                    }
                }
                label {
                    (t!("settings.amount", locale = locale))
                    input name="amount"
                          type="number"
                          min=(names::MIN_QUESTION_AMOUNT)
                          max=(names::MAX_QUESTION_AMOUNT)
                          value=(names::DEFAULT_QUESTION_AMOUNT)
                          required;
                }
                button type="submit" id="start-btn" { (t!("settings.start", locale = locale)) }
                p id="loading-indicator" class="htmx-indicator" aria-busy="true" {
                    (t!("settings.loading", locale = locale))
                }
            }
        }
    }
}
