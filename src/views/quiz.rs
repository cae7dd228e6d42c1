use maud::{html, Markup};
use rust_i18n::t;

use super::components;
use crate::{names, quiz::QuizSession};

pub fn question(session: &QuizSession, locale: &str) -> Markup {
    let Some(question) = session.current_question() else {
        return html! {};
    };
    let current = session.current_index() + 1;
    let total = session.total();
    let score = session.score();
    let correct = session.correct_option();

    html! {
        div class="quiz-status" {
            p class="progress" { (t!("quiz.progress", current = current, total = total, locale = locale)) }
            p class="score" { (t!("quiz.score", score = score, locale = locale)) }
        }
        article class="question-card" {
            div class="question-meta" {
                (components::category_badge(&question.category))
                span class="difficulty" { (components::difficulty_label(question.difficulty, locale)) }
            }
            h3 { (question.question) }

            div class="options" {
                @for (idx, option) in session.options().iter().enumerate() {
                    @if let Some(selected) = session.selected() {
                        @let class = if Some(idx) == correct {
                            "option option-correct"
                        } else if idx == selected {
                            "option option-incorrect"
                        } else {
                            "option option-neutral"
                        };
                        button type="button" class=(class) disabled { (option) }
                    } @else {
                        button type="button" class="option"
                               hx-post=(names::select_option_url(idx))
                               hx-target="main"
                               hx-swap="innerHTML" {
                            (option)
                        }
                    }
                }
            }

            @if let Some(selected) = session.selected() {
                div class="feedback" {
                    @if Some(selected) == correct {
                        p class="feedback-correct" { (t!("quiz.correct", locale = locale)) }
                    } @else {
                        p class="feedback-incorrect" { (t!("quiz.incorrect", locale = locale)) }
                    }
                    button type="button" class="nav-btn nav-btn-next"
                           hx-post=(names::NEXT_QUESTION_URL)
                           hx-target="main"
                           hx-swap="innerHTML" {
                        @if session.is_last_question() {
                            (t!("quiz.see_results", locale = locale))
                        } @else {
                            (t!("quiz.next", locale = locale))
                        }
                    }
                }
            }
        }
        p style="margin-top: 0.5rem; font-size: 0.8rem;" {
            button type="button" class="secondary outline quit-btn"
                   hx-post=(names::QUIT_URL)
                   hx-target="main"
                   hx-swap="innerHTML" {
                (t!("quiz.quit", locale = locale))
            }
        }
        @if session.confirming_quit() {
            (quit_dialog(locale))
        }
    }
}

fn quit_dialog(locale: &str) -> Markup {
    html! {
        dialog id="quit-dialog" open {
            article {
                p { (t!("quiz.quit_confirm", locale = locale)) }
                footer style="display: flex; gap: 0.5rem; justify-content: flex-end;" {
                    button type="button" class="secondary"
                           hx-post=(names::CANCEL_QUIT_URL)
                           hx-target="main"
                           hx-swap="innerHTML" {
                        (t!("quiz.quit_cancel", locale = locale))
                    }
                    button type="button"
                           hx-post=(names::CONFIRM_QUIT_URL)
                           hx-target="main"
                           hx-swap="innerHTML" {
                        (t!("quiz.quit_yes", locale = locale))
                    }
                }
            }
        }
    }
}

pub fn loading(locale: &str) -> Markup {
    html! {
        article aria-busy="true" {
            (t!("settings.loading", locale = locale))
        }
        p {
            a href=(names::INDEX_URL) { (t!("quiz.refresh", locale = locale)) }
        }
    }
}
