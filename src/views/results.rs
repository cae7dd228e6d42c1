use maud::{html, Markup};
use rust_i18n::t;

use super::components;
use crate::{names, quiz::QuizSession};

pub fn results(session: &QuizSession, locale: &str) -> Markup {
    let score = session.score();
    let answered = session.answers().len();
    let total = session.total();
    let percentage = if answered > 0 {
        score as f64 * 100.0 / answered as f64
    } else {
        0.0
    };

    html! {
        h1 { (t!("result.heading", locale = locale)) }
        article {
            p class="final-score" {
                (t!("result.score", score = score, answered = answered, locale = locale))
                " "
                strong { (format!("({percentage:.0}%)")) }
            }
            @if answered < total {
                p class="answered-of-total" style="color: #666;" {
                    (t!("result.answered_of_total", answered = answered, total = total, locale = locale))
                }
            }

            @if session.answers().is_empty() {
                p { (t!("result.no_answers", locale = locale)) }
            } @else {
                ol class="results-list" {
                    @for record in session.answers() {
                        @let class = if record.is_correct {
                            "result-item result-correct"
                        } else {
                            "result-item result-incorrect"
                        };
                        li class=(class) {
                            div class="question-meta" {
                                (components::category_badge(&record.category))
                                span class="difficulty" {
                                    (components::difficulty_label(record.difficulty, locale))
                                }
                            }
                            p { strong { (record.question) } }
                            p {
                                (t!("result.your_answer", locale = locale)) " "
                                span class="user-answer" { (record.user_answer) }
                                @if record.is_correct {
                                    " \u{2713}"
                                } @else {
                                    " \u{2717}"
                                }
                            }
                            @if !record.is_correct {
                                p class="correct-answer" {
                                    (t!("result.correct_answer", locale = locale)) " "
                                    (record.correct_answer)
                                }
                            }
                        }
                    }
                }
            }

            button type="button"
                   hx-post=(names::RESTART_URL)
                   hx-target="main"
                   hx-swap="innerHTML"
                   hx-disabled-elt="this" {
                (t!("result.restart", locale = locale))
            }
        }
    }
}
