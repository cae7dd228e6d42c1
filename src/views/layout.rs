use maud::{html, Markup, DOCTYPE};
use rust_i18n::t;

use crate::{names, utils};

const HTMX_SRC: &str = "https://unpkg.com/htmx.org@2.0.4";

fn css() -> Markup {
    html! {
        link rel="stylesheet" href="https://cdn.jsdelivr.net/npm/@picocss/pico@2/css/pico.min.css";
        link rel="stylesheet" href="/static/index.css";
    }
}

fn js() -> Markup {
    html! {
        script src=(HTMX_SRC) {}
    }
}

fn header(locale: &str) -> Markup {
    html! {
        header {
            nav {
                ul {
                    li."secondary" {
                        a href=(names::INDEX_URL) {
                            strong { (t!("app.title", locale = locale)) }
                        }
                    }
                }
                ul {
                    @for lang in names::SUPPORTED_LOCALES {
                        li {
                            button type="button" class="outline secondary lang-btn"
                                   hx-post=(names::SET_LOCALE_URL)
                                   hx-vals=(format!(r#"{{"lang":"{lang}"}}"#)) {
                                (lang)
                            }
                        }
                    }
                    li."secondary" { (utils::VERSION) }
                }
            }
        }
    }
}

pub fn page(title: &str, body: Markup, locale: &str) -> Markup {
    html! {
        (DOCTYPE)
        html lang=(locale) {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                meta name="color-scheme" content="light dark";

                (css())
                (js())

                title { (format!("{title} - {}", t!("app.title", locale = locale))) }
            }

            body."container" {
                (header(locale))
                div id="notice" {}
                main { (body) }
            }
        }
    }
}

/// An htmx fragment: swapped into `main`, with the title htmx picks up.
pub fn titled(title: &str, body: Markup, locale: &str) -> Markup {
    html! {
        title { (title) " - " (t!("app.title", locale = locale)) }
        (body)
    }
}

pub fn render(is_htmx: bool, title: &str, body: Markup, locale: &str) -> Markup {
    if is_htmx {
        titled(title, body, locale)
    } else {
        page(title, body, locale)
    }
}
