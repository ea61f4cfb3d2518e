//! HTML templates and the shared minijinja environment.
//!
//! Template files live next to this module and are compiled into the binary.
//! Auto-escaping is off: view-models hand templates pre-escaped [`Html`]
//! values (see `render::escape`), numbers, and nothing else.
//!
//! [`Html`]: crate::render::escape::Html

use crate::render::escape::Html;
use anyhow::Context;
use minijinja::{AutoEscape, Environment};
use once_cell::sync::Lazy;
use serde::Serialize;

pub const MESSAGE_TEMPLATE: &str = include_str!("templates/message.html");
pub const CARD_TEMPLATE: &str = include_str!("templates/card.html");
pub const CARDS_TEMPLATE: &str = include_str!("templates/cards.html");
pub const SEARCH_RESULTS_TEMPLATE: &str = include_str!("templates/search_results.html");
pub const CAR_DETAIL_TEMPLATE: &str = include_str!("templates/car_detail.html");

fn template_source(name: &str) -> Option<&'static str> {
    match name {
        "message.html" => Some(MESSAGE_TEMPLATE),
        "card.html" => Some(CARD_TEMPLATE),
        "cards.html" => Some(CARDS_TEMPLATE),
        "search_results.html" => Some(SEARCH_RESULTS_TEMPLATE),
        "car_detail.html" => Some(CAR_DETAIL_TEMPLATE),
        _ => None,
    }
}

static ENV: Lazy<Environment<'static>> = Lazy::new(|| {
    let mut env = Environment::new();
    env.set_auto_escape_callback(|_| AutoEscape::None);
    env.set_loader(|name| Ok(template_source(name).map(str::to_owned)));
    env
});

/// Renders the named template with `ctx`.
pub fn render<S: Serialize>(name: &str, ctx: S) -> anyhow::Result<String> {
    let template = ENV
        .get_template(name)
        .with_context(|| format!("template '{}' not found", name))?;
    template
        .render(ctx)
        .with_context(|| format!("failed to render template '{}'", name))
}

#[derive(Serialize)]
struct MessageView {
    message: Html,
}

/// The inline `<div class="loading">` message used for empty and error states.
pub fn message(text: &str) -> String {
    let view = MessageView {
        message: Html::escape(text),
    };
    render("message.html", &view).unwrap_or_else(|e| {
        tracing::error!("{:#}", e);
        format!("<div class=\"loading\"><p>{}</p></div>", view.message)
    })
}
