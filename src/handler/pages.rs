//! Page handlers module
//!
//! The fixed handler set. Each handler is a pure function of its inputs;
//! shared dependencies (logger, template engine) are passed in explicitly.
//! The snippet handlers are placeholders: no snippet is ever looked up or
//! stored.

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::Response;

use crate::http;
use crate::logger::Logger;
use crate::routing::PathParams;
use crate::template::TemplateEngine;

/// Render the home page from the base layout, nav partial, and home
/// fragment. A render failure yields a generic 500; the detailed cause is
/// logged server-side only.
pub fn home(logger: &Logger, templates: &TemplateEngine, is_head: bool) -> Response<Full<Bytes>> {
    match templates.render_home() {
        Ok(html) => http::build_html_response(html, is_head),
        Err(err) => {
            logger.error("failed to render template", &[("err", err.to_string())]);
            http::build_500_response()
        }
    }
}

/// Echo the requested snippet id. The id must parse as an integer >= 1;
/// anything else is a 404, same as an unknown path.
pub fn snippet_view(params: &PathParams, is_head: bool) -> Response<Full<Bytes>> {
    let id = params.get("id").and_then(|raw| raw.parse::<i64>().ok());
    match id {
        Some(id) if id >= 1 => http::build_text_response(
            format!("Display a specific snippet with ID {id}..."),
            is_head,
        ),
        _ => http::build_404_response(),
    }
}

/// Placeholder form for creating a new snippet.
pub fn snippet_create(is_head: bool) -> Response<Full<Bytes>> {
    http::build_text_response(
        "Display a form for creating a new snippet...".to_string(),
        is_head,
    )
}

/// Placeholder create action. Always 201; the request body is ignored.
pub fn snippet_create_post() -> Response<Full<Bytes>> {
    http::build_created_response("Save a new snippet...")
}
