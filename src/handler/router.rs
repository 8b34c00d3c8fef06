//! Request dispatch module
//!
//! Entry point for HTTP request processing: extracts what the handlers
//! need from the request, asks the route table for a match, and dispatches
//! to the matched handler. No route match is answered with 404 and is
//! never treated as a server error.

use std::convert::Infallible;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Instant;

use http_body_util::Full;
use hyper::body::{Body as _, Bytes};
use hyper::{Method, Request, Response};

use crate::config::AppState;
use crate::handler::{pages, static_files};
use crate::http;
use crate::logger::AccessLogEntry;
use crate::routing::{PathParams, RouteAction};

/// Request context encapsulating information needed for request processing
pub struct RequestContext<'a> {
    pub method: Method,
    pub path: &'a str,
    pub is_head: bool,
    pub if_none_match: Option<String>,
}

/// Main entry point for HTTP request handling.
///
/// The request body is never read: the placeholder handlers do not consume
/// it, so this function is generic over the body type.
pub async fn handle_request<B>(
    req: Request<B>,
    state: Arc<AppState>,
    peer_addr: SocketAddr,
) -> Result<Response<Full<Bytes>>, Infallible> {
    let started = Instant::now();
    let is_head = *req.method() == Method::HEAD;

    let ctx = RequestContext {
        method: req.method().clone(),
        path: req.uri().path(),
        is_head,
        if_none_match: req
            .headers()
            .get("if-none-match")
            .and_then(|v| v.to_str().ok())
            .map(ToString::to_string),
    };

    let response = dispatch(&ctx, &state).await;

    if state.config.logging.access_log {
        let entry = AccessLogEntry {
            remote_addr: peer_addr.to_string(),
            method: ctx.method.to_string(),
            path: ctx.path.to_string(),
            query: req.uri().query().map(ToString::to_string),
            status: response.status().as_u16(),
            body_bytes: response.body().size_hint().exact().unwrap_or(0),
            duration_us: started.elapsed().as_micros(),
        };
        state.logger.access(&entry);
    }

    Ok(response)
}

/// Match the request against the route table and run the matched handler.
async fn dispatch(ctx: &RequestContext<'_>, state: &Arc<AppState>) -> Response<Full<Bytes>> {
    let Some((action, params)) = state.router.match_route(&ctx.method, ctx.path) else {
        return http::build_404_response();
    };

    run_action(action, &params, ctx, state).await
}

/// Dispatch to the handler behind a matched route action.
async fn run_action(
    action: RouteAction,
    params: &PathParams,
    ctx: &RequestContext<'_>,
    state: &Arc<AppState>,
) -> Response<Full<Bytes>> {
    match action {
        RouteAction::Home => pages::home(&state.logger, &state.templates, ctx.is_head),
        RouteAction::SnippetView => pages::snippet_view(params, ctx.is_head),
        RouteAction::SnippetCreate => pages::snippet_create(ctx.is_head),
        RouteAction::SnippetCreatePost => pages::snippet_create_post(),
        RouteAction::StaticAssets => {
            static_files::serve_asset(
                &state.logger,
                &state.config.ui.static_dir,
                params.suffix().unwrap_or(""),
                ctx.if_none_match.as_deref(),
                ctx.is_head,
            )
            .await
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Config, LoggingConfig, ServerConfig, UiConfig};
    use crate::logger::Logger;
    use http_body_util::BodyExt;
    use std::fs;
    use std::path::{Path, PathBuf};

    fn peer() -> SocketAddr {
        "127.0.0.1:54321".parse().unwrap()
    }

    fn write_ui(root: &Path) {
        let html = root.join("html");
        fs::create_dir_all(html.join("partials")).unwrap();
        fs::create_dir_all(html.join("pages")).unwrap();
        fs::write(
            html.join("base.html"),
            "<title>{% block title %}{% endblock %}</title>\
             {% include \"partials/nav.html\" %}\
             {% block main %}{% endblock %}",
        )
        .unwrap();
        fs::write(html.join("partials/nav.html"), "<nav></nav>").unwrap();
        fs::write(
            html.join("pages/home.html"),
            "{% extends \"base.html\" %}\
             {% block title %}Home{% endblock %}\
             {% block main %}<h2>Latest Snippets</h2>{% endblock %}",
        )
        .unwrap();

        fs::create_dir_all(root.join("static/css")).unwrap();
        fs::write(root.join("static/css/main.css"), "body { margin: 0 }").unwrap();
    }

    fn test_state(name: &str) -> (Arc<AppState>, PathBuf) {
        let root = std::env::temp_dir().join(format!(
            "snippetd-dispatch-{}-{name}",
            std::process::id()
        ));
        let _ = fs::remove_dir_all(&root);
        write_ui(&root);

        let config = Config {
            server: ServerConfig {
                addr: ":0".to_string(),
                workers: None,
            },
            logging: LoggingConfig {
                access_log: false,
                ..LoggingConfig::default()
            },
            ui: UiConfig {
                template_dir: root.join("html").to_str().unwrap().to_string(),
                static_dir: root.join("static").to_str().unwrap().to_string(),
            },
        };
        let logger = Logger::new(&config.logging).unwrap();
        let state = Arc::new(AppState::new(config, logger).unwrap());
        (state, root)
    }

    fn request(method: Method, path: &str) -> Request<()> {
        Request::builder().method(method).uri(path).body(()).unwrap()
    }

    async fn send(state: &Arc<AppState>, method: Method, path: &str) -> Response<Full<Bytes>> {
        handle_request(request(method, path), Arc::clone(state), peer())
            .await
            .unwrap()
    }

    async fn body_string(response: Response<Full<Bytes>>) -> String {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn test_home_renders_composed_page() {
        let (state, root) = test_state("home");
        let response = send(&state, Method::GET, "/").await;
        assert_eq!(response.status(), 200);
        assert_eq!(
            response.headers()["Content-Type"],
            "text/html; charset=utf-8"
        );
        let body = body_string(response).await;
        assert!(body.contains("<nav>"));
        assert!(body.contains("Latest Snippets"));
        let _ = fs::remove_dir_all(&root);
    }

    #[tokio::test]
    async fn test_view_echoes_valid_id() {
        let (state, root) = test_state("view");
        let response = send(&state, Method::GET, "/snippet/view/123").await;
        assert_eq!(response.status(), 200);
        assert!(body_string(response).await.contains("123"));
        let _ = fs::remove_dir_all(&root);
    }

    #[tokio::test]
    async fn test_view_rejects_bad_ids() {
        let (state, root) = test_state("view-bad");
        for path in [
            "/snippet/view/0",
            "/snippet/view/-1",
            "/snippet/view/abc",
            "/snippet/view/",
        ] {
            let response = send(&state, Method::GET, path).await;
            assert_eq!(response.status(), 404, "{path}");
        }
        let _ = fs::remove_dir_all(&root);
    }

    #[tokio::test]
    async fn test_create_form_and_action() {
        let (state, root) = test_state("create");
        let form = send(&state, Method::GET, "/snippet/create").await;
        assert_eq!(form.status(), 200);

        let created = send(&state, Method::POST, "/snippet/create").await;
        assert_eq!(created.status(), 201);
        assert!(body_string(created).await.contains("Save a new snippet"));
        let _ = fs::remove_dir_all(&root);
    }

    #[tokio::test]
    async fn test_create_post_ignores_request_body() {
        let (state, root) = test_state("create-body");
        let req = Request::builder()
            .method(Method::POST)
            .uri("/snippet/create")
            .body("title=whatever&content=ignored".to_string())
            .unwrap();
        let response = handle_request(req, Arc::clone(&state), peer()).await.unwrap();
        assert_eq!(response.status(), 201);
        let _ = fs::remove_dir_all(&root);
    }

    #[tokio::test]
    async fn test_unknown_path_is_not_found() {
        let (state, root) = test_state("unknown");
        let response = send(&state, Method::GET, "/nonexistent").await;
        assert_eq!(response.status(), 404);
        let _ = fs::remove_dir_all(&root);
    }

    #[tokio::test]
    async fn test_static_serves_existing_file() {
        let (state, root) = test_state("static");
        let response = send(&state, Method::GET, "/static/css/main.css").await;
        assert_eq!(response.status(), 200);
        assert_eq!(response.headers()["Content-Type"], "text/css");
        assert_eq!(body_string(response).await, "body { margin: 0 }");
        let _ = fs::remove_dir_all(&root);
    }

    #[tokio::test]
    async fn test_static_missing_file_is_not_found() {
        let (state, root) = test_state("static-missing");
        let response = send(&state, Method::GET, "/static/css/other.css").await;
        assert_eq!(response.status(), 404);
        let _ = fs::remove_dir_all(&root);
    }

    #[tokio::test]
    async fn test_head_returns_headers_without_body() {
        let (state, root) = test_state("head");
        let response = send(&state, Method::HEAD, "/").await;
        assert_eq!(response.status(), 200);
        assert!(body_string(response).await.is_empty());
        let _ = fs::remove_dir_all(&root);
    }
}
