//! Static file serving module
//!
//! Serves files from the configured asset directory. The route prefix is
//! already stripped by the router; this module resolves the remaining
//! suffix against the asset root, refuses anything that escapes it, and
//! answers conditional requests with 304.

use std::path::Path;

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::Response;
use tokio::fs;

use crate::http::{self, cache, mime};
use crate::logger::Logger;

/// Serve one asset identified by the suffix of a prefix-route match.
pub async fn serve_asset(
    logger: &Logger,
    static_dir: &str,
    suffix: &str,
    if_none_match: Option<&str>,
    is_head: bool,
) -> Response<Full<Bytes>> {
    match load_asset(logger, static_dir, suffix).await {
        Some((content, content_type)) => {
            let etag = cache::generate_etag(&content);
            if cache::check_etag_match(if_none_match, &etag) {
                return http::build_304_response(&etag);
            }
            http::build_cached_response(Bytes::from(content), content_type, &etag, is_head)
        }
        None => http::build_404_response(),
    }
}

/// Resolve and read an asset. Returns None for anything that should be a
/// 404: missing files, directories, or paths escaping the asset root.
async fn load_asset(
    logger: &Logger,
    static_dir: &str,
    suffix: &str,
) -> Option<(Vec<u8>, &'static str)> {
    let root = match Path::new(static_dir).canonicalize() {
        Ok(root) => root,
        Err(err) => {
            logger.warn(
                "static directory not accessible",
                &[
                    ("dir", static_dir.to_string()),
                    ("err", err.to_string()),
                ],
            );
            return None;
        }
    };

    let candidate = root.join(suffix.trim_start_matches('/'));

    // A missing file is a routine 404, not worth logging
    let resolved = candidate.canonicalize().ok()?;

    // Canonicalization collapses any ".." segments; a resolved path outside
    // the asset root is a traversal attempt
    if !resolved.starts_with(&root) {
        logger.warn(
            "path traversal attempt blocked",
            &[("path", suffix.to_string())],
        );
        return None;
    }

    if resolved.is_dir() {
        return None;
    }

    let content = match fs::read(&resolved).await {
        Ok(content) => content,
        Err(err) => {
            logger.error(
                "failed to read asset",
                &[
                    ("path", resolved.display().to_string()),
                    ("err", err.to_string()),
                ],
            );
            return None;
        }
    };

    let content_type = mime::content_type(resolved.extension().and_then(|e| e.to_str()));
    Some((content, content_type))
}
