//! Request dispatch module
//!
//! Entry point for HTTP request processing: method validation, static
//! file dispatch, and access logging.

use crate::config::AppState;
use crate::http;
use crate::logger::{self, AccessLogEntry};
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::{Method, Request, Response, Version};
use std::convert::Infallible;
use std::net::SocketAddr;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use std::time::Instant;

/// Request context carrying the headers the static handler cares about
pub struct RequestContext<'a> {
    pub path: &'a str,
    pub is_head: bool,
    pub if_none_match: Option<String>,
    pub range_header: Option<String>,
}

/// Main entry point for HTTP request handling
pub async fn handle_request(
    req: Request<hyper::body::Incoming>,
    state: Arc<AppState>,
    peer_addr: SocketAddr,
) -> Result<Response<Full<Bytes>>, Infallible> {
    let started = Instant::now();

    let method = req.method().clone();
    let path = req.uri().path().to_string();
    let query = req.uri().query().map(ToString::to_string);
    let version = version_label(req.version());
    let referer = header_value(&req, "referer");
    let user_agent = header_value(&req, "user-agent");

    let response = dispatch(&req, &state).await;

    if state.cached_access_log.load(Ordering::Relaxed) {
        let mut entry = AccessLogEntry::new(
            peer_addr.ip().to_string(),
            method.to_string(),
            path,
        );
        entry.query = query;
        entry.http_version = version.to_string();
        entry.status = response.status().as_u16();
        entry.body_bytes = response_body_bytes(&response);
        entry.referer = referer;
        entry.user_agent = user_agent;
        entry.request_time_us =
            u64::try_from(started.elapsed().as_micros()).unwrap_or(u64::MAX);

        logger::log_access(&entry, &state.config.logging.access_log_format);
    }

    Ok(response)
}

/// Validate the request and serve it from the static root
async fn dispatch(
    req: &Request<hyper::body::Incoming>,
    state: &Arc<AppState>,
) -> Response<Full<Bytes>> {
    if let Some(resp) = check_http_method(req.method(), state.config.http.enable_cors) {
        return resp;
    }

    if let Some(resp) = check_body_size(req, state.config.http.max_body_size) {
        return resp;
    }

    let ctx = RequestContext {
        path: req.uri().path(),
        is_head: *req.method() == Method::HEAD,
        if_none_match: header_value(req, "if-none-match"),
        range_header: header_value(req, "range"),
    };

    super::static_files::serve(&ctx, &state.config.site).await
}

/// Check HTTP method, answering OPTIONS and rejecting writes
///
/// The served tree is read-only: only GET and HEAD reach the filesystem.
fn check_http_method(method: &Method, enable_cors: bool) -> Option<Response<Full<Bytes>>> {
    match method {
        &Method::GET | &Method::HEAD => None,
        &Method::OPTIONS => Some(http::build_options_response(enable_cors)),
        _ => {
            logger::log_warning(&format!("Method not allowed: {method}"));
            Some(http::build_method_not_allowed_response())
        }
    }
}

/// Reject requests declaring an oversized body without reading it
fn check_body_size(
    req: &Request<hyper::body::Incoming>,
    max_body_size: u64,
) -> Option<Response<Full<Bytes>>> {
    let size_str = header_value(req, "content-length")?;
    match size_str.parse::<u64>() {
        Ok(size) if size > max_body_size => {
            logger::log_warning(&format!(
                "Request body too large: {size} bytes (max: {max_body_size})"
            ));
            Some(http::build_payload_too_large_response())
        }
        Err(_) => {
            logger::log_warning(&format!(
                "Invalid Content-Length value: '{size_str}', skipping size check"
            ));
            None
        }
        _ => None,
    }
}

/// Extract a header value as an owned string
fn header_value<B>(req: &Request<B>, name: &str) -> Option<String> {
    req.headers()
        .get(name)
        .and_then(|v| v.to_str().ok())
        .map(ToString::to_string)
}

/// Response body size as advertised by Content-Length
fn response_body_bytes(response: &Response<Full<Bytes>>) -> usize {
    response
        .headers()
        .get("content-length")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.parse().ok())
        .unwrap_or(0)
}

/// HTTP version label for access logs
fn version_label(version: Version) -> &'static str {
    match version {
        Version::HTTP_10 => "1.0",
        Version::HTTP_2 => "2",
        _ => "1.1",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_and_head_pass_method_check() {
        assert!(check_http_method(&Method::GET, false).is_none());
        assert!(check_http_method(&Method::HEAD, false).is_none());
    }

    #[test]
    fn test_options_answered_directly() {
        let resp = check_http_method(&Method::OPTIONS, false).unwrap();
        assert_eq!(resp.status(), 204);
    }

    #[test]
    fn test_write_methods_rejected() {
        for method in [Method::POST, Method::PUT, Method::DELETE, Method::PATCH] {
            let resp = check_http_method(&method, false).unwrap();
            assert_eq!(resp.status(), 405);
        }
    }

    #[test]
    fn test_version_labels() {
        assert_eq!(version_label(Version::HTTP_10), "1.0");
        assert_eq!(version_label(Version::HTTP_11), "1.1");
        assert_eq!(version_label(Version::HTTP_2), "2");
    }

    #[test]
    fn test_response_body_bytes_from_header() {
        let resp = http::build_file_response(
            Bytes::from("hello"),
            "text/plain",
            "\"e\"",
            false,
        );
        assert_eq!(response_body_bytes(&resp), 5);

        // Error responses carry Content-Length too, so logs report them
        assert_eq!(response_body_bytes(&http::build_not_found_response()), 13);

        let no_length = Response::new(Full::new(Bytes::new()));
        assert_eq!(response_body_bytes(&no_length), 0);
    }
}
