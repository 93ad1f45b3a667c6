//! HTTP response building module
//!
//! Builders for every response shape the server emits. Builder failures
//! are logged and degrade to an empty response rather than panicking on
//! the request path.

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::Response;

/// Build 200 OK response for a complete file
pub fn build_file_response(
    data: Bytes,
    content_type: &str,
    etag: &str,
    is_head: bool,
) -> Response<Full<Bytes>> {
    let content_length = data.len();
    let body = if is_head { Bytes::new() } else { data };

    Response::builder()
        .status(200)
        .header("Content-Type", content_type)
        .header("Content-Length", content_length)
        .header("Accept-Ranges", "bytes")
        .header("ETag", etag)
        .header("Cache-Control", "public, max-age=3600")
        .body(Full::new(body))
        .unwrap_or_else(|e| {
            log_build_error("200", &e);
            Response::new(Full::new(Bytes::new()))
        })
}

/// Build 206 Partial Content response
pub fn build_partial_response(
    data: Bytes,
    content_type: &str,
    etag: &str,
    start: usize,
    end: usize,
    total_size: usize,
    is_head: bool,
) -> Response<Full<Bytes>> {
    let content_length = end - start + 1;
    let body = if is_head { Bytes::new() } else { data };

    Response::builder()
        .status(206)
        .header("Content-Type", content_type)
        .header("Content-Length", content_length)
        .header("Content-Range", format!("bytes {start}-{end}/{total_size}"))
        .header("Accept-Ranges", "bytes")
        .header("ETag", etag)
        .header("Cache-Control", "public, max-age=3600")
        .body(Full::new(body))
        .unwrap_or_else(|e| {
            log_build_error("206", &e);
            Response::new(Full::new(Bytes::new()))
        })
}

/// Build 304 Not Modified response
pub fn build_not_modified_response(etag: &str) -> Response<Full<Bytes>> {
    Response::builder()
        .status(304)
        .header("ETag", etag)
        .header("Cache-Control", "public, max-age=3600")
        .body(Full::new(Bytes::new()))
        .unwrap_or_else(|e| {
            log_build_error("304", &e);
            Response::new(Full::new(Bytes::new()))
        })
}

/// Build 404 Not Found response
pub fn build_not_found_response() -> Response<Full<Bytes>> {
    let body = Bytes::from("404 Not Found");
    Response::builder()
        .status(404)
        .header("Content-Type", "text/plain")
        .header("Content-Length", body.len())
        .body(Full::new(body))
        .unwrap_or_else(|e| {
            log_build_error("404", &e);
            Response::new(Full::new(Bytes::from("404 Not Found")))
        })
}

/// Build 405 Method Not Allowed response
pub fn build_method_not_allowed_response() -> Response<Full<Bytes>> {
    let body = Bytes::from("405 Method Not Allowed");
    Response::builder()
        .status(405)
        .header("Content-Type", "text/plain")
        .header("Content-Length", body.len())
        .header("Allow", "GET, HEAD, OPTIONS")
        .body(Full::new(body))
        .unwrap_or_else(|e| {
            log_build_error("405", &e);
            Response::new(Full::new(Bytes::from("405 Method Not Allowed")))
        })
}

/// Build 204 response for OPTIONS requests
pub fn build_options_response(enable_cors: bool) -> Response<Full<Bytes>> {
    let mut builder = Response::builder()
        .status(204)
        .header("Allow", "GET, HEAD, OPTIONS");

    if enable_cors {
        builder = builder
            .header("Access-Control-Allow-Origin", "*")
            .header("Access-Control-Allow-Methods", "GET, HEAD, OPTIONS")
            .header("Access-Control-Allow-Headers", "Content-Type, Range")
            .header("Access-Control-Max-Age", "86400");
    }

    builder.body(Full::new(Bytes::new())).unwrap_or_else(|e| {
        log_build_error("OPTIONS", &e);
        Response::new(Full::new(Bytes::new()))
    })
}

/// Build 413 Payload Too Large response
pub fn build_payload_too_large_response() -> Response<Full<Bytes>> {
    let body = Bytes::from("413 Payload Too Large");
    Response::builder()
        .status(413)
        .header("Content-Type", "text/plain")
        .header("Content-Length", body.len())
        .body(Full::new(body))
        .unwrap_or_else(|e| {
            log_build_error("413", &e);
            Response::new(Full::new(Bytes::from("413 Payload Too Large")))
        })
}

/// Build 416 Range Not Satisfiable response
pub fn build_range_not_satisfiable_response(file_size: usize) -> Response<Full<Bytes>> {
    let body = Bytes::from("Range Not Satisfiable");
    Response::builder()
        .status(416)
        .header("Content-Type", "text/plain")
        .header("Content-Length", body.len())
        .header("Content-Range", format!("bytes */{file_size}"))
        .body(Full::new(body))
        .unwrap_or_else(|e| {
            log_build_error("416", &e);
            Response::new(Full::new(Bytes::new()))
        })
}

/// Log response build error
fn log_build_error(status: &str, error: &hyper::http::Error) {
    crate::logger::log_error(&format!("Failed to build {status} response: {error}"));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_response_headers() {
        let resp = build_file_response(Bytes::from("hello"), "text/plain", "\"e1\"", false);
        assert_eq!(resp.status(), 200);
        assert_eq!(resp.headers()["Content-Type"], "text/plain");
        assert_eq!(resp.headers()["Content-Length"], "5");
        assert_eq!(resp.headers()["Accept-Ranges"], "bytes");
        assert_eq!(resp.headers()["ETag"], "\"e1\"");
    }

    #[test]
    fn test_head_keeps_content_length() {
        let resp = build_file_response(Bytes::from("hello"), "text/plain", "\"e1\"", true);
        assert_eq!(resp.status(), 200);
        // HEAD advertises the body size without sending it
        assert_eq!(resp.headers()["Content-Length"], "5");
    }

    #[test]
    fn test_partial_response_content_range() {
        let resp =
            build_partial_response(Bytes::from("ell"), "text/plain", "\"e1\"", 1, 3, 5, false);
        assert_eq!(resp.status(), 206);
        assert_eq!(resp.headers()["Content-Range"], "bytes 1-3/5");
        assert_eq!(resp.headers()["Content-Length"], "3");
    }

    #[test]
    fn test_not_found() {
        let resp = build_not_found_response();
        assert_eq!(resp.status(), 404);
        assert_eq!(resp.headers()["Content-Length"], "13");
    }

    #[test]
    fn test_error_responses_declare_body_size() {
        // Access logging reads Content-Length to report bytes sent, so
        // every non-empty body must advertise its size
        assert_eq!(
            build_method_not_allowed_response().headers()["Content-Length"],
            "22"
        );
        assert_eq!(
            build_payload_too_large_response().headers()["Content-Length"],
            "21"
        );
        assert_eq!(
            build_range_not_satisfiable_response(10).headers()["Content-Length"],
            "21"
        );
    }

    #[test]
    fn test_method_not_allowed_lists_methods() {
        let resp = build_method_not_allowed_response();
        assert_eq!(resp.status(), 405);
        assert_eq!(resp.headers()["Allow"], "GET, HEAD, OPTIONS");
    }

    #[test]
    fn test_options_cors_headers() {
        let plain = build_options_response(false);
        assert_eq!(plain.status(), 204);
        assert!(plain.headers().get("Access-Control-Allow-Origin").is_none());

        let cors = build_options_response(true);
        assert_eq!(cors.headers()["Access-Control-Allow-Origin"], "*");
    }

    #[test]
    fn test_range_not_satisfiable_reports_size() {
        let resp = build_range_not_satisfiable_response(1234);
        assert_eq!(resp.status(), 416);
        assert_eq!(resp.headers()["Content-Range"], "bytes */1234");
    }
}
