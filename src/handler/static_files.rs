//! Static file serving module
//!
//! Resolves request paths against the served root directory, applies
//! index-document resolution for directories, and builds file responses
//! with MIME inference, ETag and Range support.

use crate::config::SiteConfig;
use crate::handler::router::RequestContext;
use crate::http::{self, cache, mime, range::RangeParseResult};
use crate::logger;
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::Response;
use std::path::{Path, PathBuf};
use tokio::fs;

/// Serve a request path from the configured root directory
pub async fn serve(ctx: &RequestContext<'_>, site: &SiteConfig) -> Response<Full<Bytes>> {
    match load(&site.root_dir, ctx.path, &site.index_files).await {
        Some((content, content_type)) => build_static_response(
            &content,
            content_type,
            ctx.if_none_match.as_deref(),
            ctx.is_head,
            ctx.range_header.as_deref(),
        ),
        None => http::build_not_found_response(),
    }
}

/// Resolve a request path to a regular file under the root directory
///
/// Returns None for missing files, directories without an index document,
/// and any path that escapes the root.
pub fn resolve_path(root_dir: &str, path: &str, index_files: &[String]) -> Option<PathBuf> {
    // Filenames with spaces and non-ASCII characters arrive
    // percent-encoded; decode before touching the filesystem
    let decoded = match percent_decode(path) {
        Some(p) => p,
        None => {
            logger::log_warning(&format!("Malformed percent-encoding in path: {path}"));
            return None;
        }
    };

    // Remove leading slash and strip traversal components up front
    let clean_path = decoded.trim_start_matches('/').replace("..", "");

    let mut file_path = Path::new(root_dir).join(&clean_path);

    let root_canonical = match Path::new(root_dir).canonicalize() {
        Ok(p) => p,
        Err(e) => {
            logger::log_warning(&format!(
                "Root directory not found or inaccessible '{root_dir}': {e}"
            ));
            return None;
        }
    };

    // Directory request: try index documents in configured order
    if file_path.is_dir() || clean_path.is_empty() || clean_path.ends_with('/') {
        file_path = index_files
            .iter()
            .map(|index| file_path.join(index))
            .find(|candidate| candidate.is_file())?;
    }

    // Missing file is the common 404 case, not worth a log line
    let file_canonical = file_path.canonicalize().ok()?;

    // The canonicalized result must stay inside the root
    if !file_canonical.starts_with(&root_canonical) {
        logger::log_warning(&format!(
            "Path traversal attempt blocked: {} -> {}",
            path,
            file_canonical.display()
        ));
        return None;
    }

    if !file_canonical.is_file() {
        return None;
    }

    Some(file_path)
}

/// Decode percent-encoded bytes in a request path
///
/// Returns None for malformed escapes, encoded NUL bytes, and sequences
/// that do not decode to valid UTF-8; such requests are answered 404.
fn percent_decode(path: &str) -> Option<String> {
    if !path.contains('%') {
        return Some(path.to_string());
    }

    let bytes = path.as_bytes();
    let mut decoded = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%' {
            let hex = bytes.get(i + 1..i + 3)?;
            let hi = char::from(hex[0]).to_digit(16)?;
            let lo = char::from(hex[1]).to_digit(16)?;
            let byte = u8::try_from(hi * 16 + lo).ok()?;
            // NUL can only be an attempt to confuse the filesystem
            if byte == 0 {
                return None;
            }
            decoded.push(byte);
            i += 3;
        } else {
            decoded.push(bytes[i]);
            i += 1;
        }
    }

    String::from_utf8(decoded).ok()
}

/// Resolve and read a file, inferring its content type from the extension
pub async fn load(
    root_dir: &str,
    path: &str,
    index_files: &[String],
) -> Option<(Vec<u8>, &'static str)> {
    let file_path = resolve_path(root_dir, path, index_files)?;

    let content = match fs::read(&file_path).await {
        Ok(c) => c,
        Err(e) => {
            logger::log_error(&format!(
                "Failed to read file '{}': {}",
                file_path.display(),
                e
            ));
            return None;
        }
    };

    let content_type = mime::content_type(file_path.extension().and_then(|e| e.to_str()));

    Some((content, content_type))
}

/// Build the response for a loaded file, honoring conditional and Range
/// requests
fn build_static_response(
    data: &[u8],
    content_type: &str,
    if_none_match: Option<&str>,
    is_head: bool,
    range_header: Option<&str>,
) -> Response<Full<Bytes>> {
    let etag = cache::generate_etag(data);
    let total_size = data.len();

    // Client already holds the current version
    if cache::etag_matches(if_none_match, &etag) {
        return http::build_not_modified_response(&etag);
    }

    match http::parse_range_header(range_header, total_size) {
        RangeParseResult::Valid(range) => {
            let start = range.start;
            let end = range.end_position(total_size);

            let body = if is_head {
                Bytes::new()
            } else {
                Bytes::from(data[start..=end].to_vec())
            };

            return http::build_partial_response(
                body,
                content_type,
                &etag,
                start,
                end,
                total_size,
                is_head,
            );
        }
        RangeParseResult::NotSatisfiable => {
            return http::build_range_not_satisfiable_response(total_size);
        }
        RangeParseResult::None => {}
    }

    let body = if is_head {
        Bytes::new()
    } else {
        Bytes::from(data.to_owned())
    };

    http::build_file_response(body, content_type, &etag, is_head)
}
