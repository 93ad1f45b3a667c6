//! MIME type inference module
//!
//! Maps file extensions to Content-Type values for static responses.

/// Infer the Content-Type for a file extension
///
/// # Examples
/// ```
/// use docserve::http::mime::content_type;
/// assert_eq!(content_type(Some("html")), "text/html; charset=utf-8");
/// assert_eq!(content_type(Some("png")), "image/png");
/// assert_eq!(content_type(None), "application/octet-stream");
/// ```
pub fn content_type(extension: Option<&str>) -> &'static str {
    match extension {
        // Text and markup
        Some("html" | "htm") => "text/html; charset=utf-8",
        Some("css") => "text/css",
        Some("txt" | "md") => "text/plain; charset=utf-8",
        Some("csv") => "text/csv",
        Some("xml") => "application/xml",

        // Scripts and data
        Some("js" | "mjs") => "application/javascript",
        Some("json") => "application/json",
        Some("wasm") => "application/wasm",

        // Images
        Some("png") => "image/png",
        Some("jpg" | "jpeg") => "image/jpeg",
        Some("gif") => "image/gif",
        Some("svg") => "image/svg+xml",
        Some("ico") => "image/x-icon",
        Some("webp") => "image/webp",
        Some("avif") => "image/avif",

        // Audio and video
        Some("mp3") => "audio/mpeg",
        Some("wav") => "audio/wav",
        Some("flac") => "audio/flac",
        Some("mp4") => "video/mp4",
        Some("webm") => "video/webm",
        Some("ogg" | "ogv") => "video/ogg",

        // Fonts
        Some("woff") => "font/woff",
        Some("woff2") => "font/woff2",
        Some("ttf") => "font/ttf",
        Some("otf") => "font/otf",

        // Documents and archives
        Some("pdf") => "application/pdf",
        Some("zip") => "application/zip",
        Some("gz" | "gzip") => "application/gzip",
        Some("tar") => "application/x-tar",

        // Default
        _ => "application/octet-stream",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_web_asset_types() {
        assert_eq!(content_type(Some("html")), "text/html; charset=utf-8");
        assert_eq!(content_type(Some("htm")), "text/html; charset=utf-8");
        assert_eq!(content_type(Some("css")), "text/css");
        assert_eq!(content_type(Some("js")), "application/javascript");
        assert_eq!(content_type(Some("json")), "application/json");
        assert_eq!(content_type(Some("svg")), "image/svg+xml");
    }

    #[test]
    fn test_media_types() {
        assert_eq!(content_type(Some("png")), "image/png");
        assert_eq!(content_type(Some("jpeg")), "image/jpeg");
        assert_eq!(content_type(Some("mp4")), "video/mp4");
        assert_eq!(content_type(Some("woff2")), "font/woff2");
    }

    #[test]
    fn test_unknown_extension_falls_back() {
        assert_eq!(content_type(Some("xyz")), "application/octet-stream");
        assert_eq!(content_type(Some("")), "application/octet-stream");
        assert_eq!(content_type(None), "application/octet-stream");
    }
}
