//! HTTP Range request parsing module
//!
//! Single-range `bytes=` parsing per RFC 7233. Multi-range requests are
//! deliberately ignored and answered with the full representation.

/// Parsed byte range
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RangeRequest {
    /// First byte position
    pub start: usize,
    /// Last byte position, None for an open-ended range
    pub end: Option<usize>,
}

impl RangeRequest {
    /// Resolve the inclusive end position against the file size
    #[inline]
    pub fn end_position(&self, file_size: usize) -> usize {
        self.end.unwrap_or_else(|| file_size.saturating_sub(1))
    }
}

/// Outcome of parsing a Range header
#[derive(Debug)]
pub enum RangeParseResult {
    /// Valid range request, serve 206
    Valid(RangeRequest),
    /// Start lies beyond the file, serve 416
    NotSatisfiable,
    /// No Range header, wrong unit, or malformed: serve the full file
    None,
}

/// Parse an HTTP Range header value against a known file size
///
/// Supported forms:
/// - `bytes=start-end`
/// - `bytes=start-` (through end of file)
/// - `bytes=-suffix` (final `suffix` bytes)
///
/// # Examples
/// ```
/// use docserve::http::range::{parse_range_header, RangeParseResult};
///
/// let result = parse_range_header(Some("bytes=0-99"), 1000);
/// assert!(matches!(result, RangeParseResult::Valid(_)));
///
/// let result = parse_range_header(None, 1000);
/// assert!(matches!(result, RangeParseResult::None));
/// ```
pub fn parse_range_header(range_header: Option<&str>, file_size: usize) -> RangeParseResult {
    let Some(header) = range_header else {
        return RangeParseResult::None;
    };

    let Some(ranges) = header.strip_prefix("bytes=") else {
        return RangeParseResult::None;
    };

    // Single range only
    if ranges.contains(',') {
        return RangeParseResult::None;
    }

    let Some((start_str, end_str)) = ranges.split_once('-') else {
        return RangeParseResult::None;
    };
    let (start_str, end_str) = (start_str.trim(), end_str.trim());

    if start_str.is_empty() {
        return parse_suffix(end_str, file_size);
    }

    let Ok(start) = start_str.parse::<usize>() else {
        return RangeParseResult::None;
    };
    if start >= file_size {
        return RangeParseResult::NotSatisfiable;
    }

    let end = if end_str.is_empty() {
        None
    } else {
        match end_str.parse::<usize>() {
            // Clamp to the last byte of the file
            Ok(e) => Some(e.min(file_size - 1)),
            Err(_) => return RangeParseResult::None,
        }
    };

    if let Some(e) = end {
        if start > e {
            return RangeParseResult::NotSatisfiable;
        }
    }

    RangeParseResult::Valid(RangeRequest { start, end })
}

/// Parse a suffix range such as `-500` (the final 500 bytes)
fn parse_suffix(suffix_str: &str, file_size: usize) -> RangeParseResult {
    let Ok(suffix) = suffix_str.parse::<usize>() else {
        return RangeParseResult::None;
    };

    // No byte range can be satisfied against an empty file, and a zero
    // suffix selects nothing
    if suffix == 0 || file_size == 0 {
        return RangeParseResult::NotSatisfiable;
    }

    // A suffix longer than the file selects the whole file
    RangeParseResult::Valid(RangeRequest {
        start: file_size.saturating_sub(suffix),
        end: Some(file_size.saturating_sub(1)),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn expect_valid(header: &str, file_size: usize) -> RangeRequest {
        match parse_range_header(Some(header), file_size) {
            RangeParseResult::Valid(r) => r,
            other => panic!("expected Valid for {header}, got {other:?}"),
        }
    }

    #[test]
    fn test_absent_header() {
        assert!(matches!(
            parse_range_header(None, 100),
            RangeParseResult::None
        ));
    }

    #[test]
    fn test_bounded_range() {
        let r = expect_valid("bytes=0-9", 100);
        assert_eq!(r.start, 0);
        assert_eq!(r.end, Some(9));
    }

    #[test]
    fn test_open_range() {
        let r = expect_valid("bytes=50-", 100);
        assert_eq!(r.start, 50);
        assert_eq!(r.end, None);
        assert_eq!(r.end_position(100), 99);
    }

    #[test]
    fn test_suffix_range() {
        let r = expect_valid("bytes=-20", 100);
        assert_eq!(r.start, 80);
        assert_eq!(r.end, Some(99));
    }

    #[test]
    fn test_oversized_suffix_selects_whole_file() {
        let r = expect_valid("bytes=-500", 100);
        assert_eq!(r.start, 0);
        assert_eq!(r.end, Some(99));
    }

    #[test]
    fn test_end_clamped_to_file_size() {
        let r = expect_valid("bytes=10-9999", 100);
        assert_eq!(r.start, 10);
        assert_eq!(r.end, Some(99));
    }

    #[test]
    fn test_not_satisfiable() {
        assert!(matches!(
            parse_range_header(Some("bytes=200-"), 100),
            RangeParseResult::NotSatisfiable
        ));
        assert!(matches!(
            parse_range_header(Some("bytes=50-10"), 100),
            RangeParseResult::NotSatisfiable
        ));
        assert!(matches!(
            parse_range_header(Some("bytes=-0"), 100),
            RangeParseResult::NotSatisfiable
        ));
    }

    #[test]
    fn test_empty_file_never_satisfiable() {
        assert!(matches!(
            parse_range_header(Some("bytes=-500"), 0),
            RangeParseResult::NotSatisfiable
        ));
        assert!(matches!(
            parse_range_header(Some("bytes=0-"), 0),
            RangeParseResult::NotSatisfiable
        ));
        assert!(matches!(
            parse_range_header(Some("bytes=0-0"), 0),
            RangeParseResult::NotSatisfiable
        ));
    }

    #[test]
    fn test_malformed_ignored() {
        assert!(matches!(
            parse_range_header(Some("bytes=a-b"), 100),
            RangeParseResult::None
        ));
        assert!(matches!(
            parse_range_header(Some("bytes=0-9,20-29"), 100),
            RangeParseResult::None
        ));
        assert!(matches!(
            parse_range_header(Some("items=0-9"), 100),
            RangeParseResult::None
        ));
    }
}
