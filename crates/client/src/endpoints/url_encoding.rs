//! Percent-encoding for values interpolated into REST paths.
//!
//! Search ids are usually `1700000000.42` or `scheduler__admin__search__RMD5..._at_...`,
//! but they come back from the server and are never trusted: `/`, `?`, `#`
//! and `%` must not change which resource a request addresses.
//!
//! ```
//! use netsift_client::endpoints::url_encoding::encode_path_segment;
//!
//! assert_eq!(encode_path_segment("1700000000.42"), "1700000000.42");
//! assert_eq!(encode_path_segment("../auth"), "..%2Fauth");
//! ```

use percent_encoding::{AsciiSet, CONTROLS, utf8_percent_encode};

/// Characters escaped inside one path segment (RFC 3986 section 3.3 plus
/// characters Splunk's router treats specially).
pub const PATH_SEGMENT_ENCODE_SET: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'<')
    .add(b'>')
    .add(b'`')
    .add(b'{')
    .add(b'}')
    .add(b'|')
    .add(b'\\')
    .add(b'^')
    .add(b'%')
    .add(b'/')
    .add(b'?')
    .add(b'#')
    .add(b'+')
    .add(b';')
    .add(b'[')
    .add(b']');

/// Percent-encode `segment` for use as a single URL path segment.
pub fn encode_path_segment(segment: &str) -> String {
    utf8_percent_encode(segment, PATH_SEGMENT_ENCODE_SET).to_string()
}
