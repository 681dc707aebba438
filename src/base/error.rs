//! Error types for span projection.

use thiserror::Error;

/// Errors raised when a span does not identify a valid substring of a
/// text.
///
/// These only arise from caller contract violations: spans produced by
/// the scanner over the same text always fit it. Reporting them beats
/// silently truncating the fragment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SpanError {
    /// The span extends past the end of the text.
    #[error("span {start}..{end} lies outside the text (length {text_len})")]
    OutOfBounds { start: u32, end: u32, text_len: u32 },

    /// A span boundary falls inside a multi-byte character.
    #[error("span boundary at byte {offset} is not a character boundary")]
    NotCharBoundary { offset: u32 },
}
