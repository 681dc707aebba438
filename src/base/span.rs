//! Byte-offset spans for scanned reference names.

use text_size::{TextRange, TextSize};

/// A span identifying one reference name inside the scanned text.
///
/// `start` is the byte offset of the first character after the marker,
/// so the span covers the name run only, never the marker itself.
/// A span is never empty: the scanner discards zero-length runs rather
/// than emitting them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RefSpan {
    start: TextSize,
    len: TextSize,
}

impl RefSpan {
    /// Create a span from a start offset and a non-zero length.
    pub fn new(start: TextSize, len: TextSize) -> Self {
        debug_assert!(len > TextSize::new(0), "reference spans are never empty");
        Self { start, len }
    }

    /// Byte offset of the first character of the name run.
    pub fn start(&self) -> TextSize {
        self.start
    }

    /// Byte length of the name run (always >= 1).
    pub fn len(&self) -> TextSize {
        self.len
    }

    /// Byte offset one past the last character of the name run.
    pub fn end(&self) -> TextSize {
        self.start + self.len
    }

    /// The byte range this span covers in the scanned text.
    pub fn range(&self) -> TextRange {
        TextRange::at(self.start, self.len)
    }
}

impl From<RefSpan> for TextRange {
    fn from(span: RefSpan) -> Self {
        span.range()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_span_accessors() {
        let span = RefSpan::new(TextSize::new(7), TextSize::new(3));
        assert_eq!(span.start(), TextSize::new(7));
        assert_eq!(span.len(), TextSize::new(3));
        assert_eq!(span.end(), TextSize::new(10));
        assert_eq!(span.range(), TextRange::new(TextSize::new(7), TextSize::new(10)));
    }

    #[test]
    fn test_span_into_range() {
        let span = RefSpan::new(TextSize::new(0), TextSize::new(4));
        let range: TextRange = span.into();
        assert_eq!(range, TextRange::up_to(TextSize::new(4)));
    }
}
