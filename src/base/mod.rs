//! Foundation types for the sigil library.
//!
//! - [`RefSpan`] - byte-offset span of a scanned reference name
//! - [`SpanError`] - fail-fast signal for spans that do not fit a text
//!
//! This module has NO dependencies on other sigil modules.

mod error;
mod span;

pub use error::SpanError;
pub use span::RefSpan;

// Re-export text-size types for convenience
pub use text_size;
