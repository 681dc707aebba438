//! Reference scanner: locates marker-prefixed name runs in free-form
//! text.
//!
//! A reference is a marker character (for example `$`) followed by a
//! contiguous run of letters. The scanner reports where each name run
//! is ([`scan_positions`]); [`fragments_within`] materializes the
//! actual substrings. The text is treated as arbitrary prose, not a
//! structured language.

mod references;
mod text;

pub use references::{fragments_within, scan_positions};
pub use text::is_reference_char;
