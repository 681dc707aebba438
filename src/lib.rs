//! # sigil-base
//!
//! Core library for marker-prefixed reference scanning and callable
//! signature rendering.
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! sig    → signature rendering (callables, type display names)
//! scan   → reference scanner (marker-prefixed name runs)
//! base   → primitives (RefSpan, SpanError)
//! ```
//!
//! The two feature modules are independent of each other: `scan` finds
//! marker-prefixed names in free-form text and reports where they are,
//! `sig` renders type and callable names for display. Both are pure
//! functions over their arguments and safe to call from any thread.

// ============================================================================
// MODULES (dependency order: base → scan → sig)
// ============================================================================

/// Foundation types: RefSpan, SpanError
pub mod base;

/// Reference scanner: marker-prefixed name runs in free-form text
pub mod scan;

/// Signature rendering: callable descriptors and type display names
pub mod sig;

// Re-export the public surface at the crate root
pub use base::{RefSpan, SpanError};
pub use scan::{fragments_within, scan_positions};
pub use sig::{Callable, TypeInfo, signature_for, type_name_for};
