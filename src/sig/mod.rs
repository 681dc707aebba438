//! Signature rendering for callables and type display names.
//!
//! The host environment owns type introspection; this module only
//! carries the minimal facts rendering needs (a display name, an array
//! flag, the element type of an array) and turns them into compact
//! one-line strings such as `void run()` or `String greet(String)`.

mod format;
mod type_info;

pub use format::{signature_for, type_name_for};
pub use type_info::{Callable, TypeInfo};
