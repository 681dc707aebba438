//! Character classification for reference names.

/// Check if a character can appear in a scanned reference name.
///
/// Name runs are runs of letters. Unicode Standard Annex #31 start
/// characters are accepted so that non-ASCII letters behave the same
/// way ASCII ones do; digits and `_` terminate a run.
#[inline]
pub fn is_reference_char(c: char) -> bool {
    unicode_ident::is_xid_start(c)
}
