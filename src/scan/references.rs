//! Scanning for marker-prefixed reference names.

use smol_str::SmolStr;
use text_size::TextSize;
use tracing::trace;

use crate::base::{RefSpan, SpanError};
use crate::scan::text::is_reference_char;

/// Scan `text` for occurrences of `marker` and the contiguous letter
/// run immediately following each.
///
/// Returns one [`RefSpan`] per non-empty run, in left-to-right order
/// (ascending by start offset). Each span starts at the byte right
/// after the marker and covers the name run only, never the marker
/// itself. A marker followed by a non-letter or by end-of-text yields
/// no span. Offsets are byte offsets into `text`.
///
/// Markers inside quoted or escaped stretches are not distinguished
/// from plain ones; the scanner has no notion of quoting.
pub fn scan_positions(text: &str, marker: char) -> Vec<RefSpan> {
    let mut spans = Vec::new();
    if text.is_empty() {
        return spans;
    }

    let marker_len = marker.len_utf8();
    let mut search_from = 0usize;

    while let Some(found) = text[search_from..].find(marker) {
        let run_start = search_from + found + marker_len;
        let run_end = text[run_start..]
            .char_indices()
            .find(|&(_, c)| !is_reference_char(c))
            .map_or(text.len(), |(i, _)| run_start + i);

        if run_end > run_start {
            spans.push(RefSpan::new(
                TextSize::new(run_start as u32),
                TextSize::new((run_end - run_start) as u32),
            ));
        }
        // Resume at the end of the run, or right after the marker when
        // the run was empty. Either way the window moves strictly
        // forward, so back-to-back markers cannot stall the scan.
        search_from = run_end.max(run_start);
    }

    trace!(
        "scanned {} reference name(s) for marker {:?}",
        spans.len(),
        marker
    );
    spans
}

/// Extract the text fragment each span identifies, in input order.
///
/// The spans are expected to come from [`scan_positions`] over the
/// same `text`. A span that does not fit the text is a caller bug and
/// is reported as a [`SpanError`] rather than silently truncated.
pub fn fragments_within(text: &str, spans: &[RefSpan]) -> Result<Vec<SmolStr>, SpanError> {
    let mut fragments = Vec::with_capacity(spans.len());
    for span in spans {
        fragments.push(fragment_at(text, *span)?);
    }
    Ok(fragments)
}

fn fragment_at(text: &str, span: RefSpan) -> Result<SmolStr, SpanError> {
    let start = u32::from(span.start()) as usize;
    let end = u32::from(span.end()) as usize;

    if end > text.len() {
        return Err(SpanError::OutOfBounds {
            start: start as u32,
            end: end as u32,
            text_len: text.len() as u32,
        });
    }
    if !text.is_char_boundary(start) {
        return Err(SpanError::NotCharBoundary { offset: start as u32 });
    }
    if !text.is_char_boundary(end) {
        return Err(SpanError::NotCharBoundary { offset: end as u32 });
    }

    Ok(SmolStr::new(&text[start..end]))
}
