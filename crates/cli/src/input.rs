//! Reference-stream parsing for command-line input.
//!
//! The simulator only accepts integer page identifiers. This module turns free
//! text such as `"7, 0 1,2"` into a stream, dropping anything that is not an
//! integer so the simulator never sees malformed tokens.

use pagesim_core::PageId;

/// Parses a comma- and/or whitespace-separated list of page identifiers.
///
/// Empty tokens and tokens that do not parse as integers are skipped with a
/// warning.
pub fn parse_reference_stream(text: &str) -> Vec<PageId> {
    text.split(|c: char| c == ',' || c.is_whitespace())
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .filter_map(|token| match token.parse::<PageId>() {
            Ok(page) => Some(page),
            Err(_) => {
                tracing::warn!(token, "ignoring non-numeric page reference");
                None
            }
        })
        .collect()
}
