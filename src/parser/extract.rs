//! Comment block extraction.

use regex::Regex;
use std::sync::LazyLock;

/// Marks a block as file-level documentation. Such blocks describe the
/// file as a whole and are excluded from the reference entries.
const FILE_MARKER: &str = "@file";

// Non-greedy, so each `/**` pairs with the nearest following `*/`.
static RE_BLOCK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)/\*\*(.*?)\*/").unwrap());

/// Yield the contents of every documentation block in `text`, in order
/// of appearance, skipping file-level blocks. An opening marker with no
/// closing marker produces nothing.
pub fn comment_blocks(text: &str) -> impl Iterator<Item = &str> + '_ {
    RE_BLOCK
        .captures_iter(text)
        .map(|caps| caps.get(1).map_or("", |m| m.as_str()))
        .filter(|block| !block.contains(FILE_MARKER))
}
