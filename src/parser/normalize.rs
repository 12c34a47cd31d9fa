//! Line cleanup for raw comment blocks.

/// Lines carrying no content: blanks and bare continuation markers.
const DECORATION: &[&str] = &["", " ", "*", " *", " * "];

/// Continuation marker stripped from the front of content lines.
const CONTINUATION: &str = " * ";

/// Split a raw block into lines, dropping decoration-only lines and
/// stripping a single leading continuation marker from each survivor.
/// Output order equals input order. A line with an unexpected marker
/// variant passes through unmodified.
pub fn normalize(block: &str) -> Vec<&str> {
    block
        .lines()
        .filter(|line| !DECORATION.contains(line))
        .map(|line| line.strip_prefix(CONTINUATION).unwrap_or(line))
        .collect()
}
