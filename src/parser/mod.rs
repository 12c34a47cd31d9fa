//! Comment parsing pipeline: block extraction, line cleanup, tag
//! classification.

pub mod classify;
pub mod extract;
pub mod normalize;

use crate::model::{Dialect, TagRecord};
use classify::MalformedTag;

/// Everything parsed from one file's text.
#[derive(Debug, Default)]
pub struct ParsedHeader {
    /// One record per retained comment block, in order of appearance.
    pub records: Vec<TagRecord>,
    /// Malformed tag lines encountered anywhere in the file. The caller
    /// attaches the file path when reporting them.
    pub warnings: Vec<MalformedTag>,
}

/// Run the full pipeline over one file's text. Never fails: malformed
/// tag lines are skipped and surfaced through `warnings`, and a block
/// with no recognizable content still produces an (empty) record.
pub fn parse_header(text: &str, dialect: Dialect) -> ParsedHeader {
    let mut parsed = ParsedHeader::default();
    for block in extract::comment_blocks(text) {
        let lines = normalize::normalize(block);
        let (record, mut warnings) = classify::classify(&lines, dialect);
        parsed.records.push(record);
        parsed.warnings.append(&mut warnings);
    }
    parsed
}
