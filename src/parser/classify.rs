//! Tag classification. Walks the cleaned lines of one comment block and
//! builds a single record from them.
//!
//! Dispatch is keyed on the first whitespace-delimited token of each
//! line, matched exactly against the tag vocabulary. A tag keyword with
//! trailing garbage (`@params`, `@returns`) or buried mid-line is
//! ordinary description text.

use crate::model::{Dialect, Parameter, TagRecord};
use thiserror::Error;

const NAME_TAG: &str = "@name";
const BRIEF_TAG: &str = "@brief";
const PARAM_TAG: &str = "@param";
const RETURN_TAG: &str = "@return";

/// A recognized tag keyword missing the tokens it needs. The line is
/// skipped; the rest of the record is still built.
#[derive(Debug, Error)]
#[error("malformed {keyword} tag: {line:?}")]
pub struct MalformedTag {
    pub keyword: &'static str,
    pub line: String,
}

impl MalformedTag {
    fn new(keyword: &'static str, line: &str) -> Self {
        MalformedTag {
            keyword,
            line: line.to_string(),
        }
    }
}

/// Classify the lines of one comment block into a record. Repeated
/// single-value tags overwrite, last one wins. `@param` entries append
/// in encounter order. Untagged lines accumulate into the description,
/// joined with single spaces. Never fails; a block with no classifiable
/// content yields a record with every field empty.
pub fn classify(lines: &[&str], dialect: Dialect) -> (TagRecord, Vec<MalformedTag>) {
    let mut record = TagRecord::default();
    let mut warnings = Vec::new();

    for line in lines {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }

        let (keyword, rest) = match trimmed.split_once(char::is_whitespace) {
            Some((keyword, rest)) => (keyword, rest.trim()),
            None => (trimmed, ""),
        };

        match keyword {
            NAME_TAG if dialect.has_name_tag() => {
                if rest.is_empty() {
                    warnings.push(MalformedTag::new(NAME_TAG, trimmed));
                } else {
                    record.name = rest.to_string();
                }
            }
            BRIEF_TAG => {
                if rest.is_empty() {
                    warnings.push(MalformedTag::new(BRIEF_TAG, trimmed));
                } else {
                    record.brief = rest.to_string();
                }
            }
            PARAM_TAG => match split_param(rest) {
                Some(param) => record.parameters.push(param),
                None => warnings.push(MalformedTag::new(PARAM_TAG, trimmed)),
            },
            RETURN_TAG => {
                if rest.is_empty() {
                    warnings.push(MalformedTag::new(RETURN_TAG, trimmed));
                } else {
                    record.returns = rest.to_string();
                }
            }
            _ => {
                if record.description.is_empty() {
                    record.description = trimmed.to_string();
                } else {
                    record.description.push(' ');
                    record.description.push_str(trimmed);
                }
            }
        }
    }

    (record, warnings)
}

/// Split a `@param` remainder into name and description. Both parts are
/// required.
fn split_param(rest: &str) -> Option<Parameter> {
    let (name, description) = rest.split_once(char::is_whitespace)?;
    let description = description.trim();
    if description.is_empty() {
        return None;
    }
    Some(Parameter {
        name: name.to_string(),
        description: description.to_string(),
    })
}
