//! Data model for classified documentation comments.

use anyhow::{anyhow, Result};

/// Tag vocabulary variant. Chosen once per run from the command line,
/// never inferred per comment block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dialect {
    /// `@name` identifies an entry; `@brief` is an optional summary.
    Named,
    /// `@brief` identifies an entry; there is no `@name` tag.
    Brief,
}

impl Dialect {
    /// Look up a dialect by its command-line name.
    pub fn from_name(name: &str) -> Result<Self> {
        match name {
            "named" => Ok(Dialect::Named),
            "brief" => Ok(Dialect::Brief),
            _ => Err(anyhow!("unknown dialect: {}. Use named or brief", name)),
        }
    }

    /// Whether `@name` belongs to the vocabulary.
    pub fn has_name_tag(self) -> bool {
        matches!(self, Dialect::Named)
    }
}

/// One `@param` entry.
#[derive(Debug, Default)]
pub struct Parameter {
    pub name: String,
    pub description: String,
}

/// Classified contents of a single comment block.
/// Absent tags are empty strings and empty sequences.
#[derive(Debug, Default)]
pub struct TagRecord {
    /// @name (Named dialect only)
    pub name: String,
    /// @brief
    pub brief: String,
    /// Untagged lines, joined with single spaces
    pub description: String,
    /// @param entries in order of appearance; repeated names are kept
    pub parameters: Vec<Parameter>,
    /// @return
    pub returns: String,
}

impl TagRecord {
    /// The navigation label and panel title under the given dialect.
    pub fn label(&self, dialect: Dialect) -> &str {
        match dialect {
            Dialect::Named => &self.name,
            Dialect::Brief => &self.brief,
        }
    }
}

/// All records parsed from one header file, in block order.
#[derive(Debug, Default)]
pub struct HeaderDoc {
    pub source: String,
    pub records: Vec<TagRecord>,
}

/// The complete model handed to the renderer. Header order follows
/// input enumeration order; it determines navigation and panel order.
#[derive(Debug, Default)]
pub struct DocumentModel {
    pub headers: Vec<HeaderDoc>,
}

impl DocumentModel {
    /// Every record across all headers, preserving file then block order.
    pub fn records(&self) -> impl Iterator<Item = &TagRecord> + '_ {
        self.headers.iter().flat_map(|h| h.records.iter())
    }
}
