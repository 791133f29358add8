use std::fmt;

/// Precondition failures that abort a pipeline invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RbhError {
    /// The pair set does not carry exactly two distinct group prefixes
    PrefixCount {
        /// Sorted, deduplicated prefixes that were observed
        prefixes: Vec<String>,
    },
    /// A map data line without exactly two tab-separated fields
    MalformedMapLine {
        /// 1-based line number in the map file
        line_no: usize,
        /// Number of fields found
        fields: usize,
        /// The offending line
        line: String,
    },
    /// The `#\t<prefixA>\t<prefixB>` header is missing or broken
    MalformedMapHeader { line: String },
    /// A sequence ID without a group separator
    MalformedId { id: String },
}

impl fmt::Display for RbhError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RbhError::PrefixCount { prefixes } if prefixes.is_empty() => {
                write!(f, "Expected exactly 2 unique prefixes, found none (empty pair set)")
            }
            RbhError::PrefixCount { prefixes } => write!(
                f,
                "Expected exactly 2 unique prefixes, found {}: {}",
                prefixes.len(),
                prefixes.join(", ")
            ),
            RbhError::MalformedMapLine {
                line_no,
                fields,
                line,
            } => write!(
                f,
                "Malformed map line {} (expected 2 columns, found {}): {}",
                line_no, fields, line
            ),
            RbhError::MalformedMapHeader { line } => {
                write!(f, "Malformed map header (expected \"#\\t<prefix>\\t<prefix>\"): {}", line)
            }
            RbhError::MalformedId { id } => {
                write!(f, "Sequence ID without a group prefix: {}", id)
            }
        }
    }
}

impl std::error::Error for RbhError {}
