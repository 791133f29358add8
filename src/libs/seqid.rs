//! Group prefixes encoded in sequence IDs.
//!
//! IDs from the two compared collections are told apart by a leading group
//! prefix, e.g. `At_AT1G01010` and `Os_LOC_Os01g01010`. Everything that needs
//! to split an ID goes through [`IdSplitter`], so the convention lives in one
//! place.

use crate::libs::error::RbhError;

/// Splits a sequence ID into `(group_prefix, suffix)`.
pub trait IdSplitter {
    /// Returns `None` when the ID carries no group prefix.
    fn split<'a>(&self, id: &'a str) -> Option<(&'a str, &'a str)>;

    fn prefix<'a>(&self, id: &'a str) -> Option<&'a str> {
        self.split(id).map(|(prefix, _)| prefix)
    }

    /// Like [`IdSplitter::split`], failing with [`RbhError::MalformedId`].
    fn try_split<'a>(&self, id: &'a str) -> Result<(&'a str, &'a str), RbhError> {
        self.split(id).ok_or_else(|| RbhError::MalformedId { id: id.to_string() })
    }

    /// Inverse of `split`.
    fn join(&self, prefix: &str, suffix: &str) -> String;
}

/// Splits at the first occurrence of a separator character.
///
/// ```
/// use rbhmap::libs::seqid::{IdSplitter, Separator};
/// let sep = Separator::default();
/// assert_eq!(sep.split("Os_LOC_Os01g01010"), Some(("Os", "LOC_Os01g01010")));
/// assert_eq!(sep.split("AT1G01010"), None);
/// assert_eq!(sep.join("At", "AT1G01010"), "At_AT1G01010");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Separator(pub char);

impl Default for Separator {
    fn default() -> Self {
        Separator('_')
    }
}

impl IdSplitter for Separator {
    fn split<'a>(&self, id: &'a str) -> Option<(&'a str, &'a str)> {
        id.split_once(self.0)
    }

    fn join(&self, prefix: &str, suffix: &str) -> String {
        format!("{}{}{}", prefix, self.0, suffix)
    }
}
