//! RBH map files.
//!
//! ```text
//! # Reciprocal Best Hits
//! #	At	Os
//! AT1G01010	LOC_Os01g01010
//! ```
//!
//! Column order follows the ascending order of the two group prefixes, and the
//! data lines carry IDs with their prefix stripped.

use crate::libs::error::RbhError;
use crate::libs::rbh::RbhPair;
use crate::libs::seqid::IdSplitter;
use itertools::Itertools;
use std::collections::{BTreeSet, HashSet};
use std::io::{BufRead, Write};

pub const MAP_TITLE: &str = "# Reciprocal Best Hits";

/// The two group prefixes of a pair set, in ascending order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrefixPair {
    first: String,
    second: String,
}

impl PrefixPair {
    /// ```
    /// use rbhmap::libs::map::PrefixPair;
    /// let prefixes = PrefixPair::new("Os", "At").unwrap();
    /// assert_eq!(prefixes.first(), "At");
    /// assert!(PrefixPair::new("At", "At").is_err());
    /// ```
    pub fn new(a: &str, b: &str) -> Result<Self, RbhError> {
        let prefixes: Vec<String> = [a, b]
            .iter()
            .map(|s| s.to_string())
            .sorted()
            .dedup()
            .collect();
        Self::from_sorted(prefixes)
    }

    fn from_sorted(mut prefixes: Vec<String>) -> Result<Self, RbhError> {
        if prefixes.len() != 2 {
            return Err(RbhError::PrefixCount { prefixes });
        }
        let second = prefixes.pop().unwrap_or_default();
        let first = prefixes.pop().unwrap_or_default();
        Ok(PrefixPair { first, second })
    }

    pub fn first(&self) -> &str {
        &self.first
    }

    pub fn second(&self) -> &str {
        &self.second
    }

    /// Orders the suffixes of a pair to match the header columns.
    ///
    /// The member whose prefix equals `first()` goes to the first column.
    /// This is the only orientation rule used when writing map files.
    pub fn orient<'a, S: IdSplitter>(
        &self,
        pair: &'a RbhPair,
        splitter: &S,
    ) -> Result<(&'a str, &'a str), RbhError> {
        let (p1, s1) = splitter.try_split(pair.first())?;
        let (p2, s2) = splitter.try_split(pair.second())?;

        if p1 == self.first && p2 == self.second {
            Ok((s1, s2))
        } else if p1 == self.second && p2 == self.first {
            Ok((s2, s1))
        } else {
            Err(RbhError::PrefixCount {
                prefixes: [p1, p2, self.first(), self.second()]
                    .iter()
                    .map(|s| s.to_string())
                    .sorted()
                    .dedup()
                    .collect(),
            })
        }
    }

    /// Header line of a map file, without the newline.
    pub fn header(&self) -> String {
        format!("#\t{}\t{}", self.first, self.second)
    }
}

/// Collects the group prefixes of all pairs; fails unless there are exactly two.
pub fn resolve_prefixes<'a, S, I>(pairs: I, splitter: &S) -> Result<PrefixPair, RbhError>
where
    S: IdSplitter,
    I: IntoIterator<Item = &'a RbhPair>,
{
    let mut prefixes = BTreeSet::new();
    for pair in pairs {
        for id in pair.ids() {
            let (prefix, _) = splitter.try_split(id)?;
            prefixes.insert(prefix.to_string());
        }
    }
    PrefixPair::from_sorted(prefixes.into_iter().collect())
}

/// Writes `pairs` as a map file, rows sorted by the oriented suffixes.
///
/// All rows are oriented before anything is written, so a bad pair leaves
/// the writer untouched. An empty pair set writes nothing and returns 0.
pub fn write_map<'a, S, I, W>(
    pairs: I,
    prefixes: &PrefixPair,
    splitter: &S,
    writer: &mut W,
) -> anyhow::Result<usize>
where
    S: IdSplitter,
    I: IntoIterator<Item = &'a RbhPair>,
    W: Write + ?Sized,
{
    let mut rows = vec![];
    for pair in pairs {
        rows.push(prefixes.orient(pair, splitter)?);
    }
    if rows.is_empty() {
        log::warn!("No reciprocal best hits found.");
        return Ok(0);
    }
    rows.sort_unstable();

    writeln!(writer, "{}", MAP_TITLE)?;
    writeln!(writer, "{}", prefixes.header())?;
    for (a, b) in &rows {
        writeln!(writer, "{}\t{}", a, b)?;
    }
    writer.flush()?;

    Ok(rows.len())
}

/// Splits a map data line into its two columns.
pub fn split_map_line(line: &str, line_no: usize) -> Result<(&str, &str), RbhError> {
    let fields: Vec<&str> = line.split('\t').collect();
    match fields.as_slice() {
        [a, b] => Ok((*a, *b)),
        _ => Err(RbhError::MalformedMapLine {
            line_no,
            fields: fields.len(),
            line: line.to_string(),
        }),
    }
}

/// A map file read back, with full IDs restored from the header prefixes.
#[derive(Debug, Clone)]
pub struct RbhMap {
    pub prefixes: PrefixPair,
    pairs: HashSet<RbhPair>,
}

impl RbhMap {
    /// Reads a map file. The prefix header is required.
    pub fn read<R: BufRead, S: IdSplitter>(reader: R, splitter: &S) -> anyhow::Result<Self> {
        let mut prefixes: Option<PrefixPair> = None;
        let mut pairs = HashSet::new();

        for (i, line) in reader.lines().enumerate() {
            let line = line?;
            let line = line.trim();
            if line.is_empty() || line == MAP_TITLE {
                continue;
            }
            if line.starts_with("#\t") && prefixes.is_none() {
                prefixes = Some(parse_header(line)?);
                continue;
            }
            if line.starts_with('#') {
                continue;
            }

            let header = prefixes.as_ref().ok_or_else(|| RbhError::MalformedMapHeader {
                line: line.to_string(),
            })?;
            let (a, b) = split_map_line(line, i + 1)?;
            pairs.insert(RbhPair::new(
                &splitter.join(header.first(), a),
                &splitter.join(header.second(), b),
            ));
        }

        let prefixes = prefixes.ok_or_else(|| RbhError::MalformedMapHeader {
            line: String::new(),
        })?;
        log::info!(
            "Loaded {} RBH pairs between {} and {}",
            pairs.len(),
            prefixes.first(),
            prefixes.second()
        );

        Ok(RbhMap { prefixes, pairs })
    }

    /// Membership check against the canonical pair set, in either order.
    pub fn contains(&self, a: &str, b: &str) -> bool {
        self.pairs.contains(&RbhPair::new(a, b))
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}

fn parse_header(line: &str) -> Result<PrefixPair, RbhError> {
    let fields: Vec<&str> = line.split('\t').collect();
    match fields.as_slice() {
        ["#", a, b] if a < b => PrefixPair::new(a, b),
        _ => Err(RbhError::MalformedMapHeader {
            line: line.to_string(),
        }),
    }
}
