//! MCScanX `.collinearity` files.
//!
//! ```text
//! ############### Parameters ###############
//! # MATCH_SCORE: 50
//! ...
//! ## Alignment 0: score=150.0 e_value=1.2e-10 N=3 At1&Os1 plus
//!   0-  0:	At_AT1G01010	Os_LOC_Os01g01010	  2e-87
//!   0-  1:	At_AT1G01020	Os_LOC_Os01g01020	  1e-50
//! ```
//!
//! Lines before the first alignment header form the preamble. Rows are kept
//! verbatim so filtered output stays in the MCScanX format.

use crate::libs::map::RbhMap;
use lazy_static::lazy_static;
use regex::Regex;
use std::io::{BufRead, Write};

lazy_static! {
    static ref RE_ALIGNMENT: Regex = Regex::new(r"^## Alignment (\d+):").unwrap();
    static ref RE_PAIR: Regex = Regex::new(r"^\s*\d+-\s*\d+:\s+(\S+)\s+(\S+)").unwrap();
    static ref RE_SIZE: Regex = Regex::new(r"\bN=\d+").unwrap();
}

/// One collinear gene pair inside a synteny block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollinearPair {
    pub gene1: String,
    pub gene2: String,
    pub line: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyntenyBlock {
    pub id: usize,
    pub header: String,
    pub pairs: Vec<CollinearPair>,
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Collinearity {
    pub preamble: Vec<String>,
    pub blocks: Vec<SyntenyBlock>,
}

impl Collinearity {
    pub fn pair_count(&self) -> usize {
        self.blocks.iter().map(|b| b.pairs.len()).sum()
    }

    pub fn write<W: Write + ?Sized>(&self, writer: &mut W) -> anyhow::Result<()> {
        for line in &self.preamble {
            writeln!(writer, "{}", line)?;
        }
        for block in &self.blocks {
            writeln!(writer, "{}", block.header)?;
            for pair in &block.pairs {
                writeln!(writer, "{}", pair.line)?;
            }
        }
        writer.flush()?;
        Ok(())
    }
}

/// Reads a `.collinearity` file.
///
/// Unrecognized lines inside blocks are skipped with a warning.
pub fn read_collinearity<R: BufRead>(reader: R) -> anyhow::Result<Collinearity> {
    let mut colin = Collinearity::default();

    for (i, line) in reader.lines().enumerate() {
        let line = line?;
        let line = line.trim_end().to_string();

        if let Some(caps) = RE_ALIGNMENT.captures(&line) {
            colin.blocks.push(SyntenyBlock {
                id: caps[1].parse()?,
                header: line.clone(),
                pairs: vec![],
            });
            continue;
        }

        match colin.blocks.last_mut() {
            None => colin.preamble.push(line),
            Some(block) => {
                if line.is_empty() || line.starts_with('#') {
                    continue;
                }
                match RE_PAIR.captures(&line) {
                    Some(caps) => block.pairs.push(CollinearPair {
                        gene1: caps[1].to_string(),
                        gene2: caps[2].to_string(),
                        line: line.clone(),
                    }),
                    None => log::warn!("Skipping malformed collinearity row {}: {}", i + 1, line),
                }
            }
        }
    }

    log::debug!(
        "Read {} synteny blocks with {} gene pairs",
        colin.blocks.len(),
        colin.pair_count()
    );
    Ok(colin)
}

/// Keeps the collinear pairs that are reciprocal best hits.
///
/// Blocks left without pairs are dropped, and `N=` in the headers of kept
/// blocks is set to the number of kept pairs. The preamble is kept as is.
pub fn cross_reference(map: &RbhMap, colin: &Collinearity) -> Collinearity {
    let blocks: Vec<SyntenyBlock> = colin
        .blocks
        .iter()
        .filter_map(|block| {
            let pairs: Vec<CollinearPair> = block
                .pairs
                .iter()
                .filter(|p| map.contains(&p.gene1, &p.gene2))
                .cloned()
                .collect();
            if pairs.is_empty() {
                None
            } else {
                let size = format!("N={}", pairs.len());
                Some(SyntenyBlock {
                    id: block.id,
                    header: RE_SIZE
                        .replace(&block.header, regex::NoExpand(&size))
                        .into_owned(),
                    pairs,
                })
            }
        })
        .collect();

    let kept = Collinearity {
        preamble: colin.preamble.clone(),
        blocks,
    };
    log::info!(
        "Kept {} of {} synteny blocks, {} of {} gene pairs",
        kept.blocks.len(),
        colin.blocks.len(),
        kept.pair_count(),
        colin.pair_count()
    );
    kept
}
