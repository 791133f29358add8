use std::fmt;
use std::io::BufRead;
use std::str::FromStr;

/// Number of columns in BLAST tabular output (`-outfmt 6`).
pub const BLAST_COLUMNS: usize = 12;

/// One row of BLAST tabular output, reduced to the columns RBH needs.
#[derive(Debug, Clone, PartialEq)]
pub struct HitRecord {
    pub query_id: String,
    pub subject_id: String,
    /// Bit score, higher is better
    pub score: f64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HitError {
    ColumnCount { found: usize },
    InvalidScore { value: String },
}

impl fmt::Display for HitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HitError::ColumnCount { found } => write!(
                f,
                "expected {} columns, found {}",
                BLAST_COLUMNS, found
            ),
            HitError::InvalidScore { value } => write!(f, "invalid numeric value {:?}", value),
        }
    }
}

impl std::error::Error for HitError {}

impl FromStr for HitRecord {
    type Err = HitError;

    /// ```
    /// use rbhmap::libs::hit::HitRecord;
    /// let line = "A_1\tB_1\t98.5\t200\t3\t0\t1\t200\t1\t200\t1e-100\t380.2";
    /// let hit: HitRecord = line.parse().unwrap();
    /// assert_eq!(hit.query_id, "A_1");
    /// assert_eq!(hit.subject_id, "B_1");
    /// assert_eq!(hit.score, 380.2);
    /// ```
    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let fields: Vec<&str> = line.trim().split('\t').collect();
        if fields.len() != BLAST_COLUMNS {
            return Err(HitError::ColumnCount {
                found: fields.len(),
            });
        }

        let score = fields[11]
            .parse::<f64>()
            .map_err(|_| HitError::InvalidScore {
                value: fields[11].to_string(),
            })?;

        Ok(HitRecord {
            query_id: fields[0].to_string(),
            subject_id: fields[1].to_string(),
            score,
        })
    }
}

/// Parses BLAST tabular output into hit records, in input order.
///
/// Lines starting with `#` are comments. Rows that are not valid UTF-8, have a
/// wrong column count or a non-numeric bit score are skipped with a warning;
/// only I/O errors are returned.
pub fn parse_hits<R: BufRead>(mut reader: R) -> anyhow::Result<Vec<HitRecord>> {
    let mut hits = vec![];
    let mut skipped = 0usize;
    let mut buf = vec![];

    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        let line = match std::str::from_utf8(&buf) {
            Ok(line) => line.trim_end_matches(['\n', '\r']),
            Err(_) => {
                log::warn!(
                    "Skipping malformed row (invalid UTF-8): {}",
                    String::from_utf8_lossy(&buf).trim_end()
                );
                skipped += 1;
                continue;
            }
        };
        if line.starts_with('#') {
            continue;
        }

        match line.parse::<HitRecord>() {
            Ok(hit) => hits.push(hit),
            Err(HitError::ColumnCount { found }) => {
                log::warn!(
                    "Skipping malformed row (expected {} columns, found {}): {}",
                    BLAST_COLUMNS,
                    found,
                    line
                );
                skipped += 1;
            }
            Err(HitError::InvalidScore { .. }) => {
                log::warn!("Invalid numeric value in row: {}", line);
                skipped += 1;
            }
        }
    }

    log::info!("Parsed {} hits, skipped {} rows", hits.len(), skipped);
    Ok(hits)
}
