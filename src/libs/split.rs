use crate::libs::map::split_map_line;
use std::collections::HashSet;
use std::io::{BufRead, Write};

/// Reads bare sequence IDs, one per line. `#` lines and blank lines are ignored.
pub fn read_id_set<R: BufRead>(reader: R) -> anyhow::Result<HashSet<String>> {
    let mut ids = HashSet::new();
    for line in reader.lines() {
        let line = line?;
        if line.starts_with('#') {
            continue;
        }
        let id = line.trim();
        if !id.is_empty() {
            ids.insert(id.to_string());
        }
    }
    Ok(ids)
}

/// Map data lines split by membership, each side in input order.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Partition {
    pub foreground: Vec<String>,
    pub background: Vec<String>,
}

impl Partition {
    /// Writes `<basename>_foreground.txt` and `<basename>_background.txt`.
    ///
    /// Each file holds its lines joined by newlines plus a trailing newline,
    /// so an empty side still produces a file with a single newline.
    pub fn write(&self, basename: &str) -> anyhow::Result<()> {
        for (group, lines) in [
            ("foreground", &self.foreground),
            ("background", &self.background),
        ] {
            let outfile = format!("{}_{}.txt", basename, group);
            let mut writer = crate::writer(&outfile)?;
            writer.write_all(lines.join("\n").as_bytes())?;
            writer.write_all(b"\n")?;
            writer.flush()?;
        }
        Ok(())
    }
}

/// Splits the data lines of a map file into pairs touching `ids` and the rest.
///
/// A line goes to the foreground when either column is in `ids`. Data lines
/// must have exactly two columns.
///
/// ```
/// use std::collections::HashSet;
/// use rbhmap::libs::split::partition;
/// let ids: HashSet<String> = ["x".to_string()].into_iter().collect();
/// let lines = "# Reciprocal Best Hits\n#\tA\tB\nx\ty\np\tq\n";
/// let part = partition(lines.as_bytes(), &ids).unwrap();
/// assert_eq!(part.foreground, vec!["x\ty"]);
/// assert_eq!(part.background, vec!["p\tq"]);
/// ```
pub fn partition<R: BufRead>(reader: R, ids: &HashSet<String>) -> anyhow::Result<Partition> {
    let mut part = Partition::default();

    for (i, line) in reader.lines().enumerate() {
        let line = line?;
        if line.starts_with('#') {
            continue;
        }
        let line = line.trim();

        let (a, b) = split_map_line(line, i + 1)?;
        if ids.contains(a) || ids.contains(b) {
            part.foreground.push(line.to_string());
        } else {
            part.background.push(line.to_string());
        }
    }

    log::info!(
        "{} foreground pairs, {} background pairs",
        part.foreground.len(),
        part.background.len()
    );
    Ok(part)
}
