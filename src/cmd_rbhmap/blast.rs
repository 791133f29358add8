use clap::*;
use rbhmap::libs::hit::parse_hits;
use rbhmap::libs::map::{resolve_prefixes, write_map};
use rbhmap::libs::rbh::find_rbh;
use rbhmap::libs::seqid::Separator;

// Create clap subcommand arguments
pub fn make_subcommand() -> Command {
    Command::new("blast")
        .about("Map Reciprocal Best Hits (RBH) from BLAST results")
        .after_help(
            r###"
Finds Reciprocal Best Hits between two groups of sequences in an all-vs-all BLAST search.

Input is BLAST tabular output (-outfmt 6), 12 columns: qseqid, sseqid and bitscore are used.
Sequence IDs carry a group prefix before the first '_', e.g. At_AT1G01010 and Os_LOC_Os01g01010.
Hits within one group are ignored. On equal bitscores the first hit wins.

Notes:
* Lines starting with '#' are skipped
* Malformed rows are skipped with a warning
* Exactly two group prefixes must be present among the RBH pairs
* When no RBH is found, a warning is printed and no map file is written
* Input can be gzipped; 'stdin' reads from standard input

Output:
    # Reciprocal Best Hits
    #	At	Os
    AT1G01010	LOC_Os01g01010

Examples:
1. Build a map file:
   rbhmap blast all_vs_all.blast.tsv At_Os.map.tsv

2. Print to screen:
   rbhmap blast all_vs_all.blast.tsv stdout

"###,
        )
        .arg(
            Arg::new("blast_file")
                .required(true)
                .index(1)
                .help("Input BLAST tabular file"),
        )
        .arg(
            Arg::new("map_file")
                .required(true)
                .index(2)
                .help("Output map file. [stdout] for screen"),
        )
}

// command implementation
pub fn execute(args: &ArgMatches) -> anyhow::Result<()> {
    //----------------------------
    // Args
    //----------------------------
    let blast_file = args.get_one::<String>("blast_file").unwrap();
    let map_file = args.get_one::<String>("map_file").unwrap();
    let splitter = Separator::default();

    //----------------------------
    // Operating
    //----------------------------
    let hits = parse_hits(rbhmap::reader(blast_file)?)?;
    let pairs = find_rbh(&hits, &splitter);

    if pairs.is_empty() {
        log::warn!("No reciprocal best hits found.");
        return Ok(());
    }
    let prefixes = resolve_prefixes(&pairs, &splitter)?;

    //----------------------------
    // Output
    //----------------------------
    let mut writer = rbhmap::writer(map_file)?;
    let n = write_map(&pairs, &prefixes, &splitter, &mut writer)?;
    log::info!("Wrote {} RBH pairs to {}", n, map_file);

    Ok(())
}
