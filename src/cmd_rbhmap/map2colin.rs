use clap::*;
use rbhmap::libs::colin::{cross_reference, read_collinearity};
use rbhmap::libs::map::RbhMap;
use rbhmap::libs::seqid::Separator;

// Create clap subcommand arguments
pub fn make_subcommand() -> Command {
    Command::new("map2colin")
        .about("Extract RBH pairs from a synteny file")
        .after_help(
            r###"
Keeps the collinear gene pairs of an MCScanX .collinearity file that are Reciprocal Best Hits.

Full IDs are rebuilt from the map file as <prefix>_<id>, using the prefixes in its header,
and must match the gene names in the collinearity file. Gene order within a row does not matter.

Notes:
* The parameter/statistics preamble is copied unchanged
* Alignment blocks without any RBH pair are dropped
* Kept rows are written verbatim
* N= in each kept block header is updated to the number of kept rows

Examples:
1. Filter synteny blocks:
   rbhmap map2colin At_Os.map.tsv At_Os.collinearity At_Os.rbh.collinearity

"###,
        )
        .arg(
            Arg::new("map_file")
                .required(true)
                .index(1)
                .help("Input map file"),
        )
        .arg(
            Arg::new("colin_file")
                .required(true)
                .index(2)
                .help("Input MCScanX collinearity file"),
        )
        .arg(
            Arg::new("output_file")
                .required(true)
                .index(3)
                .help("Output collinearity file. [stdout] for screen"),
        )
}

// command implementation
pub fn execute(args: &ArgMatches) -> anyhow::Result<()> {
    //----------------------------
    // Args
    //----------------------------
    let map_file = args.get_one::<String>("map_file").unwrap();
    let colin_file = args.get_one::<String>("colin_file").unwrap();
    let output_file = args.get_one::<String>("output_file").unwrap();

    //----------------------------
    // Operating
    //----------------------------
    let map = RbhMap::read(rbhmap::reader(map_file)?, &Separator::default())?;
    let colin = read_collinearity(rbhmap::reader(colin_file)?)?;
    let kept = cross_reference(&map, &colin);

    //----------------------------
    // Output
    //----------------------------
    let mut writer = rbhmap::writer(output_file)?;
    kept.write(&mut writer)?;

    Ok(())
}
