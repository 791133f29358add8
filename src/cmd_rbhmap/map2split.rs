use clap::*;
use rbhmap::libs::split::{partition, read_id_set};

// Create clap subcommand arguments
pub fn make_subcommand() -> Command {
    Command::new("map2split")
        .about("Split a map file into foreground and background RBH pairs")
        .after_help(
            r###"
Splits the RBH pairs of a map file by a list of sequence IDs.

A pair goes to the foreground when either of its IDs is listed in <seq_file>,
otherwise to the background. IDs in <seq_file> are bare, without group prefix,
one per line; lines starting with '#' are ignored.

Outputs:
* <output_basename>_foreground.txt
* <output_basename>_background.txt

Both keep the map lines in input order, without the header.

Examples:
1. Split by genes of interest:
   rbhmap map2split At_Os.map.tsv genes.txt At_Os

"###,
        )
        .arg(
            Arg::new("map_file")
                .required(true)
                .index(1)
                .help("Input map file"),
        )
        .arg(
            Arg::new("seq_file")
                .required(true)
                .index(2)
                .help("Input file with sequence IDs, one per line"),
        )
        .arg(
            Arg::new("output_basename")
                .required(true)
                .index(3)
                .help("Output path without the _foreground.txt/_background.txt suffix"),
        )
}

// command implementation
pub fn execute(args: &ArgMatches) -> anyhow::Result<()> {
    //----------------------------
    // Args
    //----------------------------
    let map_file = args.get_one::<String>("map_file").unwrap();
    let seq_file = args.get_one::<String>("seq_file").unwrap();
    let basename = args.get_one::<String>("output_basename").unwrap();

    //----------------------------
    // Operating
    //----------------------------
    let ids = read_id_set(rbhmap::reader(seq_file)?)?;
    log::info!("Loaded {} sequence IDs from {}", ids.len(), seq_file);

    let part = partition(rbhmap::reader(map_file)?, &ids)?;

    //----------------------------
    // Output
    //----------------------------
    part.write(basename)?;

    Ok(())
}
