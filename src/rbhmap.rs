extern crate clap;
use clap::*;

mod cmd_rbhmap;

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .format_timestamp(None)
        .init();

    let app = Command::new("rbhmap")
        .version(crate_version!())
        .author(crate_authors!())
        .about("`rbhmap` - Reciprocal Best Hits mapping")
        .propagate_version(true)
        .arg_required_else_help(true)
        .color(ColorChoice::Auto)
        .subcommand(cmd_rbhmap::blast::make_subcommand())
        .subcommand(cmd_rbhmap::map2split::make_subcommand())
        .subcommand(cmd_rbhmap::map2colin::make_subcommand())
        .after_help(
            r###"Subcommands:

* blast     - BLAST tabular output to a map file of RBH pairs
* map2split - Split a map file into foreground and background pairs
* map2colin - Keep RBH pairs of an MCScanX collinearity file

Log verbosity is controlled by RUST_LOG, e.g. RUST_LOG=info.

"###,
        );

    // Check which subcommand the user ran...
    match app.get_matches().subcommand() {
        Some(("blast", sub_matches)) => cmd_rbhmap::blast::execute(sub_matches),
        Some(("map2split", sub_matches)) => cmd_rbhmap::map2split::execute(sub_matches),
        Some(("map2colin", sub_matches)) => cmd_rbhmap::map2colin::execute(sub_matches),
        _ => unreachable!(),
    }?;

    Ok(())
}
