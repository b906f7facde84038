extern crate clap;
#[macro_use]
extern crate log;
extern crate env_logger;
extern crate setmap;

use clap::Parser;
use setmap::data::load_inputs;
use setmap::set_map::generate;
use setmap::write_set_map;
use std::path::PathBuf;

/// Generates a python-mtga set map module from the MTG Arena data files.
///
/// The cards and loc files are the data_cards_* and data_loc_* files the game client
/// downloads; gzip compressed copies are accepted too.
#[derive(Parser, Debug)]
#[command(name = "arena2setmap")]
struct Args {
    /// Path to the card dump
    #[arg(short = 'c', long = "cards-file", alias = "cards_file")]
    cards_file: PathBuf,

    /// Path to the localization dump
    #[arg(short = 'l', long = "loc-file", alias = "loc_file")]
    loc_file: PathBuf,

    /// Path to the enum dump
    #[arg(short = 'e', long = "enums-file", alias = "enums_file")]
    enums_file: PathBuf,

    /// Set code to generate, e.g. GRN (case insensitive)
    #[arg(short = 's', long = "set")]
    set: String,

    /// Directory the <set>.py module is written to
    #[arg(short = 'o', long = "out-dir", default_value = ".")]
    out_dir: PathBuf,
}

pub fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();
    let inputs = load_inputs(&args.cards_file, &args.loc_file, &args.enums_file)?;
    info!(
        "Loaded {} cards, {} localization entries, {} enums",
        inputs.cards.len(),
        inputs.locs.len(),
        inputs.enums.len()
    );
    let collection = generate(&inputs.locs, &inputs.cards, &inputs.enums, &args.set)?;
    write_set_map(&collection, &args.out_dir)?;
    Ok(())
}
