use clap::Command;
use colored::*;
use std::process;

use gfetch::FATAL_PREFIX;

fn main() {
    gfetch::init_logging();

    Command::new("gfetch")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Gentoo-flavored system information fetch tool")
        .get_matches();

    if let Err(e) = gfetch::commands::fetch() {
        eprintln!("{}", format!("{}{}", FATAL_PREFIX, e).red());
        process::exit(1);
    }
}
