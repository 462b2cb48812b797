//! listmaker is a small interactive editor for plain-text lists
//!
//! - the list lives in memory while you add, insert, delete, move and clear items
//! - lists are saved as plain text, one item per line, so they stay readable and
//!   diffable outside the program
//! - every prompt keeps asking until it gets a usable answer
//! - nothing is written to disk unless you ask for it, and quitting or opening
//!   another list offers to save unsaved changes first
//!
use std::io;
use std::path::Path;

use clap::{crate_version, App, Arg};
use tracing::{debug, warn};

mod command;
mod config;
mod error;
mod larch;
mod listfile;
mod menu;
mod safe_input;
mod session;

use config::Config;
use larch::LarchMinimal;
use listfile::ListDir;
use menu::Menu;
use safe_input::SafeInput;

fn main() -> anyhow::Result<()> {
    let matches = App::new("listmaker")
        .version(crate_version!())
        .about("Edit a plain-text list from the terminal")
        .arg(
            Arg::with_name("LIST")
                .help("Name of a list to open at startup")
                .index(1),
        )
        .arg(
            Arg::with_name("dir")
                .short("d")
                .long("dir")
                .value_name("DIR")
                .help("Directory lists are saved to and opened from")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("config")
                .short("c")
                .long("config")
                .value_name("FILE")
                .help("YAML configuration file")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("verbose")
                .short("v")
                .long("verbose")
                .help("Log debug diagnostics to stderr"),
        )
        .get_matches();

    let config = match matches.value_of("config") {
        Some(path) => Config::load(Path::new(path))?,
        None => Config::default(),
    }
    .with_overrides(matches.value_of("dir"), matches.is_present("verbose"));
    setup_tracing(&config.log_level);

    let lists = ListDir::new(&config.data_dir);
    debug!(dir = %lists.root().display(), "list directory");

    let flags = matches.value_of("LIST").and_then(|name| {
        let path = lists.resolve(name);
        match listfile::load(&path) {
            Ok(items) => Some((path, items)),
            Err(e) => {
                warn!(error = %e, "could not open startup list");
                println!("File operation failed: {}", e);
                None
            }
        }
    });

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut model = <Menu<io::StdinLock, io::StdoutLock> as LarchMinimal>::init(flags);
    let mut menu = Menu::new(SafeInput::new(stdin.lock(), stdout.lock()), lists);
    menu.run(&mut model)?;
    Ok(())
}

fn setup_tracing(default_level: &str) {
    use tracing_subscriber::EnvFilter;

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}
