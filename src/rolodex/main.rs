use clap::Parser;
use directories::ProjectDirs;
use rolodex::api::RolodexApi;
use rolodex::config::RolodexConfig;
use rolodex::error::{RolodexError, Result};
use rolodex::store::fs::FileStore;
use std::io::{self, IsTerminal, Write};
use std::path::PathBuf;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

mod args;
mod cli;
use args::Cli;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let data_dir = resolve_data_dir(&cli)?;
    let mut config = RolodexConfig::load(&data_dir).unwrap_or_else(|e| {
        warn!(error = %e, "ignoring unreadable config");
        RolodexConfig::default()
    });
    if let Some(file) = cli.file {
        config.store_file = file;
    }

    let store = FileStore::new(config.store_path(&data_dir));
    info!(path = %store.path().display(), "using address book");
    let mut api = RolodexApi::new(store, config.page_size);

    if !io::stdout().is_terminal() {
        colored::control::set_override(false);
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match api.load() {
        Ok(_) => {}
        Err(e @ RolodexError::CorruptStore { .. }) => {
            warn!(error = %e, "starting with an empty address book");
            cli::print::print_error(&mut out, &e)?;
            writeln!(
                out,
                "Starting with an empty address book. The file is kept unless you save or change contacts."
            )?;
        }
        Err(e) => return Err(e),
    }

    cli::repl::run(&mut api, io::stdin().lock(), &mut out)
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn resolve_data_dir(cli: &Cli) -> Result<PathBuf> {
    if let Some(dir) = &cli.data_dir {
        return Ok(dir.clone());
    }
    if let Some(home) = std::env::var_os("ROLODEX_HOME") {
        return Ok(PathBuf::from(home));
    }
    ProjectDirs::from("com", "rolodex", "rolodex")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| {
            RolodexError::Io(io::Error::new(
                io::ErrorKind::NotFound,
                "could not determine a data directory; pass --data-dir",
            ))
        })
}
