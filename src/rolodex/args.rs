use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "rolodex", version)]
#[command(about = "A contact book for the command line", long_about = None)]
pub struct Cli {
    /// Directory holding the address book and config.json
    /// (defaults to $ROLODEX_HOME, then the platform data directory)
    #[arg(long, value_name = "DIR")]
    pub data_dir: Option<PathBuf>,

    /// Address book file name inside the data directory
    #[arg(short, long, value_name = "NAME")]
    pub file: Option<String>,

    /// Verbose output (debug logging on stderr)
    #[arg(short, long)]
    pub verbose: bool,
}
