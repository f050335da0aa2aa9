use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "dirtree")]
#[command(about = "Print a directory tree with box-drawing connectors", long_about = None)]
pub struct Cli {
    /// Root directory to print
    pub path: PathBuf,

    /// Include files, shown with their size in bytes
    #[arg(short = 'f', long = "files")]
    pub files: bool,

    /// Draw connectors with ASCII characters instead of box-drawing ones
    #[arg(long)]
    pub ascii: bool,

    /// A single argument after the path that is not `-f` is accepted and
    /// ignored, leaving the listing directories-only.
    #[arg(hide = true, allow_hyphen_values = true, conflicts_with = "files")]
    pub extra: Option<String>,
}
