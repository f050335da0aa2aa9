mod cli;

use std::io::{self, Write};
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use log::debug;

use dirtree::fs::RealFileSystem;
use dirtree::{Charset, WalkOptions};

use crate::cli::Cli;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    match run(&cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("dirtree: {err:#}");
            ExitCode::from(1)
        }
    }
}

async fn run(cli: &Cli) -> anyhow::Result<()> {
    let options = WalkOptions {
        include_files: cli.files,
    };
    let charset = if cli.ascii {
        Charset::Ascii
    } else {
        Charset::Unicode
    };
    if let Some(extra) = cli.extra.as_deref() {
        debug!("ignoring trailing argument {extra:?}");
    }
    debug!("rendering {} with {:?}", cli.path.display(), options);

    let text = dirtree::render_tree(&RealFileSystem, &cli.path, &options, charset).await?;

    let mut stdout = io::stdout().lock();
    stdout
        .write_all(text.as_bytes())
        .context("failed to write to stdout")?;
    stdout.flush().context("failed to flush stdout")?;
    Ok(())
}
