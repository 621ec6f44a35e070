use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use quill::{app::App, logging};

#[derive(Debug, Parser)]
#[command(name = "quill", about = "Terminal file browser and multi-tab text editor")]
struct Cli {
    /// Directory to load into the file pane on startup (becomes the session root)
    dir: Option<PathBuf>,
}

fn main() {
    if let Err(err) = run() {
        eprintln!("{:#}", err);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    logging::init_logging().context("initialize logging failed")?;
    let cli = Cli::parse();
    let app = App::new(cli.dir);
    app.run().context("run app failed")
}
