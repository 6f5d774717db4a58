use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use fovea::{App, Config};
use fovea::book::Library;
use fovea::config::progress::JsonProgressStore;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "fovea")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Directory of chapter markdown files, read in filename order
    #[arg(default_value = "content/chapters")]
    content: PathBuf,
}

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "fovea=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    let cli = Cli::parse();

    let config = Config::load()?;
    let library = Library::open(&cli.content)?;
    let store = Box::new(JsonProgressStore::open_default()?);

    let mut app = App::new(config, library, store)?;
    app.run()
}
