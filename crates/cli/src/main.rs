use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use filter::{CatalogStore, FilterService};
use std::path::PathBuf;

/// Decade Filter - writes the movies released in one decade to a new file
#[derive(Parser)]
#[command(name = "decade-filter")]
#[command(about = "Filters a JSON movie catalog down to a single decade", long_about = None)]
struct Cli {
    /// The decade of interest in the format yyyy
    #[arg(short, long)]
    decade: i32,

    /// Path to the file containing all movies supported by the application
    #[arg(short, long)]
    input_file: PathBuf,

    /// Path to the filtered movies output directory
    #[arg(short, long)]
    output_dir: PathBuf,
}

fn main() {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    if let Err(err) = run(&cli) {
        tracing::error!("{err:#}");
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    // Load the full catalog (this is the only read in the process)
    let movies = catalog::load_catalog(&cli.input_file).with_context(|| {
        format!(
            "can't load the movie catalog from {}",
            cli.input_file.display()
        )
    })?;

    // Wire the core: store over the loaded records, service over the store
    let store = CatalogStore::new(movies).context("can't build the catalog store")?;
    let service = FilterService::new(Some(store)).context("can't build the filter service")?;

    let filtered = service
        .filter(cli.decade)
        .with_context(|| format!("can't filter the catalog to the {}s", cli.decade))?;

    let dest_path = destination_path(&cli.output_dir, cli.decade);
    catalog::write_filtered(&filtered, &dest_path)
        .with_context(|| format!("can't write the filtered movies to {}", dest_path.display()))?;

    println!(
        "{} {} movies from the {}s written to {}",
        "✓".green(),
        filtered.len(),
        cli.decade,
        dest_path.display()
    );

    Ok(())
}

/// The destination file inside the output directory, e.g. `1980s-movies.json`.
fn destination_path(output_dir: &std::path::Path, decade: i32) -> PathBuf {
    output_dir.join(format!("{decade}s-movies.json"))
}
