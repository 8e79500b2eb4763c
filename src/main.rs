mod error;
mod extract;
mod fetch;
mod logging;
mod normalize;
mod pipeline;
mod settings;
mod sources;
mod writer;

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};

use fetch::Fetcher;
use pipeline::Pipeline;
use settings::Settings;
use sources::Source;

#[derive(Parser)]
#[command(name = "roster_etl", about = "BRACU CSE faculty and alumni listing scraper")]
struct Cli {
    /// Directory for the CSV/XLSX output (overrides ROSTER_OUTPUT_DIR)
    #[arg(short, long, global = true)]
    output_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Scrape the faculty listing
    Faculty,
    /// Scrape the alumni listing
    Alumni,
    /// Faculty then alumni, stopping at the first failure
    All,
    /// Run extraction and output on a saved HTML page
    Parse {
        /// "faculty" or "alumni"
        entity: String,
        /// Path to the saved page
        file: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let mut settings = Settings::load()?;
    if let Some(dir) = cli.output_dir {
        settings.output_dir = dir;
    }
    logging::init_tracing(&settings.log_level);

    let today = chrono::Local::now().date_naive();

    match cli.command {
        Commands::Faculty => run_live(&settings, sources::faculty::SOURCE, today),
        Commands::Alumni => run_live(&settings, sources::alumni::SOURCE, today),
        Commands::All => {
            run_live(&settings, sources::faculty::SOURCE, today)?;
            run_live(&settings, sources::alumni::SOURCE, today)
        }
        Commands::Parse { entity, file } => {
            let Some(source) = sources::by_name(&entity) else {
                bail!("Unknown entity {:?} (expected faculty or alumni)", entity);
            };
            let html = std::fs::read_to_string(&file)
                .with_context(|| format!("Failed to read {:?}", file))?;
            let summary = Pipeline::new(source, &settings.output_dir).run_html(&html, today)?;
            println!(
                "{} cards, {} rows -> {} / {}",
                summary.extracted,
                summary.rows,
                summary.outputs.csv.display(),
                summary.outputs.xlsx.display()
            );
            Ok(())
        }
    }
}

fn run_live(settings: &Settings, source: Source, date: chrono::NaiveDate) -> Result<()> {
    let fetcher = Fetcher::new()?;
    let mut pipeline = Pipeline::new(source, &settings.output_dir);
    if let Some(url) = settings.url_for(source.entity) {
        pipeline = pipeline.with_url(url);
    }
    pipeline.run(&fetcher, date)?;
    Ok(())
}
