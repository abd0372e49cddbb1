use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use env_logger::Env;

#[derive(Parser)]
#[command(
    name = "photo-date-export",
    version,
    about = "Copy photos and videos into one folder, setting file times to when they were captured"
)]
struct Cli {
    /// Directory tree to export from
    source: PathBuf,

    /// Existing directory to copy dated files into (subfolders are flattened)
    dest: PathBuf,

    /// exiftool executable used to read video creation dates
    #[arg(long, default_value = "exiftool")]
    exiftool: PathBuf,

    /// Print a JSON summary of the run to stdout
    #[arg(long)]
    json: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();
    let t_total = std::time::Instant::now();

    let options = photo_date_export::ExportOptions::new(cli.source, cli.dest).with_exiftool(cli.exiftool);

    let summary = photo_date_export::export(&options)
        .with_context(|| format!("Error exporting files from {}", options.source.display()))?;

    log::info!("Done in {:.2}s", t_total.elapsed().as_secs_f64());
    if cli.json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    }
    Ok(())
}
