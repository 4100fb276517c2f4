use bandcamp_locations::{collect_locations, config, export, BandcampClientImpl};
use clap::Parser;
use std::fs::File;
use std::path::PathBuf;

/// Bandcamp collection location exporter
#[derive(Parser)]
#[command(
    name = "bc-locations",
    about = "Export the locations of the artists in a Bandcamp collection to CSV",
    long_about = None
)]
struct Cli {
    /// Bandcamp username whose collection to export
    #[arg(long, default_value = config::DEFAULT_USERNAME)]
    username: String,

    /// Number of band pages fetched concurrently
    #[arg(long, default_value_t = config::DEFAULT_WORKERS)]
    workers: usize,

    /// Output CSV path (defaults to {username}-bc-locations.csv)
    #[arg(long)]
    output: Option<PathBuf>,

    /// Show detailed debug information
    #[arg(long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Cli::parse();

    let mut log_builder = env_logger::Builder::from_default_env();
    if args.verbose {
        log_builder.filter_level(log::LevelFilter::Debug);
    }
    log_builder.init();

    let http_client = http_client::native::NativeClient::new();
    let client = BandcampClientImpl::new(Box::new(http_client));

    println!("🔎 Collecting artist locations for '{}'", args.username);

    let rows = match collect_locations(&client, &args.username, args.workers).await {
        Ok(rows) => rows,
        Err(e) => {
            eprintln!("❌ Failed to collect locations: {e}");
            std::process::exit(1);
        }
    };

    let path = args
        .output
        .unwrap_or_else(|| PathBuf::from(export::export_path(&args.username)));

    let file = File::create(&path)?;
    export::write_csv(&rows, file)?;

    let resolved = rows.iter().filter(|row| row.location.is_some()).count();
    println!(
        "✅ Wrote {} rows ({resolved} with locations) to {}",
        rows.len(),
        path.display()
    );

    Ok(())
}
