use clap::Parser;
use geostore::utils::{logger, validation::Validate};
use geostore::{Boundary, CliConfig, GisService, Location, LocationLoader, MemoryStore};
use std::fs::File;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    logger::init_cli_logger(cli.verbose);

    tracing::info!("Starting geostore CLI");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    let config = match cli.resolve() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("Configuration failed: {}", e);
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    };
    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    let locations: MemoryStore<Location> = MemoryStore::open(config.locations_path())?;
    let boundaries: MemoryStore<Boundary> = MemoryStore::open(config.boundaries_path())?;
    let service = GisService::new(locations, boundaries);

    if let Some(csv_file) = &config.csv_file {
        tracing::info!("Loading locations from {}", csv_file);
        let file = File::open(csv_file)?;
        let loader = LocationLoader::new(service.locations());
        let report = loader.load_csv(file).await?;

        println!("✅ Successfully loaded locations data");
        println!(
            "📁 {} accepted, {} skipped, {} duplicates",
            report.accepted, report.skipped, report.duplicates
        );
    } else {
        let location_count = service.list_locations().await?.len();
        let boundary_count = service.list_boundaries().await?.len();
        println!(
            "📁 Store contains {} locations and {} boundaries",
            location_count, boundary_count
        );
    }

    Ok(())
}
