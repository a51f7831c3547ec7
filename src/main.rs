use clap::Parser;
use orthomap::utils::{logger, validation::Validate};
use orthomap::{CliConfig, EtlEngine, LocalStorage, OrthologPipeline};
use std::path::Path;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting orthomap CLI");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(2);
    }

    // Fail fast on filesystem problems before any network traffic.
    if config.ensembl_id.is_none() {
        let input = config.input_file_path.as_deref().unwrap_or_default();
        if !Path::new(input).exists() {
            tracing::error!("Input file does not exist: {}", input);
            eprintln!("❌ Input file does not exist: {}", input);
            std::process::exit(1);
        }
    }
    if let Some(output) = &config.output_file_path {
        if Path::new(output).exists() && !config.overwrite {
            tracing::error!(
                "Output file already exists: {}. Use --overwrite to overwrite it.",
                output
            );
            eprintln!(
                "❌ Output file already exists: {}. Use --overwrite to overwrite it.",
                output
            );
            std::process::exit(1);
        }
    }

    let monitor_enabled = config.monitor;
    if monitor_enabled {
        tracing::info!("🔍 System monitoring enabled");
    }

    let storage = LocalStorage::new();
    let pipeline = match OrthologPipeline::new(storage, config) {
        Ok(pipeline) => pipeline,
        Err(e) => {
            tracing::error!("❌ Failed to set up the Ensembl client: {}", e);
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    };

    let engine = EtlEngine::new_with_monitoring(pipeline, monitor_enabled);

    match engine.run().await {
        Ok(report) => {
            tracing::info!(
                "Process completed. Orthologs not found or errors encountered for {} genes. Total errors: {}",
                report.not_found_count,
                report.error_count
            );
            println!("✅ Ortholog lookup completed successfully!");
            if report.output_path != "-" {
                println!("📁 Output saved to: {}", report.output_path);
            }
        }
        Err(e) => {
            tracing::error!("❌ Ortholog lookup failed: {}", e);
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    }

    Ok(())
}
