use env_logger::Env;
use impact_stats::{AppConfig, Pipeline, Selection};
use log::{error, info};
use std::process;

#[tokio::main]
async fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let selection = Selection::from_args(std::env::args().skip(1));

    let config = match AppConfig::load() {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            process::exit(1);
        }
    };

    info!("Starting data collection into {}", config.output_dir.display());

    let pipeline = match Pipeline::from_config(&config) {
        Ok(pipeline) => pipeline,
        Err(e) => {
            error!("Failed to initialize pipeline: {}", e);
            process::exit(1);
        }
    };

    match pipeline.run(&selection).await {
        Ok(report) => {
            let collected = [&report.health, &report.regional, &report.national]
                .iter()
                .filter(|d| d.is_some())
                .count();
            info!("Data collection complete");
            info!("- {} of {} datasets collected", collected, selection.targets().len());
            if let Some(display) = &report.display {
                info!("- {} website stats published", display.0.len());
            }
            info!("Output directory: {}", pipeline.storage().base_dir().display());
        }
        Err(e) => {
            error!("Data collection failed: {}", e);
            error!("Error details: {:?}", e);
            process::exit(1);
        }
    }
}
