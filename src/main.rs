use clap::Parser;
use vehicle_switch::utils::{logger, validation::Validate};
use vehicle_switch::{CliConfig, VehicleManager};

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting vehicle-switch");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        eprintln!("💡 {}", e.recovery_suggestion());
        std::process::exit(1);
    }

    let layout = match config.layout() {
        Ok(layout) => layout,
        Err(e) => {
            tracing::error!("❌ Failed to load deployment layout: {}", e);
            eprintln!("❌ {}", e);
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    };

    if let Err(e) = layout.validate() {
        tracing::error!("❌ Deployment layout validation failed: {}", e);
        eprintln!("❌ {}", e);
        eprintln!("💡 {}", e.recovery_suggestion());
        std::process::exit(1);
    }

    let manager = VehicleManager::new(layout);
    match manager.use_vehicle(&config.vehicle_data_path) {
        Ok(()) => {
            tracing::info!("✅ Vehicle configuration deployed");
            println!("✅ Vehicle configuration deployed");
            println!("🚗 Active vehicle data: {}", config.vehicle_data_path);
        }
        Err(e) => {
            tracing::error!("❌ Vehicle switch failed: {}", e);
            eprintln!("❌ {}", e);
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    }

    Ok(())
}
