use clap::Parser;
use public_holidays::utils::{logger, validation::Validate};
use public_holidays::{CliConfig, HolidayEngine, HolidayError};

fn main() {
    let cli = CliConfig::parse();

    logger::init_cli_logger(cli.verbose);

    tracing::info!("Starting public-holidays");
    tracing::debug!("CLI config: {:?}", cli);

    let config = match cli.resolve() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("❌ Failed to load configuration: {}", e);
            exit_with(&e);
        }
    };

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        exit_with(&e);
    }

    tracing::info!(
        "📋 Range {} .. {} (end exclusive), countries: {}, Easter override for {}: {}",
        config.start,
        config.end,
        config
            .countries
            .iter()
            .map(|c| c.as_str())
            .collect::<Vec<_>>()
            .join(","),
        config.resolution.override_country,
        config.resolution.easter_override
    );

    let engine = HolidayEngine::new(config);
    match engine.run() {
        Ok(summary) => {
            tracing::info!(
                "✅ Scanned {} days, wrote {} holiday rows",
                summary.days_scanned,
                summary.rows_written
            );
            println!("{} generated", summary.output_path.display());
        }
        Err(e) => {
            tracing::error!("❌ Holiday export failed: {}", e);
            exit_with(&e);
        }
    }
}

fn exit_with(error: &HolidayError) -> ! {
    tracing::error!("💡 Recovery suggestion: {}", error.recovery_suggestion());

    eprintln!("❌ {}", error.user_friendly_message());
    eprintln!("💡 {}", error.recovery_suggestion());

    std::process::exit(error.exit_code());
}
