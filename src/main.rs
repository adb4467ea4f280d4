use bridge_config_validator::{
    config::load_raw_config,
    shared::LoggingUtils,
    AppError, ConfigValidator, Registry, ValidatorSettings,
};
use tracing::{error, info};

fn main() {
    // Load settings
    let mut settings = match ValidatorSettings::load() {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("Failed to load settings: {}", e);
            std::process::exit(e.exit_code());
        }
    };

    if let Some(path) = std::env::args().nth(1) {
        settings.config_path = path;
    }

    // Initialize logging
    if let Err(e) = LoggingUtils::initialize(&settings.log_level, &settings.log_format) {
        eprintln!("Failed to initialize logging: {}", e);
        std::process::exit(e.exit_code());
    }

    info!(path = %settings.config_path, "Validating bridge node configuration");

    if let Err(e) = run(&settings) {
        match e.downcast_ref::<AppError>() {
            Some(AppError::Validation(err)) => {
                LoggingUtils::log_rejection(&settings.config_path, err);
                std::process::exit(1);
            }
            Some(app_error) => {
                error!("Configuration error: {}", app_error);
                std::process::exit(app_error.exit_code());
            }
            None => {
                error!("Validation failed: {:#}", e);
                std::process::exit(1);
            }
        }
    }
}

fn run(settings: &ValidatorSettings) -> anyhow::Result<()> {
    let registry = Registry::default().with_base_chain(&settings.base_chain)?;
    let raw = load_raw_config(&settings.config_path)?;

    let validator = ConfigValidator::new(registry);
    let resolved = validator
        .validate_startup(&raw)
        .map_err(AppError::from)?;

    LoggingUtils::log_acceptance(
        &settings.config_path,
        resolved.networks.len(),
        &resolved.enabled_tokens,
    );
    Ok(())
}
