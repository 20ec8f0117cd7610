use clap::Parser;
use gastos_app::utils::validation::{parse_amount, Validate};
use gastos_app::utils::logger;
use gastos_app::{
    bootstrap, AppError, CliConfig, ConfigProvider, ConsoleAlerter, Screen, SummaryView,
    TomlConfig,
};
use std::sync::Arc;

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting gastos-app");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    let provider: Box<dyn ConfigProvider> = match load_provider(&config) {
        Ok(provider) => provider,
        Err(e) => {
            tracing::error!("❌ Configuration validation failed: {}", e);
            tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
            eprintln!("❌ {}", e.user_friendly_message());
            std::process::exit(1);
        }
    };

    match run(provider.as_ref()) {
        Ok(rendered) => {
            println!("{}", rendered);
            tracing::info!("✅ App mounted at '#{}'", provider.mount_selector());
        }
        Err(e) => {
            tracing::error!(
                "❌ Bootstrap failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());

            let exit_code = match e.severity() {
                gastos_app::utils::error::ErrorSeverity::Low => 0,
                gastos_app::utils::error::ErrorSeverity::Medium => 2,
                gastos_app::utils::error::ErrorSeverity::High => 1,
                gastos_app::utils::error::ErrorSeverity::Critical => 3,
            };

            if exit_code > 0 {
                std::process::exit(exit_code);
            }
        }
    }

    Ok(())
}

/// Picks the configuration source: a TOML file when `--config-file` is
/// given, the CLI flags otherwise. Either way the result is validated.
fn load_provider(config: &CliConfig) -> gastos_app::Result<Box<dyn ConfigProvider>> {
    if let Some(path) = &config.config_file {
        tracing::debug!("Loading configuration from {}", path);
        let file_config = TomlConfig::from_file(path)?;
        file_config.validate()?;
        Ok(Box::new(file_config))
    } else {
        config.validate()?;
        Ok(Box::new(config.clone()))
    }
}

/// Builds the app instance, mounts it, and returns the mounted content.
fn run(provider: &dyn ConfigProvider) -> gastos_app::Result<String> {
    let amounts = provider
        .raw_amounts()
        .iter()
        .map(|raw| parse_amount("amounts", raw))
        .collect::<gastos_app::Result<Vec<f64>>>()?;

    let view = SummaryView::new(amounts, provider.budget());
    let mut screen = Screen::with_node(provider.mount_selector());
    let alerter = Arc::new(ConsoleAlerter);

    let app = bootstrap(view, alerter, &mut screen, provider.mount_selector())?;

    screen
        .rendered(app.selector())
        .map(str::to_string)
        .ok_or_else(|| AppError::MountTargetNotFound {
            selector: app.selector().to_string(),
        })
}
