use anyhow::Context;
use clap::Parser;
use warranty_advisor::config::cli::{CliConfig, Command};
use warranty_advisor::utils::{logger, validation::Validate};
use warranty_advisor::{AdvisorConfig, SystemClock, WarrantyError};

fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    if cli.json_logs {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    tracing::info!("Loading configuration from: {}", cli.config);
    let mut config = AdvisorConfig::from_file(&cli.config)
        .with_context(|| format!("failed to load config file '{}'", cli.config))?;
    config
        .validate()
        .with_context(|| format!("invalid configuration in '{}'", cli.config))?;

    if let Err(e) = run(&mut config, &cli.config, &cli.command) {
        if e.is_rejection() {
            tracing::warn!("Request rejected: {}", e);
            eprintln!("❌ {}", e);
            std::process::exit(2);
        }
        return Err(e.into());
    }

    Ok(())
}

fn run(config: &mut AdvisorConfig, path: &str, command: &Command) -> Result<(), WarrantyError> {
    let advisor = config.build_advisor(SystemClock);

    match command {
        Command::Generate { code, client } => {
            let warranty = advisor.generate_warranty(code, client)?;
            config.warranties.push(warranty.clone());
            config.save_to_file(path)?;
            tracing::info!("Saved warranty for {} to {}", code, path);
            println!("{}", serde_json::to_string_pretty(&warranty)?);
        }
        Command::Quote { code, start } => {
            advisor.validate_code(code)?;
            let start_date = start.unwrap_or_else(|| advisor.today());
            let quote = advisor.quote(code, start_date)?;
            println!("{}", serde_json::to_string_pretty(&quote)?);
        }
        Command::Check { code } => {
            let report = serde_json::json!({
                "code": code,
                "eligible": advisor.validator().is_eligible(code),
                "has_warranty": advisor.has_warranty(code)?,
            });
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
    }
    Ok(())
}
