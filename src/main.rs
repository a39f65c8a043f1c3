use clap::Parser;
use upn_forge::utils::logger;
use upn_forge::{ForgeError, LocalStorage, UpnCliConfig, UpnEngine};

fn main() {
    let config = UpnCliConfig::parse();

    if config.log_json {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::debug!("CLI config: {:?}", config);

    if let Err(e) = run(&config) {
        match e.downcast_ref::<ForgeError>() {
            Some(err) => {
                tracing::error!("UPN generation failed: {}", err);
                eprintln!("Error: {}", err);
                eprintln!("{}", err.user_friendly_message());
                eprintln!("Suggestion: {}", err.recovery_suggestion());
                std::process::exit(err.exit_code());
            }
            None => {
                tracing::error!("Unexpected failure: {:#}", e);
                eprintln!("Unexpected error: {:#}", e);
                std::process::exit(1);
            }
        }
    }
}

fn run(config: &UpnCliConfig) -> anyhow::Result<()> {
    let job = config.resolve()?;

    tracing::info!(
        "Generating UPNs for {} user(s) in domain {}",
        job.users.len(),
        job.domain
    );

    // Relative output paths resolve against the working directory.
    let engine = UpnEngine::new(LocalStorage::new("."));
    let stdout = std::io::stdout();
    let report = engine.run(&job, &mut stdout.lock())?;

    if let Some(path) = report.output_path {
        tracing::info!("{} UPNs written to {}", report.upns.len(), path);
    }
    Ok(())
}
