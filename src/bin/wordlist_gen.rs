use clap::Parser;
use std::io::{self, BufRead};
use upn_forge::utils::{logger, validation::Validate};
use upn_forge::{ForgeError, LocalStorage, WordlistCliConfig, WordlistSession};

/// Reads answers from stdin; end of input reads as `None`.
fn stdin_lines() -> impl FnMut() -> upn_forge::Result<Option<String>> {
    let stdin = io::stdin();
    move || -> upn_forge::Result<Option<String>> {
        let mut line = String::new();
        let read = stdin.lock().read_line(&mut line)?;
        Ok((read > 0).then_some(line))
    }
}

fn main() {
    let config = WordlistCliConfig::parse();

    if config.log_json {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(config.verbose);
    }

    if let Err(e) = run(&config) {
        match e.downcast_ref::<ForgeError>() {
            Some(err) => {
                tracing::error!("Wordlist generation failed: {}", err);
                eprintln!("Error: {}", err.user_friendly_message());
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

fn run(config: &WordlistCliConfig) -> anyhow::Result<()> {
    config.validate()?;
    tracing::debug!("Writing wordlists under {}", config.output_dir);

    let storage = LocalStorage::new(config.output_dir.clone());
    let mut session = WordlistSession::new(stdin_lines(), storage, io::stdout());
    let report = session.run()?;

    tracing::info!(
        "Session finished: {} usernames, {} passwords",
        report.usernames.len(),
        report.passwords.len()
    );
    Ok(())
}
