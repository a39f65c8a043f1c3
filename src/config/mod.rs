pub mod cli;
pub mod toml_config;

use crate::utils::error::Result;
use crate::utils::validation::{
    validate_domain, validate_non_empty_list, validate_non_empty_string, validate_path,
    validate_required_field, Validate,
};
use serde::{Deserialize, Serialize};
use toml_config::TomlConfig;

#[cfg(feature = "cli")]
use clap::Parser;

/// Fully resolved input for one run of the UPN tool.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpnJob {
    pub domain: String,
    pub users: Vec<String>,
    pub output: Option<String>,
    pub verbose: bool,
}

impl Validate for UpnJob {
    fn validate(&self) -> Result<()> {
        validate_domain("domain", &self.domain)?;
        validate_non_empty_list("user", &self.users)?;
        for user in &self.users {
            validate_non_empty_string("user", user)?;
        }
        if let Some(output) = &self.output {
            validate_path("output", output)?;
        }
        Ok(())
    }
}

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "upn-forge")]
#[command(about = "Generate all possible UPN combinations from a domain and a user's full name")]
#[command(after_help = "Examples:\n  upn-forge --domain company.com --user \"John Michael Smith\"\n  upn-forge -d example.org -u \"Jane Smith\" -o upns.txt\n  upn-forge --config engagement.toml")]
pub struct UpnCliConfig {
    /// Domain name (e.g. abc.txt, company.com)
    #[arg(short, long, required_unless_present = "config")]
    pub domain: Option<String>,

    /// Full name of the user (e.g. "John Doe", "Jane Mary Smith")
    #[arg(short, long, required_unless_present = "config")]
    pub user: Option<String>,

    /// Output file to save UPNs
    #[arg(short, long)]
    pub output: Option<String>,

    /// Show name parsing details before generation
    #[arg(short, long)]
    pub verbose: bool,

    /// TOML profile with target domain, user names and output settings
    #[arg(short, long)]
    pub config: Option<String>,

    /// Emit logs as JSON lines
    #[arg(long)]
    pub log_json: bool,
}

#[cfg(feature = "cli")]
impl UpnCliConfig {
    /// Loads the profile, if any, and lets command line flags override it.
    pub fn resolve(&self) -> Result<UpnJob> {
        let profile = match &self.config {
            Some(path) => TomlConfig::from_file(path)?,
            None => TomlConfig::default(),
        };
        merge(self, &profile)
    }
}

#[cfg(feature = "cli")]
fn merge(cli: &UpnCliConfig, profile: &TomlConfig) -> Result<UpnJob> {
    let domain = cli
        .domain
        .clone()
        .or_else(|| profile.domain().map(str::to_string));
    let domain = validate_required_field("domain", &domain)?.clone();

    let users = match &cli.user {
        Some(user) => vec![user.clone()],
        None => profile.user_names().to_vec(),
    };

    let job = UpnJob {
        domain,
        users,
        output: cli
            .output
            .clone()
            .or_else(|| profile.output_path().map(str::to_string)),
        verbose: cli.verbose || profile.verbose(),
    };
    job.validate()?;
    Ok(job)
}

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "wordlist-gen")]
#[command(about = "Interactive username and password list generator")]
pub struct WordlistCliConfig {
    /// Directory for usernames.txt and passwords.txt
    #[arg(long, default_value = ".")]
    pub output_dir: String,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Emit logs as JSON lines
    #[arg(long)]
    pub log_json: bool,
}

#[cfg(feature = "cli")]
impl Validate for WordlistCliConfig {
    fn validate(&self) -> Result<()> {
        validate_path("output_dir", &self.output_dir)
    }
}
