use crate::utils::error::{ForgeError, Result};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// A reusable UPN run description, usually one per engagement.
///
/// ```toml
/// [target]
/// domain = "corp.example.com"
///
/// [users]
/// names = ["John Smith", "${TARGET_USER}"]
///
/// [output]
/// path = "upns.txt"
/// verbose = true
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    pub target: Option<TargetConfig>,
    pub users: Option<UsersConfig>,
    pub output: Option<OutputConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TargetConfig {
    pub domain: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UsersConfig {
    pub names: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OutputConfig {
    pub path: Option<String>,
    pub verbose: Option<bool>,
}

impl TomlConfig {
    /// Reads and parses a profile from disk.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(|e| ForgeError::ConfigError {
            message: format!("cannot read {}: {}", path.as_ref().display(), e),
        })?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| ForgeError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR}` placeholders from the environment; unknown variables are left as written.
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| ForgeError::ConfigError {
            message: format!("invalid placeholder pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn domain(&self) -> Option<&str> {
        self.target.as_ref().map(|t| t.domain.as_str())
    }

    pub fn user_names(&self) -> &[String] {
        self.users.as_ref().map(|u| u.names.as_slice()).unwrap_or(&[])
    }

    pub fn output_path(&self) -> Option<&str> {
        self.output.as_ref().and_then(|o| o.path.as_deref())
    }

    pub fn verbose(&self) -> bool {
        self.output
            .as_ref()
            .and_then(|o| o.verbose)
            .unwrap_or(false)
    }
}
