pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::{UpnCliConfig, WordlistCliConfig};

pub use crate::config::{cli::LocalStorage, toml_config::TomlConfig, UpnJob};
pub use crate::core::{
    engine::{UpnEngine, UpnReport},
    name_parser::parse_full_name,
    passwords::generate_passwords,
    session::{SessionReport, WordlistSession},
    upn::generate_upns,
    usernames::generate_usernames,
};
pub use crate::domain::model::{CandidateSet, NameComponents};
pub use crate::domain::ports::{InputProvider, WordlistStore};
pub use crate::utils::error::{ForgeError, Result};
