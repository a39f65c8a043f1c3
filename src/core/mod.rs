pub mod engine;
pub mod name_parser;
pub mod passwords;
pub mod session;
pub mod upn;
pub mod usernames;

pub use crate::domain::model::{CandidateSet, NameComponents};
pub use crate::domain::ports::{InputProvider, WordlistStore};
pub use crate::utils::error::Result;
