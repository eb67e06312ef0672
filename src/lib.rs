pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::{HttpTransport, StdinPrompt};
pub use config::CredentialFile;
pub use crate::core::inspector::{Inspection, Inspector};
pub use crate::core::session::Session;
pub use utils::error::{InspectorError, Result};
