use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_non_empty_string, validate_path, validate_url, Validate};
use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "ticket-inspector")]
#[command(about = "Drill down JIRA boards and epics, then sum tickets by status")]
pub struct CliConfig {
    #[arg(long, default_value = "./token.txt", help = "Credential file with email= and token= lines")]
    pub credentials: String,

    #[arg(long, default_value = "https://sample.atlassian.net")]
    pub base_url: String,

    #[arg(long, default_value = "customfield_10004", help = "Issue field holding story points")]
    pub story_point_field: String,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            credentials: "./token.txt".to_string(),
            base_url: "https://sample.atlassian.net".to_string(),
            story_point_field: "customfield_10004".to_string(),
            verbose: false,
        }
    }
}

impl ConfigProvider for CliConfig {
    fn base_url(&self) -> &str {
        &self.base_url
    }

    fn story_point_field(&self) -> &str {
        &self.story_point_field
    }

    fn credentials_path(&self) -> &str {
        &self.credentials
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_url("base_url", &self.base_url)?;
        validate_path("credentials", &self.credentials)?;
        validate_non_empty_string("story_point_field", &self.story_point_field)?;
        Ok(())
    }
}
