use clap::Parser;
use secrecy::SecretString;
use slab_core::client::{ClientConfig, DEFAULT_ENDPOINT, Url};
use std::error::Error;
use std::fmt;

use crate::logging::DEFAULT_LOG_FILTER;

const API_TOKEN_VAR: &str = "SLAB_API_TOKEN";
const API_URL_VAR: &str = "SLAB_API_URL";

#[derive(Parser)]
#[command(name = "slab-mcpd", version, about = "Slab MCP daemon.")]
struct CliArgs {
    /// Slab API token, sent verbatim as the Authorization header.
    #[arg(long, env = API_TOKEN_VAR, hide_env_values = true)]
    api_token: Option<String>,

    /// Slab GraphQL endpoint.
    #[arg(long, env = API_URL_VAR, default_value = DEFAULT_ENDPOINT)]
    api_url: String,

    /// Log filter directives, e.g. `info` or `slab_core=debug`.
    #[arg(long, env = "SLAB_LOG", default_value = DEFAULT_LOG_FILTER)]
    log_filter: String,
}

/// Runtime configuration loaded from CLI arguments and environment variables.
#[derive(Debug)]
pub struct SlabConfig {
    pub api_url: Url,
    pub api_token: SecretString,
    pub log_filter: String,
}

#[derive(Debug)]
pub enum ConfigError {
    MissingSetting(&'static str),
    InvalidSetting { name: &'static str, value: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingSetting(name) => write!(f, "{name} environment variable is required"),
            Self::InvalidSetting { name, value } => {
                write!(f, "invalid {name} value: {value}")
            }
        }
    }
}

impl Error for ConfigError {}

impl SlabConfig {
    pub fn from_args() -> Result<Self, ConfigError> {
        let args = CliArgs::parse();
        Self::try_from(args)
    }

    pub fn into_client_config(self) -> ClientConfig {
        ClientConfig::new(self.api_url, self.api_token)
    }
}

impl TryFrom<CliArgs> for SlabConfig {
    type Error = ConfigError;

    fn try_from(args: CliArgs) -> Result<Self, Self::Error> {
        let api_token = args
            .api_token
            .filter(|value| !value.trim().is_empty())
            .ok_or(ConfigError::MissingSetting(API_TOKEN_VAR))?;

        let api_url = Url::parse(args.api_url.trim()).map_err(|_| ConfigError::InvalidSetting {
            name: API_URL_VAR,
            value: args.api_url.clone(),
        })?;

        let log_filter = if args.log_filter.trim().is_empty() {
            DEFAULT_LOG_FILTER.to_string()
        } else {
            args.log_filter
        };

        Ok(Self {
            api_url,
            api_token: SecretString::from(api_token),
            log_filter,
        })
    }
}
