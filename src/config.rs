//! Environment-sourced deployment configuration.
//!
//! All four variables are required; validation reports every missing one in
//! a single error rather than stopping at the first. A variable that is set
//! but blank counts as missing.

use crate::domain::constants::{ENV_APP_TOKEN, ENV_DBID, ENV_DOMAIN, ENV_USER_TOKEN};

/// Required environment variables, in reporting order.
pub const REQUIRED_VARS: [&str; 4] = [ENV_USER_TOKEN, ENV_APP_TOKEN, ENV_DBID, ENV_DOMAIN];

#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("missing required environment variables: {}", .0.join(", "))]
    Missing(Vec<&'static str>),
}

/// Credentials and addressing for one deployment run, loaded once at startup.
#[derive(Debug, Clone)]
pub struct DeployConfig {
    pub user_token: String,
    pub app_token: String,
    pub dbid: String,
    pub domain: String,
}

impl DeployConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut missing = Vec::new();
        let user_token = require(ENV_USER_TOKEN, &mut missing);
        let app_token = require(ENV_APP_TOKEN, &mut missing);
        let dbid = require(ENV_DBID, &mut missing);
        let domain = require(ENV_DOMAIN, &mut missing);

        if !missing.is_empty() {
            return Err(ConfigError::Missing(missing));
        }
        Ok(Self {
            user_token,
            app_token,
            dbid,
            domain,
        })
    }

    /// Endpoint for page calls: `{base}/db/{dbid}`.
    ///
    /// A domain carrying an explicit scheme is used verbatim; a bare
    /// hostname gets `https://`.
    pub fn endpoint_url(&self) -> String {
        let base = if self.domain.starts_with("http://") || self.domain.starts_with("https://") {
            self.domain.trim_end_matches('/').to_string()
        } else {
            format!("https://{}", self.domain)
        };
        format!("{}/db/{}", base, self.dbid)
    }
}

/// Names of required variables currently absent or blank.
pub fn missing_vars() -> Vec<&'static str> {
    let mut missing = Vec::new();
    for name in REQUIRED_VARS {
        if !is_set(name) {
            missing.push(name);
        }
    }
    missing
}

fn is_set(name: &str) -> bool {
    std::env::var(name)
        .map(|v| !v.trim().is_empty())
        .unwrap_or(false)
}

fn require(name: &'static str, missing: &mut Vec<&'static str>) -> String {
    match std::env::var(name) {
        Ok(v) if !v.trim().is_empty() => v,
        _ => {
            missing.push(name);
            String::new()
        }
    }
}
