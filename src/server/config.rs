//! Environment configuration.
//!
//! The environment is validated once at startup against a fixed schema. Every problem is
//! reported at once so a misconfigured deployment can be fixed in a single pass.

use std::{fmt, str::FromStr};

use url::Url;

use crate::server::error::config::ConfigError;

pub const DATABASE_URL: &str = "DATABASE_URL";
pub const NODE_ENV: &str = "NODE_ENV";
pub const POSTGRES_PORT: &str = "POSTGRES_PORT";
pub const POSTGRES_USER: &str = "POSTGRES_USER";
pub const POSTGRES_PASSWORD: &str = "POSTGRES_PASSWORD";
pub const BETTER_AUTH_SECRET: &str = "BETTER_AUTH_SECRET";
pub const BETTER_AUTH_URL: &str = "BETTER_AUTH_URL";
pub const GITHUB_CLIENT_ID: &str = "GITHUB_CLIENT_ID";
pub const GITHUB_SECRET: &str = "GITHUB_SECRET";

const DEFAULT_POSTGRES_PORT: u16 = 5432;

/// Runtime environment the server is deployed in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum NodeEnv {
    #[default]
    Development,
    Production,
    Test,
}

impl NodeEnv {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Development => "development",
            Self::Production => "production",
            Self::Test => "test",
        }
    }

    pub fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }
}

impl fmt::Display for NodeEnv {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NodeEnv {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "development" => Ok(Self::Development),
            "production" => Ok(Self::Production),
            "test" => Ok(Self::Test),
            other => Err(format!(
                "expected one of \"development\", \"production\", \"test\", received {:?}",
                other
            )),
        }
    }
}

/// Validated server configuration.
#[derive(Clone)]
pub struct Config {
    pub database_url: String,
    pub node_env: NodeEnv,
    pub postgres_port: u16,
    pub postgres_user: String,
    pub postgres_password: String,
    pub auth_secret: String,
    pub auth_url: Url,
    pub github_client_id: String,
    pub github_client_secret: String,
}

impl Config {
    /// Load and validate the configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load and validate the configuration from any variable lookup.
    ///
    /// # Returns
    /// - `Ok(Config)` - Every variable matched the schema
    /// - `Err(ConfigError::InvalidEnvironment)` - One entry per invalid or missing variable
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut env = EnvReader::new(lookup);

        let database_url = env.url(DATABASE_URL, &["postgres", "postgresql"]);
        let node_env = env.parse_or(NODE_ENV, NodeEnv::default());
        let postgres_port = env.parse_or(POSTGRES_PORT, DEFAULT_POSTGRES_PORT);
        let postgres_user = env.required(POSTGRES_USER);
        let postgres_password = env.required(POSTGRES_PASSWORD);
        let auth_secret = env.required(BETTER_AUTH_SECRET);
        let auth_url = env.url(BETTER_AUTH_URL, &["http", "https"]);
        let github_client_id = env.required(GITHUB_CLIENT_ID);
        let github_client_secret = env.required(GITHUB_SECRET);

        let (
            Some(database_url),
            Some(node_env),
            Some(postgres_port),
            Some(postgres_user),
            Some(postgres_password),
            Some(auth_secret),
            Some(auth_url),
            Some(github_client_id),
            Some(github_client_secret),
        ) = (
            database_url,
            node_env,
            postgres_port,
            postgres_user,
            postgres_password,
            auth_secret,
            auth_url,
            github_client_id,
            github_client_secret,
        )
        else {
            return Err(ConfigError::InvalidEnvironment(env.issues));
        };

        Ok(Self {
            database_url: database_url.to_string(),
            node_env,
            postgres_port,
            postgres_user,
            postgres_password,
            auth_secret,
            auth_url,
            github_client_id,
            github_client_secret,
        })
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("database_url", &"[redacted]")
            .field("node_env", &self.node_env)
            .field("postgres_port", &self.postgres_port)
            .field("postgres_user", &self.postgres_user)
            .field("postgres_password", &"[redacted]")
            .field("auth_secret", &"[redacted]")
            .field("auth_url", &self.auth_url.as_str())
            .field("github_client_id", &self.github_client_id)
            .field("github_client_secret", &"[redacted]")
            .finish()
    }
}

/// Reads variables through a lookup function, recording an issue for each failed rule.
struct EnvReader<F> {
    lookup: F,
    issues: Vec<ConfigError>,
}

impl<F> EnvReader<F>
where
    F: Fn(&str) -> Option<String>,
{
    fn new(lookup: F) -> Self {
        Self {
            lookup,
            issues: Vec::new(),
        }
    }

    /// Unset and empty variables are both treated as missing.
    fn get(&self, var: &str) -> Option<String> {
        (self.lookup)(var).filter(|value| !value.trim().is_empty())
    }

    fn invalid(&mut self, var: &str, reason: impl Into<String>) {
        self.issues.push(ConfigError::InvalidEnvValue {
            var: var.to_string(),
            reason: reason.into(),
        });
    }

    fn required(&mut self, var: &str) -> Option<String> {
        let value = self.get(var);

        if value.is_none() {
            self.issues.push(ConfigError::MissingEnvVar(var.to_string()));
        }

        value
    }

    fn url(&mut self, var: &str, schemes: &[&str]) -> Option<Url> {
        let value = self.required(var)?;

        match Url::parse(&value) {
            Ok(url) if schemes.contains(&url.scheme()) => Some(url),
            Ok(url) => {
                self.invalid(
                    var,
                    format!(
                        "expected a URL with scheme {}, received {:?}",
                        schemes.join(" or "),
                        url.scheme()
                    ),
                );
                None
            }
            Err(err) => {
                self.invalid(var, format!("invalid URL: {}", err));
                None
            }
        }
    }

    fn parse_or<T>(&mut self, var: &str, default: T) -> Option<T>
    where
        T: FromStr,
        T::Err: fmt::Display,
    {
        let Some(value) = self.get(var) else {
            return Some(default);
        };

        match value.trim().parse::<T>() {
            Ok(parsed) => Some(parsed),
            Err(err) => {
                self.invalid(var, err.to_string());
                None
            }
        }
    }
}
