// crates/kinnex-core/src/config.rs

use std::path::Path;

use crate::error::{PipelineError, Result};

const SECTION: &str = "postgres";
const REQUIRED_KEYS: [&str; 5] = ["dbname", "user", "password", "host", "port"];

/// Connection settings for the sequencing database, read from a TOML
/// file with a `[postgres]` table. Every key is required; a missing
/// file, table, or key fails before any connection is attempted.
#[derive(Debug, Clone)]
pub struct DbConfig {
    pub dbname: String,
    pub user: String,
    pub password: String,
    pub host: String,
    pub port: u16,
}

impl DbConfig {
    pub fn from_file(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(PipelineError::Config(format!(
                "config file '{}' does not exist",
                path.display()
            )));
        }
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    pub fn from_toml_str(contents: &str) -> Result<Self> {
        let value: toml::Value = contents
            .parse()
            .map_err(|err| PipelineError::Config(format!("invalid TOML: {err}")))?;

        let section = value
            .get(SECTION)
            .and_then(|v| v.as_table())
            .ok_or_else(|| {
                PipelineError::Config(format!("missing [{SECTION}] section in config file"))
            })?;

        for key in REQUIRED_KEYS {
            if !section.contains_key(key) {
                return Err(PipelineError::Config(format!(
                    "missing '{key}' in [{SECTION}] section of config file"
                )));
            }
        }

        let get_str = |key: &str| -> Result<String> {
            section[key]
                .as_str()
                .map(str::to_owned)
                .ok_or_else(|| {
                    PipelineError::Config(format!("'{key}' in [{SECTION}] must be a string"))
                })
        };

        let port = section["port"]
            .as_integer()
            .and_then(|p| u16::try_from(p).ok())
            .ok_or_else(|| {
                PipelineError::Config(format!("'port' in [{SECTION}] must be a valid port number"))
            })?;

        Ok(Self {
            dbname: get_str("dbname")?,
            user: get_str("user")?,
            password: get_str("password")?,
            host: get_str("host")?,
            port,
        })
    }

    /// Renders a `postgres://` connection string for sqlx.
    pub fn url(&self) -> String {
        format!(
            "postgres://{}:{}@{}:{}/{}",
            self.user, self.password, self.host, self.port, self.dbname
        )
    }
}
