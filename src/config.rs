use crate::error::{Result, ShelfError};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::{fmt, str::FromStr};

pub const CONFIG_FILE_NAME: &str = ".bookshelf.yml";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ShelfConfig {
    #[serde(default)]
    pub server: ServerSettings,

    #[serde(default)]
    pub store: StoreSettings,

    #[serde(default)]
    pub schema: SchemaSettings,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    #[serde(default = "default_graphql_path")]
    pub path: String,

    #[serde(default = "default_cors_origins")]
    pub cors_origins: Vec<String>,

    #[serde(default = "default_graphiql")]
    pub graphiql: bool,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_graphql_path() -> String {
    "/graphql".to_string()
}

fn default_cors_origins() -> Vec<String> {
    vec!["http://localhost:3000".to_string()]
}

fn default_graphiql() -> bool {
    true
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            path: default_graphql_path(),
            cors_origins: default_cors_origins(),
            graphiql: default_graphiql(),
        }
    }
}

impl ServerSettings {
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreSettings {
    #[serde(default = "default_seed")]
    pub seed: bool,

    #[serde(default)]
    pub id_policy: IdPolicy,
}

fn default_seed() -> bool {
    true
}

impl Default for StoreSettings {
    fn default() -> Self {
        Self {
            seed: default_seed(),
            id_policy: IdPolicy::default(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SchemaSettings {
    #[serde(default)]
    pub edition: Edition,
}

/// How the store picks the id for a newly created book.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum IdPolicy {
    /// One more than the largest live id. Deleting the highest record frees
    /// its id for the next create.
    #[default]
    MaxPlusOne,
    /// A counter that never goes backwards, so ids are never reissued.
    Monotonic,
}

impl fmt::Display for IdPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IdPolicy::MaxPlusOne => write!(f, "max-plus-one"),
            IdPolicy::Monotonic => write!(f, "monotonic"),
        }
    }
}

impl FromStr for IdPolicy {
    type Err = ShelfError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "max-plus-one" => Ok(IdPolicy::MaxPlusOne),
            "monotonic" => Ok(IdPolicy::Monotonic),
            _ => Err(ShelfError::Config(format!("Invalid id policy: {}", s))),
        }
    }
}

/// Which GraphQL surface is exposed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Edition {
    /// `books` and `book` only, without `summary`.
    Minimal,
    /// Full CRUD with `summary`.
    #[default]
    Extended,
}

impl fmt::Display for Edition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Edition::Minimal => write!(f, "minimal"),
            Edition::Extended => write!(f, "extended"),
        }
    }
}

impl FromStr for Edition {
    type Err = ShelfError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "minimal" => Ok(Edition::Minimal),
            "extended" => Ok(Edition::Extended),
            _ => Err(ShelfError::Config(format!("Invalid edition: {}", s))),
        }
    }
}

impl ShelfConfig {
    /// Load config from an explicit file, or search upward from `start_path`
    /// for `.bookshelf.yml`. Falls back to defaults when nothing is found.
    pub fn load(explicit: Option<&Path>, start_path: &Path) -> Result<Self> {
        let path = match explicit {
            Some(p) => {
                if !p.exists() {
                    return Err(ShelfError::Config(format!(
                        "Config file not found: {}",
                        p.display()
                    )));
                }
                p.to_path_buf()
            }
            None => match Self::find_config_file(start_path) {
                Some(p) => p,
                None => {
                    tracing::debug!("No {} found, using defaults", CONFIG_FILE_NAME);
                    return Ok(Self::default());
                }
            },
        };

        tracing::debug!("Loading config from {}", path.display());
        Self::from_file(&path)
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    pub fn from_yaml(content: &str) -> Result<Self> {
        // An empty file deserializes to unit, not a mapping.
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: ShelfConfig = serde_yaml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn find_config_file(start_path: &Path) -> Option<PathBuf> {
        let mut current = start_path.to_path_buf();
        loop {
            let config_path = current.join(CONFIG_FILE_NAME);
            if config_path.exists() {
                return Some(config_path);
            }
            if !current.pop() {
                return None;
            }
        }
    }

    pub fn validate(&self) -> Result<()> {
        if !self.server.path.starts_with('/') {
            return Err(ShelfError::Config(format!(
                "server.path must start with '/': {}",
                self.server.path
            )));
        }
        Ok(())
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        let content = serde_yaml::to_string(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}
