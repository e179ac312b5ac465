use crate::{
    modules::{
        dish::repository::{DishRepository, InMemoryDishRepository},
        order::repository::{InMemoryOrderRepository, OrderRepository},
    },
    utils::seed::{self, Seed},
};
use async_trait::async_trait;
use std::{env, path::PathBuf, sync::Arc};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AppEnvironment {
    Production,
    Development,
}

impl AppEnvironment {
    pub fn from(raw_environment: String) -> Self {
        match raw_environment.as_ref() {
            "production" => Self::Production,
            _ => Self::Development,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum StartupError {
    #[error("Invalid {name} value: {value}")]
    InvalidEnv { name: &'static str, value: String },
    #[error("Failed to read seed data from {path}: {source}")]
    ReadSeed {
        path: String,
        source: std::io::Error,
    },
    #[error("Failed to parse seed data from {path}: {source}")]
    ParseSeed {
        path: String,
        source: serde_json::Error,
    },
    #[error("Duplicate {resource} id in seed data: {id}")]
    DuplicateSeedId { resource: &'static str, id: String },
    #[error("Invalid {resource} {id} in seed data: {reason}")]
    InvalidSeedRecord {
        resource: &'static str,
        id: String,
        reason: String,
    },
    #[error("Failed to bind {address}: {source}")]
    Bind {
        address: String,
        source: std::io::Error,
    },
    #[error("Server stopped unexpectedly: {0}")]
    Serve(std::io::Error),
}

#[derive(Clone)]
pub struct AppContext {
    pub host: String,
    pub environment: AppEnvironment,
    pub port: u16,
    pub body_limit: usize,
}

/// Shared state handed to every handler.
#[derive(Clone)]
pub struct Context {
    pub app: AppContext,
    pub dishes: Arc<dyn DishRepository>,
    pub orders: Arc<dyn OrderRepository>,
}

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub host: String,
    pub environment: AppEnvironment,
    pub port: u16,
    pub body_limit: usize,
}

#[derive(Clone, Debug, Default)]
pub struct SeedConfig {
    pub path: Option<PathBuf>,
}

#[derive(Clone, Debug)]
pub struct Config {
    pub app: AppConfig,
    pub seed: SeedConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            app: AppConfig {
                host: String::from("0.0.0.0"),
                environment: AppEnvironment::Development,
                port: 8000,
                body_limit: 1024 * 1024,
            },
            seed: SeedConfig::default(),
        }
    }
}

fn parse_env<T: std::str::FromStr>(name: &'static str, default: T) -> Result<T, StartupError> {
    match env::var(name) {
        Ok(value) => value
            .parse::<T>()
            .map_err(|_| StartupError::InvalidEnv { name, value }),
        Err(_) => Ok(default),
    }
}

impl Config {
    /// Reads `HOST`, `PORT`, `APP_ENV`, `BODY_LIMIT_BYTES` and `SEED_DATA_PATH`, falling
    /// back to the defaults for anything unset.
    pub fn from_env() -> Result<Self, StartupError> {
        let defaults = Self::default();

        let host = env::var("HOST").unwrap_or(defaults.app.host);
        let environment = env::var("APP_ENV")
            .map(AppEnvironment::from)
            .unwrap_or(defaults.app.environment);
        let port = parse_env("PORT", defaults.app.port)?;
        let body_limit = parse_env("BODY_LIMIT_BYTES", defaults.app.body_limit)?;
        let seed_path = env::var("SEED_DATA_PATH").ok().map(PathBuf::from);

        Ok(Self {
            app: AppConfig {
                host,
                environment,
                port,
                body_limit,
            },
            seed: SeedConfig { path: seed_path },
        })
    }
}

#[async_trait]
pub trait ToContext {
    async fn to_context(self) -> Result<Context, StartupError>;
}

#[async_trait]
impl ToContext for Config {
    async fn to_context(self) -> Result<Context, StartupError> {
        let seed = match &self.seed.path {
            Some(path) => seed::load(path).await?,
            None => Seed::default(),
        };

        Ok(Context {
            app: AppContext {
                host: self.app.host,
                environment: self.app.environment,
                port: self.app.port,
                body_limit: self.app.body_limit,
            },
            dishes: Arc::new(InMemoryDishRepository::with_dishes(seed.dishes)),
            orders: Arc::new(InMemoryOrderRepository::with_orders(seed.orders)),
        })
    }
}
