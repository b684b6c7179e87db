use config::{Config, ConfigError};
use serde::Deserialize;

pub mod domain;

#[derive(Clone, Debug, Deserialize)]
pub struct HavenConfig {
    pub server: Server,
    pub logger: Logger,
}

impl HavenConfig {
    pub fn load() -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(config::File::with_name("haven.toml"))
            .add_source(config::Environment::with_prefix("HAVEN").separator("_"))
            .build()?
            .try_deserialize::<HavenConfig>()
    }
}

#[derive(Clone, Debug, Deserialize)]
pub struct Server {
    pub addr: String,
    pub tls: Option<Tls>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct Tls {
    pub certificate: String,
    pub private_key: String,
}

#[derive(Clone, Debug, Deserialize)]
pub struct Logger {
    pub level: Level,
}

#[derive(Clone, Debug, Deserialize)]
pub enum Level {
    TRACE,
    DEBUG,
    INFO,
    WARN,
    ERROR,
}

impl From<&Level> for tracing::Level {
    fn from(value: &Level) -> Self {
        match value {
            Level::TRACE => tracing::Level::TRACE,
            Level::DEBUG => tracing::Level::DEBUG,
            Level::INFO => tracing::Level::INFO,
            Level::WARN => tracing::Level::WARN,
            Level::ERROR => tracing::Level::ERROR,
        }
    }
}
