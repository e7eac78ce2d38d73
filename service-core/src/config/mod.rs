use crate::error::AppError;
use config::{Config as Cfg, File};
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8001
}

impl Config {
    /// Load listener settings from `configuration.*` and the `HOST`/`PORT`
    /// environment variables, environment taking precedence.
    pub fn load() -> Result<Self, AppError> {
        dotenvy::dotenv().ok();

        let mut builder =
            Cfg::builder().add_source(File::with_name("configuration").required(false));

        // Only the listener keys are lifted from the environment; an unprefixed
        // `Environment` source would drag in every variable of the process.
        for key in ["HOST", "PORT"] {
            if let Ok(value) = std::env::var(key) {
                builder = builder.set_override(key.to_lowercase(), value)?;
            }
        }

        Ok(builder.build()?.try_deserialize()?)
    }

    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
