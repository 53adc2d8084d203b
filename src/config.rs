use serde::Deserialize;

/// Process settings, read from the environment (and `.env` when present).
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct Settings {
    pub database_url: String,
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default)]
    pub database_pool_size: Option<u32>,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8080
}

impl Settings {
    pub(crate) fn from_env() -> Result<Self, envy::Error> {
        envy::from_env()
    }
}
