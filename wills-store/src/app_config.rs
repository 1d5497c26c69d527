use serde::Deserialize;

/// Process configuration, read from the environment.
///
/// `DATABASE_URL` and `DATABASE_NAME` describe the external document
/// database; their presence is reported by the diagnostic endpoint. The
/// in-memory backend opens without them.
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub port: u16,
    pub database_url: Option<String>,
    pub database_name: String,
}

impl Config {
    pub fn load() -> Result<Self, config::ConfigError> {
        let s = config::Config::builder()
            .set_default("port", 8000)?
            .set_default("database_name", "willservice")?
            // Settings from the environment: PORT, DATABASE_URL, DATABASE_NAME
            .add_source(config::Environment::default())
            .build()?;

        s.try_deserialize()
    }
}
