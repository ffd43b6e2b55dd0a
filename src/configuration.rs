use config::{Config, ConfigError, Environment, File, FileFormat};
use serde::Deserialize;
use serde_aux::field_attributes::deserialize_number_from_string;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 5000;

#[derive(Debug, Deserialize)]
pub struct Settings {
    pub application: ApplicationSettings,
}

#[derive(Debug, Deserialize)]
pub struct ApplicationSettings {
    pub host: String,
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub port: u16,
}

impl ApplicationSettings {
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Reads settings from the built-in defaults, an optional `configuration.yaml`
/// and `APP_` prefixed environment variables, in increasing precedence.
pub fn get_configuration() -> Result<Settings, ConfigError> {
    build_settings(environment())
}

fn environment() -> Environment {
    // APP_APPLICATION__PORT=8080 -> application.port
    Environment::with_prefix("APP")
        .prefix_separator("_")
        .separator("__")
}

fn build_settings(environment: Environment) -> Result<Settings, ConfigError> {
    let settings = Config::builder()
        .set_default("application.host", DEFAULT_HOST)?
        .set_default("application.port", i64::from(DEFAULT_PORT))?
        .add_source(File::new("configuration.yaml", FileFormat::Yaml).required(false))
        .add_source(environment)
        .build()?;

    settings.try_deserialize::<Settings>()
}
