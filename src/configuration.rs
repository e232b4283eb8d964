#[derive(Debug, serde::Deserialize)]
pub struct StaticConfiguration {
    pub application_host: String,
    pub application_port: u16,
}

impl StaticConfiguration {
    pub fn address(&self) -> String {
        format!("{}:{}", self.application_host, self.application_port)
    }
}

/// Reads `configuration.yaml` if present, then `APP_*` environment variables
/// (e.g. `APP_APPLICATION_PORT=8080`).
pub fn get_static_configuration() -> Result<StaticConfiguration, config::ConfigError> {
    let settings = config::Config::builder()
        .set_default("application_host", "0.0.0.0")?
        .set_default("application_port", 9999)?
        .add_source(
            config::File::new("configuration.yaml", config::FileFormat::Yaml).required(false)
        )
        .add_source(config::Environment::with_prefix("APP"))
        .build()?;

    settings.try_deserialize::<StaticConfiguration>()
}
