//! Application configuration management.

use serde::Deserialize;

/// Application configuration, sourced from the process environment.
///
/// Required variables: `AWS_REGION`, `AWS_ACCESS_KEY`, `AWS_SECRET_KEY`,
/// `AWS_BUCKET_NAME`. Optional: `HOST`, `PORT`, `AWS_ENDPOINT`.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Host to bind to.
    #[serde(default = "default_host")]
    pub host: String,
    /// Port to listen on.
    #[serde(default = "default_port")]
    pub port: u16,
    /// AWS region of the target bucket.
    pub aws_region: String,
    /// AWS access key ID.
    pub aws_access_key: String,
    /// AWS secret access key.
    pub aws_secret_key: String,
    /// Target bucket name.
    pub aws_bucket_name: String,
    /// Custom S3-compatible endpoint (MinIO, R2). AWS when unset.
    #[serde(default)]
    pub aws_endpoint: Option<String>,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8000
}

impl AppConfig {
    /// Loads configuration from the process environment.
    ///
    /// Startup fails fast: a missing or empty required value is a hard
    /// error, since the service cannot reach the store without credentials.
    ///
    /// # Errors
    ///
    /// Returns an error if a required variable is absent or empty.
    pub fn load() -> Result<Self, config::ConfigError> {
        let config = config::Config::builder()
            .add_source(config::Environment::default())
            .build()?;

        let config: Self = config.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), config::ConfigError> {
        for (name, value) in [
            ("AWS_REGION", &self.aws_region),
            ("AWS_ACCESS_KEY", &self.aws_access_key),
            ("AWS_SECRET_KEY", &self.aws_secret_key),
            ("AWS_BUCKET_NAME", &self.aws_bucket_name),
        ] {
            if value.trim().is_empty() {
                return Err(config::ConfigError::Message(format!(
                    "{name} must not be empty"
                )));
            }
        }
        Ok(())
    }
}
