use crate::error::StorageError;

/// Runtime storage configuration.
#[derive(Debug, Clone)]
pub struct StorageConfig {
    pub bucket: String,
}

impl StorageConfig {
    /// Read configuration from the environment.
    pub fn from_env() -> Result<Self, StorageError> {
        let bucket = std::env::var("MINDNAV_BUCKET")
            .map_err(|_| StorageError::Config("MINDNAV_BUCKET is not set".to_string()))?;
        Ok(Self { bucket })
    }
}

/// Load AWS configuration from the environment and build an S3 client.
pub async fn s3_client() -> aws_sdk_s3::Client {
    let config = aws_config::load_defaults(aws_config::BehaviorVersion::latest()).await;
    aws_sdk_s3::Client::new(&config)
}
