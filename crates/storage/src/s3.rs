//! S3-compatible object storage upload backend.
//!
//! Works against AWS S3 proper and S3-compatible services (MinIO, R2,
//! OSS) via an optional custom endpoint. Uploads land under a fixed
//! `uploads/` key prefix and only image extensions on the allow-list are
//! accepted.

use async_trait::async_trait;
use aws_config::meta::region::RegionProviderChain;
use aws_config::BehaviorVersion;
use aws_credential_types::Credentials;
use aws_sdk_s3::config::Region;
use aws_sdk_s3::Client;

use crate::{extension, unique_asset_name, AssetStore, StorageError};

/// Image formats accepted by the object storage backend.
pub const ALLOWED_IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "webp"];

/// Fixed key namespace for uploaded assets within the bucket.
const KEY_PREFIX: &str = "uploads";

/// Region assumed when neither configuration nor the provider chain
/// yields one.
const FALLBACK_REGION: &str = "us-east-1";

/// Connection settings for the object storage backend, resolved from the
/// environment at startup.
#[derive(Debug, Clone)]
pub struct S3Settings {
    pub bucket: String,
    pub access_key_id: String,
    pub secret_access_key: String,
    pub region: Option<String>,
    pub endpoint: Option<String>,
    /// Public base URL for stored objects. Defaults to the endpoint (or
    /// the AWS virtual-hosted bucket URL) when unset.
    pub public_url: Option<String>,
}

pub struct S3ObjectStore {
    client: Client,
    bucket: String,
    public_base: String,
}

impl S3ObjectStore {
    /// Build a client from explicit credentials.
    pub async fn connect(settings: &S3Settings) -> Self {
        let credentials = Credentials::new(
            settings.access_key_id.clone(),
            settings.secret_access_key.clone(),
            None,
            None,
            "environment",
        );

        let region_provider = match &settings.region {
            Some(region) => RegionProviderChain::first_try(Region::new(region.clone()))
                .or_else(FALLBACK_REGION),
            None => RegionProviderChain::default_provider().or_else(FALLBACK_REGION),
        };

        let mut loader = aws_config::defaults(BehaviorVersion::latest())
            .region(region_provider)
            .credentials_provider(credentials);
        if let Some(endpoint) = &settings.endpoint {
            loader = loader.endpoint_url(endpoint.clone());
        }
        let config = loader.load().await;
        let client = Client::new(&config);

        let public_base = settings.public_url.clone().unwrap_or_else(|| {
            match &settings.endpoint {
                Some(endpoint) => {
                    format!("{}/{}", endpoint.trim_end_matches('/'), settings.bucket)
                }
                None => format!("https://{}.s3.amazonaws.com", settings.bucket),
            }
        });

        Self {
            client,
            bucket: settings.bucket.clone(),
            public_base: public_base.trim_end_matches('/').to_string(),
        }
    }
}

#[async_trait]
impl AssetStore for S3ObjectStore {
    async fn store(
        &self,
        original_filename: &str,
        content_type: Option<&str>,
        data: Vec<u8>,
    ) -> Result<String, StorageError> {
        check_image_extension(original_filename)?;

        let name = unique_asset_name(original_filename);
        let key = format!("{KEY_PREFIX}/{name}");
        let bytes = data.len();

        let mut request = self
            .client
            .put_object()
            .bucket(&self.bucket)
            .key(&key)
            .body(data.into());
        if let Some(content_type) = content_type {
            request = request.content_type(content_type);
        }

        request
            .send()
            .await
            .map_err(|e| StorageError::ObjectStorage(e.to_string()))?;

        tracing::info!(key = %key, bytes, "Uploaded asset to object storage");

        Ok(format!("{}/{key}", self.public_base))
    }
}

/// Reject filenames whose extension is not a known image format.
fn check_image_extension(filename: &str) -> Result<(), StorageError> {
    let ext = extension(filename)
        .map(str::to_ascii_lowercase)
        .unwrap_or_default();
    if ALLOWED_IMAGE_EXTENSIONS.contains(&ext.as_str()) {
        Ok(())
    } else {
        Err(StorageError::UnsupportedFormat(ext))
    }
}
