//! Upload backend for the décor backend.
//!
//! Uploaded images go to one of two places: a local `uploads` directory
//! served back under `/uploads/`, or an S3-compatible object storage
//! bucket returning absolute URLs. The backend is chosen once at process
//! startup from the environment ([`StorageSettings::from_env`]) and
//! injected into the request handlers as `Arc<dyn AssetStore>`; handlers
//! never branch on environment variables themselves.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use async_trait::async_trait;

pub mod local;
pub mod s3;

pub use local::LocalDiskStore;
pub use s3::S3ObjectStore;

/// Errors from the upload backends.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// The file extension is not on the image allow-list.
    #[error("unsupported image format: {0:?}")]
    UnsupportedFormat(String),

    /// Local filesystem failure.
    #[error("upload I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Object storage request failure (credentials, network, bucket).
    #[error("object storage error: {0}")]
    ObjectStorage(String),
}

/// Storage target for uploaded binary assets.
///
/// `store` persists the bytes and returns the URL under which the asset
/// is reachable: root-relative (`/uploads/...`) for local disk, absolute
/// for object storage. That URL is what gets persisted as `image_url`.
#[async_trait]
pub trait AssetStore: Send + Sync {
    async fn store(
        &self,
        original_filename: &str,
        content_type: Option<&str>,
        data: Vec<u8>,
    ) -> Result<String, StorageError>;
}

/// Which upload backend to run, resolved from the environment exactly
/// once, before the router is built. Toggling environment variables
/// afterwards has no effect on a running process.
#[derive(Debug, Clone)]
pub enum StorageSettings {
    /// Write to a local directory, served back under `/uploads/`.
    LocalDisk { dir: PathBuf },
    /// Upload to an S3-compatible bucket.
    ObjectStorage(s3::S3Settings),
}

impl StorageSettings {
    /// Resolve the backend from the environment.
    ///
    /// Object storage is selected only when the full credentials trio
    /// (`S3_BUCKET`, `S3_ACCESS_KEY_ID`, `S3_SECRET_ACCESS_KEY`) is
    /// present; anything less falls back to local disk at `UPLOAD_DIR`
    /// (default `uploads`).
    pub fn from_env() -> Self {
        let bucket = std::env::var("S3_BUCKET");
        let access_key_id = std::env::var("S3_ACCESS_KEY_ID");
        let secret_access_key = std::env::var("S3_SECRET_ACCESS_KEY");

        match (bucket, access_key_id, secret_access_key) {
            (Ok(bucket), Ok(access_key_id), Ok(secret_access_key)) => {
                StorageSettings::ObjectStorage(s3::S3Settings {
                    bucket,
                    access_key_id,
                    secret_access_key,
                    region: std::env::var("S3_REGION").ok(),
                    endpoint: std::env::var("S3_ENDPOINT").ok(),
                    public_url: std::env::var("S3_PUBLIC_URL").ok(),
                })
            }
            _ => StorageSettings::LocalDisk {
                dir: std::env::var("UPLOAD_DIR")
                    .unwrap_or_else(|_| "uploads".into())
                    .into(),
            },
        }
    }

    /// Backend name for startup logging.
    pub fn backend_name(&self) -> &'static str {
        match self {
            StorageSettings::LocalDisk { .. } => "local-disk",
            StorageSettings::ObjectStorage(_) => "object-storage",
        }
    }

    /// The directory to serve at `/uploads/`, when the local backend is
    /// active. Object storage URLs resolve outside this process.
    pub fn local_dir(&self) -> Option<&Path> {
        match self {
            StorageSettings::LocalDisk { dir } => Some(dir),
            StorageSettings::ObjectStorage(_) => None,
        }
    }

    /// Construct the selected backend.
    pub async fn build(&self) -> Result<Arc<dyn AssetStore>, StorageError> {
        match self {
            StorageSettings::LocalDisk { dir } => Ok(Arc::new(LocalDiskStore::new(dir)?)),
            StorageSettings::ObjectStorage(settings) => {
                Ok(Arc::new(S3ObjectStore::connect(settings).await))
            }
        }
    }
}

/// Collision-resistant stored name: millisecond timestamp plus a random
/// numeric suffix, original extension preserved.
pub(crate) fn unique_asset_name(original_filename: &str) -> String {
    use rand::Rng;

    let timestamp = chrono::Utc::now().timestamp_millis();
    let suffix: u32 = rand::rng().random_range(0..1_000_000_000);

    match extension(original_filename) {
        Some(ext) => format!("{timestamp}-{suffix}.{ext}"),
        None => format!("{timestamp}-{suffix}"),
    }
}

/// The extension of an uploaded filename, if it has one.
pub(crate) fn extension(filename: &str) -> Option<&str> {
    Path::new(filename).extension().and_then(|ext| ext.to_str())
}

#[cfg(test)]
mod tests {
    use super::{extension, unique_asset_name};

    #[test]
    fn stored_names_preserve_the_original_extension() {
        let name = unique_asset_name("venue photo.JPG");
        assert!(name.ends_with(".JPG"), "got: {name}");
    }

    #[test]
    fn stored_names_without_extension_get_none_appended() {
        let name = unique_asset_name("photo");
        assert!(!name.contains('.'), "got: {name}");
    }

    #[test]
    fn stored_names_differ_between_calls() {
        // Timestamp alone could collide within a millisecond; the random
        // suffix keeps consecutive names apart.
        let a = unique_asset_name("a.png");
        let b = unique_asset_name("a.png");
        assert_ne!(a, b);
    }

    #[test]
    fn extension_handles_dots_in_filenames() {
        assert_eq!(extension("my.event.photo.webp"), Some("webp"));
        assert_eq!(extension("no-extension"), None);
    }
}
