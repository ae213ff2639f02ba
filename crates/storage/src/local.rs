//! Local-disk upload backend.

use std::path::{Path, PathBuf};

use async_trait::async_trait;

use crate::{unique_asset_name, AssetStore, StorageError};

/// Writes uploads into a directory on the local filesystem.
///
/// The directory is created at construction if missing. Stored files are
/// reachable at `/uploads/<name>`; the API binary mounts the directory
/// there with a static file service while this backend is active.
pub struct LocalDiskStore {
    dir: PathBuf,
}

impl LocalDiskStore {
    pub fn new(dir: impl Into<PathBuf>) -> Result<Self, StorageError> {
        let dir = dir.into();
        std::fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

#[async_trait]
impl AssetStore for LocalDiskStore {
    async fn store(
        &self,
        original_filename: &str,
        _content_type: Option<&str>,
        data: Vec<u8>,
    ) -> Result<String, StorageError> {
        let name = unique_asset_name(original_filename);
        let path = self.dir.join(&name);

        tokio::fs::write(&path, &data).await?;

        tracing::debug!(
            path = %path.display(),
            bytes = data.len(),
            "Stored upload on local disk"
        );

        Ok(format!("/uploads/{name}"))
    }
}
