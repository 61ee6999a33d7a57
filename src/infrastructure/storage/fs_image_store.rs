use std::path::PathBuf;

use anyhow::Context;
use async_trait::async_trait;

use crate::application::ports::image_storage_port::ImageStoragePort;
use crate::infrastructure::storage::{
    build_image_key, key_from_url, public_url, safe_relative_path,
};

/// Mount point the uploads directory is served from.
pub const UPLOADS_ROUTE: &str = "/uploads";

pub struct FsImageStore {
    pub uploads_root: PathBuf,
    url_base: String,
}

impl FsImageStore {
    /// `public_base_url` prefixes generated URLs; without it they are
    /// origin-relative (`/uploads/...`).
    pub fn new(uploads_root: impl Into<PathBuf>, public_base_url: Option<&str>) -> Self {
        let origin = public_base_url.unwrap_or("").trim_end_matches('/');
        Self {
            uploads_root: uploads_root.into(),
            url_base: format!("{}{}", origin, UPLOADS_ROUTE),
        }
    }
}

#[async_trait]
impl ImageStoragePort for FsImageStore {
    async fn upload_image(&self, bytes: &[u8], filename: &str) -> anyhow::Result<String> {
        let key = build_image_key(filename);
        let relative = safe_relative_path(&key).context("invalid object key")?;
        let full = self.uploads_root.join(relative);
        if let Some(dir) = full.parent() {
            tokio::fs::create_dir_all(dir)
                .await
                .with_context(|| format!("failed to create {}", dir.display()))?;
        }
        tokio::fs::write(&full, bytes)
            .await
            .with_context(|| format!("failed to write {}", full.display()))?;
        tracing::debug!(key = %key, size = bytes.len(), "image_stored");
        Ok(public_url(&self.url_base, &key))
    }

    async fn delete_image(&self, url: &str) -> anyhow::Result<()> {
        let key = key_from_url(&self.url_base, url)
            .with_context(|| format!("url is not served by this store: {url}"))?;
        let relative = safe_relative_path(&key).context("forbidden")?;
        let full = self.uploads_root.join(relative);
        tokio::fs::remove_file(&full)
            .await
            .with_context(|| format!("failed to remove {}", full.display()))?;
        Ok(())
    }
}
