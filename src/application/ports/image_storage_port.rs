use async_trait::async_trait;

#[async_trait]
pub trait ImageStoragePort: Send + Sync {
    /// Stores the bytes and returns the public URL they are reachable at.
    async fn upload_image(&self, bytes: &[u8], filename: &str) -> anyhow::Result<String>;

    /// Removes the object behind a URL previously returned by `upload_image`.
    async fn delete_image(&self, url: &str) -> anyhow::Result<()>;
}
