use std::path::PathBuf;

use anyhow::{Context, anyhow};
use async_trait::async_trait;
use aws_config::BehaviorVersion;
use aws_sdk_s3::config::{Credentials, Region};
use aws_sdk_s3::operation::create_bucket::CreateBucketError;
use aws_sdk_s3::operation::head_bucket::HeadBucketError;
use aws_sdk_s3::primitives::ByteStream;
use aws_sdk_s3::{Client, error::SdkError};

use crate::application::ports::image_storage_port::ImageStoragePort;
use crate::bootstrap::config::Config;
use crate::infrastructure::storage::{
    build_image_key, join_key, key_from_url, normalize_prefix, public_url,
};

pub struct S3ImageStore {
    client: Client,
    bucket: String,
    root_prefix: String,
    url_base: String,
}

impl S3ImageStore {
    pub async fn new(cfg: &Config) -> anyhow::Result<Self> {
        let bucket = cfg
            .s3_bucket
            .clone()
            .context("S3 bucket must be configured when using S3 storage backend")?;

        let mut loader = aws_config::defaults(BehaviorVersion::latest());

        if let Some(region) = &cfg.s3_region {
            loader = loader.region(Region::new(region.clone()));
        }

        let shared_config = loader.load().await;

        let mut builder = aws_sdk_s3::config::Builder::from(&shared_config);

        if let (Some(access), Some(secret)) = (&cfg.s3_access_key, &cfg.s3_secret_key) {
            let creds = Credentials::new(
                access.clone(),
                secret.clone(),
                None,
                None,
                "portal-s3-static",
            );
            builder = builder.credentials_provider(creds);
        }

        if let Some(endpoint) = &cfg.s3_endpoint {
            builder = builder.endpoint_url(endpoint.clone());
        }

        if cfg.s3_use_path_style {
            builder = builder.force_path_style(true);
        }

        let client = Client::from_conf(builder.build());

        let root_prefix = normalize_prefix(&PathBuf::from(&cfg.storage_root));
        let url_base = object_url_base(cfg, &bucket);

        ensure_bucket(&client, &bucket).await?;

        Ok(Self {
            client,
            bucket,
            root_prefix,
            url_base,
        })
    }
}

/// Where objects of `bucket` are publicly reachable. An explicit
/// `S3_PUBLIC_URL` (CDN, proxy) wins over endpoint-derived addresses.
fn object_url_base(cfg: &Config, bucket: &str) -> String {
    if let Some(public) = &cfg.s3_public_url {
        return public.clone();
    }
    match &cfg.s3_endpoint {
        Some(endpoint) => format!("{}/{}", endpoint.trim_end_matches('/'), bucket),
        None => {
            let region = cfg.s3_region.as_deref().unwrap_or("us-east-1");
            format!("https://{bucket}.s3.{region}.amazonaws.com")
        }
    }
}

#[async_trait]
impl ImageStoragePort for S3ImageStore {
    async fn upload_image(&self, bytes: &[u8], filename: &str) -> anyhow::Result<String> {
        let key = join_key(&[&self.root_prefix, &build_image_key(filename)]);
        let content_type = mime_guess::from_path(&key).first_or_octet_stream();
        self.client
            .put_object()
            .bucket(&self.bucket)
            .key(&key)
            .content_type(content_type.essence_str())
            .body(ByteStream::from(bytes.to_vec()))
            .send()
            .await
            .with_context(|| format!("failed to upload object {key}"))?;
        tracing::debug!(bucket = %self.bucket, key = %key, size = bytes.len(), "image_stored");
        Ok(public_url(&self.url_base, &key))
    }

    async fn delete_image(&self, url: &str) -> anyhow::Result<()> {
        let key = key_from_url(&self.url_base, url)
            .with_context(|| format!("url is not served by bucket {}: {url}", self.bucket))?;
        self.client
            .delete_object()
            .bucket(&self.bucket)
            .key(&key)
            .send()
            .await
            .with_context(|| format!("failed to delete object {key}"))?;
        Ok(())
    }
}

async fn ensure_bucket(client: &Client, bucket: &str) -> anyhow::Result<()> {
    match client.head_bucket().bucket(bucket).send().await {
        Ok(_) => return Ok(()),
        Err(SdkError::ServiceError(service_err)) => {
            if !matches!(service_err.err(), HeadBucketError::NotFound(_)) {
                return Err(anyhow!(service_err.err().to_string()));
            }
        }
        Err(err) => return Err(anyhow!(err.to_string())),
    }

    match client.create_bucket().bucket(bucket).send().await {
        Ok(_) => Ok(()),
        Err(SdkError::ServiceError(service_err)) => match service_err.err() {
            CreateBucketError::BucketAlreadyOwnedByYou(_) => Ok(()),
            CreateBucketError::BucketAlreadyExists(_) => Ok(()),
            other => Err(anyhow!(other.to_string())),
        },
        Err(err) => Err(anyhow!(err.to_string())),
    }
}
