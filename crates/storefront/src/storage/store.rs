use super::StorageError;
use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;
use tracing::{info, instrument};
use uuid::Uuid;

pub const COMPANY_LOGOS: &str = "company-logos";
pub const PRODUCT_IMAGES: &str = "product-images";

#[async_trait]
pub trait ObjectStorage: Send + Sync {
    async fn upload(&self, bucket: &str, name: &str, bytes: Vec<u8>) -> Result<(), StorageError>;

    fn public_url(&self, bucket: &str, name: &str) -> String;
}

/// Buckets held in memory, served under a fixed public base URL.
pub struct InMemoryStorage {
    public_base_url: String,
    max_upload_bytes: usize,
    objects: RwLock<HashMap<(String, String), Vec<u8>>>,
}

impl InMemoryStorage {
    pub fn new(public_base_url: impl Into<String>, max_upload_bytes: usize) -> Self {
        Self {
            public_base_url: public_base_url.into().trim_end_matches('/').to_string(),
            max_upload_bytes,
            objects: RwLock::new(HashMap::new()),
        }
    }

    pub async fn download(&self, bucket: &str, name: &str) -> Result<Vec<u8>, StorageError> {
        self.objects
            .read()
            .await
            .get(&(bucket.to_string(), name.to_string()))
            .cloned()
            .ok_or_else(|| StorageError::NotFound {
                bucket: bucket.to_string(),
                name: name.to_string(),
            })
    }
}

#[async_trait]
impl ObjectStorage for InMemoryStorage {
    async fn upload(&self, bucket: &str, name: &str, bytes: Vec<u8>) -> Result<(), StorageError> {
        if bytes.is_empty() {
            return Err(StorageError::EmptyUpload);
        }
        if bytes.len() > self.max_upload_bytes {
            return Err(StorageError::TooLarge {
                size: bytes.len(),
                limit: self.max_upload_bytes,
            });
        }
        self.objects
            .write()
            .await
            .insert((bucket.to_string(), name.to_string()), bytes);
        Ok(())
    }

    fn public_url(&self, bucket: &str, name: &str) -> String {
        format!("{}/{bucket}/{name}", self.public_base_url)
    }
}

/// Stores `bytes` under a random name that keeps the original extension and returns the
/// public URL.
#[instrument(skip(storage, bytes), fields(size = bytes.len()))]
pub async fn upload_image(
    storage: &dyn ObjectStorage,
    bucket: &str,
    original_name: &str,
    bytes: Vec<u8>,
) -> Result<String, StorageError> {
    let extension = original_name
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_ascii_lowercase())
        .filter(|ext| !ext.is_empty() && ext.chars().all(|c| c.is_ascii_alphanumeric()))
        .ok_or_else(|| StorageError::InvalidName(original_name.to_string()))?;

    let name = format!("{}.{extension}", Uuid::new_v4());
    storage.upload(bucket, &name, bytes).await?;
    let url = storage.public_url(bucket, &name);
    info!(%url, "Image uploaded");
    Ok(url)
}
