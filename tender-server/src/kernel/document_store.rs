use {
    crate::{
        api::RestError,
        kernel::entities::DocumentHash,
    },
    axum::async_trait,
    base64::{
        engine::general_purpose::URL_SAFE_NO_PAD,
        Engine,
    },
    sha2::{
        Digest,
        Sha256,
    },
    std::collections::HashMap,
    tokio::sync::RwLock,
};

/// Content address of a document bundle: url-safe base64 of its SHA-256.
pub fn content_hash(bytes: &[u8]) -> DocumentHash {
    URL_SAFE_NO_PAD.encode(Sha256::digest(bytes))
}

#[async_trait]
pub trait DocumentStore: Send + Sync + 'static {
    async fn put(&self, bytes: Vec<u8>) -> Result<DocumentHash, RestError>;
    async fn get(&self, hash: &DocumentHash) -> Result<Vec<u8>, RestError>;
}

/// Pins documents on an external content-addressed gateway over HTTP.
pub struct HttpDocumentStore {
    client:      reqwest::Client,
    gateway_url: String,
}

impl HttpDocumentStore {
    pub fn new(gateway_url: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            gateway_url,
        }
    }

    fn document_url(&self, hash: &DocumentHash) -> String {
        format!(
            "{}/documents/{}",
            self.gateway_url.trim_end_matches('/'),
            hash
        )
    }
}

#[async_trait]
impl DocumentStore for HttpDocumentStore {
    async fn put(&self, bytes: Vec<u8>) -> Result<DocumentHash, RestError> {
        let hash = content_hash(&bytes);
        self.client
            .put(self.document_url(&hash))
            .body(bytes)
            .send()
            .await
            .and_then(|response| response.error_for_status())
            .map_err(|e| {
                tracing::error!(error = e.to_string(), hash, "Failed to pin document");
                RestError::TemporarilyUnavailable
            })?;
        Ok(hash)
    }

    async fn get(&self, hash: &DocumentHash) -> Result<Vec<u8>, RestError> {
        let response = self
            .client
            .get(self.document_url(hash))
            .send()
            .await
            .map_err(|e| {
                tracing::error!(error = e.to_string(), hash, "Failed to fetch document");
                RestError::TemporarilyUnavailable
            })?;
        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Err(RestError::DocumentNotFound(hash.clone()));
        }
        let response = response.error_for_status().map_err(|e| {
            tracing::error!(error = e.to_string(), hash, "Failed to fetch document");
            RestError::TemporarilyUnavailable
        })?;
        let bytes = response.bytes().await.map_err(|e| {
            tracing::error!(error = e.to_string(), hash, "Failed to read document body");
            RestError::TemporarilyUnavailable
        })?;
        // Verify-on-read: the gateway is not trusted to return intact content.
        if content_hash(&bytes) != *hash {
            tracing::error!(hash, "Document gateway returned corrupted content");
            return Err(RestError::TemporarilyUnavailable);
        }
        Ok(bytes.to_vec())
    }
}

/// Holds documents in process memory. Used when no gateway is configured.
#[derive(Default)]
pub struct InMemoryDocumentStore {
    documents: RwLock<HashMap<DocumentHash, Vec<u8>>>,
}

#[async_trait]
impl DocumentStore for InMemoryDocumentStore {
    async fn put(&self, bytes: Vec<u8>) -> Result<DocumentHash, RestError> {
        let hash = content_hash(&bytes);
        self.documents
            .write()
            .await
            .insert(hash.clone(), bytes);
        Ok(hash)
    }

    async fn get(&self, hash: &DocumentHash) -> Result<Vec<u8>, RestError> {
        self.documents
            .read()
            .await
            .get(hash)
            .cloned()
            .ok_or_else(|| RestError::DocumentNotFound(hash.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_put_then_get_roundtrip() {
        let store = InMemoryDocumentStore::default();
        let hash = store.put(b"tender documents".to_vec()).await.unwrap();
        assert_eq!(store.get(&hash).await.unwrap(), b"tender documents");
    }

    #[tokio::test]
    async fn test_get_unknown_hash() {
        let store = InMemoryDocumentStore::default();
        let result = store.get(&"missing".to_string()).await;
        assert!(matches!(result, Err(RestError::DocumentNotFound(_))));
    }

    #[test]
    fn test_content_hash_is_stable() {
        assert_eq!(content_hash(b"abc"), content_hash(b"abc"));
        assert_ne!(content_hash(b"abc"), content_hash(b"abd"));
    }
}
