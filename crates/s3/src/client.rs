//! S3 store implementation
//!
//! Wraps aws-sdk-s3 and implements the ObjectStore trait from s3fm-core for
//! a single configured bucket.

use async_trait::async_trait;

use s3fm_core::{Config, Error, ObjectInfo, ObjectStore, Result};

/// S3-backed object store, bound to one bucket
pub struct S3Store {
    inner: aws_sdk_s3::Client,
    bucket: String,
}

impl S3Store {
    /// Build an SDK client from the configuration and probe the bucket.
    ///
    /// The probe runs exactly once; every failure is fatal and classified as
    /// missing credentials, missing bucket, or a connectivity error.
    pub async fn connect(config: &Config) -> Result<Self> {
        let credentials = aws_credential_types::Credentials::new(
            config.access_key_id.clone(),
            config.secret_access_key.clone(),
            None, // session token
            None, // expiry
            "s3fm-static-credentials",
        );

        let mut loader = aws_config::defaults(aws_config::BehaviorVersion::latest())
            .credentials_provider(credentials)
            .region(aws_config::Region::new(config.region.clone()));

        if let Some(endpoint) = &config.endpoint_url {
            loader = loader.endpoint_url(endpoint);
        }

        let sdk_config = loader.load().await;

        // Path-style addressing for custom (S3-compatible) endpoints
        let s3_config = aws_sdk_s3::config::Builder::from(&sdk_config)
            .force_path_style(config.endpoint_url.is_some())
            .build();

        let store = Self {
            inner: aws_sdk_s3::Client::from_conf(s3_config),
            bucket: config.bucket.clone(),
        };

        match store.bucket_exists().await {
            Ok(true) => {
                tracing::debug!(bucket = %store.bucket, region = %config.region, "bucket probe succeeded");
                Ok(store)
            }
            Ok(false) => Err(Error::BucketNotFound(store.bucket)),
            Err(Error::NoCredentials) => Err(Error::NoCredentials),
            Err(e) => Err(Error::Connect(e.to_string())),
        }
    }

    /// Name of the configured bucket
    pub fn bucket(&self) -> &str {
        &self.bucket
    }
}

#[async_trait]
impl ObjectStore for S3Store {
    async fn bucket_exists(&self) -> Result<bool> {
        match self.inner.head_bucket().bucket(&self.bucket).send().await {
            Ok(_) => Ok(true),
            Err(e) => match classify(&error_chain(&e), &self.bucket) {
                Error::NotFound(_) => Ok(false),
                other => Err(other),
            },
        }
    }

    async fn list_objects(&self, prefix: &str) -> Result<Vec<ObjectInfo>> {
        let mut items = Vec::new();
        let mut continuation_token: Option<String> = None;

        // Follow continuation tokens so the full prefix is returned
        loop {
            let mut request = self.inner.list_objects_v2().bucket(&self.bucket);

            if !prefix.is_empty() {
                request = request.prefix(prefix);
            }

            if let Some(token) = &continuation_token {
                request = request.continuation_token(token);
            }

            let response = request
                .send()
                .await
                .map_err(|e| classify(&error_chain(&e), prefix))?;

            for object in response.contents() {
                let key = object.key().unwrap_or_default().to_string();
                let size = object.size().unwrap_or(0);
                let mut info = ObjectInfo::new(key, size);

                if let Some(modified) = object.last_modified() {
                    info.last_modified = jiff::Timestamp::from_second(modified.secs()).ok();
                }

                items.push(info);
            }

            if response.is_truncated().unwrap_or(false) {
                continuation_token = response.next_continuation_token().map(|s| s.to_string());
            } else {
                break;
            }
        }

        Ok(items)
    }

    async fn put_object(
        &self,
        key: &str,
        data: Vec<u8>,
        content_type: Option<String>,
    ) -> Result<ObjectInfo> {
        let size = data.len() as i64;
        let body = aws_sdk_s3::primitives::ByteStream::from(data);

        let mut request = self
            .inner
            .put_object()
            .bucket(&self.bucket)
            .key(key)
            .body(body);

        if let Some(ct) = content_type {
            request = request.content_type(ct);
        }

        request
            .send()
            .await
            .map_err(|e| classify(&error_chain(&e), key))?;

        let mut info = ObjectInfo::new(key, size);
        info.last_modified = Some(jiff::Timestamp::now());

        Ok(info)
    }

    async fn get_object(&self, key: &str) -> Result<Vec<u8>> {
        let response = self
            .inner
            .get_object()
            .bucket(&self.bucket)
            .key(key)
            .send()
            .await
            .map_err(|e| classify(&error_chain(&e), key))?;

        let data = response
            .body
            .collect()
            .await
            .map_err(|e| Error::Network(e.to_string()))?
            .into_bytes()
            .to_vec();

        Ok(data)
    }

    async fn delete_object(&self, key: &str) -> Result<()> {
        // No existence pre-check; S3 reports success for absent keys
        self.inner
            .delete_object()
            .bucket(&self.bucket)
            .key(key)
            .send()
            .await
            .map_err(|e| classify(&error_chain(&e), key))?;

        Ok(())
    }
}

/// Render an error with its full source chain.
///
/// The SDK's top-level Display is terse; the service error code only shows
/// up further down the chain.
fn error_chain(err: &dyn std::error::Error) -> String {
    let mut detail = err.to_string();
    let mut source = err.source();

    while let Some(inner) = source {
        detail.push_str(": ");
        detail.push_str(&inner.to_string());
        source = inner.source();
    }

    detail
}

/// Classify a rendered SDK error into a core error kind.
///
/// `subject` names the key or bucket the request was about and is carried
/// into the NotFound variant.
fn classify(detail: &str, subject: &str) -> Error {
    if detail.contains("NoSuchKey")
        || detail.contains("NoSuchBucket")
        || detail.contains("NotFound")
        || detail.contains("404")
    {
        return Error::NotFound(subject.to_string());
    }

    let lower = detail.to_ascii_lowercase();
    if lower.contains("credential")
        || detail.contains("InvalidAccessKeyId")
        || detail.contains("SignatureDoesNotMatch")
        || detail.contains("AccessDenied")
    {
        return Error::NoCredentials;
    }

    Error::Network(detail.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_not_found() {
        let err = classify(
            "service error: NoSuchKey: The specified key does not exist",
            "documents/data.txt",
        );
        assert!(matches!(err, Error::NotFound(ref k) if k == "documents/data.txt"));

        let err = classify("unhandled error (NotFound), status: 404", "my-bucket");
        assert!(matches!(err, Error::NotFound(_)));
    }

    #[test]
    fn test_classify_credentials() {
        let err = classify("service error: InvalidAccessKeyId", "key");
        assert!(matches!(err, Error::NoCredentials));

        let err = classify("dispatch failure: no credentials in the property bag", "key");
        assert!(matches!(err, Error::NoCredentials));

        let err = classify("service error: SignatureDoesNotMatch", "key");
        assert!(matches!(err, Error::NoCredentials));
    }

    #[test]
    fn test_classify_other_is_network() {
        let err = classify("dispatch failure: connection refused", "key");
        assert!(matches!(err, Error::Network(_)));
    }

    #[test]
    fn test_error_chain_joins_sources() {
        let io = std::io::Error::other("inner detail");
        let outer = Error::Io(io);
        let detail = error_chain(&outer);
        assert!(detail.contains("IO error"));
        assert!(detail.contains("inner detail"));
    }
}
