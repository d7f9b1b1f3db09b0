use async_trait::async_trait;
use aws_config::{BehaviorVersion, Region};
use aws_credential_types::Credentials;
use aws_sdk_s3::{primitives::ByteStream as AwsByteStream, Client};

use crate::{Blob, BlobPut, BlobResult, BlobStore, PutResult, S3Config, DEFAULT_CONTENT_TYPE};

/// S3-compatible store implementation using the AWS SDK
#[derive(Clone)]
pub struct S3CompatibleStore {
    client: Client,
    bucket: String,
}

impl S3CompatibleStore {
    /// Build a client from `config` and bind it to the configured bucket.
    pub async fn connect(config: S3Config) -> Self {
        let bucket = config.bucket.clone();
        let client = Self::create_client(config).await;
        Self { client, bucket }
    }

    async fn create_client(config: S3Config) -> Client {
        let mut loader = aws_config::defaults(BehaviorVersion::latest());

        if let Some(region) = config.region {
            loader = loader.region(Region::new(region));
        }
        if let (Some(access_key_id), Some(secret_access_key)) =
            (config.access_key_id, config.secret_access_key)
        {
            let credentials =
                Credentials::new(access_key_id, secret_access_key, None, None, "morph");
            loader = loader.credentials_provider(credentials);
        }
        if let Some(endpoint_url) = config.endpoint_url {
            loader = loader.endpoint_url(endpoint_url);
        }

        let aws_config = loader.load().await;

        Client::from_conf(
            aws_sdk_s3::config::Builder::from(&aws_config)
                .force_path_style(config.force_path_style)
                .build(),
        )
    }

    fn map_aws_error(err: impl std::error::Error + Send + Sync + 'static) -> crate::BlobError {
        crate::BlobError::backend(err)
    }
}

#[async_trait]
impl BlobStore for S3CompatibleStore {
    async fn get(&self, key: &str) -> BlobResult<Option<Blob>> {
        let result = self
            .client
            .get_object()
            .bucket(&self.bucket)
            .key(key)
            .send()
            .await;

        let output = match result {
            Ok(output) => output,
            Err(err) => {
                let missing = err
                    .as_service_error()
                    .is_some_and(|e| e.is_no_such_key())
                    || err
                        .raw_response()
                        .is_some_and(|r| r.status().as_u16() == 404);
                if missing {
                    tracing::debug!(bucket = %self.bucket, key = %key, "object not found");
                    return Ok(None);
                }
                return Err(Self::map_aws_error(err));
            }
        };

        let content_type = output
            .content_type()
            .unwrap_or(DEFAULT_CONTENT_TYPE)
            .to_string();
        let body = output
            .body
            .collect()
            .await
            .map_err(Self::map_aws_error)?
            .into_bytes();

        Ok(Some(Blob { body, content_type }))
    }

    async fn put(&self, key: &str, blob: BlobPut) -> BlobResult<PutResult> {
        let size_bytes = blob.body.len() as u64;
        let content_type = blob.content_type_or_default().to_string();

        let mut request = self
            .client
            .put_object()
            .bucket(&self.bucket)
            .key(key)
            .content_type(content_type)
            .body(AwsByteStream::from(blob.body));

        if let Some(cache_control) = blob.cache_control {
            request = request.cache_control(cache_control);
        }

        let result = request.send().await.map_err(Self::map_aws_error)?;

        Ok(PutResult {
            etag: result.e_tag().map(str::to_string),
            size_bytes,
        })
    }
}
