use std::sync::Arc;

use anyhow::Result;
use morph_axum::{axum, ServerSettings};
use morph_blob::{S3CompatibleStore, S3Config};
use morph_core::Resizer;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let settings = ServerSettings::from_env()?;
    let s3 = S3Config::from_env()?;
    tracing::info!(bucket = %s3.bucket, endpoint = ?s3.endpoint_url, "using object store");

    let store = Arc::new(S3CompatibleStore::connect(s3).await);
    let resizer = Resizer::with_store(store, settings.resizer.clone());

    axum(resizer).listen(settings.addr()).await
}
