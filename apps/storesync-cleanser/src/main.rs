//! StoreSync data cleanser.
//!
//! Reads one S3 event notification document (from a file argument or stdin),
//! validates each referenced upload against the store reference data schema,
//! and forwards conforming documents to the destination bucket. Any failure
//! aborts the invocation with a non-zero exit status; redelivery is the
//! trigger system's decision.
//!
//! # Usage
//!
//! ```text
//! SOURCE_BUCKET=service-a-upload DESTINATION_BUCKET=service-a-master \
//!     storesync-cleanser event.json
//! ```
//!
//! # Environment Variables
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `SOURCE_BUCKET` | *(required)* | Bucket uploads are fetched from |
//! | `DESTINATION_BUCKET` | *(required)* | Bucket the normalized copy is written to |
//! | `S3_ENDPOINT_URL` | *(unset)* | Custom S3 endpoint (path-style addressing) |
//! | `LOG_LEVEL` | `info` | Log level filter |
//! | `RUST_LOG` | *(unset)* | Fine-grained tracing filter (overrides `LOG_LEVEL`) |

use anyhow::{Context, Result};
use storesync_core::{Cleanser, CleanserConfig, S3ObjectStore, StoreDataValidator};
use storesync_model::S3Event;
use tokio::io::AsyncReadExt;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Cleanser version reported at startup.
const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initialize the tracing subscriber.
///
/// Uses `RUST_LOG` if set, otherwise falls back to the `LOG_LEVEL` config value.
fn init_tracing(log_level: &str) -> Result<()> {
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else {
        EnvFilter::try_new(log_level)
            .with_context(|| format!("invalid log level filter: {log_level}"))?
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .init();

    Ok(())
}

/// Read the event document from the first CLI argument, or stdin when no
/// argument is given.
async fn read_event() -> Result<S3Event> {
    let raw = match std::env::args().nth(1) {
        Some(path) => tokio::fs::read_to_string(&path)
            .await
            .with_context(|| format!("cannot read event file: {path}"))?,
        None => {
            let mut buf = String::new();
            tokio::io::stdin()
                .read_to_string(&mut buf)
                .await
                .context("cannot read event from stdin")?;
            buf
        }
    };

    serde_json::from_str(&raw).context("malformed S3 event document")
}

#[tokio::main]
async fn main() -> Result<()> {
    let config = CleanserConfig::from_env()?;

    init_tracing(&config.log_level)?;

    info!(
        source_bucket = %config.source_bucket,
        destination_bucket = %config.destination_bucket,
        version = VERSION,
        "starting StoreSync cleanser",
    );

    let event = read_event().await?;
    let store = S3ObjectStore::from_env().await;
    let validator = StoreDataValidator::new()?;

    let cleanser = Cleanser::new(config, store, validator);
    cleanser.handle(&event).await?;

    info!("notification processed");
    Ok(())
}
