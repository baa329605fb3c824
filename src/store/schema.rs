use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::metrics::BodyMetrics;

pub const SCHEMA_VERSION: u32 = 1;

#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("malformed metrics payload: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("unsupported metrics schema version {found} (this build reads {})", SCHEMA_VERSION)]
    UnsupportedVersion { found: u32 },

    #[error("inconsistent metrics: {0}")]
    Invalid(String),
}

#[derive(Serialize)]
struct EnvelopeRef<'a> {
    version: u32,
    metrics: &'a BodyMetrics,
}

#[derive(Deserialize)]
struct Envelope {
    version: u32,
    metrics: serde_json::Value,
}

pub fn encode(metrics: &BodyMetrics) -> serde_json::Result<String> {
    serde_json::to_string(&EnvelopeRef {
        version: SCHEMA_VERSION,
        metrics,
    })
}

/// Parse `{ "version": 1, "metrics": { ... } }`. Any other version, or a
/// tuple that fails [`BodyMetrics::validate`], is rejected as a whole.
pub fn decode(raw: &str) -> Result<BodyMetrics, DecodeError> {
    let envelope: Envelope = serde_json::from_str(raw)?;
    if envelope.version != SCHEMA_VERSION {
        return Err(DecodeError::UnsupportedVersion {
            found: envelope.version,
        });
    }
    let metrics: BodyMetrics = serde_json::from_value(envelope.metrics)?;
    metrics.validate().map_err(DecodeError::Invalid)?;
    Ok(metrics)
}
