//! Local stand-in for a form submission endpoint.
//!
//! Nothing leaves the device: the payload is encoded, logged, and after a
//! simulated delay an acknowledgement with a generated reference is returned.

use serde::Serialize;
use strum::IntoStaticStr;
use thiserror::Error;
use uuid::Uuid;

use crate::core::{platform::Platform, timing};

#[derive(Debug, Clone, Copy, PartialEq, Eq, IntoStaticStr)]
#[strum(serialize_all = "kebab-case")]
pub enum InquiryKind {
    Contact,
    Reservation,
}

impl InquiryKind {
    pub fn as_str(self) -> &'static str {
        self.into()
    }

    fn reference_prefix(self) -> &'static str {
        match self {
            Self::Contact => "TWB-C",
            Self::Reservation => "TWB-R",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Acknowledgement {
    pub kind: InquiryKind,
    /// Short human-readable reference, e.g. `TWB-R-3F9A1C02`.
    pub reference: String,
}

#[derive(Debug, Error)]
pub enum SubmitError {
    #[error("could not encode {kind} payload: {source}")]
    Encode {
        kind: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

pub async fn submit<P: Serialize>(
    kind: InquiryKind,
    payload: &P,
    latency_ms: u64,
) -> Result<Acknowledgement, SubmitError> {
    let body = serde_json::to_string(payload).map_err(|source| SubmitError::Encode {
        kind: kind.as_str(),
        source,
    })?;

    tracing::info!(
        kind = kind.as_str(),
        platform = Platform::current().as_str(),
        bytes = body.len(),
        "inquiry accepted by local stub"
    );
    tracing::debug!(payload = %body);

    timing::sleep_ms(latency_ms).await;

    let ack = Acknowledgement {
        kind,
        reference: new_reference(kind),
    };
    tracing::info!(reference = %ack.reference, "inquiry acknowledged");
    Ok(ack)
}

fn new_reference(kind: InquiryKind) -> String {
    let id = Uuid::new_v4().simple().to_string();
    format!("{}-{}", kind.reference_prefix(), id[..8].to_uppercase())
}
