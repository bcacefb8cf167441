use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use shared::protocol::RsvpPayload;
use tracing::debug;

use crate::{endpoint::Endpoint, error::TransportError};

/// How much of the relay's answer the transport is allowed to look at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeliveryMode {
    /// The request leaving without error counts as delivered; the response is never read.
    #[default]
    Blind,
    /// Non-2xx statuses are reported as rejections.
    Confirmed,
}

impl DeliveryMode {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "blind" => Some(DeliveryMode::Blind),
            "confirmed" => Some(DeliveryMode::Confirmed),
            _ => None,
        }
    }
}

#[async_trait]
pub trait RsvpTransport: Send + Sync {
    async fn submit(&self, endpoint: &Endpoint, payload: &RsvpPayload)
        -> Result<(), TransportError>;
}

pub struct HttpRsvpTransport {
    http: Client,
    mode: DeliveryMode,
}

impl HttpRsvpTransport {
    pub fn new(mode: DeliveryMode, timeout: Option<Duration>) -> Result<Self, TransportError> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder
            .build()
            .map_err(|err| TransportError::Request(err.to_string()))?;
        Ok(Self { http, mode })
    }

    pub fn mode(&self) -> DeliveryMode {
        self.mode
    }
}

#[async_trait]
impl RsvpTransport for HttpRsvpTransport {
    async fn submit(
        &self,
        endpoint: &Endpoint,
        payload: &RsvpPayload,
    ) -> Result<(), TransportError> {
        let res = self
            .http
            .post(endpoint.url().clone())
            .json(payload)
            .send()
            .await?;

        match self.mode {
            DeliveryMode::Blind => {
                debug!(endpoint = %endpoint, "rsvp dispatched without reading response");
                Ok(())
            }
            DeliveryMode::Confirmed => {
                let status = res.status();
                debug!(endpoint = %endpoint, status = status.as_u16(), "rsvp relay answered");
                if status.is_success() {
                    Ok(())
                } else {
                    Err(TransportError::Rejected {
                        status: status.as_u16(),
                    })
                }
            }
        }
    }
}

#[cfg(test)]
#[path = "tests/transport_tests.rs"]
mod tests;
