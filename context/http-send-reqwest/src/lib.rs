//! Reqwest-based transport for awsig.
//!
//! `ReqwestHttpSend` implements [`HttpSend`] with a [`reqwest::Client`]. It sends the
//! signed request exactly as given and reports every failure, including non-success
//! HTTP statuses, as [`ErrorKind::Transport`](awsig_core::ErrorKind::Transport).

use async_trait::async_trait;
use awsig_core::{Error, HttpSend, Result};
use bytes::Bytes;
use http_body_util::BodyExt;
use log::debug;
use reqwest::{Client, Request};

/// HttpSend implementation backed by reqwest.
#[derive(Debug, Default, Clone)]
pub struct ReqwestHttpSend {
    client: Client,
}

impl ReqwestHttpSend {
    /// Create a new ReqwestHttpSend with a reqwest::Client.
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl HttpSend for ReqwestHttpSend {
    async fn http_send(&self, req: http::Request<Bytes>) -> Result<http::Response<Bytes>> {
        let req = Request::try_from(req)
            .map_err(|e| Error::request_invalid("failed to build reqwest request").with_source(e))?;
        let resp: http::Response<_> = self
            .client
            .execute(req)
            .await
            .map_err(|e| Error::transport("failed to send request").with_source(e))?
            .into();

        let (parts, body) = resp.into_parts();
        let bs = BodyExt::collect(body)
            .await
            .map(|buf| buf.to_bytes())
            .map_err(|e| Error::transport("failed to read response body").with_source(e))?;

        if !parts.status.is_success() {
            debug!("service rejected request with status {}", parts.status);
            return Err(Error::transport(format!(
                "request failed with status {}: {}",
                parts.status,
                String::from_utf8_lossy(&bs)
            )));
        }

        Ok(http::Response::from_parts(parts, bs))
    }
}
