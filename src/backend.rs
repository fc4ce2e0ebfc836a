//! Thin JSON client for the students REST backend.
//!
//! Every call is a single request with no retries. A transport failure, a non-2xx
//! status, and an undecodable body each map to their own [`RosterError`] variant, tagged
//! with the action that was being attempted.

use crate::{
    config::BackendConfig,
    error::{
        BackendRequestSnafu, BackendStatusSnafu, BuildHttpClientSnafu, DecodeBackendSnafu,
        RosterError, RosterResult,
    },
};
use reqwest::{Client, Method, Response, Url};
use serde::{Serialize, de::DeserializeOwned};
use snafu::ResultExt;
use std::sync::Arc;

#[derive(Clone, Debug)]
pub struct BackendClient {
    http: Client,
    config: Arc<BackendConfig>,
}

impl BackendClient {
    pub fn new(config: Arc<BackendConfig>) -> RosterResult<Self> {
        let mut builder = Client::builder().timeout(config.request_timeout());
        if config.is_loopback() {
            builder = builder.no_proxy();
        }
        let http = builder.build().context(BuildHttpClientSnafu)?;

        Ok(Self { http, config })
    }

    pub fn students_url(&self, id: Option<&str>) -> Url {
        self.config.students_url(id)
    }

    pub async fn get_json<T: DeserializeOwned>(
        &self,
        url: Url,
        action: &'static str,
    ) -> RosterResult<T> {
        debug!(%url, action, "GET");
        let response = self
            .http
            .get(url)
            .send()
            .await
            .context(BackendRequestSnafu { action })?;

        Self::check(response, action)?
            .json()
            .await
            .context(DecodeBackendSnafu { action })
    }

    pub async fn send_json<B: Serialize + ?Sized>(
        &self,
        method: Method,
        url: Url,
        body: &B,
        action: &'static str,
    ) -> RosterResult<()> {
        debug!(%url, %method, action, "Sending");
        let response = self
            .http
            .request(method, url)
            .json(body)
            .send()
            .await
            .context(BackendRequestSnafu { action })?;

        Self::check(response, action).map(drop)
    }

    pub async fn delete(&self, url: Url, action: &'static str) -> RosterResult<()> {
        debug!(%url, action, "DELETE");
        let response = self
            .http
            .delete(url)
            .send()
            .await
            .context(BackendRequestSnafu { action })?;

        Self::check(response, action).map(drop)
    }

    fn check(response: Response, action: &'static str) -> Result<Response, RosterError> {
        let status = response.status();
        snafu::ensure!(status.is_success(), BackendStatusSnafu { status, action });
        Ok(response)
    }
}
