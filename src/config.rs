use crate::error::{BadEnvVarSnafu, InvalidBackendUrlSnafu, ParseNumberSnafu, RosterResult};
use dotenvy::var;
use reqwest::Url;
use snafu::{OptionExt, ResultExt};
use std::{net::IpAddr, sync::Arc, time::Duration};

const DEFAULT_SERVER_IP: &str = "127.0.0.1:8080";
const DEFAULT_REDIRECT_DELAY_MS: u64 = 1_500;
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 10;

#[derive(Clone, Debug)]
pub struct RuntimeConfiguration {
    backend_config: Arc<BackendConfig>,
    server_ip: Arc<str>,
    redirect_delay: Duration,
}

impl RuntimeConfiguration {
    pub fn new() -> RosterResult<Self> {
        let server_ip = var("ROSTER_SERVER_IP").unwrap_or_else(|_| DEFAULT_SERVER_IP.to_string());
        let redirect_delay = optional_number("ROSTER_REDIRECT_DELAY_MS", DEFAULT_REDIRECT_DELAY_MS)?;

        Ok(Self {
            backend_config: Arc::new(BackendConfig::new()?),
            server_ip: server_ip.into(),
            redirect_delay: Duration::from_millis(redirect_delay),
        })
    }

    pub fn from_parts(backend_config: BackendConfig, server_ip: &str, redirect_delay: Duration) -> Self {
        Self {
            backend_config: Arc::new(backend_config),
            server_ip: server_ip.into(),
            redirect_delay,
        }
    }

    pub fn backend_config(&self) -> Arc<BackendConfig> {
        self.backend_config.clone()
    }

    pub fn server_ip(&self) -> &str {
        &self.server_ip
    }

    pub const fn redirect_delay(&self) -> Duration {
        self.redirect_delay
    }
}

#[derive(Debug)]
pub struct BackendConfig {
    base_url: Url,
    request_timeout: Duration,
}

impl BackendConfig {
    pub fn new() -> RosterResult<Self> {
        let name = "ROSTER_API_URL";
        let base_url = var(name).context(BadEnvVarSnafu { name })?;
        let timeout = optional_number("ROSTER_REQUEST_TIMEOUT_SECS", DEFAULT_REQUEST_TIMEOUT_SECS)?;

        Self::from_parts(&base_url, Duration::from_secs(timeout))
    }

    pub fn from_parts(base_url: &str, request_timeout: Duration) -> RosterResult<Self> {
        let parsed = Url::parse(base_url)
            .ok()
            .filter(|url| !url.cannot_be_a_base())
            .context(InvalidBackendUrlSnafu { url: base_url })?;

        Ok(Self {
            base_url: parsed,
            request_timeout,
        })
    }

    ///builds `<base>/students[/<id>]`, percent-encoding the id and keeping any path prefix on the base
    pub fn students_url(&self, id: Option<&str>) -> Url {
        let mut url = self.base_url.clone();
        //checked in `from_parts`
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().push("students");
            if let Some(id) = id {
                segments.push(id);
            }
        }
        url
    }

    ///a backend on this machine is never reached through a proxy
    pub fn is_loopback(&self) -> bool {
        self.base_url.host_str().is_some_and(|host| {
            host == "localhost"
                || host
                    .trim_start_matches('[')
                    .trim_end_matches(']')
                    .parse::<IpAddr>()
                    .is_ok_and(|ip| ip.is_loopback())
        })
    }

    pub const fn request_timeout(&self) -> Duration {
        self.request_timeout
    }
}

fn optional_number(name: &'static str, default: u64) -> RosterResult<u64> {
    match var(name) {
        Ok(raw) => raw.trim().parse().context(ParseNumberSnafu { name }),
        Err(_) => Ok(default),
    }
}
