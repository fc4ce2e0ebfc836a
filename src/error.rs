use snafu::Snafu;
use std::num::ParseIntError;

pub type RosterResult<T> = Result<T, RosterError>;

#[derive(Debug, Snafu)]
#[snafu(visibility(pub))]
pub enum RosterError {
    #[snafu(display("Unable to retrieve env var `{}`", name))]
    BadEnvVar {
        source: dotenvy::Error,
        name: &'static str,
    },
    #[snafu(display("Unable to parse env var `{}` as a number", name))]
    ParseNumber {
        source: ParseIntError,
        name: &'static str,
    },
    #[snafu(display("Backend URL {:?} is not a usable base URL", url))]
    InvalidBackendUrl { url: String },
    #[snafu(display("Error building HTTP client"))]
    BuildHttpClient { source: reqwest::Error },
    #[snafu(display("Error contacting the backend to {}", action))]
    BackendRequest {
        source: reqwest::Error,
        action: &'static str,
    },
    #[snafu(display("Backend responded with {} when trying to {}", status, action))]
    BackendStatus {
        status: reqwest::StatusCode,
        action: &'static str,
    },
    #[snafu(display("Unable to decode backend response when trying to {}", action))]
    DecodeBackend {
        source: reqwest::Error,
        action: &'static str,
    },
    #[snafu(display("Unable to listen on {}", address))]
    BindListener {
        source: std::io::Error,
        address: String,
    },
    #[snafu(display("Error serving HTTP"))]
    Serve { source: std::io::Error },
}
