use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FetchError {
    #[error("{0}")]
    ClientInit(String),
    #[error("timed out")]
    Timeout,
    #[error("HTTP Error {status}")]
    Status { status: u16 },
    #[error("{0}")]
    Request(String),
}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout
        } else {
            Self::Request(err.to_string())
        }
    }
}
