use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Failures the poll loop can hit in a single cycle. All of them are
/// recoverable: the loop logs and carries on with the next tick.
#[derive(Debug, Error)]
pub enum Error {
    #[error("could not open serial port {path}: {source}")]
    SerialOpen {
        path: String,
        source: tokio_serial::Error,
    },

    #[error("serial write failed: {0}")]
    SerialIo(#[from] std::io::Error),

    #[error("reconnect to {path} suppressed, retry window not yet open")]
    RetryPending { path: String },

    #[error("no {category} reading labelled '{label}'")]
    SensorNotFound { category: String, label: String },
}
