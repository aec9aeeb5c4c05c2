pub mod backoff;

use crate::error::{Error, Result};
use backoff::Backoff;
use std::time::Instant;
use tokio::io::AsyncWriteExt;
use tokio_serial::{DataBits, Parity, SerialPortBuilderExt, SerialStream, StopBits};
use tracing::{debug, info, warn};

/// Byte-oriented output to the receiving peer. Fakes implement this in
/// tests to capture the exact bytes written.
#[allow(async_fn_in_trait)]
pub trait Transmit {
    async fn send(&mut self, payload: &[u8]) -> Result<()>;
}

/// Serial sink held open across poll cycles. A failed write drops the
/// connection and the next send re-opens it, paced by [`Backoff`].
pub struct SerialSink {
    path: String,
    baud: u32,
    stream: Option<SerialStream>,
    backoff: Backoff,
}

impl SerialSink {
    pub fn new(path: &str, baud: u32, reconnect_initial_ms: u64, reconnect_max_ms: u64) -> Self {
        Self {
            path: path.to_string(),
            baud,
            stream: None,
            backoff: Backoff::new(reconnect_initial_ms, reconnect_max_ms),
        }
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    fn open(&self) -> Result<SerialStream> {
        tokio_serial::new(&self.path, self.baud)
            .data_bits(DataBits::Eight)
            .parity(Parity::None)
            .stop_bits(StopBits::One)
            .open_native_async()
            .map_err(|source| Error::SerialOpen {
                path: self.path.clone(),
                source,
            })
    }

    async fn write_payload(stream: &mut SerialStream, payload: &[u8]) -> std::io::Result<()> {
        stream.write_all(payload).await?;
        stream.flush().await
    }

    pub async fn send(&mut self, payload: &[u8]) -> Result<()> {
        if self.stream.is_none() {
            if !self.backoff.ready(Instant::now()) {
                return Err(Error::RetryPending {
                    path: self.path.clone(),
                });
            }
            match self.open() {
                Ok(stream) => {
                    self.backoff.mark_success(Instant::now());
                    info!(port = %self.path, baud = self.baud, "serial port opened");
                    self.stream = Some(stream);
                }
                Err(err) => {
                    self.backoff.mark_failure(Instant::now());
                    return Err(err);
                }
            }
        }

        if let Some(stream) = self.stream.as_mut() {
            if let Err(err) = Self::write_payload(stream, payload).await {
                warn!(port = %self.path, error = %err, "serial write failed, closing port");
                self.stream = None;
                self.backoff.mark_failure(Instant::now());
                return Err(Error::SerialIo(err));
            }
            debug!(port = %self.path, bytes = payload.len(), "payload transmitted");
        }

        Ok(())
    }
}

impl Transmit for SerialSink {
    async fn send(&mut self, payload: &[u8]) -> Result<()> {
        SerialSink::send(self, payload).await
    }
}
