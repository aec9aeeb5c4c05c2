use crate::collectors::{select_reading, SensorSource};
use crate::config::Config;
use crate::error::{Error, Result};
use crate::sample::TempSample;
use crate::serial::Transmit;
use std::time::Duration;
use tokio::sync::watch;
use tokio::time::MissedTickBehavior;
use tracing::{debug, info, warn};

/// Acquire-transform-transmit loop. Runs until the shutdown channel
/// flips; every per-cycle failure is logged and the next tick proceeds
/// on schedule.
pub async fn run<S, T>(
    cfg: &Config,
    source: &mut S,
    sink: &mut T,
    mut shutdown: watch::Receiver<bool>,
) where
    S: SensorSource,
    T: Transmit,
{
    let mut ticker = tokio::time::interval(Duration::from_secs(cfg.poll_interval_secs));
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

    loop {
        tokio::select! {
            _ = shutdown.changed() => {
                info!("shutdown signal received, stopping poll loop");
                break;
            }
            _ = ticker.tick() => {
                match poll_once(cfg, source, sink).await {
                    Ok(degrees) => debug!(degrees, "poll cycle complete"),
                    Err(Error::RetryPending { path }) => {
                        debug!(port = %path, "serial reconnect pending, cycle skipped");
                    }
                    Err(err) => warn!(error = %err, "poll cycle failed"),
                }
            }
        }
    }
}

async fn poll_once<S, T>(cfg: &Config, source: &mut S, sink: &mut T) -> Result<i64>
where
    S: SensorSource,
    T: Transmit,
{
    let readings = source.readings();
    let reading = select_reading(&readings, &cfg.sensor_category, &cfg.sensor_label).ok_or_else(
        || Error::SensorNotFound {
            category: cfg.sensor_category.clone(),
            label: cfg.sensor_label.clone(),
        },
    )?;

    let sample = TempSample::from_tenths(reading.value);
    sink.send(sample.render().as_bytes()).await?;
    Ok(sample.degrees())
}
