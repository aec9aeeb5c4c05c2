use crate::collectors::{SensorReading, SensorSource};
use sysinfo::{ComponentExt, System, SystemExt};
use tracing::debug;

/// Category tag carried by every reading this source produces.
pub const TEMPERATURE_CATEGORY: &str = "Temperature";

/// Production sensor source backed by the host's thermal components.
pub struct SystemSource {
    system: System,
}

impl SystemSource {
    pub fn new() -> Self {
        let mut system = System::new();
        system.refresh_components_list();
        Self { system }
    }
}

impl Default for SystemSource {
    fn default() -> Self {
        Self::new()
    }
}

impl SensorSource for SystemSource {
    fn readings(&mut self) -> Vec<SensorReading> {
        self.system.refresh_components_list();
        self.system.refresh_components();

        // sysinfo reports degrees Celsius; readings carry tenths.
        let readings: Vec<SensorReading> = self
            .system
            .components()
            .iter()
            .map(|c| SensorReading {
                category: TEMPERATURE_CATEGORY.to_string(),
                label: c.label().to_string(),
                value: f64::from(c.temperature()) * 10.0,
            })
            .collect();

        debug!(count = readings.len(), "collected temperature readings");
        readings
    }
}
