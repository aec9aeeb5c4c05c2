pub mod system;

/// One measurement exposed by the host's sensor source. `value` is in
/// tenths of a degree; readings are produced fresh on every query and
/// never persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct SensorReading {
    pub category: String,
    pub label: String,
    pub value: f64,
}

/// Queryable list of sensor readings. The poll loop filters the result
/// client-side; fakes implement this in tests.
pub trait SensorSource {
    fn readings(&mut self) -> Vec<SensorReading>;
}

/// First reading matching both filters, if any. Exact match on category
/// and label.
pub fn select_reading<'a>(
    readings: &'a [SensorReading],
    category: &str,
    label: &str,
) -> Option<&'a SensorReading> {
    readings
        .iter()
        .find(|r| r.category == category && r.label == label)
}
