/// Whole-degree sample derived from a tenths-of-a-degree reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TempSample {
    degrees: i64,
}

impl TempSample {
    /// Truncating division by 10. Truncation is toward zero, so sub-zero
    /// readings keep their sign and `-5` tenths becomes `0`, not `-0`.
    pub fn from_tenths(value: f64) -> Self {
        Self {
            degrees: (value / 10.0).trunc() as i64,
        }
    }

    pub fn degrees(self) -> i64 {
        self.degrees
    }

    /// Decimal ASCII representation, sign included for negative samples,
    /// no leading zeros, no terminator.
    pub fn render(self) -> String {
        self.degrees.to_string()
    }
}
