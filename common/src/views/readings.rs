//! Classification of environmental readings shown on the report view.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReadingLevel {
    Ok,
    Warning,
    Critical,
}

impl ReadingLevel {
    pub fn css_class(self) -> &'static str {
        match self {
            ReadingLevel::Ok => "status-ok",
            ReadingLevel::Warning => "status-warning",
            ReadingLevel::Critical => "status-critical",
        }
    }
}

/// Temperature in °C: below 18 is a warning, above 27 critical.
pub fn temperature_level(reading: &str) -> Option<ReadingLevel> {
    level(reading, 18.0, 27.0)
}

/// Relative humidity in %: below 30 is a warning, above 70 critical.
pub fn humidity_level(reading: &str) -> Option<ReadingLevel> {
    level(reading, 30.0, 70.0)
}

fn level(reading: &str, low: f64, high: f64) -> Option<ReadingLevel> {
    let value: f64 = reading.trim().parse().ok()?;
    if !value.is_finite() {
        return None;
    }
    Some(if value < low {
        ReadingLevel::Warning
    } else if value > high {
        ReadingLevel::Critical
    } else {
        ReadingLevel::Ok
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn temperature_bands() {
        assert_eq!(temperature_level("22.5"), Some(ReadingLevel::Ok));
        assert_eq!(temperature_level("17.9"), Some(ReadingLevel::Warning));
        assert_eq!(temperature_level("27"), Some(ReadingLevel::Ok));
        assert_eq!(temperature_level("27.1"), Some(ReadingLevel::Critical));
        assert_eq!(temperature_level("warm"), None);
    }

    #[test]
    fn humidity_bands() {
        assert_eq!(humidity_level(" 45 "), Some(ReadingLevel::Ok));
        assert_eq!(humidity_level("29"), Some(ReadingLevel::Warning));
        assert_eq!(humidity_level("71"), Some(ReadingLevel::Critical));
        assert_eq!(humidity_level("NaN"), None);
    }
}
