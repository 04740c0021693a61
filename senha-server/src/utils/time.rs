//! Time helpers — registration timestamps in the business timezone

use chrono_tz::Tz;

/// Fixed timestamp format persisted to the store and printed on tickets
pub const TIMESTAMP_FORMAT: &str = "%d/%m/%Y %H:%M:%S";

/// Current time in the given timezone, formatted for the registration row
///
/// An unknown timezone name falls back to the machine's local time.
pub fn now_str(tz_name: &str) -> String {
    match tz_name.parse::<Tz>() {
        Ok(tz) => chrono::Utc::now()
            .with_timezone(&tz)
            .format(TIMESTAMP_FORMAT)
            .to_string(),
        Err(_) => {
            tracing::warn!(timezone = tz_name, "unknown timezone, using local time");
            chrono::Local::now().format(TIMESTAMP_FORMAT).to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_now_str_shape() {
        let ts = now_str("America/Manaus");
        // dd/mm/yyyy hh:mm:ss
        assert_eq!(ts.len(), 19);
        assert_eq!(&ts[2..3], "/");
        assert_eq!(&ts[5..6], "/");
        assert_eq!(&ts[13..14], ":");
    }

    #[test]
    fn test_now_str_unknown_timezone_falls_back() {
        let ts = now_str("Marte/Olympus");
        assert_eq!(ts.len(), 19);
    }
}
