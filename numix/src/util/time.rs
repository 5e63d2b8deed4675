use std::fmt::{Debug, Formatter};
#[cfg(not(target_arch = "wasm32"))]
use std::time::{SystemTime, UNIX_EPOCH};

/// A wall-clock timestamp with millisecond precision, used to stamp log lines.
///
/// Native platforms read `SystemTime`, the web reads JavaScript's `Date`.
/// The `Debug` representation is the ISO 8601 form in UTC.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct DateTime {
    unix_ms: u64,
}

impl DateTime {
    pub fn now() -> Self {
        #[cfg(not(target_arch = "wasm32"))]
        {
            let unix_ms = SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .unwrap_or_default()
                .as_millis() as u64;
            Self { unix_ms }
        }
        #[cfg(target_arch = "wasm32")]
        {
            Self {
                unix_ms: js_sys::Date::now() as u64,
            }
        }
    }

    pub fn from_unix_timestamp_ms(ms: u64) -> Self {
        Self { unix_ms: ms }
    }

    pub fn as_unix_timestamp_ms(&self) -> u64 {
        self.unix_ms
    }

    /// Formats as `yyyy-mm-ddThh:mm:ss.sssZ`.
    pub fn format_iso8601(&self) -> String {
        let seconds = self.unix_ms / 1000;
        let (year, month, day) = civil_from_days((seconds / 86400) as i64);
        let seconds_today = seconds % 86400;

        format!(
            "{:04}-{:02}-{:02}T{:02}:{:02}:{:02}.{:03}Z",
            year,
            month,
            day,
            seconds_today / 3600,
            (seconds_today % 3600) / 60,
            seconds_today % 60,
            self.unix_ms % 1000
        )
    }
}

impl Debug for DateTime {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.format_iso8601())
    }
}

/// Converts days since 1970-01-01 into a proleptic Gregorian (year, month, day).
fn civil_from_days(days: i64) -> (i64, u32, u32) {
    let z = days + 719468;
    let era = z.div_euclid(146097);
    let day_of_era = z.rem_euclid(146097);
    let year_of_era = (day_of_era - day_of_era / 1460 + day_of_era / 36524 - day_of_era / 146096) / 365;
    let day_of_year = day_of_era - (365 * year_of_era + year_of_era / 4 - year_of_era / 100);
    let shifted_month = (5 * day_of_year + 2) / 153;
    let day = (day_of_year - (153 * shifted_month + 2) / 5 + 1) as u32;
    let month = (if shifted_month < 10 { shifted_month + 3 } else { shifted_month - 9 }) as u32;
    let year = year_of_era + era * 400 + if month <= 2 { 1 } else { 0 };

    (year, month, day)
}

// ---------------------------------------------------------- //
// ------------------------- Tests -------------------------- //
// ---------------------------------------------------------- //

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn iso8601_formatting_works() {
        let time = DateTime::from_unix_timestamp_ms(1703607295628);
        assert_eq!(time.format_iso8601(), "2023-12-26T16:14:55.628Z");
        assert_eq!(format!("{:?}", time), "2023-12-26T16:14:55.628Z");
    }

    #[test]
    fn epoch_and_leap_days_format_correctly() {
        assert_eq!(DateTime::from_unix_timestamp_ms(0).format_iso8601(), "1970-01-01T00:00:00.000Z");
        assert_eq!(
            DateTime::from_unix_timestamp_ms(951782400000).format_iso8601(),
            "2000-02-29T00:00:00.000Z"
        );
    }

    #[test]
    fn now_is_after_fixed_point() {
        assert!(DateTime::now() > DateTime::from_unix_timestamp_ms(1703607295628));
    }
}
