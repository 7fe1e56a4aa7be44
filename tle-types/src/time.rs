use chrono::prelude::*;

pub type UtcTimestamp = DateTime<Utc>;

/// Serde adapter rendering a [`UtcTimestamp`] as an ISO 8601 string,
/// e.g. `2024-03-30T20:29:35.036736Z`
pub mod iso8601 {
    use super::UtcTimestamp;
    use chrono::{DateTime, SecondsFormat, Utc};
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn format(t: &UtcTimestamp) -> String {
        t.to_rfc3339_opts(SecondsFormat::Micros, true)
    }

    pub fn serialize<S: Serializer>(t: &UtcTimestamp, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&format(t))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<UtcTimestamp, D::Error> {
        let s = String::deserialize(deserializer)?;
        DateTime::parse_from_rfc3339(&s)
            .map(|t| t.with_timezone(&Utc))
            .map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn iso8601_format() {
        let t = Utc
            .with_ymd_and_hms(2024, 3, 30, 20, 29, 35)
            .unwrap()
            .checked_add_signed(chrono::Duration::microseconds(36_736))
            .unwrap();
        assert_eq!(iso8601::format(&t), "2024-03-30T20:29:35.036736Z");
    }
}
