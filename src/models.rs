use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Stats object as returned by the service. Its schema belongs to WakaTime.
pub type StatsPayload = Value;

/// One-level `{ "data": ... }` wrapper around every response body.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct StatsEnvelope {
    pub data: StatsPayload,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LanguageStat {
    pub name: String,
    pub total_seconds: f64,
    pub percent: f64,
    pub text: String,
    pub hours: u64,
    pub minutes: u64,
}

/// Typed view over the fields of a [`StatsPayload`] that the CLI renders.
///
/// Missing fields fall back to their defaults so that partial payloads (for
/// example while WakaTime is still computing a range) still render.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WakaTimeStats {
    pub username: String,
    pub total_seconds: f64,
    pub human_readable_total: String,
    pub daily_average: f64,
    pub range: String,
    pub languages: Vec<LanguageStat>,
}

impl WakaTimeStats {
    pub fn from_payload(payload: &StatsPayload) -> Result<Self, serde_json::Error> {
        Self::deserialize(payload)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn summary_reads_known_fields() {
        let payload = json!({
            "username": "octocat",
            "total_seconds": 7200.5,
            "human_readable_total": "2 hrs",
            "range": "last_7_days",
            "is_up_to_date": true,
            "languages": [
                { "name": "Rust", "total_seconds": 5400.0, "percent": 75.0, "hours": 1, "minutes": 30 },
                { "name": "TOML", "total_seconds": 1800.5 }
            ]
        });

        let stats = WakaTimeStats::from_payload(&payload).unwrap();

        assert_eq!(stats.username, "octocat");
        assert_eq!(stats.range, "last_7_days");
        assert_eq!(stats.languages.len(), 2);
        assert_eq!(stats.languages[0].minutes, 30);
        assert_eq!(stats.languages[1].text, "");
    }

    #[test]
    fn summary_of_empty_object_is_default() {
        let stats = WakaTimeStats::from_payload(&json!({})).unwrap();

        assert_eq!(stats, WakaTimeStats::default());
    }

    #[test]
    fn envelope_keeps_inner_value_verbatim() {
        let envelope: StatsEnvelope =
            serde_json::from_str(r#"{"data": {"total_seconds": 123}}"#).unwrap();

        assert_eq!(envelope.data, json!({"total_seconds": 123}));
    }
}
