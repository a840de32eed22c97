//! HTTP API Client
//!
//! Functions for communicating with the AlertIndia backend, plus the wire
//! types it returns. All endpoints are read-only GETs.

use gloo_net::http::Request;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};

/// Default backend address (the local FastAPI service).
pub const DEFAULT_API_BASE: &str = "http://127.0.0.1:8000";

/// Get the API base URL from local storage or use default
pub fn get_api_base() -> String {
    let url = if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            if let Ok(Some(url)) = storage.get_item("alertindia_api_url") {
                url
            } else {
                DEFAULT_API_BASE.to_string()
            }
        } else {
            DEFAULT_API_BASE.to_string()
        }
    } else {
        DEFAULT_API_BASE.to_string()
    };
    // Normalize: remove trailing slash
    url.trim_end_matches('/').to_string()
}

// ============ Wire Types ============

/// Severity stamped on a preview record by the backend, derived from the
/// 5-17 demographic count.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AlertStatus {
    Critical,
    Warning,
    Stable,
}

impl AlertStatus {
    fn from_key(key: &str) -> Option<Self> {
        match key {
            "critical" => Some(AlertStatus::Critical),
            "warning" => Some(AlertStatus::Warning),
            "stable" => Some(AlertStatus::Stable),
            _ => None,
        }
    }

    /// Badge label shown on cards.
    pub fn label(self) -> &'static str {
        match self {
            AlertStatus::Critical => "Critical",
            AlertStatus::Warning => "Warning",
            AlertStatus::Stable => "Stable",
        }
    }

    /// Badge styling classes.
    pub fn badge_class(self) -> &'static str {
        match self {
            AlertStatus::Critical => "bg-red-100 text-red-700",
            AlertStatus::Warning => "bg-amber-100 text-amber-700",
            AlertStatus::Stable => "bg-green-100 text-green-700",
        }
    }
}

/// One reporting unit's snapshot from `/preview`.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct AlertRecord {
    #[serde(default)]
    pub state: String,
    #[serde(default)]
    pub district: String,
    /// The backing CSV is untyped, so pincodes arrive as either JSON
    /// strings or numbers.
    #[serde(default, deserialize_with = "de_pincode")]
    pub pincode: String,
    #[serde(default)]
    pub demo_age_5_17: u64,
    #[serde(rename = "demo_age_17_", default)]
    pub demo_age_17_plus: u64,
    #[serde(default, deserialize_with = "de_status")]
    pub status: Option<AlertStatus>,
}

/// Record counts by severity from `/stats`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
pub struct StatsSummary {
    pub total: u64,
    pub critical: u64,
    pub warning: u64,
    pub stable: u64,
}

/// Per-state change between the last two reporting rows, from `/alerts`.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct StateAlert {
    pub state: String,
    pub change: f64,
    #[serde(default, deserialize_with = "de_status")]
    pub status: Option<AlertStatus>,
}

/// Accept a pincode as either a JSON string or a bare number.
fn de_pincode<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(match value {
        serde_json::Value::String(s) => s,
        serde_json::Value::Number(n) => n.to_string(),
        _ => String::new(),
    })
}

/// Accept any status string; unknown severities degrade to `None`
/// instead of failing the record.
fn de_status<'de, D>(deserializer: D) -> Result<Option<AlertStatus>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.as_deref().and_then(AlertStatus::from_key))
}

// ============ API Functions ============

async fn get_json<T: DeserializeOwned>(path: &str) -> Result<T, String> {
    let api_base = get_api_base();

    let response = Request::get(&format!("{}{}", api_base, path))
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(format!("Server returned {}", response.status()));
    }

    response
        .json()
        .await
        .map_err(|e| format!("Parse error: {}", e))
}

/// Fetch the alert feed preview
pub async fn fetch_preview() -> Result<Vec<AlertRecord>, String> {
    get_json("/preview").await
}

/// Fetch record counts by severity
pub async fn fetch_stats() -> Result<StatsSummary, String> {
    get_json("/stats").await
}

/// Fetch per-state movement alerts
pub async fn fetch_state_alerts() -> Result<Vec<StateAlert>, String> {
    get_json("/alerts").await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preview_record_deserializes() {
        let json = r#"{
            "state": "Maharashtra",
            "district": "Pune",
            "pincode": "411001",
            "demo_age_5_17": 42,
            "demo_age_17_": 187,
            "status": "stable"
        }"#;

        let record: AlertRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.state, "Maharashtra");
        assert_eq!(record.district, "Pune");
        assert_eq!(record.pincode, "411001");
        assert_eq!(record.demo_age_5_17, 42);
        assert_eq!(record.demo_age_17_plus, 187);
        assert_eq!(record.status, Some(AlertStatus::Stable));
    }

    #[test]
    fn test_numeric_pincode_is_accepted() {
        let json = r#"{
            "state": "Delhi",
            "district": "New Delhi",
            "pincode": 110001,
            "demo_age_5_17": 12,
            "demo_age_17_": 95
        }"#;

        let record: AlertRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.pincode, "110001");
        assert_eq!(record.status, None);
    }

    #[test]
    fn test_unknown_status_does_not_fail_record() {
        let json = r#"{
            "state": "Bihar",
            "district": "Patna",
            "pincode": "800001",
            "demo_age_5_17": 8,
            "demo_age_17_": 60,
            "status": "escalated"
        }"#;

        let record: AlertRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.status, None);
    }

    #[test]
    fn test_preview_array_length_is_preserved() {
        let json = r#"[
            {"state": "UP", "district": "Lucknow", "pincode": 226001,
             "demo_age_5_17": 15, "demo_age_17_": 120, "status": "critical"},
            {"state": "Karnataka", "district": "Bangalore", "pincode": "560001",
             "demo_age_5_17": 64, "demo_age_17_": 230, "status": "stable"},
            {"state": "Bengal", "district": "Kolkata", "pincode": 700001,
             "demo_age_5_17": 33, "demo_age_17_": 140, "status": "warning"}
        ]"#;

        let records: Vec<AlertRecord> = serde_json::from_str(json).unwrap();
        assert_eq!(records.len(), 3);
        assert_eq!(records[0].status, Some(AlertStatus::Critical));
        assert_eq!(records[2].status, Some(AlertStatus::Warning));
    }

    #[test]
    fn test_stats_summary_deserializes() {
        let json = r#"{"total": 10, "critical": 2, "warning": 3, "stable": 5}"#;
        let stats: StatsSummary = serde_json::from_str(json).unwrap();
        assert_eq!(stats.total, 10);
        assert_eq!(stats.critical, 2);
        assert_eq!(stats.warning, 3);
        assert_eq!(stats.stable, 5);
    }

    #[test]
    fn test_state_alert_deserializes() {
        let json = r#"[{"state": "Uttar Pradesh", "change": -12.5, "status": "critical"}]"#;
        let alerts: Vec<StateAlert> = serde_json::from_str(json).unwrap();
        assert_eq!(alerts.len(), 1);
        assert_eq!(alerts[0].change, -12.5);
        assert_eq!(alerts[0].status, Some(AlertStatus::Critical));
    }
}
