// src/types.rs
use serde::{Deserialize, Serialize};

/// Response from the dashboard's /stats endpoint
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Stats {
    pub nb_logs_active: u64,
    pub nb_logs_total: u64,
}

/// One entry of the /ctlogs listing
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BasicCtLogInfo {
    pub log_id: String,
    pub name: String,
    pub monitoring: bool,
    pub endpoint_url: String,

    /// Latest tree head known for this log, if one has been fetched
    #[serde(default)]
    pub latest_sth: Option<BasicSthInfo>,

    /// Error message from the most recent failed tree-head fetch
    #[serde(default)]
    pub last_sth_error: Option<String>,
}

/// Summary of one signed tree head, as embedded in the log listing
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BasicSthInfo {
    pub id: i64,
    pub tree_size: u64,
    pub tree_hash: String,

    /// When the backend received this tree head (ms since epoch)
    pub received_time: i64,

    /// Timestamp claimed by the log itself (ms since epoch)
    pub sth_timestamp: i64,
}

/// Full detail record from /log/:id
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CtLog {
    pub log_id: String,
    pub endpoint_url: String,
    pub name: String,

    /// DER public key of the log, base64-encoded
    pub public_key: String,

    pub monitoring: bool,

    /// Id of the latest stored tree head, resolvable via the sth endpoint
    #[serde(default)]
    pub latest_sth: Option<i64>,

    #[serde(default)]
    pub last_sth_error: Option<String>,
}

/// Full detail record from /log/:log_id/sth/:sth_id
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Sth {
    pub id: i64,
    pub log_id: String,
    pub tree_hash: String,
    pub tree_size: u64,
    pub sth_timestamp: i64,
    pub received_time: i64,

    /// Log signature over the tree head, base64-encoded
    pub signature: String,

    /// Whether this head was verified consistent with the latest known head
    pub checked_consistent_with_latest: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_stats() {
        let json = r#"{"nb_logs_active": 3, "nb_logs_total": 10}"#;

        let stats: Stats = serde_json::from_str(json).unwrap();

        assert_eq!(stats.nb_logs_active, 3);
        assert_eq!(stats.nb_logs_total, 10);
    }

    #[test]
    fn test_deserialize_log_listing_with_latest_sth() {
        let json = r#"[{
            "log_id": "df1c2ec11500945247a96168325409ad5b8d7b3d2f13e396444c14d904aa939a",
            "name": "Google 'Argon2026h1' log",
            "monitoring": true,
            "endpoint_url": "https://ct.googleapis.com/logs/us1/argon2026h1/",
            "latest_sth": {
                "id": 42,
                "tree_size": 1234567,
                "tree_hash": "9da1e13c0ef7a046eb52c9b9d5aff89f2b747b3eb7e2b62ab2a1ecdbb6101336",
                "received_time": 1700000000000,
                "sth_timestamp": 1699999998000
            },
            "last_sth_error": null
        }]"#;

        let logs: Vec<BasicCtLogInfo> = serde_json::from_str(json).unwrap();

        assert_eq!(logs.len(), 1);
        assert!(logs[0].monitoring);
        assert_eq!(logs[0].name, "Google 'Argon2026h1' log");
        let sth = logs[0].latest_sth.as_ref().unwrap();
        assert_eq!(sth.id, 42);
        assert_eq!(sth.tree_size, 1234567);
        assert_eq!(sth.received_time, 1700000000000);
        assert!(logs[0].last_sth_error.is_none());
    }

    #[test]
    fn test_deserialize_log_listing_with_error() {
        let json = r#"[{
            "log_id": "abcd",
            "name": "Broken log",
            "monitoring": true,
            "endpoint_url": "https://broken.example/",
            "latest_sth": null,
            "last_sth_error": "connection timed out"
        }]"#;

        let logs: Vec<BasicCtLogInfo> = serde_json::from_str(json).unwrap();

        assert!(logs[0].latest_sth.is_none());
        assert_eq!(
            logs[0].last_sth_error.as_deref(),
            Some("connection timed out")
        );
    }

    #[test]
    fn test_deserialize_log_listing_with_absent_optionals() {
        // Optional keys may be omitted entirely, not just null
        let json = r#"[{
            "log_id": "abcd",
            "name": "Fresh log",
            "monitoring": false,
            "endpoint_url": "https://fresh.example/"
        }]"#;

        let logs: Vec<BasicCtLogInfo> = serde_json::from_str(json).unwrap();

        assert!(logs[0].latest_sth.is_none());
        assert!(logs[0].last_sth_error.is_none());
    }

    #[test]
    fn test_deserialize_ct_log_detail() {
        let json = r#"{
            "log_id": "df1c2ec11500945247a96168325409ad5b8d7b3d2f13e396444c14d904aa939a",
            "endpoint_url": "https://ct.googleapis.com/logs/us1/argon2026h1/",
            "name": "Google 'Argon2026h1' log",
            "public_key": "MFkwEwYHKoZIzj0CAQYIKoZIzj0DAQcDQgAE",
            "monitoring": true,
            "latest_sth": 42,
            "last_sth_error": null
        }"#;

        let log: CtLog = serde_json::from_str(json).unwrap();

        assert_eq!(log.latest_sth, Some(42));
        assert_eq!(log.public_key, "MFkwEwYHKoZIzj0CAQYIKoZIzj0DAQcDQgAE");
        assert!(log.last_sth_error.is_none());
    }

    #[test]
    fn test_deserialize_sth_detail() {
        let json = r#"{
            "id": 42,
            "log_id": "abcd",
            "tree_hash": "9da1e13c0ef7a046eb52c9b9d5aff89f2b747b3eb7e2b62ab2a1ecdbb6101336",
            "tree_size": 1234567,
            "sth_timestamp": 1699999998000,
            "received_time": 1700000000000,
            "signature": "BAMARjBEAiA=",
            "checked_consistent_with_latest": true
        }"#;

        let sth: Sth = serde_json::from_str(json).unwrap();

        assert_eq!(sth.id, 42);
        assert_eq!(sth.tree_size, 1234567);
        assert!(sth.checked_consistent_with_latest);
    }

    #[test]
    fn test_deserialize_invalid_json() {
        let json = r#"{ not json }"#;
        let result: Result<Stats, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }
}
