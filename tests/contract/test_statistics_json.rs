//! Contract tests for the statistics and command payloads

use recview::models::{CommandReply, StatisticsSnapshot};

const IDLE_BODY: &str = r#"{
    "totalSpace": 62277025792,
    "freeSpace": 21474836480,
    "usableSpace": 21474836480,
    "totalSpaceFormatted": "58.00 GB",
    "freeSpaceFormatted": "20.00 GB",
    "usableSpaceFormatted": "20.00 GB",
    "serverStartTimeMillis": 1735732800000,
    "recordingStartTimeMillis": -1,
    "usedSpacePercentage": "65.52%",
    "isRecording": false
}"#;

#[test]
fn test_idle_snapshot_decodes_sentinel_as_none() {
    let snapshot: StatisticsSnapshot = serde_json::from_str(IDLE_BODY).unwrap();
    snapshot.validate().unwrap();

    assert_eq!(snapshot.server_start_time_millis, Some(1_735_732_800_000));
    assert_eq!(snapshot.recording_start_time_millis, None);
    assert_eq!(snapshot.used_space_percentage, "65.52%");
    assert_eq!(snapshot.total_space, Some(62_277_025_792));
    assert_eq!(snapshot.is_recording, Some(false));
}

#[test]
fn test_absent_and_null_start_times_are_unknown() {
    let body = r#"{
        "totalSpaceFormatted": "1 GB",
        "freeSpaceFormatted": "1 GB",
        "usableSpaceFormatted": "1 GB",
        "usedSpacePercentage": "0.00%",
        "recordingStartTimeMillis": null
    }"#;

    let snapshot: StatisticsSnapshot = serde_json::from_str(body).unwrap();

    assert_eq!(snapshot.server_start_time_millis, None);
    assert_eq!(snapshot.recording_start_time_millis, None);
}

#[test]
fn test_fractional_start_time_is_truncated() {
    let body = r#"{
        "totalSpaceFormatted": "1 GB",
        "freeSpaceFormatted": "1 GB",
        "usableSpaceFormatted": "1 GB",
        "usedSpacePercentage": "0.00%",
        "serverStartTimeMillis": 1735732800000.75
    }"#;

    let snapshot: StatisticsSnapshot = serde_json::from_str(body).unwrap();

    assert_eq!(snapshot.server_start_time_millis, Some(1_735_732_800_000));
}

#[test]
fn test_missing_formatted_field_is_rejected() {
    let body = r#"{"totalSpaceFormatted": "1 GB", "freeSpaceFormatted": "1 GB"}"#;
    assert!(serde_json::from_str::<StatisticsSnapshot>(body).is_err());
}

#[test]
fn test_blank_formatted_field_fails_validation() {
    let body = r#"{
        "totalSpaceFormatted": " ",
        "freeSpaceFormatted": "1 GB",
        "usableSpaceFormatted": "1 GB",
        "usedSpacePercentage": "0.00%"
    }"#;
    let snapshot: StatisticsSnapshot = serde_json::from_str(body).unwrap();
    assert!(snapshot.validate().is_err());
}

#[test]
fn test_command_replies_decode() {
    let started: CommandReply =
        serde_json::from_str(r#"{"status": "success", "message": "Recording started"}"#).unwrap();
    assert_eq!(started.message, "Recording started");

    let warning: CommandReply =
        serde_json::from_str(r#"{"status": "warning", "message": "Recording not started"}"#).unwrap();
    assert_eq!(warning.status.as_deref(), Some("warning"));

    let bare: CommandReply = serde_json::from_str(r#"{"message": "ok"}"#).unwrap();
    assert!(bare.status.is_none());
}
