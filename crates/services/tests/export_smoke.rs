use std::fs;

use services::{ExportError, ResultExporter};

#[test]
fn export_writes_all_records_as_json() {
    let path = std::env::temp_dir().join(format!("planforge-export-{}.json", std::process::id()));
    let exporter = ResultExporter::new(&path);

    let written = exporter.export().expect("export succeeds");
    assert_eq!(written, path);

    let raw = fs::read_to_string(&path).expect("read export");
    let value: serde_json::Value = serde_json::from_str(&raw).expect("valid json");
    let records = value.as_array().expect("top-level array");
    assert_eq!(records.len(), 15);
    assert_eq!(records[0]["id"], 1);
    assert_eq!(records[0]["backend_score"], 96.9);
    assert!(
        records[0]["analysis"]
            .as_str()
            .expect("analysis string")
            .contains("backend performance")
    );

    fs::remove_file(&path).ok();
}

#[test]
fn export_into_missing_directory_reports_io_error() {
    let path = std::env::temp_dir()
        .join(format!("planforge-missing-{}", std::process::id()))
        .join("results.json");
    let err = ResultExporter::new(&path).export().unwrap_err();
    assert!(matches!(err, ExportError::Io(_)));
}
