use ferrodoc_tasks::{Priority, TaskError, Weekday, load_records, load_records_file};

#[test]
fn load_and_normalize_records() {
    let json = r#"[
        { "name": "Nightly", "priority": "max", "retries": 3,
          "schedule": [ { "weekday": "sunday", "time": "4:00" } ] },
        { "name": "Defaults" }
    ]"#;

    let tasks = load_records(json).expect("valid records");
    assert_eq!(tasks.len(), 2);

    let nightly = &tasks[0];
    assert_eq!(nightly.priority(), Priority::Max);
    assert_eq!(nightly.retries(), 3);
    assert_eq!(nightly.schedule().moments()[0].weekday, Weekday::Sunday);

    let defaults = tasks[1].record();
    assert_eq!(defaults.priority, Priority::Default);
    assert!(defaults.schedule.is_empty());

    let out = serde_json::to_string(&nightly.record()).unwrap();
    assert_eq!(
        out,
        r#"{"name":"Nightly","priority":"max","retries":3,"schedule":[{"weekday":"sunday","time":"04:00"}]}"#
    );
}

#[test]
fn empty_name_record_rejected() {
    let err = load_records(r#"[ { "name": "" } ]"#).unwrap_err();
    assert!(matches!(err, TaskError::EmptyName));
}

#[test]
fn bad_time_is_json_error() {
    let json = r#"[ { "name": "x", "schedule": [ { "weekday": "monday", "time": "99:99" } ] } ]"#;
    let err = load_records(json).unwrap_err();
    assert!(matches!(err, TaskError::Json(_)));
    assert!(err.to_string().contains("Invalid time of day"));
}

#[test]
fn signed_time_fields_rejected() {
    for time in ["+1:00", "12:+5", "+9:+9"] {
        let json = format!(
            r#"[ {{ "name": "x", "schedule": [ {{ "weekday": "monday", "time": "{}" }} ] }} ]"#,
            time
        );
        let err = load_records(&json).unwrap_err();
        assert!(
            err.to_string().contains("Invalid time of day"),
            "'{}' should be rejected, got {}",
            time,
            err
        );
    }
}

#[test]
fn missing_records_file_is_io_error() {
    let err = load_records_file(std::path::Path::new("does/not/exist.json")).unwrap_err();
    assert!(matches!(err, TaskError::Io(_)));
    assert!(err.to_string().starts_with("I/O error"));
}
