use rigcal::model::{
    check_version, coerce_version, construct_default, decode, json_schema, validate_version,
    VersionError, VersionStatus, Versioned,
};
use rigcal::records::load_cells::LoadCellsOperationControl;
use rigcal::records::manipulator::{ManipulatorCalibrationLogic, LOGIC_VERSION};
use rigcal::records::olfactometer::{OlfactometerCalibrationLogic, LOGIC_SCHEMA_VERSION};
use rigcal::records::water_valve::WaterValveCalibrationLogic;
use serde_json::json;

#[test]
fn version_is_carried_through_decode() {
    let logic = decode::<WaterValveCalibrationLogic>(
        r#"{"schema_version": "0.1.0", "valve_open_time": []}"#,
    )
    .unwrap();
    assert_eq!(logic.version(), "0.1.0");
    assert!(validate_version(&logic, "0.1.0"));
    assert!(!validate_version(&logic, "0.3.0"));
}

#[test]
fn default_records_are_current() {
    assert_eq!(
        check_version(&construct_default::<OlfactometerCalibrationLogic>()).unwrap(),
        VersionStatus::Current
    );
    assert_eq!(
        check_version(&construct_default::<ManipulatorCalibrationLogic>()).unwrap(),
        VersionStatus::Current
    );
    assert!(validate_version(
        &construct_default::<LoadCellsOperationControl>(),
        LoadCellsOperationControl::CURRENT_VERSION
    ));
}

#[test]
fn older_logic_is_coerced_to_current() {
    let logic =
        decode::<OlfactometerCalibrationLogic>(r#"{"schema_version": "0.2.1"}"#).unwrap();
    assert!(matches!(
        check_version(&logic).unwrap(),
        VersionStatus::Older { ref found, .. } if found.to_string() == "0.2.1"
    ));
    let logic = coerce_version(logic).unwrap();
    assert_eq!(logic.schema_version, LOGIC_SCHEMA_VERSION);
}

#[test]
fn newer_logic_is_refused() {
    let logic = decode::<ManipulatorCalibrationLogic>(
        r#"{"task_parameters": {}, "version": "1.0.0"}"#,
    )
    .unwrap();
    let err = coerce_version(logic).unwrap_err();
    assert!(matches!(err, VersionError::Newer { ref current, .. } if current.to_string() == LOGIC_VERSION));
}

#[test]
fn unparsable_version_is_refused() {
    let control =
        decode::<LoadCellsOperationControl>(r#"{"schema_version": "latest"}"#).unwrap();
    assert!(matches!(
        check_version(&control),
        Err(VersionError::Invalid { ref version, .. }) if version == "latest"
    ));
}

#[test]
fn schema_export_lists_required_fields_and_defaults() {
    let schema = json_schema::<WaterValveCalibrationLogic>();
    assert_eq!(schema["title"], "WaterValveCalibrationLogic");
    assert_eq!(schema["required"], json!(["valve_open_time"]));
    assert_eq!(schema["properties"]["valve_open_interval"]["default"], json!(0.2));
    assert_eq!(schema["properties"]["schema_version"]["default"], json!("0.3.0"));
    assert!(schema["properties"]["valve_open_time"].get("default").is_none());
}

#[test]
fn schema_export_marks_nullable_and_enum_fields() {
    let schema = json_schema::<rigcal::records::olfactometer::OlfactometerChannelConfig>();
    assert_eq!(
        schema["properties"]["odorant"]["oneOf"],
        json!([{"type": "string"}, {"type": "null"}])
    );
    assert_eq!(
        schema["properties"]["flow_rate_capacity"]["enum"],
        json!([100, 1000])
    );
    assert_eq!(schema["properties"]["channel_type"]["default"], json!("Odor"));
}
