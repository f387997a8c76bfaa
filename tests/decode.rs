use rigcal::model::{construct_default, decode, encode, DecodeError};
use rigcal::records::load_cells::LoadCellsCalibration;
use rigcal::records::manipulator::{Axis, ManipulatorCalibrationRig};
use rigcal::records::olfactometer::{
    FlowRateCapacity, OlfactometerCalibrationLogic, OlfactometerCalibrationRig,
    OlfactometerChannel, OlfactometerChannelConfig, OlfactometerChannelType,
};
use rigcal::records::treadmill::TreadmillCalibrationRig;
use rigcal::records::water_valve::{WaterValveCalibration, WaterValveCalibrationLogic};
use rigcal::records::Timestamp;
use serde_json::json;

mod stubs;

use stubs::payloads;

#[test]
fn water_valve_logic_defaults() {
    let logic = construct_default::<WaterValveCalibrationLogic>();
    assert_eq!(logic.valve_open_interval, 0.2);
    assert_eq!(logic.repeat_count, 200);
    assert!(logic.valve_open_time.is_empty());
    assert_eq!(logic.schema_version, "0.3.0");
}

#[test]
fn water_valve_logic_partial_payload_keeps_defaults() {
    let logic = decode::<WaterValveCalibrationLogic>(payloads::WATER_VALVE_LOGIC_PARTIAL).unwrap();
    assert_eq!(logic.valve_open_time, vec![1.0, 2.0]);
    assert_eq!(logic.repeat_count, 50);
    assert_eq!(logic.valve_open_interval, 0.2);
}

#[test]
fn water_valve_logic_accepts_whole_float_count() {
    let logic = decode::<WaterValveCalibrationLogic>(
        r#"{"valve_open_time": [1.0], "repeat_count": 50.0}"#,
    )
    .unwrap();
    assert_eq!(logic.repeat_count, 50);
    assert!(encode(&logic).unwrap().contains(r#""repeat_count":50}"#));
}

#[test]
fn fractional_count_is_a_type_mismatch() {
    let err = decode::<WaterValveCalibrationLogic>(
        r#"{"valve_open_time": [1.0], "repeat_count": 50.5}"#,
    )
    .unwrap_err();
    assert_eq!(
        err,
        DecodeError::TypeMismatch {
            field: "repeat_count".into(),
            expected: "integer",
            actual: "number",
        }
    );
}

#[test]
fn water_valve_logic_requires_open_times() {
    let err = decode::<WaterValveCalibrationLogic>(r#"{"repeat_count": 50}"#).unwrap_err();
    assert_eq!(err, DecodeError::MissingRequiredField("valve_open_time".into()));
}

#[test]
fn carrier_channel_fills_defaults() {
    let config = decode::<OlfactometerChannelConfig>(payloads::CARRIER_CHANNEL).unwrap();
    assert_eq!(config.channel_index, 3);
    assert_eq!(config.channel_type, OlfactometerChannelType::Carrier);
    assert_eq!(config.flow_rate, 100.0);
    assert_eq!(config.flow_rate_capacity, FlowRateCapacity::_100);
    assert_eq!(config.odorant, None);
}

#[test]
fn channel_without_index_is_rejected() {
    let err = decode::<OlfactometerChannelConfig>(payloads::CARRIER_CHANNEL_NO_INDEX).unwrap_err();
    assert_eq!(err, DecodeError::MissingRequiredField("channel_index".into()));
    assert_eq!(err.field(), Some("channel_index"));
}

#[test]
fn null_required_field_is_missing() {
    let err = decode::<OlfactometerChannelConfig>(r#"{"channel_index": null}"#).unwrap_err();
    assert_eq!(err, DecodeError::MissingRequiredField("channel_index".into()));
}

#[test]
fn flow_rate_capacity_decodes_from_integer() {
    let config = decode::<OlfactometerChannelConfig>(
        r#"{"channel_index": 0, "flow_rate_capacity": 1000}"#,
    )
    .unwrap();
    assert_eq!(config.flow_rate_capacity, FlowRateCapacity::_1000);
    assert!(encode(&config)
        .unwrap()
        .contains(r#""flow_rate_capacity":1000"#));
}

#[test]
fn flow_rate_capacity_decodes_from_whole_float() {
    let config = decode::<OlfactometerChannelConfig>(
        r#"{"channel_index": 1.0, "flow_rate_capacity": 1000.0}"#,
    )
    .unwrap();
    assert_eq!(config.channel_index, 1);
    assert_eq!(config.flow_rate_capacity, FlowRateCapacity::_1000);
}

#[test]
fn flow_rate_capacity_outside_set_is_rejected() {
    let err = decode::<OlfactometerChannelConfig>(
        r#"{"channel_index": 0, "flow_rate_capacity": 500}"#,
    )
    .unwrap_err();
    assert_eq!(
        err,
        DecodeError::InvalidEnumValue {
            field: "flow_rate_capacity".into(),
            raw: json!(500),
        }
    );
}

#[test]
fn string_enum_is_case_sensitive() {
    let err = decode::<OlfactometerChannelConfig>(
        r#"{"channel_index": 0, "channel_type": "carrier"}"#,
    )
    .unwrap_err();
    assert_eq!(
        err,
        DecodeError::InvalidEnumValue {
            field: "channel_type".into(),
            raw: json!("carrier"),
        }
    );
}

#[test]
fn unknown_keys_are_ignored() {
    let config = decode::<OlfactometerChannelConfig>(
        r#"{"channel_index": 2, "legacy_valve_id": 7, "nested": {"x": 1}}"#,
    )
    .unwrap();
    assert_eq!(config, {
        let mut expected = construct_default::<OlfactometerChannelConfig>();
        expected.channel_index = 2;
        expected
    });
}

#[test]
fn wrong_type_names_field_and_types() {
    let err = decode::<OlfactometerChannelConfig>(
        r#"{"channel_index": 1, "flow_rate": "fast"}"#,
    )
    .unwrap_err();
    assert_eq!(
        err,
        DecodeError::TypeMismatch {
            field: "flow_rate".into(),
            expected: "number",
            actual: "string",
        }
    );
}

#[test]
fn malformed_payloads() {
    let err = decode::<WaterValveCalibrationLogic>(payloads::NOT_JSON).unwrap_err();
    assert!(matches!(err, DecodeError::MalformedPayload(_)));

    let err = decode::<WaterValveCalibrationLogic>("[1.0, 2.0]").unwrap_err();
    assert!(matches!(err, DecodeError::MalformedPayload(ref reason) if reason.contains("array")));
}

#[test]
fn olfactometer_logic_full_payload() {
    let logic = decode::<OlfactometerCalibrationLogic>(payloads::OLFACTOMETER_LOGIC).unwrap();
    assert_eq!(logic.n_repeats_per_stimulus, 10);
    let odor = logic.channel(OlfactometerChannel::Channel0).unwrap();
    assert_eq!(odor.odorant.as_deref(), Some("Ethyl butyrate"));
    assert_eq!(odor.flow_rate, 80.0);
    let carrier = logic.channel(OlfactometerChannel::Channel3).unwrap();
    assert_eq!(carrier.flow_rate_capacity, FlowRateCapacity::_1000);
    assert!(logic.channel(OlfactometerChannel::Channel1).is_none());
}

#[test]
fn olfactometer_rig_full_payload() {
    let rig = decode::<OlfactometerCalibrationRig>(payloads::OLFACTOMETER_RIG).unwrap();
    assert_eq!(rig.harp_olfactometer.port_name, "COM3");
    assert_eq!(rig.harp_olfactometer.serial_number, None);
    assert_eq!(
        rig.harp_olfactometer.additional_settings,
        Some(json!({"mode": "standby"}))
    );
    let date = rig.harp_olfactometer.calibration.date.unwrap();
    assert_eq!(date.to_string(), "2024-05-21T10:15:00-07:00");
    assert_eq!(rig.harp_analog_input.who_am_i, 1236);
    assert_eq!(rig.harp_clock_generator.who_am_i, 1158);
}

#[test]
fn bad_calibration_date_is_a_type_mismatch() {
    let payload = payloads::OLFACTOMETER_RIG.replace("2024-05-21T10:15:00-07:00", "yesterday");
    let err = decode::<OlfactometerCalibrationRig>(&payload).unwrap_err();
    assert_eq!(
        err,
        DecodeError::TypeMismatch {
            field: "harp_olfactometer.calibration.date".into(),
            expected: "date-time string",
            actual: "string",
        }
    );
}

#[test]
fn water_valve_calibration_payload() {
    let calibration = decode::<WaterValveCalibration>(payloads::WATER_VALVE_CALIBRATION).unwrap();
    assert_eq!(calibration.input.measurements.len(), 2);
    assert_eq!(calibration.output.slope, 0.102);
    assert_eq!(calibration.output.valid_domain, Some(vec![0.01, 0.02]));
    assert_eq!(calibration.date, None);
}

#[test]
fn naive_calibration_date_round_trips() {
    let payload = r#"{"input": {}, "output": {"slope": 1.0, "offset": 0.0}, "date": "2024-05-21T10:15:00.123456"}"#;
    let calibration = decode::<WaterValveCalibration>(payload).unwrap();
    let date = calibration.date.unwrap();
    assert!(matches!(date, Timestamp::Naive(_)));
    assert_eq!(date.to_string(), "2024-05-21T10:15:00.123456");

    let encoded = encode(&calibration).unwrap();
    assert!(encoded.contains(r#""date":"2024-05-21T10:15:00.123456""#));
    assert_eq!(decode::<WaterValveCalibration>(&encoded).unwrap(), calibration);
}

#[test]
fn treadmill_rig_payload() {
    let rig = decode::<TreadmillCalibrationRig>(payloads::TREADMILL_RIG).unwrap();
    let calibration = rig.treadmill.calibration.unwrap();
    assert!(calibration.output.invert_direction);
    assert_eq!(
        calibration.output.brake_lookup_calibration,
        vec![[0.0, 0.0], [1.0, 65535.0]]
    );
    assert_eq!(rig.version, "0.0.0");
}

#[test]
fn manipulator_rig_payload() {
    let rig = decode::<ManipulatorCalibrationRig>(payloads::MANIPULATOR_RIG).unwrap();
    let input = &rig.manipulator.calibration.input;
    assert_eq!(input.homing_order, vec![Axis::X, Axis::Z]);
    assert_eq!(input.axis_configuration[1].max_limit, 20000);
    assert_eq!(input.axis_configuration[1].min_limit, -1);
    assert_eq!(input.full_step_to_mm.x, 0.01);
}

#[test]
fn manipulator_axis_errors_carry_index() {
    let payload = payloads::MANIPULATOR_RIG.replace(r#"{"axis": 3}"#, r#"{"axis": "X"}"#);
    let err = decode::<ManipulatorCalibrationRig>(&payload).unwrap_err();
    assert_eq!(
        err,
        DecodeError::InvalidEnumValue {
            field: "manipulator.calibration.input.axis_configuration[0].axis".into(),
            raw: json!("X"),
        }
    );
}

#[test]
fn load_cells_payload_keeps_output_defaults() {
    let calibration = decode::<LoadCellsCalibration>(payloads::LOAD_CELLS_CALIBRATION).unwrap();
    assert_eq!(calibration.output.offset.len(), 1);
    assert_eq!(calibration.output.baseline.len(), 8);
    assert_eq!(calibration.input.channels["0"].measured_weight[1], [10.0, 210.0]);
}
