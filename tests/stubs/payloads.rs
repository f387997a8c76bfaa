#![allow(dead_code)]
// Not every test binary uses every fixture

pub const WATER_VALVE_LOGIC_PARTIAL: &str = r#"{"valve_open_time": [1.0, 2.0], "repeat_count": 50}"#;

pub const CARRIER_CHANNEL: &str = r#"{"channel_index": 3, "channel_type": "Carrier"}"#;

pub const CARRIER_CHANNEL_NO_INDEX: &str = r#"{"channel_type": "Carrier"}"#;

pub const OLFACTOMETER_LOGIC: &str = r#"
{
    "schema_version": "0.3.0",
    "channel_config": {
        "0": {
            "channel_index": 0,
            "channel_type": "Odor",
            "flow_rate_capacity": 100,
            "flow_rate": 80.0,
            "odorant": "Ethyl butyrate",
            "odorant_dilution": 0.5
        },
        "3": {
            "channel_index": 3,
            "channel_type": "Carrier",
            "flow_rate_capacity": 1000
        }
    },
    "full_flow_rate": 1000.0,
    "n_repeats_per_stimulus": 10,
    "time_on": 0.5,
    "time_off": 0.5
}
"#;

pub const OLFACTOMETER_RIG: &str = r#"
{
    "aind_behavior_services_pkg_version": "0.8.9",
    "version": "0.0.0",
    "computer_name": "BEHAVIOR-01",
    "rig_name": "olfactometer-calibration",
    "harp_olfactometer": {
        "device_type": "olfactometer",
        "who_am_i": 1140,
        "serial_number": null,
        "port_name": "COM3",
        "additional_settings": {"mode": "standby"},
        "calibration": {
            "device_name": "Olfactometer",
            "input": {},
            "output": {},
            "date": "2024-05-21T10:15:00-07:00",
            "notes": "bench check"
        }
    },
    "harp_analog_input": {"port_name": "COM4"},
    "harp_clock_generator": {"port_name": "COM5"}
}
"#;

pub const WATER_VALVE_CALIBRATION: &str = r#"
{
    "device_name": "WaterValve",
    "input": {
        "measurements": [
            {"valve_open_interval": 0.2, "valve_open_time": 0.01, "water_weight": [0.21, 0.22], "repeat_count": 200},
            {"valve_open_interval": 0.2, "valve_open_time": 0.02, "water_weight": [0.43, 0.41], "repeat_count": 200}
        ]
    },
    "output": {
        "interval_average": {"0.01": 0.00108, "0.02": 0.0021},
        "slope": 0.102,
        "offset": 0.0001,
        "r2": 0.998,
        "valid_domain": [0.01, 0.02]
    },
    "description": "Calibration of the water valve delivery system"
}
"#;

pub const TREADMILL_RIG: &str = r#"
{
    "rig_name": "treadmill-calibration",
    "treadmill": {
        "port_name": "COM7",
        "calibration": {
            "input": {},
            "output": {
                "wheel_diameter": 15.0,
                "pulses_per_revolution": 28800,
                "invert_direction": true,
                "brake_lookup_calibration": [[0.0, 0.0], [1.0, 65535.0]]
            }
        }
    }
}
"#;

pub const MANIPULATOR_RIG: &str = r#"
{
    "rig_name": "manipulator-calibration",
    "manipulator": {
        "port_name": "COM9",
        "calibration": {
            "input": {
                "homing_order": [3, 4],
                "axis_configuration": [{"axis": 3}, {"axis": 4, "max_limit": 20000}]
            },
            "output": {}
        }
    }
}
"#;

pub const LOAD_CELLS_CALIBRATION: &str = r#"
{
    "input": {
        "channels": {
            "0": {"measured_offset": {"0": 12.5, "1": 3.0}, "measured_weight": [[0.0, 3.0], [10.0, 210.0]]}
        }
    },
    "output": {
        "offset": {"0": 3},
        "weight_lookup": {"0": [10.0, 210.0]}
    }
}
"#;

pub const NOT_JSON: &str = r#"{"valve_open_time": [1.0, "#;
