//! Bidirectional scenario <-> JSON codec.
//!
//! `decode_*` turns a complete JSON document into a [`Scenario`] tree;
//! `encode_*` is the mirror. Both are synchronous, pure with respect to
//! their inputs and outputs, and perform no I/O (see [`crate::io`] for the
//! file boundary).

pub mod decode;
pub mod encode;
pub mod naming;
pub mod resolve;

use serde::Serialize;
use serde_json::Value;

use crate::error::ScenarioError;
use crate::model::Scenario;

/// Decode a scenario document from JSON text.
pub fn decode_str(input: &str) -> Result<Scenario, ScenarioError> {
    let value: Value = serde_json::from_str(input)?;
    log::debug!("decoding scenario document ({} bytes)", input.len());
    decode::scenario_from_value(&value)
}

/// Decode a scenario document from JSON bytes.
pub fn decode_slice(input: &[u8]) -> Result<Scenario, ScenarioError> {
    let value: Value = serde_json::from_slice(input)?;
    log::debug!("decoding scenario document ({} bytes)", input.len());
    decode::scenario_from_value(&value)
}

/// Decode a scenario from an already-parsed JSON value.
pub fn decode_value(value: &Value) -> Result<Scenario, ScenarioError> {
    decode::scenario_from_value(value)
}

/// Encode a scenario tree into an in-memory JSON value. Deterministic for
/// a given tree; never fails.
pub fn encode_value(scenario: &Scenario) -> Value {
    encode::scenario_to_value(scenario)
}

/// Encode a scenario tree into compact JSON text.
pub fn encode_string(scenario: &Scenario) -> String {
    encode_value(scenario).to_string()
}

/// Encode a scenario tree into pretty JSON text with the engine's 4-space
/// indent convention.
pub fn encode_pretty(scenario: &Scenario) -> String {
    let value = encode_value(scenario);
    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    match value.serialize(&mut ser) {
        Ok(()) => String::from_utf8(buf).unwrap_or_else(|_| value.to_string()),
        Err(_) => value.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::*;
    use serde_json::json;

    const FIXTURE: &str = r#"{
        "name": "wifi-drone-survey",
        "resultsPath": "../results/",
        "duration": 60,
        "logOnFile": true,
        "dryRun": false,
        "staticNs3Config": [
            {"name": "ns3::ConfigStore::Mode", "value": "Save"}
        ],
        "phyLayer": [{
            "type": "wifi",
            "standard": "802.11ax",
            "channel": {
                "propagationDelayModel": {
                    "name": "ns3::ConstantSpeedPropagationDelayModel",
                    "attributes": []
                },
                "propagationLossModel": {
                    "name": "ns3::FriisPropagationLossModel",
                    "attributes": [{"name": "Frequency", "value": 2400000000.0}]
                }
            },
            "attributes": [{"name": "RxGain", "value": 0.0}]
        }],
        "macLayer": [{
            "type": "wifi",
            "ssid": "wifi-default",
            "remoteStationManager": {
                "name": "ns3::ConstantRateWifiManager",
                "attributes": [
                    {"name": "DataMode", "value": "OfdmRate6Mbps"},
                    {"name": "ControlMode", "value": "OfdmRate6Mbps"}
                ]
            }
        }],
        "networkLayer": [{
            "type": "ipv4",
            "address": "10.1.0.0",
            "mask": "255.255.255.0",
            "gateway": "10.1.0.1"
        }],
        "world": {
            "size": {"X": "100", "Y": "100", "Z": "50"},
            "buildings": [{
                "type": "residential",
                "walls": "concreteWithWindows",
                "boundaries": [0.0, 10.0, 0.0, 10.0, 0.0, 6.0],
                "floors": 2,
                "rooms": [2, 2]
            }],
            "regionsOfInterest": [[25.0, 25.0, 0.0, 10.0]]
        },
        "drones": [{
            "netDevices": [{
                "type": "wifi",
                "networkLayer": 0,
                "macLayer": {"name": "ns3::StaWifiMac", "attributes": []},
                "phy": {"TxPower": 17.0},
                "antennaModel": {"name": "ns3::IsotropicAntennaModel", "attributes": []}
            }],
            "mobilityModel": {
                "name": "ns3::ParametricSpeedDroneMobilityModel",
                "attributes": [
                    {"name": "SpeedCoefficients", "value": [1.0, 0.0]},
                    {"name": "FlightPlan", "value": [
                        {"position": [0.0, 0.0, 1.0], "interest": 0},
                        {"position": [30.0, 30.0, 20.0], "interest": 1, "restTime": 2.5}
                    ]},
                    {"name": "CurveStep", "value": 0.001}
                ]
            },
            "applications": [{
                "name": "ns3::DroneClientApplication",
                "attributes": [
                    {"name": "StartTime", "value": 1.0},
                    {"name": "StopTime", "value": 59.0},
                    {"name": "DestinationIpv4Address", "value": "10.1.0.1"}
                ]
            }],
            "mechanics": {
                "name": "ns3::Drone",
                "attributes": [
                    {"name": "Mass", "value": 0.75},
                    {"name": "RotorDiskArea", "value": 0.18},
                    {"name": "DragCoefficient", "value": 0.08}
                ]
            },
            "battery": {
                "name": "ns3::LiIonEnergySource",
                "attributes": [
                    {"name": "LiIonEnergySourceInitialEnergyJ", "value": 200.0},
                    {"name": "LiIonEnergyLowBatteryThreshold", "value": 0.2}
                ]
            },
            "peripherals": [
                {
                    "name": "ns3::StoragePeripheral",
                    "attributes": [
                        {"name": "PowerConsumption", "value": [0.0, 0.1, 0.4]},
                        {"name": "Capacity", "value": 8000000}
                    ]
                },
                {
                    "name": "ns3::InputPeripheral",
                    "attributes": [
                        {"name": "PowerConsumption", "value": [0.0, 0.2, 0.6]},
                        {"name": "RoITrigger", "value": [0]},
                        {"name": "DataRate", "value": 1048576.0},
                        {"name": "HasStorage", "value": true}
                    ]
                }
            ]
        }],
        "ZSPs": [{
            "netDevices": [{
                "type": "wifi",
                "macLayer": {"name": "ns3::ApWifiMac", "attributes": []}
            }],
            "mobilityModel": {
                "name": "ns3::ConstantPositionMobilityModel",
                "attributes": [{"name": "Position", "value": [50.0, 50.0, 10.0]}]
            },
            "applications": []
        }],
        "remotes": [{
            "networkLayer": 0,
            "applications": [{
                "name": "ns3::UdpEchoServer",
                "attributes": [{"name": "Port", "value": 7}]
            }]
        }],
        "nodes": [],
        "radioMapParameters": ["10", 2.4],
        "logComponents": ["Scenario", "DroneClientApplication"],
        "analytics": [{"type": "trajectory"}]
    }"#;

    #[test]
    fn test_decode_fixture() {
        let scenario = decode_str(FIXTURE).unwrap();

        assert_eq!(scenario.name, "wifi-drone-survey");
        assert_eq!(scenario.duration, 60.0);
        assert!(scenario.log_on_file);
        assert!(!scenario.dry_run);
        assert_eq!(scenario.static_ns3_config[0].name, "ns3::ConfigStore::Mode");
        assert_eq!(scenario.zsps.len(), 1);
        assert_eq!(scenario.remotes.len(), 1);
        assert_eq!(scenario.radio_map_parameters, vec![json!("10"), json!(2.4)]);

        let world = scenario.world.as_ref().unwrap();
        assert_eq!(world.buildings[0].walls, WallsMaterial::ConcreteWithWindows);
        assert_eq!(world.regions_of_interest[0], vec![25.0, 25.0, 0.0, 10.0]);

        let phy = &scenario.phy_layer[0];
        assert_eq!(phy.layer_type, LayerKind::Wifi);
        let loss = phy
            .channel
            .as_ref()
            .unwrap()
            .propagation_loss_model
            .as_ref()
            .unwrap();
        // Unmapped engine model: generic passthrough keeps the attribute.
        assert_eq!(loss.kind(), ModelKind::Generic);
        assert_eq!(loss.extra()[0].name, "Frequency");

        let manager = scenario.mac_layer[0].remote_station_manager.as_ref().unwrap();
        match manager {
            ModelRecord::RemoteStationManager(m) => {
                assert_eq!(m.data_mode.as_deref(), Some("OfdmRate6Mbps"));
                assert_eq!(m.control_mode.as_deref(), Some("OfdmRate6Mbps"));
            }
            other => panic!("wrong variant: {:?}", other),
        }

        let drone = &scenario.drones[0];
        match drone.node.mobility_model.as_ref().unwrap() {
            ModelSlot::Model(ModelRecord::ParametricSpeedDroneMobility(m)) => {
                assert_eq!(m.flight_plan.len(), 2);
                assert_eq!(m.flight_plan[1].rest_time, Some(2.5));
                assert_eq!(m.curve_step, 0.001);
            }
            other => panic!("wrong mobility slot: {:?}", other),
        }
        match drone.mechanics.as_ref().unwrap() {
            ModelRecord::DroneMechanics(m) => assert_eq!(m.mass, 0.75),
            other => panic!("wrong variant: {:?}", other),
        }
        match drone.battery.as_ref().unwrap() {
            ModelRecord::LiIonEnergySource(m) => {
                assert_eq!(m.li_ion_energy_source_initial_energy_j, 200.0);
            }
            other => panic!("wrong variant: {:?}", other),
        }
        match &drone.peripherals[0] {
            ModelSlot::Model(ModelRecord::StoragePeripheral(m)) => {
                assert_eq!(m.capacity, 8_000_000);
                assert_eq!(m.power_consumption, vec![0.0, 0.1, 0.4]);
            }
            other => panic!("wrong peripheral: {:?}", other),
        }

        let zsp_mobility = scenario.zsps[0].mobility_model.as_ref().unwrap();
        match zsp_mobility {
            ModelSlot::Model(ModelRecord::ConstantPositionMobility(m)) => {
                assert_eq!(m.position, vec![50.0, 50.0, 10.0]);
            }
            other => panic!("wrong mobility slot: {:?}", other),
        }

        match &scenario.remotes[0].applications[0] {
            ModelRecord::Application(m) => {
                assert_eq!(m.name, "ns3::UdpEchoServer");
                // "Port" is not a declared field; it survives in the
                // open mapping.
                assert_eq!(m.extra, vec![Attribute::new("Port", json!(7))]);
            }
            other => panic!("wrong variant: {:?}", other),
        }
    }

    #[test]
    fn test_full_round_trip() {
        let scenario = decode_str(FIXTURE).unwrap();
        let encoded = encode_value(&scenario);
        let reloaded = decode_value(&encoded).unwrap();
        assert_eq!(scenario, reloaded);
    }

    #[test]
    fn test_encode_is_idempotent() {
        let scenario = decode_str(FIXTURE).unwrap();
        let once = encode_value(&scenario);
        let twice = encode_value(&decode_value(&once).unwrap());
        assert_eq!(once, twice);
    }

    #[test]
    fn test_attribute_order_survives_round_trip() {
        let mut manager = RemoteStationManager {
            name: "ns3::ConstantRateWifiManager".to_string(),
            data_mode: Some("OfdmRate6Mbps".to_string()),
            ..Default::default()
        };
        manager.extra.push(Attribute::new("CustomX", json!(42)));
        manager.extra.push(Attribute::new("CustomA", json!("z")));

        let mut scenario = Scenario {
            name: "t".to_string(),
            ..Default::default()
        };
        scenario.mac_layer.push(MacLayerConfig {
            layer_type: LayerKind::Wifi,
            ssid: None,
            remote_station_manager: Some(ModelRecord::RemoteStationManager(manager)),
        });
        scenario.phy_layer.push(PhyLayerConfig::default());
        scenario.network_layer.push(NetworkLayerConfig::default());

        let encoded = encode_value(&scenario);
        let attrs = &encoded["macLayer"][0]["remoteStationManager"]["attributes"];
        assert_eq!(
            *attrs,
            json!([
                {"name": "DataMode", "value": "OfdmRate6Mbps"},
                {"name": "CustomX", "value": 42},
                {"name": "CustomA", "value": "z"}
            ])
        );

        let reloaded = decode_value(&encoded).unwrap();
        assert_eq!(scenario, reloaded);
    }

    #[test]
    fn test_malformed_json_is_format_error() {
        assert!(matches!(
            decode_str("{not json").unwrap_err(),
            ScenarioError::Format(_)
        ));
    }

    #[test]
    fn test_non_object_root_is_rejected() {
        assert!(matches!(
            decode_str("[1, 2, 3]").unwrap_err(),
            ScenarioError::TypeMismatch { .. }
        ));
    }

    #[test]
    fn test_missing_required_root_field() {
        let err = decode_str(r#"{"name": "x"}"#).unwrap_err();
        match err {
            ScenarioError::Schema { path, .. } => assert_eq!(path, "/resultsPath"),
            other => panic!("wrong error: {:?}", other),
        }
    }

    #[test]
    fn test_unknown_discriminant_round_trips_losslessly() {
        let input = json!({
            "name": "s", "resultsPath": "r", "duration": 1.0, "logOnFile": false,
            "phyLayer": [], "macLayer": [], "networkLayer": [],
            "nodes": [{
                "mobilityModel": {
                    "name": "ns3::SomeUnknownThing",
                    "attributes": [
                        {"name": "Alpha", "value": 1},
                        {"name": "Beta", "value": [true, null]}
                    ]
                }
            }]
        });
        let scenario = decode_value(&input).unwrap();
        match scenario.nodes[0].mobility_model.as_ref().unwrap() {
            ModelSlot::Model(rec) => {
                assert_eq!(rec.kind(), ModelKind::Generic);
                assert_eq!(rec.extra().len(), 2);
            }
            other => panic!("wrong slot: {:?}", other),
        }
        let encoded = encode_value(&scenario);
        assert_eq!(
            encoded["nodes"][0]["mobilityModel"],
            input["nodes"][0]["mobilityModel"]
        );
    }

    #[test]
    fn test_pretty_output_uses_four_space_indent() {
        let scenario = Scenario {
            name: "demo".to_string(),
            ..Default::default()
        };
        let text = encode_pretty(&scenario);
        assert!(text.contains("\n    \"name\": \"demo\""));
        // Pretty text is still a valid document.
        assert_eq!(decode_str(&text).unwrap(), scenario);
    }
}
