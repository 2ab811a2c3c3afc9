//! Generic recursive JSON -> tree conversion.
//!
//! Each structural record has an explicit `*_from_value` function; list and
//! optional fields recurse through small shared helpers. Model records go
//! through [`model_record_from_value`], which resolves the concrete variant
//! from the discriminant and then binds each attribute either to a declared
//! field or to the open mapping. Errors abort the whole decode and carry a
//! `/`-separated path to the offending field.

use serde_json::{Map, Value};

use crate::codec::naming::attribute_field_name;
use crate::codec::resolve::resolve_kind;
use crate::error::ScenarioError;
use crate::model::*;

type Result<T> = std::result::Result<T, ScenarioError>;

// ============================================================================
// VALUE HELPERS
// ============================================================================

/// Human-readable JSON kind of a value, for mismatch messages.
fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

fn join(path: &str, key: &str) -> String {
    format!("{}/{}", path, key)
}

fn join_index(path: &str, index: usize) -> String {
    format!("{}/{}", path, index)
}

fn expect_object<'a>(value: &'a Value, path: &str) -> Result<&'a Map<String, Value>> {
    value
        .as_object()
        .ok_or_else(|| ScenarioError::mismatch(path, "object", kind_of(value)))
}

fn expect_array<'a>(value: &'a Value, path: &str) -> Result<&'a Vec<Value>> {
    value
        .as_array()
        .ok_or_else(|| ScenarioError::mismatch(path, "array", kind_of(value)))
}

fn expect_string(value: &Value, path: &str) -> Result<String> {
    value
        .as_str()
        .map(str::to_owned)
        .ok_or_else(|| ScenarioError::mismatch(path, "string", kind_of(value)))
}

/// Numbers only; a JSON string holding digits is a mismatch. Integer-valued
/// numbers are accepted (same JSON kind).
fn expect_f64(value: &Value, path: &str) -> Result<f64> {
    value
        .as_f64()
        .ok_or_else(|| ScenarioError::mismatch(path, "number", kind_of(value)))
}

fn expect_i64(value: &Value, path: &str) -> Result<i64> {
    value
        .as_i64()
        .ok_or_else(|| ScenarioError::mismatch(path, "integer", kind_of(value)))
}

fn expect_u64(value: &Value, path: &str) -> Result<u64> {
    value
        .as_u64()
        .ok_or_else(|| ScenarioError::mismatch(path, "unsigned integer", kind_of(value)))
}

fn expect_u32(value: &Value, path: &str) -> Result<u32> {
    let n = expect_u64(value, path)?;
    u32::try_from(n).map_err(|_| ScenarioError::schema(path, format!("value {} out of range", n)))
}

fn expect_bool(value: &Value, path: &str) -> Result<bool> {
    value
        .as_bool()
        .ok_or_else(|| ScenarioError::mismatch(path, "boolean", kind_of(value)))
}

fn decode_list<T>(
    value: &Value,
    path: &str,
    f: impl Fn(&Value, &str) -> Result<T>,
) -> Result<Vec<T>> {
    let items = expect_array(value, path)?;
    let mut out = Vec::with_capacity(items.len());
    for (i, item) in items.iter().enumerate() {
        out.push(f(item, &join_index(path, i))?);
    }
    Ok(out)
}

fn f64_list(value: &Value, path: &str) -> Result<Vec<f64>> {
    decode_list(value, path, expect_f64)
}

fn i64_list(value: &Value, path: &str) -> Result<Vec<i64>> {
    decode_list(value, path, expect_i64)
}

fn u32_list(value: &Value, path: &str) -> Result<Vec<u32>> {
    decode_list(value, path, expect_u32)
}

fn string_list(value: &Value, path: &str) -> Result<Vec<String>> {
    decode_list(value, path, expect_string)
}

fn raw_list(value: &Value, path: &str) -> Result<Vec<Value>> {
    Ok(expect_array(value, path)?.clone())
}

// ============================================================================
// FIELD ACCESS
// ============================================================================

/// Look a key up, treating a present-but-null value as absent.
fn field<'a>(map: &'a Map<String, Value>, key: &str) -> Option<&'a Value> {
    map.get(key).filter(|v| !v.is_null())
}

fn require<'a>(map: &'a Map<String, Value>, key: &str, path: &str) -> Result<&'a Value> {
    field(map, key).ok_or_else(|| {
        ScenarioError::schema(join(path, key), "required field is missing")
    })
}

/// Decode an optional field; absent or null yields `None`.
fn optional<T>(
    map: &Map<String, Value>,
    key: &str,
    path: &str,
    f: impl Fn(&Value, &str) -> Result<T>,
) -> Result<Option<T>> {
    match field(map, key) {
        Some(v) => Ok(Some(f(v, &join(path, key))?)),
        None => Ok(None),
    }
}

/// Decode a list field; absent yields an empty list.
fn list_field<T>(
    map: &Map<String, Value>,
    key: &str,
    path: &str,
    f: impl Fn(&Value, &str) -> Result<T>,
) -> Result<Vec<T>> {
    match field(map, key) {
        Some(v) => decode_list(v, &join(path, key), f),
        None => Ok(Vec::new()),
    }
}

fn closed_choice<T: Copy>(
    value: &Value,
    path: &str,
    parse: impl Fn(&str) -> Option<T>,
    vocabulary: &'static str,
) -> Result<T> {
    let s = expect_string(value, path)?;
    parse(&s)
        .ok_or_else(|| ScenarioError::schema(path, format!("unknown {}: {:?}", vocabulary, s)))
}

// ============================================================================
// MODEL RECORDS
// ============================================================================

/// Decode a `{name, attributes}` object into a resolved model record.
pub fn model_record_from_value(value: &Value, path: &str) -> Result<ModelRecord> {
    let map = expect_object(value, path)?;
    let name = expect_string(
        require(map, "name", path)?,
        &join(path, "name"),
    )?;

    let attrs_path = join(path, "attributes");
    let attrs_value = require(map, "attributes", path)?;
    let attributes: Vec<Attribute> = serde_json::from_value(attrs_value.clone())
        .map_err(|e| ScenarioError::schema(&attrs_path, format!("malformed attribute list: {}", e)))?;

    let mut record = ModelRecord::blank(resolve_kind(&name), name);
    for attribute in attributes {
        let attr_path = join(&attrs_path, &attribute.name);
        if let Some(unmatched) = assign_declared(&mut record, attribute, &attr_path)? {
            record.extra_mut().push(unmatched);
        }
    }
    Ok(record)
}

/// Decode a polymorphic slot: model-shaped objects go through the
/// resolver, anything else passes through as a raw value.
pub fn model_slot_from_value(value: &Value, path: &str) -> Result<ModelSlot> {
    match value {
        Value::Object(map) if map.contains_key("name") && map.contains_key("attributes") => {
            Ok(ModelSlot::Model(model_record_from_value(value, path)?))
        }
        other => Ok(ModelSlot::Raw(other.clone())),
    }
}

/// Try to bind one attribute to a declared field of `record`. Returns the
/// attribute back when the chosen variant does not declare it, so the
/// caller can keep it in the open mapping.
fn assign_declared(
    record: &mut ModelRecord,
    attribute: Attribute,
    path: &str,
) -> Result<Option<Attribute>> {
    let fname = attribute_field_name(&attribute.name);
    let value = &attribute.value;
    match record {
        ModelRecord::Generic(_) => return Ok(Some(attribute)),
        ModelRecord::ConstantPositionMobility(m) => match fname.as_str() {
            "position" => m.position = f64_list(value, path)?,
            _ => return Ok(Some(attribute)),
        },
        ModelRecord::ParametricSpeedDroneMobility(m) => match fname.as_str() {
            "speed_coefficients" => m.speed_coefficients = f64_list(value, path)?,
            "flight_plan" => m.flight_plan = decode_list(value, path, flight_point_from_value)?,
            "curve_step" => m.curve_step = expect_f64(value, path)?,
            _ => return Ok(Some(attribute)),
        },
        ModelRecord::RemoteStationManager(m) => match fname.as_str() {
            "data_mode" => m.data_mode = Some(expect_string(value, path)?),
            "control_mode" => m.control_mode = Some(expect_string(value, path)?),
            "fragmentation_threshold" => {
                m.fragmentation_threshold = Some(expect_string(value, path)?)
            }
            "rts_cts_threshold" => m.rts_cts_threshold = Some(expect_string(value, path)?),
            "non_unicast_mode" => m.non_unicast_mode = Some(expect_string(value, path)?),
            _ => return Ok(Some(attribute)),
        },
        ModelRecord::Application(m) => match fname.as_str() {
            "start_time" => m.start_time = Some(expect_f64(value, path)?),
            "stop_time" => m.stop_time = Some(expect_f64(value, path)?),
            "destination_ipv4_address" => {
                m.destination_ipv4_address = Some(expect_string(value, path)?)
            }
            "remote_address" => m.remote_address = Some(expect_string(value, path)?),
            "transmission_interval" => m.transmission_interval = Some(expect_f64(value, path)?),
            "interval" => m.interval = Some(expect_f64(value, path)?),
            "packet_size" => m.packet_size = Some(expect_u64(value, path)?),
            "payload_size" => m.payload_size = Some(expect_u64(value, path)?),
            _ => return Ok(Some(attribute)),
        },
        ModelRecord::DroneMechanics(m) => match fname.as_str() {
            "mass" => m.mass = expect_f64(value, path)?,
            "rotor_disk_area" => m.rotor_disk_area = expect_f64(value, path)?,
            "drag_coefficient" => m.drag_coefficient = expect_f64(value, path)?,
            _ => return Ok(Some(attribute)),
        },
        ModelRecord::LiIonEnergySource(m) => match fname.as_str() {
            "li_ion_energy_source_initial_energy_j" => {
                m.li_ion_energy_source_initial_energy_j = expect_f64(value, path)?
            }
            "li_ion_energy_low_battery_threshold" => {
                m.li_ion_energy_low_battery_threshold = expect_f64(value, path)?
            }
            "periodic_energy_update_interval" => {
                m.periodic_energy_update_interval = Some(expect_string(value, path)?)
            }
            _ => return Ok(Some(attribute)),
        },
        ModelRecord::Peripheral(m) => match fname.as_str() {
            "power_consumption" => m.power_consumption = f64_list(value, path)?,
            "ro_i_trigger" => m.ro_i_trigger = Some(i64_list(value, path)?),
            _ => return Ok(Some(attribute)),
        },
        ModelRecord::StoragePeripheral(m) => match fname.as_str() {
            "power_consumption" => m.power_consumption = f64_list(value, path)?,
            "ro_i_trigger" => m.ro_i_trigger = Some(i64_list(value, path)?),
            "capacity" => m.capacity = expect_u64(value, path)?,
            _ => return Ok(Some(attribute)),
        },
        ModelRecord::InputPeripheral(m) => match fname.as_str() {
            "power_consumption" => m.power_consumption = f64_list(value, path)?,
            "ro_i_trigger" => m.ro_i_trigger = Some(i64_list(value, path)?),
            "data_rate" => m.data_rate = expect_f64(value, path)?,
            "has_storage" => m.has_storage = Some(expect_bool(value, path)?),
            _ => return Ok(Some(attribute)),
        },
        ModelRecord::IrsPeripheral(m) => match fname.as_str() {
            "power_consumption" => m.power_consumption = f64_list(value, path)?,
            "ro_i_trigger" => m.ro_i_trigger = Some(i64_list(value, path)?),
            "rows" => m.rows = expect_u32(value, path)?,
            "columns" => m.columns = expect_u32(value, path)?,
            "pru_x" => m.pru_x = expect_f64(value, path)?,
            "pru_y" => m.pru_y = expect_f64(value, path)?,
            "roto_axis" => m.roto_axis = string_list(value, path)?,
            "roto_angles" => m.roto_angles = f64_list(value, path)?,
            "patches" => m.patches = decode_list(value, path, irs_patch_from_value)?,
            _ => return Ok(Some(attribute)),
        },
    }
    Ok(None)
}

// ============================================================================
// LEAF RECORDS
// ============================================================================

pub fn flight_point_from_value(value: &Value, path: &str) -> Result<FlightPoint> {
    let map = expect_object(value, path)?;
    Ok(FlightPoint {
        position: f64_list(require(map, "position", path)?, &join(path, "position"))?,
        interest: expect_u32(require(map, "interest", path)?, &join(path, "interest"))?,
        rest_time: optional(map, "restTime", path, expect_f64)?,
    })
}

pub fn irs_patch_from_value(value: &Value, path: &str) -> Result<IrsPatch> {
    let map = expect_object(value, path)?;
    Ok(IrsPatch {
        size: i64_list(require(map, "Size", path)?, &join(path, "Size"))?,
        phase_x: expect_f64(require(map, "PhaseX", path)?, &join(path, "PhaseX"))?,
        phase_y: expect_f64(require(map, "PhaseY", path)?, &join(path, "PhaseY"))?,
    })
}

fn phy_local_from_value(value: &Value, path: &str) -> Result<PhyLocalConfig> {
    let map = expect_object(value, path)?;
    Ok(PhyLocalConfig {
        tx_power: optional(map, "TxPower", path, expect_f64)?,
        enable_uplink_power_control: optional(map, "EnableUplinkPowerControl", path, expect_bool)?,
    })
}

fn static_ns3_config_from_value(value: &Value, path: &str) -> Result<StaticNs3Config> {
    let map = expect_object(value, path)?;
    Ok(StaticNs3Config {
        name: expect_string(require(map, "name", path)?, &join(path, "name"))?,
        value: expect_string(require(map, "value", path)?, &join(path, "value"))?,
    })
}

// ============================================================================
// WORLD
// ============================================================================

fn building_from_value(value: &Value, path: &str) -> Result<Building> {
    let map = expect_object(value, path)?;
    Ok(Building {
        building_type: closed_choice(
            require(map, "type", path)?,
            &join(path, "type"),
            BuildingType::parse,
            "building type",
        )?,
        walls: closed_choice(
            require(map, "walls", path)?,
            &join(path, "walls"),
            WallsMaterial::parse,
            "walls material",
        )?,
        boundaries: f64_list(require(map, "boundaries", path)?, &join(path, "boundaries"))?,
        floors: expect_u32(require(map, "floors", path)?, &join(path, "floors"))?,
        rooms: u32_list(require(map, "rooms", path)?, &join(path, "rooms"))?,
    })
}

fn world_from_value(value: &Value, path: &str) -> Result<WorldDefinition> {
    let map = expect_object(value, path)?;
    Ok(WorldDefinition {
        size: optional(map, "size", path, |v, p| Ok(expect_object(v, p)?.clone()))?,
        buildings: list_field(map, "buildings", path, building_from_value)?,
        regions_of_interest: list_field(map, "regionsOfInterest", path, f64_list)?,
    })
}

// ============================================================================
// LAYER CONFIGURATION
// ============================================================================

fn channel_from_value(value: &Value, path: &str) -> Result<ChannelConfig> {
    let map = expect_object(value, path)?;
    Ok(ChannelConfig {
        propagation_delay_model: optional(map, "propagationDelayModel", path, model_record_from_value)?,
        propagation_loss_model: optional(map, "propagationLossModel", path, model_record_from_value)?,
        spectrum_model: optional(map, "spectrumModel", path, model_record_from_value)?,
    })
}

fn phy_layer_from_value(value: &Value, path: &str) -> Result<PhyLayerConfig> {
    let map = expect_object(value, path)?;
    Ok(PhyLayerConfig {
        layer_type: closed_choice(
            require(map, "type", path)?,
            &join(path, "type"),
            LayerKind::parse,
            "layer type",
        )?,
        channel: optional(map, "channel", path, channel_from_value)?,
        standard: optional(map, "standard", path, expect_string)?,
        attributes: list_field(map, "attributes", path, |v, _| Ok(v.clone()))?,
    })
}

fn mac_layer_from_value(value: &Value, path: &str) -> Result<MacLayerConfig> {
    let map = expect_object(value, path)?;
    Ok(MacLayerConfig {
        layer_type: closed_choice(
            require(map, "type", path)?,
            &join(path, "type"),
            LayerKind::parse,
            "layer type",
        )?,
        ssid: optional(map, "ssid", path, expect_string)?,
        remote_station_manager: optional(map, "remoteStationManager", path, model_record_from_value)?,
    })
}

fn network_layer_from_value(value: &Value, path: &str) -> Result<NetworkLayerConfig> {
    let map = expect_object(value, path)?;
    Ok(NetworkLayerConfig {
        layer_type: closed_choice(
            require(map, "type", path)?,
            &join(path, "type"),
            NetworkKind::parse,
            "network layer type",
        )?,
        address: expect_string(require(map, "address", path)?, &join(path, "address"))?,
        mask: expect_string(require(map, "mask", path)?, &join(path, "mask"))?,
        gateway: expect_string(require(map, "gateway", path)?, &join(path, "gateway"))?,
    })
}

// ============================================================================
// NET DEVICES
// ============================================================================

fn lte_bitrate_from_value(value: &Value, path: &str) -> Result<LteBitrate> {
    let map = expect_object(value, path)?;
    Ok(LteBitrate {
        downlink: expect_f64(require(map, "downlink", path)?, &join(path, "downlink"))?,
        uplink: expect_f64(require(map, "uplink", path)?, &join(path, "uplink"))?,
    })
}

fn lte_bitrate_config_from_value(value: &Value, path: &str) -> Result<LteBitrateConfig> {
    let map = expect_object(value, path)?;
    Ok(LteBitrateConfig {
        guaranteed: lte_bitrate_from_value(
            require(map, "guaranteed", path)?,
            &join(path, "guaranteed"),
        )?,
        maximum: lte_bitrate_from_value(require(map, "maximum", path)?, &join(path, "maximum"))?,
    })
}

fn lte_bearer_from_value(value: &Value, path: &str) -> Result<LteBearer> {
    let map = expect_object(value, path)?;
    Ok(LteBearer {
        bearer_type: expect_string(require(map, "type", path)?, &join(path, "type"))?,
        bitrate: optional(map, "bitrate", path, lte_bitrate_config_from_value)?,
    })
}

fn net_device_from_value(value: &Value, path: &str) -> Result<NetDeviceConfig> {
    let map = expect_object(value, path)?;
    Ok(NetDeviceConfig {
        device_type: closed_choice(
            require(map, "type", path)?,
            &join(path, "type"),
            LayerKind::parse,
            "device type",
        )?,
        network_layer: optional(map, "networkLayer", path, expect_i64)?,
        mac_layer: optional(map, "macLayer", path, model_slot_from_value)?,
        role: optional(map, "role", path, |v, p| {
            closed_choice(v, p, LteRole::parse, "device role")
        })?,
        bearers: list_field(map, "bearers", path, lte_bearer_from_value)?,
        phy: optional(map, "phy", path, phy_local_from_value)?,
        antenna_model: optional(map, "antennaModel", path, model_record_from_value)?,
    })
}

// ============================================================================
// NODES
// ============================================================================

fn node_from_value(value: &Value, path: &str) -> Result<NodeConfig> {
    let map = expect_object(value, path)?;
    Ok(NodeConfig {
        net_devices: list_field(map, "netDevices", path, net_device_from_value)?,
        mobility_model: optional(map, "mobilityModel", path, model_slot_from_value)?,
        applications: list_field(map, "applications", path, model_record_from_value)?,
        network_layer: optional(map, "networkLayer", path, expect_i64)?,
        name: optional(map, "name", path, expect_string)?,
    })
}

fn drone_from_value(value: &Value, path: &str) -> Result<DroneConfig> {
    let map = expect_object(value, path)?;
    Ok(DroneConfig {
        node: node_from_value(value, path)?,
        mechanics: optional(map, "mechanics", path, model_record_from_value)?,
        battery: optional(map, "battery", path, model_record_from_value)?,
        peripherals: list_field(map, "peripherals", path, model_slot_from_value)?,
    })
}

// ============================================================================
// SCENARIO ROOT
// ============================================================================

/// Decode a whole scenario document from an in-memory JSON value.
pub fn scenario_from_value(value: &Value) -> Result<Scenario> {
    let path = "";
    let map = expect_object(value, "scenario")?;
    Ok(Scenario {
        name: expect_string(require(map, "name", path)?, "/name")?,
        results_path: expect_string(require(map, "resultsPath", path)?, "/resultsPath")?,
        duration: expect_f64(require(map, "duration", path)?, "/duration")?,
        log_on_file: expect_bool(require(map, "logOnFile", path)?, "/logOnFile")?,
        phy_layer: decode_list(require(map, "phyLayer", path)?, "/phyLayer", phy_layer_from_value)?,
        mac_layer: decode_list(require(map, "macLayer", path)?, "/macLayer", mac_layer_from_value)?,
        network_layer: decode_list(
            require(map, "networkLayer", path)?,
            "/networkLayer",
            network_layer_from_value,
        )?,
        dry_run: optional(map, "dryRun", path, expect_bool)?.unwrap_or(false),
        static_ns3_config: list_field(map, "staticNs3Config", path, static_ns3_config_from_value)?,
        world: optional(map, "world", path, world_from_value)?,
        drones: list_field(map, "drones", path, drone_from_value)?,
        zsps: list_field(map, "ZSPs", path, node_from_value)?,
        remotes: list_field(map, "remotes", path, node_from_value)?,
        nodes: list_field(map, "nodes", path, node_from_value)?,
        radio_map_parameters: match field(map, "radioMapParameters") {
            Some(v) => raw_list(v, "/radioMapParameters")?,
            None => Vec::new(),
        },
        log_components: list_field(map, "logComponents", path, expect_string)?,
        analytics: match field(map, "analytics") {
            Some(v) => raw_list(v, "/analytics")?,
            None => Vec::new(),
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_flight_point_rest_time_key() {
        let v = json!({"position": [1.0, 2.0, 3.0], "interest": 2, "restTime": 3.5});
        let fp = flight_point_from_value(&v, "").unwrap();
        assert_eq!(fp.position, vec![1.0, 2.0, 3.0]);
        assert_eq!(fp.interest, 2);
        assert_eq!(fp.rest_time, Some(3.5));
    }

    #[test]
    fn test_irs_patch_pascal_keys() {
        let v = json!({"Size": [2, 2], "PhaseX": 1.0, "PhaseY": -1.0});
        let patch = irs_patch_from_value(&v, "").unwrap();
        assert_eq!(patch.size, vec![2, 2]);
        assert_eq!(patch.phase_x, 1.0);
        assert_eq!(patch.phase_y, -1.0);
    }

    #[test]
    fn test_string_where_number_is_a_type_mismatch() {
        let v = json!({"position": [1.0], "interest": "high"});
        let err = flight_point_from_value(&v, "/flightPlan/0").unwrap_err();
        match err {
            ScenarioError::TypeMismatch { path, expected, found } => {
                assert_eq!(path, "/flightPlan/0/interest");
                assert_eq!(expected, "unsigned integer");
                assert_eq!(found, "string");
            }
            other => panic!("wrong error: {:?}", other),
        }
    }

    #[test]
    fn test_null_optional_is_absent() {
        let v = json!({"position": [0.0], "interest": 0, "restTime": null});
        let fp = flight_point_from_value(&v, "").unwrap();
        assert_eq!(fp.rest_time, None);
    }

    #[test]
    fn test_missing_required_field_is_schema_error() {
        let v = json!({"walls": "wood", "boundaries": [], "floors": 1, "rooms": [1, 1]});
        let err = building_from_value(&v, "/world/buildings/0").unwrap_err();
        match err {
            ScenarioError::Schema { path, .. } => {
                assert_eq!(path, "/world/buildings/0/type");
            }
            other => panic!("wrong error: {:?}", other),
        }
    }

    #[test]
    fn test_unknown_vocabulary_is_schema_error() {
        let v = json!({
            "type": "igloo",
            "walls": "wood",
            "boundaries": [],
            "floors": 1,
            "rooms": [1, 1]
        });
        assert!(matches!(
            building_from_value(&v, "").unwrap_err(),
            ScenarioError::Schema { .. }
        ));
    }

    #[test]
    fn test_model_record_empty_attribute_list() {
        let v = json!({"name": "ns3::SomeUnknownThing", "attributes": []});
        let rec = model_record_from_value(&v, "").unwrap();
        assert_eq!(rec.kind(), ModelKind::Generic);
        assert_eq!(rec.name(), "ns3::SomeUnknownThing");
        assert!(rec.extra().is_empty());
    }

    #[test]
    fn test_model_record_missing_discriminant() {
        let v = json!({"attributes": []});
        assert!(matches!(
            model_record_from_value(&v, "").unwrap_err(),
            ScenarioError::Schema { .. }
        ));
    }

    #[test]
    fn test_model_record_malformed_attribute_list() {
        let v = json!({"name": "ns3::Thing", "attributes": [{"label": "x"}]});
        assert!(matches!(
            model_record_from_value(&v, "").unwrap_err(),
            ScenarioError::Schema { .. }
        ));
        let v = json!({"name": "ns3::Thing", "attributes": 7});
        assert!(matches!(
            model_record_from_value(&v, "").unwrap_err(),
            ScenarioError::Schema { .. }
        ));
    }

    #[test]
    fn test_declared_and_unknown_attributes_split() {
        let v = json!({
            "name": "ns3::ConstantRateWifiManager",
            "attributes": [
                {"name": "DataMode", "value": "OfdmRate6Mbps"},
                {"name": "CustomX", "value": 42}
            ]
        });
        let rec = model_record_from_value(&v, "").unwrap();
        match &rec {
            ModelRecord::RemoteStationManager(m) => {
                assert_eq!(m.data_mode.as_deref(), Some("OfdmRate6Mbps"));
                assert_eq!(m.extra, vec![Attribute::new("CustomX", json!(42))]);
            }
            other => panic!("wrong variant: {:?}", other),
        }
    }

    #[test]
    fn test_ro_i_trigger_decode_override() {
        let v = json!({
            "name": "ns3::InputPeripheral",
            "attributes": [
                {"name": "RoITrigger", "value": [0, 1]},
                {"name": "DataRate", "value": 1024.0}
            ]
        });
        match model_record_from_value(&v, "").unwrap() {
            ModelRecord::InputPeripheral(m) => {
                assert_eq!(m.ro_i_trigger, Some(vec![0, 1]));
                assert_eq!(m.data_rate, 1024.0);
                assert!(m.extra.is_empty());
            }
            other => panic!("wrong variant: {:?}", other),
        }
    }

    #[test]
    fn test_nested_flight_plan_attribute() {
        let v = json!({
            "name": "ns3::ParametricSpeedDroneMobilityModel",
            "attributes": [
                {"name": "SpeedCoefficients", "value": [1.0, 0.5]},
                {"name": "FlightPlan", "value": [
                    {"position": [0.0, 0.0, 1.0], "interest": 0},
                    {"position": [5.0, 5.0, 1.0], "interest": 1, "restTime": 2.0}
                ]},
                {"name": "CurveStep", "value": 0.001}
            ]
        });
        match model_record_from_value(&v, "").unwrap() {
            ModelRecord::ParametricSpeedDroneMobility(m) => {
                assert_eq!(m.speed_coefficients, vec![1.0, 0.5]);
                assert_eq!(m.flight_plan.len(), 2);
                assert_eq!(m.flight_plan[1].rest_time, Some(2.0));
                assert_eq!(m.curve_step, 0.001);
            }
            other => panic!("wrong variant: {:?}", other),
        }
    }

    #[test]
    fn test_model_slot_raw_passthrough() {
        let slot = model_slot_from_value(&json!("ns3::SomethingFlat"), "").unwrap();
        assert_eq!(slot, ModelSlot::Raw(json!("ns3::SomethingFlat")));

        let slot = model_slot_from_value(
            &json!({"name": "ns3::ConstantPositionMobilityModel", "attributes": []}),
            "",
        )
        .unwrap();
        assert!(matches!(
            slot,
            ModelSlot::Model(ModelRecord::ConstantPositionMobility(_))
        ));
    }

    #[test]
    fn test_integer_accepted_for_float_field() {
        let v = json!({"position": [1, 2, 3], "interest": 0, "restTime": 3});
        let fp = flight_point_from_value(&v, "").unwrap();
        assert_eq!(fp.position, vec![1.0, 2.0, 3.0]);
        assert_eq!(fp.rest_time, Some(3.0));
    }
}
