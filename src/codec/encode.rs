//! Tree -> JSON conversion.
//!
//! The mirror of `decode`: one `*_to_value` function per structural record
//! and a declared-attribute builder per model-record variant. Encoding is
//! deterministic (declaration order for declared fields and keys, insertion
//! order for the open mapping) and never fails for a well-formed tree.
//! Absent optionals are omitted, never written as null; empty lists are
//! written as `[]`.

use serde_json::{json, Map, Value};

use crate::model::*;

fn object() -> Map<String, Value> {
    Map::new()
}

fn insert_opt<T>(map: &mut Map<String, Value>, key: &str, value: &Option<T>, f: impl Fn(&T) -> Value) {
    if let Some(v) = value {
        map.insert(key.to_string(), f(v));
    }
}

fn f64_array(values: &[f64]) -> Value {
    Value::Array(values.iter().map(|v| json!(v)).collect())
}

// ============================================================================
// MODEL RECORDS
// ============================================================================

/// Push one attribute with the PascalCase spelling of `field`.
fn push_attr(out: &mut Vec<Attribute>, field: &str, value: Value) {
    out.push(Attribute::new(
        super::naming::snake_to_pascal(field),
        value,
    ));
}

fn push_attr_opt<T>(out: &mut Vec<Attribute>, field: &str, value: &Option<T>, f: impl Fn(&T) -> Value) {
    if let Some(v) = value {
        push_attr(out, field, f(v));
    }
}

/// The full attribute list of a model record: declared fields first, in
/// declaration order, then the open mapping in insertion order. Nothing is
/// ever dropped.
pub fn model_attributes(record: &ModelRecord) -> Vec<Attribute> {
    let mut out = Vec::new();
    match record {
        ModelRecord::Generic(_) => {}
        ModelRecord::ConstantPositionMobility(m) => {
            push_attr(&mut out, "position", f64_array(&m.position));
        }
        ModelRecord::ParametricSpeedDroneMobility(m) => {
            push_attr(&mut out, "speed_coefficients", f64_array(&m.speed_coefficients));
            push_attr(
                &mut out,
                "flight_plan",
                Value::Array(m.flight_plan.iter().map(flight_point_to_value).collect()),
            );
            push_attr(&mut out, "curve_step", json!(m.curve_step));
        }
        ModelRecord::RemoteStationManager(m) => {
            push_attr_opt(&mut out, "data_mode", &m.data_mode, |v| json!(v));
            push_attr_opt(&mut out, "control_mode", &m.control_mode, |v| json!(v));
            push_attr_opt(&mut out, "fragmentation_threshold", &m.fragmentation_threshold, |v| json!(v));
            push_attr_opt(&mut out, "rts_cts_threshold", &m.rts_cts_threshold, |v| json!(v));
            push_attr_opt(&mut out, "non_unicast_mode", &m.non_unicast_mode, |v| json!(v));
        }
        ModelRecord::Application(m) => {
            push_attr_opt(&mut out, "start_time", &m.start_time, |v| json!(v));
            push_attr_opt(&mut out, "stop_time", &m.stop_time, |v| json!(v));
            push_attr_opt(&mut out, "destination_ipv4_address", &m.destination_ipv4_address, |v| json!(v));
            push_attr_opt(&mut out, "remote_address", &m.remote_address, |v| json!(v));
            push_attr_opt(&mut out, "transmission_interval", &m.transmission_interval, |v| json!(v));
            push_attr_opt(&mut out, "interval", &m.interval, |v| json!(v));
            push_attr_opt(&mut out, "packet_size", &m.packet_size, |v| json!(v));
            push_attr_opt(&mut out, "payload_size", &m.payload_size, |v| json!(v));
        }
        ModelRecord::DroneMechanics(m) => {
            push_attr(&mut out, "mass", json!(m.mass));
            push_attr(&mut out, "rotor_disk_area", json!(m.rotor_disk_area));
            push_attr(&mut out, "drag_coefficient", json!(m.drag_coefficient));
        }
        ModelRecord::LiIonEnergySource(m) => {
            push_attr(
                &mut out,
                "li_ion_energy_source_initial_energy_j",
                json!(m.li_ion_energy_source_initial_energy_j),
            );
            push_attr(
                &mut out,
                "li_ion_energy_low_battery_threshold",
                json!(m.li_ion_energy_low_battery_threshold),
            );
            push_attr_opt(&mut out, "periodic_energy_update_interval", &m.periodic_energy_update_interval, |v| json!(v));
        }
        ModelRecord::Peripheral(m) => {
            push_attr(&mut out, "power_consumption", f64_array(&m.power_consumption));
            push_attr_opt(&mut out, "ro_i_trigger", &m.ro_i_trigger, |v| json!(v));
        }
        ModelRecord::StoragePeripheral(m) => {
            push_attr(&mut out, "power_consumption", f64_array(&m.power_consumption));
            push_attr_opt(&mut out, "ro_i_trigger", &m.ro_i_trigger, |v| json!(v));
            push_attr(&mut out, "capacity", json!(m.capacity));
        }
        ModelRecord::InputPeripheral(m) => {
            push_attr(&mut out, "power_consumption", f64_array(&m.power_consumption));
            push_attr_opt(&mut out, "ro_i_trigger", &m.ro_i_trigger, |v| json!(v));
            push_attr(&mut out, "data_rate", json!(m.data_rate));
            push_attr_opt(&mut out, "has_storage", &m.has_storage, |v| json!(v));
        }
        ModelRecord::IrsPeripheral(m) => {
            push_attr(&mut out, "power_consumption", f64_array(&m.power_consumption));
            push_attr_opt(&mut out, "ro_i_trigger", &m.ro_i_trigger, |v| json!(v));
            push_attr(&mut out, "rows", json!(m.rows));
            push_attr(&mut out, "columns", json!(m.columns));
            push_attr(&mut out, "pru_x", json!(m.pru_x));
            push_attr(&mut out, "pru_y", json!(m.pru_y));
            push_attr(&mut out, "roto_axis", json!(m.roto_axis));
            push_attr(&mut out, "roto_angles", f64_array(&m.roto_angles));
            push_attr(
                &mut out,
                "patches",
                Value::Array(m.patches.iter().map(irs_patch_to_value).collect()),
            );
        }
    }
    out.extend(record.extra().iter().cloned());
    out
}

/// Encode a model record into its two-key wire shape.
pub fn model_record_to_value(record: &ModelRecord) -> Value {
    let mut map = object();
    map.insert("name".to_string(), json!(record.name()));
    map.insert(
        "attributes".to_string(),
        Value::Array(
            model_attributes(record)
                .iter()
                .map(|a| json!({"name": a.name, "value": a.value}))
                .collect(),
        ),
    );
    Value::Object(map)
}

pub fn model_slot_to_value(slot: &ModelSlot) -> Value {
    match slot {
        ModelSlot::Model(record) => model_record_to_value(record),
        ModelSlot::Raw(value) => value.clone(),
    }
}

// ============================================================================
// LEAF RECORDS
// ============================================================================

pub fn flight_point_to_value(point: &FlightPoint) -> Value {
    let mut map = object();
    map.insert("position".to_string(), f64_array(&point.position));
    map.insert("interest".to_string(), json!(point.interest));
    insert_opt(&mut map, "restTime", &point.rest_time, |v| json!(v));
    Value::Object(map)
}

pub fn irs_patch_to_value(patch: &IrsPatch) -> Value {
    json!({
        "Size": patch.size,
        "PhaseX": patch.phase_x,
        "PhaseY": patch.phase_y,
    })
}

fn phy_local_to_value(phy: &PhyLocalConfig) -> Value {
    let mut map = object();
    insert_opt(&mut map, "TxPower", &phy.tx_power, |v| json!(v));
    insert_opt(&mut map, "EnableUplinkPowerControl", &phy.enable_uplink_power_control, |v| json!(v));
    Value::Object(map)
}

fn static_ns3_config_to_value(cfg: &StaticNs3Config) -> Value {
    json!({"name": cfg.name, "value": cfg.value})
}

// ============================================================================
// WORLD
// ============================================================================

fn building_to_value(building: &Building) -> Value {
    json!({
        "type": building.building_type.as_str(),
        "walls": building.walls.as_str(),
        "boundaries": building.boundaries,
        "floors": building.floors,
        "rooms": building.rooms,
    })
}

fn world_to_value(world: &WorldDefinition) -> Value {
    let mut map = object();
    insert_opt(&mut map, "size", &world.size, |v| Value::Object(v.clone()));
    map.insert(
        "buildings".to_string(),
        Value::Array(world.buildings.iter().map(building_to_value).collect()),
    );
    map.insert(
        "regionsOfInterest".to_string(),
        Value::Array(world.regions_of_interest.iter().map(|r| f64_array(r)).collect()),
    );
    Value::Object(map)
}

// ============================================================================
// LAYER CONFIGURATION
// ============================================================================

fn channel_to_value(channel: &ChannelConfig) -> Value {
    let mut map = object();
    insert_opt(&mut map, "propagationDelayModel", &channel.propagation_delay_model, model_record_to_value);
    insert_opt(&mut map, "propagationLossModel", &channel.propagation_loss_model, model_record_to_value);
    insert_opt(&mut map, "spectrumModel", &channel.spectrum_model, model_record_to_value);
    Value::Object(map)
}

fn phy_layer_to_value(layer: &PhyLayerConfig) -> Value {
    let mut map = object();
    map.insert("type".to_string(), json!(layer.layer_type.as_str()));
    insert_opt(&mut map, "channel", &layer.channel, channel_to_value);
    insert_opt(&mut map, "standard", &layer.standard, |v| json!(v));
    map.insert("attributes".to_string(), Value::Array(layer.attributes.clone()));
    Value::Object(map)
}

fn mac_layer_to_value(layer: &MacLayerConfig) -> Value {
    let mut map = object();
    map.insert("type".to_string(), json!(layer.layer_type.as_str()));
    insert_opt(&mut map, "ssid", &layer.ssid, |v| json!(v));
    insert_opt(&mut map, "remoteStationManager", &layer.remote_station_manager, model_record_to_value);
    Value::Object(map)
}

fn network_layer_to_value(layer: &NetworkLayerConfig) -> Value {
    json!({
        "type": layer.layer_type.as_str(),
        "address": layer.address,
        "mask": layer.mask,
        "gateway": layer.gateway,
    })
}

// ============================================================================
// NET DEVICES
// ============================================================================

fn lte_bitrate_to_value(bitrate: &LteBitrate) -> Value {
    json!({"downlink": bitrate.downlink, "uplink": bitrate.uplink})
}

fn lte_bitrate_config_to_value(cfg: &LteBitrateConfig) -> Value {
    let mut map = object();
    map.insert("guaranteed".to_string(), lte_bitrate_to_value(&cfg.guaranteed));
    map.insert("maximum".to_string(), lte_bitrate_to_value(&cfg.maximum));
    Value::Object(map)
}

fn lte_bearer_to_value(bearer: &LteBearer) -> Value {
    let mut map = object();
    map.insert("type".to_string(), json!(bearer.bearer_type));
    insert_opt(&mut map, "bitrate", &bearer.bitrate, lte_bitrate_config_to_value);
    Value::Object(map)
}

fn net_device_to_value(device: &NetDeviceConfig) -> Value {
    let mut map = object();
    map.insert("type".to_string(), json!(device.device_type.as_str()));
    insert_opt(&mut map, "networkLayer", &device.network_layer, |v| json!(v));
    insert_opt(&mut map, "macLayer", &device.mac_layer, model_slot_to_value);
    insert_opt(&mut map, "role", &device.role, |v| json!(v.as_str()));
    map.insert(
        "bearers".to_string(),
        Value::Array(device.bearers.iter().map(lte_bearer_to_value).collect()),
    );
    insert_opt(&mut map, "phy", &device.phy, phy_local_to_value);
    insert_opt(&mut map, "antennaModel", &device.antenna_model, model_record_to_value);
    Value::Object(map)
}

// ============================================================================
// NODES
// ============================================================================

fn node_fields(node: &NodeConfig, map: &mut Map<String, Value>) {
    map.insert(
        "netDevices".to_string(),
        Value::Array(node.net_devices.iter().map(net_device_to_value).collect()),
    );
    insert_opt(map, "mobilityModel", &node.mobility_model, model_slot_to_value);
    map.insert(
        "applications".to_string(),
        Value::Array(node.applications.iter().map(model_record_to_value).collect()),
    );
    insert_opt(map, "networkLayer", &node.network_layer, |v| json!(v));
    insert_opt(map, "name", &node.name, |v| json!(v));
}

fn node_to_value(node: &NodeConfig) -> Value {
    let mut map = object();
    node_fields(node, &mut map);
    Value::Object(map)
}

fn drone_to_value(drone: &DroneConfig) -> Value {
    let mut map = object();
    node_fields(&drone.node, &mut map);
    insert_opt(&mut map, "mechanics", &drone.mechanics, model_record_to_value);
    insert_opt(&mut map, "battery", &drone.battery, model_record_to_value);
    map.insert(
        "peripherals".to_string(),
        Value::Array(drone.peripherals.iter().map(model_slot_to_value).collect()),
    );
    Value::Object(map)
}

// ============================================================================
// SCENARIO ROOT
// ============================================================================

/// Encode a whole scenario tree into an in-memory JSON value.
pub fn scenario_to_value(scenario: &Scenario) -> Value {
    let mut map = object();
    map.insert("name".to_string(), json!(scenario.name));
    map.insert("resultsPath".to_string(), json!(scenario.results_path));
    map.insert("duration".to_string(), json!(scenario.duration));
    map.insert("logOnFile".to_string(), json!(scenario.log_on_file));
    map.insert(
        "phyLayer".to_string(),
        Value::Array(scenario.phy_layer.iter().map(phy_layer_to_value).collect()),
    );
    map.insert(
        "macLayer".to_string(),
        Value::Array(scenario.mac_layer.iter().map(mac_layer_to_value).collect()),
    );
    map.insert(
        "networkLayer".to_string(),
        Value::Array(scenario.network_layer.iter().map(network_layer_to_value).collect()),
    );
    map.insert("dryRun".to_string(), json!(scenario.dry_run));
    map.insert(
        "staticNs3Config".to_string(),
        Value::Array(scenario.static_ns3_config.iter().map(static_ns3_config_to_value).collect()),
    );
    insert_opt(&mut map, "world", &scenario.world, world_to_value);
    map.insert(
        "drones".to_string(),
        Value::Array(scenario.drones.iter().map(drone_to_value).collect()),
    );
    map.insert(
        "ZSPs".to_string(),
        Value::Array(scenario.zsps.iter().map(node_to_value).collect()),
    );
    map.insert(
        "remotes".to_string(),
        Value::Array(scenario.remotes.iter().map(node_to_value).collect()),
    );
    map.insert(
        "nodes".to_string(),
        Value::Array(scenario.nodes.iter().map(node_to_value).collect()),
    );
    map.insert(
        "radioMapParameters".to_string(),
        Value::Array(scenario.radio_map_parameters.clone()),
    );
    map.insert(
        "logComponents".to_string(),
        json!(scenario.log_components),
    );
    map.insert("analytics".to_string(), Value::Array(scenario.analytics.clone()));
    Value::Object(map)
}
