//! Scenario data model.
//!
//! The in-memory tree mirrors the JSON document consumed by the ns-3 based
//! simulation engine. Two families of records exist:
//!
//! - **Structural records** (fixed shape): the scenario root, world,
//!   layer configurations, nodes, devices and small leaf records. Their
//!   JSON keys follow camelCase with a handful of literal exceptions.
//! - **Model records** (extensible): engine modules encoded as
//!   `{"name": <discriminant>, "attributes": [{name, value}, ...]}`. Each
//!   variant carries its declared typed fields plus an insertion-ordered
//!   open mapping (`extra`) for attributes it does not recognize, so no
//!   data is ever lost on a round trip.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

// ============================================================================
// ATTRIBUTES
// ============================================================================

/// One wire attribute of a model record: a `{name, value}` pair.
///
/// `name` keeps its original wire spelling (PascalCase); translation to an
/// internal field identifier happens only during decode.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Attribute {
    pub name: String,
    pub value: Value,
}

impl Attribute {
    pub fn new(name: impl Into<String>, value: Value) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }
}

// ============================================================================
// CLOSED-CHOICE VOCABULARIES
// ============================================================================

/// Building occupancy class.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BuildingType {
    #[default]
    Residential,
    Office,
    Commercial,
}

impl BuildingType {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Residential => "residential",
            Self::Office => "office",
            Self::Commercial => "commercial",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "residential" => Some(Self::Residential),
            "office" => Some(Self::Office),
            "commercial" => Some(Self::Commercial),
            _ => None,
        }
    }
}

/// Wall material of a building, as understood by the propagation models.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum WallsMaterial {
    #[default]
    Wood,
    ConcreteWithWindows,
    ConcreteWithoutWindows,
    StoneBlocks,
}

impl WallsMaterial {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Wood => "wood",
            Self::ConcreteWithWindows => "concreteWithWindows",
            Self::ConcreteWithoutWindows => "concreteWithoutWindows",
            Self::StoneBlocks => "stoneBlocks",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "wood" => Some(Self::Wood),
            "concreteWithWindows" => Some(Self::ConcreteWithWindows),
            "concreteWithoutWindows" => Some(Self::ConcreteWithoutWindows),
            "stoneBlocks" => Some(Self::StoneBlocks),
            _ => None,
        }
    }
}

/// Radio stack family of a layer or device.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LayerKind {
    #[default]
    Wifi,
    Lte,
}

impl LayerKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Wifi => "wifi",
            Self::Lte => "lte",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "wifi" => Some(Self::Wifi),
            "lte" => Some(Self::Lte),
            _ => None,
        }
    }
}

/// Network layer family (only IPv4 today).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum NetworkKind {
    #[default]
    Ipv4,
}

impl NetworkKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Ipv4 => "ipv4",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "ipv4" => Some(Self::Ipv4),
            _ => None,
        }
    }
}

/// Role of an LTE net device.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LteRole {
    #[default]
    Ue,
    Enb,
}

impl LteRole {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Ue => "UE",
            Self::Enb => "eNB",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "UE" => Some(Self::Ue),
            "eNB" => Some(Self::Enb),
            _ => None,
        }
    }
}

// ============================================================================
// WORLD
// ============================================================================

/// A physical obstacle in the simulated world.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Building {
    pub building_type: BuildingType,
    pub walls: WallsMaterial,
    /// Axis-aligned bounds: [x_min, x_max, y_min, y_max, z_min, z_max].
    pub boundaries: Vec<f64>,
    pub floors: u32,
    /// Room grid: [rooms_x, rooms_y].
    pub rooms: Vec<u32>,
}

/// Container for the physical objects of the scenario.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WorldDefinition {
    /// Open string-keyed size descriptor, passed through untouched.
    pub size: Option<Map<String, Value>>,
    pub buildings: Vec<Building>,
    /// Each region is a flat coordinate list.
    pub regions_of_interest: Vec<Vec<f64>>,
}

// ============================================================================
// GLOBAL LAYER CONFIGURATION
// ============================================================================

/// Propagation channel models of a physical layer.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChannelConfig {
    pub propagation_delay_model: Option<ModelRecord>,
    pub propagation_loss_model: Option<ModelRecord>,
    pub spectrum_model: Option<ModelRecord>,
}

/// One global physical-layer definition.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PhyLayerConfig {
    pub layer_type: LayerKind,
    pub channel: Option<ChannelConfig>,
    pub standard: Option<String>,
    /// Raw engine attributes, passed through untouched.
    pub attributes: Vec<Value>,
}

/// One global MAC-layer definition.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MacLayerConfig {
    pub layer_type: LayerKind,
    pub ssid: Option<String>,
    pub remote_station_manager: Option<ModelRecord>,
}

/// One global IP-layer definition.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NetworkLayerConfig {
    pub layer_type: NetworkKind,
    pub address: String,
    pub mask: String,
    pub gateway: String,
}

/// A verbatim ns-3 static configuration entry.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StaticNs3Config {
    pub name: String,
    pub value: String,
}

// ============================================================================
// NET DEVICES
// ============================================================================

/// Guaranteed or maximum LTE bitrate, in downlink/uplink pairs.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LteBitrate {
    pub downlink: f64,
    pub uplink: f64,
}

/// GBR/MBR bitrate envelope of an LTE bearer.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LteBitrateConfig {
    pub guaranteed: LteBitrate,
    pub maximum: LteBitrate,
}

/// LTE QoS bearer.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LteBearer {
    pub bearer_type: String,
    pub bitrate: Option<LteBitrateConfig>,
}

/// Node-local physical-layer override. Encodes with PascalCase keys,
/// unlike every other structural record.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PhyLocalConfig {
    pub tx_power: Option<f64>,
    pub enable_uplink_power_control: Option<bool>,
}

/// A network interface attached to a node.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NetDeviceConfig {
    pub device_type: LayerKind,
    /// Index into the global network-layer list, when bound per device.
    pub network_layer: Option<i64>,
    pub mac_layer: Option<ModelSlot>,
    pub role: Option<LteRole>,
    pub bearers: Vec<LteBearer>,
    pub phy: Option<PhyLocalConfig>,
    pub antenna_model: Option<ModelRecord>,
}

// ============================================================================
// NODES
// ============================================================================

/// A generic network node (ZSP, remote, plain node).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NodeConfig {
    pub net_devices: Vec<NetDeviceConfig>,
    pub mobility_model: Option<ModelSlot>,
    pub applications: Vec<ModelRecord>,
    /// Index into the global network-layer list, when bound per node.
    pub network_layer: Option<i64>,
    pub name: Option<String>,
}

/// A drone: a node extended with mechanics, energy and peripherals.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DroneConfig {
    pub node: NodeConfig,
    pub mechanics: Option<ModelRecord>,
    pub battery: Option<ModelRecord>,
    pub peripherals: Vec<ModelSlot>,
}

// ============================================================================
// FLIGHT PLAN AND IRS PATCHES
// ============================================================================

/// One waypoint of a drone flight plan.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FlightPoint {
    /// [x, y, z] in world coordinates.
    pub position: Vec<f64>,
    /// Interest level used by the trajectory generator.
    pub interest: u32,
    /// Hover time at this point, in seconds. JSON key: `restTime`.
    pub rest_time: Option<f64>,
}

/// One patch of an intelligent reflective surface.
/// JSON keys: `Size`, `PhaseX`, `PhaseY`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct IrsPatch {
    pub size: Vec<i64>,
    pub phase_x: f64,
    pub phase_y: f64,
}

// ============================================================================
// MODEL RECORDS
// ============================================================================

/// Discriminant-free tag naming a concrete model-record variant.
///
/// Used by the resolver's dispatch table and by the editor's
/// default-instance factory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModelKind {
    Generic,
    ConstantPositionMobility,
    ParametricSpeedDroneMobility,
    RemoteStationManager,
    Application,
    DroneMechanics,
    LiIonEnergySource,
    Peripheral,
    StoragePeripheral,
    InputPeripheral,
    IrsPeripheral,
}

/// Passthrough model record: no declared fields, every attribute lives in
/// the open mapping. The lossless fallback for unrecognized discriminants.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GenericModel {
    pub name: String,
    pub extra: Vec<Attribute>,
}

/// Stationary mobility model.
#[derive(Debug, Clone, PartialEq)]
pub struct ConstantPositionMobility {
    pub name: String,
    pub position: Vec<f64>,
    pub extra: Vec<Attribute>,
}

impl Default for ConstantPositionMobility {
    fn default() -> Self {
        Self {
            name: String::new(),
            position: vec![0.0, 0.0, 0.0],
            extra: Vec::new(),
        }
    }
}

/// Drone mobility driven by a parametric speed curve over a flight plan.
#[derive(Debug, Clone, PartialEq)]
pub struct ParametricSpeedDroneMobility {
    pub name: String,
    pub speed_coefficients: Vec<f64>,
    pub flight_plan: Vec<FlightPoint>,
    pub curve_step: f64,
    pub extra: Vec<Attribute>,
}

impl Default for ParametricSpeedDroneMobility {
    fn default() -> Self {
        Self {
            name: String::new(),
            speed_coefficients: Vec::new(),
            flight_plan: Vec::new(),
            curve_step: 0.01,
            extra: Vec::new(),
        }
    }
}

/// Wi-Fi remote station manager.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RemoteStationManager {
    pub name: String,
    pub data_mode: Option<String>,
    pub control_mode: Option<String>,
    pub fragmentation_threshold: Option<String>,
    pub rts_cts_threshold: Option<String>,
    pub non_unicast_mode: Option<String>,
    pub extra: Vec<Attribute>,
}

/// Traffic-generating network application.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ApplicationModel {
    pub name: String,
    pub start_time: Option<f64>,
    pub stop_time: Option<f64>,
    pub destination_ipv4_address: Option<String>,
    pub remote_address: Option<String>,
    pub transmission_interval: Option<f64>,
    pub interval: Option<f64>,
    pub packet_size: Option<u64>,
    pub payload_size: Option<u64>,
    pub extra: Vec<Attribute>,
}

/// Physical properties of a drone airframe.
#[derive(Debug, Clone, PartialEq)]
pub struct DroneMechanics {
    pub name: String,
    pub mass: f64,
    pub rotor_disk_area: f64,
    pub drag_coefficient: f64,
    pub extra: Vec<Attribute>,
}

impl Default for DroneMechanics {
    fn default() -> Self {
        Self {
            name: String::new(),
            mass: 1.0,
            rotor_disk_area: 0.2,
            drag_coefficient: 0.1,
            extra: Vec::new(),
        }
    }
}

/// Li-ion battery energy source.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LiIonEnergySource {
    pub name: String,
    pub li_ion_energy_source_initial_energy_j: f64,
    pub li_ion_energy_low_battery_threshold: f64,
    pub periodic_energy_update_interval: Option<String>,
    pub extra: Vec<Attribute>,
}

/// Generic on-board peripheral.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PeripheralModel {
    pub name: String,
    /// Consumption per power state, in Watts.
    pub power_consumption: Vec<f64>,
    /// Region-of-interest indices that switch the peripheral on.
    pub ro_i_trigger: Option<Vec<i64>>,
    pub extra: Vec<Attribute>,
}

/// On-board storage peripheral.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StoragePeripheral {
    pub name: String,
    pub power_consumption: Vec<f64>,
    pub ro_i_trigger: Option<Vec<i64>>,
    /// Capacity in bits.
    pub capacity: u64,
    pub extra: Vec<Attribute>,
}

/// Sensor/input peripheral.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InputPeripheral {
    pub name: String,
    pub power_consumption: Vec<f64>,
    pub ro_i_trigger: Option<Vec<i64>>,
    pub data_rate: f64,
    pub has_storage: Option<bool>,
    pub extra: Vec<Attribute>,
}

/// Intelligent reflective surface peripheral.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct IrsPeripheral {
    pub name: String,
    pub power_consumption: Vec<f64>,
    pub ro_i_trigger: Option<Vec<i64>>,
    pub rows: u32,
    pub columns: u32,
    pub pru_x: f64,
    pub pru_y: f64,
    pub roto_axis: Vec<String>,
    pub roto_angles: Vec<f64>,
    pub patches: Vec<IrsPatch>,
    pub extra: Vec<Attribute>,
}

/// A model record: one engine module with a discriminant name, declared
/// typed fields and an open mapping for everything else.
#[derive(Debug, Clone, PartialEq)]
pub enum ModelRecord {
    Generic(GenericModel),
    ConstantPositionMobility(ConstantPositionMobility),
    ParametricSpeedDroneMobility(ParametricSpeedDroneMobility),
    RemoteStationManager(RemoteStationManager),
    Application(ApplicationModel),
    DroneMechanics(DroneMechanics),
    LiIonEnergySource(LiIonEnergySource),
    Peripheral(PeripheralModel),
    StoragePeripheral(StoragePeripheral),
    InputPeripheral(InputPeripheral),
    IrsPeripheral(IrsPeripheral),
}

impl ModelRecord {
    /// Fabricate a minimally valid blank record of the given kind.
    ///
    /// Declared fields take their defaults; the open mapping starts empty.
    /// This is the default-instance constructor the editor uses when the
    /// user inserts a new entry.
    pub fn blank(kind: ModelKind, name: impl Into<String>) -> Self {
        let name = name.into();
        match kind {
            ModelKind::Generic => Self::Generic(GenericModel {
                name,
                ..Default::default()
            }),
            ModelKind::ConstantPositionMobility => {
                Self::ConstantPositionMobility(ConstantPositionMobility {
                    name,
                    ..Default::default()
                })
            }
            ModelKind::ParametricSpeedDroneMobility => {
                Self::ParametricSpeedDroneMobility(ParametricSpeedDroneMobility {
                    name,
                    ..Default::default()
                })
            }
            ModelKind::RemoteStationManager => Self::RemoteStationManager(RemoteStationManager {
                name,
                ..Default::default()
            }),
            ModelKind::Application => Self::Application(ApplicationModel {
                name,
                ..Default::default()
            }),
            ModelKind::DroneMechanics => Self::DroneMechanics(DroneMechanics {
                name,
                ..Default::default()
            }),
            ModelKind::LiIonEnergySource => Self::LiIonEnergySource(LiIonEnergySource {
                name,
                ..Default::default()
            }),
            ModelKind::Peripheral => Self::Peripheral(PeripheralModel {
                name,
                ..Default::default()
            }),
            ModelKind::StoragePeripheral => Self::StoragePeripheral(StoragePeripheral {
                name,
                ..Default::default()
            }),
            ModelKind::InputPeripheral => Self::InputPeripheral(InputPeripheral {
                name,
                ..Default::default()
            }),
            ModelKind::IrsPeripheral => Self::IrsPeripheral(IrsPeripheral {
                name,
                ..Default::default()
            }),
        }
    }

    /// The variant tag of this record.
    pub fn kind(&self) -> ModelKind {
        match self {
            Self::Generic(_) => ModelKind::Generic,
            Self::ConstantPositionMobility(_) => ModelKind::ConstantPositionMobility,
            Self::ParametricSpeedDroneMobility(_) => ModelKind::ParametricSpeedDroneMobility,
            Self::RemoteStationManager(_) => ModelKind::RemoteStationManager,
            Self::Application(_) => ModelKind::Application,
            Self::DroneMechanics(_) => ModelKind::DroneMechanics,
            Self::LiIonEnergySource(_) => ModelKind::LiIonEnergySource,
            Self::Peripheral(_) => ModelKind::Peripheral,
            Self::StoragePeripheral(_) => ModelKind::StoragePeripheral,
            Self::InputPeripheral(_) => ModelKind::InputPeripheral,
            Self::IrsPeripheral(_) => ModelKind::IrsPeripheral,
        }
    }

    /// The discriminant string, e.g. `ns3::ConstantPositionMobilityModel`.
    pub fn name(&self) -> &str {
        match self {
            Self::Generic(m) => &m.name,
            Self::ConstantPositionMobility(m) => &m.name,
            Self::ParametricSpeedDroneMobility(m) => &m.name,
            Self::RemoteStationManager(m) => &m.name,
            Self::Application(m) => &m.name,
            Self::DroneMechanics(m) => &m.name,
            Self::LiIonEnergySource(m) => &m.name,
            Self::Peripheral(m) => &m.name,
            Self::StoragePeripheral(m) => &m.name,
            Self::InputPeripheral(m) => &m.name,
            Self::IrsPeripheral(m) => &m.name,
        }
    }

    /// The open mapping of unrecognized attributes, in arrival order.
    pub fn extra(&self) -> &[Attribute] {
        match self {
            Self::Generic(m) => &m.extra,
            Self::ConstantPositionMobility(m) => &m.extra,
            Self::ParametricSpeedDroneMobility(m) => &m.extra,
            Self::RemoteStationManager(m) => &m.extra,
            Self::Application(m) => &m.extra,
            Self::DroneMechanics(m) => &m.extra,
            Self::LiIonEnergySource(m) => &m.extra,
            Self::Peripheral(m) => &m.extra,
            Self::StoragePeripheral(m) => &m.extra,
            Self::InputPeripheral(m) => &m.extra,
            Self::IrsPeripheral(m) => &m.extra,
        }
    }

    pub(crate) fn extra_mut(&mut self) -> &mut Vec<Attribute> {
        match self {
            Self::Generic(m) => &mut m.extra,
            Self::ConstantPositionMobility(m) => &mut m.extra,
            Self::ParametricSpeedDroneMobility(m) => &mut m.extra,
            Self::RemoteStationManager(m) => &mut m.extra,
            Self::Application(m) => &mut m.extra,
            Self::DroneMechanics(m) => &mut m.extra,
            Self::LiIonEnergySource(m) => &mut m.extra,
            Self::Peripheral(m) => &mut m.extra,
            Self::StoragePeripheral(m) => &mut m.extra,
            Self::InputPeripheral(m) => &mut m.extra,
            Self::IrsPeripheral(m) => &mut m.extra,
        }
    }
}

/// A polymorphic slot: a resolved model record, or a raw JSON value passed
/// through untouched when the wire value is not model-shaped.
#[derive(Debug, Clone, PartialEq)]
pub enum ModelSlot {
    Model(ModelRecord),
    Raw(Value),
}

// ============================================================================
// SCENARIO ROOT
// ============================================================================

/// Root of a scenario document.
///
/// Owns every nested list exclusively; the tree is a strict forest. The
/// codec treats `name`, `results_path`, `duration`, `log_on_file` and the
/// three layer lists as required on decode.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Scenario {
    pub name: String,
    pub results_path: String,
    pub duration: f64,
    pub log_on_file: bool,
    pub phy_layer: Vec<PhyLayerConfig>,
    pub mac_layer: Vec<MacLayerConfig>,
    pub network_layer: Vec<NetworkLayerConfig>,
    pub dry_run: bool,
    /// JSON key kept verbatim: `staticNs3Config`.
    pub static_ns3_config: Vec<StaticNs3Config>,
    pub world: Option<WorldDefinition>,
    pub drones: Vec<DroneConfig>,
    /// JSON key kept verbatim: `ZSPs`.
    pub zsps: Vec<NodeConfig>,
    pub remotes: Vec<NodeConfig>,
    pub nodes: Vec<NodeConfig>,
    /// Mixed string/number parameters, passed through untouched.
    pub radio_map_parameters: Vec<Value>,
    pub log_components: Vec<String>,
    pub analytics: Vec<Value>,
}
