//! Build a small scenario in memory, save it, reload it, and show that the
//! round trip is exact. Run with `RUST_LOG=debug` to watch the codec work.

use drone_scenario::model::*;
use drone_scenario::{encode_pretty, io};

fn main() {
    env_logger::init();

    let mut scenario = Scenario {
        name: "demo-survey".to_string(),
        results_path: "../results/".to_string(),
        duration: 30.0,
        log_on_file: true,
        ..Default::default()
    };
    scenario.phy_layer.push(PhyLayerConfig {
        layer_type: LayerKind::Wifi,
        standard: Some("802.11n".to_string()),
        ..Default::default()
    });
    scenario.mac_layer.push(MacLayerConfig {
        layer_type: LayerKind::Wifi,
        ssid: Some("demo-net".to_string()),
        remote_station_manager: Some(ModelRecord::blank(
            ModelKind::RemoteStationManager,
            "ns3::ConstantRateWifiManager",
        )),
    });
    scenario.network_layer.push(NetworkLayerConfig {
        layer_type: NetworkKind::Ipv4,
        address: "10.1.0.0".to_string(),
        mask: "255.255.255.0".to_string(),
        gateway: "10.1.0.1".to_string(),
    });

    let mut mobility = ParametricSpeedDroneMobility {
        name: "ns3::ParametricSpeedDroneMobilityModel".to_string(),
        speed_coefficients: vec![1.0, 0.0],
        ..Default::default()
    };
    mobility.flight_plan.push(FlightPoint {
        position: vec![0.0, 0.0, 1.0],
        interest: 0,
        rest_time: None,
    });
    mobility.flight_plan.push(FlightPoint {
        position: vec![40.0, 40.0, 15.0],
        interest: 1,
        rest_time: Some(3.5),
    });

    scenario.drones.push(DroneConfig {
        node: NodeConfig {
            mobility_model: Some(ModelSlot::Model(
                ModelRecord::ParametricSpeedDroneMobility(mobility),
            )),
            ..Default::default()
        },
        mechanics: Some(ModelRecord::blank(ModelKind::DroneMechanics, "ns3::Drone")),
        battery: Some(ModelRecord::blank(
            ModelKind::LiIonEnergySource,
            "ns3::LiIonEnergySource",
        )),
        ..Default::default()
    });

    let path = std::env::temp_dir().join("drone_scenario_demo.json");
    io::save_scenario(&path, &scenario).expect("save failed");
    let reloaded = io::load_scenario(&path).expect("load failed");
    assert_eq!(scenario, reloaded, "round trip must be exact");

    println!("saved and reloaded {}", path.display());
    println!("{}", encode_pretty(&reloaded));
}
