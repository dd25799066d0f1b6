// traffic_controller_main.rs
use smart_traffic_controller::config::ControllerConfig;
use smart_traffic_controller::monitoring::{print_status, TelemetryRecorder};
use smart_traffic_controller::simulation_engine::sensor_simulator::{
    run_emergency_trigger, run_sensor_feed,
};
use smart_traffic_controller::TrafficLightController;
use std::error::Error;
use std::path::PathBuf;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let config_path = std::env::args().nth(1).map(PathBuf::from);
    let config = ControllerConfig::load(config_path.as_deref())?;
    let controller = TrafficLightController::new(config.timing())?;
    let telemetry = config.telemetry_csv.clone().map(TelemetryRecorder::new);

    println!("Smart Traffic Lighting System");
    println!("Initializing...");

    let sensor_feed = tokio::spawn(run_sensor_feed(
        controller.clone(),
        config.sensor_interval(),
        config.detection_probability,
    ));
    let emergency_trigger = tokio::spawn(run_emergency_trigger(
        controller.clone(),
        config.tick_interval(),
        config.emergency_probability,
        config.emergency_hold(),
    ));
    let control_loop = controller.clone().run_update_loop(
        config.tick_interval(),
        move |_transition, snapshot| {
            let record = snapshot.status_record();
            print_status(&record);
            if let Some(recorder) = &telemetry {
                recorder.record_or_warn(&record);
            }
        },
    );

    tokio::select! {
        _ = control_loop => {}
        result = tokio::signal::ctrl_c() => {
            result?;
            log::info!("Shutdown requested");
        }
    }

    sensor_feed.abort();
    emergency_trigger.abort();
    Ok(())
}
