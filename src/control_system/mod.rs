pub mod phase_machine;
pub mod traffic_light_controller;
