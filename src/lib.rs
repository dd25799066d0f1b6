// lib.rs
pub mod config;
pub mod control_system;
pub mod error;
pub mod flow_analyzer;
pub mod global_variables;
pub mod intersection;
pub mod monitoring;
pub mod shared_data;
pub mod simulation_engine;

pub use control_system::traffic_light_controller::TrafficLightController;
pub use error::{ConfigError, ControllerError};
pub use intersection::{Axis, Direction, LightState, TimingConfig};
pub use shared_data::{IntersectionSnapshot, PhaseTransition, StatusRecord};
