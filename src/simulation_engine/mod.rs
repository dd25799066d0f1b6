// simulation_engine/mod.rs
pub mod sensor_simulator;
