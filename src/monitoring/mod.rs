pub mod status_display;
pub mod telemetry;

pub use status_display::{print_status, render_status};
pub use telemetry::TelemetryRecorder;
