pub mod density;
pub mod timing_planner;

// Re-export the scoring and planning entry points
pub use density::{axis_score, estimate, score, DensityScores};
pub use timing_planner::{plan, plan_for, GreenPlan};
