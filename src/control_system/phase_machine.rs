//! One-tick phase transitions over an exclusively borrowed [`IntersectionState`].
//!
//! Every function here runs with the state lock held, so each transition
//! (sensor read, density, plan, four-light commit) is observed as one step.

use crate::flow_analyzer::{estimate, plan_for};
use crate::intersection::{Axis, ControlPhase, Direction, IntersectionState};
use crate::shared_data::PhaseTransition;
use std::time::{Duration, Instant};

/// Advances the machine by one tick. Returns the transition made, if any.
///
/// Checked in order: emergency entry, emergency exit, first start, green
/// expiry into yellow, yellow expiry into the opposite green.
pub fn advance(state: &mut IntersectionState, now: Instant) -> Option<PhaseTransition> {
    let from = state.phase;

    if state.emergency_active {
        if from == ControlPhase::Emergency {
            return None;
        }
        return Some(enter_emergency(state, now));
    }

    match from {
        ControlPhase::Emergency => {
            log::info!("Emergency cleared, resuming normal cycle with N/S green");
            Some(start_green(state, Axis::NorthSouth, now))
        }
        ControlPhase::Idle => Some(start_green(state, Axis::NorthSouth, now)),
        ControlPhase::NsGreen => end_green(state, Axis::NorthSouth, now),
        ControlPhase::EwGreen => end_green(state, Axis::EastWest, now),
        ControlPhase::NsYellow => end_yellow(state, Axis::NorthSouth, now),
        ControlPhase::EwYellow => end_yellow(state, Axis::EastWest, now),
    }
}

fn elapsed_in_phase(state: &IntersectionState, now: Instant) -> Duration {
    state
        .last_phase_change_at
        .map_or(Duration::ZERO, |changed| now.saturating_duration_since(changed))
}

// Never moves the phase clock backwards.
fn mark_phase_change(state: &mut IntersectionState, now: Instant) -> Instant {
    let at = match state.last_phase_change_at {
        Some(previous) if previous > now => previous,
        _ => now,
    };
    state.last_phase_change_at = Some(at);
    at
}

fn enter_emergency(state: &mut IntersectionState, now: Instant) -> PhaseTransition {
    let from = state.phase;
    state.apply_phase(ControlPhase::Emergency);
    let at = mark_phase_change(state, now);
    log::warn!("EMERGENCY MODE: N/S forced GREEN, E/W RED (was {})", from);
    PhaseTransition {
        from,
        to: ControlPhase::Emergency,
        at,
        plan: None,
    }
}

/// Gives `axis` right of way and re-plans green time from the current sensor readings.
fn start_green(state: &mut IntersectionState, axis: Axis, now: Instant) -> PhaseTransition {
    let from = state.phase;
    let scores = estimate(&state.sensors);
    let plan = plan_for(scores, &state.config);
    for direction in Direction::ALL {
        state.lights[direction].green_duration = Some(plan.for_direction(direction));
    }
    let to = ControlPhase::green_for(axis);
    state.apply_phase(to);
    let at = mark_phase_change(state, now);

    log::debug!(
        "Density N/S:{} E/W:{} -> plan N/S:{}s E/W:{}s",
        scores.north_south,
        scores.east_west,
        plan.north.as_secs(),
        plan.east.as_secs()
    );
    log::info!(
        "Switching {} -> {}: {} green for {}s",
        from,
        to,
        axis,
        plan.for_axis(axis).as_secs()
    );
    PhaseTransition {
        from,
        to,
        at,
        plan: Some(plan),
    }
}

fn end_green(state: &mut IntersectionState, axis: Axis, now: Instant) -> Option<PhaseTransition> {
    let [lead, _] = axis.directions();
    let green = state.lights[lead]
        .green_duration
        .unwrap_or(state.config.base_green);
    if elapsed_in_phase(state, now) < green {
        return None;
    }

    let from = state.phase;
    let to = ControlPhase::yellow_for(axis);
    state.apply_phase(to);
    let at = mark_phase_change(state, now);
    log::info!("Switching {} -> {}: {} to yellow", from, to, axis);
    Some(PhaseTransition {
        from,
        to,
        at,
        plan: None,
    })
}

fn end_yellow(state: &mut IntersectionState, axis: Axis, now: Instant) -> Option<PhaseTransition> {
    if elapsed_in_phase(state, now) < state.config.yellow_duration {
        return None;
    }
    Some(start_green(state, axis.opposite(), now))
}
