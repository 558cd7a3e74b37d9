//! The initial closing-speed heuristic.
//!
//! The agent's current velocity is decomposed per axis: each axis's velocity
//! component is projected onto an approximate heading — the arctangent of
//! the displacement ratio for that axis — and given the sign of whether
//! velocity and displacement point the same way.  The two axis contributions
//! are summed.
//!
//! This is a linearization, not an exact 2-D projection.  The arrival-time
//! closed form in [`arrival`][crate::arrival] was derived against this exact
//! quantity, so the two must stay consistent; substituting a "physically
//! correct" projection here would silently invalidate the time formula.

use reach_core::{Agent, FieldPoint};

/// One axis's contribution: the velocity magnitude projected onto the
/// heading, signed by whether velocity and displacement agree.
fn axis_component(disp: f64, vel: f64, heading: f64) -> f64 {
    let sign = if (vel < 0.0 && disp < 0.0) || (vel > 0.0 && disp > 0.0) {
        1.0
    } else {
        -1.0
    };
    (vel * heading.cos()).abs() * sign
}

/// Signed initial closing speed of `agent` toward `target`, field units per
/// second.  Positive means the current velocity carries the agent toward the
/// target; negative means away.
///
/// NaN when the agent sits exactly on the target (both displacement ratios
/// are 0/0).  A zero displacement on a single axis is benign: the ratio
/// becomes ±∞, the arctangent ±π/2, and that axis contributes (almost)
/// nothing.
pub fn closing_speed(target: FieldPoint, agent: &Agent) -> f64 {
    let dx = target.x - agent.pos.x;
    let dy = target.y - agent.pos.y;

    let heading_y = (dx / dy).atan();
    let vel_y = axis_component(dy, agent.vel.vy, heading_y);

    let heading_x = (dy / dx).atan();
    let vel_x = axis_component(dx, agent.vel.vx, heading_x);

    vel_y + vel_x
}
