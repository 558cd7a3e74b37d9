//! The Lambert-W closed form for minimum arrival time.
//!
//! # Derivation sketch
//!
//! An agent covering distance `d` accelerates at rate `a` from initial
//! closing speed `c`, asymptotically approaching its speed cap `b`.  Solving
//! the resulting distance-time relation for `t` produces a transcendental
//! equation of the shape `w·e^w = z`, whose root on the physically valid
//! branch is `w = W₀(z)`:
//!
//!   pow = a·(−b²/a + c·b/a − d) / b²
//!   lam = W₀(−(b − c)·e^pow / b)
//!   t   = (b²·lam + a·d + b² − b·c) / (a·b)
//!
//! # Failure behavior
//!
//! `W₀` is real only for arguments ≥ −1/e.  Below that the `lambert_w`
//! crate returns NaN, and NaN propagates through the final expression — the
//! solver never substitutes a root from the wrong branch.  For physical
//! inputs (`d ≥ 0`, positive caps) the argument stays inside the domain;
//! NaN in practice means the inputs were already degenerate (see
//! [`closing_speed`][crate::closing_speed]).

use lambert_w::lambert_w0;

use reach_core::{Agent, FieldPoint};

use crate::closing::closing_speed;

/// Minimum time in seconds to cover distance `d`, starting at closing speed
/// `c`, accelerating at `max_accel` up to the cap `max_speed`.
///
/// Pure; returns NaN when the Lambert W argument leaves the principal
/// branch's domain or any input is NaN.
pub fn arrival_time(d: f64, c: f64, max_speed: f64, max_accel: f64) -> f64 {
    let b = max_speed;
    let a = max_accel;

    let pow = a * (-(b * b) / a + c * b / a - d) / (b * b);
    let lam = lambert_w0(-((b - c) * pow.exp()) / b);

    (b * b * lam + a * d + b * b - b * c) / (a * b)
}

/// Arrival time of `agent` at `point` (continuous field coordinates).
///
/// Combines Euclidean distance, the closing-speed heuristic, and the closed
/// form above.  NaN means the agent cannot be timed for this point.
pub fn time_to_point(point: FieldPoint, agent: &Agent) -> f64 {
    let d = agent.pos.distance_to(point);
    let c = closing_speed(point, agent);
    arrival_time(d, c, agent.max_speed, agent.max_accel)
}
