//! The moving-agent record and uniform population sampling.

use std::ops::Range;

use crate::ids::AgentId;
use crate::point::{FieldPoint, Velocity};
use crate::rng::SimRng;

/// A moving point competing to reach field cells fastest.
///
/// Immutable for the duration of one field computation: the pipeline only
/// reads agents, and every worker shares the same `&[Agent]` slice without
/// synchronisation.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Agent {
    pub id: AgentId,

    /// Current position in continuous field coordinates.
    pub pos: FieldPoint,

    /// Current velocity.  Only the component carrying the agent toward a
    /// target counts as a head start; see `reach-solver`.
    pub vel: Velocity,

    /// Scalar speed bound, field units per second.  Must be positive.
    pub max_speed: f64,

    /// Scalar acceleration bound, field units per second².  Must be positive.
    pub max_accel: f64,
}

impl Agent {
    pub fn new(id: AgentId, pos: FieldPoint, vel: Velocity, max_speed: f64, max_accel: f64) -> Self {
        Self { id, pos, vel, max_speed, max_accel }
    }

    /// An agent at rest at `pos` — zero current velocity.
    pub fn at_rest(id: AgentId, pos: FieldPoint, max_speed: f64, max_accel: f64) -> Self {
        Self::new(id, pos, Velocity::ZERO, max_speed, max_accel)
    }
}

// ── Population sampling ───────────────────────────────────────────────────────

/// Uniform sampling ranges for generating a random agent population.
///
/// The defaults match a 100×70 field recentered about its vertical midline:
/// x ∈ [−50, 50), y ∈ [0, 70), per-axis velocity ∈ [0, 5), speed and
/// acceleration caps ∈ [6, 10).
#[derive(Clone, Debug)]
pub struct SampleBounds {
    pub x: Range<f64>,
    pub y: Range<f64>,
    /// Range for each current-velocity component (vx and vy independently).
    pub vel: Range<f64>,
    pub max_speed: Range<f64>,
    pub max_accel: Range<f64>,
}

impl Default for SampleBounds {
    fn default() -> Self {
        Self {
            x:         -50.0..50.0,
            y:         0.0..70.0,
            vel:       0.0..5.0,
            max_speed: 6.0..10.0,
            max_accel: 6.0..10.0,
        }
    }
}

impl Agent {
    /// Sample one agent uniformly within `bounds`.
    pub fn sample(id: AgentId, bounds: &SampleBounds, rng: &mut SimRng) -> Agent {
        Agent {
            id,
            pos: FieldPoint::new(
                rng.gen_range(bounds.x.clone()),
                rng.gen_range(bounds.y.clone()),
            ),
            vel: Velocity::new(
                rng.gen_range(bounds.vel.clone()),
                rng.gen_range(bounds.vel.clone()),
            ),
            max_speed: rng.gen_range(bounds.max_speed.clone()),
            max_accel: rng.gen_range(bounds.max_accel.clone()),
        }
    }
}

/// Sample `count` agents with IDs `0..count`.
///
/// Deterministic for a fixed seed: the same `SimRng` state always yields the
/// same population.
pub fn sample_population(count: usize, bounds: &SampleBounds, rng: &mut SimRng) -> Vec<Agent> {
    (0..count)
        .map(|i| Agent::sample(AgentId(i as u32), bounds, rng))
        .collect()
}
