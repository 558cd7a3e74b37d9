//! `reach-solver` — closed-form minimum arrival times under bounded
//! acceleration and bounded speed.
//!
//! Given one agent (position, current velocity, speed cap `b`, acceleration
//! cap `a`) and one target point, the solver answers: how soon can this agent
//! be there?  The answer has no simple algebraic form — accelerating from an
//! arbitrary initial closing speed toward a speed cap yields a transcendental
//! time equation — but it does have a closed form in terms of the principal
//! branch of the Lambert W function.
//!
//! | Module      | Contents                                             |
//! |-------------|------------------------------------------------------|
//! | [`closing`] | Per-axis closing-speed heuristic                     |
//! | [`arrival`] | Lambert-W closed form, `time_to_point` entry point   |
//!
//! Everything here is a pure function of its inputs: no validation, no side
//! effects.  Degenerate inputs (an agent exactly on the target, so the
//! heading is 0/0) produce NaN, which callers treat as "this agent cannot be
//! timed for this cell" — never as time zero.

pub mod arrival;
pub mod closing;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use arrival::{arrival_time, time_to_point};
pub use closing::closing_speed;
