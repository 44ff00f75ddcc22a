//! Render loop state machine for the galaxy viewer.
//!
//! # Invariants
//! - The loop has exactly two states: Running (from construction) and
//!   Stopped (from teardown). There is no pause/resume.
//! - The rotation angle advances by a fixed increment per tick and never
//!   changes after Stopped.
//! - Elapsed time comes from an injected clock, never read directly from
//!   the wall clock, so the loop is testable without a display.

pub mod clock;
pub mod scene;

pub use clock::{Clock, ManualClock, SystemClock};
pub use scene::{DEFAULT_SPIN_RATE, FrameState, GalaxyScene, LoopState};
