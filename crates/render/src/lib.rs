//! Renderer-agnostic interface for the galaxy viewer.
//!
//! # Invariants
//! - Renderers never mutate the particle field; the field is immutable
//!   after generation and renderers only read it.
//! - Per-frame animation values arrive through `FrameState`, never through
//!   renderer-held mutable state.
//!
//! The wgpu backend is driven directly by the application (it needs
//! device/queue/surface arguments); this trait marks the shading-stage
//! collaborator seam and carries the debug text renderer used for logging
//! and tests.

mod renderer;

pub use renderer::{DebugTextRenderer, RenderView, Renderer};
