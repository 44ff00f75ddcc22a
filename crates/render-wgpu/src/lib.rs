//! wgpu render backend for the galaxy viewer.
//!
//! Draws the particle field as instanced point sprites with additive
//! blending and no depth test, so overlapping particles brighten rather
//! than occlude. Camera uses an orbit model with damped interpolation.
//!
//! # Invariants
//! - The renderer never mutates the particle field; instance data is
//!   uploaded once at construction.
//! - The spiral warp is recomputed every frame from the original buffer
//!   positions in the vertex stage; it is not cumulative. The constant-rate
//!   parent rotation is a separate model matrix. The two are independent.

mod camera;
mod gpu;
mod shaders;

pub use camera::OrbitCamera;
pub use gpu::GalaxyRenderer;
