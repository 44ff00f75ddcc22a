use glam::Vec3;
use nebula_field::ParticleField;
use nebula_scene::FrameState;

/// Camera/view configuration for rendering.
#[derive(Debug, Clone, Copy)]
pub struct RenderView {
    /// Camera position in world space.
    pub eye: Vec3,
    /// Point the camera is looking at.
    pub target: Vec3,
    /// Field of view in degrees.
    pub fov_degrees: f32,
}

impl Default for RenderView {
    fn default() -> Self {
        Self {
            eye: Vec3::new(0.0, 0.0, 5.0),
            target: Vec3::ZERO,
            fov_degrees: 75.0,
        }
    }
}

/// Renderer-agnostic interface. All renderers implement this trait.
///
/// A renderer reads the immutable field plus the per-frame animation
/// values and produces output. It never mutates either.
pub trait Renderer {
    /// The output type produced by this renderer.
    type Output;

    /// Render one frame of the given field.
    fn render(
        &self,
        field: &ParticleField,
        frame: &FrameState,
        view: &RenderView,
    ) -> Self::Output;
}

/// Debug text renderer.
///
/// Produces a human-readable summary of a frame: field size, animation
/// state, view, and a few sample particles. Used for startup logging and
/// for testing the render interface without a GPU.
#[derive(Debug, Default)]
pub struct DebugTextRenderer;

impl DebugTextRenderer {
    pub fn new() -> Self {
        Self
    }
}

impl Renderer for DebugTextRenderer {
    type Output = String;

    fn render(&self, field: &ParticleField, frame: &FrameState, view: &RenderView) -> String {
        let mut out = String::new();
        out.push_str(&format!(
            "=== Galaxy Frame (rotation={:.4} rad, t={:.2}s) ===\n",
            frame.rotation_angle, frame.time_seconds
        ));
        out.push_str(&format!("Particles: {}\n", field.len()));
        out.push_str(&format!(
            "View: eye=({:.1}, {:.1}, {:.1}) target=({:.1}, {:.1}, {:.1}) fov={:.0}\n",
            view.eye.x,
            view.eye.y,
            view.eye.z,
            view.target.x,
            view.target.y,
            view.target.z,
            view.fov_degrees
        ));

        for i in 0..field.len().min(4) {
            let p = field.position(i);
            out.push_str(&format!(
                "  [{i}] pos=({:.2}, {:.2}, {:.2}) size={:.3}\n",
                p.x,
                p.y,
                p.z,
                field.size(i)
            ));
        }

        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nebula_common::GalaxyConfig;

    fn frame() -> FrameState {
        FrameState {
            time_seconds: 1.25,
            rotation_angle: 0.003,
        }
    }

    #[test]
    fn debug_renderer_empty_field() {
        let config = GalaxyConfig {
            particle_count: 0,
            ..GalaxyConfig::default()
        };
        let field = ParticleField::generate(&config, 1);
        let output = DebugTextRenderer::new().render(&field, &frame(), &RenderView::default());

        assert!(output.contains("Particles: 0"));
        assert!(output.contains("t=1.25s"));
    }

    #[test]
    fn debug_renderer_with_particles() {
        let config = GalaxyConfig {
            particle_count: 100,
            ..GalaxyConfig::default()
        };
        let field = ParticleField::generate(&config, 1);
        let output = DebugTextRenderer::new().render(&field, &frame(), &RenderView::default());

        assert!(output.contains("Particles: 100"));
        assert!(output.contains("pos="));
        assert!(output.contains("rotation=0.0030"));
    }

    #[test]
    fn render_view_default() {
        let view = RenderView::default();
        assert_eq!(view.eye, Vec3::new(0.0, 0.0, 5.0));
        assert_eq!(view.fov_degrees, 75.0);
    }
}
