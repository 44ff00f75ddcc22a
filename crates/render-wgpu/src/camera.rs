use glam::{Mat4, Vec3};

/// Orbit camera circling a fixed target with damped interpolation.
/// Drag input moves the goal angles; `update` eases the current angles
/// toward them each frame, matching the damped feel of orbit controls.
pub struct OrbitCamera {
    pub target: Vec3,
    pub fov: f32,
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
    pub damping: f32,
    pub rotate_speed: f32,
    yaw: f32,
    pitch: f32,
    distance: f32,
    yaw_goal: f32,
    pitch_goal: f32,
    distance_goal: f32,
}

impl Default for OrbitCamera {
    fn default() -> Self {
        // Initial eye at (0, 0, 5) looking at the origin.
        let yaw = std::f32::consts::FRAC_PI_2;
        Self {
            target: Vec3::ZERO,
            fov: 75.0_f32.to_radians(),
            aspect: 16.0 / 9.0,
            near: 0.1,
            far: 1000.0,
            damping: 0.05,
            rotate_speed: 0.5,
            yaw,
            pitch: 0.0,
            distance: 5.0,
            yaw_goal: yaw,
            pitch_goal: 0.0,
            distance_goal: 5.0,
        }
    }
}

impl OrbitCamera {
    /// Accumulate a drag gesture into the goal angles.
    pub fn rotate(&mut self, dx: f32, dy: f32) {
        self.yaw_goal += dx * self.rotate_speed * 0.005;
        let limit = 89.0_f32.to_radians();
        self.pitch_goal = (self.pitch_goal + dy * self.rotate_speed * 0.005).clamp(-limit, limit);
    }

    /// Accumulate a scroll gesture into the goal distance.
    pub fn zoom(&mut self, delta: f32) {
        self.distance_goal = (self.distance_goal - delta * 0.5).clamp(1.0, 50.0);
    }

    /// Ease the current angles toward their goals by the damping factor.
    /// Called once per tick.
    pub fn update(&mut self) {
        self.yaw += (self.yaw_goal - self.yaw) * self.damping;
        self.pitch += (self.pitch_goal - self.pitch) * self.damping;
        self.distance += (self.distance_goal - self.distance) * self.damping;
    }

    /// Recompute the aspect ratio from the surface size.
    pub fn set_aspect(&mut self, width: u32, height: u32) {
        self.aspect = width as f32 / height.max(1) as f32;
    }

    pub fn position(&self) -> Vec3 {
        let offset = Vec3::new(
            self.pitch.cos() * self.yaw.cos(),
            self.pitch.sin(),
            self.pitch.cos() * self.yaw.sin(),
        );
        self.target + offset * self.distance
    }

    pub fn yaw(&self) -> f32 {
        self.yaw
    }

    pub fn pitch(&self) -> f32 {
        self.pitch
    }

    pub fn distance(&self) -> f32 {
        self.distance
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position(), self.target, Vec3::Y)
    }

    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fov, self.aspect, self.near, self.far)
    }

    pub fn view_projection(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_eye_position() {
        let cam = OrbitCamera::default();
        let eye = cam.position();
        assert!(eye.x.abs() < 1e-5);
        assert!(eye.y.abs() < 1e-5);
        assert!((eye.z - 5.0).abs() < 1e-5);
    }

    #[test]
    fn set_aspect_is_exact() {
        let mut cam = OrbitCamera::default();
        cam.set_aspect(1920, 1080);
        assert_eq!(cam.aspect, 1920.0 / 1080.0);
        cam.set_aspect(800, 600);
        assert_eq!(cam.aspect, 800.0 / 600.0);
    }

    #[test]
    fn set_aspect_guards_zero_height() {
        let mut cam = OrbitCamera::default();
        cam.set_aspect(640, 0);
        assert!(cam.aspect.is_finite());
    }

    #[test]
    fn damping_converges_to_goal() {
        let mut cam = OrbitCamera::default();
        let start_yaw = cam.yaw();
        cam.rotate(100.0, 40.0);
        // One update moves only a fraction of the way.
        cam.update();
        assert!((cam.yaw() - start_yaw).abs() < (100.0 * 0.5 * 0.005));
        for _ in 0..500 {
            cam.update();
        }
        assert!((cam.yaw() - (start_yaw + 100.0 * 0.5 * 0.005)).abs() < 1e-4);
    }

    #[test]
    fn pitch_is_clamped() {
        let mut cam = OrbitCamera::default();
        cam.rotate(0.0, 1e6);
        for _ in 0..1000 {
            cam.update();
        }
        assert!(cam.pitch() <= 89.0_f32.to_radians() + 1e-4);
    }

    #[test]
    fn zoom_is_clamped() {
        let mut cam = OrbitCamera::default();
        cam.zoom(1e6);
        for _ in 0..1000 {
            cam.update();
        }
        assert!(cam.distance() >= 1.0 - 1e-4);
    }

    #[test]
    fn view_projection_is_finite() {
        let cam = OrbitCamera::default();
        let vp = cam.view_projection();
        assert!(!vp.col(0).x.is_nan());
        assert!(vp.col(3).is_finite());
    }
}
