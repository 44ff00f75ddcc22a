use crate::clock::Clock;

/// Rotation advance per tick, in radians.
pub const DEFAULT_SPIN_RATE: f32 = 0.001;

/// Lifecycle of the render loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopState {
    Running,
    Stopped,
}

/// Per-frame values pushed to the shading stage as uniform inputs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameState {
    /// Seconds since mount.
    pub time_seconds: f32,
    /// Accumulated rotation of the field's parent transform, in radians.
    pub rotation_angle: f32,
}

/// Owns the animation state of the galaxy: one rotation angle and one
/// elapsed-time scalar. Runs from construction until `stop`.
///
/// The scene does not schedule itself; the host calls `tick` once per
/// display refresh and stops requesting frames once the loop is stopped,
/// so no tick is ever pending after teardown.
#[derive(Debug)]
pub struct GalaxyScene {
    state: LoopState,
    rotation_angle: f32,
    spin_rate: f32,
    ticks: u64,
}

impl Default for GalaxyScene {
    fn default() -> Self {
        Self::new()
    }
}

impl GalaxyScene {
    pub fn new() -> Self {
        Self::with_spin_rate(DEFAULT_SPIN_RATE)
    }

    pub fn with_spin_rate(spin_rate: f32) -> Self {
        Self {
            state: LoopState::Running,
            rotation_angle: 0.0,
            spin_rate,
            ticks: 0,
        }
    }

    /// Advance one frame: read elapsed time, advance the rotation angle by
    /// the fixed per-tick increment, and return the frame values for the
    /// shading stage. Returns `None` once stopped; a tick after `stop`
    /// changes nothing.
    pub fn tick(&mut self, clock: &dyn Clock) -> Option<FrameState> {
        if self.state == LoopState::Stopped {
            return None;
        }
        self.rotation_angle += self.spin_rate;
        self.ticks += 1;
        Some(FrameState {
            time_seconds: clock.elapsed().as_secs_f32(),
            rotation_angle: self.rotation_angle,
        })
    }

    /// Transition to Stopped. Idempotent: calling it again is a no-op.
    pub fn stop(&mut self) {
        if self.state == LoopState::Stopped {
            return;
        }
        self.state = LoopState::Stopped;
        tracing::debug!(ticks = self.ticks, "render loop stopped");
    }

    pub fn is_running(&self) -> bool {
        self.state == LoopState::Running
    }

    pub fn state(&self) -> LoopState {
        self.state
    }

    pub fn rotation_angle(&self) -> f32 {
        self.rotation_angle
    }

    /// Number of ticks performed while Running.
    pub fn ticks(&self) -> u64 {
        self.ticks
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::ManualClock;
    use std::time::Duration;

    #[test]
    fn starts_running_at_zero_rotation() {
        let scene = GalaxyScene::new();
        assert!(scene.is_running());
        assert_eq!(scene.rotation_angle(), 0.0);
        assert_eq!(scene.ticks(), 0);
    }

    #[test]
    fn rotation_advances_by_fixed_increment() {
        let mut scene = GalaxyScene::new();
        let clock = ManualClock::new();
        for i in 1..=100u32 {
            let frame = scene.tick(&clock).unwrap();
            let expected = DEFAULT_SPIN_RATE * i as f32;
            assert!((frame.rotation_angle - expected).abs() < 1e-5);
        }
        assert_eq!(scene.ticks(), 100);
    }

    #[test]
    fn rotation_is_strictly_increasing() {
        let mut scene = GalaxyScene::new();
        let clock = ManualClock::new();
        let mut last = scene.rotation_angle();
        for _ in 0..50 {
            let frame = scene.tick(&clock).unwrap();
            assert!(frame.rotation_angle > last);
            last = frame.rotation_angle;
        }
    }

    #[test]
    fn frame_reports_injected_time() {
        let mut scene = GalaxyScene::new();
        let mut clock = ManualClock::new();
        clock.set(Duration::from_millis(1_500));
        let frame = scene.tick(&clock).unwrap();
        assert_eq!(frame.time_seconds, 1.5);
    }

    #[test]
    fn no_change_after_stop() {
        let mut scene = GalaxyScene::new();
        let clock = ManualClock::new();
        scene.tick(&clock);
        scene.tick(&clock);
        let frozen = scene.rotation_angle();
        scene.stop();
        assert!(scene.tick(&clock).is_none());
        assert_eq!(scene.rotation_angle(), frozen);
        assert_eq!(scene.ticks(), 2);
    }

    #[test]
    fn stop_is_idempotent() {
        let mut scene = GalaxyScene::new();
        scene.stop();
        scene.stop();
        assert_eq!(scene.state(), LoopState::Stopped);
    }

    #[test]
    fn custom_spin_rate() {
        let mut scene = GalaxyScene::with_spin_rate(0.01);
        let clock = ManualClock::new();
        let frame = scene.tick(&clock).unwrap();
        assert_eq!(frame.rotation_angle, 0.01);
    }
}
