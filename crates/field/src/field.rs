use glam::Vec3;
use nebula_common::{GalaxyConfig, Rgb};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::f32::consts::TAU;

/// Smallest base point size a particle can be assigned.
pub const MIN_POINT_SIZE: f32 = 0.01;
/// Largest base point size a particle can be assigned.
pub const MAX_POINT_SIZE: f32 = 0.11;

/// The fixed set of particle records forming the visual galaxy.
///
/// Stored as three parallel buffers (position xyz, color rgb, size) so the
/// render backend can upload them without repacking. Immutable after
/// generation.
#[derive(Debug, Clone, PartialEq)]
pub struct ParticleField {
    positions: Vec<f32>,
    colors: Vec<f32>,
    sizes: Vec<f32>,
}

impl ParticleField {
    /// Sample `config.particle_count` particles over the disc volume.
    ///
    /// Cylindrical radius is uniform over [0, radius], angle uniform over
    /// [0, 2pi), height uniform over [-thickness/2, thickness/2]. Color is
    /// the inner/outer lerp at fraction radius/max_radius; size is uniform
    /// over [MIN_POINT_SIZE, MAX_POINT_SIZE].
    ///
    /// The per-particle draw order (distance, angle, height, size) is part
    /// of the determinism contract: a given seed always produces the same
    /// field.
    pub fn generate(config: &GalaxyConfig, seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let count = config.particle_count;

        let mut positions = Vec::with_capacity(count * 3);
        let mut colors = Vec::with_capacity(count * 3);
        let mut sizes = Vec::with_capacity(count);

        for _ in 0..count {
            let distance = rng.gen_range(0.0..1.0f32) * config.radius;
            let theta = rng.gen_range(0.0..1.0f32) * TAU;
            let height = (rng.gen_range(0.0..1.0f32) - 0.5) * config.thickness;

            positions.push(distance * theta.cos());
            positions.push(height);
            positions.push(distance * theta.sin());

            let color = config
                .inner_color
                .lerp(config.outer_color, distance / config.radius);
            colors.push(color.r);
            colors.push(color.g);
            colors.push(color.b);

            let size_t = rng.gen_range(0.0..1.0f32);
            sizes.push(MIN_POINT_SIZE + size_t * (MAX_POINT_SIZE - MIN_POINT_SIZE));
        }

        Self {
            positions,
            colors,
            sizes,
        }
    }

    /// Number of particles in the field.
    pub fn len(&self) -> usize {
        self.sizes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sizes.is_empty()
    }

    /// Packed xyz positions, 3 floats per particle.
    pub fn positions(&self) -> &[f32] {
        &self.positions
    }

    /// Packed rgb colors, 3 floats per particle.
    pub fn colors(&self) -> &[f32] {
        &self.colors
    }

    /// Base point sizes, 1 float per particle.
    pub fn sizes(&self) -> &[f32] {
        &self.sizes
    }

    /// Position of particle `index`.
    pub fn position(&self, index: usize) -> Vec3 {
        let i = index * 3;
        Vec3::new(self.positions[i], self.positions[i + 1], self.positions[i + 2])
    }

    /// Color of particle `index`.
    pub fn color(&self, index: usize) -> Rgb {
        let i = index * 3;
        Rgb::new(self.colors[i], self.colors[i + 1], self.colors[i + 2])
    }

    /// Base point size of particle `index`.
    pub fn size(&self, index: usize) -> f32 {
        self.sizes[index]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn field(count: usize, seed: u64) -> (GalaxyConfig, ParticleField) {
        let config = GalaxyConfig {
            particle_count: count,
            ..GalaxyConfig::default()
        };
        let field = ParticleField::generate(&config, seed);
        (config, field)
    }

    #[test]
    fn count_is_exact() {
        let (_, f) = field(10_000, 1);
        assert_eq!(f.len(), 10_000);
        assert_eq!(f.positions().len(), 30_000);
        assert_eq!(f.colors().len(), 30_000);
        assert_eq!(f.sizes().len(), 10_000);
    }

    #[test]
    fn empty_field() {
        let (_, f) = field(0, 1);
        assert!(f.is_empty());
        assert!(f.positions().is_empty());
        assert!(f.colors().is_empty());
    }

    #[test]
    fn single_particle_field() {
        let (_, f) = field(1, 1);
        assert_eq!(f.len(), 1);
        assert_eq!(f.positions().len(), 3);
    }

    #[test]
    fn particles_stay_inside_disc_volume() {
        let (config, f) = field(5_000, 7);
        for i in 0..f.len() {
            let p = f.position(i);
            let cylindrical_radius = (p.x * p.x + p.z * p.z).sqrt();
            assert!(
                cylindrical_radius <= config.radius * (1.0 + 1e-5),
                "particle {i} outside radius: {cylindrical_radius}"
            );
            assert!(
                p.y.abs() <= config.thickness / 2.0 + 1e-6,
                "particle {i} outside thickness: {}",
                p.y
            );
        }
    }

    #[test]
    fn sizes_stay_in_range() {
        let (_, f) = field(5_000, 7);
        for i in 0..f.len() {
            let s = f.size(i);
            assert!((MIN_POINT_SIZE..=MAX_POINT_SIZE).contains(&s), "size {s} out of range");
        }
    }

    #[test]
    fn colors_follow_radius_lerp() {
        // Replicate the generator's draw sequence so the lerp fraction is
        // known exactly, then check the stored color matches bit-for-bit.
        let (config, f) = field(256, 99);
        let mut rng = StdRng::seed_from_u64(99);
        for i in 0..f.len() {
            let distance = rng.gen_range(0.0..1.0f32) * config.radius;
            let _theta = rng.gen_range(0.0..1.0f32);
            let _height = rng.gen_range(0.0..1.0f32);
            let _size = rng.gen_range(0.0..1.0f32);
            let expected = config
                .inner_color
                .lerp(config.outer_color, distance / config.radius);
            assert_eq!(f.color(i), expected, "color mismatch at particle {i}");
        }
    }

    #[test]
    fn color_endpoints_are_exact() {
        let config = GalaxyConfig::default();
        let inner = config.inner_color.lerp(config.outer_color, 0.0);
        let outer = config.inner_color.lerp(config.outer_color, 1.0);
        assert_eq!(inner, config.inner_color);
        assert_eq!(outer, config.outer_color);
    }

    #[test]
    fn same_seed_reproduces_field() {
        let (_, a) = field(2_000, 42);
        let (_, b) = field(2_000, 42);
        assert_eq!(a, b);
    }

    #[test]
    fn different_seeds_diverge() {
        let (_, a) = field(2_000, 1);
        let (_, b) = field(2_000, 2);
        assert_ne!(a, b);
    }
}
