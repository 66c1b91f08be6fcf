use glam::Vec2;
use rand::Rng;

use crate::config::{self, LINK_DISTANCE, LINK_MAX_ALPHA};

/// A single drifting point of the background layer
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Particle {
    pub position: [f32; 2],      // Current position (x, y) in surface pixels
    pub velocity: [f32; 2],      // Per-frame delta (speed_x, speed_y)
    pub size: f32,               // Circle radius
    pub opacity: f32,            // Fill alpha in [0.2, 0.7)
}

impl Particle {
    pub fn new(position: Vec2, velocity: Vec2, size: f32, opacity: f32) -> Self {
        Self {
            position: position.to_array(),
            velocity: velocity.to_array(),
            size,
            opacity,
        }
    }

    /// Random particle somewhere on a `bounds`-sized surface
    pub fn random<R: Rng>(rng: &mut R, bounds: Vec2) -> Self {
        use config::particle::*;

        // Scaling a unit draw keeps a 0x0 surface valid (gen_range would panic on 0..0)
        let position = Vec2::new(rng.gen::<f32>() * bounds.x, rng.gen::<f32>() * bounds.y);
        let size = rng.gen::<f32>() * SIZE_SPREAD + MIN_SIZE;
        let velocity = Vec2::new(
            (rng.gen::<f32>() - 0.5) * SPEED_SPREAD,
            (rng.gen::<f32>() - 0.5) * SPEED_SPREAD,
        );
        let opacity = rng.gen::<f32>() * OPACITY_SPREAD + MIN_OPACITY;

        Self::new(position, velocity, size, opacity)
    }

    pub fn pos(&self) -> Vec2 {
        Vec2::from_array(self.position)
    }

    pub fn vel(&self) -> Vec2 {
        Vec2::from_array(self.velocity)
    }

    /// Advance one frame, wrapping toroidally at the surface edges
    pub fn step(&mut self, bounds: Vec2) {
        let mut p = self.pos() + self.vel();

        // Leaving one edge re-enters at the opposite one; the other axis is untouched
        if p.x < 0.0 {
            p.x = bounds.x;
        }
        if p.x > bounds.x {
            p.x = 0.0;
        }
        if p.y < 0.0 {
            p.y = bounds.y;
        }
        if p.y > bounds.y {
            p.y = 0.0;
        }

        self.position = p.to_array();
    }
}

/// A line between two particles closer than `LINK_DISTANCE`
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Connection {
    pub a: usize,
    pub b: usize,
    pub distance: f32,
    pub opacity: f32,
}

/// Line alpha for two particles `distance` apart, or `None` when too far to connect.
///
/// Linear falloff from `LINK_MAX_ALPHA` at 0 to 0 at `LINK_DISTANCE`.
pub fn link_opacity(distance: f32) -> Option<f32> {
    if distance < LINK_DISTANCE {
        Some(LINK_MAX_ALPHA * (1.0 - distance / LINK_DISTANCE))
    } else {
        None
    }
}

/// Fixed-size particle set bound to a drawing surface
pub struct ParticleSystem {
    pub particles: Vec<Particle>,
    bounds: Vec2,
}

impl ParticleSystem {
    /// Create new particle system with random initialization
    pub fn new(count: usize, screen_width: f32, screen_height: f32) -> Self {
        Self::with_rng(count, screen_width, screen_height, &mut rand::thread_rng())
    }

    /// Same as `new` but drawing from a caller-supplied generator
    pub fn with_rng<R: Rng>(
        count: usize,
        screen_width: f32,
        screen_height: f32,
        rng: &mut R,
    ) -> Self {
        let bounds = Vec2::new(screen_width.max(0.0), screen_height.max(0.0));
        let particles = (0..count).map(|_| Particle::random(&mut *rng, bounds)).collect();

        Self { particles, bounds }
    }

    pub fn from_particles(particles: Vec<Particle>, screen_width: f32, screen_height: f32) -> Self {
        Self {
            particles,
            bounds: Vec2::new(screen_width.max(0.0), screen_height.max(0.0)),
        }
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn bounds(&self) -> Vec2 {
        self.bounds
    }

    /// Change the wrap bounds. Positions are left alone; particles outside the new area
    /// come back through their own wraparound on the next update.
    pub fn resize(&mut self, screen_width: f32, screen_height: f32) {
        self.bounds = Vec2::new(screen_width.max(0.0), screen_height.max(0.0));
    }

    /// Move every particle by its velocity
    pub fn update(&mut self) {
        let bounds = self.bounds;
        for particle in &mut self.particles {
            particle.step(bounds);
        }
    }

    /// All unordered pairs close enough to be linked
    pub fn connections(&self) -> impl Iterator<Item = Connection> + '_ {
        let particles = &self.particles;
        (0..particles.len()).flat_map(move |i| {
            (i + 1..particles.len()).filter_map(move |j| {
                let distance = particles[i].pos().distance(particles[j].pos());
                link_opacity(distance).map(|opacity| Connection {
                    a: i,
                    b: j,
                    distance,
                    opacity,
                })
            })
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn particle_at(x: f32, y: f32, vx: f32, vy: f32) -> Particle {
        Particle::new(Vec2::new(x, y), Vec2::new(vx, vy), 2.0, 0.5)
    }

    #[test]
    fn test_generated_attributes_in_range() {
        let mut rng = StdRng::seed_from_u64(7);
        let system = ParticleSystem::with_rng(500, 1000.0, 800.0, &mut rng);

        assert_eq!(system.len(), 500);
        for p in &system.particles {
            assert!((0.0..1000.0).contains(&p.position[0]));
            assert!((0.0..800.0).contains(&p.position[1]));
            assert!((1.0..4.0).contains(&p.size));
            assert!((0.2..=0.7).contains(&p.opacity));
            assert!(p.velocity[0].abs() <= 0.25);
            assert!(p.velocity[1].abs() <= 0.25);
        }
    }

    #[test]
    fn test_zero_surface_generates_origin_particles() {
        let mut rng = StdRng::seed_from_u64(1);
        let system = ParticleSystem::with_rng(50, 0.0, 0.0, &mut rng);
        assert_eq!(system.len(), 50);
        assert!(system.particles.iter().all(|p| p.position == [0.0, 0.0]));
    }

    #[test]
    fn test_wrap_right_edge() {
        let mut p = particle_at(99.9, 40.0, 0.25, 0.0);
        p.step(Vec2::new(100.0, 80.0));
        assert_eq!(p.position, [0.0, 40.0]);
    }

    #[test]
    fn test_wrap_left_edge() {
        let mut p = particle_at(0.1, 40.0, -0.25, 0.0);
        p.step(Vec2::new(100.0, 80.0));
        assert_eq!(p.position, [100.0, 40.0]);
    }

    #[test]
    fn test_wrap_bottom_and_top_edges() {
        let bounds = Vec2::new(100.0, 80.0);

        let mut down = particle_at(30.0, 79.9, 0.0, 0.25);
        down.step(bounds);
        assert_eq!(down.position, [30.0, 0.0]);

        let mut up = particle_at(30.0, 0.1, 0.0, -0.25);
        up.step(bounds);
        assert_eq!(up.position, [30.0, 80.0]);
    }

    #[test]
    fn test_exact_edge_is_not_wrapped() {
        let mut p = particle_at(99.75, 10.0, 0.25, 0.0);
        p.step(Vec2::new(100.0, 80.0));
        assert_eq!(p.position, [100.0, 10.0]);
    }

    #[test]
    fn test_shrunk_surface_wraps_stragglers_on_next_update() {
        let mut system = ParticleSystem::from_particles(
            vec![particle_at(900.0, 700.0, 0.1, 0.1)],
            1000.0,
            800.0,
        );
        system.resize(500.0, 400.0);
        assert_eq!(system.particles[0].position, [900.0, 700.0]);

        system.update();
        assert_eq!(system.particles[0].position, [0.0, 0.0]);
    }

    #[test]
    fn test_resize_same_dimensions_is_idempotent() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut system = ParticleSystem::with_rng(50, 640.0, 480.0, &mut rng);
        let before = system.particles.clone();

        system.resize(800.0, 600.0);
        system.resize(800.0, 600.0);
        system.resize(800.0, 600.0);

        assert_eq!(system.particles, before);
        assert_eq!(system.bounds(), Vec2::new(800.0, 600.0));
    }

    #[test]
    fn test_link_opacity_falloff() {
        assert_eq!(link_opacity(0.0), Some(LINK_MAX_ALPHA));
        assert_eq!(link_opacity(LINK_DISTANCE), None);
        assert_eq!(link_opacity(200.0), None);

        let mut last = f32::INFINITY;
        for d in [0.0, 10.0, 50.0, 75.0, 120.0, 149.0] {
            let alpha = link_opacity(d).unwrap();
            assert!(alpha < last, "alpha must shrink with distance");
            last = alpha;
        }

        let near_edge = link_opacity(LINK_DISTANCE - 1e-3).unwrap();
        assert!(near_edge < 1e-5);
    }

    #[test]
    fn test_connections_respect_threshold() {
        let system = ParticleSystem::from_particles(
            vec![
                particle_at(0.0, 0.0, 0.0, 0.0),
                particle_at(100.0, 0.0, 0.0, 0.0), // 100 from first
                particle_at(250.0, 0.0, 0.0, 0.0), // 150 from second, 250 from first
            ],
            1000.0,
            800.0,
        );

        let links: Vec<Connection> = system.connections().collect();
        assert_eq!(links.len(), 1);
        assert_eq!((links[0].a, links[0].b), (0, 1));
        assert!((links[0].distance - 100.0).abs() < 1e-4);
    }

    #[test]
    fn test_connections_visit_each_pair_once() {
        let particles = (0..50).map(|_| particle_at(10.0, 10.0, 0.0, 0.0)).collect();
        let system = ParticleSystem::from_particles(particles, 100.0, 100.0);
        assert_eq!(system.connections().count(), 1225);
        assert!(system.connections().all(|c| c.a < c.b));
    }
}
