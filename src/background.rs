use rand::Rng;

use crate::canvas::{Canvas, Rgba};
use crate::config::{LINK_WIDTH, PARTICLE_COUNT, PARTICLE_RGB};
use crate::particle_system::{Particle, ParticleSystem};

/// Viewport size in pixels
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

/// What a single frame put on the surface
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct FrameStats {
    pub particles_drawn: usize,
    pub connections_drawn: usize,
}

/// Decorative particle layer painted onto a `Canvas`.
///
/// Owns its particles for as long as it is mounted. The host drives it: call `frame` once
/// per display refresh, `resize` when the viewport changes and `unmount` when the section
/// goes away. After `unmount` every `frame` is a no-op, so a late refresh callback cannot
/// keep painting.
pub struct ParticleBackground<C: Canvas> {
    canvas: C,
    system: ParticleSystem,
    running: bool,
}

impl<C: Canvas> ParticleBackground<C> {
    pub fn mount(canvas: C, viewport: Viewport) -> Self {
        Self::mount_with_rng(canvas, viewport, &mut rand::thread_rng())
    }

    pub fn mount_with_rng<R: Rng>(mut canvas: C, viewport: Viewport, rng: &mut R) -> Self {
        canvas.set_size(viewport.width, viewport.height);
        let (width, height) = canvas.size();
        let system = ParticleSystem::with_rng(PARTICLE_COUNT, width as f32, height as f32, rng);

        log::debug!(
            "Particle background mounted: {} particles on {}x{}",
            system.len(),
            width,
            height
        );

        Self {
            canvas,
            system,
            running: true,
        }
    }

    /// Advance all particles one step and repaint the surface
    pub fn frame(&mut self) -> FrameStats {
        if !self.running {
            return FrameStats::default();
        }
        if !self.canvas.has_area() {
            log::trace!("Skipping frame: drawing surface has no area");
            return FrameStats::default();
        }

        self.system.update();
        self.canvas.clear();

        for particle in &self.system.particles {
            self.canvas.fill_circle(
                particle.pos(),
                particle.size,
                Rgba::new(PARTICLE_RGB, particle.opacity),
            );
        }

        let mut connections_drawn = 0;
        for link in self.system.connections() {
            let from = self.system.particles[link.a].pos();
            let to = self.system.particles[link.b].pos();
            self.canvas
                .stroke_line(from, to, LINK_WIDTH, Rgba::new(PARTICLE_RGB, link.opacity));
            connections_drawn += 1;
        }

        let stats = FrameStats {
            particles_drawn: self.system.len(),
            connections_drawn,
        };
        log::trace!("Frame drawn: {:?}", stats);
        stats
    }

    /// Match the surface to a new viewport without touching particle positions
    pub fn resize(&mut self, viewport: Viewport) {
        self.canvas.set_size(viewport.width, viewport.height);
        let (width, height) = self.canvas.size();
        self.system.resize(width as f32, height as f32);
        log::debug!("Particle background resized to {}x{}", width, height);
    }

    /// Stop painting. Idempotent.
    pub fn unmount(&mut self) {
        if self.running {
            self.running = false;
            log::debug!("Particle background unmounted");
        }
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn particles(&self) -> &[Particle] {
        &self.system.particles
    }

    pub fn system(&self) -> &ParticleSystem {
        &self.system
    }

    pub fn canvas(&self) -> &C {
        &self.canvas
    }

    pub fn canvas_mut(&mut self) -> &mut C {
        &mut self.canvas
    }

    /// Tear down and hand the surface back
    pub fn into_canvas(mut self) -> C {
        self.unmount();
        self.canvas
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::DrawList;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn mounted(width: u32, height: u32) -> ParticleBackground<DrawList> {
        let mut rng = StdRng::seed_from_u64(42);
        ParticleBackground::mount_with_rng(
            DrawList::default(),
            Viewport::new(width, height),
            &mut rng,
        )
    }

    #[test]
    fn test_mount_sizes_surface_to_viewport() {
        let background = mounted(640, 360);
        assert_eq!(background.canvas().size(), (640, 360));
        assert_eq!(background.particles().len(), PARTICLE_COUNT);
        assert!(background.is_running());
    }

    #[test]
    fn test_frame_paints_every_particle() {
        let mut background = mounted(640, 360);
        let stats = background.frame();

        assert_eq!(stats.particles_drawn, PARTICLE_COUNT);
        assert_eq!(background.canvas().circles().len(), PARTICLE_COUNT);
        assert_eq!(background.canvas().line_count(), stats.connections_drawn);
    }

    #[test]
    fn test_frame_clears_previous_contents() {
        let mut background = mounted(640, 360);
        background.frame();
        background.frame();
        assert_eq!(background.canvas().circles().len(), PARTICLE_COUNT);
    }

    #[test]
    fn test_circles_use_particle_attributes() {
        let mut background = mounted(300, 200);
        background.frame();

        for (particle, circle) in background.particles().iter().zip(background.canvas().circles()) {
            assert_eq!(circle.center, particle.position);
            assert_eq!(circle.radius, particle.size);
            assert_eq!(circle.color[3], particle.opacity);
        }
    }

    #[test]
    fn test_unmount_stops_painting() {
        let mut background = mounted(640, 360);
        background.frame();
        let positions: Vec<_> = background.particles().to_vec();

        background.unmount();
        background.unmount();
        let stats = background.frame();

        assert_eq!(stats, FrameStats::default());
        assert_eq!(background.particles(), positions.as_slice());
        assert!(!background.is_running());
    }

    #[test]
    fn test_resize_keeps_positions() {
        let mut background = mounted(640, 360);
        let before: Vec<_> = background.particles().to_vec();

        background.resize(Viewport::new(320, 180));

        assert_eq!(background.particles(), before.as_slice());
        assert_eq!(background.canvas().size(), (320, 180));
        assert_eq!(background.system().bounds(), glam::Vec2::new(320.0, 180.0));
    }
}
