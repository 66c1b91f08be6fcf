use portfolio::background::{FrameStats, ParticleBackground, Viewport};
use portfolio::canvas::{Canvas, DrawList};
use portfolio::config::{LINK_DISTANCE, LINK_MAX_ALPHA, PARTICLE_COUNT};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn mount(width: u32, height: u32, seed: u64) -> ParticleBackground<DrawList> {
    let mut rng = StdRng::seed_from_u64(seed);
    ParticleBackground::mount_with_rng(DrawList::default(), Viewport::new(width, height), &mut rng)
}

#[test]
fn test_zero_viewport_draws_nothing() {
    let mut background = mount(0, 0, 7);
    assert_eq!(background.particles().len(), PARTICLE_COUNT);

    for _ in 0..3 {
        assert_eq!(background.frame(), FrameStats::default());
    }
    assert!(background.canvas().is_empty());
}

#[test]
fn test_one_frame_moves_every_particle_by_its_velocity() {
    let mut background = mount(1000, 800, 11);
    let before = background.particles().to_vec();

    let stats = background.frame();
    assert_eq!(stats.particles_drawn, PARTICLE_COUNT);

    for (old, new) in before.iter().zip(background.particles()) {
        for axis in 0..2 {
            let bound = if axis == 0 { 1000.0 } else { 800.0 };
            let moved = old.position[axis] + old.velocity[axis];
            let expected = if moved < 0.0 {
                bound
            } else if moved > bound {
                0.0
            } else {
                moved
            };
            assert_eq!(new.position[axis], expected);
            assert!((0.0..=bound).contains(&new.position[axis]));
        }
        assert_eq!(new.velocity, old.velocity);
    }
}

#[test]
fn test_positions_stay_on_surface_over_many_frames() {
    let mut background = mount(1000, 800, 3);
    for _ in 0..2_000 {
        background.frame();
    }
    for particle in background.particles() {
        assert!((0.0..=1000.0).contains(&particle.position[0]));
        assert!((0.0..=800.0).contains(&particle.position[1]));
    }
}

#[test]
fn test_connections_match_distances() {
    let mut background = mount(400, 300, 19);
    let stats = background.frame();

    let particles = background.particles();
    let mut expected = 0;
    for i in 0..particles.len() {
        for j in (i + 1)..particles.len() {
            if particles[i].pos().distance(particles[j].pos()) < LINK_DISTANCE {
                expected += 1;
            }
        }
    }

    assert_eq!(stats.connections_drawn, expected);
    assert_eq!(background.canvas().line_count(), expected);
    for vertex in background.canvas().line_vertices() {
        assert!(vertex.color[3] > 0.0 && vertex.color[3] <= LINK_MAX_ALPHA);
    }
}

#[test]
fn test_resize_twice_is_same_as_once() {
    let mut once = mount(1000, 800, 5);
    let mut twice = mount(1000, 800, 5);

    once.resize(Viewport::new(500, 400));
    twice.resize(Viewport::new(500, 400));
    twice.resize(Viewport::new(500, 400));

    assert_eq!(once.particles(), twice.particles());
    assert_eq!(once.canvas().size(), twice.canvas().size());

    once.frame();
    twice.frame();
    assert_eq!(once.particles(), twice.particles());
}

#[test]
fn test_shrunk_surface_wraps_outside_particles() {
    let mut background = mount(1000, 800, 23);
    background.resize(Viewport::new(100, 100));
    background.frame();

    for particle in background.particles() {
        assert!((0.0..=100.0).contains(&particle.position[0]));
        assert!((0.0..=100.0).contains(&particle.position[1]));
    }
}

#[test]
fn test_unmount_stops_frames() {
    let mut background = mount(800, 600, 13);
    background.frame();
    background.unmount();

    let frozen = background.particles().to_vec();
    assert_eq!(background.frame(), FrameStats::default());
    assert_eq!(background.particles(), frozen.as_slice());

    let canvas = background.into_canvas();
    assert_eq!(canvas.size(), (800, 600));
}
