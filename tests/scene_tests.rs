// Host-side tests for the scene model.
// Only the pure-Rust modules are exercised; nothing here needs a browser.

use glam::Vec2;
use orbit_entry::constants::*;
use orbit_entry::core::*;

fn make_scene() -> Scene {
    Scene::new(SceneParams::default(), Vec2::new(1280.0, 800.0), 42)
}

#[test]
fn scene_populations_match_params() {
    let scene = make_scene();
    assert_eq!(scene.particles.len(), PARTICLE_COUNT);
    assert_eq!(scene.stars.len(), STAR_COUNT);
    // 6 + 8 + 10 + 12 segments across the four rings
    assert_eq!(scene.arcs.len(), 36);
    assert!(scene.comets.is_empty());
}

#[test]
fn particles_sit_near_a_ring_and_spin_by_parity() {
    let scene = make_scene();
    for p in &scene.particles {
        let ring = RING_RADII
            .iter()
            .position(|r| (p.radius - r).abs() <= PARTICLE_RADIUS_JITTER)
            .expect("particle radius should be within jitter of a ring");
        let expected_sign = if ring % 2 == 0 { 1.0 } else { -1.0 };
        assert_eq!(p.speed.signum(), expected_sign);
        let magnitude = p.speed.abs();
        assert!(magnitude >= PARTICLE_SPEED_MIN);
        assert!(magnitude <= PARTICLE_SPEED_MIN + PARTICLE_SPEED_SPAN);
        assert!(p.size >= PARTICLE_SIZE_MIN && p.size <= PARTICLE_SIZE_MIN + PARTICLE_SIZE_SPAN);
        assert!(p.hue >= PARTICLE_HUE_MIN && p.hue <= PARTICLE_HUE_MIN + PARTICLE_HUE_SPAN);
        assert!(p.angle >= 0.0 && p.angle < TAU);
    }
}

#[test]
fn same_seed_gives_same_scene() {
    let a = make_scene();
    let b = make_scene();
    for (pa, pb) in a.particles.iter().zip(&b.particles) {
        assert_eq!(pa.angle, pb.angle);
        assert_eq!(pa.radius, pb.radius);
        assert_eq!(pa.shape, pb.shape);
    }
    for (sa, sb) in a.stars.iter().zip(&b.stars) {
        assert_eq!(sa.pos, sb.pos);
    }
}

#[test]
fn particle_angle_advances_linearly_modulo_tau() {
    let mut scene = make_scene();
    let initial: Vec<(f32, f32)> = scene.particles.iter().map(|p| (p.angle, p.speed)).collect();
    let frames = 500;
    for _ in 0..frames {
        for p in scene.particles.iter_mut() {
            p.advance();
        }
    }
    for (p, (a0, speed)) in scene.particles.iter().zip(initial) {
        let expected = (a0 + frames as f32 * speed).rem_euclid(TAU);
        let diff = (p.angle - expected).rem_euclid(TAU);
        let err = diff.min(TAU - diff);
        assert!(err < 1e-3, "angle drifted by {err}");
        assert!(p.angle >= 0.0 && p.angle < TAU);
    }
}

#[test]
fn particle_offset_lies_on_its_orbit() {
    let scene = make_scene();
    for p in &scene.particles {
        assert!((p.offset().length() - p.radius).abs() < 1e-3);
    }
}

#[test]
fn stars_start_inside_viewport() {
    let scene = make_scene();
    let vp = scene.viewport();
    for s in &scene.stars {
        assert!(s.pos.x >= 0.0 && s.pos.x <= vp.x);
        assert!(s.pos.y >= 0.0 && s.pos.y <= vp.y);
        assert!(s.size >= STAR_SIZE_MIN && s.size <= STAR_SIZE_MIN + STAR_SIZE_SPAN);
    }
}

#[test]
fn star_wraps_only_past_the_right_edge() {
    let width = 100.0;
    let mut star = Star {
        pos: Vec2::new(width - 0.03, 10.0),
        size: 1.0,
        phase: 0.0,
        twinkle_speed: 0.01,
    };
    star.drift(width);
    assert!(star.pos.x > 0.0 && star.pos.x <= width);
    star.drift(width);
    assert_eq!(star.pos.x, 0.0);
    assert_eq!(star.pos.y, 10.0);
}

#[test]
fn star_x_never_negative_over_many_frames() {
    let width = 1.0;
    let mut star = Star {
        pos: Vec2::new(0.5, 0.0),
        size: 1.0,
        phase: 0.0,
        twinkle_speed: 0.01,
    };
    for _ in 0..1_000 {
        star.drift(width);
        assert!(star.pos.x >= 0.0 && star.pos.x <= width);
    }
}

#[test]
fn star_twinkle_alpha_stays_in_band() {
    let mut star = Star {
        pos: Vec2::ZERO,
        size: 1.0,
        phase: 0.0,
        twinkle_speed: 0.3,
    };
    for _ in 0..200 {
        let a = star.twinkle();
        assert!(a >= STAR_ALPHA_BASE - STAR_ALPHA_SWING - 1e-6);
        assert!(a <= STAR_ALPHA_BASE + STAR_ALPHA_SWING + 1e-6);
    }
}

#[test]
fn arcs_are_evenly_spread_per_ring() {
    let scene = make_scene();
    let first_ring: Vec<&ArcSegment> = scene.arcs.iter().take(6).collect();
    for (s, arc) in first_ring.iter().enumerate() {
        assert_eq!(arc.radius, RING_RADII[0] - ARC_RADIUS_INSET);
        assert!((arc.start - s as f32 / 6.0 * TAU).abs() < 1e-5);
        assert!(arc.speed > 0.0);
    }
    let second_ring = &scene.arcs[6];
    assert!(second_ring.speed < 0.0);
    assert!((second_ring.length - std::f32::consts::PI / 9.0).abs() < 1e-6);
}

#[test]
fn comet_queue_evicts_oldest_beyond_capacity() {
    let mut scene = make_scene();
    for _ in 0..COMET_CAPACITY {
        scene.spawn_comet();
    }
    let survivors: Vec<(f32, f32)> = scene.comets[1..].iter().map(|c| (c.angle, c.radius)).collect();
    scene.spawn_comet();
    assert_eq!(scene.comets.len(), COMET_CAPACITY);
    let kept: Vec<(f32, f32)> = scene.comets[..COMET_CAPACITY - 1]
        .iter()
        .map(|c| (c.angle, c.radius))
        .collect();
    assert_eq!(kept, survivors);
    for _ in 0..20 {
        scene.spawn_comet();
        assert!(scene.comets.len() <= COMET_CAPACITY);
    }
}

#[test]
fn comet_spawns_outside_outer_ring_moving_backwards() {
    let mut scene = make_scene();
    scene.spawn_comet();
    let c = &scene.comets[0];
    let outer = RING_RADII[RING_RADII.len() - 1];
    assert!(c.radius >= outer + COMET_ORBIT_GAP);
    assert!(c.radius <= outer + COMET_ORBIT_GAP + COMET_ORBIT_SPAN);
    assert!(c.speed <= -COMET_SPEED_MIN && c.speed >= -COMET_SPEED_MIN - COMET_SPEED_SPAN);
    assert_eq!(c.life, 1.0);
}

#[test]
fn comet_life_decays_strictly_and_stays_positive() {
    let mut comet = Comet {
        angle: 0.0,
        radius: 420.0,
        speed: -0.03,
        life: 1.0,
    };
    let mut prev = comet.life;
    for _ in 0..400 {
        comet.advance();
        assert!(comet.life < prev, "life must strictly decrease");
        assert!(comet.life > 0.0);
        assert!((comet.life - prev * COMET_DECAY).abs() < 1e-6);
        prev = comet.life;
    }
}

#[test]
fn spent_comets_are_pruned() {
    let mut scene = make_scene();
    scene.spawn_comet();
    scene.spawn_comet();
    scene.comets[0].life = COMET_MIN_LIFE * 0.5;
    scene.prune_comets();
    assert_eq!(scene.comets.len(), 1);
    assert_eq!(scene.comets[0].life, 1.0);
}

#[test]
fn comet_trail_trails_the_head() {
    let comet = Comet {
        angle: 0.0,
        radius: 100.0,
        speed: -0.03,
        life: 1.0,
    };
    assert!((comet.head() - Vec2::new(100.0, 0.0)).length() < 1e-4);
    let tail = comet.tail();
    assert!((tail.length() - 96.0).abs() < 1e-3);
    assert!((tail.y.atan2(tail.x) - COMET_TRAIL_ANGLE).abs() < 1e-5);
}

#[test]
fn spawn_chance_zero_never_spawns_and_one_always_spawns() {
    let mut scene = make_scene();
    scene.params.comet_spawn_chance = 0.0;
    for _ in 0..1_000 {
        assert!(!scene.maybe_spawn_comet());
    }
    scene.params.comet_spawn_chance = 1.0;
    assert!(scene.maybe_spawn_comet());
    assert_eq!(scene.comets.len(), 1);
}

#[test]
fn orbit_center_is_lifted_above_middle() {
    let c = orbit_center(Vec2::new(1000.0, 800.0));
    assert_eq!(c, Vec2::new(500.0, 400.0 - 48.0));
    // Tall viewports cap the lift
    let c = orbit_center(Vec2::new(1000.0, 4000.0));
    assert_eq!(c, Vec2::new(500.0, 2000.0 - CENTER_LIFT_MAX));
}

#[test]
fn parallax_is_zero_until_pointer_moves() {
    let mut scene = make_scene();
    assert_eq!(scene.parallax(), Vec2::ZERO);
    let middle = scene.viewport() * 0.5;
    scene.set_mouse(middle + Vec2::new(100.0, -50.0));
    let p = scene.parallax();
    assert!((p - Vec2::new(2.0, -1.0)).length() < 1e-5);
}

#[test]
fn resize_moves_center_but_keeps_stars() {
    let mut scene = make_scene();
    let before: Vec<Vec2> = scene.stars.iter().map(|s| s.pos).collect();
    scene.resize(Vec2::new(640.0, 480.0));
    assert_eq!(scene.viewport(), Vec2::new(640.0, 480.0));
    assert_eq!(scene.center(), orbit_center(Vec2::new(640.0, 480.0)));
    let after: Vec<Vec2> = scene.stars.iter().map(|s| s.pos).collect();
    assert_eq!(before, after);
}

#[test]
fn empty_ring_list_yields_no_particles_or_arcs() {
    let params = SceneParams {
        ring_radii: Vec::new(),
        ..SceneParams::default()
    };
    let mut scene = Scene::new(params, Vec2::new(300.0, 200.0), 7);
    assert!(scene.particles.is_empty());
    assert!(scene.arcs.is_empty());
    assert_eq!(scene.stars.len(), STAR_COUNT);
    scene.spawn_comet();
    assert!(scene.comets[0].radius >= COMET_ORBIT_GAP);
}

#[test]
fn color_css_strings() {
    assert_eq!(
        Color::rgba(160, 220, 255, 0.4).css(),
        "rgba(160, 220, 255, 0.4)"
    );
    assert_eq!(Color::Hsla(200.0, 85.0, 70.0, 0.8).css(), "hsla(200, 85%, 70%, 0.8)");
    assert_eq!(Color::rgba(1, 2, 3, 1.0).with_alpha(0.0).alpha(), 0.0);
}
