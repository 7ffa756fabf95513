//! Frame composition on top of a small drawing abstraction.
//!
//! [`frame`] advances and draws the scene in a fixed layer order:
//! background (rings, bloom, arcs), stars, particles, comets, emblem.
//! Updates are interleaved with each element's own draw call.
use crate::constants::*;
use crate::core::color::{self, Color};
use crate::core::{Scene, Shape};
use glam::Vec2;
use smallvec::SmallVec;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Stroke {
    pub color: Color,
    pub width: f64,
}

impl Stroke {
    pub const fn new(color: Color, width: f64) -> Self {
        Self { color, width }
    }
}

/// Drawing primitives needed by the overlay. Coordinates are CSS pixels in
/// viewport space; implementations handle device pixel ratio themselves.
pub trait Renderer {
    fn clear(&mut self, size: Vec2);
    fn stroke_path(&mut self, points: &[Vec2], closed: bool, stroke: Stroke);
    fn stroke_arc(&mut self, center: Vec2, radius: f32, start: f32, end: f32, stroke: Stroke);
    /// Disc filled with a radial gradient from `inner` at the centre to
    /// `outer` at `radius`.
    fn fill_radial_gradient(&mut self, center: Vec2, radius: f32, inner: Color, outer: Color);
    fn fill_rect(&mut self, origin: Vec2, size: Vec2, color: Color);
    /// Straight line whose colour runs linearly from `from_color` to `to_color`.
    fn stroke_gradient_line(
        &mut self,
        from: Vec2,
        to: Vec2,
        from_color: Color,
        to_color: Color,
        width: f64,
    );
}

/// Backing-store scale for a reported device pixel ratio: capped at
/// `MAX_DEVICE_PIXEL_RATIO`, with 1 standing in for a missing or zero value.
/// Ratios below 1 (zoomed out) are kept.
pub fn effective_pixel_ratio(reported: Option<f64>) -> f64 {
    match reported {
        Some(dpr) if dpr.is_finite() && dpr > 0.0 => dpr.min(MAX_DEVICE_PIXEL_RATIO),
        _ => 1.0,
    }
}

/// Advance every element by one frame and draw it.
pub fn frame<R: Renderer + ?Sized>(scene: &mut Scene, r: &mut R) {
    draw_background(scene, r);
    draw_stars(scene, r);
    let origin = scene.center() + scene.parallax();
    draw_particles(scene, r, origin);
    draw_comets(scene, r, origin);
    draw_emblem(r, origin);
}

fn draw_background<R: Renderer + ?Sized>(scene: &mut Scene, r: &mut R) {
    r.clear(scene.viewport());
    let center = scene.center();

    for (idx, radius) in scene.params.ring_radii.iter().enumerate() {
        let points: Vec<Vec2> = wobble_ring(*radius, idx)
            .into_iter()
            .map(|p| p + center)
            .collect();
        let alpha = RING_ALPHA_BASE - idx as f32 * RING_ALPHA_STEP;
        let stroke = Stroke::new(color::RING_STROKE.with_alpha(alpha), RING_LINE_WIDTH);
        r.stroke_path(&points, false, stroke);
    }

    r.fill_radial_gradient(center, BLOOM_RADIUS, color::BLOOM, color::BLOOM.with_alpha(0.0));

    let arc_stroke = Stroke::new(color::ARC_STROKE, ARC_LINE_WIDTH);
    for arc in scene.arcs.iter_mut() {
        arc.advance();
        r.stroke_arc(center, arc.radius, arc.start, arc.end(), arc_stroke);
    }
}

fn draw_stars<R: Renderer + ?Sized>(scene: &mut Scene, r: &mut R) {
    let width = scene.viewport().x;
    for star in scene.stars.iter_mut() {
        let alpha = star.twinkle();
        r.fill_rect(
            star.pos,
            Vec2::splat(star.size),
            color::STAR_FILL.with_alpha(alpha),
        );
        star.drift(width);
    }
}

fn draw_particles<R: Renderer + ?Sized>(scene: &mut Scene, r: &mut R, origin: Vec2) {
    for p in scene.particles.iter_mut() {
        p.advance();
        let local = p.offset();
        let tilt = (local.x + local.y) * PARTICLE_TILT_PER_PX;
        let outline: SmallVec<[Vec2; 4]> = marker_outline(p.shape, p.size, tilt)
            .into_iter()
            .map(|v| v + local + origin)
            .collect();
        let stroke = Stroke::new(
            Color::Hsla(
                p.hue,
                color::PARTICLE_SATURATION,
                color::PARTICLE_LIGHTNESS,
                color::PARTICLE_ALPHA,
            ),
            PARTICLE_LINE_WIDTH,
        );
        r.stroke_path(&outline, true, stroke);
    }
}

fn draw_comets<R: Renderer + ?Sized>(scene: &mut Scene, r: &mut R, origin: Vec2) {
    scene.maybe_spawn_comet();
    for c in scene.comets.iter_mut() {
        c.advance();
        r.stroke_gradient_line(
            c.tail() + origin,
            c.head() + origin,
            color::COMET_TRAIL.with_alpha(0.0),
            color::COMET_TRAIL.with_alpha(COMET_HEAD_ALPHA * c.life),
            COMET_LINE_WIDTH,
        );
    }
    scene.prune_comets();
}

fn draw_emblem<R: Renderer + ?Sized>(r: &mut R, origin: Vec2) {
    let points: SmallVec<[Vec2; 4]> = emblem_outline().into_iter().map(|p| p + origin).collect();
    r.stroke_path(
        &points,
        true,
        Stroke::new(color::EMBLEM_STROKE, EMBLEM_LINE_WIDTH),
    );
}

/// Sampled outline of ring `idx`, relative to the orbit centre: one sample
/// per step from t = 0 through t = 2π inclusive.
pub fn wobble_ring(radius: f32, idx: usize) -> Vec<Vec2> {
    let freq = RING_WOBBLE_FREQ_BASE + idx as f32 * RING_WOBBLE_FREQ_STEP;
    let amplitude = RING_WOBBLE_AMPLITUDE * (idx + 1) as f32 * 0.25;
    (0..=RING_SAMPLES)
        .map(|i| {
            let t = (i as f32 / RING_SAMPLES as f32) * TAU;
            let rr = radius + (t * freq).sin() * amplitude;
            Vec2::from_angle(t) * rr
        })
        .collect()
}

/// Marker corners around its own centre, rotated by `tilt` radians.
pub fn marker_outline(shape: Shape, size: f32, tilt: f32) -> SmallVec<[Vec2; 4]> {
    let s = size;
    let corners: SmallVec<[Vec2; 4]> = match shape {
        Shape::Diamond => SmallVec::from_slice(&[
            Vec2::new(0.0, -s),
            Vec2::new(s, 0.0),
            Vec2::new(0.0, s),
            Vec2::new(-s, 0.0),
        ]),
        Shape::Triangle => SmallVec::from_slice(&[
            Vec2::new(0.0, -s),
            Vec2::new(s * TRIANGLE_HALF_BASE, s),
            Vec2::new(-s * TRIANGLE_HALF_BASE, s),
        ]),
        Shape::Square => SmallVec::from_slice(&[
            Vec2::new(-s, -s),
            Vec2::new(s, -s),
            Vec2::new(s, s),
            Vec2::new(-s, s),
        ]),
    };
    let rot = Vec2::from_angle(tilt);
    corners.into_iter().map(|v| rot.rotate(v)).collect()
}

/// Four-point star at the orbit centre.
pub fn emblem_outline() -> [Vec2; 4] {
    let quarter = std::f32::consts::FRAC_PI_2;
    [0, 1, 2, 3].map(|i| Vec2::from_angle(i as f32 * quarter) * EMBLEM_RADIUS)
}
