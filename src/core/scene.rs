use crate::constants::*;
use glam::Vec2;
use rand::prelude::*;
use smallvec::SmallVec;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Shape {
    Diamond,
    Triangle,
    Square,
}

impl Shape {
    pub const ALL: [Shape; 3] = [Shape::Diamond, Shape::Triangle, Shape::Square];
}

/// An orbiting marker on one of the rings.
#[derive(Clone, Debug)]
pub struct Particle {
    pub angle: f32,
    /// Signed radians per frame; sign follows ring parity.
    pub speed: f32,
    pub radius: f32,
    pub size: f32,
    pub hue: f32,
    pub shape: Shape,
}

impl Particle {
    /// Advance one frame. The angle stays wrapped into [0, 2π).
    pub fn advance(&mut self) {
        self.angle = (self.angle + self.speed).rem_euclid(TAU);
    }

    /// Position relative to the orbit centre.
    pub fn offset(&self) -> Vec2 {
        Vec2::from_angle(self.angle) * self.radius
    }
}

#[derive(Clone, Debug)]
pub struct Star {
    pub pos: Vec2,
    pub size: f32,
    pub phase: f32,
    pub twinkle_speed: f32,
}

impl Star {
    /// Advance the twinkle phase and return the alpha for this frame.
    pub fn twinkle(&mut self) -> f32 {
        self.phase += self.twinkle_speed;
        STAR_ALPHA_BASE + self.phase.sin() * STAR_ALPHA_SWING
    }

    /// Horizontal drift; wraps to the left edge once past `width`.
    pub fn drift(&mut self, width: f32) {
        self.pos.x += STAR_DRIFT_PX;
        if self.pos.x > width {
            self.pos.x = 0.0;
        }
    }
}

#[derive(Clone, Debug)]
pub struct ArcSegment {
    pub radius: f32,
    pub start: f32,
    pub length: f32,
    pub speed: f32,
}

impl ArcSegment {
    pub fn advance(&mut self) {
        self.start = (self.start + self.speed).rem_euclid(TAU);
    }

    pub fn end(&self) -> f32 {
        self.start + self.length
    }
}

#[derive(Clone, Debug)]
pub struct Comet {
    pub angle: f32,
    pub radius: f32,
    pub speed: f32,
    /// Opacity multiplier in (0, 1]; decays geometrically.
    pub life: f32,
}

impl Comet {
    pub fn advance(&mut self) {
        self.angle += self.speed;
        self.life *= COMET_DECAY;
    }

    pub fn head(&self) -> Vec2 {
        Vec2::from_angle(self.angle) * self.radius
    }

    pub fn tail(&self) -> Vec2 {
        Vec2::from_angle(self.angle + COMET_TRAIL_ANGLE) * self.radius * COMET_TRAIL_RADIUS_SCALE
    }

    pub fn is_spent(&self) -> bool {
        self.life < COMET_MIN_LIFE
    }
}

pub type CometQueue = SmallVec<[Comet; COMET_CAPACITY + 1]>;

#[derive(Clone, Debug)]
pub struct SceneParams {
    pub ring_radii: Vec<f32>,
    pub particle_count: usize,
    pub star_count: usize,
    pub comet_capacity: usize,
    pub comet_spawn_chance: f32,
}

impl Default for SceneParams {
    fn default() -> Self {
        Self {
            ring_radii: RING_RADII.to_vec(),
            particle_count: PARTICLE_COUNT,
            star_count: STAR_COUNT,
            comet_capacity: COMET_CAPACITY,
            comet_spawn_chance: COMET_SPAWN_CHANCE,
        }
    }
}

/// All animated state for one entry overlay.
///
/// Nothing here touches the browser: the frame loop feeds it viewport and
/// pointer updates and hands it a [`crate::render::Renderer`] each frame.
pub struct Scene {
    pub params: SceneParams,
    pub particles: Vec<Particle>,
    pub stars: Vec<Star>,
    pub arcs: Vec<ArcSegment>,
    pub comets: CometQueue,
    viewport: Vec2,
    center: Vec2,
    mouse: Option<Vec2>,
    rng: StdRng,
}

impl Scene {
    pub fn new(params: SceneParams, viewport: Vec2, seed: u64) -> Self {
        Self::with_rng(params, viewport, StdRng::seed_from_u64(seed))
    }

    pub fn from_entropy(params: SceneParams, viewport: Vec2) -> Self {
        Self::with_rng(params, viewport, StdRng::from_entropy())
    }

    fn with_rng(params: SceneParams, viewport: Vec2, mut rng: StdRng) -> Self {
        let particles = init_particles(&params, &mut rng);
        let stars = init_stars(&params, viewport, &mut rng);
        let arcs = init_arcs(&params.ring_radii);
        Self {
            params,
            particles,
            stars,
            arcs,
            comets: CometQueue::new(),
            viewport,
            center: orbit_center(viewport),
            mouse: None,
            rng,
        }
    }

    /// Viewport size in CSS pixels.
    pub fn viewport(&self) -> Vec2 {
        self.viewport
    }

    pub fn center(&self) -> Vec2 {
        self.center
    }

    /// Stars keep their positions; only the wrap edge and centre move.
    pub fn resize(&mut self, viewport: Vec2) {
        self.viewport = viewport;
        self.center = orbit_center(viewport);
    }

    pub fn set_mouse(&mut self, pos: Vec2) {
        self.mouse = Some(pos);
    }

    pub fn mouse(&self) -> Option<Vec2> {
        self.mouse
    }

    /// Offset applied to the foreground layers; zero until the pointer moves.
    pub fn parallax(&self) -> Vec2 {
        match self.mouse {
            Some(m) => (m - self.viewport * 0.5) * PARALLAX_FACTOR,
            None => Vec2::ZERO,
        }
    }

    /// Roll for a new comet. Returns true when one was spawned.
    pub fn maybe_spawn_comet(&mut self) -> bool {
        if self.rng.gen::<f32>() < self.params.comet_spawn_chance {
            self.spawn_comet();
            true
        } else {
            false
        }
    }

    /// Push a fresh comet just outside the outer ring, evicting the oldest
    /// once the queue is over capacity.
    pub fn spawn_comet(&mut self) {
        let outer = self.params.ring_radii.last().copied().unwrap_or(0.0);
        let comet = Comet {
            angle: self.rng.gen::<f32>() * TAU,
            radius: outer + COMET_ORBIT_GAP + self.rng.gen::<f32>() * COMET_ORBIT_SPAN,
            speed: -COMET_SPEED_MIN - self.rng.gen::<f32>() * COMET_SPEED_SPAN,
            life: 1.0,
        };
        self.comets.push(comet);
        while self.comets.len() > self.params.comet_capacity {
            self.comets.remove(0);
        }
    }

    /// Drop comets that have faded out.
    pub fn prune_comets(&mut self) {
        self.comets.retain(|c| !c.is_spent());
    }
}

/// Orbit centre, lifted slightly above the viewport middle.
pub fn orbit_center(viewport: Vec2) -> Vec2 {
    let lift = CENTER_LIFT_MAX.min(viewport.y * CENTER_LIFT_FRACTION);
    Vec2::new(viewport.x / 2.0, viewport.y / 2.0 - lift)
}

fn init_particles(params: &SceneParams, rng: &mut StdRng) -> Vec<Particle> {
    let rings = &params.ring_radii;
    if rings.is_empty() {
        return Vec::new();
    }
    (0..params.particle_count)
        .map(|_| {
            let ring = rng.gen_range(0..rings.len());
            let direction = if ring % 2 == 0 { 1.0 } else { -1.0 };
            Particle {
                angle: rng.gen::<f32>() * TAU,
                speed: (PARTICLE_SPEED_MIN + rng.gen::<f32>() * PARTICLE_SPEED_SPAN) * direction,
                radius: rings[ring] + rng.gen_range(-PARTICLE_RADIUS_JITTER..PARTICLE_RADIUS_JITTER),
                size: PARTICLE_SIZE_MIN + rng.gen::<f32>() * PARTICLE_SIZE_SPAN,
                hue: PARTICLE_HUE_MIN + rng.gen::<f32>() * PARTICLE_HUE_SPAN,
                shape: *Shape::ALL.choose(&mut *rng).unwrap_or(&Shape::Square),
            }
        })
        .collect()
}

fn init_stars(params: &SceneParams, viewport: Vec2, rng: &mut StdRng) -> Vec<Star> {
    (0..params.star_count)
        .map(|_| Star {
            pos: Vec2::new(rng.gen::<f32>() * viewport.x, rng.gen::<f32>() * viewport.y),
            size: STAR_SIZE_MIN + rng.gen::<f32>() * STAR_SIZE_SPAN,
            phase: rng.gen::<f32>() * TAU,
            twinkle_speed: STAR_TWINKLE_MIN + rng.gen::<f32>() * STAR_TWINKLE_SPAN,
        })
        .collect()
}

fn init_arcs(rings: &[f32]) -> Vec<ArcSegment> {
    let mut arcs = Vec::new();
    for (i, r) in rings.iter().enumerate() {
        let count = ARC_BASE_SEGMENTS + i * ARC_SEGMENTS_PER_RING;
        let direction = if i % 2 == 0 { 1.0 } else { -1.0 };
        for s in 0..count {
            arcs.push(ArcSegment {
                radius: r - ARC_RADIUS_INSET,
                start: (s as f32 / count as f32) * TAU,
                length: std::f32::consts::PI / (8.0 + i as f32),
                speed: direction * (ARC_SPEED_BASE + i as f32 * ARC_SPEED_PER_RING),
            });
        }
    }
    arcs
}
