//! Decorative particle field drawn behind the page content.
//!
//! The simulation is pure and surface-agnostic: [`ParticleField::step`]
//! advances it one frame, [`ParticleField::render`] paints it onto any
//! [`Surface`]. Scheduling lives in [`crate::core::timing::FrameLoop`].

mod surface;

use std::collections::VecDeque;
use std::ops::RangeInclusive;

use dioxus::logger::tracing::warn;
use rand::seq::SliceRandom;
use rand::Rng;
use serde::Deserialize;

#[cfg(target_arch = "wasm32")]
pub use surface::CanvasSurface;
pub use surface::{Scene, Shape, Surface};

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ParticleConfig {
    /// Particles created on start; the field never holds more than twice this.
    pub baseline_count: usize,
    pub radius_min: f64,
    pub radius_max: f64,
    /// Upper bound of |vx| and |vy| in pixels per frame.
    pub max_speed: f64,
    pub opacity_floor: f64,
    pub opacity_ceiling: f64,
    pub opacity_speed_min: f64,
    pub opacity_speed_max: f64,
    /// Pairs closer than this are joined by a line.
    pub connection_distance: f64,
    /// Line opacity at zero distance.
    pub line_opacity: f64,
    pub line_color: String,
    pub palette: Vec<String>,
}

impl Default for ParticleConfig {
    fn default() -> Self {
        Self {
            baseline_count: 60,
            radius_min: 1.0,
            radius_max: 3.0,
            max_speed: 0.5,
            opacity_floor: 0.1,
            opacity_ceiling: 0.6,
            opacity_speed_min: 0.002,
            opacity_speed_max: 0.01,
            connection_distance: 120.0,
            line_opacity: 0.25,
            line_color: "#c23c2a".to_string(),
            palette: vec![
                "#c23c2a".to_string(),
                "#e6a23c".to_string(),
                "#5fa8d3".to_string(),
                "#f2f2f2".to_string(),
            ],
        }
    }
}

/// Backdrop tuning shipped with the site. Omitted fields keep their defaults.
const SITE_CONFIG: &str = include_str!("../../assets/particles.json");

impl ParticleConfig {
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }

    /// The shipped tuning, or the defaults if it does not parse.
    pub fn site() -> Self {
        Self::from_json(SITE_CONFIG).unwrap_or_else(|err| {
            warn!(target: "particles", "ignoring particles.json: {err}");
            Self::default()
        })
    }

    fn capacity(&self) -> usize {
        self.baseline_count.saturating_mul(2)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    pub x: f64,
    pub y: f64,
    pub vx: f64,
    pub vy: f64,
    pub radius: f64,
    pub color: String,
    pub opacity: f64,
    pub opacity_speed: f64,
    /// +1 while fading in, -1 while fading out.
    pub opacity_dir: f64,
}

/// A line between two particles, by index into the current field.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Connection {
    pub a: usize,
    pub b: usize,
    pub opacity: f64,
}

#[derive(Debug, Clone)]
pub struct ParticleField {
    config: ParticleConfig,
    width: f64,
    height: f64,
    particles: VecDeque<Particle>,
}

impl ParticleField {
    pub fn new<R: Rng + ?Sized>(config: ParticleConfig, width: f64, height: f64, rng: &mut R) -> Self {
        let mut field = Self {
            config,
            width: width.max(0.0),
            height: height.max(0.0),
            particles: VecDeque::new(),
        };
        field.populate(rng);
        field
    }

    pub fn config(&self) -> &ParticleConfig {
        &self.config
    }

    pub fn size(&self) -> (f64, f64) {
        (self.width, self.height)
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn particles(&self) -> impl Iterator<Item = &Particle> {
        self.particles.iter()
    }

    /// Throw everything away and start over on a surface of the new size.
    pub fn resize<R: Rng + ?Sized>(&mut self, width: f64, height: f64, rng: &mut R) {
        self.width = width.max(0.0);
        self.height = height.max(0.0);
        self.populate(rng);
    }

    fn populate<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.particles.clear();
        for _ in 0..self.config.baseline_count {
            let x = sample(rng, 0.0..=self.width);
            let y = sample(rng, 0.0..=self.height);
            let particle = self.spawn(x, y, rng);
            self.particles.push_back(particle);
        }
    }

    fn spawn<R: Rng + ?Sized>(&self, x: f64, y: f64, rng: &mut R) -> Particle {
        let cfg = &self.config;
        let speed = cfg.max_speed.abs();
        let floor = cfg.opacity_floor.min(cfg.opacity_ceiling);
        let ceiling = cfg.opacity_ceiling.max(cfg.opacity_floor);

        Particle {
            x,
            y,
            vx: sample(rng, -speed..=speed),
            vy: sample(rng, -speed..=speed),
            radius: sample(rng, cfg.radius_min..=cfg.radius_max),
            color: cfg
                .palette
                .choose(rng)
                .cloned()
                .unwrap_or_else(|| cfg.line_color.clone()),
            opacity: sample(rng, floor..=ceiling),
            opacity_speed: sample(rng, cfg.opacity_speed_min..=cfg.opacity_speed_max),
            opacity_dir: if rng.gen_bool(0.5) { 1.0 } else { -1.0 },
        }
    }

    /// Add one particle at a point (clamped to the surface). The oldest
    /// particles are dropped once the field exceeds twice the baseline.
    pub fn add_at<R: Rng + ?Sized>(&mut self, x: f64, y: f64, rng: &mut R) {
        let particle = self.spawn(x.clamp(0.0, self.width), y.clamp(0.0, self.height), rng);
        self.particles.push_back(particle);
        while self.particles.len() > self.config.capacity() {
            self.particles.pop_front();
        }
    }

    /// Advance one frame.
    pub fn step(&mut self) {
        let floor = self.config.opacity_floor.min(self.config.opacity_ceiling);
        let ceiling = self.config.opacity_ceiling.max(self.config.opacity_floor);
        let (width, height) = (self.width, self.height);

        for p in self.particles.iter_mut() {
            p.x += p.vx;
            p.y += p.vy;

            p.opacity += p.opacity_speed * p.opacity_dir;
            if p.opacity >= ceiling {
                p.opacity = ceiling;
                p.opacity_dir = -1.0;
            } else if p.opacity <= floor {
                p.opacity = floor;
                p.opacity_dir = 1.0;
            }

            reflect(&mut p.x, &mut p.vx, width);
            reflect(&mut p.y, &mut p.vy, height);
        }
    }

    /// Pairs closer than the connection distance, with their line opacity.
    pub fn connections(&self) -> Vec<Connection> {
        let limit = self.config.connection_distance;
        let mut out = Vec::new();
        for (i, a) in self.particles.iter().enumerate() {
            for (j, b) in self.particles.iter().enumerate().skip(i + 1) {
                let distance = (a.x - b.x).hypot(a.y - b.y);
                if distance < limit {
                    out.push(Connection {
                        a: i,
                        b: j,
                        opacity: self.config.line_opacity * (1.0 - distance / limit),
                    });
                }
            }
        }
        out
    }

    /// Paint the current state: discs first, then connecting lines.
    pub fn render(&self, surface: &mut impl Surface) {
        surface.clear(self.width, self.height);
        for p in &self.particles {
            surface.fill_disc(p.x, p.y, p.radius, &p.color, p.opacity);
        }
        for link in self.connections() {
            let (a, b) = (&self.particles[link.a], &self.particles[link.b]);
            surface.stroke_line(a.x, a.y, b.x, b.y, &self.config.line_color, link.opacity);
        }
    }
}

/// Keep `pos` inside `[0, max]`, turning the velocity back inward at a wall.
fn reflect(pos: &mut f64, vel: &mut f64, max: f64) {
    if *pos < 0.0 {
        *pos = 0.0;
        *vel = vel.abs();
    } else if *pos > max {
        *pos = max;
        *vel = -vel.abs();
    }
}

fn sample<R: Rng + ?Sized>(rng: &mut R, range: RangeInclusive<f64>) -> f64 {
    let (lo, hi) = (*range.start(), *range.end());
    if hi > lo {
        rng.gen_range(lo..=hi)
    } else {
        lo
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn field(seed: u64) -> (ParticleField, StdRng) {
        let mut rng = StdRng::seed_from_u64(seed);
        let field = ParticleField::new(ParticleConfig::default(), 800.0, 600.0, &mut rng);
        (field, rng)
    }

    #[test]
    fn partial_json_keeps_defaults_for_missing_fields() {
        let config = ParticleConfig::from_json(r##"{ "baseline_count": 12, "line_color": "#fff" }"##)
            .expect("valid config");
        assert_eq!(config.baseline_count, 12);
        assert_eq!(config.capacity(), 24);
        assert_eq!(config.line_color, "#fff");
        let defaults = ParticleConfig::default();
        assert_eq!(config.connection_distance, defaults.connection_distance);
        assert_eq!(config.palette, defaults.palette);
    }

    #[test]
    fn malformed_config_is_an_error() {
        assert!(ParticleConfig::from_json(r#"{ "baseline_count": "many" }"#).is_err());
        assert!(ParticleConfig::from_json("[]").is_err());
    }

    #[test]
    fn shipped_config_parses() {
        assert_eq!(
            ParticleConfig::from_json(SITE_CONFIG).expect("particles.json parses"),
            ParticleConfig::site()
        );
    }

    #[test]
    fn starts_with_the_baseline_inside_the_surface() {
        let (field, _) = field(1);
        assert_eq!(field.len(), ParticleConfig::default().baseline_count);
        for p in field.particles() {
            assert!((0.0..=800.0).contains(&p.x));
            assert!((0.0..=600.0).contains(&p.y));
            assert!((1.0..=3.0).contains(&p.radius));
            assert!(p.vx.abs() <= 0.5 && p.vy.abs() <= 0.5);
        }
    }

    #[test]
    fn positions_stay_in_bounds_over_many_frames() {
        let mut rng = StdRng::seed_from_u64(7);
        let config = ParticleConfig {
            max_speed: 37.0,
            ..ParticleConfig::default()
        };
        let mut field = ParticleField::new(config, 300.0, 200.0, &mut rng);
        for _ in 0..5_000 {
            field.step();
            for p in field.particles() {
                assert!((0.0..=300.0).contains(&p.x), "x out of bounds: {}", p.x);
                assert!((0.0..=200.0).contains(&p.y), "y out of bounds: {}", p.y);
            }
        }
    }

    #[test]
    fn velocity_turns_inward_at_walls() {
        let (mut x, mut vx) = (-2.0, -1.5);
        reflect(&mut x, &mut vx, 100.0);
        assert_eq!((x, vx), (0.0, 1.5));

        let (mut x, mut vx) = (103.0, 2.0);
        reflect(&mut x, &mut vx, 100.0);
        assert_eq!((x, vx), (100.0, -2.0));

        let (mut x, mut vx) = (50.0, -2.0);
        reflect(&mut x, &mut vx, 100.0);
        assert_eq!((x, vx), (50.0, -2.0));
    }

    #[test]
    fn opacity_oscillates_between_floor_and_ceiling() {
        let (mut field, _) = field(3);
        let cfg = field.config().clone();
        let mut flipped_down = false;
        let mut flipped_up = false;
        let mut last_dir: Vec<f64> = field.particles().map(|p| p.opacity_dir).collect();

        for _ in 0..2_000 {
            field.step();
            for (p, prev) in field.particles().zip(last_dir.iter_mut()) {
                assert!(p.opacity >= cfg.opacity_floor && p.opacity <= cfg.opacity_ceiling);
                if *prev > 0.0 && p.opacity_dir < 0.0 {
                    flipped_down = true;
                    assert_eq!(p.opacity, cfg.opacity_ceiling);
                }
                if *prev < 0.0 && p.opacity_dir > 0.0 {
                    flipped_up = true;
                    assert_eq!(p.opacity, cfg.opacity_floor);
                }
                *prev = p.opacity_dir;
            }
        }
        assert!(flipped_down && flipped_up);
    }

    #[test]
    fn adding_particles_is_capped_at_twice_the_baseline() {
        let (mut field, mut rng) = field(11);
        let cap = 2 * field.config().baseline_count;

        for i in 0..500 {
            field.add_at(i as f64, 10.0, &mut rng);
            assert!(field.len() <= cap);
        }
        assert_eq!(field.len(), cap);

        // FIFO: the survivors are the most recent additions.
        let oldest_x = field.particles().next().map(|p| p.x);
        assert_eq!(oldest_x, Some((500 - cap) as f64));
    }

    #[test]
    fn added_particles_are_clamped_to_the_surface() {
        let (mut field, mut rng) = field(5);
        field.add_at(-40.0, 9_000.0, &mut rng);
        let last = field.particles().last().cloned().expect("particle added");
        assert_eq!((last.x, last.y), (0.0, 600.0));
    }

    #[test]
    fn distant_pairs_are_never_connected() {
        let (mut field, _) = field(9);
        let limit = field.config().connection_distance;
        for _ in 0..50 {
            field.step();
            let particles: Vec<_> = field.particles().cloned().collect();
            for link in field.connections() {
                let (a, b) = (&particles[link.a], &particles[link.b]);
                let d = (a.x - b.x).hypot(a.y - b.y);
                assert!(d < limit);
                let expected = field.config().line_opacity * (1.0 - d / limit);
                assert!((link.opacity - expected).abs() < 1e-9);
            }
        }
    }

    #[test]
    fn render_draws_discs_then_lines() {
        let mut rng = StdRng::seed_from_u64(2);
        let config = ParticleConfig {
            baseline_count: 0,
            ..ParticleConfig::default()
        };
        let mut field = ParticleField::new(config, 400.0, 400.0, &mut rng);
        field.config.baseline_count = 3;
        field.add_at(10.0, 10.0, &mut rng);
        field.add_at(70.0, 10.0, &mut rng);
        field.add_at(390.0, 390.0, &mut rng);

        let mut scene = Scene::default();
        field.render(&mut scene);

        assert_eq!(scene.size(), (400.0, 400.0));
        let discs = scene.shapes().iter().filter(|s| matches!(s, Shape::Disc { .. })).count();
        let lines: Vec<_> = scene
            .shapes()
            .iter()
            .filter_map(|s| match s {
                Shape::Line { x1, x2, opacity, .. } => Some((*x1, *x2, *opacity)),
                _ => None,
            })
            .collect();
        assert_eq!(discs, 3);
        assert_eq!(lines.len(), 1);
        let (x1, x2, opacity) = lines[0];
        assert_eq!((x1, x2), (10.0, 70.0));
        assert!((opacity - 0.25 * (1.0 - 60.0 / 120.0)).abs() < 1e-9);
        assert!(matches!(scene.shapes().last(), Some(Shape::Line { .. })));
    }

    #[test]
    fn resize_regenerates_for_the_new_surface() {
        let (mut field, mut rng) = field(4);
        field.add_at(1.0, 1.0, &mut rng);
        field.resize(100.0, 50.0, &mut rng);
        assert_eq!(field.len(), field.config().baseline_count);
        assert_eq!(field.size(), (100.0, 50.0));
        assert!(field.particles().all(|p| p.x <= 100.0 && p.y <= 50.0));
    }
}
