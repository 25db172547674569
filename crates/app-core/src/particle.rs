use glam::Vec2;
use rand::rngs::StdRng;
use rand::Rng;

use crate::constants::{DENSITY_MAX, DENSITY_MIN, SIZE_MAX, SIZE_MIN};
use crate::cursor::Cursor;
use crate::field::FieldParams;

/// Behavioral mode of a particle.
///
/// `Exploding` is deliberately not a state: an explosion is a one-shot
/// velocity re-randomization that drops the particle back into `Floating`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
    Floating,
    FormingText,
}

#[derive(Clone, Copy, Debug)]
pub struct Particle {
    pub position: Vec2,
    /// Target coordinate while forming text; initialized to the spawn point.
    pub target: Vec2,
    pub velocity: Vec2,
    /// Rendered radius, drawn once at creation.
    pub size: f32,
    /// Weight scaling the repulsion response, drawn once at creation.
    pub density: f32,
    pub mode: Mode,
}

impl Particle {
    pub fn new(position: Vec2, params: &FieldParams, rng: &mut StdRng) -> Self {
        let half = params.drift_speed * 0.5;
        Self {
            position,
            target: position,
            velocity: Vec2::new(
                rng.gen_range(-half..=half),
                rng.gen_range(-half..=half),
            ),
            size: rng.gen_range(SIZE_MIN..=SIZE_MAX),
            density: rng.gen_range(DENSITY_MIN..=DENSITY_MAX),
            mode: Mode::Floating,
        }
    }

    /// Assign a glyph coordinate and switch into text formation.
    #[inline]
    pub fn set_target(&mut self, target: Vec2) {
        self.target = target;
        self.mode = Mode::FormingText;
    }

    /// Drop back into free float, independent of whether the target was reached.
    #[inline]
    pub fn release(&mut self) {
        self.mode = Mode::Floating;
    }

    /// One-shot dispersal: back to `Floating` with both velocity components
    /// re-drawn at explosion magnitude, symmetric around zero.
    pub fn explode(&mut self, params: &FieldParams, rng: &mut StdRng) {
        let half = params.explode_speed * 0.5;
        self.mode = Mode::Floating;
        self.velocity = Vec2::new(
            rng.gen_range(-half..=half),
            rng.gen_range(-half..=half),
        );
    }

    /// Per-tick step. Text formation takes precedence over pointer
    /// avoidance; repulsion only applies while floating, and a degenerate
    /// zero distance to the cursor falls through to free drift.
    pub fn update(&mut self, cursor: &Cursor, bounds: Vec2, params: &FieldParams, rng: &mut StdRng) {
        if self.mode == Mode::FormingText {
            // Ease-out: cover a fixed fraction of the remaining distance.
            let displacement = self.target - self.position;
            self.position += displacement / params.ease_divisor;
            return;
        }

        if let Some(cursor_pos) = cursor.position {
            let away = self.position - cursor_pos;
            let distance = away.length();
            if distance > 0.0 && distance < cursor.radius {
                // Linear falloff: full push at the cursor center, zero at the edge.
                let falloff = (cursor.radius - distance) / cursor.radius;
                self.position += (away / distance) * falloff * self.density * params.repulsion_strength;
                return;
            }
        }

        self.drift(bounds, params, rng);
    }

    fn drift(&mut self, bounds: Vec2, params: &FieldParams, rng: &mut StdRng) {
        self.position += self.velocity;

        // Bounded jitter; the ceiling never shrinks a velocity already above
        // it, so explosion speeds survive while jitter growth stays capped.
        let ceiling = params.max_drift_speed.max(self.velocity.length());
        self.velocity += Vec2::new(
            rng.gen_range(-params.velocity_jitter..=params.velocity_jitter),
            rng.gen_range(-params.velocity_jitter..=params.velocity_jitter),
        );
        self.velocity = self.velocity.clamp_length_max(ceiling);

        // Elastic reflection; the particle may sit briefly off-surface.
        if self.position.x < 0.0 || self.position.x > bounds.x {
            self.velocity.x = -self.velocity.x;
        }
        if self.position.y < 0.0 || self.position.y > bounds.y {
            self.velocity.y = -self.velocity.y;
        }
    }
}
