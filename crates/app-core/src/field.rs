use glam::Vec2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::constants::{
    CURSOR_RADIUS, DRIFT_SPEED, EASE_DIVISOR, EXPLODE_SPEED, MAX_DRIFT_SPEED, PARTICLE_COUNT,
    REPULSION_STRENGTH, VELOCITY_JITTER,
};
use crate::cursor::Cursor;
use crate::particle::{Mode, Particle};

/// Simulation tuning. Every behavioral knob is a named parameter, so a
/// different field feel is a parameter choice rather than a code change.
#[derive(Clone, Copy, Debug)]
pub struct FieldParams {
    pub particle_count: usize,
    pub cursor_radius: f32,
    pub ease_divisor: f32,
    pub repulsion_strength: f32,
    pub drift_speed: f32,
    pub velocity_jitter: f32,
    pub max_drift_speed: f32,
    pub explode_speed: f32,
}

impl Default for FieldParams {
    fn default() -> Self {
        Self {
            particle_count: PARTICLE_COUNT,
            cursor_radius: CURSOR_RADIUS,
            ease_divisor: EASE_DIVISOR,
            repulsion_strength: REPULSION_STRENGTH,
            drift_speed: DRIFT_SPEED,
            velocity_jitter: VELOCITY_JITTER,
            max_drift_speed: MAX_DRIFT_SPEED,
            explode_speed: EXPLODE_SPEED,
        }
    }
}

/// The particle collection plus the surface bounds it lives in.
///
/// Particle count is fixed per field instance; a resize replaces the whole
/// population rather than migrating it, accepting the loss of in-flight
/// animation state.
pub struct Field {
    particles: Vec<Particle>,
    pub width: f32,
    pub height: f32,
    pub params: FieldParams,
    rng: StdRng,
}

impl Field {
    pub fn new(width: f32, height: f32, params: FieldParams, seed: u64) -> Self {
        let mut field = Self {
            particles: Vec::with_capacity(params.particle_count),
            width,
            height,
            params,
            rng: StdRng::seed_from_u64(seed),
        };
        field.populate();
        field
    }

    fn populate(&mut self) {
        self.particles.clear();
        for _ in 0..self.params.particle_count {
            let position = Vec2::new(
                self.rng.gen_range(0.0..=self.width),
                self.rng.gen_range(0.0..=self.height),
            );
            let particle = Particle::new(position, &self.params, &mut self.rng);
            self.particles.push(particle);
        }
    }

    /// Full re-initialization at new surface bounds.
    pub fn resize(&mut self, width: f32, height: f32) {
        log::debug!(
            "[field] resize {}x{} -> repopulating {} particles",
            width,
            height,
            self.params.particle_count
        );
        self.width = width;
        self.height = height;
        self.populate();
    }

    #[inline]
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.particles.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    /// Advance every particle by one tick against the shared cursor state.
    pub fn step(&mut self, cursor: &Cursor) {
        let bounds = Vec2::new(self.width, self.height);
        for particle in &mut self.particles {
            particle.update(cursor, bounds, &self.params, &mut self.rng);
        }
    }

    /// Fan glyph coordinates out onto particles in order. Surplus particles
    /// stay in background float; surplus coordinates are silently truncated.
    pub fn assign_targets(&mut self, coordinates: &[Vec2]) {
        for (i, particle) in self.particles.iter_mut().enumerate() {
            match coordinates.get(i) {
                Some(&target) => particle.set_target(target),
                None => particle.release(),
            }
        }
    }

    /// Return every particle to free float, with drift velocities re-drawn
    /// so the dispersal does not look frozen.
    pub fn release_targets(&mut self) {
        let half = self.params.drift_speed * 0.5;
        for particle in &mut self.particles {
            particle.release();
            particle.velocity = Vec2::new(
                self.rng.gen_range(-half..=half),
                self.rng.gen_range(-half..=half),
            );
        }
    }

    /// Click-triggered dispersal of the whole field.
    pub fn explode_all(&mut self) {
        for particle in &mut self.particles {
            particle.explode(&self.params, &mut self.rng);
        }
    }

    pub fn count_in_mode(&self, mode: Mode) -> usize {
        self.particles.iter().filter(|p| p.mode == mode).count()
    }
}
