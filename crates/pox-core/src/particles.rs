//! Decorative floating particles for the page background.
//!
//! Pure generation only: the web crate renders each [`Particle`] as an
//! absolutely positioned element whose CSS animation loops forever.

use rand::Rng;

use crate::config::ParticleConfig;

/// Visible area particles are scattered over, in px.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Particle {
    /// Initial position in px.
    pub x: f64,
    pub y: f64,
    pub size: f64,
    pub scale: f64,
    /// Upward travel per loop in px.
    pub rise: f64,
    /// Horizontal travel per loop in px.
    pub drift: f64,
    /// Loop duration in seconds.
    pub duration: f64,
}

impl Particle {
    /// Inline style for the particle element.
    pub fn style(&self) -> String {
        format!(
            "left: {:.1}px; top: {:.1}px; width: {:.1}px; height: {:.1}px; \
             --scale: {:.3}; --rise: -{:.1}px; --drift: {:.1}px; animation-duration: {:.2}s;",
            self.x, self.y, self.size, self.size, self.scale, self.rise, self.drift, self.duration
        )
    }
}

/// Generates `config.count` particles.
///
/// Without a viewport every particle starts at the origin.
pub fn generate_particles<R: Rng + ?Sized>(
    rng: &mut R,
    config: &ParticleConfig,
    viewport: Option<Viewport>,
) -> Vec<Particle> {
    (0..config.count)
        .map(|_| {
            let (x, y) = match viewport {
                Some(Viewport { width, height }) => (
                    rng.gen_range(0.0..=width.max(0.0)),
                    rng.gen_range(0.0..=height.max(0.0)),
                ),
                None => (0.0, 0.0),
            };
            Particle {
                x,
                y,
                size: config.size.sample(rng),
                scale: config.scale.sample(rng),
                rise: config.rise.sample(rng),
                drift: config.drift.sample(rng),
                duration: config.duration.sample(rng),
            }
        })
        .collect()
}

/// [`generate_particles`] with the thread-local RNG.
pub fn random_particles(config: &ParticleConfig, viewport: Option<Viewport>) -> Vec<Particle> {
    generate_particles(&mut rand::thread_rng(), config, viewport)
}
