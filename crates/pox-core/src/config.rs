//! Runtime shell configuration.
//!
//! The web crate embeds `assets/config/shell.toml` and parses it at startup
//! with [`ShellConfig::from_toml`]. Every key is optional.

use rand::Rng;
use serde::Deserialize;

use crate::error::ConfigError;

/// Inclusive `min..=max` range sampled uniformly.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
pub struct Span {
    pub min: f64,
    pub max: f64,
}

impl Span {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    fn validate(&self, field: &'static str) -> Result<(), ConfigError> {
        if self.min.is_finite() && self.max.is_finite() && self.min <= self.max {
            Ok(())
        } else {
            Err(ConfigError::InvalidRange {
                field,
                min: self.min,
                max: self.max,
            })
        }
    }

    /// Uniform sample; a degenerate span always yields `min`.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        if self.min >= self.max {
            self.min
        } else {
            rng.gen_range(self.min..=self.max)
        }
    }

    pub fn contains(&self, value: f64) -> bool {
        (self.min..=self.max).contains(&value)
    }
}

/// Decorative particle parameters.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct ParticleConfig {
    /// Number of particles in the background.
    pub count: usize,
    /// Diameter in px.
    pub size: Span,
    /// Initial scale factor.
    pub scale: Span,
    /// Upward travel per loop in px.
    pub rise: Span,
    /// Horizontal travel per loop in px.
    pub drift: Span,
    /// Loop duration in seconds.
    pub duration: Span,
}

impl Default for ParticleConfig {
    fn default() -> Self {
        Self {
            count: 20,
            size: Span::new(10.0, 30.0),
            scale: Span::new(0.5, 1.0),
            rise: Span::new(0.0, 100.0),
            drift: Span::new(0.0, 50.0),
            duration: Span::new(10.0, 20.0),
        }
    }
}

impl ParticleConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        self.size.validate("particles.size")?;
        self.scale.validate("particles.scale")?;
        self.rise.validate("particles.rise")?;
        self.drift.validate("particles.drift")?;
        self.duration.validate("particles.duration")
    }
}

/// Top-level shell configuration.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ShellConfig {
    pub particles: ParticleConfig,
}

impl ShellConfig {
    /// Parses and validates a TOML document.
    pub fn from_toml(source: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(source)?;
        config.particles.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_empty_document_uses_defaults() {
        assert_eq!(ShellConfig::from_toml("").unwrap(), ShellConfig::default());
    }

    #[test]
    fn test_partial_override() {
        let config = ShellConfig::from_toml(
            r#"
            [particles]
            count = 8
            size = { min = 4.0, max = 6.0 }
            "#,
        )
        .unwrap();
        assert_eq!(config.particles.count, 8);
        assert_eq!(config.particles.size, Span::new(4.0, 6.0));
        assert_eq!(config.particles.duration, ParticleConfig::default().duration);
    }

    #[test]
    fn test_inverted_range_rejected() {
        let err = ShellConfig::from_toml(
            r#"
            [particles]
            duration = { min = 20.0, max = 10.0 }
            "#,
        )
        .unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidRange {
                field: "particles.duration",
                ..
            }
        ));
    }

    #[test]
    fn test_malformed_toml_rejected() {
        let err = ShellConfig::from_toml("[particles\ncount = 3").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));

        let err = ShellConfig::from_toml("[particles]\ncount = \"many\"").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_span_sample() {
        let mut rng = StdRng::seed_from_u64(7);
        let span = Span::new(10.0, 20.0);
        for _ in 0..100 {
            assert!(span.contains(span.sample(&mut rng)));
        }
        assert_eq!(Span::new(3.0, 3.0).sample(&mut rng), 3.0);
    }
}
