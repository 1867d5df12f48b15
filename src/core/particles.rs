use crate::core::constants::*;
use rand::prelude::*;

/// Randomized look of one floating background particle.
#[derive(Clone, Debug, PartialEq)]
pub struct ParticleSpec {
    pub size_px: f64,
    pub left_pct: f64,
    pub top_pct: f64,
    pub duration_s: f64,
    pub delay_s: f64,
    pub color: &'static str,
}

impl ParticleSpec {
    pub fn random<R: Rng>(rng: &mut R) -> Self {
        let size_px = PARTICLE_SIZE_MIN_PX + rng.gen::<f64>() * PARTICLE_SIZE_SPAN_PX;
        let left_pct = rng.gen::<f64>() * 100.0;
        let top_pct = rng.gen::<f64>() * 100.0;
        let duration_s = PARTICLE_DURATION_MIN_S + rng.gen::<f64>() * PARTICLE_DURATION_SPAN_S;
        let delay_s = rng.gen::<f64>() * PARTICLE_DELAY_MAX_S;
        let color = PARTICLE_COLORS
            .choose(rng)
            .copied()
            .unwrap_or(PARTICLE_COLORS[0]);
        Self {
            size_px,
            left_pct,
            top_pct,
            duration_s,
            delay_s,
            color,
        }
    }

    /// Inline style properties as `(property, value)` pairs.
    pub fn style_properties(&self) -> Vec<(&'static str, String)> {
        vec![
            ("width", format!("{}px", self.size_px)),
            ("height", format!("{}px", self.size_px)),
            ("left", format!("{}%", self.left_pct)),
            ("top", format!("{}%", self.top_pct)),
            ("animation-duration", format!("{}s", self.duration_s)),
            ("animation-delay", format!("{}s", self.delay_s)),
            ("background", self.color.to_string()),
            ("box-shadow", format!("0 0 10px {}", self.color)),
        ]
    }
}

pub fn generate_particles<R: Rng>(rng: &mut R, count: usize) -> Vec<ParticleSpec> {
    (0..count).map(|_| ParticleSpec::random(rng)).collect()
}
