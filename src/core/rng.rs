// Copyright @yucwang 2026

use crate::math::constants::Float;
use crate::math::spectrum::RGBSpectrum;

pub struct LcgRng {
    state: u64,
}

impl LcgRng {
    pub fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    pub fn next_u32(&mut self) -> u32 {
        self.state = self.state.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.state >> 32) as u32
    }

    pub fn next_f32(&mut self) -> Float {
        (self.next_u32() as Float) / (u32::MAX as Float)
    }
}

/// Draw a color with components in [0, 1]. Default-constructed test
/// materials use this so untextured surfaces can be told apart at a
/// glance; pass a fixed seed when the colors have to reproduce.
pub fn random_color(rng: &mut LcgRng) -> RGBSpectrum {
    RGBSpectrum::new(rng.next_f32(), rng.next_f32(), rng.next_f32())
}
