// Copyright @yucwang 2026

use std::sync::Arc;

use crate::core::brdf::{Brdf, BrdfValue};
use crate::core::shade_rec::ShadeRec;
use crate::math::constants::{ Float, Vector3f };

/// Weighted mix of two reflectance models. weight applies to `a`,
/// (1 - weight) to `b`.
pub struct BlendBrdf {
    a: Arc<dyn Brdf>,
    b: Arc<dyn Brdf>,
    weight: Float,
}

impl BlendBrdf {
    pub fn new(a: Arc<dyn Brdf>, b: Arc<dyn Brdf>, weight: Float) -> Self {
        let weight = weight.max(0.0).min(1.0);
        Self { a, b, weight }
    }

    pub fn weight(&self) -> Float {
        self.weight
    }
}

impl Brdf for BlendBrdf {
    fn name(&self) -> &'static str {
        "BlendBrdf"
    }

    fn f(&self, sr: &ShadeRec, wo: &Vector3f, wi: &Vector3f) -> BrdfValue {
        self.a.f(sr, wo, wi) * self.weight + self.b.f(sr, wo, wi) * (1.0 - self.weight)
    }

    fn rho(&self, sr: &ShadeRec, wo: &Vector3f) -> BrdfValue {
        self.a.rho(sr, wo) * self.weight + self.b.rho(sr, wo) * (1.0 - self.weight)
    }
}
