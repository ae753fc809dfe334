// Copyright @yucwang 2026

use crate::core::brdf::{Brdf, BrdfValue};
use crate::core::rng::{random_color, LcgRng};
use crate::core::shade_rec::ShadeRec;
use crate::math::constants::{ Float, INV_PI, Vector3f };
use crate::math::spectrum::RGBSpectrum;

/// Normalized Phong lobe: ks * cs * (exp + 2)/(2*pi) * (r . wo)^exp,
/// with r the mirror of wi about the local +z normal. Incidence from
/// below the horizon contributes nothing.
pub struct GlossySpecularBrdf {
    ks: Float,
    cs: RGBSpectrum,
    exp: Float,
}

impl GlossySpecularBrdf {
    pub fn new(ks: Float, cs: RGBSpectrum, exp: Float) -> Self {
        Self { ks, cs, exp }
    }

    /// Default glossy test material: full strength, random highlight
    /// color, medium sharpness.
    pub fn random(rng: &mut LcgRng) -> Self {
        Self { ks: 1.0, cs: random_color(rng), exp: 32.0 }
    }

    pub fn ks(&self) -> Float {
        self.ks
    }

    pub fn cs(&self) -> RGBSpectrum {
        self.cs
    }

    pub fn exp(&self) -> Float {
        self.exp
    }
}

impl Brdf for GlossySpecularBrdf {
    fn name(&self) -> &'static str {
        "GlossySpecularBrdf"
    }

    fn f(&self, _sr: &ShadeRec, wo: &Vector3f, wi: &Vector3f) -> BrdfValue {
        if wi.z <= 0.0 {
            return RGBSpectrum::default();
        }

        // Mirror wi about the shading normal, which is +z here.
        let r = Vector3f::new(-wi.x, -wi.y, wi.z);
        let r_dot_wo = r.dot(wo).max(0.0);
        let exp = self.exp.max(0.0);
        let norm = (exp + 2.0) * 0.5 * INV_PI;

        self.cs * (self.ks * norm * r_dot_wo.powf(exp))
    }

    // The lobe is view-dependent; a constant ambient term takes no
    // glossy contribution.
    fn rho(&self, _sr: &ShadeRec, _wo: &Vector3f) -> BrdfValue {
        RGBSpectrum::default()
    }
}
