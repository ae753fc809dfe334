// Copyright @yucwang 2026

use crate::core::shade_rec::ShadeRec;
use crate::math::constants::Vector3f;
use crate::math::spectrum::RGBSpectrum;

// Definitions of types used in BRDF evaluation. Directions are unit
// vectors in the local shading frame (normal along +z); the model never
// re-projects them.
pub type BrdfValue = RGBSpectrum;

pub trait Brdf: Send + Sync {
    fn name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }

    /// Directional reflectance for the (wo, wi) pair: how much of the
    /// light arriving along wi is scattered toward wo. A color-valued
    /// multiplier, not a radiance; callers apply incident radiance and
    /// the cosine term themselves.
    fn f(&self, sr: &ShadeRec, wo: &Vector3f, wi: &Vector3f) -> BrdfValue;

    /// Reflectance integrated over the incoming hemisphere for wo.
    /// Ambient-style approximations use this when they need a single
    /// "how reflective is this point" value.
    fn rho(&self, sr: &ShadeRec, wo: &Vector3f) -> BrdfValue;
}
