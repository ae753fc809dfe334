// Copyright @yucwang 2026

use crate::core::brdf::{Brdf, BrdfValue};
use crate::core::rng::{random_color, LcgRng};
use crate::core::shade_rec::ShadeRec;
use crate::math::constants::{ Float, INV_PI, Vector3f };
use crate::math::spectrum::RGBSpectrum;

/// Ideal diffuse reflectance: incident light scatters equally toward
/// every outgoing direction, so both queries ignore wo and wi.
pub struct LambertianBrdf {
    kd: Float,
    cd: RGBSpectrum,
}

impl LambertianBrdf {
    /// Values are stored as given. Physical plausibility (kd in [0, 1],
    /// energy conservation) is the scene author's problem, not checked
    /// here.
    pub fn new(kd: Float, cd: RGBSpectrum) -> Self {
        Self { kd, cd }
    }

    /// Default material: full reflective efficiency, color drawn from
    /// the injected random source.
    pub fn random(rng: &mut LcgRng) -> Self {
        Self { kd: 1.0, cd: random_color(rng) }
    }

    pub fn kd(&self) -> Float {
        self.kd
    }

    pub fn cd(&self) -> RGBSpectrum {
        self.cd
    }
}

impl Brdf for LambertianBrdf {
    fn name(&self) -> &'static str {
        "LambertianBrdf"
    }

    // kd * cd / pi, so that the cosine-weighted hemispherical integral
    // comes out to exactly kd * cd.
    fn f(&self, _sr: &ShadeRec, _wo: &Vector3f, _wi: &Vector3f) -> BrdfValue {
        self.cd * (self.kd * INV_PI)
    }

    fn rho(&self, _sr: &ShadeRec, _wo: &Vector3f) -> BrdfValue {
        self.cd * self.kd
    }
}

#[cfg(test)]
mod tests {
    use super::LambertianBrdf;
    use crate::core::brdf::Brdf;
    use crate::core::rng::LcgRng;
    use crate::core::shade_rec::ShadeRec;
    use crate::math::constants::{Float, INV_PI, PI, Vector2f, Vector3f};
    use crate::math::spectrum::RGBSpectrum;

    fn assert_close(a: Float, b: Float) {
        assert!((a - b).abs() < 1e-5, "expected {} ≈ {}", a, b);
    }

    fn test_sr() -> ShadeRec {
        ShadeRec::new(Vector3f::new(0.0, 0.0, 0.0),
                      Vector3f::new(0.0, 0.0, 1.0),
                      Vector3f::new(0.0, 0.0, 1.0),
                      Vector2f::new(0.5, 0.5),
                      1.0)
    }

    #[test]
    fn test_f_is_direction_independent() {
        let brdf = LambertianBrdf::new(0.8, RGBSpectrum::new(0.2, 0.4, 0.6));
        let sr = test_sr();
        let a = brdf.f(&sr,
                       &Vector3f::new(0.0, 0.0, 1.0),
                       &Vector3f::new(0.0, 0.0, 1.0));
        let b = brdf.f(&sr,
                       &Vector3f::new(0.7, 0.1, 0.7).normalize(),
                       &Vector3f::new(-0.3, 0.6, 0.2).normalize());
        assert_eq!(a, b);
    }

    #[test]
    fn test_f_matches_kd_cd_over_pi() {
        let brdf = LambertianBrdf::new(0.5, RGBSpectrum::new(1.0, 0.0, 0.0));
        let sr = test_sr();
        let wo = Vector3f::new(0.0, 0.0, 1.0);
        let value = brdf.f(&sr, &wo, &wo);
        assert_close(value[0], 0.5 * INV_PI);
        assert_close(value[1], 0.0);
        assert_close(value[2], 0.0);
    }

    #[test]
    fn test_rho_matches_kd_cd() {
        let brdf = LambertianBrdf::new(0.5, RGBSpectrum::new(1.0, 0.0, 0.0));
        let sr = test_sr();
        let value = brdf.rho(&sr, &Vector3f::new(0.0, 0.0, 1.0));
        assert_close(value[0], 0.5);
        assert_close(value[1], 0.0);
        assert_close(value[2], 0.0);
    }

    #[test]
    fn test_rho_consistent_with_f() {
        let brdf = LambertianBrdf::new(0.65, RGBSpectrum::new(0.3, 0.9, 0.1));
        let sr = test_sr();
        let wo = Vector3f::new(0.1, 0.2, 0.97).normalize();
        let wi = Vector3f::new(-0.4, 0.5, 0.76).normalize();
        let f = brdf.f(&sr, &wo, &wi);
        let rho = brdf.rho(&sr, &wo);
        for idx in 0..3 {
            assert_close(rho[idx], f[idx] * PI);
        }
    }

    #[test]
    fn test_random_construction_defaults() {
        let mut rng = LcgRng::new(99);
        let brdf = LambertianBrdf::random(&mut rng);
        assert_close(brdf.kd(), 1.0);
        let cd = brdf.cd();
        for idx in 0..3 {
            assert!(cd[idx] >= 0.0 && cd[idx] <= 1.0, "out of range: {}", cd[idx]);
        }
    }

    #[test]
    fn test_zero_kd_kills_both_queries() {
        let brdf = LambertianBrdf::new(0.0, RGBSpectrum::new(0.9, 0.8, 0.7));
        let sr = test_sr();
        let wo = Vector3f::new(0.3, -0.3, 0.9).normalize();
        let wi = Vector3f::new(0.0, 0.0, 1.0);
        assert!(brdf.f(&sr, &wo, &wi).is_black());
        assert!(brdf.rho(&sr, &wo).is_black());
    }

    #[test]
    fn test_out_of_range_parameters_scale_linearly() {
        let sr = test_sr();
        let wo = Vector3f::new(0.0, 0.0, 1.0);
        let base = LambertianBrdf::new(1.0, RGBSpectrum::new(1.0, 1.0, 1.0));
        let hot = LambertianBrdf::new(2.0, RGBSpectrum::new(1.0, 1.0, 1.0));
        let f_base = base.f(&sr, &wo, &wo);
        let f_hot = hot.f(&sr, &wo, &wo);
        for idx in 0..3 {
            assert_close(f_hot[idx], 2.0 * f_base[idx]);
        }
        let rho_hot = hot.rho(&sr, &wo);
        for idx in 0..3 {
            assert_close(rho_hot[idx], 2.0);
        }
    }

    #[test]
    fn test_name() {
        let brdf = LambertianBrdf::new(1.0, RGBSpectrum::default());
        assert_eq!(brdf.name(), "LambertianBrdf");
    }
}
