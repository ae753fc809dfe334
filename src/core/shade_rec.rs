// Copyright @yucwang 2026

use crate::math::constants::{ Float, Vector2f, Vector3f };

/// Local surface state at a hit point, filled in by the intersection
/// stage. Reflectance models only ever read it.
pub struct ShadeRec {
    p: Vector3f,
    geo_normal: Vector3f,
    sh_normal: Vector3f,
    uv: Vector2f,
    t: Float,
}

impl ShadeRec {
    pub fn new(new_p: Vector3f,
               new_geo_normal: Vector3f,
               new_sh_normal: Vector3f,
               new_uv: Vector2f,
               new_t: Float) -> Self {
        Self { p: new_p, geo_normal: new_geo_normal, sh_normal: new_sh_normal,
               uv: new_uv, t: new_t }
    }

    pub fn p(&self) -> Vector3f {
        self.p
    }

    pub fn geo_normal(&self) -> Vector3f {
        self.geo_normal
    }

    pub fn sh_normal(&self) -> Vector3f {
        self.sh_normal
    }

    pub fn uv(&self) -> Vector2f {
        self.uv
    }

    pub fn t(&self) -> Float {
        self.t
    }
}

#[cfg(test)]
mod tests {
    use super::ShadeRec;
    use crate::math::constants::{Vector2f, Vector3f};

    #[test]
    fn test_getters_return_construction_values() {
        let sr = ShadeRec::new(Vector3f::new(1.0, 2.0, 3.0),
                               Vector3f::new(0.0, 0.0, 1.0),
                               Vector3f::new(0.0, 1.0, 0.0),
                               Vector2f::new(0.25, 0.75),
                               4.5);
        assert_eq!(sr.p(), Vector3f::new(1.0, 2.0, 3.0));
        assert_eq!(sr.geo_normal(), Vector3f::new(0.0, 0.0, 1.0));
        assert_eq!(sr.sh_normal(), Vector3f::new(0.0, 1.0, 0.0));
        assert_eq!(sr.uv(), Vector2f::new(0.25, 0.75));
        assert_eq!(sr.t(), 4.5);
    }
}
