// Copyright @yucwang 2026

use super::constants::Vector3f;

/// Orthonormal basis around a shading normal, normal along local +z.
/// Callers move world-space directions into this frame before handing
/// them to a reflectance model.
pub struct ShadingFrame {
    t: Vector3f,
    b: Vector3f,
    n: Vector3f,
}

impl ShadingFrame {
    pub fn from_normal(n: &Vector3f) -> Self {
        let up = if n.z.abs() < 0.999 {
            Vector3f::new(0.0, 0.0, 1.0)
        } else {
            Vector3f::new(1.0, 0.0, 0.0)
        };
        let t = n.cross(&up).normalize();
        let b = n.cross(&t).normalize();
        Self { t, b, n: *n }
    }

    pub fn to_local(&self, v: &Vector3f) -> Vector3f {
        Vector3f::new(v.dot(&self.t), v.dot(&self.b), v.dot(&self.n))
    }

    pub fn to_world(&self, v: &Vector3f) -> Vector3f {
        self.t * v.x + self.b * v.y + self.n * v.z
    }
}

#[cfg(test)]
mod tests {
    use super::ShadingFrame;
    use crate::math::constants::Vector3f;

    fn assert_close(a: f32, b: f32) {
        assert!((a - b).abs() < 1e-5, "expected {} ≈ {}", a, b);
    }

    #[test]
    fn test_normal_maps_to_local_z() {
        let n = Vector3f::new(0.3, -0.5, 0.8).normalize();
        let frame = ShadingFrame::from_normal(&n);
        let local = frame.to_local(&n);
        assert_close(local.x, 0.0);
        assert_close(local.y, 0.0);
        assert_close(local.z, 1.0);
    }

    #[test]
    fn test_round_trip() {
        let n = Vector3f::new(-0.2, 0.9, 0.4).normalize();
        let frame = ShadingFrame::from_normal(&n);
        let v = Vector3f::new(0.7, 0.1, -0.3);
        let back = frame.to_world(&frame.to_local(&v));
        assert_close(back.x, v.x);
        assert_close(back.y, v.y);
        assert_close(back.z, v.z);
    }

    #[test]
    fn test_degenerate_vertical_normal() {
        let n = Vector3f::new(0.0, 0.0, 1.0);
        let frame = ShadingFrame::from_normal(&n);
        let local = frame.to_local(&n);
        assert_close(local.z, 1.0);
    }
}
