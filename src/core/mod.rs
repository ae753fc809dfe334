// Copyright @yucwang 2026

pub mod brdf;
pub mod material_loader;
pub mod rng;
pub mod shade_rec;
