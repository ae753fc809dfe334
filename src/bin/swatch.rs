// Copyright @yucwang 2026

use std::env;

use console::style;
use indicatif::{ProgressBar, ProgressStyle};

use praline::core::brdf::Brdf;
use praline::core::material_loader::{load_materials_seeded, NamedBrdf};
use praline::core::shade_rec::ShadeRec;
use praline::io::exr_utils::write_exr_to_file;
use praline::math::constants::{Float, Vector2f, Vector3f};
use praline::math::frame::ShadingFrame;

const BACKGROUND: Float = 0.05;
const LIGHT_RADIANCE: Float = 3.0;
const AMBIENT_RADIANCE: Float = 0.08;

fn main() {
    env::set_var("RUST_LOG", "info");
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    if args.len() < 3 {
        eprintln!("Usage: {} <materials.xml> <output-prefix> [--tile N] [--seed N]", args[0]);
        std::process::exit(1);
    }

    let input_path = &args[1];
    let output_prefix = &args[2];
    let mut tile: usize = 128;
    let mut seed: u64 = 0;

    let mut i = 3;
    while i < args.len() {
        match args[i].as_str() {
            "--tile" => {
                i += 1;
                tile = args.get(i).and_then(|v| v.parse::<usize>().ok()).unwrap_or(128);
            }
            "--seed" => {
                i += 1;
                seed = args.get(i).and_then(|v| v.parse::<u64>().ok()).unwrap_or(0);
            }
            other => {
                eprintln!("Unknown option: {}", other);
                std::process::exit(1);
            }
        }
        i += 1;
    }

    let materials = match load_materials_seeded(input_path, seed) {
        Ok(materials) => materials,
        Err(e) => {
            eprintln!("Failed to load materials from {}: {:?}", input_path, e);
            std::process::exit(1);
        }
    };
    if materials.is_empty() {
        eprintln!("No materials found in {}.", input_path);
        std::process::exit(1);
    }
    log::info!("Loaded {} materials from {}.", materials.len(), input_path);

    let width = tile * materials.len();
    let height = tile;
    let mut sheet = vec![(0.0, 0.0, 0.0); width * height];

    let progress = ProgressBar::new(materials.len() as u64);
    progress.set_style(
        ProgressStyle::with_template("[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} swatches")
            .unwrap_or_else(|_| ProgressStyle::default_bar()),
    );

    for (index, material) in materials.iter().enumerate() {
        let pixels = shade_swatch(material, tile);
        for y in 0..tile {
            for x in 0..tile {
                sheet[y * width + index * tile + x] = pixels[y * tile + x];
            }
        }
        progress.inc(1);
    }
    progress.finish();

    let exr_path = format!("{}.exr", output_prefix);
    write_exr_to_file(&sheet, width, height, &exr_path);

    let png_path = format!("{}.png", output_prefix);
    write_png(&sheet, width, height, &png_path);

    println!("{} {} swatches -> {} / {}",
             style("done").green(), materials.len(), exr_path, png_path);
}

// One directionally-lit sphere swatch. The light and view live in world
// space; per pixel they move into the local shading frame before the
// BRDF sees them, direct lighting applies the cosine term and the
// ambient term uses the hemispherical reflectance.
fn shade_swatch(material: &NamedBrdf, tile: usize) -> Vec<(Float, Float, Float)> {
    let view = Vector3f::new(0.0, 0.0, 1.0);
    let light = Vector3f::new(-0.4, 0.6, 0.8).normalize();

    let mut pixels = vec![(BACKGROUND, BACKGROUND, BACKGROUND); tile * tile];
    for py in 0..tile {
        for px in 0..tile {
            let x = 2.0 * (px as Float + 0.5) / (tile as Float) - 1.0;
            let y = 1.0 - 2.0 * (py as Float + 0.5) / (tile as Float);
            let d2 = x * x + y * y;
            if d2 >= 1.0 {
                continue;
            }

            let n = Vector3f::new(x, y, (1.0 - d2).sqrt());
            let sr = ShadeRec::new(n, n, n,
                                   Vector2f::new((x + 1.0) * 0.5, (y + 1.0) * 0.5),
                                   1.0);
            let frame = ShadingFrame::from_normal(&n);
            let wo = frame.to_local(&view);
            let wi = frame.to_local(&light);

            let mut radiance = material.brdf.rho(&sr, &wo) * AMBIENT_RADIANCE;
            let cos_theta = wi.z;
            if cos_theta > 0.0 {
                radiance += material.brdf.f(&sr, &wo, &wi) * (cos_theta * LIGHT_RADIANCE);
            }

            pixels[py * tile + px] = (radiance.r(), radiance.g(), radiance.b());
        }
    }

    pixels
}

fn write_png(image: &[(Float, Float, Float)], width: usize, height: usize, path: &str) {
    let mut png = image::RgbImage::new(width as u32, height as u32);
    for y in 0..height {
        for x in 0..width {
            let (r, g, b) = image[y * width + x];
            png.put_pixel(x as u32, y as u32, image::Rgb([
                to_srgb_byte(r),
                to_srgb_byte(g),
                to_srgb_byte(b),
            ]));
        }
    }
    match png.save(path) {
        Ok(()) => log::info!("PNG written to: {}.", path),
        Err(e) => log::error!("PNG written error: {}.", e),
    }
}

fn to_srgb_byte(v: Float) -> u8 {
    let clamped = v.max(0.0).min(1.0);
    (clamped.powf(1.0 / 2.2) * 255.0 + 0.5) as u8
}
