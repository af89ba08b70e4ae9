use image::{Rgb, RgbImage};
use palette::{Gradient, LinSrgb};
use std::path::Path;
use worldgen::Generator;
use worldgen::utils::block_to_rgb;

// Compute simple hillshade for a grid of surface levels
// `z_scale` adjusts vertical exaggeration
fn hillshade(heights: &[Vec<i64>], z_scale: f32) -> Vec<Vec<f32>> {
    let h = heights.len();
    let w = heights[0].len();
    let mut shade = vec![vec![1.0; w]; h];
    let azimuth = std::f32::consts::PI / 4.0; // 45°
    let altitude = std::f32::consts::PI / 4.0; // 45°
    let (sin_alt, cos_alt) = altitude.sin_cos();

    for row in 1..h - 1 {
        for col in 1..w - 1 {
            // 3×3 neighborhood finite differences
            let dzdx = ((heights[row][col + 1] - heights[row][col - 1]) as f32 / 2.0) * z_scale;
            let dzdy = ((heights[row + 1][col] - heights[row - 1][col]) as f32 / 2.0) * z_scale;
            // Surface normal
            let nx = -dzdx;
            let ny = -dzdy;
            let nz = 1.0;
            let len = (nx * nx + ny * ny + nz * nz).sqrt();
            let (nx, ny, nz) = (nx / len, ny / len, nz / len);
            // Light vector from azimuth/altitude
            let lx = azimuth.cos() * cos_alt;
            let ly = azimuth.sin() * cos_alt;
            let lz = sin_alt;
            // Lambertian dot
            shade[row][col] = (nx * lx + ny * ly + nz * lz).max(0.0);
        }
    }
    shade
}

fn main() {
    let size: i64 = 512;
    let generator = Generator::new(2025);

    // Sample the surface level over a size×size region centered on the origin
    let heights: Vec<Vec<i64>> = (0..size)
        .map(|row| {
            (0..size)
                .map(|col| generator.surface_level(col - size / 2, row - size / 2))
                .collect()
        })
        .collect();

    // Elevation tint from deep water to snow, over the attainable band
    let gradient = Gradient::with_domain(vec![
        (0.00, LinSrgb::new(0.0, 0.0, 0.5)),
        (0.35, LinSrgb::new(0.1, 0.4, 0.8)),
        (0.50, LinSrgb::new(0.1, 0.6, 0.2)),
        (0.80, LinSrgb::new(0.5, 0.4, 0.3)),
        (1.00, LinSrgb::new(1.0, 1.0, 1.0)),
    ]);

    let shade = hillshade(&heights, 0.6);

    let mut img = RgbImage::new(size as u32, size as u32);
    for row in 0..size {
        for col in 0..size {
            let x = col - size / 2;
            let z = row - size / 2;
            let surface = heights[row as usize][col as usize];
            // Surface block color (the sea renders as water, not sea floor)
            let block = if surface < -14 {
                generator.block_at(x, -15, z)
            } else {
                generator.block_at(x, surface, z)
            };
            let [br, bg, bb] = block_to_rgb(block);

            // Blend block color with the elevation tint, then hillshade
            let norm = ((surface + 70) as f32 / 140.0).clamp(0.0, 1.0);
            let tint: LinSrgb = gradient.get(norm);
            let tint = tint.into_format::<u8>();
            let light = (shade[row as usize][col as usize] * 0.5 + 0.5).clamp(0.0, 1.0);
            let pixel = Rgb([
                ((br as f32 * 0.6 + tint.red as f32 * 0.4) * light) as u8,
                ((bg as f32 * 0.6 + tint.green as f32 * 0.4) * light) as u8,
                ((bb as f32 * 0.6 + tint.blue as f32 * 0.4) * light) as u8,
            ]);
            img.put_pixel(col as u32, row as u32, pixel);
        }
    }

    let path = Path::new("surface_map.png");
    img.save(path).unwrap();
    println!("Saved surface map to {:?} (seed {})", path, generator.seed());
}
