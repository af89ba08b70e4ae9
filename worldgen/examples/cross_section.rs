// Renders a vertical slice of the world at z = 0: every column shows the
// strata from sky to bedrock-depth stone (air, snow, grass, dirt, stone,
// water), straight from the block classifier.

use image::{Rgb, RgbImage};
use std::path::Path;
use worldgen::Generator;
use worldgen::utils::{BlockMap2D, block_to_rgb};

const WIDTH: i64 = 768;
const Y_TOP: i64 = 79;
const Y_BOTTOM: i64 = -80;

fn main() {
    let generator = Generator::new(2025);
    let z = 0;

    // Rows top-down so higher y lands higher in the image
    let slice: BlockMap2D = (0..(Y_TOP - Y_BOTTOM + 1))
        .map(|row| {
            let y = Y_TOP - row;
            (0..WIDTH)
                .map(|col| generator.block_at(col - WIDTH / 2, y, z))
                .collect()
        })
        .collect();

    let height = slice.len() as u32;
    let mut img = RgbImage::new(WIDTH as u32, height);
    for (row, blocks) in slice.iter().enumerate() {
        for (col, &block) in blocks.iter().enumerate() {
            img.put_pixel(col as u32, row as u32, Rgb(block_to_rgb(block)));
        }
    }

    let path = Path::new("cross_section.png");
    img.save(path).unwrap();
    println!("Saved cross section at z={} to {:?}", z, path);
}
