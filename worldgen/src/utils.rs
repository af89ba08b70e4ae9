use crate::generator::Block;

// Numeric primitives shared by the noise evaluator and the block classifier,
// plus the block-to-color helpers used by the image examples and the viewer.

// Greatest integer <= v (floor toward negative infinity)
// A plain `v as i64` truncates toward zero, which is off by one
// for the whole negative half-line; world coordinates go negative
// as often as positive, so that matters everywhere here
#[inline]
pub fn floor(v: f64) -> i64 {
    let i = v as i64;
    if v < i as f64 { i - 1 } else { i }
}

#[inline]
pub fn clamp(v: i32, lo: i32, hi: i32) -> i32 {
    v.max(lo).min(hi)
}

// Linear interpolation; t outside [0,1] extrapolates
#[inline]
pub fn lerp(t: f64, a: f64, b: f64) -> f64 {
    a + t * (b - a)
}

// Fade function as defined by Ken Perlin: 6t^5 − 15t^4 + 10t^3
// Its first and second derivatives are zero at t=0 and t=1, which
// hides the lattice grid in the interpolated field
// (the classic cubic smoothstep does not qualify - nonzero second derivative)
#[inline]
pub fn fade(t: f64) -> f64 {
    ((6.0 * t - 15.0) * t + 10.0) * t * t * t
}

// Round to nearest, halves away from zero (f64::round semantics),
// not half-to-even; the surface level depends on this choice at ties
#[inline]
pub fn round(v: f64) -> i64 {
    v.round() as i64
}

// Pack four channels big-endian as 0xAARRGGBB, clamping each to [0,255]
// Packed in u32 and reinterpreted, so full alpha comes out negative
pub fn rgba(alpha: i32, red: i32, green: i32, blue: i32) -> i32 {
    (((clamp(alpha, 0, 255) as u32) << 24)
        | ((clamp(red, 0, 255) as u32) << 16)
        | ((clamp(green, 0, 255) as u32) << 8)
        | clamp(blue, 0, 255) as u32) as i32
}

// 2D block slice: row-major Vec<Vec<Block>>
// access as `map[row][col]`.
pub type BlockMap2D = Vec<Vec<Block>>;

// Display color for a block, used by the PNG examples and the viewer
pub fn block_to_rgb(block: Block) -> [u8; 3] {
    match block {
        Block::Air => [160, 200, 235],
        Block::Stone => [110, 110, 116],
        Block::Grass => [86, 152, 62],
        Block::Water => [52, 104, 198],
        Block::Dirt => [134, 96, 67],
        Block::Snow => [236, 240, 244],
    }
}

// Convert a block grid (row-major) into a flat RGB byte buffer
// For building an image buffer (PNG export, egui texture upload)
pub fn to_block_image(map: &BlockMap2D) -> Vec<u8> {
    let width = map.first().map_or(0, Vec::len);
    let mut buf = Vec::with_capacity(map.len() * width * 3);
    for row in map {
        for &block in row {
            buf.extend_from_slice(&block_to_rgb(block));
        }
    }
    buf
}
