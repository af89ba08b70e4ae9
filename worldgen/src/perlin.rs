use crate::utils::{fade, floor, lerp};

// 2D improved Perlin noise over a seeded permutation table.
// This is the four-gradient variant: every lattice corner gets one of the
// diagonal gradients below, picked by the low two bits of its hash.
const GRADIENTS: [(f64, f64); 4] = [(1.0, 1.0), (-1.0, 1.0), (-1.0, -1.0), (1.0, -1.0)];

pub struct Perlin2D {
    perm: [u8; 512], // seeded permutation of 0..=255, duplicated
}

impl Perlin2D {
    pub fn new(seed: i64) -> Self {
        let mut p: [u8; 256] = std::array::from_fn(|i| i as u8);
        // Simple xorshift-based (with a large constant) RNG for shuffling
        let mut x = (seed as u64) ^ 0xDEADBEEFCAFEBABE_u64;
        let mut rng = || {
            x ^= x << 13;
            x ^= x >> 7;
            x ^= x << 17;
            // Bitmasking the lowest 8 bits
            (x & 0xFF) as u8
        };
        // Fisher–Yates shuffle p[0..256]
        for i in (1..256).rev() {
            // mod (i + 1) to constrain it to [0..i]
            let j = (rng() as usize) % (i + 1);
            p.swap(i, j);
        }
        // Duplicate into an array of length 512, so the corner lookups
        // `perm[perm[X] + Y + 1]` (indices up to 511) never need a modulo
        let mut perm = [0u8; 512];
        for i in 0..512 {
            perm[i] = p[i & 255];
        }
        Self { perm }
    }

    #[inline]
    fn grad(hash: u8) -> (f64, f64) {
        GRADIENTS[(hash & 3) as usize]
    }

    #[inline]
    fn dot(offset: (f64, f64), hash: u8) -> f64 {
        let (gx, gy) = Self::grad(hash);
        offset.0 * gx + offset.1 * gy
    }

    // Raw single-octave noise at (x, y), roughly in [-1, 1], unclamped.
    // Exactly 0 at every integer lattice point: the bottom-left offset is
    // (0,0) there and fade(0) = 0 puts all the weight on that corner.
    pub fn noise2d(&self, x: f64, y: f64) -> f64 {
        // Which unit cell, folded onto the 256-entry table
        let xi = (floor(x) & 255) as usize;
        let yi = (floor(y) & 255) as usize;
        // Position within the cell, in [0, 1)
        let xf = x - floor(x) as f64;
        let yf = y - floor(y) as f64;

        // Offsets from each cell corner to the sample point
        let bottom_left = (xf, yf);
        let top_left = (xf, yf - 1.0);
        let bottom_right = (xf - 1.0, yf);
        let top_right = (xf - 1.0, yf - 1.0);

        // Hash the four corners by double indirection through the table
        let hash_bottom_left = self.perm[self.perm[xi] as usize + yi];
        let hash_top_left = self.perm[self.perm[xi] as usize + yi + 1];
        let hash_bottom_right = self.perm[self.perm[xi + 1] as usize + yi];
        let hash_top_right = self.perm[self.perm[xi + 1] as usize + yi + 1];

        let u = fade(xf);
        let v = fade(yf);

        // Blend vertically along each x edge first, then horizontally;
        // swapping the two stages reorients the whole field
        lerp(
            u,
            lerp(
                v,
                Self::dot(bottom_left, hash_bottom_left),
                Self::dot(top_left, hash_top_left),
            ),
            lerp(
                v,
                Self::dot(bottom_right, hash_bottom_right),
                Self::dot(top_right, hash_top_right),
            ),
        )
    }

    // Fractal Brownian motion: sum `octaves` copies of noise2d with halving
    // amplitude and doubling frequency. The sum is NOT normalized - eight
    // octaves top out just under 2.0, not 1.0.
    pub fn fbm(&self, x: f64, y: f64, octaves: u32) -> f64 {
        let mut result = 0.0;
        let mut amplitude = 1.0;
        let mut frequency = 0.005;

        for _ in 0..octaves {
            result += amplitude * self.noise2d(x * frequency, y * frequency);
            amplitude *= 0.5;
            frequency *= 2.0;
        }

        result
    }
}
