// worldgen holds the seeded noise and block classification pipeline
pub mod generator;
pub mod perlin;
pub mod utils;

pub use generator::{Block, Generator};
pub use perlin::Perlin2D;
pub use utils::to_block_image;
