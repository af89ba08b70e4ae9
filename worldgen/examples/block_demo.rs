use worldgen::{Block, Generator};

fn glyph(block: Block) -> char {
    match block {
        Block::Air => '.',
        Block::Stone => '#',
        Block::Grass => '"',
        Block::Water => '~',
        Block::Dirt => 'o',
        Block::Snow => '*',
    }
}

fn main() {
    let generator = Generator::new(2025);

    // Surface levels for the 16×16 region around the origin
    println!("surface levels (seed {}):", generator.seed());
    for z in -8..8_i64 {
        for x in -8..8_i64 {
            print!("{:>4} ", generator.surface_level(x, z));
        }
        println!();
    }

    // Vertical slice along z at x = 0, top to bottom
    println!("\nslice at x = 0, z in -32..32:");
    for y in (-45..=30_i64).rev() {
        print!("{:>4} ", y);
        for z in -32..32_i64 {
            print!("{}", glyph(generator.block_at(0, y, z)));
        }
        println!();
    }
}
