use std::env;

use sine_rom::SineTable;

fn main() {
    let args: Vec<String> = env::args().collect();

    let depth: usize = args.get(1).and_then(|s| s.parse().ok()).unwrap_or(256);
    let width: u32 = args.get(2).and_then(|s| s.parse().ok()).unwrap_or(16);

    eprintln!("Generating sine table:");
    eprintln!("  DEPTH: {}", depth);
    eprintln!("  WIDTH: {}", width);
    eprintln!();

    let table = SineTable::generate(depth, width).unwrap_or_else(|e| {
        eprintln!("Invalid configuration: {}", e);
        std::process::exit(1);
    });

    // Narrowest signed element type that holds a width-bit sample.
    let element = match width {
        0..=8 => "i8",
        9..=16 => "i16",
        _ => "i32",
    };

    print!("pub static SINE_TABLE: [{}; {}] = [", element, depth);
    for &sample in table.as_slice() {
        println!();
        print!("    {},", sample);
    }
    println!();
    println!("];");

    eprintln!();
    eprintln!("Sanity checks:");
    eprintln!(
        "  Sample at 0° (i=0): {} (expected: 0)",
        table.get(0).unwrap()
    );
    if depth >= 4 {
        eprintln!(
            "  Sample at 90° (i={}): {} (expected: ~{})",
            depth / 4,
            table.get(depth / 4).unwrap(),
            table.max_sample()
        );
        eprintln!(
            "  Sample at 180° (i={}): {} (expected: ~0)",
            depth / 2,
            table.get(depth / 2).unwrap()
        );
        eprintln!(
            "  Sample at 270° (i={}): {} (expected: ~{})",
            depth * 3 / 4,
            table.get(depth * 3 / 4).unwrap(),
            table.min_sample()
        );
    }
}
