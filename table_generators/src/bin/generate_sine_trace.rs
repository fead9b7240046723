use std::env;

use sine_rom::SineTable;

/// Dumps the per-entry generation trace as CSV, one row per angle step.
fn main() {
    let args: Vec<String> = env::args().collect();

    let depth: usize = args.get(1).and_then(|s| s.parse().ok()).unwrap_or(256);
    let width: u32 = args.get(2).and_then(|s| s.parse().ok()).unwrap_or(16);

    eprintln!("Tracing sine table generation:");
    eprintln!("  DEPTH: {}", depth);
    eprintln!("  WIDTH: {}", width);
    eprintln!();

    println!("index,angle_radians,raw_sine,scaled_value,quantized_value");
    let result = SineTable::generate_with_observer(depth, width, |entry| {
        println!(
            "{},{:.15},{:.15},{:.6},{}",
            entry.index, entry.angle, entry.sine, entry.scaled, entry.quantized
        );
    });

    if let Err(e) = result {
        eprintln!("Invalid configuration: {}", e);
        std::process::exit(1);
    }
}
