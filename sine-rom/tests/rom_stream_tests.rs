use sine_rom::{SineRom, SineTable};

const DEPTH: usize = 256;
const WIDTH: u32 = 16;

/// Clock the ROM through `indices`, reading the register after each edge.
fn stream(rom: &mut SineRom, indices: impl IntoIterator<Item = usize>) -> Vec<i32> {
    let mut output = Vec::new();
    for index in indices {
        rom.tick(index).expect("index within table depth");
        output.push(rom.output());
    }
    output
}

/// Count sign changes in a sample stream.
fn count_zero_crossings(samples: &[i32]) -> usize {
    samples
        .windows(2)
        .filter(|w| (w[0] >= 0) != (w[1] >= 0))
        .count()
}

/// Average value normalized to full scale.
fn dc_offset(samples: &[i32], full_scale: f64) -> f64 {
    let sum: f64 = samples.iter().map(|&s| s as f64).sum();
    sum / samples.len() as f64 / full_scale
}

#[test]
fn test_full_sweep_replays_the_table() {
    let table = SineTable::generate(DEPTH, WIDTH).unwrap();
    let expected: Vec<i32> = table.as_slice().to_vec();

    let mut rom = SineRom::new(table);
    let output = stream(&mut rom, 0..DEPTH);

    assert_eq!(output, expected);
}

#[test]
fn test_streamed_cycles_cross_zero_twice_per_cycle() {
    const CYCLES: usize = 4;

    let mut rom = SineRom::new(SineTable::generate(DEPTH, WIDTH).unwrap());
    let output = stream(&mut rom, (0..DEPTH * CYCLES).map(|i| i % DEPTH));

    let crossings = count_zero_crossings(&output);
    // Two crossings per cycle; the stream edges may hide one.
    let expected = 2 * CYCLES;
    assert!(
        crossings.abs_diff(expected) <= 1,
        "got {} crossings over {} cycles, expected about {}",
        crossings,
        CYCLES,
        expected
    );
}

#[test]
fn test_streamed_cycle_has_near_zero_dc_offset() {
    let mut rom = SineRom::new(SineTable::generate(DEPTH, WIDTH).unwrap());
    let output = stream(&mut rom, 0..DEPTH);

    // Truncation is odd-symmetric, so halves cancel up to the single
    // saturated sample at the positive peak.
    let offset = dc_offset(&output, 32768.0);
    assert!(offset.abs() < 0.001, "DC offset too large: {}", offset);
}

#[test]
fn test_register_follows_only_the_latest_presented_index() {
    let table = SineTable::generate(DEPTH, WIDTH).unwrap();
    let peak = table.get(DEPTH / 4).unwrap();
    let trough = table.get(3 * DEPTH / 4).unwrap();

    let mut rom = SineRom::new(table);

    rom.tick(DEPTH / 4).unwrap();
    assert_eq!(rom.output(), peak);

    // A rejected edge in between must not disturb the registered peak.
    assert!(rom.tick(DEPTH).is_err());
    assert_eq!(rom.output(), peak);

    rom.tick(3 * DEPTH / 4).unwrap();
    assert_eq!(rom.output(), trough);
}

#[test]
fn test_two_roms_over_identical_tables_stay_in_lockstep() {
    let mut a = SineRom::new(SineTable::generate(DEPTH, WIDTH).unwrap());
    let mut b = SineRom::new(SineTable::generate(DEPTH, WIDTH).unwrap());

    let indices: Vec<usize> = (0..DEPTH * 2).map(|i| (i * 7) % DEPTH).collect();
    let out_a = stream(&mut a, indices.iter().copied());
    let out_b = stream(&mut b, indices.iter().copied());

    assert_eq!(out_a, out_b);
}
