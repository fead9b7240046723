use clap::Parser;
use hound::{SampleFormat, WavSpec, WavWriter};
use sine_rom::{SineRom, SineTable};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "Tone Renderer")]
#[command(about = "Clocks a sine ROM through a phase accumulator and writes a WAV", long_about = None)]
struct Args {
    /// Table depth (angle steps per cycle)
    #[arg(long, default_value_t = 256)]
    depth: usize,

    /// Sample width in bits (1-32)
    #[arg(long, default_value_t = 16)]
    width: u32,

    /// Tone frequency in Hz
    #[arg(long, default_value_t = 440)]
    freq: u32,

    /// Output sample rate in Hz
    #[arg(long, name = "sample-rate", default_value_t = 48000)]
    sample_rate: u32,

    /// Duration in seconds
    #[arg(long, default_value_t = 2)]
    seconds: u32,

    /// Output WAV file path
    #[arg(long, default_value = "./tone.wav")]
    output: PathBuf,
}

fn main() {
    let args = Args::parse();

    let table = SineTable::generate(args.depth, args.width).unwrap_or_else(|e| {
        eprintln!("Invalid table configuration: {}", e);
        std::process::exit(1);
    });
    let mut rom = SineRom::new(table);

    println!(
        "Rendering {} Hz over a {}x{} table at {} Hz for {} s",
        args.freq, args.depth, args.width, args.sample_rate, args.seconds
    );

    let spec = WavSpec {
        channels: 1,
        sample_rate: args.sample_rate,
        bits_per_sample: 16,
        sample_format: SampleFormat::Int,
    };
    let mut writer = WavWriter::create(&args.output, spec).expect("Failed to create WAV file");

    // 32-bit phase accumulator: one full wrap is one table cycle. The
    // presented index is the accumulator scaled down to table depth.
    let phase_inc = ((args.freq as u64) << 32) / args.sample_rate as u64;
    let phase_inc = phase_inc as u32;
    let mut phase: u32 = 0;

    let total_samples = args.sample_rate as u64 * args.seconds as u64;
    for _ in 0..total_samples {
        let index = ((phase as u64 * rom.depth() as u64) >> 32) as usize;
        rom.tick(index).expect("phase index within depth");

        let sample = rom.output();
        let pcm = if args.width <= 16 {
            (sample << (16 - args.width)) as i16
        } else {
            (sample >> (args.width - 16)) as i16
        };
        writer.write_sample(pcm).expect("Failed to write sample");

        phase = phase.wrapping_add(phase_inc);
    }

    writer.finalize().expect("Failed to finalize WAV file");
    println!("Wrote {} samples to {}", total_samples, args.output.display());
}
