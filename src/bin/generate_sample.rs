use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

/// Write a synthetic simulation progress log for trying out the viewer.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Output file
    #[arg(default_value = "SIMULATION_PROGRESS_OUT.csv")]
    output: PathBuf,

    /// Number of samples (lines)
    #[arg(long, default_value_t = 600)]
    samples: usize,

    /// Vector components per sample
    #[arg(long, default_value_t = 4)]
    components: usize,

    /// PRNG seed
    #[arg(long, default_value_t = 42)]
    seed: u64,
}

/// Minimal deterministic PRNG (xoshiro256**)
struct SimpleRng {
    state: [u64; 4],
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        let mut s = [0u64; 4];
        let mut x = seed;
        for slot in &mut s {
            x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
            *slot = x;
        }
        SimpleRng { state: s }
    }

    fn next_u64(&mut self) -> u64 {
        let result = (self.state[1].wrapping_mul(5))
            .rotate_left(7)
            .wrapping_mul(9);
        let t = self.state[1] << 17;
        self.state[2] ^= self.state[0];
        self.state[3] ^= self.state[1];
        self.state[1] ^= self.state[2];
        self.state[0] ^= self.state[3];
        self.state[2] ^= t;
        self.state[3] = self.state[3].rotate_left(45);
        result
    }

    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    /// Box-Muller transform for normal distribution
    fn gauss(&mut self, mean: f64, std_dev: f64) -> f64 {
        let u1 = self.next_f64().max(1e-15);
        let u2 = self.next_f64();
        let z = (-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos();
        mean + std_dev * z
    }
}

/// Simulated economy: points accumulate at a noisy rate until they hit the
/// cap, and the cap is raised every `CAP_STEP` samples.
const CAP_STEP: usize = 100;

fn format_line(time: usize, points: i64, cap: i64, pps: i64, vector: &[f64]) -> String {
    let items: Vec<String> = vector.iter().map(|v| format!("{v:.3}")).collect();
    format!("{time}:{points};{cap};{pps};[{}]", items.join(", "))
}

fn main() -> Result<()> {
    let args = Args::parse();
    let mut rng = SimpleRng::new(args.seed);

    let file = File::create(&args.output)
        .with_context(|| format!("creating {}", args.output.display()))?;
    let mut out = BufWriter::new(file);

    let mut points: i64 = 0;
    let mut cap: i64 = 500;
    let mut vector: Vec<f64> = (0..args.components).map(|_| rng.next_f64()).collect();

    for time in 0..args.samples {
        if time > 0 && time % CAP_STEP == 0 {
            cap += 250;
        }

        let pps = rng.gauss(12.0, 4.0).round().max(0.0) as i64;
        points = (points + pps).min(cap);

        for v in &mut vector {
            *v = (*v + rng.gauss(0.0, 0.05)).clamp(-1.0, 2.0);
        }

        writeln!(out, "{}", format_line(time, points, cap, pps, &vector))?;
    }
    out.flush()?;

    println!(
        "Wrote {} samples ({} vector components each) to {}",
        args.samples,
        args.components,
        args.output.display()
    );
    Ok(())
}
