//! Writes deterministic sample datasets so the interactive app has data to
//! analyze out of the box: `Housing.csv` and `PopChange.csv`.

use anyhow::{Context, Result};

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

fn write_housing(rng: &mut SimpleRng) -> Result<()> {
    let mut writer = csv::Writer::from_path("Housing.csv").context("creating Housing.csv")?;
    writer.write_record(["AGE", "BEDRMS", "BUILT", "ROOMS", "UTILITY"])?;

    for _ in 0..120 {
        let age = rng.gauss(32.0, 16.0).abs().round() as i64;
        let bedrms = 1 + (rng.next_u64() % 5) as i64;
        let built = 2020 - age;
        let rooms = bedrms + 2 + (rng.next_u64() % 4) as i64;
        let utility = (rng.gauss(450.0, 120.0).max(40.0) * 10.0).round() / 10.0;

        writer.write_record([
            age.to_string(),
            bedrms.to_string(),
            built.to_string(),
            rooms.to_string(),
            utility.to_string(),
        ])?;
    }

    writer.flush().context("writing Housing.csv")?;
    Ok(())
}

fn write_pop_change(rng: &mut SimpleRng) -> Result<()> {
    let mut writer = csv::Writer::from_path("PopChange.csv").context("creating PopChange.csv")?;
    writer.write_record(["Area", "Pop Apr 1", "Pop Jul 1", "Change Pop"])?;

    for i in 0..60 {
        let apr = (rng.gauss(50_000.0, 18_000.0).abs() as i64).max(500);
        let jul = apr + rng.gauss(0.0, 1_500.0).round() as i64;
        let change = jul - apr;

        writer.write_record([
            format!("Area {:02}", i + 1),
            apr.to_string(),
            jul.to_string(),
            change.to_string(),
        ])?;
    }

    writer.flush().context("writing PopChange.csv")?;
    Ok(())
}

fn main() -> Result<()> {
    let mut rng = SimpleRng::new(42);
    write_housing(&mut rng)?;
    write_pop_change(&mut rng)?;
    println!("Wrote Housing.csv (120 rows) and PopChange.csv (60 rows)");
    Ok(())
}
