use anyhow::Result;

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

    /// Uniform integer in `0..n`.
    fn below(&mut self, n: u32) -> u32 {
        (self.next_f64() * f64::from(n)) as u32
    }
}

/// Region name, number of towns, base attractiveness in `0..1`.
const REGIONS: [(&str, usize, f64); 5] = [
    ("Mount Lebanon Governorate", 12, 0.8),
    ("North Governorate", 9, 0.45),
    ("South Governorate", 8, 0.5),
    ("Bekaa Governorate", 7, 0.35),
    ("Akkar Governorate", 5, 0.2),
];

fn main() -> Result<()> {
    let mut rng = SimpleRng::new(42);

    let output_path = "sample_tourism.csv";
    let mut writer = csv::Writer::from_path(output_path)?;
    writer.write_record([
        "Ref area",
        "Town",
        "Total number of cafes",
        "Total number of hotels",
        "Total number of restaurants",
        "Tourism Index",
    ])?;

    let mut rows = 0;
    for (region, towns, appeal) in REGIONS {
        let short = region.split_whitespace().next().unwrap_or(region);
        for t in 0..towns {
            // Busier towns get more of everything and a higher index.
            let size = appeal * (0.5 + rng.next_f64());
            let cafes = (size * 20.0) as u32 + rng.below(5);
            let hotels = (size * 6.0) as u32 + rng.below(3);
            let restaurants = (size * 30.0) as u32 + rng.below(8);
            let index = (size * 70.0 + rng.next_f64() * 15.0).min(100.0);

            writer.write_record([
                region.to_string(),
                format!("{short} Town {}", t + 1),
                cafes.to_string(),
                hotels.to_string(),
                restaurants.to_string(),
                format!("{index:.1}"),
            ])?;
            rows += 1;
        }
    }
    writer.flush()?;

    println!("Wrote {rows} towns in {} regions to {output_path}", REGIONS.len());
    Ok(())
}
