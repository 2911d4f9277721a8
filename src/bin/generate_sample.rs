use std::path::PathBuf;

use anyhow::{Context, Result};
use stat_predictive_power::config::{CSV_FILENAME, DEFAULT_SEASONS};

const PLAYERS: usize = 180;

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

/// Underlying per-player skill; each season is a noisy draw around it.
struct Talent {
    bb: f64,
    k: f64,
    avg: f64,
    iso: f64,
    gb: f64,
    fb: f64,
    o_swing: f64,
    z_swing: f64,
    o_contact: f64,
    z_contact: f64,
    hard: f64,
    soft: f64,
    speed: f64,
}

impl Talent {
    fn draw(rng: &mut SimpleRng) -> Self {
        Talent {
            bb: rng.gauss(8.5, 2.5).clamp(2.0, 20.0),
            k: rng.gauss(21.0, 5.0).clamp(8.0, 38.0),
            avg: rng.gauss(0.255, 0.025),
            iso: rng.gauss(0.170, 0.050).max(0.05),
            gb: rng.gauss(44.0, 6.0),
            fb: rng.gauss(35.0, 6.0),
            o_swing: rng.gauss(30.0, 5.0),
            z_swing: rng.gauss(68.0, 5.0),
            o_contact: rng.gauss(63.0, 8.0),
            z_contact: rng.gauss(86.0, 4.0),
            hard: rng.gauss(35.0, 6.0),
            soft: rng.gauss(17.0, 3.0),
            speed: rng.next_f64(),
        }
    }
}

fn pct(value: f64, spaced: bool) -> String {
    if spaced {
        format!("{value:.1} %")
    } else {
        format!("{value:.1}%")
    }
}

fn season_row(name: &str, season: i32, t: &Talent, rng: &mut SimpleRng) -> Vec<String> {
    let pa = (200.0 + rng.next_f64() * 500.0).round();
    let bb = (t.bb + rng.gauss(0.0, 1.2)).max(0.5);
    let k = (t.k + rng.gauss(0.0, 2.0)).max(3.0);
    let avg = t.avg + rng.gauss(0.0, 0.020);
    let iso = (t.iso + rng.gauss(0.0, 0.025)).max(0.02);
    let obp = avg + bb / 100.0 * 0.9 + rng.gauss(0.0, 0.008);
    let slg = avg + iso;
    let gb = t.gb + rng.gauss(0.0, 3.0);
    let fb = t.fb + rng.gauss(0.0, 3.0);
    let ld = 100.0 - gb - fb;
    let o_swing = t.o_swing + rng.gauss(0.0, 2.0);
    let z_swing = t.z_swing + rng.gauss(0.0, 2.0);
    let o_contact = t.o_contact + rng.gauss(0.0, 3.0);
    let z_contact = (t.z_contact + rng.gauss(0.0, 1.5)).min(99.0);
    let hard = t.hard + rng.gauss(0.0, 3.0);
    let soft = t.soft + rng.gauss(0.0, 2.0);
    let med = 100.0 - hard - soft;

    let hr = (pa * iso * 0.2 * (fb / 35.0)).round().max(0.0);
    let r = (pa * obp * 0.42 + hr * 0.5).round();
    let rbi = (pa * slg * 0.25 + hr * 0.6).round();
    let sb = (pa * t.speed * t.speed * 0.06).round();

    let spaced = rng.next_f64() < 0.5;
    vec![
        name.to_string(),
        season.to_string(),
        format!("{pa}"),
        format!("{hr}"),
        format!("{r}"),
        format!("{rbi}"),
        format!("{sb}"),
        pct(bb, spaced),
        pct(k, spaced),
        format!("{avg:.3}"),
        format!("{obp:.3}"),
        format!("{slg:.3}"),
        pct(gb, spaced),
        pct(fb, spaced),
        pct(ld, spaced),
        pct(o_swing, spaced),
        pct(z_swing, spaced),
        pct(0.45 * o_swing + 0.55 * z_swing, spaced),
        pct(o_contact, spaced),
        pct(z_contact, spaced),
        pct(0.35 * o_contact + 0.65 * z_contact, spaced),
        pct(hard, spaced),
        pct(soft, spaced),
        pct(med, spaced),
    ]
}

fn main() -> Result<()> {
    env_logger::init();

    let output_path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(CSV_FILENAME));

    let mut writer = csv::Writer::from_path(&output_path)
        .with_context(|| format!("creating {}", output_path.display()))?;
    writer.write_record([
        "Name", "Season", "PA", "HR", "R", "RBI", "SB", "BB%", "K%", "AVG", "OBP", "SLG", "GB%",
        "FB%", "LD%", "O-Swing%", "Z-Swing%", "Swing%", "O-Contact%", "Z-Contact%", "Contact%",
        "Hard%", "Soft%", "Med%",
    ])?;

    let mut rng = SimpleRng::new(42);
    let mut rows = 0;
    for i in 0..PLAYERS {
        let name = format!("Player {i:03}");
        let talent = Talent::draw(&mut rng);
        // Two in seven players reach the PA threshold in one season only.
        let seasons = match i % 7 {
            0 => vec![DEFAULT_SEASONS.from],
            3 => vec![DEFAULT_SEASONS.to],
            _ => vec![DEFAULT_SEASONS.from, DEFAULT_SEASONS.to],
        };
        for season in seasons {
            writer.write_record(season_row(&name, season, &talent, &mut rng))?;
            rows += 1;
        }
    }
    writer.flush()?;

    println!(
        "Wrote {rows} season rows for {PLAYERS} players to {}",
        output_path.display()
    );
    Ok(())
}
