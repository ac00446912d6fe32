//! Writes a synthetic `ges.csv` for trying the viewer without the MOE download.

use anyhow::{Context, Result};

const HEADERS: [&str; 12] = [
    "year",
    "university",
    "school",
    "degree",
    "employment_rate_overall",
    "employment_rate_ft_perm",
    "basic_monthly_mean",
    "basic_monthly_median",
    "gross_monthly_mean",
    "gross_monthly_median",
    "gross_mthly_25_percentile",
    "gross_mthly_75_percentile",
];

/// (university, school, degrees, salary level in S$)
const PROGRAMMES: [(&str, &str, &[&str], f64); 6] = [
    (
        "Nanyang Technological University",
        "College of Engineering",
        &["Computer Engineering", "Electrical and Electronic Engineering", "Civil Engineering"],
        4300.0,
    ),
    (
        "National University of Singapore",
        "School of Computing",
        &["Bachelor of Computing (Computer Science)", "Information Systems", "Business Analytics"],
        5200.0,
    ),
    (
        "Singapore Institute of Technology",
        "Engineering",
        &["Mechanical Design Engineering", "Software Engineering"],
        3900.0,
    ),
    (
        "Singapore Management University",
        "School of Law",
        &["Bachelor of Laws", "Bachelor of Accountancy"],
        4600.0,
    ),
    (
        "Singapore University of Social Sciences",
        "School of Business",
        &["Bachelor of Human Resource Management", "Bachelor of Early Childhood Education"],
        3500.0,
    ),
    (
        "Singapore University of Technology and Design",
        "Information Systems Technology and Design",
        &["Information Systems Technology and Design", "Architecture and Sustainable Design"],
        4800.0,
    ),
];

const FIRST_YEAR: i32 = 2018;
const LAST_YEAR: i32 = 2022;

/// Minimal deterministic PRNG (xorshift64*).
struct SimpleRng(u64);

impl SimpleRng {
    fn next_f64(&mut self) -> f64 {
        self.0 ^= self.0 >> 12;
        self.0 ^= self.0 << 25;
        self.0 ^= self.0 >> 27;
        (self.0.wrapping_mul(0x2545_F491_4F6C_DD1D) >> 11) as f64 / (1u64 << 53) as f64
    }

    fn between(&mut self, lo: f64, hi: f64) -> f64 {
        lo + (hi - lo) * self.next_f64()
    }
}

fn main() -> Result<()> {
    let mut rng = SimpleRng(0x5EED_2023);
    let output_path = std::env::args().nth(1).unwrap_or_else(|| "ges.csv".to_string());

    let mut writer = csv::Writer::from_path(&output_path)
        .with_context(|| format!("creating {output_path}"))?;
    writer.write_record(HEADERS)?;

    let mut rows = 0usize;
    for year in FIRST_YEAR..=LAST_YEAR {
        let growth = 1.0 + 0.03 * f64::from(year - FIRST_YEAR);
        for (university, school, degrees, level) in PROGRAMMES {
            for degree in degrees {
                // Small cohorts are not reported.
                let unreported = rng.next_f64() < 0.12;
                let overall = rng.between(78.0, 99.0);
                let ft_perm = overall - rng.between(2.0, 15.0);
                let mean = level * growth * rng.between(0.9, 1.1);
                let median = mean * rng.between(0.95, 1.02);
                let gross_mean = mean * 1.04;
                let gross_median = median * 1.04;

                let fmt_rate = |v: f64| if unreported { "na".to_string() } else { format!("{v:.1}") };
                let fmt_money = |v: f64| if unreported { "na".to_string() } else { format!("{v:.0}") };

                writer.write_record([
                    year.to_string(),
                    university.to_string(),
                    school.to_string(),
                    degree.to_string(),
                    fmt_rate(overall),
                    fmt_rate(ft_perm),
                    fmt_money(mean),
                    fmt_money(median),
                    fmt_money(gross_mean),
                    fmt_money(gross_median),
                    fmt_money(gross_median * 0.85),
                    fmt_money(gross_median * 1.18),
                ])?;
                rows += 1;
            }
        }
    }
    writer.flush().context("flushing CSV")?;

    println!("Wrote {rows} survey rows ({FIRST_YEAR}-{LAST_YEAR}) to {output_path}");
    Ok(())
}
