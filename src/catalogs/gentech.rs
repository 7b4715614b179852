//! Factory measurement tables and loaders for the GenTech full-spectrum
//! grow-light series.
//!
//! This module contains the factory photometric measurement tables for the
//! series (7 W, 10 W, 24 W, and 28 W fixtures), each measured at six mounting
//! distances with the quantum sensor centered under the fixture, plus a
//! loader for externally supplied measurement files in the same wire format.
//!
//! The tables are used verbatim as ground truth; values between tested
//! distances are never interpolated.

use tracing::info;

use crate::catalog::FixtureCatalog;
use crate::fixture::{DistanceSample, Fixture};

/// The built-in reference catalog: the GenTech series in rated-power order.
pub fn gentech_catalog() -> FixtureCatalog {
    let catalog = FixtureCatalog::new(gentech_fixtures());
    info!("Built GenTech catalog: {} fixtures", catalog.len());
    catalog
}

/// Raw measurement tables for the GenTech series.
pub fn gentech_fixtures() -> Vec<Fixture> {
    vec![
        fixture(
            7,
            &[
                (20, 604.0, 36_441.0),
                (30, 469.0, 28_189.0),
                (60, 60.0, 3_634.0),
                (100, 40.0, 2_409.0),
                (150, 15.0, 908.0),
                (200, 6.0, 369.0),
            ],
        ),
        fixture(
            10,
            &[
                (20, 876.0, 52_917.0),
                (30, 431.0, 26_054.0),
                (60, 91.0, 5_501.0),
                (100, 39.0, 2_374.0),
                (150, 14.0, 850.0),
                (200, 10.0, 618.0),
            ],
        ),
        fixture(
            24,
            &[
                (20, 2_266.0, 139_065.0),
                (30, 1_166.0, 71_494.0),
                (60, 277.0, 17_003.0),
                (100, 102.0, 6_240.0),
                (150, 39.0, 2_338.0),
                (200, 22.0, 1_325.0),
            ],
        ),
        fixture(
            28,
            &[
                (20, 1_154.0, 69_500.0),
                (30, 421.0, 25_704.0),
                (60, 124.0, 7_469.0),
                (100, 43.0, 2_586.0),
                (150, 19.0, 1_140.0),
                (200, 12.0, 720.0),
            ],
        ),
    ]
}

fn fixture(power_w: u32, table: &[(u32, f32, f32)]) -> Fixture {
    Fixture {
        power_w,
        samples: table
            .iter()
            .map(|&(distance_cm, ppfd, lux)| DistanceSample {
                distance_cm,
                ppfd,
                lux,
            })
            .collect(),
    }
}

// ── External measurement files ──────────────────────────────────────────────

/// Parse fixtures from an in-memory JSON measurement document.
///
/// The wire format is an array of fixtures with `powerW` and `samples` of
/// `{distanceCm, ppfd, lux}`. Fixture invariants are re-checked with errors
/// rather than panics since files are untrusted input.
pub fn load_fixtures_json(data: &str) -> anyhow::Result<Vec<Fixture>> {
    let fixtures: Vec<Fixture> = serde_json::from_str(data)?;
    for fixture in &fixtures {
        if fixture.samples.is_empty() {
            anyhow::bail!("fixture {} W has no samples", fixture.power_w);
        }
        for (i, sample) in fixture.samples.iter().enumerate() {
            if fixture.samples[..i]
                .iter()
                .any(|s| s.distance_cm == sample.distance_cm)
            {
                anyhow::bail!(
                    "fixture {} W repeats distance {} cm",
                    fixture.power_w,
                    sample.distance_cm
                );
            }
        }
    }
    Ok(fixtures)
}

/// Load a fixture catalog from a JSON measurement file.
pub fn load_catalog_from_file<P: AsRef<std::path::Path>>(
    path: P,
) -> anyhow::Result<FixtureCatalog> {
    let data = std::fs::read_to_string(&path)?;
    let fixtures = load_fixtures_json(&data)?;
    info!(
        "Loaded {} fixtures from {}",
        fixtures.len(),
        path.as_ref().display()
    );
    Ok(FixtureCatalog::new(fixtures))
}
