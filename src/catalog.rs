//! Immutable fixture catalog shared by all selection calls.
//!
//! `FixtureCatalog` owns the ground-truth measurement tables for the life of
//! the process: built once at startup, never mutated, read concurrently
//! without synchronization. Its one non-trivial operation is
//! [`all_candidates`](FixtureCatalog::all_candidates), which flattens every
//! (fixture, sample) pair into the candidate sequence the selector ranks.

use rkyv::{Archive, Deserialize as RkyvDeserialize, Serialize as RkyvSerialize};
use tracing::info;

use crate::fixture::{DistanceSample, Fixture};

#[derive(Debug, Clone, Archive, RkyvSerialize, RkyvDeserialize)]
pub struct FixtureCatalog {
    pub fixtures: Vec<Fixture>,
}

impl FixtureCatalog {
    /// Build a catalog from owned fixtures.
    ///
    /// Panics if a fixture has an empty measurement table or repeats a
    /// distance; both are construction bugs, not runtime conditions. Loaders
    /// reading untrusted files check the same invariants with errors first.
    pub fn new(fixtures: Vec<Fixture>) -> Self {
        for fixture in &fixtures {
            assert!(
                !fixture.samples.is_empty(),
                "fixture {} W has no samples",
                fixture.power_w
            );
            for (i, sample) in fixture.samples.iter().enumerate() {
                assert!(
                    fixture.samples[..i]
                        .iter()
                        .all(|s| s.distance_cm != sample.distance_cm),
                    "fixture {} W repeats distance {} cm",
                    fixture.power_w,
                    sample.distance_cm
                );
            }
        }
        Self { fixtures }
    }

    /// Build a catalog by cloning fixtures from a slice.
    pub fn from_slice(fixtures: &[Fixture]) -> Self {
        Self::new(fixtures.to_vec())
    }

    /// Return the number of fixtures in the catalog.
    pub fn len(&self) -> usize {
        self.fixtures.len()
    }

    /// Return `true` when the catalog contains no fixtures.
    pub fn is_empty(&self) -> bool {
        self.fixtures.is_empty()
    }

    /// Return all fixtures as an immutable slice.
    pub fn fixtures(&self) -> &[Fixture] {
        &self.fixtures
    }

    /// Flatten every (fixture, sample) pair into one candidate sequence.
    ///
    /// Order is catalog order, then within-fixture sample order; nothing is
    /// filtered — every sample is always eligible. The selector's stable
    /// sort relies on this ordering for its final tie-break.
    pub fn all_candidates(&self) -> impl Iterator<Item = (&Fixture, &DistanceSample)> + '_ {
        self.fixtures
            .iter()
            .flat_map(|fixture| fixture.samples.iter().map(move |sample| (fixture, sample)))
    }
}

// ── Serialization ───────────────────────────────────────────────────────────

impl FixtureCatalog {
    /// Serialize the catalog to bytes using rkyv.
    pub fn to_rkyv_bytes(&self) -> Vec<u8> {
        rkyv::to_bytes::<rkyv::rancor::Error>(self)
            .expect("rkyv serialization failed")
            .to_vec()
    }

    /// Save a catalog snapshot to a file using rkyv.
    pub fn save_to_file(&self, path: &str) -> anyhow::Result<()> {
        let bytes = self.to_rkyv_bytes();
        std::fs::write(path, &bytes)?;
        info!("Saved catalog to {} ({} bytes)", path, bytes.len());
        Ok(())
    }

    /// Load a catalog snapshot from an rkyv file.
    pub fn load_from_file(path: &str) -> anyhow::Result<Self> {
        let bytes = std::fs::read(path)?;
        let catalog = rkyv::from_bytes::<Self, rkyv::rancor::Error>(&bytes)
            .map_err(|e| anyhow::anyhow!("rkyv deserialization failed: {}", e))?;
        info!("Loaded catalog: {} fixtures", catalog.len());
        Ok(catalog)
    }
}
