//! Fixture and measurement-sample types.
//!
//! A fixture is characterized by its rated electrical power and a table of
//! photometric measurements taken at discrete mounting distances. The tables
//! are ground truth: nothing in this crate interpolates between tested
//! distances or models light falloff.

use rkyv::{Archive, Deserialize as RkyvDeserialize, Serialize as RkyvSerialize};
use serde::{Deserialize, Serialize};

use crate::{Lux, Ppfd};

/// One photometric measurement for a fixture at a tested mounting distance.
#[derive(
    Debug, Clone, PartialEq, Archive, RkyvSerialize, RkyvDeserialize, Serialize, Deserialize,
)]
#[serde(rename_all = "camelCase")]
pub struct DistanceSample {
    /// Tested distance from the fixture to the target surface, in centimeters.
    pub distance_cm: u32,
    /// Measured PPFD at that distance (µmol/m²/s).
    pub ppfd: Ppfd,
    /// Measured illuminance at that distance (lux).
    /// Carried through for display; never used in ranking.
    pub lux: Lux,
}

/// A lighting fixture: rated power plus its measurement table.
///
/// Distances need not be contiguous or evenly spaced, and each fixture may
/// have its own distance set. Within one fixture distances are unique and
/// `samples` is never empty; both invariants are checked at catalog
/// construction.
#[derive(
    Debug, Clone, PartialEq, Archive, RkyvSerialize, RkyvDeserialize, Serialize, Deserialize,
)]
#[serde(rename_all = "camelCase")]
pub struct Fixture {
    /// Rated electrical power in watts. Used as an ordinal proxy for light
    /// output and coverage, never for photometric math.
    pub power_w: u32,
    /// Measurements at each tested distance, in measurement order.
    pub samples: Vec<DistanceSample>,
}

impl Fixture {
    /// Look up the measurement at an exact tested distance, if one exists.
    pub fn sample_at(&self, distance_cm: u32) -> Option<&DistanceSample> {
        self.samples.iter().find(|s| s.distance_cm == distance_cm)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixture() -> Fixture {
        Fixture {
            power_w: 24,
            samples: vec![
                DistanceSample {
                    distance_cm: 30,
                    ppfd: 1166.0,
                    lux: 71_494.0,
                },
                DistanceSample {
                    distance_cm: 60,
                    ppfd: 277.0,
                    lux: 17_003.0,
                },
            ],
        }
    }

    #[test]
    fn sample_at_finds_exact_distance() {
        let f = fixture();
        let sample = f.sample_at(60).expect("60 cm was tested");
        assert_eq!(sample.ppfd, 277.0);
    }

    #[test]
    fn sample_at_misses_untested_distance() {
        assert!(fixture().sample_at(45).is_none());
    }

    #[test]
    fn samples_parse_from_wire_format() {
        let json = r#"{"distanceCm": 30, "ppfd": 1166, "lux": 71494}"#;
        let sample: DistanceSample = serde_json::from_str(json).unwrap();
        assert_eq!(sample.distance_cm, 30);
        assert_eq!(sample.ppfd, 1166.0);
    }
}
