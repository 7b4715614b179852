//! Fixture recommendation selector.
//!
//! Ranks every (fixture, distance sample) pairing in a catalog against a
//! requirement profile and returns the single top-ranked pairing:
//!
//! 1. **Flatten**: every sample of every fixture becomes one candidate.
//! 2. **Score**: each candidate gets a power-suitability score for the
//!    subject's size category, a mounting-distance preference score, and its
//!    deviation from the target-range midpoint.
//! 3. **Rank**: a sequential tie-break comparator (power suitability,
//!    in-range, distance preference, sufficiency, deviation) applied with a
//!    stable sort, so fully tied candidates keep catalog order.
//! 4. **Select**: the first ranked candidate, reported with its fixture's
//!    rated power, the chosen distance, and the measured PPFD there.
//!
//! The whole pass is pure and synchronous over in-memory data; concurrent
//! callers need no coordination.

mod score;
mod select;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{Lux, Ppfd};

pub use score::{distance_preference_score, wattage_score};
pub use select::{rank_candidates, select};

// ── Size categories ─────────────────────────────────────────────────────────

/// Physical scale of the subject being lit.
///
/// A closed tag set so the power-suitability table is exhaustively checked.
/// Serializes to the exact strings the upstream analysis step emits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SizeCategory {
    Small,
    Medium,
    Large,
}

// ── Requirement profile ─────────────────────────────────────────────────────

/// Target light requirement for one selection call.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequirementProfile {
    /// Lower bound of the acceptable PPFD range (µmol/m²/s).
    pub intensity_min: Ppfd,
    /// Upper bound of the acceptable PPFD range.
    pub intensity_max: Ppfd,
    /// Physical scale of the subject.
    pub size_category: SizeCategory,
}

impl RequirementProfile {
    /// Build a validated profile.
    ///
    /// Rejects inverted ranges and negative intensities at the boundary.
    /// [`select`] and [`rank_candidates`] accept any profile and stay total:
    /// a caller that bypasses this constructor still gets a deterministic
    /// (if degenerate) ranking.
    pub fn new(
        intensity_min: Ppfd,
        intensity_max: Ppfd,
        size_category: SizeCategory,
    ) -> Result<Self, ProfileError> {
        if intensity_min < 0.0 || intensity_max < 0.0 {
            return Err(ProfileError::NegativeIntensity {
                min: intensity_min,
                max: intensity_max,
            });
        }
        if intensity_min > intensity_max {
            return Err(ProfileError::InvertedRange {
                min: intensity_min,
                max: intensity_max,
            });
        }
        Ok(Self {
            intensity_min,
            intensity_max,
            size_category,
        })
    }

    /// Midpoint of the target range; candidate deviation is measured
    /// against this value.
    pub fn target_midpoint(&self) -> Ppfd {
        (self.intensity_min + self.intensity_max) / 2.0
    }
}

// ── Candidates ──────────────────────────────────────────────────────────────

/// One evaluated (fixture, distance sample) pairing.
///
/// Ephemeral: rebuilt and re-scored on every selection call and owned by
/// that call alone; nothing here is persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct Candidate {
    /// Rated power of the candidate's fixture, in watts.
    pub power_w: u32,
    /// Tested mounting distance, in centimeters.
    pub distance_cm: u32,
    /// Measured PPFD at that distance.
    pub ppfd: Ppfd,
    /// Measured illuminance at that distance (display only).
    pub lux: Lux,
    /// Power-suitability score for the profile's size category (0–3).
    pub power_score: u8,
    /// Mounting-distance preference score (0–3).
    pub distance_score: u8,
    /// Whether the measured PPFD falls within the target range, inclusive.
    pub in_range: bool,
    /// Whether the measured PPFD reaches at least the range minimum.
    pub meets_minimum: bool,
    /// Absolute difference between the measured PPFD and the range midpoint.
    pub deviation: Ppfd,
}

// ── Recommendation ──────────────────────────────────────────────────────────

/// The selected pairing, as reported to the caller.
///
/// All fields are drawn directly from the winning candidate's fixture and
/// sample; no derived scores are exposed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    /// Rated power of the chosen fixture, in watts.
    pub power_w: u32,
    /// Chosen mounting distance, in centimeters.
    pub distance_cm: u32,
    /// Measured PPFD the pairing provides.
    pub ppfd: Ppfd,
}

// ── Errors ──────────────────────────────────────────────────────────────────

/// Failure modes of a selection call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SelectError {
    /// The catalog holds no (fixture, sample) pairs. The catalog is static
    /// and validated at startup, so this is a configuration defect, never an
    /// expected per-request outcome.
    #[error("no candidates available: the fixture catalog is empty")]
    NoCandidatesAvailable,
}

/// Requirement profiles rejected by boundary validation.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum ProfileError {
    #[error("intensity range is inverted: min {min} > max {max}")]
    InvertedRange { min: f32, max: f32 },
    #[error("intensity bounds must be non-negative: min {min}, max {max}")]
    NegativeIntensity { min: f32, max: f32 },
}
