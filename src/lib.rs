//! # growlight
//!
//! A **grow-light fixture recommendation engine** driven by factory PPFD
//! measurement tables.
//!
//! Given a plant's target light requirement (an acceptable PPFD range plus a
//! size category) and a catalog of lighting fixtures (each with a rated power
//! and a table of intensity measurements at tested mounting distances),
//! `growlight` deterministically selects the single best (fixture, distance)
//! pairing.
//!
//! ## Example
//!
//! ```
//! use growlight::{gentech_catalog, select, RequirementProfile, SizeCategory};
//!
//! let catalog = gentech_catalog();
//! let profile = RequirementProfile::new(150.0, 350.0, SizeCategory::Medium)?;
//!
//! let rec = select(&profile, &catalog)?;
//! println!(
//!     "{} W fixture at {} cm gives {} µmol/m²/s",
//!     rec.power_w, rec.distance_cm, rec.ppfd
//! );
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## Algorithm overview
//!
//! 1. **Flatten** — every (fixture, distance sample) pair in the catalog
//!    becomes one candidate; no pair is ever filtered out.
//! 2. **Score** — each candidate gets a power-suitability score for the
//!    subject's size category, a mounting-distance preference score, and its
//!    deviation from the midpoint of the target PPFD range.
//! 3. **Rank** — a sequential tie-break comparator orders all candidates:
//!    power suitability, then in-range, then distance preference, then
//!    sufficiency, then deviation. The sort is stable, so full ties keep
//!    catalog order.
//! 4. **Select** — the top-ranked candidate becomes the recommendation.
//!
//! The catalog is immutable after construction and may be shared by any
//! number of concurrent selection calls without locking; each call builds its
//! own ephemeral candidate list and performs no I/O.

pub mod catalog;
/// Raw fixture measurement tables; currently the GenTech full-spectrum series
pub mod catalogs;
pub mod fixture;
pub mod selector;

pub use catalog::FixtureCatalog;
pub use catalogs::gentech::gentech_catalog;
pub use fixture::{DistanceSample, Fixture};
pub use selector::{
    rank_candidates, select, Candidate, ProfileError, Recommendation, RequirementProfile,
    SelectError, SizeCategory,
};

// Commonly used measurement units
// PPFD is photosynthetic photon flux density in µmol/m²/s; lux is the
// auxiliary illuminance reading, carried through but never ranked on.
pub type Ppfd = f32;
pub type Lux = f32;
