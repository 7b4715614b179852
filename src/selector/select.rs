//! Candidate ranking and selection.
//!
//! The selection pass:
//! 1. Flatten the catalog into one candidate per (fixture, sample) pair.
//! 2. Compute each candidate's derived values against the profile.
//! 3. Sort under the sequential tie-break comparator (stable).
//! 4. Return the first candidate as the recommendation.

use std::cmp::Ordering;

use tracing::debug;

use crate::catalog::FixtureCatalog;

use super::score::{distance_preference_score, wattage_score};
use super::{Candidate, Recommendation, RequirementProfile, SelectError};

/// Select the best (fixture, distance) pairing for a requirement profile.
///
/// Pure and deterministic: identical profile and catalog always produce an
/// identical recommendation. Fails only when the catalog holds no
/// (fixture, sample) pairs — a configuration defect, since the catalog is
/// static and validated at startup.
pub fn select(
    profile: &RequirementProfile,
    catalog: &FixtureCatalog,
) -> Result<Recommendation, SelectError> {
    let ranked = rank_candidates(profile, catalog);
    let best = ranked.first().ok_or(SelectError::NoCandidatesAvailable)?;

    debug!(
        "Selected {} W at {} cm ({} PPFD) from {} candidates",
        best.power_w,
        best.distance_cm,
        best.ppfd,
        ranked.len()
    );

    Ok(Recommendation {
        power_w: best.power_w,
        distance_cm: best.distance_cm,
        ppfd: best.ppfd,
    })
}

/// Score and rank every candidate in the catalog for a profile.
///
/// The returned vector is sorted best-first under the tie-break comparator;
/// [`select`] takes its first element. Public so callers can present
/// runner-up pairings alongside the top pick.
pub fn rank_candidates(profile: &RequirementProfile, catalog: &FixtureCatalog) -> Vec<Candidate> {
    let midpoint = profile.target_midpoint();

    let mut candidates: Vec<Candidate> = catalog
        .all_candidates()
        .map(|(fixture, sample)| Candidate {
            power_w: fixture.power_w,
            distance_cm: sample.distance_cm,
            ppfd: sample.ppfd,
            lux: sample.lux,
            power_score: wattage_score(profile.size_category, fixture.power_w),
            distance_score: distance_preference_score(sample.distance_cm),
            in_range: sample.ppfd >= profile.intensity_min && sample.ppfd <= profile.intensity_max,
            meets_minimum: sample.ppfd >= profile.intensity_min,
            deviation: (sample.ppfd - midpoint).abs(),
        })
        .collect();

    debug!(
        "Ranking {} candidates for {:?} subject, target [{}, {}] PPFD",
        candidates.len(),
        profile.size_category,
        profile.intensity_min,
        profile.intensity_max
    );

    // Stable sort: fully tied candidates keep catalog iteration order.
    candidates.sort_by(compare_candidates);
    candidates
}

/// Sequential tie-break comparator; `Less` means ranked better.
///
/// Precedence: power suitability, then in-range, then (both in range)
/// distance preference, then (both out of range) sufficiency, then deviation
/// from the range midpoint. Both residual tie situations fall through to the
/// same deviation comparison.
fn compare_candidates(a: &Candidate, b: &Candidate) -> Ordering {
    b.power_score
        .cmp(&a.power_score)
        .then_with(|| b.in_range.cmp(&a.in_range))
        // Past the in-range comparison, a.in_range == b.in_range, so
        // checking `a` alone covers both candidates.
        .then_with(|| {
            if a.in_range {
                b.distance_score.cmp(&a.distance_score)
            } else {
                Ordering::Equal
            }
        })
        .then_with(|| {
            if !a.in_range {
                b.meets_minimum.cmp(&a.meets_minimum)
            } else {
                Ordering::Equal
            }
        })
        .then_with(|| {
            a.deviation
                .partial_cmp(&b.deviation)
                .unwrap_or(Ordering::Equal)
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixture::{DistanceSample, Fixture};
    use crate::selector::SizeCategory;

    fn fixture(power_w: u32, table: &[(u32, f32)]) -> Fixture {
        Fixture {
            power_w,
            samples: table
                .iter()
                .map(|&(distance_cm, ppfd)| DistanceSample {
                    distance_cm,
                    ppfd,
                    lux: 0.0,
                })
                .collect(),
        }
    }

    fn profile(min: f32, max: f32, size: SizeCategory) -> RequirementProfile {
        RequirementProfile {
            intensity_min: min,
            intensity_max: max,
            size_category: size,
        }
    }

    #[test]
    fn power_score_dominates_everything_else() {
        // Large subject: the 7 W fixture scores 0 even though its sample is
        // dead-center in range; the 24 W fixture scores 3 while far outside.
        let catalog = FixtureCatalog::new(vec![
            fixture(7, &[(30, 200.0)]),
            fixture(24, &[(100, 900.0)]),
        ]);
        let rec = select(&profile(150.0, 250.0, SizeCategory::Large), &catalog).unwrap();

        assert_eq!(rec.power_w, 24);
    }

    #[test]
    fn in_range_beats_out_of_range_at_equal_power() {
        // Medium subject: 10 W and 24 W both score 2. Only the 24 W sample
        // is in range, and in-range wins before any distance comparison.
        let catalog = FixtureCatalog::new(vec![
            fixture(10, &[(60, 145.0)]),
            fixture(24, &[(150, 340.0)]),
        ]);
        let rec = select(&profile(150.0, 350.0, SizeCategory::Medium), &catalog).unwrap();

        assert_eq!(rec.power_w, 24);
        assert_eq!(rec.distance_cm, 150);
    }

    #[test]
    fn preferred_distance_breaks_in_range_ties() {
        // Both samples in range at equal power score; 30 cm outranks 60 cm
        // even though the 60 cm sample is closer to the midpoint.
        let catalog = FixtureCatalog::new(vec![fixture(24, &[(60, 250.0), (30, 300.0)])]);
        let rec = select(&profile(200.0, 320.0, SizeCategory::Medium), &catalog).unwrap();

        assert_eq!(rec.distance_cm, 30);
    }

    #[test]
    fn sufficient_beats_insufficient_when_both_out_of_range() {
        // Neither sample is in range; the one above the minimum wins over
        // the one below it, regardless of deviation.
        let catalog = FixtureCatalog::new(vec![fixture(24, &[(100, 140.0), (20, 400.0)])]);
        let rec = select(&profile(150.0, 350.0, SizeCategory::Medium), &catalog).unwrap();

        assert_eq!(rec.distance_cm, 20);
    }

    #[test]
    fn deviation_settles_remaining_ties() {
        // Both in range at the same unranked distance: smaller deviation
        // from the 250 midpoint wins.
        let catalog = FixtureCatalog::new(vec![fixture(24, &[(100, 180.0), (150, 260.0)])]);
        let rec = select(&profile(150.0, 350.0, SizeCategory::Medium), &catalog).unwrap();

        assert_eq!(rec.distance_cm, 150);
    }

    #[test]
    fn full_ties_preserve_catalog_order() {
        // Medium subject scores 10 W and 24 W identically (2), and the
        // samples are identical in every ranked dimension. The earlier
        // catalog entry must win; reversing the catalog flips the winner.
        let forward = FixtureCatalog::new(vec![
            fixture(10, &[(100, 40.0)]),
            fixture(24, &[(100, 40.0)]),
        ]);
        let reverse = FixtureCatalog::new(vec![
            fixture(24, &[(100, 40.0)]),
            fixture(10, &[(100, 40.0)]),
        ]);
        let p = profile(150.0, 350.0, SizeCategory::Medium);

        assert_eq!(select(&p, &forward).unwrap().power_w, 10);
        assert_eq!(select(&p, &reverse).unwrap().power_w, 24);
    }

    #[test]
    fn empty_catalog_is_a_configuration_error() {
        let catalog = FixtureCatalog::new(Vec::new());
        let err = select(&profile(150.0, 350.0, SizeCategory::Medium), &catalog).unwrap_err();

        assert_eq!(err, SelectError::NoCandidatesAvailable);
    }

    #[test]
    fn degenerate_profile_still_ranks_deterministically() {
        // Inverted range: nothing can be in range or meet the minimum
        // sensibly, but the ranking must still be total and repeatable.
        let catalog = FixtureCatalog::new(vec![
            fixture(10, &[(30, 431.0), (60, 91.0)]),
            fixture(24, &[(30, 1166.0), (60, 277.0)]),
        ]);
        let p = profile(500.0, 100.0, SizeCategory::Medium);

        let first = select(&p, &catalog).unwrap();
        let second = select(&p, &catalog).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn ranked_list_has_one_entry_per_sample() {
        let catalog = FixtureCatalog::new(vec![
            fixture(10, &[(30, 431.0), (60, 91.0)]),
            fixture(24, &[(30, 1166.0)]),
        ]);
        let ranked = rank_candidates(&profile(150.0, 350.0, SizeCategory::Medium), &catalog);

        assert_eq!(ranked.len(), 3);
    }
}
