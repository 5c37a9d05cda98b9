//! Angle/index mapping for the wheel.
//!
//! One convention, used by both directions of the mapping and by the canvas
//! renderer: wedge `i` of `n` spans `[i * 360/n, (i+1) * 360/n)` degrees
//! clockwise from 12 o'clock in unrotated wheel coordinates, the pointer is
//! fixed at 12 o'clock, and a cumulative angle of `a` rotates the whole
//! wheel clockwise by `a` (CSS `rotate(a deg)`). The wedge under the pointer
//! is therefore the one whose unrotated span contains `(360 - a) mod 360`.

use rand::{Rng, RngCore};

pub const FULL_TURN_DEGREES: f64 = 360.0;

/// Minimum number of full rotations per spin.
pub const MIN_FULL_TURNS: u32 = 10;
/// Up to this many extra full rotations are added for variety.
pub const MAX_EXTRA_TURNS: u32 = 10;

/// Settle delay bounds in milliseconds.
pub const SPIN_DURATION_MIN_MS: u32 = 2500;
pub const SPIN_DURATION_MAX_MS: u32 = 4000;

/// Angular size of one wedge, in degrees.
pub fn wedge_arc(item_count: usize) -> f64 {
    FULL_TURN_DEGREES / item_count as f64
}

fn normalize(angle: f64) -> f64 {
    angle.rem_euclid(FULL_TURN_DEGREES)
}

/// The wedge index under the pointer for a given cumulative angle.
///
/// A single item covers the whole circle, so every angle maps to 0. Callers
/// never invoke this with `item_count == 0`.
pub fn index_for_angle(angle: f64, item_count: usize) -> usize {
    debug_assert!(item_count > 0, "index_for_angle on an empty wheel");
    if item_count <= 1 {
        return 0;
    }
    let under_pointer = normalize(FULL_TURN_DEGREES - normalize(angle));
    let index = (under_pointer / wedge_arc(item_count)) as usize;
    // under_pointer can graze 360.0 through float rounding
    index.min(item_count - 1)
}

/// A new cumulative angle that lands the *center* of the target wedge under
/// the pointer, after at least [`MIN_FULL_TURNS`] extra full rotations.
///
/// Centering keeps the landing spot as far as possible from the wedge
/// boundaries, so rounding noise in the rendered transform can never show a
/// different wedge than [`index_for_angle`] reports. The random turn count
/// only affects how long the wheel appears to spin, never where it stops.
pub fn angle_for_target(
    target: usize,
    item_count: usize,
    current_angle: f64,
    rng: &mut dyn RngCore,
) -> f64 {
    debug_assert!(target < item_count, "target index out of range");
    let turns = rng.gen_range(MIN_FULL_TURNS..MIN_FULL_TURNS + MAX_EXTRA_TURNS);
    let base = current_angle + f64::from(turns) * FULL_TURN_DEGREES;
    let wedge_center = (target as f64 + 0.5) * wedge_arc(item_count);
    let wanted = normalize(FULL_TURN_DEGREES - wedge_center);
    base + normalize(wanted - normalize(base))
}

/// Randomized settle delay; cosmetic only.
pub fn spin_duration_ms(rng: &mut dyn RngCore) -> u32 {
    rng.gen_range(SPIN_DURATION_MIN_MS..=SPIN_DURATION_MAX_MS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    #[test]
    fn round_trip_law_holds_for_all_small_wheels() {
        let mut rng = SmallRng::seed_from_u64(7);
        for n in 1..=50 {
            for i in 0..n {
                for &start in &[0.0, 123.4, 359.9, 3600.0, 98765.43] {
                    let angle = angle_for_target(i, n, start, &mut rng);
                    assert_eq!(
                        index_for_angle(angle, n),
                        i,
                        "round trip failed for n={n} i={i} start={start}"
                    );
                }
            }
        }
    }

    #[test]
    fn angle_always_advances_by_at_least_the_minimum_turns() {
        let mut rng = SmallRng::seed_from_u64(11);
        let mut angle = 0.0;
        for _ in 0..200 {
            let next = angle_for_target(2, 5, angle, &mut rng);
            assert!(next >= angle + f64::from(MIN_FULL_TURNS) * FULL_TURN_DEGREES);
            angle = next;
        }
    }

    #[test]
    fn single_item_wins_at_any_angle() {
        for &angle in &[0.0, 17.3, 359.999, 72000.5, -90.0] {
            assert_eq!(index_for_angle(angle, 1), 0);
        }
    }

    #[test]
    fn index_for_angle_walks_the_wedges_backwards() {
        // Rotating clockwise moves earlier wedges past the pointer in
        // reverse list order: a small clockwise angle exposes the last wedge.
        assert_eq!(index_for_angle(0.0, 4), 0);
        assert_eq!(index_for_angle(45.0, 4), 3);
        assert_eq!(index_for_angle(135.0, 4), 2);
        assert_eq!(index_for_angle(225.0, 4), 1);
        assert_eq!(index_for_angle(315.0, 4), 0);
    }

    #[test]
    fn negative_angles_normalize_before_mapping() {
        assert_eq!(index_for_angle(-45.0, 4), 0);
        assert_eq!(index_for_angle(-45.0 - 360.0, 4), 0);
        assert_eq!(index_for_angle(45.0 - 720.0, 4), 3);
    }

    #[test]
    fn spin_duration_stays_in_bounds() {
        let mut rng = SmallRng::seed_from_u64(3);
        for _ in 0..1000 {
            let ms = spin_duration_ms(&mut rng);
            assert!((SPIN_DURATION_MIN_MS..=SPIN_DURATION_MAX_MS).contains(&ms));
        }
    }
}
