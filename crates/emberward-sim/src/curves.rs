//! Difficulty curves.
//!
//! Every knob the scheduler turns is a smooth function of either the
//! wave-in-group index or the absolute wave/group number, so escalation
//! has no discontinuities inside a group.

use emberward_core::constants::*;

/// Ignition-chance multiplier for a wave-in-group index (1-based).
pub fn ignition_multiplier(wave_in_group: u32) -> f64 {
    1.0 + (wave_in_group.saturating_sub(1)) as f64 * IGNITION_WAVE_STEP
}

/// Uniform spread-rate multiplier for a wave-in-group index.
pub fn spread_wave_multiplier(wave_in_group: u32) -> f64 {
    1.0 + (wave_in_group.saturating_sub(1)) as f64 * SPREAD_WAVE_STEP
}

/// Base spread-rate growth for an absolute wave number, capped.
pub fn base_spread_growth(wave: u32) -> f64 {
    (1.0 + wave as f64 * SPREAD_RATE_GROWTH_PER_WAVE).min(SPREAD_RATE_GROWTH_CAP)
}

/// Fires ignited at wave start.
pub fn starting_fire_count(wave_in_group: u32) -> u32 {
    STARTING_FIRES_BASE + wave_in_group.saturating_sub(1) * STARTING_FIRES_STEP
}

/// Paths generated for a group (1-based), capped by the departure ring.
pub fn path_count(group: u32) -> u32 {
    (PATH_COUNT_BASE + group.saturating_sub(1) / 2).min(PATH_COUNT_MAX)
}

/// Dig sites seeded for a group.
pub fn dig_site_count(group: u32) -> u32 {
    DIG_SITE_COUNT_BASE + group.saturating_sub(1) / 3
}

/// Items seeded for a group.
pub fn item_count(_group: u32) -> u32 {
    ITEM_COUNT
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_curves_scale_linearly_within_a_group() {
        assert_eq!(ignition_multiplier(1), 1.0);
        let step1 = ignition_multiplier(2) - ignition_multiplier(1);
        let step2 = ignition_multiplier(3) - ignition_multiplier(2);
        assert!((step1 - step2).abs() < 1e-12);

        assert_eq!(spread_wave_multiplier(1), 1.0);
        assert!(spread_wave_multiplier(WAVES_PER_GROUP) > spread_wave_multiplier(1));

        assert_eq!(starting_fire_count(1), STARTING_FIRES_BASE);
        assert_eq!(
            starting_fire_count(3),
            STARTING_FIRES_BASE + 2 * STARTING_FIRES_STEP
        );
    }

    #[test]
    fn test_base_growth_monotone_and_capped() {
        let mut last = 0.0;
        for wave in 1..200 {
            let g = base_spread_growth(wave);
            assert!(g >= last);
            assert!(g <= SPREAD_RATE_GROWTH_CAP);
            last = g;
        }
        assert_eq!(base_spread_growth(1000), SPREAD_RATE_GROWTH_CAP);
    }

    #[test]
    fn test_path_count_never_exceeds_ring() {
        for group in 1..50 {
            assert!(path_count(group) <= PATH_COUNT_MAX);
        }
        assert_eq!(path_count(1), PATH_COUNT_BASE);
    }
}
