use crate::core::actions::sample_region::sample_region;
use crate::core::data::configuration::Configuration;
use std::collections::HashSet;

#[must_use]
pub fn distinct_count(samples: &[u32]) -> usize {
    samples.iter().collect::<HashSet<_>>().len()
}

/// Whether the configuration shows visible structure: the number of
/// distinct escape times over a `grid_size` x `grid_size` interior grid must
/// reach `min_distinct_ratio` of the sample count.
#[must_use]
pub fn is_interesting(configuration: &Configuration, grid_size: usize, min_distinct_ratio: f32) -> bool {
    let samples = sample_region(configuration, grid_size);

    if samples.is_empty() {
        return false;
    }

    distinct_count(&samples) as f32 >= min_distinct_ratio * samples.len() as f32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::complex::Complex;
    use crate::core::data::region::Region;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    #[test]
    fn test_distinct_count() {
        assert_eq!(distinct_count(&[]), 0);
        assert_eq!(distinct_count(&[3, 3, 3]), 1);
        assert_eq!(distinct_count(&[1, 2, 2, 5]), 3);
    }

    #[test]
    fn test_region_inside_main_cardioid_is_not_interesting() {
        let configuration = Configuration {
            region: Region::new(Complex::new(-0.1, -0.1), Complex::new(0.1, 0.1)).unwrap(),
            ..Configuration::default()
        };

        assert!(!is_interesting(&configuration, 8, 0.6));
    }

    #[test]
    fn test_region_far_outside_is_not_interesting() {
        let configuration = Configuration {
            region: Region::new(Complex::new(2.0, 2.0), Complex::new(2.5, 2.5)).unwrap(),
            ..Configuration::default()
        };

        assert!(!is_interesting(&configuration, 8, 0.6));
    }

    #[test]
    fn test_zero_ratio_accepts_anything() {
        assert!(is_interesting(&Configuration::default(), 8, 0.0));
    }

    #[test]
    fn test_empty_grid_is_not_interesting() {
        assert!(!is_interesting(&Configuration::default(), 0, 0.0));
    }

    #[test]
    fn test_acceptance_rate_near_the_boundary_exceeds_floor() {
        let mut rng = StdRng::seed_from_u64(7);
        let trials = 2_000;
        let mut accepted = 0;

        for _ in 0..trials {
            let centre = Complex::new(
                -0.215 + rng.random_range(-0.01..=0.01),
                -0.695 + rng.random_range(-0.01..=0.01),
            );
            let half_extent = rng.random_range(0.002..=0.02);
            let configuration = Configuration {
                region: Region::square(centre, half_extent).unwrap(),
                max_iterations: 256,
                ..Configuration::default()
            };

            if is_interesting(&configuration, 8, 0.6) {
                accepted += 1;
            }
        }

        assert!(
            accepted * 100 > trials,
            "only {} of {} trials accepted",
            accepted,
            trials
        );
    }
}
