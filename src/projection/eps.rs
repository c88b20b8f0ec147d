//! Compound EPS growth

/// Project EPS for years 1..=`years` at a constant annual growth rate.
///
/// Element `t - 1` holds `starting_eps * (1 + growth_rate_pct / 100)^t`.
/// Each year is computed from the closed form rather than by repeated
/// multiplication, so a year's value does not depend on rounding carried
/// from earlier years.
pub fn project_eps(starting_eps: f64, growth_rate_pct: f64, years: u32) -> Vec<f64> {
    let factor = 1.0 + growth_rate_pct / 100.0;
    (1..=years)
        .map(|t| starting_eps * factor.powi(t as i32))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_base_case_trajectory() {
        let eps = project_eps(5.0, 8.0, 5);
        let expected = [5.4, 5.832, 6.29856, 6.8024448, 7.346640384];

        assert_eq!(eps.len(), 5);
        for (actual, expected) in eps.iter().zip(expected.iter()) {
            assert_relative_eq!(*actual, *expected, max_relative = 1e-12);
        }
    }

    #[test]
    fn test_zero_growth_is_flat() {
        assert_eq!(project_eps(10.0, 0.0, 3), vec![10.0, 10.0, 10.0]);
    }

    #[test]
    fn test_closed_form_every_year() {
        for &(eps0, g, years) in &[(3.2, 4.5, 30u32), (1.0, -20.0, 12), (0.0, 15.0, 4)] {
            let eps = project_eps(eps0, g, years);
            assert_eq!(eps.len(), years as usize);
            for (i, value) in eps.iter().enumerate() {
                let t = (i + 1) as f64;
                assert_relative_eq!(*value, eps0 * (1.0 + g / 100.0).powf(t), max_relative = 1e-12);
            }
        }
    }

    #[test]
    fn test_monotonicity() {
        let rising = project_eps(2.0, 6.0, 20);
        assert!(rising.windows(2).all(|w| w[1] > w[0]));
        assert!(rising[0] > 2.0);

        let falling = project_eps(2.0, -35.0, 20);
        assert!(falling.windows(2).all(|w| w[1] < w[0]));
        assert!(falling.iter().all(|&v| v > 0.0));
    }

    #[test]
    fn test_single_year() {
        let eps = project_eps(4.0, 25.0, 1);
        assert_eq!(eps, vec![5.0]);
    }

    #[test]
    fn test_idempotent() {
        let a = project_eps(7.13, 9.7, 40);
        let b = project_eps(7.13, 9.7, 40);
        let bits_a: Vec<u64> = a.iter().map(|v| v.to_bits()).collect();
        let bits_b: Vec<u64> = b.iter().map(|v| v.to_bits()).collect();
        assert_eq!(bits_a, bits_b);
    }
}
