use std::f64::consts::E;

/// Logistic sigmoid `1 / (1 + e^-x)`, squashing any real into `(0, 1)`.
///
/// The open bounds hold for every `x` whose result is representable; for
/// `|x|` beyond roughly 36 the result rounds to `0.0` or `1.0` in `f64`.
pub fn sigmoid(x: f64) -> f64 {
    1.0 / (1.0 + E.powf(-x))
}

/// Applies [`sigmoid`] to every component.
pub fn sigmoid_vec(xs: &[f64]) -> Vec<f64> {
    xs.iter().map(|&x| sigmoid(x)).collect()
}

/// Derivative of the sigmoid expressed through its output:
/// if `y = sigmoid(x)` then `dy/dx = y * (1 - y)`.
pub fn sigmoid_gradient(y: f64) -> f64 {
    y * (1.0 - y)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use proptest::prelude::*;

    #[test]
    fn sigmoid_of_zero_is_one_half() {
        assert_eq!(sigmoid(0.0), 0.5);
    }

    #[test]
    fn sigmoid_known_values() {
        assert_relative_eq!(sigmoid(1.0), 0.731_058_578_630_004_9, epsilon = 1e-12);
        assert_relative_eq!(sigmoid(-1.0), 0.268_941_421_369_995_1, epsilon = 1e-12);
    }

    #[test]
    fn sigmoid_vec_maps_each_component() {
        assert_eq!(sigmoid_vec(&[0.0, 0.0]), vec![0.5, 0.5]);
        assert!(sigmoid_vec(&[]).is_empty());
    }

    #[test]
    fn gradient_matches_finite_difference() {
        let h = 1e-6;
        for &x in &[-3.0, -0.5, 0.0, 0.7, 2.5] {
            let numeric = (sigmoid(x + h) - sigmoid(x - h)) / (2.0 * h);
            assert_relative_eq!(sigmoid_gradient(sigmoid(x)), numeric, epsilon = 1e-8);
        }
    }

    proptest! {
        #[test]
        fn sigmoid_is_strictly_between_zero_and_one(x in -30.0..30.0f64) {
            let y = sigmoid(x);
            prop_assert!(y > 0.0 && y < 1.0, "sigmoid({}) = {}", x, y);
        }

        #[test]
        fn sigmoid_is_strictly_increasing(x in -20.0..20.0f64, step in 1e-3..10.0f64) {
            prop_assert!(sigmoid(x) < sigmoid(x + step));
        }

        #[test]
        fn sigmoid_is_point_symmetric(x in -20.0..20.0f64) {
            prop_assert!((sigmoid(x) + sigmoid(-x) - 1.0).abs() < 1e-12);
        }
    }
}
