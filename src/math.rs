//! Math utility functions.

use euclid::default::Vector3D;
use num_traits::Float;

use crate::{Component, Components};

type Vector = Vector3D<Component>;

/// Weigh each of the 3 components and sum the results.
pub fn weighted_sum(weights: &Components, values: &Components) -> Component {
    let weights = Vector::new(weights.0, weights.1, weights.2);
    weights.dot(Vector::new(values.0, values.1, values.2))
}

/// Divide the larger of `a` and `b` by the smaller, after adding `offset` to
/// both. Never less than 1 for non-negative inputs.
pub fn offset_ratio<T: Float>(a: T, b: T, offset: T) -> T {
    (a.max(b) + offset) / (a.min(b) + offset)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weighted_sum_is_a_dot_product() {
        let sum = weighted_sum(&Components(1.0, 2.0, 3.0), &Components(4.0, 5.0, 6.0));
        assert_ratio_eq!(sum, 32.0, 1e-12);
    }

    #[test]
    fn offset_ratio_ignores_argument_order() {
        assert_eq!(offset_ratio(0.2, 0.8, 0.05), offset_ratio(0.8, 0.2, 0.05));
        assert_eq!(offset_ratio(0.5_f32, 0.5, 0.05), 1.0);
    }
}
