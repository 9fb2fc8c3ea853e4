//! The floating point types every derived quantity is stored as.

/// A 64-bit floating point value that luminances and ratios are stored as.
pub type Component = f64;

/// Represent the three channel values of a color.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Components(pub Component, pub Component, pub Component);

impl Components {
    /// Return new components with each component mapped with the given
    /// function.
    pub fn map(&self, f: impl Fn(Component) -> Component) -> Self {
        Self(f(self.0), f(self.1), f(self.2))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn map_applies_to_every_component() {
        let c = Components(0.1, 0.2, 0.3).map(|v| v * 10.0);
        assert_ratio_eq!(c.0, 1.0, 1e-12);
        assert_ratio_eq!(c.1, 2.0, 1e-12);
        assert_ratio_eq!(c.2, 3.0, 1e-12);
    }
}
