//! Relative luminance of sRGB colors.

use crate::{math, Color, Component, Components};

/// ITU-R BT.709 weights of the linear red, green and blue channels.
const WEIGHTS: Components = Components(0.2126, 0.7152, 0.0722);

/// Return the relative luminance of `color`, in [0, 1].
pub fn relative_luminance(color: &Color) -> Component {
    let luminance = math::weighted_sum(&WEIGHTS, &color.to_linear_light());
    tracing::trace!(%color, luminance, "relative luminance");
    luminance
}

impl Color {
    /// Return the relative luminance of this color.
    pub fn relative_luminance(&self) -> Component {
        relative_luminance(self)
    }
}
