//! Gamma decoding of sRGB channels.

use crate::{Color, Component, Components};

/// Encoded values at or below this map linearly onto linear light.
const LINEAR_THRESHOLD: Component = 0.03928;

/// Convert a gamma encoded channel value in [0, 1] to linear light.
fn decode(value: Component) -> Component {
    if value <= LINEAR_THRESHOLD {
        value / 12.92
    } else {
        ((value + 0.055) / 1.055).powf(2.4)
    }
}

/// Convert an 8-bit sRGB channel to a linear light value in [0, 1].
pub fn to_linear(channel: u8) -> Component {
    decode(channel as Component / 255.0)
}

impl Color {
    /// Convert each channel of this color from gamma encoded to linear light.
    pub fn to_linear_light(&self) -> Components {
        Components(
            self.red as Component,
            self.green as Component,
            self.blue as Component,
        )
        .map(|c| decode(c / 255.0))
    }
}
