//! WCAG 2.1 contrast ratios and the AA conformance levels.
//! <https://www.w3.org/TR/WCAG21/#dfn-contrast-ratio>

use std::fmt;

use bitflags::bitflags;

use crate::{math, parse_color, relative_luminance, Color, Component, Result};

/// Minimum ratio for normal size text to meet Level AA.
pub const AA_NORMAL_MIN: Component = 4.5;

/// Minimum ratio for large size text to meet Level AA.
pub const AA_LARGE_MIN: Component = 3.0;

/// Added to both luminances to account for viewing flare.
const FLARE: Component = 0.05;

/// The contrast ratio between two colors, ranging from 1 (no contrast) to 21
/// (black against white).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub struct ContrastRatio(Component);

impl ContrastRatio {
    /// Return the ratio as a plain number.
    pub fn value(self) -> Component {
        self.0
    }
}

impl fmt::Display for ContrastRatio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

bitflags! {
    /// The Level AA thresholds a [`ContrastRatio`] meets.
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    pub struct Conformance : u8 {
        /// Set when the ratio is at least [`AA_NORMAL_MIN`].
        const AA_NORMAL = 1 << 0;
        /// Set when the ratio is at least [`AA_LARGE_MIN`].
        const AA_LARGE = 1 << 1;
    }
}

impl Conformance {
    /// Whether normal size text meets Level AA.
    pub fn passes_normal_aa(&self) -> bool {
        self.contains(Self::AA_NORMAL)
    }

    /// Whether large size text meets Level AA.
    pub fn passes_large_aa(&self) -> bool {
        self.contains(Self::AA_LARGE)
    }
}

/// Return the contrast ratio between two colors. The order of the arguments
/// does not matter.
pub fn contrast_ratio(a: &Color, b: &Color) -> ContrastRatio {
    let ratio = math::offset_ratio(relative_luminance(a), relative_luminance(b), FLARE);
    tracing::trace!(%a, %b, ratio, "contrast ratio");
    ContrastRatio(ratio)
}

/// Parse two hex colors and return the contrast ratio between them.
pub fn hex_contrast_ratio(a: &str, b: &str) -> Result<ContrastRatio> {
    Ok(contrast_ratio(&parse_color(a)?, &parse_color(b)?))
}

/// Check `ratio` against the Level AA thresholds.
pub fn evaluate(ratio: ContrastRatio) -> Conformance {
    let mut conformance = Conformance::empty();
    conformance.set(Conformance::AA_NORMAL, ratio.0 >= AA_NORMAL_MIN);
    conformance.set(Conformance::AA_LARGE, ratio.0 >= AA_LARGE_MIN);
    conformance
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{color, Error};

    #[test]
    fn black_on_white_is_21() {
        let ratio = contrast_ratio(&color!("#000000"), &color!("#ffffff"));
        assert_ratio_eq!(ratio.value(), 21.0);
    }

    #[test]
    fn same_color_is_1() {
        for c in [color!("#000000"), color!("#ffffff"), color!("#2e7d32"), color!("#f5f9ff")] {
            assert_eq!(contrast_ratio(&c, &c).value(), 1.0);
        }
    }

    #[test]
    fn order_independent() {
        let pairs = [
            (color!("#333333"), color!("#ffffff")),
            (color!("#ff0000"), color!("#00ff00")),
            (color!("#1a73e8"), color!("#f5f9ff")),
        ];
        for (a, b) in pairs {
            assert_eq!(contrast_ratio(&a, &b), contrast_ratio(&b, &a));
        }
    }

    #[test]
    fn dark_text_on_white() {
        let ratio = contrast_ratio(&color!("#333333"), &color!("#ffffff"));
        assert_ratio_eq!(ratio.value(), 12.63);

        let conformance = evaluate(ratio);
        assert!(conformance.passes_normal_aa());
        assert!(conformance.passes_large_aa());
    }

    #[test]
    fn near_identical_light_colors() {
        let ratio = contrast_ratio(&color!("#ffffff"), &color!("#f5f9ff"));
        assert!(ratio.value() >= 1.0 && ratio.value() < 1.1);
        assert_eq!(evaluate(ratio), Conformance::empty());
    }

    #[test]
    fn large_text_only() {
        // 4.48, just under the normal text threshold.
        let ratio = contrast_ratio(&color!("#777777"), &color!("#ffffff"));
        assert_ratio_eq!(ratio.value(), 4.48);

        let conformance = evaluate(ratio);
        assert!(!conformance.passes_normal_aa());
        assert!(conformance.passes_large_aa());
    }

    #[test]
    fn thresholds_are_inclusive() {
        assert_eq!(evaluate(ContrastRatio(4.5)), Conformance::all());
        assert_eq!(evaluate(ContrastRatio(3.0)), Conformance::AA_LARGE);
        assert_eq!(evaluate(ContrastRatio(2.99)), Conformance::empty());
    }

    #[test]
    fn display_honours_precision() {
        assert_eq!(format!("{:.2}", ContrastRatio(4.604)), "4.60");
        assert_eq!(format!("{:.2}", ContrastRatio(21.0)), "21.00");
    }

    #[test]
    fn hex_ratio_parses_both_colors() {
        assert_ratio_eq!(hex_contrast_ratio("#000000", "ffffff").unwrap().value(), 21.0);
        assert_eq!(
            hex_contrast_ratio("#ffffff", "#zzz"),
            Err(Error::InvalidColorFormat {
                input: "#zzz".to_owned()
            })
        );
    }
}
