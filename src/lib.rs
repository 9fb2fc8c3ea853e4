//! wcag-contrast computes WCAG 2.1 contrast ratios between sRGB colors and
//! reports them against the AA thresholds for normal and large text.
//!
//! ```rust
//! use wcag_contrast::{color, contrast_ratio, evaluate};
//! let ratio = contrast_ratio(&color!("#333333"), &color!("#ffffff"));
//! assert!(evaluate(ratio).passes_normal_aa());
//! ```

#![deny(missing_docs)]

extern crate self as wcag_contrast;


pub mod audit;
mod component;
mod contrast;
mod error;
mod gamma;
mod luminance;
mod math;
mod report;
mod rgb;

pub use component::{Component, Components};
pub use contrast::{
    contrast_ratio, evaluate, hex_contrast_ratio, Conformance, ContrastRatio, AA_LARGE_MIN,
    AA_NORMAL_MIN,
};
pub use error::{Error, Result};
pub use gamma::to_linear;
pub use luminance::relative_luminance;
pub use report::{write_pairs, Assessment, ContrastPair, PairLine, SummaryLine};
pub use rgb::{parse_color, Color};
pub use wcag_contrast_macros::color;
