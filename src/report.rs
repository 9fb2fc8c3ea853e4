//! Format contrast checks as report lines.

use std::fmt;
use std::io::{self, Write};

use tracing::instrument;

use crate::{contrast_ratio, evaluate, Color, Conformance, ContrastRatio};

/// A foreground and background color to check against each other.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ContrastPair<'a> {
    /// The text color.
    pub foreground: Color,
    /// The color the text is drawn on.
    pub background: Color,
    /// Human readable description printed at the start of the line.
    pub label: &'a str,
}

impl<'a> ContrastPair<'a> {
    /// Create a new pair.
    pub const fn new(foreground: Color, background: Color, label: &'a str) -> Self {
        Self {
            foreground,
            background,
            label,
        }
    }

    /// Compute the contrast ratio of the pair and check it against the Level
    /// AA thresholds.
    pub fn assess(&self) -> Assessment<'a> {
        let ratio = contrast_ratio(&self.foreground, &self.background);
        let conformance = evaluate(ratio);
        tracing::debug!(label = self.label, %ratio, ?conformance, "assessed pair");

        Assessment {
            pair: *self,
            ratio,
            conformance,
        }
    }
}

/// The outcome of checking a [`ContrastPair`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Assessment<'a> {
    /// The pair that was checked.
    pub pair: ContrastPair<'a>,
    /// Contrast ratio between the two colors of the pair.
    pub ratio: ContrastRatio,
    /// Thresholds met by `ratio`.
    pub conformance: Conformance,
}

impl Assessment<'_> {
    /// The full report line, including both colors.
    pub fn pair_line(&self) -> PairLine<'_> {
        PairLine(self)
    }

    /// The short report line, with only the label and the verdicts.
    pub fn summary_line(&self) -> SummaryLine<'_> {
        SummaryLine(self)
    }

    fn write_verdicts(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ratio={:.2} | AA normal={} | AA large={}",
            self.ratio,
            verdict(self.conformance.passes_normal_aa()),
            verdict(self.conformance.passes_large_aa()),
        )
    }
}

fn verdict(passes: bool) -> &'static str {
    if passes {
        "PASS"
    } else {
        "FAIL"
    }
}

/// Displays an [`Assessment`] as
/// `{label}: fg={fg} bg={bg} -> ratio={ratio} | AA normal={..} | AA large={..})`.
///
/// The closing parenthesis has no opening counterpart; existing consumers of
/// the report expect it.
pub struct PairLine<'a>(&'a Assessment<'a>);

impl fmt::Display for PairLine<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let pair = &self.0.pair;
        write!(
            f,
            "{}: fg={} bg={} -> ",
            pair.label, pair.foreground, pair.background
        )?;
        self.0.write_verdicts(f)?;
        f.write_str(")")
    }
}

/// Displays an [`Assessment`] as
/// `{label} -> ratio={ratio} | AA normal={..} | AA large={..}`.
pub struct SummaryLine<'a>(&'a Assessment<'a>);

impl fmt::Display for SummaryLine<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> ", self.0.pair.label)?;
        self.0.write_verdicts(f)
    }
}

/// Write one [`PairLine`] per pair, in order.
#[instrument(level = "debug", skip_all, fields(pairs = pairs.len()))]
pub fn write_pairs<W: Write>(out: &mut W, pairs: &[ContrastPair<'_>]) -> io::Result<()> {
    for pair in pairs {
        writeln!(out, "{}", pair.assess().pair_line())?;
    }
    Ok(())
}
