//! The color audit run by the `contrast-check` binary: candidate fixes, the
//! adjusted success color and the pairs currently in use.

use std::io::{self, Write};

use tracing::instrument;
use wcag_contrast_macros::color;

use crate::{write_pairs, ContrastPair};

/// Printed above the pairs currently in use.
pub const BANNER: &str = "WCAG contrast check (WCAG 2.1)";

/// Suggested replacements for pairs that were close to failing.
pub const CANDIDATES: [ContrastPair<'static>; 4] = [
    ContrastPair::new(
        color!("#ffffff"),
        color!("#0056b3"),
        "white on primary (#0056b3) - suggested for save button",
    ),
    ContrastPair::new(
        color!("#ffffff"),
        color!("#1a58cc"),
        "white on hover/save darker (#1a58cc) - candidate",
    ),
    ContrastPair::new(
        color!("#ffffff"),
        color!("#c0392b"),
        "white on darker red (#c0392b) - candidate for reset",
    ),
    ContrastPair::new(
        color!("#ffffff"),
        color!("#b71c1c"),
        "white on very dark red (#b71c1c) - stronger candidate for reset",
    ),
];

/// The success color after it was darkened.
pub const ADJUSTED_SUCCESS: ContrastPair<'static> = ContrastPair::new(
    color!("#ffffff"),
    color!("#2e7d32"),
    "white on adjusted success (#2e7d32)",
);

/// Pairs currently in use by the interface.
pub const CURRENT_PAIRS: [ContrastPair<'static>; 9] = [
    ContrastPair::new(
        color!("#333333"),
        color!("#ffffff"),
        "text-dark on background-light",
    ),
    ContrastPair::new(
        color!("#ffffff"),
        color!("#0056b3"),
        "white on primary (#0056b3)",
    ),
    ContrastPair::new(
        color!("#ffffff"),
        color!("#1a73e8"),
        "white on secondary (#1a73e8)",
    ),
    ContrastPair::new(
        color!("#ffffff"),
        color!("#1976d2"),
        "white on accent (#1976d2)",
    ),
    ContrastPair::new(
        color!("#ffffff"),
        color!("#0056b3"),
        "white on save button (#0056b3)",
    ),
    ContrastPair::new(
        color!("#ffffff"),
        color!("#c0392b"),
        "white on reset button (#c0392b)",
    ),
    ContrastPair::new(
        color!("#333333"),
        color!("#f5f9ff"),
        "text-dark on hover-bg (#f5f9ff)",
    ),
    ContrastPair::new(
        color!("#757575"),
        color!("#ffffff"),
        "disabled color on white (#757575)",
    ),
    // Also covered by ADJUSTED_SUCCESS, with the colors swapped.
    ContrastPair::new(
        color!("#2e7d32"),
        color!("#ffffff"),
        "success color on white (#2e7d32)",
    ),
];

/// Write the whole audit: candidates, the adjusted color, the banner and the
/// current pairs.
#[instrument(level = "debug", skip_all)]
pub fn write_audit<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "\nCandidate color checks (suggestions):\n")?;
    write_pairs(out, &CANDIDATES)?;

    writeln!(out, "\nAdjusted color checks:")?;
    writeln!(out, "{}", ADJUSTED_SUCCESS.assess().summary_line())?;

    writeln!(out, "{BANNER}\n")?;
    write_pairs(out, &CURRENT_PAIRS)
}
