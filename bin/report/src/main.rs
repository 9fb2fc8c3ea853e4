//! Print the WCAG contrast audit of the interface colors to stdout.

use std::io::{self, Write};

use anyhow::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Diagnostics go to stderr so stdout only ever holds the report.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}

fn main() -> anyhow::Result<()> {
    init_tracing();
    tracing::debug!("contrast-check v{}", env!("CARGO_PKG_VERSION"));

    let mut out = io::stdout().lock();
    wcag_contrast::audit::write_audit(&mut out)
        .context("could not write the contrast audit to stdout")?;
    out.flush().context("could not flush stdout")?;

    Ok(())
}
