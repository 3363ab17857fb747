use anyhow::Result;
use argsum::runner;
use std::io::{self, Write};

fn main() -> Result<()> {
    init_logging();

    let stdout = io::stdout();
    let mut out = stdout.lock();
    runner::run(std::env::args_os(), &mut out)?;
    out.flush()?;

    Ok(())
}

/// Initialize logging to stderr so stdout only carries program output
fn init_logging() {
    // warn+ unless RUST_LOG overrides
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}
