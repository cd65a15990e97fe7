use std::io::{self, Write};

use anyhow::{Context, Result};
use tracing::{info, warn};

use itoabench::config::Config;
use itoabench::{bench, verify};

fn main() -> Result<()> {
    let config = Config::load();

    // report goes to stdout, logs to stderr
    tracing_subscriber::fmt()
        .with_env_filter(config.log_level.clone())
        .with_writer(io::stderr)
        .init();

    info!("itoa-bench v{}", env!("CARGO_PKG_VERSION"));

    let stdout = io::stdout();
    let mut out = stdout.lock();

    if config.mode.verifies() {
        let outcomes = verify::verify_all(&mut out, &config.types)
            .context("failed to write verification report")?;
        let failed = outcomes.iter().filter(|o| !o.passed()).count();
        if failed > 0 {
            warn!("{} of {} strategy pairs failed verification", failed, outcomes.len());
        }
    }

    if config.mode.benches() {
        info!(iterations = config.iterations, "benchmarking");
        bench::bench_all(&mut out, &config.types, config.iterations)
            .context("failed to write benchmark report")?;
    }

    out.flush().context("failed to flush report")?;
    Ok(())
}
