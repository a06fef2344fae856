//! Example driving a bar through a batch of simulated work.
//!
//! Run with `RUST_LOG=barnone=debug` to see the lifecycle events on stderr.

use barnone::ProgressBar;
use color_eyre::Result;
use rand::Rng;
use std::thread;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    color_eyre::install()?;
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let total = 60;
    let mut bar = ProgressBar::builder(total)
        .width(30)
        .prefix("Processing")
        .suffix("items")
        .build()?;

    let mut rng = rand::rng();
    for _ in 0..total {
        // Simulate uneven work so the ETA moves around.
        thread::sleep(Duration::from_millis(rng.random_range(20..120)));
        bar.inc()?;
    }
    bar.finish()?;

    println!("Done in {:.1?}.", bar.elapsed());
    Ok(())
}
