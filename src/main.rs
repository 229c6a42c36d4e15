//! movie_rentals
//!
//! Opens (or creates) the rental database, seeds it on first run and prints
//! the top-rented and average-duration reports.

use std::io::{self, Write};

use anyhow::{Context, Result};

use movie_rentals::{run_reports, RentalStore, RentalsConfig};

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let config = RentalsConfig::default();
    let db_path = config.db_path.clone();
    let mut store = RentalStore::open(config)
        .with_context(|| format!("failed to open database {}", db_path.display()))?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    run_reports(&mut store, &mut out)
        .with_context(|| format!("report run against {} failed", db_path.display()))?;
    out.flush()?;

    store.close().context("failed to close database")?;
    Ok(())
}
