//! Movie rental store backed by SQLite.
//!
//! # Intention
//!
//! - Keep a small `movies`/`rentals` dataset in a single database file.
//! - Seed it once with fixed sample rows.
//! - Answer two read-only reports: most-rented movies and the average
//!   length of completed rentals.
//!
//! # Architectural Boundaries
//!
//! - Storage, schema and queries live here; the binary only sequences them.
//! - Reports never write to the database.

pub mod error;
pub mod present;
pub mod reports;
pub mod schema;
pub mod seed;
pub mod sqlite;

use std::io::Write;

pub use error::{Result, StoreError};
pub use reports::{average_rental_duration, top_rented_movies, TopMovie, DEFAULT_TOP_LIMIT};
pub use schema::{rental_schema, Schema};
pub use seed::{seed_if_empty, NewMovie, NewRental, SeedOutcome};
pub use sqlite::{RentalStore, RentalsConfig, DEFAULT_DB_PATH};

/// Ensure the schema, seed an empty store and write both reports to `out`.
///
/// Output order: seeding line, top-rented table, average-duration line.
pub fn run_reports(store: &mut RentalStore, out: &mut impl Write) -> Result<()> {
    store.initialize_schema()?;
    let outcome = seed_if_empty(store.connection_mut())?;
    present::write_seed_outcome(out, outcome)?;

    let top = top_rented_movies(store.connection(), DEFAULT_TOP_LIMIT)?;
    present::write_top_movies(out, &top)?;

    let avg_days = average_rental_duration(store.connection())?;
    present::write_average_duration(out, avg_days)?;
    Ok(())
}
