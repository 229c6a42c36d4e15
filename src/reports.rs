//! Read-only aggregate reports over movies and rentals.

use log::debug;
use rusqlite::{params, Connection, Row};
use serde::Serialize;

use crate::error::{Result, StoreError};

/// Number of movies shown by the top-rented report when no limit is given.
pub const DEFAULT_TOP_LIMIT: u32 = 5;

/// One row of the top-rented report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TopMovie {
    pub movie_id: i64,
    pub title: String,
    pub genre: Option<String>,
    pub release_year: Option<i32>,
    pub rental_count: i64,
}

impl TopMovie {
    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            movie_id: row.get("movie_id")?,
            title: row.get("title")?,
            genre: row.get("genre")?,
            release_year: row.get("release_year")?,
            rental_count: row.get("rental_count")?,
        })
    }
}

/// Movies ordered by rental count (descending), ties broken by title.
///
/// Unrented movies are included with a count of zero. At most `limit` rows
/// are returned; fewer when the store holds fewer movies.
pub fn top_rented_movies(conn: &Connection, limit: u32) -> Result<Vec<TopMovie>> {
    if limit == 0 {
        return Err(StoreError::InvalidLimit(limit));
    }

    let mut stmt = conn.prepare(
        "SELECT m.id AS movie_id, m.title AS title, m.genre AS genre,
                m.release_year AS release_year,
                COUNT(r.id) AS rental_count
         FROM movies m
         LEFT JOIN rentals r ON r.movie_id = m.id
         GROUP BY m.id
         ORDER BY rental_count DESC, m.title ASC
         LIMIT ?1",
    )?;
    let rows = stmt.query_map(params![limit], TopMovie::from_row)?;
    let movies = rows.collect::<rusqlite::Result<Vec<_>>>()?;
    debug!("top rented report: {} rows (limit {limit})", movies.len());
    Ok(movies)
}

/// Mean length in days of completed rentals.
///
/// Outstanding rentals are left out entirely. Returns `None` when no rental
/// has been returned yet.
pub fn average_rental_duration(conn: &Connection) -> Result<Option<f64>> {
    let avg: Option<f64> = conn.query_row(
        "SELECT AVG(julianday(return_date) - julianday(rental_date)) AS avg_days
         FROM rentals
         WHERE return_date IS NOT NULL",
        [],
        |row| row.get("avg_days"),
    )?;
    debug!("average rental duration: {avg:?}");
    Ok(avg)
}
