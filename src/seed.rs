//! Fixed sample data and the seed-if-empty routine.

use log::{debug, info};
use rusqlite::{params, Connection};

use crate::error::Result;

/// A movie row to insert. The id is assigned by SQLite.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NewMovie<'a> {
    pub title: &'a str,
    pub genre: Option<&'a str>,
    pub release_year: Option<i32>,
}

/// A rental row to insert. `return_date: None` marks an outstanding rental.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NewRental<'a> {
    pub movie_id: i64,
    pub customer_name: Option<&'a str>,
    pub rental_date: &'a str,
    pub return_date: Option<&'a str>,
}

/// What [`seed_if_empty`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedOutcome {
    /// The movie table already had rows; nothing was written.
    Skipped,
    Seeded { movies: usize, rentals: usize },
}

const fn movie(title: &'static str, genre: &'static str, year: i32) -> NewMovie<'static> {
    NewMovie {
        title,
        genre: Some(genre),
        release_year: Some(year),
    }
}

const fn rental(
    movie_id: i64,
    customer: &'static str,
    rented: &'static str,
    returned: Option<&'static str>,
) -> NewRental<'static> {
    NewRental {
        movie_id,
        customer_name: Some(customer),
        rental_date: rented,
        return_date: returned,
    }
}

/// Sample movies, inserted in this order so ids run 1..=10.
pub const SAMPLE_MOVIES: [NewMovie<'static>; 10] = [
    movie("The Shawshank Redemption", "Drama", 1994),
    movie("The Godfather", "Crime", 1972),
    movie("The Dark Knight", "Action", 2008),
    movie("Pulp Fiction", "Crime", 1994),
    movie("Forrest Gump", "Drama", 1994),
    movie("Inception", "Sci-Fi", 2010),
    movie("The Matrix", "Sci-Fi", 1999),
    movie("Avengers: Endgame", "Action", 2019),
    movie("Interstellar", "Sci-Fi", 2014),
    movie("The Lion King", "Animation", 1994),
];

/// Sample rentals referencing [`SAMPLE_MOVIES`] by 1-based position.
pub const SAMPLE_RENTALS: [NewRental<'static>; 20] = [
    rental(1, "Alice", "2025-09-01", Some("2025-09-05")),
    rental(1, "Bob", "2025-09-10", Some("2025-09-13")),
    rental(2, "Carol", "2025-09-01", Some("2025-09-03")),
    rental(2, "Dave", "2025-09-15", None),
    rental(3, "Eve", "2025-08-30", Some("2025-09-02")),
    rental(3, "Frank", "2025-09-02", Some("2025-09-07")),
    rental(3, "Grace", "2025-09-10", Some("2025-09-11")),
    rental(4, "Heidi", "2025-09-03", Some("2025-09-04")),
    rental(5, "Ivan", "2025-09-04", Some("2025-09-07")),
    rental(6, "Judy", "2025-09-05", None),
    rental(7, "Ken", "2025-09-06", Some("2025-09-08")),
    rental(7, "Liam", "2025-09-07", Some("2025-09-10")),
    rental(1, "Mia", "2025-09-11", Some("2025-09-12")),
    rental(8, "Nina", "2025-09-01", Some("2025-09-09")),
    rental(9, "Oscar", "2025-09-02", Some("2025-09-06")),
    rental(10, "Pam", "2025-09-08", Some("2025-09-09")),
    rental(3, "Quinn", "2025-09-12", Some("2025-09-15")),
    rental(2, "Ray", "2025-09-20", Some("2025-09-22")),
    rental(1, "Sam", "2025-09-21", Some("2025-09-25")),
    rental(1, "Tina", "2025-09-25", None),
];

const INSERT_MOVIE: &str = "INSERT INTO movies (title, genre, release_year) VALUES (?1, ?2, ?3)";
const INSERT_RENTAL: &str = "INSERT INTO rentals (movie_id, customer_name, rental_date, return_date)
     VALUES (?1, ?2, ?3, ?4)";

/// Insert the sample movies and rentals unless the movie table has rows.
///
/// Both batches go through one transaction, committed once at the end.
/// No locking is attempted against other processes.
pub fn seed_if_empty(conn: &mut Connection) -> Result<SeedOutcome> {
    let existing = movie_count(conn)?;
    if existing > 0 {
        info!("movies table has {existing} rows, skipping seed");
        return Ok(SeedOutcome::Skipped);
    }

    let tx = conn.transaction()?;
    {
        let mut stmt = tx.prepare(INSERT_MOVIE)?;
        for m in &SAMPLE_MOVIES {
            stmt.execute(params![m.title, m.genre, m.release_year])?;
        }
        let mut stmt = tx.prepare(INSERT_RENTAL)?;
        for r in &SAMPLE_RENTALS {
            stmt.execute(params![r.movie_id, r.customer_name, r.rental_date, r.return_date])?;
        }
    }
    tx.commit()?;

    info!(
        "seeded {} movies and {} rentals",
        SAMPLE_MOVIES.len(),
        SAMPLE_RENTALS.len()
    );
    Ok(SeedOutcome::Seeded {
        movies: SAMPLE_MOVIES.len(),
        rentals: SAMPLE_RENTALS.len(),
    })
}

/// Insert one movie, returning its assigned id.
pub fn insert_movie(conn: &Connection, movie: &NewMovie<'_>) -> Result<i64> {
    conn.execute(
        INSERT_MOVIE,
        params![movie.title, movie.genre, movie.release_year],
    )?;
    let id = conn.last_insert_rowid();
    debug!("inserted movie {id}: {}", movie.title);
    Ok(id)
}

/// Insert one rental, returning its assigned id.
pub fn insert_rental(conn: &Connection, rental: &NewRental<'_>) -> Result<i64> {
    conn.execute(
        INSERT_RENTAL,
        params![
            rental.movie_id,
            rental.customer_name,
            rental.rental_date,
            rental.return_date,
        ],
    )?;
    Ok(conn.last_insert_rowid())
}

pub fn movie_count(conn: &Connection) -> Result<i64> {
    let count = conn.query_row("SELECT COUNT(*) AS cnt FROM movies", [], |row| {
        row.get("cnt")
    })?;
    Ok(count)
}

pub fn rental_count(conn: &Connection) -> Result<i64> {
    let count = conn.query_row("SELECT COUNT(*) AS cnt FROM rentals", [], |row| {
        row.get("cnt")
    })?;
    Ok(count)
}
